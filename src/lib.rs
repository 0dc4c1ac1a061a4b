pub mod commands;
pub mod error;
pub mod models;
pub mod ops;
pub mod storage;
