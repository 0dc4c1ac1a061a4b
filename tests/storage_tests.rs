use std::fs;

use task_tracker::error::TrackerError;
use task_tracker::models::Status;
use task_tracker::ops;
use task_tracker::storage::Store;
use tempfile::tempdir;

#[test]
fn test_load_creates_missing_file() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("tasks.json");
    let store = Store::new(&path);

    let tasks = store.load().unwrap();
    assert!(tasks.is_empty());
    assert_eq!(fs::read_to_string(&path).unwrap(), "[]");
}

#[test]
fn test_load_creates_missing_parent_directory() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("nested").join("tasks.json");
    let store = Store::new(&path);

    assert!(store.load().unwrap().is_empty());
    assert!(path.exists());
}

#[test]
fn test_whitespace_file_is_empty_collection() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("tasks.json");
    fs::write(&path, "  \n\t ").unwrap();

    let store = Store::new(&path);
    assert!(store.load().unwrap().is_empty());
}

#[test]
fn test_malformed_content_is_format_error() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("tasks.json");
    fs::write(&path, "{not an array}").unwrap();

    let store = Store::new(&path);
    let err = store.load().unwrap_err();
    assert!(matches!(err, TrackerError::Format(_)));
}

#[test]
fn test_save_then_load_round_trips() {
    let dir = tempdir().unwrap();
    let store = Store::new(dir.path().join("tasks.json"));

    let mut tasks = Vec::new();
    ops::create(&mut tasks, "untouched").unwrap();
    ops::create(&mut tasks, "in flight").unwrap();
    ops::set_status(&mut tasks, 2, Status::InProgress).unwrap();

    store.save(&tasks).unwrap();
    let loaded = store.load().unwrap();
    assert_eq!(loaded, tasks);
    assert!(loaded[0].updated_at.is_none());
    assert!(loaded[1].updated_at.is_some());
}

#[test]
fn test_save_overwrites_previous_content() {
    let dir = tempdir().unwrap();
    let store = Store::new(dir.path().join("tasks.json"));

    let mut tasks = Vec::new();
    ops::create(&mut tasks, "one").unwrap();
    ops::create(&mut tasks, "two").unwrap();
    store.save(&tasks).unwrap();

    ops::remove(&mut tasks, 1).unwrap();
    store.save(&tasks).unwrap();

    let loaded = store.load().unwrap();
    assert_eq!(loaded.len(), 1);
    assert_eq!(loaded[0].id, 2);
}

#[test]
fn test_save_leaves_no_temp_file_behind() {
    let dir = tempdir().unwrap();
    let store = Store::new(dir.path().join("tasks.json"));

    let mut tasks = Vec::new();
    ops::create(&mut tasks, "one").unwrap();
    store.save(&tasks).unwrap();

    let entries: Vec<_> = fs::read_dir(dir.path())
        .unwrap()
        .map(|e| e.unwrap().file_name())
        .collect();
    assert_eq!(entries, vec!["tasks.json"]);
}

#[cfg(unix)]
#[test]
fn test_storage_file_is_owner_only() {
    use std::os::unix::fs::PermissionsExt;

    let dir = tempdir().unwrap();
    let path = dir.path().join("tasks.json");
    let store = Store::new(&path);
    store.load().unwrap();

    let mode = fs::metadata(&path).unwrap().permissions().mode();
    assert_eq!(mode & 0o777, 0o600);
}

#[test]
fn test_status_literals_round_trip() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("tasks.json");
    let store = Store::new(&path);

    let mut tasks = Vec::new();
    ops::create(&mut tasks, "a").unwrap();
    ops::create(&mut tasks, "b").unwrap();
    ops::create(&mut tasks, "c").unwrap();
    ops::set_status(&mut tasks, 2, Status::InProgress).unwrap();
    ops::set_status(&mut tasks, 3, Status::Done).unwrap();
    store.save(&tasks).unwrap();

    let raw = fs::read_to_string(&path).unwrap();
    assert!(raw.contains("\"Todo\""));
    assert!(raw.contains("\"InProgress\""));
    assert!(raw.contains("\"Done\""));
    assert_eq!(store.load().unwrap(), tasks);
}
