//! Integration tests for `TodoService` backed by a real `FileStore` slot.

#![allow(clippy::expect_used, clippy::unwrap_used)]

use std::fs;

use tempfile::TempDir;
use todo_app::{ProjectConfig, TodoService};
use todo_core::{FilterSelector, Priority, TodoList};
use todo_store_file::FileStore;

/// Test helper: open the configured slot inside a fresh data directory.
fn setup_data_dir() -> (TempDir, FileStore) {
    let temp_dir = TempDir::with_prefix("todo-mile-test-").expect("create temp dir");
    let config = ProjectConfig::from_data_dir(temp_dir.path()).expect("load default config");
    let store = FileStore::open(temp_dir.path(), &config.storage.slot).expect("open slot");
    (temp_dir, store)
}

#[test]
fn state_survives_reopening() {
    let (_dir, store) = setup_data_dir();

    let mut service = TodoService::open(store.clone());
    service.add("Buy milk").expect("add");
    service.add("Walk the dog").expect("add");
    service.update(0, "Buy milk", Priority::High).expect("update");
    service.toggle_complete(1).expect("toggle");
    let expected = service.list().clone();
    drop(service);

    let reopened = TodoService::open(store);
    assert_eq!(reopened.list(), &expected);
    let done: Vec<_> = reopened
        .filter_view(FilterSelector::Completed)
        .map(|(index, item)| (index, item.text.clone()))
        .collect();
    assert_eq!(done, vec![(1, "Walk the dog".to_owned())]);
}

#[test]
fn corrupt_slot_is_backed_up_before_fresh_start() {
    let (dir, store) = setup_data_dir();
    let original = "[{\"text\": 42}]";
    fs::write(store.path(), original).expect("write corrupt slot");

    let mut service = TodoService::open(store.clone());
    assert!(service.list().is_empty());

    service.add("Fresh start").expect("add");
    let on_disk = store.load().expect("slot must parse again");
    assert_eq!(on_disk, Some(TodoList::new().add("Fresh start")));

    let backup = fs::read_to_string(dir.path().join("todos.json.corrupt")).expect("backup must exist");
    assert_eq!(backup, original);
}

#[test]
fn mixed_case_priorities_load_without_data_loss() {
    let (_dir, store) = setup_data_dir();
    fs::write(
        store.path(),
        r#"[
            {"text": "Pay rent", "completed": false, "priority": "medium"},
            {"text": "Call bank", "completed": true, "priority": "High"}
        ]"#,
    )
    .expect("write slot");

    let mut service = TodoService::open(store.clone());
    assert_eq!(service.list().len(), 2);
    assert_eq!(service.list().get(1).map(|item| item.priority), Some(Priority::High));

    service.add("New item").expect("add");
    let texts: Vec<_> = store
        .load()
        .expect("load")
        .expect("slot exists")
        .iter()
        .map(|item| item.text.clone())
        .collect();
    assert_eq!(texts, vec!["Pay rent", "Call bank", "New item"]);
}

#[test]
fn declined_add_leaves_slot_untouched() {
    let (_dir, store) = setup_data_dir();
    let mut service = TodoService::open(store.clone());

    assert!(service.add("   ").expect("blank add").is_none());
    assert!(!store.path().exists());
}

#[test]
fn clear_removes_slot_file() {
    let (_dir, store) = setup_data_dir();
    let mut service = TodoService::open(store.clone());
    service.add("Temporary").expect("add");
    assert!(store.path().exists());

    service.clear().expect("clear");

    assert!(!store.path().exists());
    assert!(TodoService::open(store).list().is_empty());
}

#[test]
fn configured_slot_is_used() {
    let temp_dir = TempDir::with_prefix("todo-mile-test-").expect("create temp dir");
    fs::write(
        temp_dir.path().join("config.toml"),
        "[storage]\nslot = \"groceries\"\n",
    )
    .expect("write config");

    let config = ProjectConfig::from_data_dir(temp_dir.path()).expect("load config");
    let store = FileStore::open(temp_dir.path(), &config.storage.slot).expect("open slot");
    let mut service = TodoService::open(store);
    service.add("Eggs").expect("add");

    assert!(temp_dir.path().join("groceries.json").exists());
}
