#![cfg(not(target_arch = "wasm32"))]

use assert_cmd::Command;
use predicates::prelude::*;
use std::path::Path;

fn todos(home: &Path) -> Command {
    let mut cmd = Command::cargo_bin("todos").unwrap();
    cmd.env("TODOS_HOME", home).env_remove("RUST_LOG");
    cmd
}

fn stored_ids(home: &Path) -> Vec<String> {
    let raw = std::fs::read_to_string(home.join("todo-list.json")).unwrap();
    let list: serde_json::Value = serde_json::from_str(&raw).unwrap();
    list.as_array()
        .unwrap()
        .iter()
        .map(|todo| todo["id"].to_string())
        .collect()
}

#[test]
fn test_add_list_done_delete() {
    let temp_dir = tempfile::tempdir().unwrap();
    let home = temp_dir.path();

    todos(home)
        .args(["add", "Buy milk", "2% organic"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Todo created: Buy milk"));

    todos(home)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("Buy milk"))
        .stdout(predicate::str::contains("2% organic"));

    todos(home)
        .args(["list", "--filter", "bread"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No tasks yet"));

    let ids = stored_ids(home);
    assert_eq!(ids.len(), 1);

    todos(home)
        .args(["done", &ids[0]])
        .assert()
        .success()
        .stdout(predicate::str::contains("Todo done: Buy milk"));

    let raw = std::fs::read_to_string(home.join("todo-list.json")).unwrap();
    assert!(raw.contains(r#""completed":true"#));

    todos(home)
        .args(["rm", &ids[0]])
        .assert()
        .success()
        .stdout(predicate::str::contains("Todo deleted: Buy milk"));

    todos(home)
        .assert()
        .success()
        .stdout(predicate::str::contains("No tasks yet"));
}

#[test]
fn test_invalid_input_is_rejected() {
    let temp_dir = tempfile::tempdir().unwrap();
    let home = temp_dir.path();

    let long_title = "x".repeat(33);
    todos(home)
        .args(["add", long_title.as_str(), ""])
        .assert()
        .failure()
        .stderr(predicate::str::contains("max length 32"))
        .stderr(predicate::str::contains("Required"));

    assert!(stored_ids(home).is_empty());
}

#[test]
fn test_edit_keeps_omitted_fields() {
    let temp_dir = tempfile::tempdir().unwrap();
    let home = temp_dir.path();

    todos(home)
        .args(["add", "Buy milk", "2% organic"])
        .assert()
        .success();
    let ids = stored_ids(home);

    todos(home)
        .args(["edit", &ids[0], "--title", "Buy oat milk"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Todo updated: Buy oat milk"));

    todos(home)
        .arg("ls")
        .assert()
        .success()
        .stdout(predicate::str::contains("Buy oat milk"))
        .stdout(predicate::str::contains("2% organic"));

    todos(home)
        .args(["edit", "0.123", "--title", "Nope"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Todo not found"));

    todos(home)
        .args(["done", "0.5"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No todo with id 0.5"));

    todos(home)
        .args(["done", "not-an-id"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid todo id"));
}

#[test]
fn test_render_page() {
    let temp_dir = tempfile::tempdir().unwrap();
    let home = temp_dir.path();

    todos(home)
        .args(["config", "page-title", "Groceries"])
        .assert()
        .success();

    todos(home)
        .args(["add", "<b>Bold</b>", "tags & things"])
        .assert()
        .success();

    todos(home)
        .arg("render")
        .assert()
        .success()
        .stdout(predicate::str::contains("<title>Groceries</title>"))
        .stdout(predicate::str::contains("&lt;b&gt;Bold"))
        .stdout(predicate::str::contains("tags &amp; things"))
        .stdout(predicate::str::contains(r#"id="todo-form""#));

    let out = home.join("page.html");
    todos(home)
        .args(["render", "--filter", "nothing-matches", "--out"])
        .arg(&out)
        .assert()
        .success();
    let html = std::fs::read_to_string(&out).unwrap();
    assert!(html.contains("<h2>No tasks yet</h2>"));
    assert!(html.contains(r#"value="nothing-matches""#));
}

#[test]
fn test_config_storage_key() {
    let temp_dir = tempfile::tempdir().unwrap();
    let home = temp_dir.path();

    todos(home)
        .args(["config", "storage-key", "chores"])
        .assert()
        .success();

    todos(home)
        .args(["add", "Sweep", "Kitchen floor"])
        .assert()
        .success();

    assert!(home.join("chores.json").exists());

    todos(home)
        .arg("config")
        .assert()
        .success()
        .stdout(predicate::str::contains("storage-key: chores"))
        .stdout(predicate::str::contains("page-title: Todo list"));
}

#[test]
fn test_corrupt_store_fails() {
    let temp_dir = tempfile::tempdir().unwrap();
    let home = temp_dir.path();
    std::fs::write(home.join("todo-list.json"), "{broken").unwrap();

    todos(home)
        .arg("list")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Serialization error"));
}
