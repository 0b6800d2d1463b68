use evaluator::{default_log_path, load_valid_users, EvaluatorError};
use serde_json::{json, Value};
use std::fs;
use std::path::Path;
use tempfile::tempdir;

fn write_json(path: &Path, value: &Value) {
    fs::write(path, serde_json::to_string(value).unwrap()).unwrap();
}

fn log_lines(path: &Path) -> Vec<String> {
    fs::read_to_string(path)
        .unwrap()
        .lines()
        .map(str::to_string)
        .collect()
}

#[test]
fn test_missing_file_logs_invalid_json() {
    let temp_dir = tempdir().unwrap();
    let json_path = temp_dir.path().join("nope.json");
    let log_path = temp_dir.path().join("errors.log");

    let users = load_valid_users(&json_path, Some(log_path.as_path())).unwrap();

    assert!(users.is_empty());
    assert_eq!(log_lines(&log_path), vec!["invalid json"]);
}

#[test]
fn test_malformed_json_logs_invalid_json() {
    let temp_dir = tempdir().unwrap();
    let json_path = temp_dir.path().join("users.json");
    let log_path = temp_dir.path().join("errors.log");
    fs::write(&json_path, "[{\"id\": 1, \"name\": \"A\"").unwrap();

    let users = load_valid_users(&json_path, Some(log_path.as_path())).unwrap();

    assert!(users.is_empty());
    assert_eq!(log_lines(&log_path), vec!["invalid json"]);
}

#[test]
fn test_non_utf8_file_logs_invalid_json() {
    let temp_dir = tempdir().unwrap();
    let json_path = temp_dir.path().join("users.json");
    let log_path = temp_dir.path().join("errors.log");
    fs::write(&json_path, [0xff, 0xfe, 0x5b, 0x5d]).unwrap();

    let users = load_valid_users(&json_path, Some(log_path.as_path())).unwrap();

    assert!(users.is_empty());
    assert_eq!(log_lines(&log_path), vec!["invalid json"]);
}

#[test]
fn test_object_root_is_rejected() {
    let temp_dir = tempdir().unwrap();
    let json_path = temp_dir.path().join("users.json");
    let log_path = temp_dir.path().join("errors.log");
    write_json(&json_path, &json!({"a": 1}));

    let users = load_valid_users(&json_path, Some(log_path.as_path())).unwrap();

    assert!(users.is_empty());
    assert_eq!(log_lines(&log_path), vec!["root json must be a list"]);
}

#[test]
fn test_wrong_id_type_is_logged_and_skipped() {
    let temp_dir = tempdir().unwrap();
    let json_path = temp_dir.path().join("users.json");
    let log_path = temp_dir.path().join("errors.log");
    write_json(
        &json_path,
        &json!([
            {"id": 1, "name": "A", "email": "a@x.com"},
            {"id": "bad", "name": "B", "email": "b@x.com"}
        ]),
    );

    let users = load_valid_users(&json_path, Some(log_path.as_path())).unwrap();

    assert_eq!(users.len(), 1);
    assert_eq!(users[0].id(), Some(1));
    assert_eq!(users[0].name(), Some("A"));
    assert_eq!(users[0].email(), Some("a@x.com"));
    assert_eq!(
        log_lines(&log_path),
        vec!["[1] field 'id' has wrong type: str, expected int"]
    );
}

#[test]
fn test_missing_id_and_int_email_logged_in_field_order() {
    let temp_dir = tempdir().unwrap();
    let json_path = temp_dir.path().join("users.json");
    let log_path = temp_dir.path().join("errors.log");
    write_json(&json_path, &json!([{"name": "A", "email": 42}]));

    let users = load_valid_users(&json_path, Some(log_path.as_path())).unwrap();

    assert!(users.is_empty());
    assert_eq!(
        log_lines(&log_path),
        vec![
            "[0] missing field 'id'",
            "[0] field 'email' has wrong type: int, expected str",
        ]
    );
}

#[test]
fn test_default_log_lands_next_to_input() {
    let temp_dir = tempdir().unwrap();
    let json_path = temp_dir.path().join("users.json");
    write_json(&json_path, &json!([1]));

    let users = load_valid_users(&json_path, None).unwrap();

    assert!(users.is_empty());
    let log_path = default_log_path(&json_path);
    assert_eq!(log_path, temp_dir.path().join("errors.log"));
    assert_eq!(
        log_lines(&log_path),
        vec!["[0] item must be an object, got int"]
    );
}

#[test]
fn test_log_directories_are_created_and_runs_append() {
    let temp_dir = tempdir().unwrap();
    let json_path = temp_dir.path().join("users.json");
    let log_path = temp_dir.path().join("logs").join("run").join("errors.log");
    write_json(&json_path, &json!({"a": 1}));

    load_valid_users(&json_path, Some(log_path.as_path())).unwrap();
    load_valid_users(&json_path, Some(log_path.as_path())).unwrap();

    assert_eq!(
        log_lines(&log_path),
        vec!["root json must be a list", "root json must be a list"]
    );
}

#[test]
fn test_repeated_runs_return_the_same_records() {
    let temp_dir = tempdir().unwrap();
    let json_path = temp_dir.path().join("users.json");
    write_json(
        &json_path,
        &json!([
            {"id": 2, "name": "B", "email": "b@x.com", "team": "core"},
            {"id": 1.5, "name": "X", "email": "x@x.com"},
            {"id": 1, "name": "A", "email": "a@x.com"}
        ]),
    );

    let one_log = temp_dir.path().join("one.log");
    let two_log = temp_dir.path().join("two.log");
    let first = load_valid_users(&json_path, Some(one_log.as_path())).unwrap();
    let second = load_valid_users(&json_path, Some(two_log.as_path())).unwrap();

    assert_eq!(first, second);
    let ids: Vec<_> = first.iter().map(|u| u.id()).collect();
    assert_eq!(ids, vec![Some(2), Some(1)]);
    assert_eq!(first[0].get("team"), Some(&json!("core")));
    assert_eq!(
        log_lines(&one_log),
        vec!["[1] field 'id' has wrong type: float, expected int"]
    );
}

#[test]
fn test_unusable_log_path_is_an_error() {
    let temp_dir = tempdir().unwrap();
    let json_path = temp_dir.path().join("users.json");
    write_json(&json_path, &json!([]));
    let blocker = temp_dir.path().join("blocker");
    fs::write(&blocker, "file, not a directory").unwrap();

    let result = load_valid_users(&json_path, Some(blocker.join("errors.log").as_path()));

    assert!(matches!(result, Err(EvaluatorError::Sink(_))));
}

#[cfg(target_os = "linux")]
#[test]
fn test_log_write_failure_mid_run_is_reported() {
    if !Path::new("/dev/full").exists() {
        println!("Skipping write failure test: /dev/full not available");
        return;
    }

    let temp_dir = tempdir().unwrap();
    let json_path = temp_dir.path().join("users.json");
    // Enough failures to overflow the sink's write buffer before the run ends
    let items: Vec<Value> = (0..2000).map(|i| json!(i)).collect();
    write_json(&json_path, &Value::Array(items));

    let result = load_valid_users(&json_path, Some(Path::new("/dev/full")));

    match result {
        Err(EvaluatorError::Write { path, .. }) => {
            assert_eq!(path, Path::new("/dev/full"));
        }
        other => panic!("expected a write error, got {:?}", other),
    }
}
