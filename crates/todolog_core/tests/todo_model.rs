use todolog_core::{Todo, TodoValidationError};
use uuid::Uuid;

#[test]
fn todo_new_sets_defaults() {
    let todo = Todo::new("buy milk", None);

    assert!(!todo.id.is_nil());
    assert_eq!(todo.title, "buy milk");
    assert_eq!(todo.description, None);
    assert!(!todo.completed);
    assert!(todo.created_at > 0);
    assert!(todo.validate().is_ok());
}

#[test]
fn todo_new_keeps_description() {
    let todo = Todo::new("water plants", Some("balcony first".to_string()));
    assert_eq!(todo.description.as_deref(), Some("balcony first"));
}

#[test]
fn every_new_todo_gets_a_distinct_id() {
    let first = Todo::new("one", None);
    let second = Todo::new("two", None);
    assert_ne!(first.id, second.id);
}

#[test]
fn validate_rejects_nil_id() {
    let todo = Todo::with_id(Uuid::nil(), "valid title", None);
    assert_eq!(todo.validate().unwrap_err(), TodoValidationError::NilId);
}

#[test]
fn validate_rejects_whitespace_only_title() {
    let todo = Todo::new("   ", None);
    assert_eq!(todo.validate().unwrap_err(), TodoValidationError::EmptyTitle);
}

#[test]
fn todo_serialization_uses_expected_wire_fields() {
    let todo_id = Uuid::parse_str("11111111-2222-4333-8444-555555555555").unwrap();
    let mut todo = Todo::with_id(todo_id, "ship release", Some("tag and publish".to_string()));
    todo.completed = true;
    todo.created_at = 1_700_000_000_000;

    let json = serde_json::to_value(&todo).unwrap();
    assert_eq!(json["id"], todo_id.to_string());
    assert_eq!(json["title"], "ship release");
    assert_eq!(json["description"], "tag and publish");
    assert_eq!(json["completed"], true);
    assert_eq!(json["createdAt"], 1_700_000_000_000_i64);
    assert!(json.get("created_at").is_none());

    let decoded: Todo = serde_json::from_value(json).unwrap();
    assert_eq!(decoded, todo);
}

#[test]
fn absent_description_is_omitted_from_wire_shape() {
    let todo = Todo::new("wire check", None);
    let json = serde_json::to_value(&todo).unwrap();
    assert!(json.get("description").is_none());

    let decoded: Todo = serde_json::from_value(json).unwrap();
    assert_eq!(decoded.description, None);
}
