use super::*;

// =============================================================
// UserRecord
// =============================================================

#[test]
fn user_record_decodes_backend_row() {
    let row: UserRecord = serde_json::from_str(
        r#"{
            "id": 7,
            "username": "alice",
            "password": "x",
            "name": "Alice",
            "email": "a@x.com",
            "company": "Acme",
            "role": "admin"
        }"#,
    )
    .unwrap();
    assert_eq!(row.id, 7);
    assert_eq!(row.username, "alice");
    assert_eq!(row.name, "Alice");
    assert_eq!(row.email, "a@x.com");
    assert_eq!(row.company, "Acme");
    assert_eq!(row.role, "admin");
}

#[test]
fn user_record_never_serializes_a_password() {
    let row = UserRecord {
        id: 1,
        username: "bob".to_owned(),
        name: "Bob".to_owned(),
        email: "b@x.com".to_owned(),
        company: "Acme".to_owned(),
        role: "user".to_owned(),
    };
    let value = serde_json::to_value(&row).unwrap();
    assert!(value.get("password").is_none());
}

#[test]
fn user_record_missing_field_is_a_decode_error() {
    let result = serde_json::from_str::<UserRecord>(r#"{"id": 1, "username": "bob"}"#);
    assert!(result.is_err());
}

// =============================================================
// Workspace
// =============================================================

#[test]
fn workspace_decodes_camel_case_row() {
    let row: Workspace = serde_json::from_str(
        r#"{
            "id": 3,
            "name": "Production",
            "userId": 7,
            "key": "PROD",
            "type": "standard",
            "createdAt": "2024-01-15T09:00:00Z",
            "createdBy": "alice",
            "maxApps": 10,
            "assignedCount": 4,
            "unassignedCount": 2,
            "assigned": true
        }"#,
    )
    .unwrap();
    assert_eq!(row.id, 3);
    assert_eq!(row.user_id, 7);
    assert_eq!(row.kind, "standard");
    assert_eq!(row.max_apps, 10);
    assert_eq!(row.assigned_count, 4);
    assert_eq!(row.unassigned_count, 2);
    assert!(row.assigned);
}

#[test]
fn workspace_serializes_kind_as_type() {
    let row = Workspace {
        id: 3,
        name: "Production".to_owned(),
        user_id: 7,
        key: "PROD".to_owned(),
        kind: "standard".to_owned(),
        created_at: "2024-01-15T09:00:00Z".to_owned(),
        created_by: "alice".to_owned(),
        max_apps: 10,
        assigned_count: 4,
        unassigned_count: 2,
        assigned: true,
    };
    let value = serde_json::to_value(&row).unwrap();
    assert_eq!(value["type"], "standard");
    assert_eq!(value["userId"], 7);
    assert!(value.get("kind").is_none());
}
