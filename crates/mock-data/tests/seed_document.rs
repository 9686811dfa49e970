//! Integration tests for seed document loading and validation.

#![expect(
    clippy::expect_used,
    reason = "test code uses expect for clear failure messages"
)]

use camino::Utf8PathBuf;
use mock_data::{BUILTIN_SEED_JSON, SeedDocument, SeedError, SeedResourceStatus, SeedRole};
use rstest::rstest;

const USERS: &str = r#"[
    {"id": "1", "name": "Admin User", "email": "admin@example.com", "role": "admin"},
    {"id": "2", "name": "John Employee", "email": "john@example.com", "role": "employee"}
]"#;

const RESOURCE: &str = r#"{
    "id": "1",
    "title": "Company Laptop",
    "description": "MacBook Pro",
    "type": "equipment",
    "status": "assigned",
    "createdAt": "2023-01-10T00:00:00Z",
    "updatedAt": "2023-01-15T00:00:00Z"
}"#;

fn document(users: &str, resources: &str, assignments: &str) -> String {
    format!(
        r#"{{"version": 1, "users": {users}, "resources": {resources}, "assignments": {assignments}}}"#
    )
}

#[test]
fn parses_builtin_fixture_records() {
    let seed = SeedDocument::from_json(BUILTIN_SEED_JSON).expect("valid seed");

    let laptop = seed
        .resources()
        .iter()
        .find(|resource| resource.id == "1")
        .expect("laptop seeded");
    assert_eq!(laptop.title, "Company Laptop");
    assert_eq!(laptop.kind, "equipment");
    assert_eq!(laptop.status, SeedResourceStatus::Assigned);

    let john = seed
        .users()
        .iter()
        .find(|user| user.id == "2")
        .expect("john seeded");
    assert_eq!(john.role, SeedRole::Employee);
    assert!(john.avatar.is_some());
}

#[rstest]
#[case::malformed_json("not json")]
#[case::missing_users(r#"{"version": 1}"#)]
#[case::unknown_role(
    r#"{"version": 1, "users": [{"id": "1", "name": "A", "email": "a@b", "role": "owner"}]}"#
)]
#[case::bad_timestamp(
    r#"{"version": 1, "users": [{"id": "1", "name": "A", "email": "a@b", "role": "admin"}],
        "resources": [{"id": "1", "title": "t", "description": "d", "type": "x",
        "status": "available", "createdAt": "yesterday", "updatedAt": "today"}]}"#
)]
fn rejects_unparseable_documents(#[case] json: &str) {
    let result = SeedDocument::from_json(json);
    assert!(matches!(result, Err(SeedError::ParseError { .. })));
}

#[rstest]
#[case::unsupported_version(
    r#"{"version": 2, "users": []}"#.to_owned(),
    SeedError::UnsupportedVersion { expected: 1, actual: 2 }
)]
#[case::no_users(document("[]", "[]", "[]"), SeedError::EmptyUsers)]
#[case::duplicate_email(
    document(
        r#"[{"id": "1", "name": "A", "email": "a@example.com", "role": "admin"},
            {"id": "2", "name": "B", "email": "a@example.com", "role": "employee"}]"#,
        "[]",
        "[]",
    ),
    SeedError::DuplicateEmail { email: "a@example.com".to_owned() }
)]
#[case::invalid_email(
    document(r#"[{"id": "1", "name": "A", "email": "nope", "role": "admin"}]"#, "[]", "[]"),
    SeedError::InvalidEmail { index: 0, value: "nope".to_owned() }
)]
#[case::blank_name(
    document(r#"[{"id": "1", "name": "  ", "email": "a@b", "role": "admin"}]"#, "[]", "[]"),
    SeedError::BlankField { entity: "user", index: 0, field: "name" }
)]
#[case::duplicate_resource(
    document(USERS, &format!("[{RESOURCE}, {RESOURCE}]"), "[]"),
    SeedError::DuplicateId { entity: "resource", id: "1".to_owned() }
)]
#[case::unknown_user(
    document(
        USERS,
        &format!("[{RESOURCE}]"),
        r#"[{"id": "1", "userId": "9", "resourceId": "1", "assignedAt": "2023-01-15T00:00:00Z"}]"#,
    ),
    SeedError::UnknownUser { assignment_id: "1".to_owned(), user_id: "9".to_owned() }
)]
#[case::unknown_resource(
    document(
        USERS,
        &format!("[{RESOURCE}]"),
        r#"[{"id": "1", "userId": "2", "resourceId": "7", "assignedAt": "2023-01-15T00:00:00Z"}]"#,
    ),
    SeedError::UnknownResource { assignment_id: "1".to_owned(), resource_id: "7".to_owned() }
)]
#[case::double_assignment(
    document(
        USERS,
        &format!("[{RESOURCE}]"),
        r#"[{"id": "1", "userId": "2", "resourceId": "1", "assignedAt": "2023-01-15T00:00:00Z"},
            {"id": "2", "userId": "1", "resourceId": "1", "assignedAt": "2023-01-16T00:00:00Z"}]"#,
    ),
    SeedError::ResourceAssignedTwice { resource_id: "1".to_owned() }
)]
fn rejects_inconsistent_documents(#[case] json: String, #[case] expected: SeedError) {
    assert_eq!(SeedDocument::from_json(&json), Err(expected));
}

#[test]
fn rejects_resource_updated_before_creation() {
    let resource = RESOURCE.replace("2023-01-15T00:00:00Z", "2022-12-31T00:00:00Z");
    let json = document(USERS, &format!("[{resource}]"), "[]");
    assert_eq!(
        SeedDocument::from_json(&json),
        Err(SeedError::UpdatedBeforeCreated { id: "1".to_owned() })
    );
}

#[test]
fn loads_document_from_file() {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = Utf8PathBuf::from_path_buf(dir.path().join("seed.json")).expect("utf-8 temp path");
    std::fs::write(&path, BUILTIN_SEED_JSON).expect("write seed");

    let seed = SeedDocument::from_path(&path).expect("seed loads");
    assert_eq!(seed.users().len(), 3);
}

#[test]
fn missing_file_reports_io_error() {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = Utf8PathBuf::from_path_buf(dir.path().join("absent.json")).expect("utf-8 temp path");

    let result = SeedDocument::from_path(&path);
    assert!(matches!(result, Err(SeedError::IoError { path: reported, .. }) if reported == path));
}
