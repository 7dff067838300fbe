//! Integration tests for file-backed sessions

use campus_portal::auth::{AuthError, CredentialVerifier, DemoVerifier};
use campus_portal::models::{Credentials, Registration, SessionRecord, UserProfile};
use campus_portal::session::{SessionError, SessionStore, PROFILE_KEY, TOKEN_KEY};
use campus_portal::storage::{FileStore, KeyValueStore};
use std::fs;
use tempfile::TempDir;

fn file_sessions(dir: &TempDir) -> SessionStore<FileStore, DemoVerifier> {
    SessionStore::new(
        FileStore::new(dir.path().join("data").join("session.json")),
        DemoVerifier::new(),
    )
}

fn registration() -> Registration {
    Registration {
        full_name: "Jane Achieng".to_string(),
        email: "jane@student.kisiipoly.ac.ke".to_string(),
        phone: "+254 711 000 000".to_string(),
        student_id: "KP/2024/001".to_string(),
        course: "Diploma in Business Management".to_string(),
        password: "secret1".to_string(),
        confirm_password: "secret1".to_string(),
    }
}

/// Verifier that refuses every student
struct Closed;

impl CredentialVerifier for Closed {
    fn verify(&self, _credentials: &Credentials) -> Result<SessionRecord, AuthError> {
        Err(AuthError::Rejected("unknown student".to_string()))
    }

    fn enroll(&self, _registration: &Registration) -> Result<SessionRecord, AuthError> {
        Err(AuthError::Unavailable)
    }
}

#[test]
fn test_fresh_install_has_no_session() {
    let dir = TempDir::new().unwrap();
    let sessions = file_sessions(&dir);
    assert!(sessions.load().is_none());
    assert!(!sessions.is_logged_in());
}

#[test]
fn test_login_survives_reopen() {
    let dir = TempDir::new().unwrap();
    let record = file_sessions(&dir)
        .login(&Credentials::new("KP123", "pw"))
        .expect("login should succeed");

    assert_eq!(record.token, "mock-token-123");
    assert_eq!(record.profile.name, "John Doe");
    assert_eq!(record.student_id(), "KP123");

    // A new store over the same file sees the same session
    let reopened = file_sessions(&dir);
    assert_eq!(reopened.load(), Some(record));
}

#[test]
fn test_session_file_uses_portal_keys() {
    let dir = TempDir::new().unwrap();
    let sessions = file_sessions(&dir);
    sessions.login(&Credentials::new("KP123", "pw")).unwrap();

    let raw = fs::read_to_string(sessions.store().path()).unwrap();
    let json: serde_json::Value = serde_json::from_str(&raw).unwrap();
    assert_eq!(json[TOKEN_KEY], "mock-token-123");

    let profile: UserProfile =
        serde_json::from_str(json[PROFILE_KEY].as_str().unwrap()).unwrap();
    assert_eq!(profile.student_id, "KP123");
    assert!(json[PROFILE_KEY].as_str().unwrap().contains("studentId"));
}

#[test]
fn test_logout_removes_session_file() {
    let dir = TempDir::new().unwrap();
    let sessions = file_sessions(&dir);
    sessions.login(&Credentials::new("KP123", "pw")).unwrap();
    assert!(sessions.store().path().exists());

    sessions.logout().unwrap();
    assert!(sessions.load().is_none());
    assert!(!sessions.store().path().exists());

    // Logging out again is not an error
    sessions.logout().unwrap();
}

#[test]
fn test_second_login_replaces_first() {
    let dir = TempDir::new().unwrap();
    let sessions = file_sessions(&dir);
    sessions.login(&Credentials::new("KP001", "pw")).unwrap();
    sessions.login(&Credentials::new("KP002", "pw")).unwrap();

    assert_eq!(sessions.load().unwrap().student_id(), "KP002");
}

#[test]
fn test_register_logs_in_with_form_details() {
    let dir = TempDir::new().unwrap();
    let sessions = file_sessions(&dir);
    let record = sessions.register(&registration()).unwrap();

    assert_eq!(record.profile.name, "Jane Achieng");
    assert_eq!(record.profile.year, "Year 1");
    assert_eq!(sessions.load(), Some(record));
}

#[test]
fn test_register_validation_order() {
    let dir = TempDir::new().unwrap();
    let sessions = file_sessions(&dir);

    let missing = Registration {
        phone: String::new(),
        password: "1".to_string(),
        confirm_password: "2".to_string(),
        ..registration()
    };
    assert!(matches!(
        sessions.register(&missing),
        Err(SessionError::Auth(AuthError::MissingFields))
    ));

    let mismatch = Registration {
        password: "1".to_string(),
        confirm_password: "2".to_string(),
        ..registration()
    };
    assert!(matches!(
        sessions.register(&mismatch),
        Err(SessionError::Auth(AuthError::PasswordMismatch))
    ));

    let short = Registration {
        password: "12345".to_string(),
        confirm_password: "12345".to_string(),
        ..registration()
    };
    let err = sessions.register(&short).unwrap_err();
    assert_eq!(err.to_string(), "Password must be at least 6 characters long");

    assert!(sessions.load().is_none());
    assert!(!sessions.store().path().exists());
}

#[test]
fn test_rejected_login_keeps_existing_session() {
    let dir = TempDir::new().unwrap();
    file_sessions(&dir)
        .login(&Credentials::new("KP123", "pw"))
        .unwrap();

    let closed = SessionStore::new(
        FileStore::new(dir.path().join("data").join("session.json")),
        Closed,
    );
    let err = closed.login(&Credentials::new("KP999", "wrong")).unwrap_err();
    assert_eq!(err.to_string(), "Login failed: unknown student");
    assert!(closed.register(&registration()).is_err());

    assert_eq!(closed.load().unwrap().student_id(), "KP123");
}

#[test]
fn test_corrupt_file_reads_as_guest_and_is_replaced_on_login() {
    let dir = TempDir::new().unwrap();
    let sessions = file_sessions(&dir);
    let path = sessions.store().path().to_path_buf();
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(&path, "{not json").unwrap();

    assert!(sessions.load().is_none());

    sessions.login(&Credentials::new("KP123", "pw")).unwrap();
    assert_eq!(sessions.load().unwrap().student_id(), "KP123");
}

#[test]
fn test_unrelated_keys_survive_logout() {
    let dir = TempDir::new().unwrap();
    let sessions = file_sessions(&dir);
    sessions
        .store()
        .set("theme", "dark".to_string())
        .unwrap();
    sessions.login(&Credentials::new("KP123", "pw")).unwrap();

    sessions.logout().unwrap();
    assert_eq!(
        sessions.store().get("theme").unwrap().as_deref(),
        Some("dark")
    );
    assert!(sessions.store().get(TOKEN_KEY).unwrap().is_none());
}
