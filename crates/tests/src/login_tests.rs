use pretty_assertions::assert_eq;
use session::{SessionManager, SessionPhase, TokioClock};
use shared_types::{sections_for, AuthError, Section, SessionConfig, UserRole};
use std::sync::Arc;
use std::time::Duration;

use crate::common::{self, ADMIN, CONSULTANT, FINANCE, PM};

#[tokio::test]
async fn test_admin_login_yields_admin_sections() {
    let (manager, store, identity) = common::logged_in(ADMIN).await;

    assert_eq!(identity.role, UserRole::Admin);
    assert_eq!(identity.name, "Admin User");
    assert_eq!(manager.phase(), SessionPhase::Authenticated(identity.clone()));
    assert_eq!(
        sections_for(identity.role),
        vec![
            Section::Overview,
            Section::Consultants,
            Section::Projects,
            Section::Reports
        ]
    );
    assert!(common::stored_raw(store.as_ref()).is_some());
}

#[tokio::test]
async fn test_wrong_password_rejected_and_nothing_stored() {
    let (manager, store) = common::test_session();

    let err = manager
        .login("admin@company.com", "wrongpass")
        .await
        .unwrap_err();

    assert_eq!(err, AuthError::InvalidCredentials);
    assert_eq!(err.to_string(), "Invalid credentials");
    assert_eq!(manager.current(), None);
    assert_eq!(common::stored_raw(store.as_ref()), None);
}

#[tokio::test]
async fn test_unknown_email_indistinguishable_from_bad_password() {
    let (manager, _store) = common::test_session();
    let unknown = manager.login("ghost@company.com", "admin123").await;
    let bad_pw = manager.login("admin@company.com", "nope").await;
    assert_eq!(unknown, bad_pw);
}

#[tokio::test]
async fn test_each_demo_account_gets_its_role() {
    let cases = [
        (ADMIN, UserRole::Admin),
        (PM, UserRole::ProjectManager),
        (CONSULTANT, UserRole::Consultant),
        (FINANCE, UserRole::FinanceHead),
    ];
    for (account, role) in cases {
        let (_manager, _store, identity) = common::logged_in(account).await;
        assert_eq!(identity.role, role, "{}", account.0);
        assert_eq!(identity.email, account.0);
    }
}

#[tokio::test]
async fn test_loading_clears_after_failed_login() {
    let (manager, _store) = common::test_session();
    let _ = manager.login("admin@company.com", "bad").await;
    assert!(!manager.is_loading());
}

#[tokio::test(start_paused = true)]
async fn test_login_waits_for_configured_delay() {
    let manager = SessionManager::new(
        Arc::new(session::MemoryStore::new()),
        Arc::new(TokioClock),
        &SessionConfig::default(),
    );

    let start = tokio::time::Instant::now();
    manager.login(PM.0, PM.1).await.unwrap();
    assert!(start.elapsed() >= Duration::from_millis(1000));
}

#[tokio::test]
async fn test_stored_session_is_flat_identity_json() {
    let (_manager, store, identity) = common::logged_in(FINANCE).await;
    let raw = common::stored_raw(store.as_ref()).unwrap();
    let value: serde_json::Value = serde_json::from_str(&raw).unwrap();

    assert_eq!(value["id"], "4");
    assert_eq!(value["email"], identity.email.as_str());
    assert_eq!(value["name"], "Finance Head");
    assert_eq!(value["role"], "finance_head");
    assert_eq!(value["created_at"], "2024-01-01T00:00:00Z");
}
