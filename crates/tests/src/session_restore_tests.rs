use pretty_assertions::assert_eq;
use session::{MemoryStore, SessionPhase, SessionStore};
use shared_types::DEFAULT_STORAGE_KEY;
use std::sync::Arc;

use crate::common::{self, ADMIN, CONSULTANT};

#[tokio::test]
async fn test_restore_after_login_returns_equal_identity() {
    let (_first, store, identity) = common::logged_in(CONSULTANT).await;

    let second = common::manager_over(store);
    assert_eq!(second.restore(), Some(identity.clone()));
    assert_eq!(second.phase(), SessionPhase::Authenticated(identity));
}

#[tokio::test]
async fn test_file_store_survives_restart() {
    let store = Arc::new(common::temp_store("session.json"));
    let identity = {
        let first = common::manager_over(store.clone());
        first.restore();
        first.login(ADMIN.0, ADMIN.1).await.unwrap()
    };

    let reopened = Arc::new(session::FileStore::new(store.path()));
    let second = common::manager_over(reopened);
    assert_eq!(second.restore(), Some(identity));
}

#[test]
fn test_malformed_session_restores_as_none() {
    let payloads = [
        "not json at all",
        "{\"id\":\"1\"}",
        "{\"id\":\"1\",\"email\":\"a@b.c\",\"name\":\"A\",\"role\":\"intern\",\"created_at\":\"2024-01-01T00:00:00Z\"}",
        "{\"id\":\"1\",\"email\":\"a@b.c\",\"name\":\"A\",\"role\":\"admin\",\"created_at\":\"yesterday\"}",
        "[]",
        "",
    ];
    for raw in payloads {
        let store = Arc::new(MemoryStore::new());
        store.set(DEFAULT_STORAGE_KEY, raw).unwrap();
        let manager = common::manager_over(store.clone());

        assert_eq!(manager.restore(), None, "payload {raw:?}");
        assert_eq!(manager.phase(), SessionPhase::LoggedOut);
        assert_eq!(common::stored_raw(store.as_ref()), None, "payload {raw:?}");
    }
}

#[test]
fn test_restore_with_empty_store() {
    let (manager, _store) = common::test_session();
    assert_eq!(manager.current(), None);
    assert_eq!(manager.phase(), SessionPhase::LoggedOut);
}

#[test]
fn test_other_keys_are_ignored() {
    let store = Arc::new(MemoryStore::new());
    store.set("something_else", "{}").unwrap();
    let manager = common::manager_over(store.clone());
    assert_eq!(manager.restore(), None);
    assert_eq!(store.get("something_else").unwrap().as_deref(), Some("{}"));
}
