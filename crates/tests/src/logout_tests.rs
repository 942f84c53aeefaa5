use pretty_assertions::assert_eq;
use session::SessionPhase;

use crate::common::{self, ADMIN, PM};

#[tokio::test]
async fn test_logout_clears_identity_and_store() {
    let (manager, store, _identity) = common::logged_in(PM).await;

    manager.logout();

    assert_eq!(manager.current(), None);
    assert_eq!(manager.phase(), SessionPhase::LoggedOut);
    assert_eq!(common::stored_raw(store.as_ref()), None);
}

#[tokio::test]
async fn test_logout_twice_equals_once() {
    let (once, once_store, _) = common::logged_in(ADMIN).await;
    once.logout();

    let (twice, twice_store, _) = common::logged_in(ADMIN).await;
    twice.logout();
    twice.logout();

    assert_eq!(once.phase(), twice.phase());
    assert_eq!(
        common::stored_raw(once_store.as_ref()),
        common::stored_raw(twice_store.as_ref())
    );
}

#[test]
fn test_logout_without_session_is_noop() {
    let (manager, store) = common::test_session();
    manager.logout();
    assert_eq!(manager.current(), None);
    assert_eq!(common::stored_raw(store.as_ref()), None);
}

#[tokio::test]
async fn test_login_after_logout_restores_access() {
    let (manager, store, first) = common::logged_in(ADMIN).await;
    manager.logout();

    let second = manager.login(PM.0, PM.1).await.unwrap();
    assert_ne!(first, second);
    assert_eq!(manager.current(), Some(second.clone()));

    let restarted = common::manager_over(store);
    assert_eq!(restarted.restore(), Some(second));
}
