use shared_types::{AuthError, Identity, SessionConfig};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex, MutexGuard};
use std::time::Duration;
use tracing::{debug, info, warn};

use crate::clock::Clock;
use crate::credentials::CredentialTable;
use crate::store::SessionStore;

/// Where the session is in its lifecycle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionPhase {
    /// Nothing has been read from the store yet.
    Initializing,
    Authenticated(Identity),
    LoggedOut,
}

/// Owns the single current identity and keeps the store in step with it.
///
/// One instance per app, shared by reference with the UI. Concurrent
/// logins are not serialized: whichever resolves last wins.
pub struct SessionManager {
    store: Arc<dyn SessionStore>,
    clock: Arc<dyn Clock>,
    credentials: CredentialTable,
    storage_key: String,
    login_delay: Duration,
    phase: Mutex<SessionPhase>,
    pending_logins: AtomicUsize,
}

/// Counts an in-flight login for as long as it is alive, including when
/// the login future is dropped before completing.
struct PendingLogin<'a>(&'a AtomicUsize);

impl<'a> PendingLogin<'a> {
    fn start(counter: &'a AtomicUsize) -> Self {
        counter.fetch_add(1, Ordering::SeqCst);
        Self(counter)
    }
}

impl Drop for PendingLogin<'_> {
    fn drop(&mut self) {
        self.0.fetch_sub(1, Ordering::SeqCst);
    }
}

impl SessionManager {
    pub fn new(store: Arc<dyn SessionStore>, clock: Arc<dyn Clock>, config: &SessionConfig) -> Self {
        Self {
            store,
            clock,
            credentials: CredentialTable::demo(),
            storage_key: config.storage_key.clone(),
            login_delay: Duration::from_millis(config.login_delay_ms),
            phase: Mutex::new(SessionPhase::Initializing),
            pending_logins: AtomicUsize::new(0),
        }
    }

    pub fn with_credentials(mut self, credentials: CredentialTable) -> Self {
        self.credentials = credentials;
        self
    }

    fn phase_guard(&self) -> MutexGuard<'_, SessionPhase> {
        // A panic elsewhere cannot leave the phase half-written; keep going.
        self.phase.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    fn set_phase(&self, phase: SessionPhase) {
        *self.phase_guard() = phase;
    }

    pub fn phase(&self) -> SessionPhase {
        self.phase_guard().clone()
    }

    pub fn current(&self) -> Option<Identity> {
        match &*self.phase_guard() {
            SessionPhase::Authenticated(identity) => Some(identity.clone()),
            SessionPhase::Initializing | SessionPhase::LoggedOut => None,
        }
    }

    pub fn is_authenticated(&self) -> bool {
        matches!(*self.phase_guard(), SessionPhase::Authenticated(_))
    }

    /// True while any login attempt is waiting on its delay.
    pub fn is_loading(&self) -> bool {
        self.pending_logins.load(Ordering::SeqCst) > 0
    }

    pub fn storage_key(&self) -> &str {
        &self.storage_key
    }

    pub fn credentials(&self) -> &CredentialTable {
        &self.credentials
    }

    /// Load the persisted identity, if any.
    ///
    /// Unreadable or malformed entries are logged and treated as no
    /// session; a malformed entry is also removed so it is not re-read.
    #[tracing::instrument(skip(self), fields(key = %self.storage_key))]
    pub fn restore(&self) -> Option<Identity> {
        let restored = match self.store.get(&self.storage_key) {
            Ok(Some(raw)) => match serde_json::from_str::<Identity>(&raw) {
                Ok(identity) => Some(identity),
                Err(e) => {
                    warn!(error = %e, "Discarding malformed stored session");
                    if let Err(e) = self.store.remove(&self.storage_key) {
                        warn!(error = %e, "Failed to clear malformed session");
                    }
                    None
                }
            },
            Ok(None) => None,
            Err(e) => {
                warn!(error = %e, "Session store unreadable, starting logged out");
                None
            }
        };

        match &restored {
            Some(identity) => {
                info!(email = %identity.email, role = %identity.role, "Restored session");
                self.set_phase(SessionPhase::Authenticated(identity.clone()));
            }
            None => {
                debug!("No stored session");
                self.set_phase(SessionPhase::LoggedOut);
            }
        }
        restored
    }

    /// Check credentials after the simulated network delay.
    ///
    /// On success the identity becomes current and is written to the store.
    /// A failed attempt leaves any existing session untouched.
    #[tracing::instrument(skip(self, password))]
    pub async fn login(&self, email: &str, password: &str) -> Result<Identity, AuthError> {
        let _pending = PendingLogin::start(&self.pending_logins);
        self.clock.sleep(self.login_delay).await;

        match self.credentials.verify(email, password) {
            Ok(identity) => {
                self.persist(&identity);
                self.set_phase(SessionPhase::Authenticated(identity.clone()));
                info!(role = %identity.role, "Login succeeded");
                Ok(identity)
            }
            Err(e) => {
                info!("Login rejected");
                Err(e)
            }
        }
    }

    /// Forget the current identity. Safe to call when already logged out.
    #[tracing::instrument(skip(self))]
    pub fn logout(&self) {
        let was_authenticated = self.is_authenticated();
        self.set_phase(SessionPhase::LoggedOut);
        if let Err(e) = self.store.remove(&self.storage_key) {
            warn!(error = %e, "Failed to remove stored session");
        }
        if was_authenticated {
            info!("Logged out");
        }
    }

    fn persist(&self, identity: &Identity) {
        let json = match serde_json::to_string(identity) {
            Ok(json) => json,
            Err(e) => {
                warn!(error = %e, "Failed to serialize session");
                return;
            }
        };
        if let Err(e) = self.store.set(&self.storage_key, &json) {
            warn!(error = %e, "Failed to persist session");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::InstantClock;
    use crate::store::MemoryStore;
    use async_trait::async_trait;
    use pretty_assertions::assert_eq;
    use shared_types::{StoreError, UserRole};
    use tokio::sync::Notify;

    fn config() -> SessionConfig {
        SessionConfig::default()
    }

    fn manager(store: Arc<MemoryStore>) -> SessionManager {
        SessionManager::new(store, Arc::new(InstantClock), &config())
    }

    /// Sleeps until released, so a login can be observed mid-flight.
    struct GateClock(Arc<Notify>);

    #[async_trait(?Send)]
    impl Clock for GateClock {
        async fn sleep(&self, _duration: Duration) {
            self.0.notified().await;
        }
    }

    /// Fails every operation.
    struct BrokenStore;

    impl SessionStore for BrokenStore {
        fn get(&self, _key: &str) -> Result<Option<String>, StoreError> {
            Err(StoreError::Unavailable("broken".into()))
        }
        fn set(&self, _key: &str, _value: &str) -> Result<(), StoreError> {
            Err(StoreError::Unavailable("broken".into()))
        }
        fn remove(&self, _key: &str) -> Result<(), StoreError> {
            Err(StoreError::Unavailable("broken".into()))
        }
    }

    #[test]
    fn starts_initializing() {
        let m = manager(Arc::new(MemoryStore::new()));
        assert_eq!(m.phase(), SessionPhase::Initializing);
        assert_eq!(m.current(), None);
        assert!(!m.is_loading());
    }

    #[test]
    fn restore_empty_store_is_logged_out() {
        let m = manager(Arc::new(MemoryStore::new()));
        assert_eq!(m.restore(), None);
        assert_eq!(m.phase(), SessionPhase::LoggedOut);
    }

    #[tokio::test]
    async fn login_persists_under_storage_key() {
        let store = Arc::new(MemoryStore::new());
        let m = manager(store.clone());
        let identity = m.login("pm@company.com", "pm123").await.unwrap();

        assert_eq!(identity.role, UserRole::ProjectManager);
        assert_eq!(m.current(), Some(identity.clone()));
        let raw = store.get("cms_user").unwrap().unwrap();
        let stored: Identity = serde_json::from_str(&raw).unwrap();
        assert_eq!(stored, identity);
    }

    #[tokio::test]
    async fn failed_login_keeps_existing_session() {
        let store = Arc::new(MemoryStore::new());
        let m = manager(store.clone());
        let admin = m.login("admin@company.com", "admin123").await.unwrap();

        let err = m.login("finance@company.com", "nope").await.unwrap_err();
        assert_eq!(err, AuthError::InvalidCredentials);
        assert_eq!(m.current(), Some(admin));
    }

    #[tokio::test]
    async fn later_login_replaces_identity_wholesale() {
        let m = manager(Arc::new(MemoryStore::new()));
        m.login("admin@company.com", "admin123").await.unwrap();
        let finance = m.login("finance@company.com", "finance123").await.unwrap();
        assert_eq!(m.current(), Some(finance));
    }

    #[tokio::test]
    async fn loading_true_only_while_login_suspended() {
        let gate = Arc::new(Notify::new());
        let m = SessionManager::new(
            Arc::new(MemoryStore::new()),
            Arc::new(GateClock(gate.clone())),
            &config(),
        );

        let login = m.login("admin@company.com", "admin123");
        tokio::pin!(login);
        tokio::select! {
            biased;
            _ = &mut login => panic!("login resolved before the clock released it"),
            _ = tokio::task::yield_now() => {}
        }
        assert!(m.is_loading());
        assert!(!m.is_authenticated());

        gate.notify_one();
        login.await.unwrap();
        assert!(!m.is_loading());
        assert!(m.is_authenticated());
    }

    #[tokio::test]
    async fn store_failures_do_not_change_outcomes() {
        let m = SessionManager::new(Arc::new(BrokenStore), Arc::new(InstantClock), &config());
        assert_eq!(m.restore(), None);
        let identity = m.login("consultant@company.com", "consultant123").await.unwrap();
        assert_eq!(m.current(), Some(identity));
        m.logout();
        assert_eq!(m.current(), None);
    }

    #[test]
    fn malformed_entry_is_removed_on_restore() {
        let store = Arc::new(MemoryStore::new());
        store.set("cms_user", "{\"id\": 1, \"role\":").unwrap();
        let m = manager(store.clone());
        assert_eq!(m.restore(), None);
        assert_eq!(store.get("cms_user").unwrap(), None);
    }

    #[test]
    fn custom_storage_key_is_used() {
        let store = Arc::new(MemoryStore::new());
        let cfg = SessionConfig {
            storage_key: "other".into(),
            ..SessionConfig::default()
        };
        let m = SessionManager::new(store.clone(), Arc::new(InstantClock), &cfg);
        assert_eq!(m.storage_key(), "other");
    }
}
