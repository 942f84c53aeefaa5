use session::{FileStore, InstantClock, MemoryStore, SessionManager, SessionStore};
use shared_types::{Identity, SessionConfig};
use std::path::PathBuf;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

pub const ADMIN: (&str, &str) = ("admin@company.com", "admin123");
pub const PM: (&str, &str) = ("pm@company.com", "pm123");
pub const CONSULTANT: (&str, &str) = ("consultant@company.com", "consultant123");
pub const FINANCE: (&str, &str) = ("finance@company.com", "finance123");

/// Manager over `store` with the default config and no login delay.
pub fn manager_over(store: Arc<dyn SessionStore>) -> SessionManager {
    SessionManager::new(store, Arc::new(InstantClock), &SessionConfig::default())
}

/// Fresh manager plus the memory store behind it, already restored.
pub fn test_session() -> (SessionManager, Arc<MemoryStore>) {
    let store = Arc::new(MemoryStore::new());
    let manager = manager_over(store.clone());
    manager.restore();
    (manager, store)
}

/// Manager logged in as `account`.
pub async fn logged_in(account: (&str, &str)) -> (SessionManager, Arc<MemoryStore>, Identity) {
    let (manager, store) = test_session();
    let identity = manager
        .login(account.0, account.1)
        .await
        .expect("demo account should log in");
    (manager, store, identity)
}

/// A file store path unique to this test run.
pub fn temp_store(name: &str) -> FileStore {
    static NEXT: AtomicUsize = AtomicUsize::new(0);
    let n = NEXT.fetch_add(1, Ordering::SeqCst);
    let path: PathBuf = std::env::temp_dir()
        .join(format!("cms-tests-{}-{n}", std::process::id()))
        .join(name);
    FileStore::new(path)
}

/// Raw value stored under the default session key.
pub fn stored_raw(store: &dyn SessionStore) -> Option<String> {
    store
        .get(shared_types::DEFAULT_STORAGE_KEY)
        .expect("store should be readable")
}
