//! Session store and clock for the compiled target.
//!
//! Web builds keep the session in `localStorage` and sleep on `setTimeout`.
//! Native builds use a JSON file and the tokio timer.

use session::{Clock, SessionManager, SessionStore};
use shared_types::SessionConfig;
use std::sync::Arc;

#[cfg(feature = "web")]
pub use browser::{BrowserClock, BrowserStore};

/// Backends a [`SessionManager`] is built on.
#[derive(Clone)]
pub struct Backends {
    store: Arc<dyn SessionStore>,
    clock: Arc<dyn Clock>,
    #[cfg(feature = "web")]
    browser: Arc<BrowserStore>,
}

impl Backends {
    #[cfg(feature = "web")]
    pub fn for_target(_config: &SessionConfig) -> Self {
        let browser = Arc::new(BrowserStore::new());
        Self {
            store: browser.clone(),
            clock: Arc::new(BrowserClock),
            browser,
        }
    }

    #[cfg(not(feature = "web"))]
    pub fn for_target(config: &SessionConfig) -> Self {
        Self {
            store: Arc::new(session::FileStore::new(&config.store_path)),
            clock: native_clock(),
        }
    }

    pub fn manager(&self, config: &SessionConfig) -> SessionManager {
        SessionManager::new(self.store.clone(), self.clock.clone(), config)
    }

    /// Load whatever the store needs in memory before the first `restore`.
    pub async fn preload(&self, key: &str) {
        #[cfg(feature = "web")]
        self.browser.preload(key).await;
        #[cfg(not(feature = "web"))]
        let _ = key;
    }
}

#[cfg(all(not(feature = "web"), any(feature = "desktop", feature = "mobile")))]
fn native_clock() -> Arc<dyn Clock> {
    Arc::new(session::TokioClock)
}

#[cfg(not(any(feature = "web", feature = "desktop", feature = "mobile")))]
fn native_clock() -> Arc<dyn Clock> {
    Arc::new(session::InstantClock)
}

#[cfg(feature = "web")]
mod browser {
    use async_trait::async_trait;
    use dioxus::prelude::*;
    use session::{Clock, SessionStore};
    use shared_types::StoreError;
    use std::collections::HashMap;
    use std::sync::Mutex;
    use std::time::Duration;
    use tracing::warn;

    /// `localStorage` with a write-through in-memory cache.
    ///
    /// `localStorage` is only reachable asynchronously through `eval`, so
    /// reads are served from the cache and writes are forwarded without
    /// waiting for them.
    #[derive(Debug, Default)]
    pub struct BrowserStore {
        cache: Mutex<HashMap<String, String>>,
    }

    fn js_string(s: &str) -> Result<String, StoreError> {
        Ok(serde_json::to_string(s)?)
    }

    impl BrowserStore {
        pub fn new() -> Self {
            Self::default()
        }

        fn cache(&self) -> Result<std::sync::MutexGuard<'_, HashMap<String, String>>, StoreError> {
            self.cache
                .lock()
                .map_err(|e| StoreError::Unavailable(e.to_string()))
        }

        pub async fn preload(&self, key: &str) {
            let js = match js_string(key) {
                Ok(k) => format!("return localStorage.getItem({k});"),
                Err(e) => {
                    warn!(error = %e, "Cannot encode storage key");
                    return;
                }
            };
            match document::eval(&js).join::<Option<String>>().await {
                Ok(Some(value)) => match self.cache() {
                    Ok(mut cache) => {
                        cache.insert(key.to_string(), value);
                    }
                    Err(e) => warn!(error = %e, "Browser store cache unavailable"),
                },
                Ok(None) => {}
                Err(e) => warn!(error = ?e, "Failed to read localStorage"),
            }
        }
    }

    impl SessionStore for BrowserStore {
        fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
            Ok(self.cache()?.get(key).cloned())
        }

        fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
            self.cache()?.insert(key.to_string(), value.to_string());
            document::eval(&format!(
                "localStorage.setItem({}, {});",
                js_string(key)?,
                js_string(value)?
            ));
            Ok(())
        }

        fn remove(&self, key: &str) -> Result<(), StoreError> {
            self.cache()?.remove(key);
            document::eval(&format!("localStorage.removeItem({});", js_string(key)?));
            Ok(())
        }
    }

    /// Sleeps on the browser's `setTimeout`.
    #[derive(Debug, Clone, Copy, Default)]
    pub struct BrowserClock;

    #[async_trait(?Send)]
    impl Clock for BrowserClock {
        async fn sleep(&self, duration: Duration) {
            let js = format!(
                "await new Promise(r => setTimeout(r, {})); return true;",
                duration.as_millis()
            );
            if let Err(e) = document::eval(&js).join::<bool>().await {
                warn!(error = ?e, "setTimeout failed, continuing without delay");
            }
        }
    }
}
