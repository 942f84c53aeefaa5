pub mod clock;
pub mod config;
pub mod credentials;
pub mod manager;
pub mod store;

pub use clock::{Clock, InstantClock};
#[cfg(feature = "native")]
pub use clock::TokioClock;
pub use credentials::{demo_accounts, CredentialTable, DemoAccount};
pub use manager::{SessionManager, SessionPhase};
pub use store::{FileStore, MemoryStore, SessionStore};
