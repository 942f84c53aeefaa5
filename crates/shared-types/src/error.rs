use serde::{Deserialize, Serialize};
use std::fmt;

/// Login failure returned to the caller.
///
/// Unknown email and wrong password collapse into one variant so the
/// message never reveals which addresses are registered.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum AuthError {
    InvalidCredentials,
}

impl AuthError {
    /// Short message suitable for a toast or inline form error.
    pub fn message(&self) -> &'static str {
        match self {
            AuthError::InvalidCredentials => "Invalid credentials",
        }
    }
}

impl fmt::Display for AuthError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

impl std::error::Error for AuthError {}

/// Failure talking to the session key-value store.
///
/// Never shown to users; the session manager logs it and treats the
/// session as absent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// The backing store cannot be reached (no browser storage, lock poisoned).
    Unavailable(String),
    /// Reading or writing the backing file failed.
    Io(String),
    /// Stored bytes are not in the expected format.
    Encoding(String),
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StoreError::Unavailable(msg) => write!(f, "store unavailable: {msg}"),
            StoreError::Io(msg) => write!(f, "store io error: {msg}"),
            StoreError::Encoding(msg) => write!(f, "store encoding error: {msg}"),
        }
    }
}

impl std::error::Error for StoreError {}

impl From<std::io::Error> for StoreError {
    fn from(err: std::io::Error) -> Self {
        StoreError::Io(err.to_string())
    }
}

impl From<serde_json::Error> for StoreError {
    fn from(err: serde_json::Error) -> Self {
        StoreError::Encoding(err.to_string())
    }
}
