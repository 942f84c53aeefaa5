use dioxus::prelude::*;
use session::{SessionManager, SessionPhase};
use shared_types::{AuthError, Identity};
use std::rc::Rc;

/// Reactive mirror of the session manager's state.
///
/// The manager is the source of truth; these signals are refreshed from it
/// after every operation so components re-render.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AuthState {
    pub current_user: Signal<Option<Identity>>,
    pub loading: Signal<bool>,
    /// False until the stored session has been read.
    pub restored: Signal<bool>,
}

impl AuthState {
    pub fn new() -> Self {
        Self {
            current_user: Signal::new(None),
            loading: Signal::new(false),
            restored: Signal::new(false),
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.current_user.read().is_some()
    }

    /// Copy the manager's current state into the signals.
    pub fn sync(&mut self, manager: &SessionManager) {
        self.current_user.set(manager.current());
        self.loading.set(manager.is_loading());
        self.restored
            .set(!matches!(manager.phase(), SessionPhase::Initializing));
    }
}

/// Shared handle to the one session manager of the app.
#[derive(Clone)]
pub struct SessionHandle(Rc<SessionManager>);

impl SessionHandle {
    pub fn new(manager: SessionManager) -> Self {
        Self(Rc::new(manager))
    }

    pub fn manager(&self) -> &SessionManager {
        &self.0
    }
}

/// Hook to access auth state.
pub fn use_auth() -> AuthState {
    use_context::<AuthState>()
}

pub fn use_session() -> SessionHandle {
    use_context::<SessionHandle>()
}

/// Log in and mirror the outcome into `auth`. `loading` is raised for the
/// duration of the attempt.
pub async fn sign_in(
    session: SessionHandle,
    mut auth: AuthState,
    email: String,
    password: String,
) -> Result<Identity, AuthError> {
    auth.loading.set(true);
    let result = session.manager().login(&email, &password).await;
    auth.sync(session.manager());
    result
}

pub fn sign_out(session: &SessionHandle, auth: &mut AuthState) {
    session.manager().logout();
    auth.sync(session.manager());
}
