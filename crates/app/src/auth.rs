use client::{HttpApi, SessionState, SessionStore};
use dioxus::prelude::*;
use shared_types::User;

use crate::signal_state::SignalState;

pub type Session = SessionStore<HttpApi, SignalState<SessionState>>;

/// Global authentication state, provided at the app root.
#[derive(Clone)]
pub struct AuthState {
    store: Session,
}

impl AuthState {
    pub fn new(api: HttpApi) -> Self {
        let state = SignalState::new(Signal::new(SessionState::default()));
        Self {
            store: SessionStore::new(api, state),
        }
    }

    pub fn store(&self) -> &Session {
        &self.store
    }

    pub fn api(&self) -> HttpApi {
        self.store.api().clone()
    }

    /// Current session. Subscribes the calling component.
    pub fn session(&self) -> SessionState {
        self.store.state()
    }

    pub fn current_user(&self) -> Option<User> {
        self.store.current_user()
    }
}

/// Hook to access auth state.
pub fn use_auth() -> AuthState {
    use_context::<AuthState>()
}

/// Hook for the signed-in user. `None` while loading or signed out.
pub fn use_current_user() -> Option<User> {
    use_auth().current_user()
}
