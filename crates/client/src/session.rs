//! Session store: the single source of truth for who is signed in.

use std::cell::Cell;
use std::rc::Rc;

use shared_types::{AppError, LoginRequest, RegisterRequest, User};

use crate::api::CaseApi;
use crate::state::StateHandle;

/// Authentication state as seen by the router and guard.
///
/// `Unknown` means the session check has not resolved yet. It must never be
/// treated as signed out.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum SessionState {
    #[default]
    Unknown,
    Anonymous,
    Authenticated(User),
}

impl SessionState {
    pub fn is_loading(&self) -> bool {
        matches!(self, SessionState::Unknown)
    }

    pub fn user(&self) -> Option<&User> {
        match self {
            SessionState::Authenticated(user) => Some(user),
            _ => None,
        }
    }
}

/// Session store shared through the view tree.
///
/// Clones share both the state handle and the "already initialized" flag.
pub struct SessionStore<A, H> {
    api: A,
    state: H,
    started: Rc<Cell<bool>>,
}

impl<A: Clone, H: Clone> Clone for SessionStore<A, H> {
    fn clone(&self) -> Self {
        Self {
            api: self.api.clone(),
            state: self.state.clone(),
            started: Rc::clone(&self.started),
        }
    }
}

impl<A, H> SessionStore<A, H>
where
    A: CaseApi,
    H: StateHandle<SessionState>,
{
    pub fn new(api: A, state: H) -> Self {
        Self {
            api,
            state,
            started: Rc::new(Cell::new(false)),
        }
    }

    pub fn api(&self) -> &A {
        &self.api
    }

    pub fn state(&self) -> SessionState {
        self.state.snapshot()
    }

    pub fn is_loading(&self) -> bool {
        self.state.read_with(SessionState::is_loading)
    }

    pub fn current_user(&self) -> Option<User> {
        self.state.read_with(|s| s.user().cloned())
    }

    /// Resolve the initial session. Only the first call does anything.
    ///
    /// Any failure of the session check leaves the store anonymous.
    pub async fn initialize(&self) {
        if self.started.replace(true) {
            tracing::debug!("session already initialized, skipping");
            return;
        }

        let next = match self.api.session().await {
            Ok(Some(user)) => {
                tracing::info!(user_id = %user.user_id, "restored session");
                SessionState::Authenticated(user)
            }
            Ok(None) => SessionState::Anonymous,
            Err(e) => {
                tracing::debug!(error = %e, "session check failed, continuing anonymous");
                SessionState::Anonymous
            }
        };

        // A login that finished while the check was in flight wins.
        self.state.update(|s| {
            if s.is_loading() {
                *s = next;
            }
        });
    }

    /// Sign in. On failure the stored user is left untouched.
    pub async fn login(&self, email: &str, password: &str) -> Result<User, AppError> {
        let req = LoginRequest {
            email: email.trim().to_string(),
            password: password.to_string(),
        };
        let user = self.api.login(&req).await.inspect_err(|e| {
            tracing::warn!(error = %e, "login failed");
        })?;
        tracing::info!(user_id = %user.user_id, "logged in");
        self.state
            .update(|s| *s = SessionState::Authenticated(user.clone()));
        Ok(user)
    }

    /// Create an account and sign in as it.
    pub async fn register(&self, req: &RegisterRequest) -> Result<User, AppError> {
        req.validate()?;
        let user = self.api.register(req).await.inspect_err(|e| {
            tracing::warn!(error = %e, "registration failed");
        })?;
        tracing::info!(user_id = %user.user_id, "registered");
        self.state
            .update(|s| *s = SessionState::Authenticated(user.clone()));
        Ok(user)
    }

    /// End the session. Local state is cleared even when the server call
    /// fails; the server error is still returned for reporting.
    pub async fn logout(&self) -> Result<(), AppError> {
        let result = self.api.logout().await;
        if let Err(e) = &result {
            tracing::warn!(error = %e, "server logout failed, clearing local session anyway");
        }
        self.state.update(|s| *s = SessionState::Anonymous);
        result
    }
}
