//! Route gating policy.
//!
//! Pure decision table consulted by the router's guard layouts. This is
//! presentation gating only; the API enforces access on every request.

use crate::session::SessionState;

/// How a client route relates to authentication.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteClass {
    /// `/login`, `/register`: only meaningful while signed out.
    Guest,
    /// `/dashboard`, `/case/{id}`: require a session.
    Protected,
    /// Any path no route matched.
    Fallback,
}

/// Where a redirect sends the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Destination {
    Login,
    Dashboard,
}

impl Destination {
    pub fn path(&self) -> &'static str {
        match self {
            Destination::Login => "/login",
            Destination::Dashboard => "/dashboard",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuardDecision {
    /// Session check still pending: show a neutral loading view.
    Loading,
    Render,
    Redirect(Destination),
}

pub fn resolve(class: RouteClass, session: &SessionState) -> GuardDecision {
    match (session, class) {
        (SessionState::Unknown, _) => GuardDecision::Loading,
        (SessionState::Anonymous, RouteClass::Guest) => GuardDecision::Render,
        (SessionState::Anonymous, _) => GuardDecision::Redirect(Destination::Login),
        (SessionState::Authenticated(_), RouteClass::Protected) => GuardDecision::Render,
        (SessionState::Authenticated(_), _) => GuardDecision::Redirect(Destination::Dashboard),
    }
}
