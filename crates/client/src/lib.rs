//! Client library for the case-management API.
//!
//! Holds every decision the UI makes: the session store, the route gating
//! policy and the case detail orchestrator, all written against the
//! [`CaseApi`] trait so they run the same in the browser and in tests.

pub mod api;
pub mod case_detail;
pub mod guard;
pub mod http;
pub mod session;
pub mod state;

pub use api::{CaseApi, UploadFile};
pub use case_detail::{CaseDetail, CaseDetailState, CaseSnapshot, Controls, LoadState};
pub use guard::{resolve, Destination, GuardDecision, RouteClass};
pub use http::HttpApi;
pub use session::{SessionState, SessionStore};
pub use state::{LocalState, StateHandle};
