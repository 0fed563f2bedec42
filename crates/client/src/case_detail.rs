//! Case detail orchestration.
//!
//! [`CaseDetail`] owns the data flow of one case page: a three-way concurrent
//! load, four mutations that each trigger a reload on success, and the
//! scoped error messages shown next to the control that failed. The rendered
//! page only reads [`CaseDetailState`] and asks it for [`Controls`].

use futures_util::future::try_join3;
use shared_types::{
    can_manage, AccessLevel, Case, CaseStatus, Document, GrantAccessRequest, Permission, User,
    UserSummary,
};

use crate::api::{CaseApi, UploadFile};
use crate::state::StateHandle;

/// Shortest email fragment worth sending to the user search.
pub const MIN_SEARCH_LEN: usize = 3;

pub const LOAD_FALLBACK: &str = "Failed to load case data.";
pub const UPLOAD_FALLBACK: &str = "File upload failed.";
pub const STATUS_FALLBACK: &str = "Failed to update status.";
pub const GRANT_FALLBACK: &str = "Failed to grant access.";
pub const SEARCH_FALLBACK: &str = "User search failed.";

/// Everything a successful load returns.
#[derive(Debug, Clone, PartialEq)]
pub struct CaseSnapshot {
    pub case: Case,
    pub documents: Vec<Document>,
    pub permissions: Vec<Permission>,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub enum LoadState {
    #[default]
    Loading,
    Ready(CaseSnapshot),
    Failed(String),
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct CaseDetailState {
    pub load: LoadState,
    /// Incremented by every load; results of older loads are discarded.
    pub generation: u64,
    /// Status picked in the status form, seeded from each successful load.
    pub status_draft: Option<CaseStatus>,
    pub selected_file: Option<UploadFile>,
    pub upload_error: Option<String>,
    pub status_error: Option<String>,
    pub search_query: String,
    /// Incremented by every search and every reset of the access panel;
    /// responses to older searches are discarded.
    pub search_generation: u64,
    pub search_results: Vec<UserSummary>,
    pub pending_grantee: Option<UserSummary>,
    pub access_error: Option<String>,
}

/// Which controls the page renders for the current viewer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Controls {
    pub status_form: bool,
    pub access_panel: bool,
    pub upload_enabled: bool,
    pub grant_buttons: bool,
    pub empty_documents_notice: bool,
}

impl CaseDetailState {
    pub fn snapshot(&self) -> Option<&CaseSnapshot> {
        match &self.load {
            LoadState::Ready(snapshot) => Some(snapshot),
            _ => None,
        }
    }

    pub fn permissions(&self) -> &[Permission] {
        self.snapshot().map_or(&[], |s| s.permissions.as_slice())
    }

    /// `can_manage` for `viewer` against the currently loaded permissions.
    pub fn can_manage(&self, viewer: Option<&User>) -> bool {
        viewer.is_some_and(|user| can_manage(user, self.permissions()))
    }

    pub fn controls(&self, viewer: Option<&User>) -> Controls {
        let manage = self.can_manage(viewer);
        Controls {
            status_form: manage,
            access_panel: manage,
            upload_enabled: self.selected_file.is_some(),
            grant_buttons: manage && self.pending_grantee.is_some(),
            empty_documents_notice: self
                .snapshot()
                .is_some_and(|s| s.documents.is_empty()),
        }
    }
}

/// Orchestrator for one case page.
///
/// Cheap to clone: clones share the API client and the state handle, so a
/// UI can hand one to every event handler.
pub struct CaseDetail<A, H> {
    api: A,
    case_id: String,
    state: H,
}

impl<A: Clone, H: Clone> Clone for CaseDetail<A, H> {
    fn clone(&self) -> Self {
        Self {
            api: self.api.clone(),
            case_id: self.case_id.clone(),
            state: self.state.clone(),
        }
    }
}

impl<A, H> CaseDetail<A, H>
where
    A: CaseApi,
    H: StateHandle<CaseDetailState>,
{
    pub fn new(api: A, case_id: impl Into<String>, state: H) -> Self {
        Self {
            api,
            case_id: case_id.into(),
            state,
        }
    }

    pub fn case_id(&self) -> &str {
        &self.case_id
    }

    pub fn state(&self) -> &H {
        &self.state
    }

    pub fn download_url(&self, doc_id: &str) -> String {
        self.api.download_url(doc_id)
    }

    /// Fetch case, documents and permissions concurrently.
    ///
    /// The first failure resolves the join and drops the sibling requests.
    /// Prior data is never shown next to a load error.
    pub async fn load(&self) {
        let generation = self.state.update(|s| {
            s.generation += 1;
            s.load = LoadState::Loading;
            s.generation
        });
        tracing::debug!(case_id = %self.case_id, generation, "loading case");

        let id = self.case_id.as_str();
        let result = try_join3(
            self.api.get_case(id),
            self.api.list_documents(id),
            self.api.list_permissions(id),
        )
        .await;

        self.state.update(|s| {
            if s.generation != generation {
                tracing::debug!(case_id = %self.case_id, generation, "discarding superseded load");
                return;
            }
            match result {
                Ok((case, documents, permissions)) => {
                    s.status_draft = Some(case.status);
                    s.load = LoadState::Ready(CaseSnapshot {
                        case,
                        documents,
                        permissions,
                    });
                }
                Err(e) => {
                    tracing::warn!(case_id = %self.case_id, error = %e, "failed to load case");
                    s.load = LoadState::Failed(e.user_message(LOAD_FALLBACK));
                }
            }
        });
    }

    pub fn select_file(&self, file: Option<UploadFile>) {
        self.state.update(|s| s.selected_file = file);
    }

    /// Upload the selected file. Without a selection this is a no-op.
    pub async fn upload(&self) {
        let Some(file) = self.state.read_with(|s| s.selected_file.clone()) else {
            tracing::debug!("upload requested with no file selected");
            return;
        };

        match self.api.upload_document(&self.case_id, &file).await {
            Ok(()) => {
                tracing::info!(case_id = %self.case_id, file_name = %file.file_name, "document uploaded");
                self.state.update(|s| {
                    s.selected_file = None;
                    s.upload_error = None;
                });
                self.load().await;
            }
            Err(e) => {
                tracing::warn!(case_id = %self.case_id, error = %e, "document upload failed");
                self.state
                    .update(|s| s.upload_error = Some(e.user_message(UPLOAD_FALLBACK)));
            }
        }
    }

    pub fn set_status_draft(&self, status: CaseStatus) {
        self.state.update(|s| s.status_draft = Some(status));
    }

    /// Submit the drafted status. Requires `can_manage` for `viewer`.
    pub async fn update_status(&self, viewer: &User) {
        let (allowed, draft) = self
            .state
            .read_with(|s| (s.can_manage(Some(viewer)), s.status_draft));
        if !allowed {
            tracing::warn!(case_id = %self.case_id, user_id = %viewer.user_id, "status update without manage rights ignored");
            return;
        }
        let Some(status) = draft else {
            return;
        };

        match self.api.update_status(&self.case_id, status).await {
            Ok(()) => {
                tracing::info!(case_id = %self.case_id, status = status.as_str(), "case status updated");
                self.state.update(|s| s.status_error = None);
                self.load().await;
            }
            Err(e) => {
                tracing::warn!(case_id = %self.case_id, error = %e, "case status update failed");
                self.state
                    .update(|s| s.status_error = Some(e.user_message(STATUS_FALLBACK)));
            }
        }
    }

    pub fn set_search_query(&self, query: impl Into<String>) {
        let query = query.into();
        self.state.update(|s| s.search_query = query);
    }

    /// Search users by email fragment. Fragments shorter than
    /// [`MIN_SEARCH_LEN`] characters are ignored without a request.
    ///
    /// A response that arrives after a newer search, a candidate pick or a
    /// successful grant is dropped.
    pub async fn search_users(&self) {
        let query = self.state.read_with(|s| s.search_query.trim().to_string());
        if query.chars().count() < MIN_SEARCH_LEN {
            return;
        }
        let generation = self.state.update(|s| {
            s.search_generation += 1;
            s.search_generation
        });

        let result = self.api.search_users(&query).await;

        self.state.update(|s| {
            if s.search_generation != generation {
                tracing::debug!(generation, "discarding superseded user search");
                return;
            }
            match result {
                Ok(results) => {
                    tracing::debug!(hits = results.len(), "user search finished");
                    s.search_results = results;
                    s.access_error = None;
                }
                Err(e) => {
                    tracing::warn!(error = %e, "user search failed");
                    s.access_error = Some(e.user_message(SEARCH_FALLBACK));
                }
            }
        });
    }

    /// Make `user` the pending grantee.
    pub fn select_candidate(&self, user: UserSummary) {
        self.state.update(|s| {
            s.search_generation += 1;
            s.search_results.clear();
            s.search_query = user.email.clone();
            s.pending_grantee = Some(user);
        });
    }

    /// Grant the pending grantee `level` on this case.
    ///
    /// On failure the grantee stays selected so the user can retry.
    pub async fn grant_access(&self, level: AccessLevel) {
        let Some(grantee) = self.state.read_with(|s| s.pending_grantee.clone()) else {
            return;
        };
        let req = GrantAccessRequest {
            user_id: grantee.user_id.clone(),
            access_level: level,
        };

        match self.api.grant_access(&self.case_id, &req).await {
            Ok(()) => {
                tracing::info!(
                    case_id = %self.case_id,
                    grantee = %grantee.user_id,
                    access_level = level.as_str(),
                    "access granted"
                );
                self.state.update(|s| {
                    s.search_generation += 1;
                    s.search_query.clear();
                    s.search_results.clear();
                    s.pending_grantee = None;
                    s.access_error = None;
                });
                self.load().await;
            }
            Err(e) => {
                tracing::warn!(case_id = %self.case_id, error = %e, "grant access failed");
                self.state
                    .update(|s| s.access_error = Some(e.user_message(GRANT_FALLBACK)));
            }
        }
    }
}
