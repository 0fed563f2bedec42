use pretty_assertions::assert_eq;
use shared_types::{AccessLevel, AppError, CaseStatus};

use client::StateHandle;

use crate::common::{self, Call, MockApi};

fn with_permissions(api: &MockApi) {
    api.script().permissions = Ok(vec![
        common::permission("owner", AccessLevel::Sudo),
        common::permission("reader", AccessLevel::ViewOnly),
    ]);
}

#[tokio::test]
async fn test_status_form_visibility_follows_manage_rights() {
    let api = MockApi::new();
    with_permissions(&api);
    let detail = common::case_detail(&api, "C1");
    detail.load().await;

    let state = detail.state().snapshot();
    assert!(state.controls(Some(&common::judge())).status_form);
    assert!(state.controls(Some(&common::advocate("owner"))).status_form);
    assert!(!state.controls(Some(&common::advocate("reader"))).status_form);
    assert!(!state.controls(Some(&common::advocate("stranger"))).access_panel);
}

#[tokio::test]
async fn test_judge_updates_status_and_reloads() {
    let api = MockApi::new();
    let detail = common::case_detail(&api, "C1");
    detail.load().await;

    detail.set_status_draft(CaseStatus::Closed);
    detail.update_status(&common::judge()).await;

    assert!(api
        .calls()
        .contains(&Call::UpdateStatus("C1".into(), CaseStatus::Closed)));
    let state = detail.state().snapshot();
    assert_eq!(state.snapshot().map(|s| s.case.status), Some(CaseStatus::Closed));
    assert_eq!(state.status_draft, Some(CaseStatus::Closed));
    assert!(state.status_error.is_none());
    assert_eq!(api.load_calls(), 6);
}

#[tokio::test]
async fn test_sudo_collaborator_updates_status() {
    let api = MockApi::new();
    with_permissions(&api);
    let detail = common::case_detail(&api, "C1");
    detail.load().await;

    detail.set_status_draft(CaseStatus::InProgress);
    detail.update_status(&common::advocate("owner")).await;

    assert!(api
        .calls()
        .contains(&Call::UpdateStatus("C1".into(), CaseStatus::InProgress)));
}

#[tokio::test]
async fn test_view_only_collaborator_cannot_submit_status() {
    let api = MockApi::new();
    with_permissions(&api);
    let detail = common::case_detail(&api, "C1");
    detail.load().await;
    api.clear_calls();

    detail.set_status_draft(CaseStatus::Closed);
    detail.update_status(&common::advocate("reader")).await;

    assert!(api.calls().is_empty());
}

#[tokio::test]
async fn test_status_failure_is_scoped_to_status_form() {
    let api = MockApi::new();
    api.script().update_status = Err(AppError::internal(""));
    let detail = common::case_detail(&api, "C1");
    detail.load().await;

    detail.set_status_draft(CaseStatus::Closed);
    detail.update_status(&common::judge()).await;

    let state = detail.state().snapshot();
    assert_eq!(state.status_error.as_deref(), Some("Failed to update status."));
    assert!(state.upload_error.is_none());
    assert!(state.access_error.is_none());
    assert_eq!(state.snapshot().map(|s| s.case.status), Some(CaseStatus::Open));
    assert_eq!(api.load_calls(), 3);
}

#[tokio::test]
async fn test_reload_reseeds_status_draft() {
    let api = MockApi::new();
    let detail = common::case_detail(&api, "C1");
    detail.load().await;
    detail.set_status_draft(CaseStatus::Closed);

    api.script().case = Ok(common::case("C1", CaseStatus::InProgress));
    detail.load().await;

    assert_eq!(
        detail.state().read_with(|s| s.status_draft),
        Some(CaseStatus::InProgress)
    );
}
