use std::rc::Rc;
use std::time::Duration;

use pretty_assertions::assert_eq;
use shared_types::{AccessLevel, AppError, CaseStatus, Permission, User, UserRole};
use tokio::sync::Notify;

use client::{LoadState, StateHandle};

use crate::common::{self, Call, MockApi};

const LOAD_FALLBACK: &str = "Failed to load case data.";

#[tokio::test]
async fn test_load_fetches_case_documents_and_permissions() {
    let api = MockApi::new();
    {
        let mut script = api.script();
        script.case = Ok(common::case("C1", CaseStatus::InProgress));
        script.documents = Ok(vec![common::document("d1", "brief.pdf")]);
        script.permissions = Ok(vec![common::permission("u1", AccessLevel::Sudo)]);
    }
    let detail = common::case_detail(&api, "C1");

    detail.load().await;

    let state = detail.state().snapshot();
    let snapshot = state.snapshot().expect("loaded");
    assert_eq!(snapshot.case.status, CaseStatus::InProgress);
    assert_eq!(snapshot.documents, vec![common::document("d1", "brief.pdf")]);
    assert_eq!(snapshot.permissions.len(), 1);
    assert_eq!(state.status_draft, Some(CaseStatus::InProgress));
    assert_eq!(
        api.calls(),
        vec![
            Call::GetCase("C1".into()),
            Call::ListDocuments("C1".into()),
            Call::ListPermissions("C1".into()),
        ]
    );
}

#[tokio::test]
async fn test_load_failure_shows_fallback_message() {
    let api = MockApi::new();
    api.script().documents = Err(AppError::network("connection reset"));
    let detail = common::case_detail(&api, "C1");

    detail.load().await;

    assert_eq!(
        detail.state().read_with(|s| s.load.clone()),
        LoadState::Failed(LOAD_FALLBACK.to_string())
    );
}

#[tokio::test]
async fn test_load_failure_prefers_server_message() {
    let api = MockApi::new();
    api.script().case = Err(AppError::forbidden("You do not have access to this case"));
    let detail = common::case_detail(&api, "C1");

    detail.load().await;

    assert_eq!(
        detail.state().read_with(|s| s.load.clone()),
        LoadState::Failed("You do not have access to this case".to_string())
    );
}

#[tokio::test]
async fn test_failed_reload_drops_previous_data() {
    let api = MockApi::new();
    api.script().documents = Ok(vec![common::document("d1", "a.pdf")]);
    let detail = common::case_detail(&api, "C1");
    detail.load().await;
    assert!(detail.state().read_with(|s| s.snapshot().is_some()));

    api.script().permissions = Err(AppError::internal(""));
    detail.load().await;

    let state = detail.state().snapshot();
    assert!(state.snapshot().is_none());
    assert!(state.permissions().is_empty());
    assert_eq!(state.load, LoadState::Failed(LOAD_FALLBACK.to_string()));
}

#[tokio::test]
async fn test_first_failure_does_not_wait_for_other_requests() {
    let api = MockApi::new();
    {
        let mut script = api.script();
        script.case = Err(AppError::not_found("Case not found"));
        script.hang_siblings = true;
    }
    let detail = common::case_detail(&api, "missing");

    tokio::time::timeout(Duration::from_secs(2), detail.load())
        .await
        .expect("load should resolve on the first failure");

    assert_eq!(
        detail.state().read_with(|s| s.load.clone()),
        LoadState::Failed("Case not found".to_string())
    );
}

#[tokio::test]
async fn test_load_shows_loading_while_in_flight() {
    let api = MockApi::new();
    let detail = common::case_detail(&api, "C1");
    detail.load().await;

    let gate = Rc::new(Notify::new());
    api.script().case_gates.push_back(gate.clone());
    let observer = detail.clone();

    futures_util::join!(detail.load(), async {
        assert_eq!(observer.state().read_with(|s| s.load.clone()), LoadState::Loading);
        gate.notify_one();
    });

    assert!(detail.state().read_with(|s| s.snapshot().is_some()));
}

#[tokio::test]
async fn test_superseded_load_result_is_discarded() {
    let api = MockApi::new();
    let gate = Rc::new(Notify::new());
    api.script().case_gates.push_back(gate.clone());
    let detail = common::case_detail(&api, "C1");
    let stale = detail.clone();
    let fresh = detail.clone();
    let script_api = api.clone();

    futures_util::join!(stale.load(), async {
        fresh.load().await;
        // The older request now fails; it must not replace the newer data.
        script_api.script().case = Err(AppError::internal("late failure"));
        gate.notify_one();
    });

    let state = detail.state().snapshot();
    assert_eq!(state.generation, 2);
    assert_eq!(
        state.snapshot().map(|s| s.case.case_id.clone()),
        Some("C1".to_string())
    );
}

#[tokio::test]
async fn test_sudo_collaborator_with_unlisted_role_on_empty_case() {
    let viewer: User = serde_json::from_value(serde_json::json!({
        "user_id": 1,
        "email": "ada@firm.com",
        "full_name": "Ada Park",
        "role": "attorney"
    }))
    .unwrap();
    let permissions: Vec<Permission> = serde_json::from_value(serde_json::json!([
        { "user_id": 1, "full_name": "Ada Park", "email": "ada@firm.com", "access_level": "sudo" }
    ]))
    .unwrap();
    assert_eq!(viewer.role, UserRole::Unknown);

    let api = MockApi::new();
    {
        let mut script = api.script();
        script.case = Ok(common::case("C1", CaseStatus::Open));
        script.documents = Ok(Vec::new());
        script.permissions = Ok(permissions);
    }
    let detail = common::case_detail(&api, "C1");

    detail.load().await;

    let state = detail.state().snapshot();
    assert!(state.can_manage(Some(&viewer)));
    let controls = state.controls(Some(&viewer));
    assert!(controls.status_form);
    assert!(controls.access_panel);
    assert!(controls.empty_documents_notice);
    assert!(!controls.upload_enabled);
}
