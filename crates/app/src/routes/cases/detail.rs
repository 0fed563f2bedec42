use std::future::Future;

use client::{
    CaseDetail, CaseDetailState, CaseSnapshot, Controls, HttpApi, LoadState, StateHandle,
    UploadFile,
};
use dioxus::prelude::*;
use shared_types::{AccessLevel, CaseStatus, User, UserSummary};

use crate::auth::{use_auth, use_current_user};
use crate::format_helpers::format_created;
use crate::routes::Route;
use crate::signal_state::SignalState;

type Detail = CaseDetail<HttpApi, SignalState<CaseDetailState>>;

/// Route target for `/case/:case_id`.
///
/// Keyed on the id so moving between cases mounts a fresh orchestrator and
/// drops the previous page's in-flight work.
#[component]
pub fn CasePage(case_id: String) -> Element {
    rsx! {
        CaseDetailView { key: "{case_id}", case_id: case_id.clone() }
    }
}

#[component]
fn CaseDetailView(case_id: String) -> Element {
    let api = use_auth().api();
    let viewer = use_current_user();
    let state = use_signal(CaseDetailState::default);
    let detail = use_hook(|| CaseDetail::new(api, case_id, SignalState::new(state)));

    use_hook({
        let detail = detail.clone();
        move || {
            spawn(async move {
                detail.load().await;
            });
        }
    });

    let view = detail.state().snapshot();
    let snapshot = match &view.load {
        LoadState::Loading => {
            return rsx! {
                div { class: "loading", "Loading case..." }
            };
        }
        LoadState::Failed(msg) => {
            return rsx! {
                div { class: "case-error",
                    p { "{msg}" }
                    Link { to: Route::Dashboard {}, "Back to dashboard" }
                }
            };
        }
        LoadState::Ready(snapshot) => snapshot,
    };
    let controls = view.controls(viewer.as_ref());

    rsx! {
        div { class: "case-detail",
            {case_header(snapshot)}
            {documents_section(&detail, &view, snapshot, controls)}
            if controls.status_form {
                {status_section(&detail, &view, viewer.clone())}
            }
            {permissions_section(snapshot)}
            if controls.access_panel {
                {access_section(&detail, &view, controls)}
            }
        }
    }
}

/// Handler that runs `action` against a clone of the orchestrator in a task
/// owned by the current scope.
fn handler<E, F, Fut>(detail: &Detail, action: F) -> impl FnMut(E) + 'static
where
    F: Fn(Detail, E) -> Fut + 'static,
    Fut: Future<Output = ()> + 'static,
{
    let detail = detail.clone();
    move |evt| {
        spawn(action(detail.clone(), evt));
    }
}

fn case_header(snapshot: &CaseSnapshot) -> Element {
    let case = &snapshot.case;
    let status = case.status.as_str();
    let created = format_created(case);
    rsx! {
        header { class: "case-header",
            Link { to: Route::Dashboard {}, class: "case-back", "All cases" }
            h1 { "{case.case_name}" }
            div { class: "case-meta",
                span { class: "case-status", "{status}" }
                span { class: "case-created", "Opened {created}" }
            }
        }
    }
}

async fn read_selected_file(evt: &FormEvent) -> Option<UploadFile> {
    let files = evt.files();
    let file = files.first()?;
    let name = file.name();
    match file.read_bytes().await {
        Ok(bytes) => {
            let upload = UploadFile::new(name, bytes.to_vec());
            Some(match file.content_type() {
                Some(content_type) => upload.with_content_type(content_type),
                None => upload,
            })
        }
        Err(_) => {
            tracing::warn!(file_name = %name, "could not read the selected file");
            None
        }
    }
}

fn documents_section(
    detail: &Detail,
    view: &CaseDetailState,
    snapshot: &CaseSnapshot,
    controls: Controls,
) -> Element {
    let links: Vec<(String, String, String)> = snapshot
        .documents
        .iter()
        .map(|doc| {
            (
                doc.doc_id.clone(),
                doc.file_name.clone(),
                detail.download_url(&doc.doc_id),
            )
        })
        .collect();

    rsx! {
        section { class: "case-documents",
            h2 { "Documents" }
            if controls.empty_documents_notice {
                p { class: "empty", "No documents uploaded yet." }
            }
            ul {
                for (doc_id, file_name, href) in links {
                    li { key: "{doc_id}",
                        a { href: "{href}", target: "_blank", "{file_name}" }
                    }
                }
            }
            div { class: "upload-form",
                input {
                    r#type: "file",
                    onchange: handler(detail, |d, evt: FormEvent| async move {
                        d.select_file(read_selected_file(&evt).await);
                    }),
                }
                button {
                    class: "button",
                    disabled: !controls.upload_enabled,
                    onclick: handler(detail, |d, _: MouseEvent| async move { d.upload().await }),
                    "Upload"
                }
                if let Some(err) = view.upload_error.clone() {
                    div { class: "form-error", "{err}" }
                }
            }
        }
    }
}

fn status_section(detail: &Detail, view: &CaseDetailState, viewer: Option<User>) -> Element {
    let draft = view.status_draft.unwrap_or_default().as_str();
    let options = CaseStatus::ALL.map(|status| status.as_str());
    let pick = detail.clone();

    rsx! {
        section { class: "case-status-form",
            h2 { "Status" }
            select {
                value: draft,
                onchange: move |e: FormEvent| {
                    if let Some(status) = CaseStatus::parse(&e.value()) {
                        pick.set_status_draft(status);
                    }
                },
                for label in options {
                    option { value: label, "{label}" }
                }
            }
            button {
                class: "button",
                onclick: handler(detail, move |d, _: MouseEvent| {
                    let viewer = viewer.clone();
                    async move {
                        if let Some(user) = viewer {
                            d.update_status(&user).await;
                        }
                    }
                }),
                "Update Status"
            }
            if let Some(err) = view.status_error.clone() {
                div { class: "form-error", "{err}" }
            }
        }
    }
}

fn permissions_section(snapshot: &CaseSnapshot) -> Element {
    let rows: Vec<(String, String, String, &'static str)> = snapshot
        .permissions
        .iter()
        .map(|p| {
            let level = match p.access_level {
                AccessLevel::Sudo => "Sudo",
                AccessLevel::ViewOnly => "View only",
            };
            (p.user_id.clone(), p.full_name.clone(), p.email.clone(), level)
        })
        .collect();

    rsx! {
        section { class: "case-permissions",
            h2 { "Collaborators" }
            ul {
                for (user_id, full_name, email, level) in rows {
                    li { key: "{user_id}",
                        span { class: "collaborator-name", "{full_name}" }
                        span { class: "collaborator-email", "{email}" }
                        span { class: "collaborator-level", "{level}" }
                    }
                }
            }
        }
    }
}

fn pick_candidate(detail: &Detail, candidate: &UserSummary) -> impl FnMut(MouseEvent) + 'static {
    let detail = detail.clone();
    let candidate = candidate.clone();
    move |_| detail.select_candidate(candidate.clone())
}

fn access_section(detail: &Detail, view: &CaseDetailState, controls: Controls) -> Element {
    let query = view.search_query.clone();
    let results = view.search_results.clone();
    let pending = view.pending_grantee.clone();

    rsx! {
        section { class: "case-access",
            h2 { "Grant Access" }
            input {
                r#type: "search",
                placeholder: "Search users by email",
                value: query,
                oninput: handler(detail, |d, e: FormEvent| async move {
                    d.set_search_query(e.value());
                    d.search_users().await;
                }),
            }
            if !results.is_empty() {
                ul { class: "search-results",
                    for candidate in results {
                        li { key: "{candidate.user_id}",
                            button {
                                class: "search-result",
                                onclick: pick_candidate(detail, &candidate),
                                "{candidate.full_name} ({candidate.email})"
                            }
                        }
                    }
                }
            }
            if let Some(grantee) = pending {
                div { class: "pending-grantee",
                    span { "Selected: {grantee.full_name} ({grantee.email})" }
                }
            }
            if controls.grant_buttons {
                div { class: "grant-buttons",
                    button {
                        class: "button",
                        onclick: handler(detail, |d, _: MouseEvent| async move {
                            d.grant_access(AccessLevel::ViewOnly).await;
                        }),
                        "Grant view only"
                    }
                    button {
                        class: "button",
                        onclick: handler(detail, |d, _: MouseEvent| async move {
                            d.grant_access(AccessLevel::Sudo).await;
                        }),
                        "Grant sudo"
                    }
                }
            }
            if let Some(err) = view.access_error.clone() {
                div { class: "form-error", "{err}" }
            }
        }
    }
}
