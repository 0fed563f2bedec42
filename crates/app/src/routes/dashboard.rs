use client::CaseApi;
use dioxus::prelude::*;
use shared_types::CreateCaseRequest;

use crate::auth::{use_auth, use_current_user};
use crate::routes::cases::CaseList;

const LIST_FALLBACK: &str = "Failed to load cases.";
const CREATE_FALLBACK: &str = "Failed to create case.";

/// Landing page after sign-in: the user's cases and a form to open one.
#[component]
pub fn Dashboard() -> Element {
    let api = use_auth().api();
    let user = use_current_user();

    let list_api = api.clone();
    let mut cases = use_resource(move || {
        let api = list_api.clone();
        async move { api.list_cases().await }
    });

    let mut case_name = use_signal(String::new);
    let mut create_error = use_signal(|| Option::<String>::None);
    let mut creating = use_signal(|| false);

    let handle_create = move |evt: FormEvent| {
        let api = api.clone();
        async move {
            evt.prevent_default();
            create_error.set(None);

            let req = match CreateCaseRequest::new(&case_name()) {
                Ok(req) => req,
                Err(e) => {
                    create_error.set(Some(e.user_message(CREATE_FALLBACK)));
                    return;
                }
            };

            creating.set(true);
            match api.create_case(&req).await {
                Ok(created) => {
                    tracing::info!(case_id = %created.case_id, "case created");
                    case_name.set(String::new());
                    cases.restart();
                }
                Err(e) => {
                    tracing::warn!(error = %e, "case creation failed");
                    create_error.set(Some(e.user_message(CREATE_FALLBACK)));
                }
            }
            creating.set(false);
        }
    };

    rsx! {
        div { class: "dashboard",
            if let Some(user) = user {
                h1 { "Welcome, {user.full_name}" }
            }

            section { class: "dashboard-create",
                h2 { "New Case" }
                form { onsubmit: handle_create,
                    input {
                        placeholder: "Case name",
                        value: case_name(),
                        oninput: move |e: FormEvent| case_name.set(e.value()),
                    }
                    button {
                        r#type: "submit",
                        class: "button",
                        disabled: creating(),
                        if creating() { "Creating..." } else { "Create Case" }
                    }
                }
                if let Some(err) = create_error() {
                    div { class: "form-error", "{err}" }
                }
            }

            section { class: "dashboard-cases",
                h2 { "Your Cases" }
                {
                    match &*cases.read() {
                        None => rsx! { p { class: "loading", "Loading cases..." } },
                        Some(Ok(list)) => rsx! { CaseList { cases: list.clone() } },
                        Some(Err(e)) => {
                            let msg = e.user_message(LIST_FALLBACK);
                            rsx! { div { class: "form-error", "{msg}" } }
                        }
                    }
                }
            }
        }
    }
}
