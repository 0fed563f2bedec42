use dioxus::prelude::*;

mod auth;
mod config;
mod format_helpers;
mod routes;
mod signal_state;

use auth::AuthState;
use routes::Route;

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    // Built once per app lifetime; the result never changes between renders.
    let api = use_hook(config::api_client);
    let api = match api {
        Ok(api) => api,
        Err(e) => {
            tracing::error!(error = %e, "could not create the case API client");
            return rsx! {
                div { class: "app-error",
                    p { "CaseDesk could not start. Check the API configuration and reload." }
                }
            };
        }
    };

    let auth = use_context_provider(|| AuthState::new(api));

    // Resolve the session once. The task belongs to the root scope.
    use_hook(move || {
        let store = auth.store().clone();
        spawn(async move {
            store.initialize().await;
        });
    });

    rsx! {
        Router::<Route> {}
    }
}
