pub mod cases;
pub mod dashboard;
pub mod login;
pub mod register;

use client::{resolve, Destination, GuardDecision, RouteClass};
use dioxus::prelude::*;

use crate::auth::use_auth;

use cases::CasePage;
use dashboard::Dashboard;
use login::Login;
use register::Register;

/// Application routes.
#[derive(Clone, Routable, Debug, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(GuestGuard)]
        #[route("/login")]
        Login {},
        #[route("/register")]
        Register {},
    #[end_layout]
    #[layout(AuthGuard)]
        #[layout(AppLayout)]
            #[route("/dashboard")]
            Dashboard {},
            #[route("/case/:case_id")]
            CasePage { case_id: String },
        #[end_layout]
    #[end_layout]
    #[route("/:..segments")]
    Fallback { segments: Vec<String> },
}

impl From<Destination> for Route {
    fn from(destination: Destination) -> Self {
        match destination {
            Destination::Login => Route::Login {},
            Destination::Dashboard => Route::Dashboard {},
        }
    }
}

/// Render the outlet, a loading view, or a redirect for `class`.
fn guarded(class: RouteClass) -> Element {
    let auth = use_auth();
    match resolve(class, &auth.session()) {
        GuardDecision::Loading => rsx! {
            div { class: "auth-guard-loading",
                p { "Loading..." }
            }
        },
        GuardDecision::Render => rsx! { Outlet::<Route> {} },
        GuardDecision::Redirect(to) => rsx! { Redirect { to } },
    }
}

/// Layout for pages that only make sense while signed out.
#[component]
fn GuestGuard() -> Element {
    guarded(RouteClass::Guest)
}

/// Layout for pages that need a session.
///
/// While the initial session check is in flight nothing protected renders
/// and nobody is redirected.
#[component]
fn AuthGuard() -> Element {
    guarded(RouteClass::Protected)
}

/// Any path no other route matched.
#[component]
fn Fallback(segments: Vec<String>) -> Element {
    tracing::debug!(path = %segments.join("/"), "unmatched path");
    guarded(RouteClass::Fallback)
}

#[component]
fn Redirect(to: Destination) -> Element {
    let nav = navigator();
    use_effect(move || {
        tracing::debug!(to = to.path(), "guard redirect");
        nav.replace(Route::from(to));
    });
    rsx! {
        div { class: "auth-guard-loading",
            p { "Redirecting..." }
        }
    }
}

/// Header and content frame for signed-in pages.
#[component]
fn AppLayout() -> Element {
    let auth = use_auth();
    let user = auth.current_user();
    let role_label = user.as_ref().map(|u| u.role.label()).unwrap_or_default();

    let handle_logout = move |_: MouseEvent| {
        let store = auth.store().clone();
        async move {
            // A failed server logout is logged by the store and the local
            // session is cleared regardless, so login is the outcome either way.
            let _ = store.logout().await;
            navigator().replace(Route::Login {});
        }
    };

    rsx! {
        div { class: "app-shell",
            header { class: "app-header",
                Link { to: Route::Dashboard {}, class: "app-title", "CaseDesk" }
                if let Some(user) = user {
                    div { class: "app-user",
                        span { class: "app-user-name", "{user.full_name}" }
                        span { class: "app-user-role", "{role_label}" }
                        button {
                            class: "button app-logout",
                            onclick: handle_logout,
                            "Log out"
                        }
                    }
                }
            }
            main { class: "app-content",
                Outlet::<Route> {}
            }
        }
    }
}
