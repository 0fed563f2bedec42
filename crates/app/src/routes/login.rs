use crate::auth::use_auth;
use crate::routes::Route;
use dioxus::prelude::*;

const LOGIN_FALLBACK: &str = "Login failed.";

/// Login page with email and password.
#[component]
pub fn Login() -> Element {
    let auth = use_auth();
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut error_msg = use_signal(|| Option::<String>::None);
    let mut loading = use_signal(|| false);

    let handle_login = move |evt: FormEvent| {
        let store = auth.store().clone();
        async move {
            evt.prevent_default();
            loading.set(true);
            error_msg.set(None);

            match store.login(&email(), &password()).await {
                Ok(_) => {
                    navigator().push(Route::Dashboard {});
                }
                Err(e) => {
                    error_msg.set(Some(e.user_message(LOGIN_FALLBACK)));
                }
            }
            loading.set(false);
        }
    };

    rsx! {
        div { class: "auth-page",
            div { class: "auth-card",
                h1 { "Sign In" }
                p { class: "auth-description", "Enter your credentials to access your cases" }

                if let Some(err) = error_msg() {
                    div { class: "auth-error", "{err}" }
                }

                form { onsubmit: handle_login,
                    div { class: "auth-field",
                        label { r#for: "email", "Email" }
                        input {
                            r#type: "email",
                            id: "email",
                            placeholder: "you@example.com",
                            value: email(),
                            oninput: move |e: FormEvent| email.set(e.value()),
                        }
                    }
                    div { class: "auth-field",
                        label { r#for: "password", "Password" }
                        input {
                            r#type: "password",
                            id: "password",
                            value: password(),
                            oninput: move |e: FormEvent| password.set(e.value()),
                        }
                    }
                    button {
                        r#type: "submit",
                        class: "auth-submit button",
                        disabled: loading(),
                        if loading() { "Signing in..." } else { "Sign In" }
                    }
                }

                p { class: "auth-footer",
                    "No account? "
                    Link { to: Route::Register {}, "Register" }
                }
            }
        }
    }
}
