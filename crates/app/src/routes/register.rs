use crate::auth::use_auth;
use crate::routes::Route;
use dioxus::prelude::*;
use shared_types::{AppErrorKind, RegisterRequest, UserRole};
use std::collections::HashMap;

const REGISTER_FALLBACK: &str = "Registration failed.";

/// Account registration page.
#[component]
pub fn Register() -> Element {
    let auth = use_auth();
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut full_name = use_signal(String::new);
    let mut role = use_signal(|| UserRole::Advocate);
    let mut error_msg = use_signal(|| Option::<String>::None);
    let mut field_errors = use_signal(HashMap::<String, String>::new);
    let mut loading = use_signal(|| false);

    let handle_register = move |evt: FormEvent| {
        let store = auth.store().clone();
        async move {
            evt.prevent_default();
            loading.set(true);
            error_msg.set(None);
            field_errors.set(HashMap::new());

            let req = RegisterRequest {
                email: email().trim().to_string(),
                password: password(),
                full_name: full_name().trim().to_string(),
                role: role(),
            };
            match store.register(&req).await {
                Ok(_) => {
                    navigator().push(Route::Dashboard {});
                }
                Err(e) if e.kind == AppErrorKind::ValidationError && !e.field_errors.is_empty() => {
                    field_errors.set(e.field_errors);
                }
                Err(e) => {
                    error_msg.set(Some(e.user_message(REGISTER_FALLBACK)));
                }
            }
            loading.set(false);
        }
    };

    let field_error = move |name: &str| field_errors.read().get(name).cloned();

    rsx! {
        div { class: "auth-page",
            div { class: "auth-card",
                h1 { "Create Account" }

                if let Some(err) = error_msg() {
                    div { class: "auth-error", "{err}" }
                }

                form { onsubmit: handle_register,
                    div { class: "auth-field",
                        label { r#for: "full_name", "Full Name" }
                        input {
                            id: "full_name",
                            value: full_name(),
                            oninput: move |e: FormEvent| full_name.set(e.value()),
                        }
                        if let Some(msg) = field_error("full_name") {
                            span { class: "field-error", "{msg}" }
                        }
                    }
                    div { class: "auth-field",
                        label { r#for: "email", "Email" }
                        input {
                            r#type: "email",
                            id: "email",
                            value: email(),
                            oninput: move |e: FormEvent| email.set(e.value()),
                        }
                        if let Some(msg) = field_error("email") {
                            span { class: "field-error", "{msg}" }
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
                        if let Some(msg) = field_error("password") {
                            span { class: "field-error", "{msg}" }
                        }
                    }
                    div { class: "auth-field",
                        label { r#for: "role", "Role" }
                        select {
                            id: "role",
                            value: role().as_str(),
                            onchange: move |e: FormEvent| role.set(UserRole::from_str_or_default(&e.value())),
                            for option_role in UserRole::REGISTERABLE {
                                option { value: option_role.as_str(), "{option_role.label()}" }
                            }
                        }
                        if let Some(msg) = field_error("role") {
                            span { class: "field-error", "{msg}" }
                        }
                    }
                    button {
                        r#type: "submit",
                        class: "auth-submit button",
                        disabled: loading(),
                        if loading() { "Creating account..." } else { "Register" }
                    }
                }

                p { class: "auth-footer",
                    "Already registered? "
                    Link { to: Route::Login {}, "Sign in" }
                }
            }
        }
    }
}
