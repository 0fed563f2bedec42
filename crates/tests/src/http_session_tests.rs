use pretty_assertions::assert_eq;
use shared_types::{AppErrorKind, RegisterRequest, UserRole};

use client::{CaseApi, LocalState, SessionState, SessionStore};

use crate::common;

#[tokio::test]
async fn test_session_lifecycle_over_http() {
    let (base, log) = common::spawn_backend().await;
    let api = common::http_api(&base);
    let store = SessionStore::new(api.clone(), LocalState::new(SessionState::default()));

    store.initialize().await;
    assert_eq!(store.state(), SessionState::Anonymous);

    let err = store.login("judy@court.gov", "wrong").await.unwrap_err();
    assert_eq!(err.kind, AppErrorKind::Unauthorized);
    assert_eq!(err.user_message("Login failed."), "Invalid email or password");
    assert_eq!(store.state(), SessionState::Anonymous);

    let user = store.login("judy@court.gov", "secret").await.unwrap();
    assert_eq!(user.user_id, "7");
    assert_eq!(user.role, UserRole::Judge);

    // Clones share the cookie jar, so the server sees the same session.
    let restored = api.session().await.unwrap();
    assert_eq!(restored, Some(user));

    store.logout().await.unwrap();
    assert_eq!(store.state(), SessionState::Anonymous);
    assert_eq!(log.lock().unwrap().logouts, 1);
    assert_eq!(api.session().await.unwrap(), None);
}

#[tokio::test]
async fn test_register_over_http() {
    let (base, _log) = common::spawn_backend().await;
    let store = SessionStore::new(
        common::http_api(&base),
        LocalState::new(SessionState::default()),
    );
    store.initialize().await;

    let mut req = RegisterRequest {
        email: "taken@example.com".into(),
        password: "pw".into(),
        full_name: "Pat Lee".into(),
        role: UserRole::PrivateIntel,
    };
    let err = store.register(&req).await.unwrap_err();
    assert_eq!(err.kind, AppErrorKind::Conflict);
    assert_eq!(err.user_message("Registration failed."), "Email already registered");

    req.email = "pat@example.com".into();
    let user = store.register(&req).await.unwrap();

    assert_eq!(user.user_id, "u-new");
    assert_eq!(user.role, UserRole::PrivateIntel);
    assert_eq!(user.full_name, "Pat Lee");
    assert!(store.api().session().await.unwrap().is_some());
}
