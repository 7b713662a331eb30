//! Authentication store: credential lifecycle, persistence and redirects.

mod support;

use std::sync::Arc;

use schooldesk::adapter::storage::MemoryStore;
use schooldesk::domain::{ChangePasswordRequest, LoginRequest, UserPatch};
use schooldesk::error::ApiError;
use schooldesk::port::{put_json, KeyValueStore, Route};
use schooldesk::store::{PersistedAuth, AUTH_STORAGE_KEY};
use schooldesk::testkit::domain::{login_response, user};
use support::harness::Harness;

fn unauthorized() -> ApiError {
    ApiError::Http {
        status: 401,
        message: Some("Invalid username or password".into()),
    }
}

async fn logged_in(h: &Harness, username: &str) {
    h.backend
        .respond("login", login_response(user(1, username, &["ADMIN"])));
    h.app
        .auth
        .login(&LoginRequest::new(username, "secret"))
        .await
        .unwrap();
}

#[tokio::test]
async fn login_persists_and_redirects_home() {
    let h = Harness::new();
    logged_in(&h, "admin").await;
    let auth = &h.app.auth;

    assert!(auth.is_authenticated());
    assert!(auth.is_logged_in());
    assert!(auth.has_role("ADMIN"));
    assert_eq!(auth.full_name(), "Test User");
    assert_eq!(h.bearer().as_deref(), Some("access-admin"));
    assert_eq!(h.navigator.last(), Some(Route::Home));

    let stored = h.stored_auth().expect("auth snapshot persisted");
    let persisted: PersistedAuth = serde_json::from_str(&stored).unwrap();
    assert!(persisted.is_authenticated);
    assert_eq!(persisted.access_token.as_deref(), Some("access-admin"));
    assert_eq!(persisted.refresh_token.as_deref(), Some("refresh-admin"));
    assert!(stored.contains("\"accessToken\""));
}

#[tokio::test]
async fn forced_password_change_redirects_to_change_form() {
    let h = Harness::new();
    let mut teacher = user(2, "teacher", &["TEACHER"]);
    teacher.must_change_password = true;
    h.backend.respond("login", login_response(teacher));
    let auth = &h.app.auth;

    auth.login(&LoginRequest::new("teacher", "temp"))
        .await
        .unwrap();

    assert!(auth.is_authenticated());
    assert!(auth.needs_password_change());
    assert_eq!(h.navigator.last(), Some(Route::ChangePassword));

    h.backend.respond("change_password", "Password changed".to_string());
    auth.change_password(&ChangePasswordRequest {
        current_password: "temp".into(),
        new_password: "n3w-pass".into(),
        confirm_password: "n3w-pass".into(),
    })
    .await
    .unwrap();

    assert!(!auth.needs_password_change());
    assert_eq!(h.navigator.last(), Some(Route::Home));
    assert!(h.stored_auth().unwrap().contains("\"mustChangePassword\":false"));
}

#[tokio::test]
async fn failed_login_clears_existing_session() {
    let h = Harness::new();
    logged_in(&h, "admin").await;
    h.backend.fail("login", unauthorized());
    let auth = &h.app.auth;

    let result = auth.login(&LoginRequest::new("admin", "wrong")).await;

    assert!(result.is_err());
    assert!(!auth.is_authenticated());
    assert_eq!(auth.user(), None);
    assert_eq!(auth.error().as_deref(), Some("Invalid username or password"));
    assert_eq!(h.stored_auth(), None);
    assert_eq!(h.bearer(), None);
}

#[tokio::test]
async fn login_failure_without_message_uses_fallback() {
    let h = Harness::new();
    h.backend
        .fail("login", ApiError::Network("connection refused".into()));

    assert!(h
        .app
        .auth
        .login(&LoginRequest::new("admin", "secret"))
        .await
        .is_err());
    assert_eq!(h.app.auth.error().as_deref(), Some("Login failed"));
}

#[tokio::test]
async fn logout_clears_local_state_even_when_server_fails() {
    let h = Harness::new();
    logged_in(&h, "admin").await;
    h.backend.fail(
        "logout",
        ApiError::Http {
            status: 500,
            message: None,
        },
    );
    let auth = &h.app.auth;

    auth.logout().await;

    assert_eq!(
        h.backend.last_args("logout").as_deref(),
        Some("access-admin")
    );
    assert!(!auth.is_authenticated());
    assert!(!auth.is_loading());
    assert_eq!(auth.access_token(), None);
    assert_eq!(h.stored_auth(), None);
    assert_eq!(h.bearer(), None);
    assert_eq!(h.navigator.last(), Some(Route::Login));
}

#[tokio::test]
async fn anonymous_logout_skips_server_call() {
    let h = Harness::new();

    h.app.auth.logout().await;

    assert_eq!(h.backend.call_count("logout"), 0);
    assert_eq!(h.navigator.last(), Some(Route::Login));
}

#[tokio::test]
async fn session_is_restored_from_storage() {
    let storage = Arc::new(MemoryStore::new());
    let snapshot = PersistedAuth {
        user: Some(user(7, "registrar", &["STAFF"])),
        access_token: Some("stored-access".into()),
        refresh_token: Some("stored-refresh".into()),
        is_authenticated: true,
    };
    put_json(storage.as_ref(), AUTH_STORAGE_KEY, &snapshot).unwrap();

    let h = Harness::with_storage(storage);
    let auth = &h.app.auth;

    assert!(auth.is_logged_in());
    assert_eq!(auth.user().map(|u| u.username).as_deref(), Some("registrar"));
    assert_eq!(h.bearer().as_deref(), Some("stored-access"));
    assert!(h.navigator.routes().is_empty());
}

#[tokio::test]
async fn incomplete_snapshot_is_ignored() {
    let storage = Arc::new(MemoryStore::new());
    storage
        .set(AUTH_STORAGE_KEY, r#"{"accessToken":"orphan","isAuthenticated":true}"#)
        .unwrap();

    let h = Harness::with_storage(storage);

    assert!(!h.app.auth.is_authenticated());
    assert_eq!(h.bearer(), None);
}

#[tokio::test]
async fn refresh_swaps_tokens() {
    let h = Harness::new();
    logged_in(&h, "admin").await;
    let mut refreshed = login_response(user(1, "admin", &["ADMIN"]));
    refreshed.access_token = "access-2".into();
    refreshed.refresh_token = "refresh-2".into();
    h.backend.respond("refresh_token", refreshed);
    let auth = &h.app.auth;

    assert!(auth.refresh_current_token().await.unwrap());

    assert_eq!(
        h.backend.last_args("refresh_token").as_deref(),
        Some("refresh-admin")
    );
    assert_eq!(h.bearer().as_deref(), Some("access-2"));
    assert!(h.stored_auth().unwrap().contains("refresh-2"));
    assert!(auth.is_authenticated());
}

#[tokio::test]
async fn refresh_without_token_deauthenticates_locally() {
    let h = Harness::new();

    assert!(!h.app.auth.refresh_current_token().await.unwrap());

    assert_eq!(h.backend.call_count("refresh_token"), 0);
    assert_eq!(h.navigator.last(), Some(Route::Login));
}

#[tokio::test]
async fn failed_refresh_signs_out() {
    let h = Harness::new();
    logged_in(&h, "admin").await;
    h.backend.fail("refresh_token", unauthorized());

    assert!(h.app.auth.refresh_current_token().await.is_err());

    assert!(!h.app.auth.is_authenticated());
    assert_eq!(h.stored_auth(), None);
    assert_eq!(h.navigator.last(), Some(Route::Login));
}

#[tokio::test]
async fn validate_token_is_a_probe() {
    let h = Harness::new();
    assert!(!h.app.auth.validate_token().await.unwrap());
    assert_eq!(h.backend.call_count("validate_token"), 0);

    logged_in(&h, "admin").await;
    h.backend.respond("validate_token", false);
    let before = h.app.auth.state();

    assert!(!h.app.auth.validate_token().await.unwrap());
    assert_eq!(h.app.auth.state(), before);
}

#[tokio::test]
async fn user_patch_merges_and_persists() {
    let h = Harness::new();
    logged_in(&h, "admin").await;

    h.app.auth.update_user(UserPatch {
        email: Some("admin@school.test".into()),
        ..UserPatch::default()
    });

    assert_eq!(
        h.app.auth.user().map(|u| u.email).as_deref(),
        Some("admin@school.test")
    );
    assert!(h.stored_auth().unwrap().contains("admin@school.test"));
}
