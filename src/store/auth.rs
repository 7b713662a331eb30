//! Authentication store.
//!
//! Owns the credential lifecycle and is the only writer of the persisted
//! auth snapshot. Every write that leaves the store authenticated persists
//! `{user, accessToken, refreshToken, isAuthenticated}` under
//! [`AUTH_STORAGE_KEY`]; de-authenticating transitions remove the entry.
//! The current access token is mirrored into a shared [`TokenSlot`] read by
//! the HTTP client for bearer decoration.

use std::fmt;
use std::sync::Arc;

use parking_lot::{Mutex, RwLock};
use serde::{Deserialize, Serialize};
use tokio::sync::broadcast;
use tracing::{info, warn};

use super::observable::Observable;
use super::request::{request_state, run};
use crate::domain::{ChangePasswordRequest, LoginRequest, LoginResponse, UserInfo, UserPatch};
use crate::port::{
    put_json, ApiResult, AuthGateway, KeyValueStore, Navigator, Route, TokenSource,
};

/// Durable storage key of the auth snapshot.
pub const AUTH_STORAGE_KEY: &str = "auth_state";

#[derive(Clone, Default, PartialEq)]
pub struct AuthState {
    pub user: Option<UserInfo>,
    pub access_token: Option<String>,
    pub refresh_token: Option<String>,
    pub is_authenticated: bool,
    pub is_loading: bool,
    pub error: Option<String>,
}

request_state!(AuthState);

impl AuthState {
    fn deauthenticate(&mut self) {
        self.user = None;
        self.access_token = None;
        self.refresh_token = None;
        self.is_authenticated = false;
    }

    fn apply_tokens(&mut self, response: &LoginResponse) {
        self.user = Some(response.user.clone());
        self.access_token = Some(response.access_token.clone());
        self.refresh_token = Some(response.refresh_token.clone());
    }
}

impl fmt::Debug for AuthState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AuthState")
            .field("user", &self.user.as_ref().map(|u| &u.username))
            .field("has_access_token", &self.access_token.is_some())
            .field("has_refresh_token", &self.refresh_token.is_some())
            .field("is_authenticated", &self.is_authenticated)
            .field("is_loading", &self.is_loading)
            .field("error", &self.error)
            .finish()
    }
}

/// The persisted subset of [`AuthState`].
#[derive(Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PersistedAuth {
    #[serde(default)]
    pub user: Option<UserInfo>,
    #[serde(default)]
    pub access_token: Option<String>,
    #[serde(default)]
    pub refresh_token: Option<String>,
    #[serde(default)]
    pub is_authenticated: bool,
}

impl PersistedAuth {
    fn from_state(state: &AuthState) -> Self {
        Self {
            user: state.user.clone(),
            access_token: state.access_token.clone(),
            refresh_token: state.refresh_token.clone(),
            is_authenticated: state.is_authenticated,
        }
    }

    /// Restored state, if the snapshot carries both a token and a user.
    fn into_state(self) -> Option<AuthState> {
        if self.access_token.is_none() || self.user.is_none() {
            return None;
        }
        Some(AuthState {
            user: self.user,
            access_token: self.access_token,
            refresh_token: self.refresh_token,
            is_authenticated: self.is_authenticated,
            is_loading: false,
            error: None,
        })
    }
}

/// Shared holder of the current access token.
#[derive(Default)]
pub struct TokenSlot {
    token: RwLock<Option<String>>,
}

impl TokenSlot {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn set(&self, token: Option<String>) {
        *self.token.write() = token;
    }
}

impl TokenSource for TokenSlot {
    fn access_token(&self) -> Option<String> {
        self.token.read().clone()
    }
}

pub struct AuthStore {
    gateway: Arc<dyn AuthGateway>,
    storage: Arc<dyn KeyValueStore>,
    navigator: Arc<dyn Navigator>,
    state: Observable<AuthState>,
}

impl AuthStore {
    /// Create the store, restoring any persisted session.
    pub fn new(
        gateway: Arc<dyn AuthGateway>,
        storage: Arc<dyn KeyValueStore>,
        navigator: Arc<dyn Navigator>,
        tokens: Arc<TokenSlot>,
    ) -> Self {
        let initial = restore(storage.as_ref()).unwrap_or_default();
        tokens.set(initial.access_token.clone());

        let state = Observable::new(initial);
        let last_saved = Mutex::new(None::<PersistedAuth>);
        let sink = Arc::clone(&storage);
        state.on_change(move |current: &AuthState| {
            tokens.set(current.access_token.clone());
            if !current.is_authenticated {
                *last_saved.lock() = None;
                return;
            }
            let snapshot = PersistedAuth::from_state(current);
            let mut last = last_saved.lock();
            if last.as_ref() == Some(&snapshot) {
                return;
            }
            match put_json(sink.as_ref(), AUTH_STORAGE_KEY, &snapshot) {
                Ok(()) => *last = Some(snapshot),
                Err(e) => warn!(error = %e, "Failed to persist auth state"),
            }
        });

        Self {
            gateway,
            storage,
            navigator,
            state,
        }
    }

    #[must_use]
    pub fn state(&self) -> AuthState {
        self.state.get()
    }

    #[must_use]
    pub fn subscribe(&self) -> broadcast::Receiver<AuthState> {
        self.state.subscribe()
    }

    #[must_use]
    pub fn user(&self) -> Option<UserInfo> {
        self.state.read(|s| s.user.clone())
    }

    #[must_use]
    pub fn access_token(&self) -> Option<String> {
        self.state.read(|s| s.access_token.clone())
    }

    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.state.read(|s| s.is_authenticated)
    }

    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.state.read(|s| s.is_loading)
    }

    #[must_use]
    pub fn error(&self) -> Option<String> {
        self.state.read(|s| s.error.clone())
    }

    /// Authenticated and holding an access token.
    #[must_use]
    pub fn is_logged_in(&self) -> bool {
        self.state
            .read(|s| s.is_authenticated && s.access_token.is_some())
    }

    /// Display name of the signed-in user, or empty when anonymous.
    #[must_use]
    pub fn full_name(&self) -> String {
        self.state
            .read(|s| s.user.as_ref().map(UserInfo::full_name).unwrap_or_default())
    }

    #[must_use]
    pub fn needs_password_change(&self) -> bool {
        self.state
            .read(|s| s.user.as_ref().is_some_and(|u| u.must_change_password))
    }

    #[must_use]
    pub fn has_role(&self, role: &str) -> bool {
        self.state
            .read(|s| s.user.as_ref().is_some_and(|u| u.has_role(role)))
    }

    /// Sign in.
    ///
    /// Success redirects to the password-change view when the user must
    /// change their password, otherwise home. Failure always leaves the
    /// store anonymous, even if a session existed before.
    pub async fn login(&self, credentials: &LoginRequest) -> ApiResult<LoginResponse> {
        let result = run(
            &self.state,
            "login",
            "Login failed",
            self.gateway.login(credentials),
            |s, response| {
                s.apply_tokens(response);
                s.is_authenticated = true;
            },
        )
        .await;

        match &result {
            Ok(response) => {
                info!(user = %response.user.username, "Logged in");
                let route = if response.user.must_change_password {
                    Route::ChangePassword
                } else {
                    Route::Home
                };
                self.navigator.navigate(route);
            }
            Err(_) => {
                self.state.update(AuthState::deauthenticate);
                self.clear_storage();
            }
        }
        result
    }

    /// Sign out.
    ///
    /// Local state and storage are cleared whether or not the server call
    /// succeeds; a server failure is only logged.
    pub async fn logout(&self) {
        self.state.update(|s| s.is_loading = true);

        if let Some(token) = self.access_token() {
            if let Err(e) = self.gateway.logout(&token).await {
                warn!(error = %e, "Server logout failed; clearing local session anyway");
            }
        }

        self.state.replace(AuthState::default());
        self.clear_storage();
        info!("Logged out");
        self.navigator.navigate(Route::Login);
    }

    /// Swap in fresh tokens using the refresh token.
    ///
    /// Returns `Ok(false)` without a server call when no refresh token is
    /// held; the store is then de-authenticated. Does not touch the loading
    /// flag.
    pub async fn refresh_current_token(&self) -> ApiResult<bool> {
        let Some(refresh_token) = self.state.read(|s| s.refresh_token.clone()) else {
            self.state.replace(AuthState::default());
            self.clear_storage();
            self.navigator.navigate(Route::Login);
            return Ok(false);
        };

        match self.gateway.refresh_token(&refresh_token).await {
            Ok(response) => {
                self.state.update(|s| s.apply_tokens(&response));
                info!(user = %response.user.username, "Token refreshed");
                Ok(true)
            }
            Err(e) => {
                warn!(error = %e, "Token refresh failed");
                self.state.replace(AuthState::default());
                self.clear_storage();
                self.navigator.navigate(Route::Login);
                Err(e)
            }
        }
    }

    /// Change the current user's password and clear the forced-change flag.
    pub async fn change_password(&self, request: &ChangePasswordRequest) -> ApiResult<String> {
        let result = run(
            &self.state,
            "change_password",
            "Password change failed",
            self.gateway.change_password(request),
            |s, _| {
                if let Some(user) = s.user.as_mut() {
                    user.must_change_password = false;
                }
            },
        )
        .await;

        if result.is_ok() {
            info!("Password changed");
            self.navigator.navigate(Route::Home);
        }
        result
    }

    /// Administrative reset of another user's password.
    pub async fn reset_password(&self, user_id: i64, new_password: &str) -> ApiResult<String> {
        run(
            &self.state,
            "reset_password",
            "Password reset failed",
            self.gateway.reset_password(user_id, new_password),
            |_, _| {},
        )
        .await
    }

    /// Ask the backend whether the current access token is still valid.
    ///
    /// A probe only: no state changes. Anonymous stores report `false`.
    pub async fn validate_token(&self) -> ApiResult<bool> {
        match self.access_token() {
            Some(token) => self.gateway.validate_token(&token).await,
            None => Ok(false),
        }
    }

    pub fn set_error(&self, error: Option<String>) {
        self.state.update(|s| s.error = error);
    }

    pub fn clear_error(&self) {
        self.state.update(|s| s.error = None);
    }

    /// Merge a partial update into the cached user. No-op when anonymous.
    pub fn update_user(&self, patch: UserPatch) {
        self.state.update(|s| {
            if let Some(user) = s.user.as_mut() {
                patch.apply(user);
            }
        });
    }

    fn clear_storage(&self) {
        if let Err(e) = self.storage.remove(AUTH_STORAGE_KEY) {
            warn!(error = %e, "Failed to clear persisted auth state");
        }
    }
}

fn restore(storage: &dyn KeyValueStore) -> Option<AuthState> {
    let raw = match storage.get(AUTH_STORAGE_KEY) {
        Ok(raw) => raw?,
        Err(e) => {
            warn!(error = %e, "Failed to read persisted auth state");
            return None;
        }
    };
    match serde_json::from_str::<PersistedAuth>(&raw) {
        Ok(persisted) => persisted.into_state(),
        Err(e) => {
            warn!(error = %e, "Ignoring unreadable auth state");
            None
        }
    }
}
