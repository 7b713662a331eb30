use std::sync::Arc;

use async_trait::async_trait;
use reqwest::Method;

use super::{ApiClient, Bearer};
use crate::domain::{ChangePasswordRequest, LoginRequest, LoginResponse};
use crate::port::{ApiResult, AuthGateway};

const BASE: &str = "/api/auth";

/// Authentication endpoints over HTTP.
pub struct HttpAuthGateway {
    client: Arc<ApiClient>,
}

impl HttpAuthGateway {
    #[must_use]
    pub fn new(client: Arc<ApiClient>) -> Self {
        Self { client }
    }
}

#[async_trait]
impl AuthGateway for HttpAuthGateway {
    async fn login(&self, request: &LoginRequest) -> ApiResult<LoginResponse> {
        self.client
            .call(
                Method::POST,
                &format!("{BASE}/login"),
                &[],
                Some(request),
                Bearer::Ambient,
            )
            .await
    }

    async fn refresh_token(&self, refresh_token: &str) -> ApiResult<LoginResponse> {
        self.client
            .call::<(), _>(
                Method::POST,
                &format!("{BASE}/refresh"),
                &[],
                None,
                Bearer::Explicit(refresh_token),
            )
            .await
    }

    async fn logout(&self, access_token: &str) -> ApiResult<String> {
        self.client
            .confirm(
                Method::POST,
                &format!("{BASE}/logout"),
                &[],
                Bearer::Explicit(access_token),
            )
            .await
    }

    async fn change_password(&self, request: &ChangePasswordRequest) -> ApiResult<String> {
        let text: serde_json::Value = self
            .client
            .call(
                Method::POST,
                &format!("{BASE}/change-password"),
                &[],
                Some(request),
                Bearer::Ambient,
            )
            .await?;
        Ok(match text {
            serde_json::Value::String(message) => message,
            serde_json::Value::Null => String::new(),
            other => other.to_string(),
        })
    }

    async fn reset_password(&self, user_id: i64, new_password: &str) -> ApiResult<String> {
        self.client
            .confirm(
                Method::POST,
                &format!("{BASE}/reset-password/{user_id}"),
                &[("newPassword", new_password.to_string())],
                Bearer::Ambient,
            )
            .await
    }

    async fn validate_token(&self, token: &str) -> ApiResult<bool> {
        self.client
            .call::<(), _>(
                Method::GET,
                &format!("{BASE}/validate"),
                &[],
                None,
                Bearer::Explicit(token),
            )
            .await
    }
}
