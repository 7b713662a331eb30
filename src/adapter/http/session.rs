use std::sync::Arc;

use async_trait::async_trait;
use reqwest::Method;

use super::{segment, ApiClient, Bearer};
use crate::domain::{page_query, ListParams, Page, Session, SessionRequest, SessionStatus};
use crate::port::{ApiResult, SessionGateway};

const BASE: &str = "/api/academic/sessions";

/// Academic session endpoints over HTTP.
pub struct HttpSessionGateway {
    client: Arc<ApiClient>,
}

impl HttpSessionGateway {
    #[must_use]
    pub fn new(client: Arc<ApiClient>) -> Self {
        Self { client }
    }

    async fn transition(&self, id: i64, action: &str) -> ApiResult<String> {
        self.client
            .confirm(
                Method::PUT,
                &format!("{BASE}/{id}/{action}"),
                &[],
                Bearer::Ambient,
            )
            .await
    }
}

#[async_trait]
impl SessionGateway for HttpSessionGateway {
    async fn create_session(&self, request: &SessionRequest) -> ApiResult<Session> {
        self.client
            .call(Method::POST, BASE, &[], Some(request), Bearer::Ambient)
            .await
    }

    async fn get_session_by_id(&self, id: i64) -> ApiResult<Session> {
        self.client.get(&format!("{BASE}/{id}"), &[]).await
    }

    async fn get_session_by_name(&self, name: &str) -> ApiResult<Session> {
        self.client
            .get(&format!("{BASE}/name/{}", segment(name)), &[])
            .await
    }

    async fn get_all_sessions(&self, params: &ListParams) -> ApiResult<Page<Session>> {
        self.client.get(BASE, &params.query("sessionName")).await
    }

    async fn get_sessions_by_status(
        &self,
        status: SessionStatus,
        page: u32,
        size: Option<u32>,
    ) -> ApiResult<Page<Session>> {
        self.client
            .get(
                &format!("{BASE}/status/{}", status.as_path()),
                &page_query(page, size),
            )
            .await
    }

    async fn get_active_session(&self) -> ApiResult<Session> {
        self.client.get(&format!("{BASE}/active"), &[]).await
    }

    async fn get_upcoming_session(&self) -> ApiResult<Session> {
        self.client.get(&format!("{BASE}/upcoming"), &[]).await
    }

    async fn update_session(&self, id: i64, request: &SessionRequest) -> ApiResult<Session> {
        self.client
            .call(
                Method::PUT,
                &format!("{BASE}/{id}"),
                &[],
                Some(request),
                Bearer::Ambient,
            )
            .await
    }

    async fn activate_session(&self, id: i64) -> ApiResult<String> {
        self.transition(id, "activate").await
    }

    async fn deactivate_session(&self, id: i64) -> ApiResult<String> {
        self.transition(id, "deactivate").await
    }

    async fn archive_session(&self, id: i64) -> ApiResult<String> {
        self.transition(id, "archive").await
    }

    async fn delete_session(&self, id: i64) -> ApiResult<String> {
        self.client
            .confirm(Method::DELETE, &format!("{BASE}/{id}"), &[], Bearer::Ambient)
            .await
    }
}
