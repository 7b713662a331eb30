use std::sync::Arc;

use async_trait::async_trait;
use reqwest::Method;

use super::{ApiClient, Bearer};
use crate::domain::{page_query, ClassRequest, ListParams, Page, SchoolClass};
use crate::port::{ApiResult, ClassGateway};

const BASE: &str = "/api/academic/classes";

/// School class endpoints over HTTP.
pub struct HttpClassGateway {
    client: Arc<ApiClient>,
}

impl HttpClassGateway {
    #[must_use]
    pub fn new(client: Arc<ApiClient>) -> Self {
        Self { client }
    }
}

#[async_trait]
impl ClassGateway for HttpClassGateway {
    async fn create_class(&self, request: &ClassRequest) -> ApiResult<SchoolClass> {
        self.client
            .call(Method::POST, BASE, &[], Some(request), Bearer::Ambient)
            .await
    }

    async fn get_class_by_id(&self, id: i64) -> ApiResult<SchoolClass> {
        self.client.get(&format!("{BASE}/{id}"), &[]).await
    }

    async fn get_all_classes(&self, params: &ListParams) -> ApiResult<Page<SchoolClass>> {
        self.client.get(BASE, &params.query("className")).await
    }

    async fn get_classes_by_session(
        &self,
        session_id: i64,
        page: u32,
        size: Option<u32>,
    ) -> ApiResult<Page<SchoolClass>> {
        self.client
            .get(
                &format!("{BASE}/session/{session_id}"),
                &page_query(page, size),
            )
            .await
    }

    async fn get_active_classes_by_session(&self, session_id: i64) -> ApiResult<Vec<SchoolClass>> {
        self.client
            .get(&format!("{BASE}/session/{session_id}/active"), &[])
            .await
    }

    async fn update_class(&self, id: i64, request: &ClassRequest) -> ApiResult<SchoolClass> {
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

    async fn activate_class(&self, id: i64) -> ApiResult<String> {
        self.client
            .confirm(
                Method::PUT,
                &format!("{BASE}/{id}/activate"),
                &[],
                Bearer::Ambient,
            )
            .await
    }

    async fn deactivate_class(&self, id: i64) -> ApiResult<String> {
        self.client
            .confirm(
                Method::PUT,
                &format!("{BASE}/{id}/deactivate"),
                &[],
                Bearer::Ambient,
            )
            .await
    }

    async fn delete_class(&self, id: i64) -> ApiResult<String> {
        self.client
            .confirm(Method::DELETE, &format!("{BASE}/{id}"), &[], Bearer::Ambient)
            .await
    }
}
