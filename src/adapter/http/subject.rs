use std::sync::Arc;

use async_trait::async_trait;
use reqwest::Method;

use super::{segment, ApiClient, Bearer};
use crate::domain::{page_query, ListParams, Page, Subject, SubjectRequest};
use crate::port::{ApiResult, SubjectGateway};

const BASE: &str = "/api/academic/subjects";

/// Subject endpoints over HTTP.
pub struct HttpSubjectGateway {
    client: Arc<ApiClient>,
}

impl HttpSubjectGateway {
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
impl SubjectGateway for HttpSubjectGateway {
    async fn create_subject(&self, request: &SubjectRequest) -> ApiResult<Subject> {
        self.client
            .call(Method::POST, BASE, &[], Some(request), Bearer::Ambient)
            .await
    }

    async fn get_subject_by_id(&self, id: i64) -> ApiResult<Subject> {
        self.client.get(&format!("{BASE}/{id}"), &[]).await
    }

    async fn get_subject_by_name(&self, name: &str) -> ApiResult<Subject> {
        self.client
            .get(&format!("{BASE}/name/{}", segment(name)), &[])
            .await
    }

    async fn get_subject_by_code(&self, code: &str) -> ApiResult<Subject> {
        self.client
            .get(&format!("{BASE}/code/{}", segment(code)), &[])
            .await
    }

    async fn get_all_subjects(&self, params: &ListParams) -> ApiResult<Page<Subject>> {
        self.client.get(BASE, &params.query("subjectName")).await
    }

    async fn get_active_subjects(&self) -> ApiResult<Vec<Subject>> {
        self.client.get(&format!("{BASE}/active"), &[]).await
    }

    async fn get_subjects_by_status(
        &self,
        is_active: bool,
        page: u32,
        size: Option<u32>,
    ) -> ApiResult<Page<Subject>> {
        let mut query = vec![("isActive", is_active.to_string())];
        query.extend(page_query(page, size));
        self.client.get(&format!("{BASE}/status"), &query).await
    }

    async fn update_subject(&self, id: i64, request: &SubjectRequest) -> ApiResult<Subject> {
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

    async fn activate_subject(&self, id: i64) -> ApiResult<String> {
        self.transition(id, "activate").await
    }

    async fn deactivate_subject(&self, id: i64) -> ApiResult<String> {
        self.transition(id, "deactivate").await
    }

    async fn delete_subject(&self, id: i64) -> ApiResult<String> {
        self.client
            .confirm(Method::DELETE, &format!("{BASE}/{id}"), &[], Bearer::Ambient)
            .await
    }
}
