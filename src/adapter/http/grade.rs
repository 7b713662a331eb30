use std::sync::Arc;

use async_trait::async_trait;
use reqwest::Method;
use rust_decimal::Decimal;

use super::{ApiClient, Bearer};
use crate::domain::{GradeBoundary, GradeBoundaryRequest};
use crate::port::{ApiResult, GradeBoundaryGateway};

const BASE: &str = "/api/academic/grade-boundaries";

/// Grade boundary endpoints over HTTP.
///
/// Create and update send their fields as query parameters with no body.
pub struct HttpGradeBoundaryGateway {
    client: Arc<ApiClient>,
}

impl HttpGradeBoundaryGateway {
    #[must_use]
    pub fn new(client: Arc<ApiClient>) -> Self {
        Self { client }
    }
}

#[async_trait]
impl GradeBoundaryGateway for HttpGradeBoundaryGateway {
    async fn create_grade_boundary(
        &self,
        request: &GradeBoundaryRequest,
    ) -> ApiResult<GradeBoundary> {
        self.client
            .call::<(), _>(Method::POST, BASE, &request.query(), None, Bearer::Ambient)
            .await
    }

    async fn get_all_grade_boundaries(&self) -> ApiResult<Vec<GradeBoundary>> {
        self.client.get(BASE, &[]).await
    }

    async fn get_grade_boundary_by_id(&self, id: i64) -> ApiResult<GradeBoundary> {
        self.client.get(&format!("{BASE}/{id}"), &[]).await
    }

    async fn calculate_grade(&self, percentage: Decimal) -> ApiResult<String> {
        self.client
            .confirm(
                Method::GET,
                &format!("{BASE}/calculate-grade"),
                &[("percentage", percentage.normalize().to_string())],
                Bearer::Ambient,
            )
            .await
    }

    async fn update_grade_boundary(
        &self,
        id: i64,
        request: &GradeBoundaryRequest,
    ) -> ApiResult<GradeBoundary> {
        self.client
            .call::<(), _>(
                Method::PUT,
                &format!("{BASE}/{id}"),
                &request.query(),
                None,
                Bearer::Ambient,
            )
            .await
    }

    async fn delete_grade_boundary(&self, id: i64) -> ApiResult<String> {
        self.client
            .confirm(Method::DELETE, &format!("{BASE}/{id}"), &[], Bearer::Ambient)
            .await
    }

    async fn setup_default_grade_boundaries(&self) -> ApiResult<Vec<GradeBoundary>> {
        self.client
            .call::<(), _>(
                Method::POST,
                &format!("{BASE}/setup-defaults"),
                &[],
                None,
                Bearer::Ambient,
            )
            .await
    }
}
