use std::sync::Arc;

use async_trait::async_trait;
use reqwest::Method;

use super::{ApiClient, Bearer};
use crate::domain::{ClassSubject, ClassSubjectRequest};
use crate::port::{ApiResult, ClassSubjectGateway};

const BASE: &str = "/api/academic/class-subjects";

/// Class-subject link endpoints over HTTP.
pub struct HttpClassSubjectGateway {
    client: Arc<ApiClient>,
}

impl HttpClassSubjectGateway {
    #[must_use]
    pub fn new(client: Arc<ApiClient>) -> Self {
        Self { client }
    }
}

#[async_trait]
impl ClassSubjectGateway for HttpClassSubjectGateway {
    async fn assign_subject_to_class(
        &self,
        request: &ClassSubjectRequest,
    ) -> ApiResult<ClassSubject> {
        self.client
            .call(Method::POST, BASE, &[], Some(request), Bearer::Ambient)
            .await
    }

    async fn get_class_subject_by_id(&self, id: i64) -> ApiResult<ClassSubject> {
        self.client.get(&format!("{BASE}/{id}"), &[]).await
    }

    async fn get_subjects_by_class(&self, class_id: i64) -> ApiResult<Vec<ClassSubject>> {
        self.client.get(&format!("{BASE}/class/{class_id}"), &[]).await
    }

    async fn get_classes_by_subject(&self, subject_id: i64) -> ApiResult<Vec<ClassSubject>> {
        self.client
            .get(&format!("{BASE}/subject/{subject_id}"), &[])
            .await
    }

    async fn update_class_subject(
        &self,
        id: i64,
        request: &ClassSubjectRequest,
    ) -> ApiResult<ClassSubject> {
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

    async fn remove_subject_from_class(&self, id: i64) -> ApiResult<String> {
        self.client
            .confirm(Method::DELETE, &format!("{BASE}/{id}"), &[], Bearer::Ambient)
            .await
    }

    async fn bulk_assign_subjects_to_class(
        &self,
        class_id: i64,
        subject_ids: &[i64],
    ) -> ApiResult<Vec<ClassSubject>> {
        self.client
            .call(
                Method::POST,
                &format!("{BASE}/class/{class_id}/bulk-assign"),
                &[],
                Some(subject_ids),
                Bearer::Ambient,
            )
            .await
    }

    async fn copy_subjects_from_class(
        &self,
        source_class_id: i64,
        target_class_id: i64,
    ) -> ApiResult<Vec<ClassSubject>> {
        self.client
            .call::<(), _>(
                Method::POST,
                &format!("{BASE}/copy-subjects"),
                &[
                    ("sourceClassId", source_class_id.to_string()),
                    ("targetClassId", target_class_id.to_string()),
                ],
                None,
                Bearer::Ambient,
            )
            .await
    }
}
