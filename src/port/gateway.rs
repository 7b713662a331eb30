//! Resource gateway ports.
//!
//! One trait per backend resource. Each method maps to exactly one HTTP
//! request: no retries, no caching, no state. State-transition calls return
//! the backend's opaque confirmation text, which callers are free to ignore.

use async_trait::async_trait;
use rust_decimal::Decimal;

use crate::domain::{
    ClassRequest, ClassSubject, ClassSubjectRequest, GradeBoundary, GradeBoundaryRequest,
    ListParams, LoginRequest, LoginResponse, ChangePasswordRequest, Page, SchoolClass, Session,
    SessionRequest, SessionStatus, Subject, SubjectRequest,
};
use crate::error::ApiError;

pub type ApiResult<T> = Result<T, ApiError>;

/// Academic session endpoints.
#[async_trait]
pub trait SessionGateway: Send + Sync {
    async fn create_session(&self, request: &SessionRequest) -> ApiResult<Session>;

    async fn get_session_by_id(&self, id: i64) -> ApiResult<Session>;

    async fn get_session_by_name(&self, name: &str) -> ApiResult<Session>;

    /// Paged list; sorts by session name unless told otherwise.
    async fn get_all_sessions(&self, params: &ListParams) -> ApiResult<Page<Session>>;

    async fn get_sessions_by_status(
        &self,
        status: SessionStatus,
        page: u32,
        size: Option<u32>,
    ) -> ApiResult<Page<Session>>;

    async fn get_active_session(&self) -> ApiResult<Session>;

    async fn get_upcoming_session(&self) -> ApiResult<Session>;

    async fn update_session(&self, id: i64, request: &SessionRequest) -> ApiResult<Session>;

    async fn activate_session(&self, id: i64) -> ApiResult<String>;

    async fn deactivate_session(&self, id: i64) -> ApiResult<String>;

    async fn archive_session(&self, id: i64) -> ApiResult<String>;

    async fn delete_session(&self, id: i64) -> ApiResult<String>;
}

/// School class endpoints.
#[async_trait]
pub trait ClassGateway: Send + Sync {
    async fn create_class(&self, request: &ClassRequest) -> ApiResult<SchoolClass>;

    async fn get_class_by_id(&self, id: i64) -> ApiResult<SchoolClass>;

    /// Paged list; sorts by class name unless told otherwise.
    async fn get_all_classes(&self, params: &ListParams) -> ApiResult<Page<SchoolClass>>;

    async fn get_classes_by_session(
        &self,
        session_id: i64,
        page: u32,
        size: Option<u32>,
    ) -> ApiResult<Page<SchoolClass>>;

    async fn get_active_classes_by_session(&self, session_id: i64) -> ApiResult<Vec<SchoolClass>>;

    async fn update_class(&self, id: i64, request: &ClassRequest) -> ApiResult<SchoolClass>;

    async fn activate_class(&self, id: i64) -> ApiResult<String>;

    async fn deactivate_class(&self, id: i64) -> ApiResult<String>;

    async fn delete_class(&self, id: i64) -> ApiResult<String>;
}

/// Subject endpoints.
#[async_trait]
pub trait SubjectGateway: Send + Sync {
    async fn create_subject(&self, request: &SubjectRequest) -> ApiResult<Subject>;

    async fn get_subject_by_id(&self, id: i64) -> ApiResult<Subject>;

    async fn get_subject_by_name(&self, name: &str) -> ApiResult<Subject>;

    async fn get_subject_by_code(&self, code: &str) -> ApiResult<Subject>;

    /// Paged list; sorts by subject name unless told otherwise.
    async fn get_all_subjects(&self, params: &ListParams) -> ApiResult<Page<Subject>>;

    async fn get_active_subjects(&self) -> ApiResult<Vec<Subject>>;

    async fn get_subjects_by_status(
        &self,
        is_active: bool,
        page: u32,
        size: Option<u32>,
    ) -> ApiResult<Page<Subject>>;

    async fn update_subject(&self, id: i64, request: &SubjectRequest) -> ApiResult<Subject>;

    async fn activate_subject(&self, id: i64) -> ApiResult<String>;

    async fn deactivate_subject(&self, id: i64) -> ApiResult<String>;

    async fn delete_subject(&self, id: i64) -> ApiResult<String>;
}

/// Class-subject link endpoints.
#[async_trait]
pub trait ClassSubjectGateway: Send + Sync {
    async fn assign_subject_to_class(
        &self,
        request: &ClassSubjectRequest,
    ) -> ApiResult<ClassSubject>;

    async fn get_class_subject_by_id(&self, id: i64) -> ApiResult<ClassSubject>;

    async fn get_subjects_by_class(&self, class_id: i64) -> ApiResult<Vec<ClassSubject>>;

    async fn get_classes_by_subject(&self, subject_id: i64) -> ApiResult<Vec<ClassSubject>>;

    async fn update_class_subject(
        &self,
        id: i64,
        request: &ClassSubjectRequest,
    ) -> ApiResult<ClassSubject>;

    async fn remove_subject_from_class(&self, id: i64) -> ApiResult<String>;

    async fn bulk_assign_subjects_to_class(
        &self,
        class_id: i64,
        subject_ids: &[i64],
    ) -> ApiResult<Vec<ClassSubject>>;

    async fn copy_subjects_from_class(
        &self,
        source_class_id: i64,
        target_class_id: i64,
    ) -> ApiResult<Vec<ClassSubject>>;
}

/// Grade boundary endpoints.
#[async_trait]
pub trait GradeBoundaryGateway: Send + Sync {
    async fn create_grade_boundary(
        &self,
        request: &GradeBoundaryRequest,
    ) -> ApiResult<GradeBoundary>;

    async fn get_all_grade_boundaries(&self) -> ApiResult<Vec<GradeBoundary>>;

    async fn get_grade_boundary_by_id(&self, id: i64) -> ApiResult<GradeBoundary>;

    /// Grade letter for a percentage.
    async fn calculate_grade(&self, percentage: Decimal) -> ApiResult<String>;

    async fn update_grade_boundary(
        &self,
        id: i64,
        request: &GradeBoundaryRequest,
    ) -> ApiResult<GradeBoundary>;

    async fn delete_grade_boundary(&self, id: i64) -> ApiResult<String>;

    async fn setup_default_grade_boundaries(&self) -> ApiResult<Vec<GradeBoundary>>;
}

/// Authentication endpoints.
///
/// Refresh and logout authenticate with the token passed in, not the
/// ambient access token.
#[async_trait]
pub trait AuthGateway: Send + Sync {
    async fn login(&self, request: &LoginRequest) -> ApiResult<LoginResponse>;

    async fn refresh_token(&self, refresh_token: &str) -> ApiResult<LoginResponse>;

    async fn logout(&self, access_token: &str) -> ApiResult<String>;

    async fn change_password(&self, request: &ChangePasswordRequest) -> ApiResult<String>;

    async fn reset_password(&self, user_id: i64, new_password: &str) -> ApiResult<String>;

    async fn validate_token(&self, token: &str) -> ApiResult<bool>;
}
