//! Scripted backend double.
//!
//! [`MockBackend`] implements every gateway port. Each operation pops the
//! next scripted outcome from its own queue, keyed by the gateway method
//! name (`"create_session"`, `"login"`, ...). An operation with nothing
//! scripted fails with a network error, so tests notice unexpected calls.
//!
//! Every call is recorded with a short rendering of its arguments, and an
//! operation can be paused until the test releases it to observe in-flight
//! state.

use std::any::Any;
use std::collections::{HashMap, VecDeque};

use async_trait::async_trait;
use parking_lot::Mutex;
use rust_decimal::Decimal;
use tokio::sync::oneshot;

use crate::domain::{
    ChangePasswordRequest, ClassRequest, ClassSubject, ClassSubjectRequest, GradeBoundary,
    GradeBoundaryRequest, ListParams, LoginRequest, LoginResponse, Page, SchoolClass, Session,
    SessionRequest, SessionStatus, Subject, SubjectRequest,
};
use crate::error::ApiError;
use crate::port::{
    ApiResult, AuthGateway, ClassGateway, ClassSubjectGateway, GradeBoundaryGateway,
    SessionGateway, SubjectGateway,
};

type Scripted = Result<Box<dyn Any + Send>, ApiError>;

/// A recorded gateway call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Call {
    pub op: &'static str,
    pub args: String,
}

#[derive(Default)]
pub struct MockBackend {
    responses: Mutex<HashMap<&'static str, VecDeque<Scripted>>>,
    gates: Mutex<HashMap<&'static str, oneshot::Receiver<()>>>,
    calls: Mutex<Vec<Call>>,
}

impl MockBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a successful outcome for `op`.
    ///
    /// The value type must match what the gateway method returns, e.g.
    /// `Page<Session>` for `get_all_sessions` or `String` for
    /// `delete_session`.
    pub fn respond<T: Send + 'static>(&self, op: &'static str, value: T) -> &Self {
        self.push(op, Ok(Box::new(value)));
        self
    }

    /// Queue a failure for `op`.
    pub fn fail(&self, op: &'static str, error: ApiError) -> &Self {
        self.push(op, Err(error));
        self
    }

    /// Hold the next call to `op` until the returned sender fires (or is
    /// dropped).
    pub fn pause(&self, op: &'static str) -> oneshot::Sender<()> {
        let (tx, rx) = oneshot::channel();
        self.gates.lock().insert(op, rx);
        tx
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().clone()
    }

    /// Number of calls made to `op`.
    pub fn call_count(&self, op: &str) -> usize {
        self.calls.lock().iter().filter(|c| c.op == op).count()
    }

    /// Arguments of the most recent call to `op`.
    pub fn last_args(&self, op: &str) -> Option<String> {
        self.calls
            .lock()
            .iter()
            .rev()
            .find(|c| c.op == op)
            .map(|c| c.args.clone())
    }

    fn push(&self, op: &'static str, outcome: Scripted) {
        self.responses.lock().entry(op).or_default().push_back(outcome);
    }

    async fn reply<T: 'static>(&self, op: &'static str, args: String) -> ApiResult<T> {
        self.calls.lock().push(Call { op, args });

        let gate = self.gates.lock().remove(op);
        if let Some(gate) = gate {
            let _ = gate.await;
        }

        let scripted = self
            .responses
            .lock()
            .get_mut(op)
            .and_then(VecDeque::pop_front);
        match scripted {
            Some(Ok(value)) => value.downcast::<T>().map(|v| *v).map_err(|_| {
                ApiError::Decode(format!("scripted response for {op} has the wrong type"))
            }),
            Some(Err(e)) => Err(e),
            None => Err(ApiError::Network(format!("no scripted response for {op}"))),
        }
    }
}

#[async_trait]
impl SessionGateway for MockBackend {
    async fn create_session(&self, request: &SessionRequest) -> ApiResult<Session> {
        self.reply("create_session", request.session_name.clone())
            .await
    }

    async fn get_session_by_id(&self, id: i64) -> ApiResult<Session> {
        self.reply("get_session_by_id", id.to_string()).await
    }

    async fn get_session_by_name(&self, name: &str) -> ApiResult<Session> {
        self.reply("get_session_by_name", name.to_string()).await
    }

    async fn get_all_sessions(&self, params: &ListParams) -> ApiResult<Page<Session>> {
        self.reply("get_all_sessions", format!("{params:?}")).await
    }

    async fn get_sessions_by_status(
        &self,
        status: SessionStatus,
        page: u32,
        size: Option<u32>,
    ) -> ApiResult<Page<Session>> {
        self.reply("get_sessions_by_status", format!("{status} {page} {size:?}"))
            .await
    }

    async fn get_active_session(&self) -> ApiResult<Session> {
        self.reply("get_active_session", String::new()).await
    }

    async fn get_upcoming_session(&self) -> ApiResult<Session> {
        self.reply("get_upcoming_session", String::new()).await
    }

    async fn update_session(&self, id: i64, request: &SessionRequest) -> ApiResult<Session> {
        self.reply("update_session", format!("{id} {}", request.session_name))
            .await
    }

    async fn activate_session(&self, id: i64) -> ApiResult<String> {
        self.reply("activate_session", id.to_string()).await
    }

    async fn deactivate_session(&self, id: i64) -> ApiResult<String> {
        self.reply("deactivate_session", id.to_string()).await
    }

    async fn archive_session(&self, id: i64) -> ApiResult<String> {
        self.reply("archive_session", id.to_string()).await
    }

    async fn delete_session(&self, id: i64) -> ApiResult<String> {
        self.reply("delete_session", id.to_string()).await
    }
}

#[async_trait]
impl ClassGateway for MockBackend {
    async fn create_class(&self, request: &ClassRequest) -> ApiResult<SchoolClass> {
        self.reply("create_class", request.class_name.clone()).await
    }

    async fn get_class_by_id(&self, id: i64) -> ApiResult<SchoolClass> {
        self.reply("get_class_by_id", id.to_string()).await
    }

    async fn get_all_classes(&self, params: &ListParams) -> ApiResult<Page<SchoolClass>> {
        self.reply("get_all_classes", format!("{params:?}")).await
    }

    async fn get_classes_by_session(
        &self,
        session_id: i64,
        page: u32,
        size: Option<u32>,
    ) -> ApiResult<Page<SchoolClass>> {
        self.reply("get_classes_by_session", format!("{session_id} {page} {size:?}"))
            .await
    }

    async fn get_active_classes_by_session(&self, session_id: i64) -> ApiResult<Vec<SchoolClass>> {
        self.reply("get_active_classes_by_session", session_id.to_string())
            .await
    }

    async fn update_class(&self, id: i64, request: &ClassRequest) -> ApiResult<SchoolClass> {
        self.reply("update_class", format!("{id} {}", request.class_name))
            .await
    }

    async fn activate_class(&self, id: i64) -> ApiResult<String> {
        self.reply("activate_class", id.to_string()).await
    }

    async fn deactivate_class(&self, id: i64) -> ApiResult<String> {
        self.reply("deactivate_class", id.to_string()).await
    }

    async fn delete_class(&self, id: i64) -> ApiResult<String> {
        self.reply("delete_class", id.to_string()).await
    }
}

#[async_trait]
impl SubjectGateway for MockBackend {
    async fn create_subject(&self, request: &SubjectRequest) -> ApiResult<Subject> {
        self.reply("create_subject", request.subject_code.clone())
            .await
    }

    async fn get_subject_by_id(&self, id: i64) -> ApiResult<Subject> {
        self.reply("get_subject_by_id", id.to_string()).await
    }

    async fn get_subject_by_name(&self, name: &str) -> ApiResult<Subject> {
        self.reply("get_subject_by_name", name.to_string()).await
    }

    async fn get_subject_by_code(&self, code: &str) -> ApiResult<Subject> {
        self.reply("get_subject_by_code", code.to_string()).await
    }

    async fn get_all_subjects(&self, params: &ListParams) -> ApiResult<Page<Subject>> {
        self.reply("get_all_subjects", format!("{params:?}")).await
    }

    async fn get_active_subjects(&self) -> ApiResult<Vec<Subject>> {
        self.reply("get_active_subjects", String::new()).await
    }

    async fn get_subjects_by_status(
        &self,
        is_active: bool,
        page: u32,
        size: Option<u32>,
    ) -> ApiResult<Page<Subject>> {
        self.reply("get_subjects_by_status", format!("{is_active} {page} {size:?}"))
            .await
    }

    async fn update_subject(&self, id: i64, request: &SubjectRequest) -> ApiResult<Subject> {
        self.reply("update_subject", format!("{id} {}", request.subject_code))
            .await
    }

    async fn activate_subject(&self, id: i64) -> ApiResult<String> {
        self.reply("activate_subject", id.to_string()).await
    }

    async fn deactivate_subject(&self, id: i64) -> ApiResult<String> {
        self.reply("deactivate_subject", id.to_string()).await
    }

    async fn delete_subject(&self, id: i64) -> ApiResult<String> {
        self.reply("delete_subject", id.to_string()).await
    }
}

#[async_trait]
impl ClassSubjectGateway for MockBackend {
    async fn assign_subject_to_class(
        &self,
        request: &ClassSubjectRequest,
    ) -> ApiResult<ClassSubject> {
        self.reply(
            "assign_subject_to_class",
            format!("{} {}", request.class_id, request.subject_id),
        )
        .await
    }

    async fn get_class_subject_by_id(&self, id: i64) -> ApiResult<ClassSubject> {
        self.reply("get_class_subject_by_id", id.to_string()).await
    }

    async fn get_subjects_by_class(&self, class_id: i64) -> ApiResult<Vec<ClassSubject>> {
        self.reply("get_subjects_by_class", class_id.to_string())
            .await
    }

    async fn get_classes_by_subject(&self, subject_id: i64) -> ApiResult<Vec<ClassSubject>> {
        self.reply("get_classes_by_subject", subject_id.to_string())
            .await
    }

    async fn update_class_subject(
        &self,
        id: i64,
        request: &ClassSubjectRequest,
    ) -> ApiResult<ClassSubject> {
        self.reply(
            "update_class_subject",
            format!("{id} {} {}", request.class_id, request.subject_id),
        )
        .await
    }

    async fn remove_subject_from_class(&self, id: i64) -> ApiResult<String> {
        self.reply("remove_subject_from_class", id.to_string())
            .await
    }

    async fn bulk_assign_subjects_to_class(
        &self,
        class_id: i64,
        subject_ids: &[i64],
    ) -> ApiResult<Vec<ClassSubject>> {
        self.reply(
            "bulk_assign_subjects_to_class",
            format!("{class_id} {subject_ids:?}"),
        )
        .await
    }

    async fn copy_subjects_from_class(
        &self,
        source_class_id: i64,
        target_class_id: i64,
    ) -> ApiResult<Vec<ClassSubject>> {
        self.reply(
            "copy_subjects_from_class",
            format!("{source_class_id} {target_class_id}"),
        )
        .await
    }
}

#[async_trait]
impl GradeBoundaryGateway for MockBackend {
    async fn create_grade_boundary(
        &self,
        request: &GradeBoundaryRequest,
    ) -> ApiResult<GradeBoundary> {
        self.reply("create_grade_boundary", request.grade.clone())
            .await
    }

    async fn get_all_grade_boundaries(&self) -> ApiResult<Vec<GradeBoundary>> {
        self.reply("get_all_grade_boundaries", String::new()).await
    }

    async fn get_grade_boundary_by_id(&self, id: i64) -> ApiResult<GradeBoundary> {
        self.reply("get_grade_boundary_by_id", id.to_string()).await
    }

    async fn calculate_grade(&self, percentage: Decimal) -> ApiResult<String> {
        self.reply("calculate_grade", percentage.normalize().to_string())
            .await
    }

    async fn update_grade_boundary(
        &self,
        id: i64,
        request: &GradeBoundaryRequest,
    ) -> ApiResult<GradeBoundary> {
        self.reply("update_grade_boundary", format!("{id} {}", request.grade))
            .await
    }

    async fn delete_grade_boundary(&self, id: i64) -> ApiResult<String> {
        self.reply("delete_grade_boundary", id.to_string()).await
    }

    async fn setup_default_grade_boundaries(&self) -> ApiResult<Vec<GradeBoundary>> {
        self.reply("setup_default_grade_boundaries", String::new())
            .await
    }
}

#[async_trait]
impl AuthGateway for MockBackend {
    async fn login(&self, request: &LoginRequest) -> ApiResult<LoginResponse> {
        self.reply("login", request.username.clone()).await
    }

    async fn refresh_token(&self, refresh_token: &str) -> ApiResult<LoginResponse> {
        self.reply("refresh_token", refresh_token.to_string()).await
    }

    async fn logout(&self, access_token: &str) -> ApiResult<String> {
        self.reply("logout", access_token.to_string()).await
    }

    async fn change_password(&self, _request: &ChangePasswordRequest) -> ApiResult<String> {
        self.reply("change_password", String::new()).await
    }

    async fn reset_password(&self, user_id: i64, _new_password: &str) -> ApiResult<String> {
        self.reply("reset_password", user_id.to_string()).await
    }

    async fn validate_token(&self, token: &str) -> ApiResult<bool> {
        self.reply("validate_token", token.to_string()).await
    }
}
