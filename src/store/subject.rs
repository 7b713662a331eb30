//! Subject store.

use std::sync::Arc;

use tokio::sync::broadcast;

use super::list;
use super::observable::Observable;
use super::request::{request_state, run};
use crate::domain::{ListParams, Pagination, Subject, SubjectRequest};
use crate::port::{ApiResult, SubjectGateway};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct SubjectState {
    pub subjects: Vec<Subject>,
    pub selected_subject: Option<Subject>,
    pub active_subjects: Vec<Subject>,
    pub pagination: Pagination,
    pub is_loading: bool,
    pub error: Option<String>,
}

request_state!(SubjectState);

/// Cached subjects.
pub struct SubjectStore {
    gateway: Arc<dyn SubjectGateway>,
    state: Observable<SubjectState>,
}

impl SubjectStore {
    #[must_use]
    pub fn new(gateway: Arc<dyn SubjectGateway>) -> Self {
        Self {
            gateway,
            state: Observable::default(),
        }
    }

    #[must_use]
    pub fn state(&self) -> SubjectState {
        self.state.get()
    }

    #[must_use]
    pub fn subscribe(&self) -> broadcast::Receiver<SubjectState> {
        self.state.subscribe()
    }

    #[must_use]
    pub fn subjects(&self) -> Vec<Subject> {
        self.state.read(|s| s.subjects.clone())
    }

    #[must_use]
    pub fn selected_subject(&self) -> Option<Subject> {
        self.state.read(|s| s.selected_subject.clone())
    }

    #[must_use]
    pub fn active_subjects(&self) -> Vec<Subject> {
        self.state.read(|s| s.active_subjects.clone())
    }

    #[must_use]
    pub fn pagination(&self) -> Pagination {
        self.state.read(|s| s.pagination)
    }

    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.state.read(|s| s.is_loading)
    }

    #[must_use]
    pub fn error(&self) -> Option<String> {
        self.state.read(|s| s.error.clone())
    }

    #[must_use]
    pub fn has_subjects(&self) -> bool {
        self.state.read(|s| !s.subjects.is_empty())
    }

    #[must_use]
    pub fn has_active_subjects(&self) -> bool {
        self.state.read(|s| !s.active_subjects.is_empty())
    }

    #[must_use]
    pub fn can_load_more(&self) -> bool {
        self.state.read(|s| s.pagination.has_next)
    }

    #[must_use]
    pub fn current_page(&self) -> u32 {
        self.state.read(|s| s.pagination.page)
    }

    #[must_use]
    pub fn total_pages(&self) -> u32 {
        self.state.read(|s| s.pagination.total_pages)
    }

    pub async fn load_subjects(&self, params: &ListParams) -> ApiResult<Vec<Subject>> {
        let page = run(
            &self.state,
            "load_subjects",
            "Failed to load subjects",
            self.gateway.get_all_subjects(params),
            |s, page| {
                s.subjects = page.content.clone();
                s.pagination = page.pagination();
            },
        )
        .await?;
        Ok(page.content)
    }

    pub async fn load_active_subjects(&self) -> ApiResult<Vec<Subject>> {
        run(
            &self.state,
            "load_active_subjects",
            "Failed to load active subjects",
            self.gateway.get_active_subjects(),
            |s, subjects| s.active_subjects = subjects.clone(),
        )
        .await
    }

    pub async fn load_subjects_by_status(
        &self,
        is_active: bool,
        page: u32,
        size: Option<u32>,
    ) -> ApiResult<Vec<Subject>> {
        let page = run(
            &self.state,
            "load_subjects_by_status",
            "Failed to load subjects by status",
            self.gateway.get_subjects_by_status(is_active, page, size),
            |s, page| {
                s.subjects = page.content.clone();
                s.pagination = page.pagination();
            },
        )
        .await?;
        Ok(page.content)
    }

    pub async fn load_subject_by_id(&self, id: i64) -> ApiResult<Subject> {
        run(
            &self.state,
            "load_subject_by_id",
            "Failed to load subject",
            self.gateway.get_subject_by_id(id),
            |s, subject| s.selected_subject = Some(subject.clone()),
        )
        .await
    }

    pub async fn create_subject(&self, request: &SubjectRequest) -> ApiResult<Subject> {
        run(
            &self.state,
            "create_subject",
            "Failed to create subject",
            self.gateway.create_subject(request),
            |s, subject| list::prepend(&mut s.subjects, subject.clone()),
        )
        .await
    }

    pub async fn update_subject(&self, id: i64, request: &SubjectRequest) -> ApiResult<Subject> {
        run(
            &self.state,
            "update_subject",
            "Failed to update subject",
            self.gateway.update_subject(id, request),
            |s, subject| {
                list::replace_by_id(&mut s.subjects, subject);
                list::refresh_selected(&mut s.selected_subject, subject);
            },
        )
        .await
    }

    pub async fn activate_subject(&self, id: i64) -> ApiResult<()> {
        run(
            &self.state,
            "activate_subject",
            "Failed to activate subject",
            self.gateway.activate_subject(id),
            |s, _| set_active(s, id, true),
        )
        .await
        .map(|_| ())
    }

    pub async fn deactivate_subject(&self, id: i64) -> ApiResult<()> {
        run(
            &self.state,
            "deactivate_subject",
            "Failed to deactivate subject",
            self.gateway.deactivate_subject(id),
            |s, _| set_active(s, id, false),
        )
        .await
        .map(|_| ())
    }

    pub async fn delete_subject(&self, id: i64) -> ApiResult<()> {
        run(
            &self.state,
            "delete_subject",
            "Failed to delete subject",
            self.gateway.delete_subject(id),
            |s, _| {
                list::remove_by_id(&mut s.subjects, id);
                list::clear_selected(&mut s.selected_subject, id);
            },
        )
        .await
        .map(|_| ())
    }

    pub fn set_selected_subject(&self, subject: Option<Subject>) {
        self.state.update(|s| s.selected_subject = subject);
    }

    pub fn clear_error(&self) {
        self.state.update(|s| s.error = None);
    }

    pub fn reset(&self) {
        self.state.replace(SubjectState::default());
    }
}

fn set_active(state: &mut SubjectState, id: i64, active: bool) {
    list::patch_by_id(&mut state.subjects, id, |s| s.is_active = active);
    if let Some(selected) = state.selected_subject.as_mut().filter(|s| s.id == id) {
        selected.is_active = active;
    }
}
