//! School class store.

use std::sync::Arc;

use tokio::sync::broadcast;

use super::list;
use super::observable::Observable;
use super::request::{request_state, run};
use crate::domain::{ClassRequest, ListParams, Pagination, SchoolClass};
use crate::port::{ApiResult, ClassGateway};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ClassState {
    pub classes: Vec<SchoolClass>,
    pub selected_class: Option<SchoolClass>,
    /// Active classes of the most recently requested session.
    pub active_classes: Vec<SchoolClass>,
    pub pagination: Pagination,
    pub is_loading: bool,
    pub error: Option<String>,
}

request_state!(ClassState);

/// Cached school classes.
pub struct ClassStore {
    gateway: Arc<dyn ClassGateway>,
    state: Observable<ClassState>,
}

impl ClassStore {
    #[must_use]
    pub fn new(gateway: Arc<dyn ClassGateway>) -> Self {
        Self {
            gateway,
            state: Observable::default(),
        }
    }

    #[must_use]
    pub fn state(&self) -> ClassState {
        self.state.get()
    }

    #[must_use]
    pub fn subscribe(&self) -> broadcast::Receiver<ClassState> {
        self.state.subscribe()
    }

    #[must_use]
    pub fn classes(&self) -> Vec<SchoolClass> {
        self.state.read(|s| s.classes.clone())
    }

    #[must_use]
    pub fn selected_class(&self) -> Option<SchoolClass> {
        self.state.read(|s| s.selected_class.clone())
    }

    #[must_use]
    pub fn active_classes(&self) -> Vec<SchoolClass> {
        self.state.read(|s| s.active_classes.clone())
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
    pub fn has_classes(&self) -> bool {
        self.state.read(|s| !s.classes.is_empty())
    }

    #[must_use]
    pub fn has_active_classes(&self) -> bool {
        self.state.read(|s| !s.active_classes.is_empty())
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

    pub async fn load_classes(&self, params: &ListParams) -> ApiResult<Vec<SchoolClass>> {
        let page = run(
            &self.state,
            "load_classes",
            "Failed to load classes",
            self.gateway.get_all_classes(params),
            |s, page| {
                s.classes = page.content.clone();
                s.pagination = page.pagination();
            },
        )
        .await?;
        Ok(page.content)
    }

    pub async fn load_classes_by_session(
        &self,
        session_id: i64,
        page: u32,
        size: Option<u32>,
    ) -> ApiResult<Vec<SchoolClass>> {
        let page = run(
            &self.state,
            "load_classes_by_session",
            "Failed to load classes by session",
            self.gateway.get_classes_by_session(session_id, page, size),
            |s, page| {
                s.classes = page.content.clone();
                s.pagination = page.pagination();
            },
        )
        .await?;
        Ok(page.content)
    }

    pub async fn load_active_classes_by_session(
        &self,
        session_id: i64,
    ) -> ApiResult<Vec<SchoolClass>> {
        run(
            &self.state,
            "load_active_classes_by_session",
            "Failed to load active classes",
            self.gateway.get_active_classes_by_session(session_id),
            |s, classes| s.active_classes = classes.clone(),
        )
        .await
    }

    pub async fn load_class_by_id(&self, id: i64) -> ApiResult<SchoolClass> {
        run(
            &self.state,
            "load_class_by_id",
            "Failed to load class",
            self.gateway.get_class_by_id(id),
            |s, class| s.selected_class = Some(class.clone()),
        )
        .await
    }

    pub async fn create_class(&self, request: &ClassRequest) -> ApiResult<SchoolClass> {
        run(
            &self.state,
            "create_class",
            "Failed to create class",
            self.gateway.create_class(request),
            |s, class| list::prepend(&mut s.classes, class.clone()),
        )
        .await
    }

    pub async fn update_class(&self, id: i64, request: &ClassRequest) -> ApiResult<SchoolClass> {
        run(
            &self.state,
            "update_class",
            "Failed to update class",
            self.gateway.update_class(id, request),
            |s, class| {
                list::replace_by_id(&mut s.classes, class);
                list::refresh_selected(&mut s.selected_class, class);
            },
        )
        .await
    }

    pub async fn activate_class(&self, id: i64) -> ApiResult<()> {
        run(
            &self.state,
            "activate_class",
            "Failed to activate class",
            self.gateway.activate_class(id),
            |s, _| set_active(s, id, true),
        )
        .await
        .map(|_| ())
    }

    pub async fn deactivate_class(&self, id: i64) -> ApiResult<()> {
        run(
            &self.state,
            "deactivate_class",
            "Failed to deactivate class",
            self.gateway.deactivate_class(id),
            |s, _| set_active(s, id, false),
        )
        .await
        .map(|_| ())
    }

    pub async fn delete_class(&self, id: i64) -> ApiResult<()> {
        run(
            &self.state,
            "delete_class",
            "Failed to delete class",
            self.gateway.delete_class(id),
            |s, _| {
                list::remove_by_id(&mut s.classes, id);
                list::clear_selected(&mut s.selected_class, id);
            },
        )
        .await
        .map(|_| ())
    }

    pub fn set_selected_class(&self, class: Option<SchoolClass>) {
        self.state.update(|s| s.selected_class = class);
    }

    pub fn clear_error(&self) {
        self.state.update(|s| s.error = None);
    }

    pub fn reset(&self) {
        self.state.replace(ClassState::default());
    }
}

fn set_active(state: &mut ClassState, id: i64, active: bool) {
    list::patch_by_id(&mut state.classes, id, |c| c.is_active = active);
    if let Some(selected) = state.selected_class.as_mut().filter(|c| c.id == id) {
        selected.is_active = active;
    }
}
