//! Academic session store.

use std::future::Future;
use std::sync::Arc;

use tokio::sync::broadcast;

use super::list;
use super::observable::Observable;
use super::request::{request_state, run};
use crate::domain::{ListParams, Pagination, Session, SessionRequest, SessionStatus};
use crate::port::{ApiResult, SessionGateway};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct SessionState {
    pub sessions: Vec<Session>,
    pub selected_session: Option<Session>,
    pub active_session: Option<Session>,
    pub upcoming_session: Option<Session>,
    pub pagination: Pagination,
    pub is_loading: bool,
    pub error: Option<String>,
}

request_state!(SessionState);

/// Cached academic sessions with paged loading and status transitions.
pub struct SessionStore {
    gateway: Arc<dyn SessionGateway>,
    state: Observable<SessionState>,
}

impl SessionStore {
    #[must_use]
    pub fn new(gateway: Arc<dyn SessionGateway>) -> Self {
        Self {
            gateway,
            state: Observable::default(),
        }
    }

    #[must_use]
    pub fn state(&self) -> SessionState {
        self.state.get()
    }

    #[must_use]
    pub fn subscribe(&self) -> broadcast::Receiver<SessionState> {
        self.state.subscribe()
    }

    #[must_use]
    pub fn sessions(&self) -> Vec<Session> {
        self.state.read(|s| s.sessions.clone())
    }

    #[must_use]
    pub fn selected_session(&self) -> Option<Session> {
        self.state.read(|s| s.selected_session.clone())
    }

    #[must_use]
    pub fn active_session(&self) -> Option<Session> {
        self.state.read(|s| s.active_session.clone())
    }

    #[must_use]
    pub fn upcoming_session(&self) -> Option<Session> {
        self.state.read(|s| s.upcoming_session.clone())
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
    pub fn has_sessions(&self) -> bool {
        self.state.read(|s| !s.sessions.is_empty())
    }

    #[must_use]
    pub fn has_active_session(&self) -> bool {
        self.state.read(|s| s.active_session.is_some())
    }

    #[must_use]
    pub fn has_upcoming_session(&self) -> bool {
        self.state.read(|s| s.upcoming_session.is_some())
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

    pub async fn load_sessions(&self, params: &ListParams) -> ApiResult<Vec<Session>> {
        let page = run(
            &self.state,
            "load_sessions",
            "Failed to load sessions",
            self.gateway.get_all_sessions(params),
            |s, page| {
                s.sessions = page.content.clone();
                s.pagination = page.pagination();
            },
        )
        .await?;
        Ok(page.content)
    }

    pub async fn load_sessions_by_status(
        &self,
        status: SessionStatus,
        page: u32,
        size: Option<u32>,
    ) -> ApiResult<Vec<Session>> {
        let page = run(
            &self.state,
            "load_sessions_by_status",
            "Failed to load sessions by status",
            self.gateway.get_sessions_by_status(status, page, size),
            |s, page| {
                s.sessions = page.content.clone();
                s.pagination = page.pagination();
            },
        )
        .await?;
        Ok(page.content)
    }

    pub async fn load_active_session(&self) -> ApiResult<Session> {
        run(
            &self.state,
            "load_active_session",
            "Failed to load active session",
            self.gateway.get_active_session(),
            |s, session| s.active_session = Some(session.clone()),
        )
        .await
    }

    pub async fn load_upcoming_session(&self) -> ApiResult<Session> {
        run(
            &self.state,
            "load_upcoming_session",
            "Failed to load upcoming session",
            self.gateway.get_upcoming_session(),
            |s, session| s.upcoming_session = Some(session.clone()),
        )
        .await
    }

    pub async fn load_session_by_id(&self, id: i64) -> ApiResult<Session> {
        run(
            &self.state,
            "load_session_by_id",
            "Failed to load session",
            self.gateway.get_session_by_id(id),
            |s, session| s.selected_session = Some(session.clone()),
        )
        .await
    }

    pub async fn create_session(&self, request: &SessionRequest) -> ApiResult<Session> {
        run(
            &self.state,
            "create_session",
            "Failed to create session",
            self.gateway.create_session(request),
            |s, session| list::prepend(&mut s.sessions, session.clone()),
        )
        .await
    }

    pub async fn update_session(&self, id: i64, request: &SessionRequest) -> ApiResult<Session> {
        run(
            &self.state,
            "update_session",
            "Failed to update session",
            self.gateway.update_session(id, request),
            |s, session| {
                list::replace_by_id(&mut s.sessions, session);
                list::refresh_selected(&mut s.selected_session, session);
            },
        )
        .await
    }

    pub async fn activate_session(&self, id: i64) -> ApiResult<()> {
        let call = self.gateway.activate_session(id);
        self.transition(
            id,
            "activate_session",
            "Failed to activate session",
            SessionStatus::Active,
            call,
        )
        .await
    }

    pub async fn deactivate_session(&self, id: i64) -> ApiResult<()> {
        let call = self.gateway.deactivate_session(id);
        self.transition(
            id,
            "deactivate_session",
            "Failed to deactivate session",
            SessionStatus::Inactive,
            call,
        )
        .await
    }

    pub async fn archive_session(&self, id: i64) -> ApiResult<()> {
        let call = self.gateway.archive_session(id);
        self.transition(
            id,
            "archive_session",
            "Failed to archive session",
            SessionStatus::Archived,
            call,
        )
        .await
    }

    pub async fn delete_session(&self, id: i64) -> ApiResult<()> {
        run(
            &self.state,
            "delete_session",
            "Failed to delete session",
            self.gateway.delete_session(id),
            |s, _| {
                list::remove_by_id(&mut s.sessions, id);
                list::clear_selected(&mut s.selected_session, id);
            },
        )
        .await
        .map(|_| ())
    }

    pub fn set_selected_session(&self, session: Option<Session>) {
        self.state.update(|s| s.selected_session = session);
    }

    pub fn clear_error(&self) {
        self.state.update(|s| s.error = None);
    }

    pub fn reset(&self) {
        self.state.replace(SessionState::default());
    }

    /// Status changes are applied locally; the confirmation text is discarded.
    async fn transition(
        &self,
        id: i64,
        operation: &'static str,
        fallback: &str,
        status: SessionStatus,
        call: impl Future<Output = ApiResult<String>>,
    ) -> ApiResult<()> {
        run(&self.state, operation, fallback, call, |s, _| {
            let flip = |session: &mut Session| session.status = status;
            list::patch_by_id(&mut s.sessions, id, flip);
            if let Some(selected) = s.selected_session.as_mut().filter(|x| x.id == id) {
                flip(selected);
            }
        })
        .await
        .map(|_| ())
    }
}
