//! Grade boundary store.

use std::sync::Arc;

use rust_decimal::Decimal;
use tokio::sync::broadcast;

use super::list;
use super::observable::Observable;
use super::request::{request_state, run};
use crate::domain::{GradeBoundary, GradeBoundaryRequest};
use crate::port::{ApiResult, GradeBoundaryGateway};
use crate::view;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct GradeBoundaryState {
    pub grade_boundaries: Vec<GradeBoundary>,
    pub selected_grade_boundary: Option<GradeBoundary>,
    /// Letter returned by the most recent successful calculation.
    pub last_calculated_grade: Option<String>,
    pub is_loading: bool,
    pub error: Option<String>,
}

request_state!(GradeBoundaryState);

/// Cached grade boundaries. The list is unpaged.
pub struct GradeBoundaryStore {
    gateway: Arc<dyn GradeBoundaryGateway>,
    state: Observable<GradeBoundaryState>,
}

impl GradeBoundaryStore {
    #[must_use]
    pub fn new(gateway: Arc<dyn GradeBoundaryGateway>) -> Self {
        Self {
            gateway,
            state: Observable::default(),
        }
    }

    #[must_use]
    pub fn state(&self) -> GradeBoundaryState {
        self.state.get()
    }

    #[must_use]
    pub fn subscribe(&self) -> broadcast::Receiver<GradeBoundaryState> {
        self.state.subscribe()
    }

    #[must_use]
    pub fn grade_boundaries(&self) -> Vec<GradeBoundary> {
        self.state.read(|s| s.grade_boundaries.clone())
    }

    #[must_use]
    pub fn selected_grade_boundary(&self) -> Option<GradeBoundary> {
        self.state.read(|s| s.selected_grade_boundary.clone())
    }

    #[must_use]
    pub fn last_calculated_grade(&self) -> Option<String> {
        self.state.read(|s| s.last_calculated_grade.clone())
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
    pub fn has_grade_boundaries(&self) -> bool {
        self.state.read(|s| !s.grade_boundaries.is_empty())
    }

    #[must_use]
    pub fn passing_grades(&self) -> Vec<GradeBoundary> {
        self.state.read(|s| {
            s.grade_boundaries
                .iter()
                .filter(|b| b.is_passing)
                .cloned()
                .collect()
        })
    }

    #[must_use]
    pub fn failing_grades(&self) -> Vec<GradeBoundary> {
        self.state.read(|s| {
            s.grade_boundaries
                .iter()
                .filter(|b| !b.is_passing)
                .cloned()
                .collect()
        })
    }

    /// Boundaries ordered by descending minimum percentage.
    #[must_use]
    pub fn sorted_grade_boundaries(&self) -> Vec<GradeBoundary> {
        self.state
            .read(|s| view::sort_by_min_percentage_desc(&s.grade_boundaries))
    }

    pub async fn load_grade_boundaries(&self) -> ApiResult<Vec<GradeBoundary>> {
        run(
            &self.state,
            "load_grade_boundaries",
            "Failed to load grade boundaries",
            self.gateway.get_all_grade_boundaries(),
            |s, boundaries| s.grade_boundaries = boundaries.clone(),
        )
        .await
    }

    pub async fn load_grade_boundary_by_id(&self, id: i64) -> ApiResult<GradeBoundary> {
        run(
            &self.state,
            "load_grade_boundary_by_id",
            "Failed to load grade boundary",
            self.gateway.get_grade_boundary_by_id(id),
            |s, boundary| s.selected_grade_boundary = Some(boundary.clone()),
        )
        .await
    }

    /// Ask the backend which grade a percentage falls into.
    pub async fn calculate_grade(&self, percentage: Decimal) -> ApiResult<String> {
        run(
            &self.state,
            "calculate_grade",
            "Failed to calculate grade",
            self.gateway.calculate_grade(percentage),
            |s, grade| s.last_calculated_grade = Some(grade.clone()),
        )
        .await
    }

    pub async fn create_grade_boundary(
        &self,
        request: &GradeBoundaryRequest,
    ) -> ApiResult<GradeBoundary> {
        run(
            &self.state,
            "create_grade_boundary",
            "Failed to create grade boundary",
            self.gateway.create_grade_boundary(request),
            |s, boundary| list::prepend(&mut s.grade_boundaries, boundary.clone()),
        )
        .await
    }

    pub async fn update_grade_boundary(
        &self,
        id: i64,
        request: &GradeBoundaryRequest,
    ) -> ApiResult<GradeBoundary> {
        run(
            &self.state,
            "update_grade_boundary",
            "Failed to update grade boundary",
            self.gateway.update_grade_boundary(id, request),
            |s, boundary| {
                list::replace_by_id(&mut s.grade_boundaries, boundary);
                list::refresh_selected(&mut s.selected_grade_boundary, boundary);
            },
        )
        .await
    }

    pub async fn delete_grade_boundary(&self, id: i64) -> ApiResult<()> {
        run(
            &self.state,
            "delete_grade_boundary",
            "Failed to delete grade boundary",
            self.gateway.delete_grade_boundary(id),
            |s, _| {
                list::remove_by_id(&mut s.grade_boundaries, id);
                list::clear_selected(&mut s.selected_grade_boundary, id);
            },
        )
        .await
        .map(|_| ())
    }

    /// Install the backend's default scale, replacing the cached list.
    pub async fn setup_default_grade_boundaries(&self) -> ApiResult<Vec<GradeBoundary>> {
        run(
            &self.state,
            "setup_default_grade_boundaries",
            "Failed to setup default grade boundaries",
            self.gateway.setup_default_grade_boundaries(),
            |s, boundaries| s.grade_boundaries = boundaries.clone(),
        )
        .await
    }

    pub fn set_selected_grade_boundary(&self, boundary: Option<GradeBoundary>) {
        self.state.update(|s| s.selected_grade_boundary = boundary);
    }

    pub fn clear_error(&self) {
        self.state.update(|s| s.error = None);
    }

    pub fn reset(&self) {
        self.state.replace(GradeBoundaryState::default());
    }
}
