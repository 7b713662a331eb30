//! Class-subject link store.
//!
//! Besides the primary list, links are cached in two secondary indices: by
//! class id and by subject id. Deletes identify a link only by its id, so
//! removal scans every bucket of both indices. Bulk-assign and copy update
//! only the target class bucket; other buckets stay as they were until the
//! next explicit reload.

use std::collections::BTreeMap;
use std::sync::Arc;

use tokio::sync::broadcast;

use super::list;
use super::observable::Observable;
use super::request::{request_state, run};
use crate::domain::{ClassSubject, ClassSubjectRequest};
use crate::port::{ApiResult, ClassSubjectGateway};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ClassSubjectState {
    pub class_subjects: Vec<ClassSubject>,
    pub selected_class_subject: Option<ClassSubject>,
    pub subjects_by_class: BTreeMap<i64, Vec<ClassSubject>>,
    pub classes_by_subject: BTreeMap<i64, Vec<ClassSubject>>,
    pub is_loading: bool,
    pub error: Option<String>,
}

request_state!(ClassSubjectState);

pub struct ClassSubjectStore {
    gateway: Arc<dyn ClassSubjectGateway>,
    state: Observable<ClassSubjectState>,
}

impl ClassSubjectStore {
    #[must_use]
    pub fn new(gateway: Arc<dyn ClassSubjectGateway>) -> Self {
        Self {
            gateway,
            state: Observable::default(),
        }
    }

    #[must_use]
    pub fn state(&self) -> ClassSubjectState {
        self.state.get()
    }

    #[must_use]
    pub fn subscribe(&self) -> broadcast::Receiver<ClassSubjectState> {
        self.state.subscribe()
    }

    #[must_use]
    pub fn class_subjects(&self) -> Vec<ClassSubject> {
        self.state.read(|s| s.class_subjects.clone())
    }

    #[must_use]
    pub fn selected_class_subject(&self) -> Option<ClassSubject> {
        self.state.read(|s| s.selected_class_subject.clone())
    }

    /// Cached links of a class; empty when the class was never loaded.
    #[must_use]
    pub fn subjects_for_class(&self, class_id: i64) -> Vec<ClassSubject> {
        self.state
            .read(|s| s.subjects_by_class.get(&class_id).cloned().unwrap_or_default())
    }

    /// Cached links of a subject; empty when the subject was never loaded.
    #[must_use]
    pub fn classes_for_subject(&self, subject_id: i64) -> Vec<ClassSubject> {
        self.state.read(|s| {
            s.classes_by_subject
                .get(&subject_id)
                .cloned()
                .unwrap_or_default()
        })
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
    pub fn has_class_subjects(&self) -> bool {
        self.state.read(|s| !s.class_subjects.is_empty())
    }

    #[must_use]
    pub fn has_subjects_by_class(&self) -> bool {
        self.state.read(|s| !s.subjects_by_class.is_empty())
    }

    #[must_use]
    pub fn has_classes_by_subject(&self) -> bool {
        self.state.read(|s| !s.classes_by_subject.is_empty())
    }

    /// Load a class's links into the primary list and its bucket.
    pub async fn load_subjects_by_class(&self, class_id: i64) -> ApiResult<Vec<ClassSubject>> {
        run(
            &self.state,
            "load_subjects_by_class",
            "Failed to load subjects by class",
            self.gateway.get_subjects_by_class(class_id),
            |s, links| {
                s.class_subjects = links.clone();
                s.subjects_by_class.insert(class_id, links.clone());
            },
        )
        .await
    }

    /// Load a subject's links into the primary list and its bucket.
    pub async fn load_classes_by_subject(&self, subject_id: i64) -> ApiResult<Vec<ClassSubject>> {
        run(
            &self.state,
            "load_classes_by_subject",
            "Failed to load classes by subject",
            self.gateway.get_classes_by_subject(subject_id),
            |s, links| {
                s.class_subjects = links.clone();
                s.classes_by_subject.insert(subject_id, links.clone());
            },
        )
        .await
    }

    pub async fn load_class_subject_by_id(&self, id: i64) -> ApiResult<ClassSubject> {
        run(
            &self.state,
            "load_class_subject_by_id",
            "Failed to load class-subject",
            self.gateway.get_class_subject_by_id(id),
            |s, link| s.selected_class_subject = Some(link.clone()),
        )
        .await
    }

    pub async fn assign_subject_to_class(
        &self,
        request: &ClassSubjectRequest,
    ) -> ApiResult<ClassSubject> {
        let class_id = request.class_id;
        run(
            &self.state,
            "assign_subject_to_class",
            "Failed to assign subject to class",
            self.gateway.assign_subject_to_class(request),
            |s, link| {
                list::prepend(&mut s.class_subjects, link.clone());
                list::prepend(s.subjects_by_class.entry(class_id).or_default(), link.clone());
            },
        )
        .await
    }

    pub async fn update_class_subject(
        &self,
        id: i64,
        request: &ClassSubjectRequest,
    ) -> ApiResult<ClassSubject> {
        let (class_id, subject_id) = (request.class_id, request.subject_id);
        run(
            &self.state,
            "update_class_subject",
            "Failed to update class-subject",
            self.gateway.update_class_subject(id, request),
            |s, link| {
                list::replace_by_id(&mut s.class_subjects, link);
                list::refresh_selected(&mut s.selected_class_subject, link);
                // Buckets that were never loaded stay absent.
                if let Some(bucket) = s.subjects_by_class.get_mut(&class_id) {
                    list::replace_by_id(bucket, link);
                }
                if let Some(bucket) = s.classes_by_subject.get_mut(&subject_id) {
                    list::replace_by_id(bucket, link);
                }
            },
        )
        .await
    }

    pub async fn remove_subject_from_class(&self, id: i64) -> ApiResult<()> {
        run(
            &self.state,
            "remove_subject_from_class",
            "Failed to remove subject from class",
            self.gateway.remove_subject_from_class(id),
            |s, _| {
                list::remove_by_id(&mut s.class_subjects, id);
                list::clear_selected(&mut s.selected_class_subject, id);
                for bucket in s
                    .subjects_by_class
                    .values_mut()
                    .chain(s.classes_by_subject.values_mut())
                {
                    list::remove_by_id(bucket, id);
                }
            },
        )
        .await
        .map(|_| ())
    }

    pub async fn bulk_assign_subjects_to_class(
        &self,
        class_id: i64,
        subject_ids: &[i64],
    ) -> ApiResult<Vec<ClassSubject>> {
        run(
            &self.state,
            "bulk_assign_subjects_to_class",
            "Failed to bulk assign subjects",
            self.gateway.bulk_assign_subjects_to_class(class_id, subject_ids),
            |s, links| prepend_to_class(s, class_id, links),
        )
        .await
    }

    pub async fn copy_subjects_from_class(
        &self,
        source_class_id: i64,
        target_class_id: i64,
    ) -> ApiResult<Vec<ClassSubject>> {
        run(
            &self.state,
            "copy_subjects_from_class",
            "Failed to copy subjects",
            self.gateway
                .copy_subjects_from_class(source_class_id, target_class_id),
            |s, links| prepend_to_class(s, target_class_id, links),
        )
        .await
    }

    pub fn set_selected_class_subject(&self, link: Option<ClassSubject>) {
        self.state.update(|s| s.selected_class_subject = link);
    }

    pub fn clear_error(&self) {
        self.state.update(|s| s.error = None);
    }

    pub fn reset(&self) {
        self.state.replace(ClassSubjectState::default());
    }
}

fn prepend_to_class(state: &mut ClassSubjectState, class_id: i64, links: &[ClassSubject]) {
    list::prepend_all(&mut state.class_subjects, links);
    list::prepend_all(state.subjects_by_class.entry(class_id).or_default(), links);
}
