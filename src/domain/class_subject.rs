//! Class-subject link resource.
//!
//! A link assigns one subject to one class with its marking scheme. Links are
//! the only resource cached under secondary indices (by class and by subject).

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use super::Resource;

/// Payload for assigning a subject to a class or updating the assignment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ClassSubjectRequest {
    pub class_id: i64,
    pub subject_id: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_marks: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub passing_marks: Option<u32>,
}

impl ClassSubjectRequest {
    #[must_use]
    pub fn new(class_id: i64, subject_id: i64) -> Self {
        Self {
            class_id,
            subject_id,
            total_marks: None,
            passing_marks: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClassSubject {
    pub id: i64,
    pub class_id: i64,
    #[serde(default)]
    pub class_name: String,
    #[serde(default)]
    pub section: Option<String>,
    pub subject_id: i64,
    #[serde(default)]
    pub subject_name: String,
    #[serde(default)]
    pub subject_code: String,
    #[serde(default)]
    pub total_marks: Option<u32>,
    #[serde(default)]
    pub passing_marks: Option<u32>,
    #[serde(default)]
    pub created_at: Option<NaiveDateTime>,
}

impl Resource for ClassSubject {
    fn id(&self) -> i64 {
        self.id
    }
}
