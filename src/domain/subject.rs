//! Subject resource.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use super::Resource;

/// Payload for creating or updating a subject.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SubjectRequest {
    pub subject_name: String,
    pub subject_code: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_active: Option<bool>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Subject {
    pub id: i64,
    pub subject_name: String,
    pub subject_code: String,
    pub is_active: bool,
    #[serde(default)]
    pub created_at: Option<NaiveDateTime>,
    #[serde(default)]
    pub updated_at: Option<NaiveDateTime>,
}

impl Resource for Subject {
    fn id(&self) -> i64 {
        self.id
    }
}
