//! School class resource.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use super::Resource;

/// Payload for creating or updating a class.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ClassRequest {
    pub session_id: i64,
    pub class_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub section: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub capacity: Option<u32>,
}

/// A class belonging to an academic session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SchoolClass {
    pub id: i64,
    pub session_id: i64,
    #[serde(default)]
    pub session_name: String,
    pub class_name: String,
    #[serde(default)]
    pub section: Option<String>,
    #[serde(default)]
    pub capacity: Option<u32>,
    pub is_active: bool,
    #[serde(default)]
    pub display_name: String,
    #[serde(default)]
    pub created_at: Option<NaiveDateTime>,
    #[serde(default)]
    pub updated_at: Option<NaiveDateTime>,
}

impl Resource for SchoolClass {
    fn id(&self) -> i64 {
        self.id
    }
}
