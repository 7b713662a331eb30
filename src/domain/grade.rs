//! Grade boundary resource.

use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::Resource;

/// Payload for creating or updating a grade boundary.
///
/// The backend takes these as query parameters rather than a JSON body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GradeBoundaryRequest {
    pub grade: String,
    pub min_percentage: Decimal,
    pub max_percentage: Decimal,
    pub is_passing: bool,
}

impl GradeBoundaryRequest {
    /// Query pairs in the order the backend documents them.
    #[must_use]
    pub fn query(&self) -> Vec<(&'static str, String)> {
        vec![
            ("grade", self.grade.clone()),
            ("minPercentage", self.min_percentage.normalize().to_string()),
            ("maxPercentage", self.max_percentage.normalize().to_string()),
            ("isPassing", self.is_passing.to_string()),
        ]
    }
}

/// A percentage band mapped to a grade letter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GradeBoundary {
    pub id: i64,
    pub grade: String,
    pub min_percentage: Decimal,
    pub max_percentage: Decimal,
    pub is_passing: bool,
    #[serde(default)]
    pub created_at: Option<NaiveDateTime>,
    #[serde(default)]
    pub updated_at: Option<NaiveDateTime>,
}

impl Resource for GradeBoundary {
    fn id(&self) -> i64 {
        self.id
    }
}
