//! Academic session resource.

use std::fmt;

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

use super::Resource;

/// Lifecycle status of an academic session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SessionStatus {
    Inactive,
    Active,
    Upcoming,
    Archived,
}

impl SessionStatus {
    /// Path segment used by the status endpoints.
    #[must_use]
    pub fn as_path(&self) -> &'static str {
        match self {
            SessionStatus::Inactive => "INACTIVE",
            SessionStatus::Active => "ACTIVE",
            SessionStatus::Upcoming => "UPCOMING",
            SessionStatus::Archived => "ARCHIVED",
        }
    }
}

impl fmt::Display for SessionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_path())
    }
}

impl std::str::FromStr for SessionStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "INACTIVE" => Ok(SessionStatus::Inactive),
            "ACTIVE" => Ok(SessionStatus::Active),
            "UPCOMING" => Ok(SessionStatus::Upcoming),
            "ARCHIVED" => Ok(SessionStatus::Archived),
            other => Err(format!("unknown session status '{other}'")),
        }
    }
}

/// Payload for creating or updating a session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionRequest {
    pub session_name: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
}

/// An academic session as returned by the backend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Session {
    pub id: i64,
    pub session_name: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub status: SessionStatus,
    #[serde(default)]
    pub created_at: Option<NaiveDateTime>,
    #[serde(default)]
    pub updated_at: Option<NaiveDateTime>,
}

impl Resource for Session {
    fn id(&self) -> i64 {
        self.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_session_deserializes_backend_shape() {
        let json = r#"{
            "id": 7,
            "sessionName": "2024-2025",
            "startDate": "2024-04-01",
            "endDate": "2025-03-31",
            "status": "UPCOMING",
            "createdAt": "2024-01-15T10:30:00.123",
            "updatedAt": "2024-01-15T10:30:00"
        }"#;

        let session: Session = serde_json::from_str(json).unwrap();
        assert_eq!(session.id, 7);
        assert_eq!(session.status, SessionStatus::Upcoming);
        assert_eq!(session.start_date, NaiveDate::from_ymd_opt(2024, 4, 1).unwrap());
        assert!(session.created_at.is_some());
    }

    #[test]
    fn test_request_serializes_camel_case_dates() {
        let request = SessionRequest {
            session_name: "2025-2026".into(),
            start_date: NaiveDate::from_ymd_opt(2025, 4, 1).unwrap(),
            end_date: NaiveDate::from_ymd_opt(2026, 3, 31).unwrap(),
        };

        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["sessionName"], "2025-2026");
        assert_eq!(json["startDate"], "2025-04-01");
    }

    #[test]
    fn test_status_parse_is_case_insensitive() {
        assert_eq!("archived".parse::<SessionStatus>().unwrap(), SessionStatus::Archived);
        assert!("closed".parse::<SessionStatus>().is_err());
    }
}
