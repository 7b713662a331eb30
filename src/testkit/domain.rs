//! Builders for domain values used across tests.
//!
//! Factories fill every field with a plausible value so tests only spell out
//! what they assert on.

use chrono::NaiveDate;
use rust_decimal::Decimal;

use crate::domain::{
    ClassSubject, GradeBoundary, LoginResponse, Page, SchoolClass, Session, SessionStatus,
    Subject, UserInfo,
};

/// An inactive session spanning April to March.
pub fn session(id: i64, name: &str) -> Session {
    Session {
        id,
        session_name: name.to_string(),
        start_date: date(2024, 4, 1),
        end_date: date(2025, 3, 31),
        status: SessionStatus::Inactive,
        created_at: None,
        updated_at: None,
    }
}

/// Same as [`session`] with the given status.
pub fn session_with_status(id: i64, name: &str, status: SessionStatus) -> Session {
    Session {
        status,
        ..session(id, name)
    }
}

/// An active class without section whose display name is its class name.
pub fn class(id: i64, session_id: i64, class_name: &str) -> SchoolClass {
    SchoolClass {
        id,
        session_id,
        session_name: format!("Session {session_id}"),
        class_name: class_name.to_string(),
        section: None,
        capacity: Some(40),
        is_active: true,
        display_name: class_name.to_string(),
        created_at: None,
        updated_at: None,
    }
}

/// An active subject.
pub fn subject(id: i64, name: &str, code: &str) -> Subject {
    Subject {
        id,
        subject_name: name.to_string(),
        subject_code: code.to_string(),
        is_active: true,
        created_at: None,
        updated_at: None,
    }
}

pub fn class_subject(id: i64, class_id: i64, subject_id: i64) -> ClassSubject {
    ClassSubject {
        id,
        class_id,
        class_name: format!("Class {class_id}"),
        section: None,
        subject_id,
        subject_name: format!("Subject {subject_id}"),
        subject_code: format!("SUBJ-{subject_id}"),
        total_marks: Some(100),
        passing_marks: Some(33),
        created_at: None,
    }
}

pub fn grade_boundary(
    id: i64,
    grade: &str,
    min: Decimal,
    max: Decimal,
    is_passing: bool,
) -> GradeBoundary {
    GradeBoundary {
        id,
        grade: grade.to_string(),
        min_percentage: min,
        max_percentage: max,
        is_passing,
        created_at: None,
        updated_at: None,
    }
}

/// A user with the given roles who does not need a password change.
pub fn user(id: i64, username: &str, roles: &[&str]) -> UserInfo {
    UserInfo {
        id,
        username: username.to_string(),
        first_name: "Test".into(),
        last_name: "User".into(),
        email: format!("{username}@example.org"),
        roles: roles.iter().map(|r| (*r).to_string()).collect(),
        must_change_password: false,
        last_login_at: None,
    }
}

/// Token pair named after the user, e.g. `access-admin` / `refresh-admin`.
pub fn login_response(user: UserInfo) -> LoginResponse {
    LoginResponse {
        access_token: format!("access-{}", user.username),
        refresh_token: format!("refresh-{}", user.username),
        token_type: Some("Bearer".into()),
        expires_in: Some(3600),
        user,
    }
}

/// One page of `content` out of `total_elements`, with derived flags.
pub fn page<T>(content: Vec<T>, page: u32, size: u32, total_elements: u64) -> Page<T> {
    let total_pages = if size == 0 {
        0
    } else {
        u32::try_from(total_elements.div_ceil(u64::from(size))).unwrap_or(u32::MAX)
    };
    Page {
        content,
        page,
        size,
        total_elements,
        total_pages,
        first: page == 0,
        last: page + 1 >= total_pages,
        has_next: page + 1 < total_pages,
        has_previous: page > 0,
    }
}

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap_or_default()
}
