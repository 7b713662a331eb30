//! Backend-managed resources and the envelopes they travel in.
//!
//! Types here mirror the backend's JSON contract (camelCase on the wire) and
//! carry no behavior beyond small accessors.

pub mod auth;
pub mod class;
pub mod class_subject;
pub mod grade;
pub mod layout;
pub mod page;
pub mod session;
pub mod subject;

pub use auth::{ChangePasswordRequest, LoginRequest, LoginResponse, UserInfo, UserPatch};
pub use class::{ClassRequest, SchoolClass};
pub use class_subject::{ClassSubject, ClassSubjectRequest};
pub use grade::{GradeBoundary, GradeBoundaryRequest};
pub use layout::LayoutPreferences;
pub use page::{page_query, ApiEnvelope, ListParams, Page, Pagination, SortDir, DEFAULT_PAGE_SIZE};
pub use session::{Session, SessionRequest, SessionStatus};
pub use subject::{Subject, SubjectRequest};

/// A cached resource identified by a numeric backend id.
pub trait Resource: Clone + Send + Sync + 'static {
    fn id(&self) -> i64;
}
