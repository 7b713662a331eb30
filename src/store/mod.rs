//! Observable state containers, one per backend resource.
//!
//! Every store is constructed once by the composition root and shared by
//! reference. Operations take `&self`, call their gateway exactly once and
//! reconcile the result into the cache; failures are both returned and
//! recorded in the store's `error` field.

pub mod auth;
pub mod class;
pub mod class_subject;
pub mod grade;
pub mod layout;
pub mod list;
pub mod observable;
pub mod request;
pub mod session;
pub mod subject;

pub use auth::{AuthState, AuthStore, PersistedAuth, TokenSlot, AUTH_STORAGE_KEY};
pub use class::{ClassState, ClassStore};
pub use class_subject::{ClassSubjectState, ClassSubjectStore};
pub use grade::{GradeBoundaryState, GradeBoundaryStore};
pub use layout::{LayoutStore, LAYOUT_STORAGE_KEY};
pub use observable::Observable;
pub use request::RequestState;
pub use session::{SessionState, SessionStore};
pub use subject::{SubjectState, SubjectStore};
