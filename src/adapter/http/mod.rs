//! REST gateways for the school backend.
//!
//! [`ApiClient`] carries the shared transport concerns; each resource gets a
//! thin gateway that only knows its paths and query parameters.

mod auth;
mod class;
mod class_subject;
mod client;
mod grade;
mod session;
mod subject;

pub use auth::HttpAuthGateway;
pub use class::HttpClassGateway;
pub use class_subject::HttpClassSubjectGateway;
pub use client::{
    decode_body, decode_confirmation, error_from_response, is_unauthenticated, unwrap_envelope,
    ApiClient, Bearer,
};
pub(crate) use client::segment;
pub use grade::HttpGradeBoundaryGateway;
pub use session::HttpSessionGateway;
pub use subject::HttpSubjectGateway;
