//! Trait definitions (hexagonal ports). Depend only on domain.
//!
//! Stores talk to the outside world exclusively through these seams, which
//! is what lets tests swap the HTTP backend, durable storage and navigation
//! for scripted doubles.
//!
//! # Available Ports
//!
//! - [`SessionGateway`], [`ClassGateway`], [`SubjectGateway`],
//!   [`ClassSubjectGateway`], [`GradeBoundaryGateway`], [`AuthGateway`] -
//!   Backend resource calls
//! - [`KeyValueStore`] - Durable key-value persistence
//! - [`Navigator`] - Redirects requested by the auth store
//! - [`TokenSource`] - Bearer token for outbound requests

mod gateway;
mod navigator;
mod storage;
mod token;

pub use gateway::{
    ApiResult, AuthGateway, ClassGateway, ClassSubjectGateway, GradeBoundaryGateway,
    SessionGateway, SubjectGateway,
};
pub use navigator::{Navigator, Route};
pub use storage::{put_json, KeyValueStore};
pub use token::TokenSource;
