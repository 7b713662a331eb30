//! Shared test utilities available to both unit and integration tests.
//!
//! Enabled via `#[cfg(test)]` (unit tests) or the `testkit` feature
//! (integration tests).
//!
//! # Modules
//!
//! - [`backend`] - [`MockBackend`](backend::MockBackend), one scripted double
//!   implementing every gateway port.
//! - [`navigator`] - [`RecordingNavigator`](navigator::RecordingNavigator).
//! - [`domain`] - Builders for resources, users and pages.

pub mod backend;
pub mod domain;
pub mod navigator;
