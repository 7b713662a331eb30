//! Schooldesk - Client-side state for a school management REST backend.
//!
//! The crate keeps an observable, cached view of the backend's academic
//! resources and of the signed-in user, and ships an admin CLI built on it.
//!
//! # Architecture
//!
//! - **`domain`** - Backend resources as plain serde types
//! - **`port`** - Seams the stores talk through: resource gateways, durable
//!   storage, navigation, bearer token source
//! - **`adapter`** - REST gateways over `reqwest`; file and in-memory storage
//! - **`store`** - One observable store per resource plus auth and layout
//! - **`view`** - Pure derived views and search debouncing
//! - **`infrastructure`** - Configuration and the composition root
//!
//! # Modules
//!
//! - [`domain`] - Sessions, classes, subjects, class-subject links, grade
//!   boundaries, users and layout preferences
//! - [`error`] - Error types for the crate
//! - [`store`] - Stores and their request lifecycle
//! - [`cli`] - The `schooldesk` command-line interface
//!
//! # Features
//!
//! - `testkit` - Export [`testkit`] doubles for integration tests
//!
//! # Example
//!
//! ```no_run
//! use std::sync::Arc;
//!
//! use schooldesk::cli::navigator::ConsoleNavigator;
//! use schooldesk::domain::ListParams;
//! use schooldesk::infrastructure::{App, Config};
//!
//! # async fn demo() -> schooldesk::error::Result<()> {
//! let config = Config::load_or_default("schooldesk.toml")?;
//! let app = App::build(&config, Arc::new(ConsoleNavigator::new()))?;
//! app.init().await;
//! let sessions = app.sessions.load_sessions(&ListParams::default()).await?;
//! # let _ = sessions;
//! # Ok(())
//! # }
//! ```

pub mod adapter;
pub mod cli;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod port;
pub mod store;
pub mod view;

#[cfg(any(test, feature = "testkit"))]
pub mod testkit;
