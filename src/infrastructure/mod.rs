//! Infrastructure layer: configuration and application wiring.

pub mod bootstrap;
pub mod config;

pub use bootstrap::{App, Gateways};
pub use config::Config;
