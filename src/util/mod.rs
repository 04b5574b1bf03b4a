//! Shared utilities

pub mod config;
pub mod diagnostic;

pub use config::{load_config, ClientConfig};
pub use diagnostic::Diagnostic;
