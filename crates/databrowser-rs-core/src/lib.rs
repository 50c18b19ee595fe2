//! # databrowser-rs-core
//!
//! Core types for the databrowser-rs scaffolding toolkit. This crate has no
//! dependency on the mapper or forms layers and provides the foundation for
//! both.
//!
//! ## Modules
//!
//! - [`error`] - Error types and result aliases
//! - [`logging`] - Tracing-based logging integration
//! - [`utils`] - Text helpers and the template-parameter trait

pub mod error;
pub mod logging;
pub mod utils;

// Re-export the most commonly used types at the crate root.
pub use error::{DatabrowserError, DatabrowserResult, ValidationError};
