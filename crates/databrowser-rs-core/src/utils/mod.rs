//! Utility types and functions for the databrowser-rs toolkit.
//!
//! This module provides:
//! - [`text`]: String helpers used for label derivation (`prettify_name`, `capfirst`).
//! - [`TemplateParam`]: A trait for objects handed to templates as parameter dictionaries.

mod template;
pub mod text;

pub use template::TemplateParam;
