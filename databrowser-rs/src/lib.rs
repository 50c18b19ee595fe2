//! # databrowser-rs
//!
//! Model-to-form scaffolding for web admin panels.
//!
//! This is the meta-crate that re-exports the sub-crates for convenient
//! access. You can depend on `databrowser-rs` to get the whole toolkit, or
//! depend on individual crates for finer-grained control.

/// Core types: errors, logging, and text utilities.
pub use databrowser_rs_core as core;

/// Mapping-layer metadata: columns, relationships, and model descriptors.
pub use databrowser_rs_mapper as mapper;

/// Form scaffolding: converter registry, schema generation, inline models.
#[cfg(feature = "forms")]
pub use databrowser_rs_forms as forms;
