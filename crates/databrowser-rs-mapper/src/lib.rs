//! # databrowser-rs-mapper
//!
//! The read-only mapping-layer surface consumed by the form scaffolding
//! layer. The object-relational mapper itself (schema reflection, query
//! execution) lives outside this workspace; what the form generator needs
//! from it is the metadata shape defined here: column descriptors with
//! type, nullability, and constraint flags, relationship descriptors with
//! direction and remote-model references, and an opaque session handle for
//! deferred query construction.
//!
//! ## Module Overview
//!
//! - [`model`] - [`ModelClass`](model::ModelClass) handles and the [`Mapper`](model::Mapper)
//! - [`properties`] - Property descriptors: scalar columns and relationships
//! - [`columns`] - [`ColumnDef`](columns::ColumnDef) and default-value metadata
//! - [`types`] - Column type descriptors with precomputed identifier lineages
//! - [`value`] - The backend-agnostic [`Value`](value::Value) enum
//! - [`session`] - The opaque [`Session`](session::Session) handle and deferred queries

pub mod columns;
pub mod model;
pub mod properties;
pub mod session;
pub mod types;
pub mod value;

// Re-export the most commonly used types at the crate root.
pub use columns::{ColumnDef, ColumnDefault};
pub use model::{get_primary_key, Mapper, ModelClass};
pub use properties::{ColumnSource, PropertyDef, PropertyKind, RelationDirection, RelationshipDef};
pub use session::{DeferredQuery, Session};
pub use types::{ColumnType, TypeIdent};
pub use value::Value;
