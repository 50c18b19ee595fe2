//! # databrowser-rs-forms
//!
//! Form scaffolding for the databrowser-rs toolkit. Walks a mapped model's
//! properties and synthesizes a form schema whose fields mirror the model's
//! columns and relationships: types become field kinds, constraints become
//! validators, relationships become query-backed select fields.
//!
//! The entry points are [`get_form`](form::get_form) for whole-model
//! generation and [`AdminModelConverter::convert`](convert::AdminModelConverter::convert)
//! for a single property. Everything here is synchronous schema derivation;
//! no query is ever executed and no data is validated while a form is being
//! built.
//!
//! ## Module Overview
//!
//! - [`convert`] - The converter registry and [`AdminModelConverter`](convert::AdminModelConverter)
//! - [`form`] - [`get_form`](form::get_form), [`FormSchema`](form::FormSchema), generation options
//! - [`fields`] - Form field model and the per-property argument bag
//! - [`validators`] - Validator constructors attached to generated fields
//! - [`widgets`] - Widget types the rendering layer dispatches on
//! - [`view`] - The view-level configuration consulted during conversion
//! - [`inline`] - Nested-model form settings

// These clippy lints are intentionally allowed for the forms crate:
// - cast_precision_loss: i64-to-f64 casts are acceptable for validator comparisons
// - unused_self: converter functions share one signature whether or not they
//   consult the converter instance
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::unused_self)]

pub mod convert;
pub mod fields;
pub mod form;
pub mod inline;
pub mod validators;
pub mod view;
pub mod widgets;

// Re-export the most commonly used types at the crate root.
pub use convert::{AdminModelConverter, ConverterFn, ConverterRegistry};
pub use fields::{FieldArgs, FieldFactory, FormField, FormFieldType};
pub use form::{get_form, FormBase, FormOptions, FormSchema};
pub use inline::{InlineFormAdmin, InlineModelConverter, InlineOptions, InlineSpec};
pub use validators::{FieldValidator, UniqueValidator};
pub use view::ModelView;
pub use widgets::WidgetType;
