//! Core error types for the databrowser-rs toolkit.
//!
//! [`DatabrowserError`] covers every failure mode of form scaffolding:
//! misconfigured models handed to the generator, unresolvable property
//! names, unsupported mapping constructs, and reserved template keys.

use std::fmt;

use thiserror::Error;

/// A single validation failure with a short machine-readable code.
///
/// Validators attached to generated form fields report failures through
/// this type when the embedding form library runs them at bind time.
///
/// # Examples
///
/// ```
/// use databrowser_rs_core::error::ValidationError;
///
/// let err = ValidationError::new("Ensure this value has at most 50 characters.", "length");
/// assert_eq!(err.code, "length");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    /// The primary error message.
    pub message: String,
    /// A short code identifying the type of validation failure (e.g. "required", "invalid").
    pub code: String,
}

impl ValidationError {
    /// Creates a new `ValidationError` with a message and code.
    pub fn new(message: impl Into<String>, code: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            code: code.into(),
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for ValidationError {}

/// The primary error type for the databrowser-rs toolkit.
///
/// Every variant is a caller misconfiguration and is raised immediately;
/// recoverable conditions (a column type with no registered converter, a
/// relationship hidden by the back-reference rule) are represented as an
/// absent field, never as an error.
#[derive(Error, Debug)]
pub enum DatabrowserError {
    /// The object handed to the generator carries no mapping metadata.
    #[error("model {model} must be a mapped model")]
    NotMapped {
        /// Name of the offending model class.
        model: String,
    },

    /// An inclusion-list entry named a property the mapper does not know.
    #[error("invalid model property name {model}.{name}")]
    UnknownProperty {
        /// Name of the model being converted.
        model: String,
        /// The unresolvable property name.
        name: String,
    },

    /// A property maps to more than one underlying storage column.
    #[error("can not convert multiple-column properties ({model}.{name})")]
    MultiColumnProperty {
        /// Name of the model being converted.
        model: String,
        /// The offending property name.
        name: String,
    },

    /// A disallowed key was used as a template dictionary field name.
    #[error("can not use {name:?} as a template parameter key, it is reserved")]
    ReservedFieldName {
        /// The reserved key.
        name: String,
    },

    /// A field value failed validation.
    #[error("validation error: {0}")]
    Validation(ValidationError),
}

impl DatabrowserError {
    /// Returns a short machine-readable code for this error.
    pub const fn code(&self) -> &'static str {
        match self {
            Self::NotMapped { .. } => "not_mapped",
            Self::UnknownProperty { .. } => "unknown_property",
            Self::MultiColumnProperty { .. } => "multi_column_property",
            Self::ReservedFieldName { .. } => "reserved_field_name",
            Self::Validation(_) => "validation",
        }
    }
}

impl From<ValidationError> for DatabrowserError {
    fn from(err: ValidationError) -> Self {
        Self::Validation(err)
    }
}

/// A convenience type alias for `Result<T, DatabrowserError>`.
pub type DatabrowserResult<T> = Result<T, DatabrowserError>;
