//! Validator constructors for generated form fields.
//!
//! The converter attaches validators to fields as it derives them from
//! column metadata; the embedding form library runs them when data is
//! bound. [`FieldValidator::validate`] implements the local constraints so
//! that library does not need to reinterpret the schema; the uniqueness
//! probe is the one validator that needs the database and therefore only
//! carries its deferred query here.

use std::net::IpAddr;
use std::sync::OnceLock;

use regex::Regex;

use databrowser_rs_core::error::{DatabrowserResult, ValidationError};
use databrowser_rs_mapper::session::DeferredQuery;
use databrowser_rs_mapper::value::Value;

/// A uniqueness check against the mapped table.
///
/// Carries the deferred query (session + model) and the column to probe.
/// Nothing is executed during form construction; the admin layer resolves
/// the query when the form is submitted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UniqueValidator {
    /// The deferred query the probe will run.
    pub query: DeferredQuery,
    /// The column whose value must be unique.
    pub column: String,
}

impl UniqueValidator {
    /// Creates a uniqueness validator probing the given column.
    pub fn new(query: DeferredQuery, column: impl Into<String>) -> Self {
        Self {
            query,
            column: column.into(),
        }
    }
}

/// A validator attached to a generated form field.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValidator {
    /// The field must be supplied.
    Required,
    /// An empty submission is acceptable and stops further validation.
    Optional,
    /// String length ceiling.
    Length {
        /// Maximum number of characters.
        max: usize,
    },
    /// Numeric range constraint.
    NumberRange {
        /// Inclusive lower bound.
        min: Option<i64>,
        /// Inclusive upper bound.
        max: Option<i64>,
    },
    /// The value must be one of a fixed set.
    AnyOf {
        /// The acceptable values.
        choices: Vec<String>,
    },
    /// The value must parse as an IPv4 or IPv6 address.
    IpAddress,
    /// The value must be a colon-separated MAC address.
    MacAddress,
    /// The value must parse as a UUID.
    Uuid,
    /// The value must be unique in the mapped table.
    Unique(UniqueValidator),
}

fn mac_pattern() -> &'static Regex {
    static MAC: OnceLock<Regex> = OnceLock::new();
    MAC.get_or_init(|| Regex::new(r"^[0-9A-Fa-f]{2}(:[0-9A-Fa-f]{2}){5}$").expect("valid regex"))
}

impl FieldValidator {
    /// Returns a human-readable name for this validator.
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Required => "Required",
            Self::Optional => "Optional",
            Self::Length { .. } => "Length",
            Self::NumberRange { .. } => "NumberRange",
            Self::AnyOf { .. } => "AnyOf",
            Self::IpAddress => "IpAddress",
            Self::MacAddress => "MacAddress",
            Self::Uuid => "Uuid",
            Self::Unique(_) => "Unique",
        }
    }

    /// Validates a bound value against this constraint.
    ///
    /// Values of a kind the constraint does not apply to pass unchanged
    /// (a length ceiling ignores integers, a range ignores strings).
    /// [`FieldValidator::Unique`] passes here unconditionally: its probe
    /// requires the database and is run by the admin layer through the
    /// carried [`DeferredQuery`].
    pub fn validate(&self, value: &Value) -> DatabrowserResult<()> {
        match self {
            Self::Required => {
                let empty = match value {
                    Value::Null => true,
                    Value::String(s) => s.is_empty(),
                    _ => false,
                };
                if empty {
                    return Err(
                        ValidationError::new("This field is required.", "required").into(),
                    );
                }
                Ok(())
            }
            Self::Optional | Self::Unique(_) => Ok(()),
            Self::Length { max } => {
                if let Value::String(s) = value {
                    if s.chars().count() > *max {
                        return Err(ValidationError::new(
                            format!(
                                "Ensure this value has at most {max} characters (it has {}).",
                                s.chars().count()
                            ),
                            "length",
                        )
                        .into());
                    }
                }
                Ok(())
            }
            Self::NumberRange { min, max } => {
                let numeric = match value {
                    Value::Int(i) => Some(*i as f64),
                    Value::Float(f) => Some(*f),
                    _ => None,
                };
                if let Some(n) = numeric {
                    if let Some(min) = min {
                        if n < *min as f64 {
                            return Err(ValidationError::new(
                                format!("Ensure this value is greater than or equal to {min}."),
                                "min_value",
                            )
                            .into());
                        }
                    }
                    if let Some(max) = max {
                        if n > *max as f64 {
                            return Err(ValidationError::new(
                                format!("Ensure this value is less than or equal to {max}."),
                                "max_value",
                            )
                            .into());
                        }
                    }
                }
                Ok(())
            }
            Self::AnyOf { choices } => {
                if let Value::String(s) = value {
                    if !choices.iter().any(|c| c == s) {
                        return Err(ValidationError::new(
                            format!("Invalid value, must be one of: {}.", choices.join(", ")),
                            "any_of",
                        )
                        .into());
                    }
                }
                Ok(())
            }
            Self::IpAddress => {
                if let Value::String(s) = value {
                    if s.parse::<IpAddr>().is_err() {
                        return Err(ValidationError::new(
                            "Enter a valid IP address.",
                            "invalid_ip",
                        )
                        .into());
                    }
                }
                Ok(())
            }
            Self::MacAddress => {
                if let Value::String(s) = value {
                    if !mac_pattern().is_match(s) {
                        return Err(ValidationError::new(
                            "Enter a valid MAC address.",
                            "invalid_mac",
                        )
                        .into());
                    }
                }
                Ok(())
            }
            Self::Uuid => {
                if let Value::String(s) = value {
                    if uuid::Uuid::parse_str(s).is_err() {
                        return Err(
                            ValidationError::new("Enter a valid UUID.", "invalid_uuid").into()
                        );
                    }
                }
                Ok(())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use databrowser_rs_mapper::session::Session;

    #[test]
    fn test_required() {
        assert!(FieldValidator::Required.validate(&Value::Null).is_err());
        assert!(FieldValidator::Required
            .validate(&Value::String(String::new()))
            .is_err());
        assert!(FieldValidator::Required
            .validate(&Value::String("x".into()))
            .is_ok());
        assert!(FieldValidator::Required.validate(&Value::Int(0)).is_ok());
    }

    #[test]
    fn test_optional_always_passes() {
        assert!(FieldValidator::Optional.validate(&Value::Null).is_ok());
    }

    #[test]
    fn test_length() {
        let v = FieldValidator::Length { max: 3 };
        assert!(v.validate(&Value::String("abc".into())).is_ok());
        assert!(v.validate(&Value::String("abcd".into())).is_err());
        assert!(v.validate(&Value::Int(12345)).is_ok());
    }

    #[test]
    fn test_number_range() {
        let v = FieldValidator::NumberRange {
            min: Some(0),
            max: Some(10),
        };
        assert!(v.validate(&Value::Int(5)).is_ok());
        assert!(v.validate(&Value::Int(-1)).is_err());
        assert!(v.validate(&Value::Float(10.5)).is_err());
        assert!(v.validate(&Value::String("n/a".into())).is_ok());
    }

    #[test]
    fn test_any_of() {
        let v = FieldValidator::AnyOf {
            choices: vec!["red".into(), "blue".into()],
        };
        assert!(v.validate(&Value::String("red".into())).is_ok());
        assert!(v.validate(&Value::String("green".into())).is_err());
    }

    #[test]
    fn test_ip_address() {
        assert!(FieldValidator::IpAddress
            .validate(&Value::String("192.168.1.1".into()))
            .is_ok());
        assert!(FieldValidator::IpAddress
            .validate(&Value::String("::1".into()))
            .is_ok());
        assert!(FieldValidator::IpAddress
            .validate(&Value::String("999.0.0.1".into()))
            .is_err());
    }

    #[test]
    fn test_mac_address() {
        assert!(FieldValidator::MacAddress
            .validate(&Value::String("00:1a:2b:3c:4d:5e".into()))
            .is_ok());
        assert!(FieldValidator::MacAddress
            .validate(&Value::String("not-a-mac".into()))
            .is_err());
    }

    #[test]
    fn test_uuid() {
        assert!(FieldValidator::Uuid
            .validate(&Value::String(
                "550e8400-e29b-41d4-a716-446655440000".into()
            ))
            .is_ok());
        assert!(FieldValidator::Uuid
            .validate(&Value::String("nope".into()))
            .is_err());
    }

    #[test]
    fn test_unique_carries_deferred_query() {
        let session = Session::new("default");
        let v = FieldValidator::Unique(UniqueValidator::new(
            DeferredQuery::new(&session, "User"),
            "email",
        ));
        // Local validation never touches the database.
        assert!(v.validate(&Value::String("taken@example.com".into())).is_ok());
        if let FieldValidator::Unique(u) = &v {
            assert_eq!(u.query.model(), "User");
            assert_eq!(u.column, "email");
        }
    }

    #[test]
    fn test_validator_names() {
        assert_eq!(FieldValidator::Required.name(), "Required");
        assert_eq!(FieldValidator::Length { max: 1 }.name(), "Length");
        assert_eq!(
            FieldValidator::NumberRange {
                min: None,
                max: None
            }
            .name(),
            "NumberRange"
        );
    }
}
