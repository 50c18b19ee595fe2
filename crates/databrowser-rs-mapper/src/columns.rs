//! Column descriptors.
//!
//! A [`ColumnDef`] is the read-only view of a single table column the form
//! generator consumes: its type, nullability, key/constraint flags, and
//! declared default. Descriptors are built by the mapping layer (or by
//! hand in tests) through the builder methods.

use crate::types::ColumnType;
use crate::value::Value;

/// A zero-argument computed default, invoked when a new row's form is built.
pub type DefaultFn = fn() -> Value;

/// The declared default of a column.
///
/// Scalar defaults are used directly as the field default; callable
/// defaults are invoked at conversion time; clause defaults are SQL
/// expressions evaluated by the database and never surface in the form.
#[derive(Debug, Clone)]
pub enum ColumnDefault {
    /// A plain scalar default.
    Scalar(Value),
    /// A zero-argument computed default.
    Callable(DefaultFn),
    /// A server-side SQL expression.
    Clause(String),
}

/// Read-only metadata for a single table column.
#[derive(Debug, Clone)]
pub struct ColumnDef {
    /// The column name.
    pub name: String,
    /// The column's runtime type.
    pub column_type: ColumnType,
    /// Whether NULL is allowed.
    pub nullable: bool,
    /// Whether this column is part of the primary key.
    pub primary_key: bool,
    /// Whether a UNIQUE constraint is applied.
    pub unique: bool,
    /// Whether the column carries a foreign-key constraint.
    pub foreign_key: bool,
    /// The declared default, if any.
    pub default: Option<ColumnDefault>,
}

impl ColumnDef {
    /// Creates a new column descriptor with no constraints.
    pub fn new(name: impl Into<String>, column_type: ColumnType) -> Self {
        Self {
            name: name.into(),
            column_type,
            nullable: false,
            primary_key: false,
            unique: false,
            foreign_key: false,
            default: None,
        }
    }

    /// Allows NULL values.
    #[must_use]
    pub const fn nullable(mut self) -> Self {
        self.nullable = true;
        self
    }

    /// Marks this column as part of the primary key.
    #[must_use]
    pub const fn primary_key(mut self) -> Self {
        self.primary_key = true;
        self
    }

    /// Marks this column as having a UNIQUE constraint.
    #[must_use]
    pub const fn unique(mut self) -> Self {
        self.unique = true;
        self
    }

    /// Marks this column as carrying a foreign-key constraint.
    #[must_use]
    pub const fn foreign_key(mut self) -> Self {
        self.foreign_key = true;
        self
    }

    /// Sets a plain scalar default.
    #[must_use]
    pub fn default(mut self, value: impl Into<Value>) -> Self {
        self.default = Some(ColumnDefault::Scalar(value.into()));
        self
    }

    /// Sets a zero-argument computed default.
    #[must_use]
    pub fn default_fn(mut self, f: DefaultFn) -> Self {
        self.default = Some(ColumnDefault::Callable(f));
        self
    }

    /// Sets a server-side SQL expression default.
    #[must_use]
    pub fn default_clause(mut self, sql: impl Into<String>) -> Self {
        self.default = Some(ColumnDefault::Clause(sql.into()));
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_defaults() {
        let c = ColumnDef::new("name", ColumnType::string(Some(50)));
        assert_eq!(c.name, "name");
        assert!(!c.nullable);
        assert!(!c.primary_key);
        assert!(!c.unique);
        assert!(!c.foreign_key);
        assert!(c.default.is_none());
    }

    #[test]
    fn test_builder_chain() {
        let c = ColumnDef::new("email", ColumnType::string(Some(254)))
            .nullable()
            .unique();
        assert!(c.nullable);
        assert!(c.unique);
    }

    #[test]
    fn test_scalar_default() {
        let c = ColumnDef::new("active", ColumnType::boolean()).default(true);
        assert!(matches!(
            c.default,
            Some(ColumnDefault::Scalar(Value::Bool(true)))
        ));
    }

    #[test]
    fn test_callable_default() {
        fn zero() -> Value {
            Value::Int(0)
        }
        let c = ColumnDef::new("count", ColumnType::integer()).default_fn(zero);
        match c.default {
            Some(ColumnDefault::Callable(f)) => assert_eq!(f(), Value::Int(0)),
            other => panic!("expected callable default, got {other:?}"),
        }
    }

    #[test]
    fn test_clause_default() {
        let c = ColumnDef::new("created", ColumnType::date_time()).default_clause("now()");
        assert!(matches!(c.default, Some(ColumnDefault::Clause(ref s)) if s == "now()"));
    }
}
