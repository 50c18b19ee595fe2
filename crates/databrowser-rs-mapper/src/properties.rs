//! Property descriptors.
//!
//! A mapped model exposes a list of named properties. Each is either a
//! scalar property backed by one or more column sources, or a relationship
//! with a direction and a remote model. The form generator branches on
//! this distinction and never mutates the descriptors.

use serde::{Deserialize, Serialize};

use crate::columns::ColumnDef;

/// The direction of a relationship, seen from the local model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RelationDirection {
    /// Local rows reference one remote row.
    ManyToOne,
    /// Remote rows reference this row.
    OneToMany,
    /// Linked through an association table.
    ManyToMany,
}

/// The storage source behind one slot of a scalar property.
#[derive(Debug, Clone)]
pub enum ColumnSource {
    /// A genuine table column.
    Table(ColumnDef),
    /// A computed expression (association attribute, column expression).
    /// Carries the expression text for diagnostics only.
    Expression(String),
}

/// A scalar property: one named attribute backed by column sources.
///
/// Almost always a single table column; multi-column and expression-backed
/// properties exist in the wild and the converter must recognize them.
#[derive(Debug, Clone)]
pub struct ScalarProperty {
    /// The storage sources, in declaration order.
    pub columns: Vec<ColumnSource>,
}

/// A relationship property.
#[derive(Debug, Clone)]
pub struct RelationshipDef {
    /// The relationship direction.
    pub direction: RelationDirection,
    /// The remote model's class name.
    pub remote_model: String,
    /// The local side of the first join-column pair.
    pub local_column: ColumnDef,
}

/// What kind of property a [`PropertyDef`] describes.
#[derive(Debug, Clone)]
pub enum PropertyKind {
    /// A scalar column property.
    Scalar(ScalarProperty),
    /// A relationship to another model.
    Relationship(RelationshipDef),
    /// A property with no storage mapping at all (synonym, composite
    /// helper).
    Synthetic,
}

/// A named property of a mapped model.
#[derive(Debug, Clone)]
pub struct PropertyDef {
    /// The attribute name on the model class.
    pub key: String,
    /// The property kind and its metadata.
    pub kind: PropertyKind,
}

impl PropertyDef {
    /// Creates a scalar property backed by a single table column.
    pub fn column(key: impl Into<String>, column: ColumnDef) -> Self {
        Self {
            key: key.into(),
            kind: PropertyKind::Scalar(ScalarProperty {
                columns: vec![ColumnSource::Table(column)],
            }),
        }
    }

    /// Creates a scalar property backed by several column sources.
    pub fn columns(key: impl Into<String>, columns: Vec<ColumnSource>) -> Self {
        Self {
            key: key.into(),
            kind: PropertyKind::Scalar(ScalarProperty { columns }),
        }
    }

    /// Creates a scalar property backed by a computed expression.
    pub fn expression(key: impl Into<String>, expression: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            kind: PropertyKind::Scalar(ScalarProperty {
                columns: vec![ColumnSource::Expression(expression.into())],
            }),
        }
    }

    /// Creates a relationship property.
    pub fn relationship(
        key: impl Into<String>,
        direction: RelationDirection,
        remote_model: impl Into<String>,
        local_column: ColumnDef,
    ) -> Self {
        Self {
            key: key.into(),
            kind: PropertyKind::Relationship(RelationshipDef {
                direction,
                remote_model: remote_model.into(),
                local_column,
            }),
        }
    }

    /// Creates a property with no storage mapping.
    pub fn synthetic(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            kind: PropertyKind::Synthetic,
        }
    }

    /// Returns `true` if this property is a relationship.
    pub const fn is_relation(&self) -> bool {
        matches!(self.kind, PropertyKind::Relationship(_))
    }
}
