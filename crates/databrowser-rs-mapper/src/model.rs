//! Model class handles and mapper metadata.
//!
//! A [`ModelClass`] is what the mapping layer hands the admin toolkit for
//! each registered model: the class name plus, when the class is actually
//! mapped, its [`Mapper`]. Unmapped handles exist (plain helper classes a
//! caller may mistakenly register) and the form generator rejects them.

use crate::properties::{ColumnSource, PropertyDef, PropertyKind};

/// Mapping metadata for one model class.
///
/// Property order follows the declaration order on the model. The
/// `attributes` table holds proxied and hybrid attributes: names that are
/// resolvable when explicitly requested but are not part of normal
/// property iteration.
#[derive(Debug, Clone, Default)]
pub struct Mapper {
    /// The mapped table name.
    pub table: String,
    /// The model's properties, in declaration order.
    pub properties: Vec<PropertyDef>,
    /// Proxied/hybrid attributes resolvable by name only.
    pub attributes: Vec<(String, PropertyDef)>,
}

impl Mapper {
    /// Creates an empty mapper for the given table.
    pub fn new(table: impl Into<String>) -> Self {
        Self {
            table: table.into(),
            properties: Vec::new(),
            attributes: Vec::new(),
        }
    }

    /// Appends a property in declaration order.
    #[must_use]
    pub fn property(mut self, prop: PropertyDef) -> Self {
        self.properties.push(prop);
        self
    }

    /// Registers a proxied/hybrid attribute under the given name.
    #[must_use]
    pub fn attribute(mut self, name: impl Into<String>, target: PropertyDef) -> Self {
        self.attributes.push((name.into(), target));
        self
    }

    /// Looks up a declared property by name.
    pub fn find_property(&self, name: &str) -> Option<&PropertyDef> {
        self.properties.iter().find(|p| p.key == name)
    }

    /// Looks up a proxied/hybrid attribute by name.
    pub fn find_attribute(&self, name: &str) -> Option<&PropertyDef> {
        self.attributes
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, p)| p)
    }
}

/// A model class handle as supplied by the mapping layer.
#[derive(Debug, Clone)]
pub struct ModelClass {
    /// The class name, used to name the generated form type.
    pub name: String,
    /// The mapping metadata; `None` when the class is not mapped.
    pub mapper: Option<Mapper>,
}

impl ModelClass {
    /// Creates a handle for a mapped model.
    pub fn new(name: impl Into<String>, mapper: Mapper) -> Self {
        Self {
            name: name.into(),
            mapper: Some(mapper),
        }
    }

    /// Creates a handle for a class without mapping metadata.
    pub fn unmapped(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            mapper: None,
        }
    }
}

/// Returns the property name of the first primary-key column, if any.
///
/// # Examples
///
/// ```
/// use databrowser_rs_mapper::columns::ColumnDef;
/// use databrowser_rs_mapper::model::{get_primary_key, Mapper};
/// use databrowser_rs_mapper::properties::PropertyDef;
/// use databrowser_rs_mapper::types::ColumnType;
///
/// let mapper = Mapper::new("users")
///     .property(PropertyDef::column(
///         "id",
///         ColumnDef::new("id", ColumnType::integer()).primary_key(),
///     ))
///     .property(PropertyDef::column(
///         "name",
///         ColumnDef::new("name", ColumnType::string(Some(50))),
///     ));
/// assert_eq!(get_primary_key(&mapper), Some("id"));
/// ```
pub fn get_primary_key(mapper: &Mapper) -> Option<&str> {
    for prop in &mapper.properties {
        if let PropertyKind::Scalar(ref scalar) = prop.kind {
            for source in &scalar.columns {
                if let ColumnSource::Table(ref column) = source {
                    if column.primary_key {
                        return Some(&prop.key);
                    }
                }
            }
        }
    }
    None
}
