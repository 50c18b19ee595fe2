//! Form schema generation.
//!
//! [`get_form`] walks a mapped model's properties and assembles a
//! [`FormSchema`]: a new form type composed of a base prototype's fields
//! plus one generated field per convertible property. Generation is pure
//! schema derivation; the returned value is immutable and independent of
//! the inputs it was built from.

use std::collections::HashMap;

use tracing::debug;

use databrowser_rs_core::error::{DatabrowserError, DatabrowserResult};
use databrowser_rs_core::logging::conversion_span;
use databrowser_rs_mapper::model::ModelClass;
use databrowser_rs_mapper::properties::PropertyDef;

use crate::convert::AdminModelConverter;
use crate::fields::{FieldArgs, FormField};

/// A base form prototype.
///
/// Generated schemas subclass a base form: the prototype's fields are
/// copied in ahead of the generated ones, and its name is recorded as the
/// schema's base.
#[derive(Debug, Clone)]
pub struct FormBase {
    /// The base form's type name.
    pub name: String,
    /// Fields every derived form starts with.
    pub fields: Vec<(String, FormField)>,
}

impl FormBase {
    /// Creates an empty prototype with the given type name.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            fields: Vec::new(),
        }
    }

    /// Appends a field to the prototype.
    #[must_use]
    pub fn field(mut self, name: impl Into<String>, field: FormField) -> Self {
        self.fields.push((name.into(), field));
        self
    }
}

impl Default for FormBase {
    fn default() -> Self {
        Self::new("BaseForm")
    }
}

/// A generated form type.
///
/// Field order is the base prototype's fields followed by generated fields
/// in property order.
#[derive(Debug, Clone)]
pub struct FormSchema {
    /// The generated type name, `<Model>Form`.
    pub name: String,
    /// The base form's type name.
    pub base: String,
    /// The named fields, in declaration order.
    pub fields: Vec<(String, FormField)>,
}

impl FormSchema {
    /// Looks up a field by name.
    pub fn field(&self, name: &str) -> Option<&FormField> {
        self.fields
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, f)| f)
    }

    /// The field names, in declaration order.
    pub fn field_names(&self) -> Vec<&str> {
        self.fields.iter().map(|(n, _)| n.as_str()).collect()
    }

    /// Number of fields.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Returns `true` if the schema has no fields.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

/// Options for [`get_form`].
///
/// All fields default to inert values: every property is considered, no
/// per-field overrides, primary keys omitted, underscore-prefixed
/// properties skipped.
#[derive(Debug, Clone)]
pub struct FormOptions {
    /// The base form prototype.
    pub base: FormBase,
    /// Restrict generation to these properties, in this order.
    pub only: Option<Vec<String>>,
    /// Skip these properties (ignored when `only` is given).
    pub exclude: Option<Vec<String>>,
    /// Per-property argument overrides.
    pub field_args: HashMap<String, FieldArgs>,
    /// Emit a hidden field for the primary key.
    pub hidden_pk: bool,
    /// Skip properties whose name starts with an underscore.
    pub ignore_hidden: bool,
}

impl Default for FormOptions {
    fn default() -> Self {
        Self {
            base: FormBase::default(),
            only: None,
            exclude: None,
            field_args: HashMap::new(),
            hidden_pk: false,
            ignore_hidden: true,
        }
    }
}

impl FormOptions {
    /// Creates the default options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the base form prototype.
    #[must_use]
    pub fn base(mut self, base: FormBase) -> Self {
        self.base = base;
        self
    }

    /// Restricts generation to the named properties, preserving order.
    #[must_use]
    pub fn only(mut self, names: Vec<String>) -> Self {
        self.only = Some(names);
        self
    }

    /// Excludes the named properties.
    #[must_use]
    pub fn exclude(mut self, names: Vec<String>) -> Self {
        self.exclude = Some(names);
        self
    }

    /// Adds per-field argument overrides for one property.
    #[must_use]
    pub fn field_args(mut self, name: impl Into<String>, args: FieldArgs) -> Self {
        self.field_args.insert(name.into(), args);
        self
    }

    /// Sets whether a hidden primary-key field is emitted.
    #[must_use]
    pub const fn hidden_pk(mut self, hidden: bool) -> Self {
        self.hidden_pk = hidden;
        self
    }

    /// Sets whether underscore-prefixed properties are skipped.
    #[must_use]
    pub const fn ignore_hidden(mut self, ignore: bool) -> Self {
        self.ignore_hidden = ignore;
        self
    }
}

/// Generates a form schema from a mapped model.
///
/// Properties are taken in declaration order, or in the caller's order
/// when `only` is given (`only` also resolves proxied/hybrid attribute
/// names). Properties the converter declines contribute nothing; that is
/// the normal path for foreign keys, unrequested primary keys, and types
/// with no registered converter.
///
/// # Errors
///
/// - [`DatabrowserError::NotMapped`] when the model carries no mapping metadata.
/// - [`DatabrowserError::UnknownProperty`] when an `only` entry resolves to nothing.
/// - [`DatabrowserError::MultiColumnProperty`] for properties spanning
///   several storage columns.
pub fn get_form(
    model: &ModelClass,
    converter: &AdminModelConverter,
    options: &FormOptions,
) -> DatabrowserResult<FormSchema> {
    let span = conversion_span(&model.name);
    let _guard = span.enter();

    let mapper = model
        .mapper
        .as_ref()
        .ok_or_else(|| DatabrowserError::NotMapped {
            model: model.name.clone(),
        })?;

    // Resolve the property list. With `only`, names are looked up among
    // declared properties first, then the proxied/hybrid attribute table,
    // and keep the caller's order under the requested name.
    let selected: Vec<(&str, &PropertyDef)> = if let Some(only) = &options.only {
        let mut props = Vec::with_capacity(only.len());
        for name in only {
            let prop = mapper
                .find_property(name)
                .or_else(|| mapper.find_attribute(name))
                .ok_or_else(|| DatabrowserError::UnknownProperty {
                    model: model.name.clone(),
                    name: name.clone(),
                })?;
            props.push((name.as_str(), prop));
        }
        props
    } else if let Some(exclude) = &options.exclude {
        mapper
            .properties
            .iter()
            .filter(|p| !exclude.contains(&p.key))
            .map(|p| (p.key.as_str(), p))
            .collect()
    } else {
        mapper
            .properties
            .iter()
            .map(|p| (p.key.as_str(), p))
            .collect()
    };

    let mut fields = options.base.fields.clone();
    for (name, prop) in selected {
        if options.ignore_hidden && name.starts_with('_') {
            continue;
        }

        let args = options.field_args.get(name);
        match converter.convert(model, mapper, prop, args, options.hidden_pk)? {
            Some(field) => fields.push((name.to_string(), field)),
            None => debug!(property = name, "property contributed no field"),
        }
    }

    Ok(FormSchema {
        name: format!("{}Form", model.name),
        base: options.base.name.clone(),
        fields,
    })
}
