//! Column-type dispatch and property conversion.
//!
//! [`ConverterRegistry`] maps a column's runtime type to a conversion
//! function through its identifier lineage; [`AdminModelConverter`] applies
//! the per-property precedence rules (labels, validators, defaults,
//! overrides) and delegates scalar columns to the registry.
//!
//! The registration table is a static list built into the registry at
//! construction; callers may layer extra entries over it or replace the
//! inheritance-aware lookup with exact-type matching.

use std::collections::HashMap;

use tracing::{debug, trace};

use databrowser_rs_core::error::{DatabrowserError, DatabrowserResult};
use databrowser_rs_mapper::columns::{ColumnDef, ColumnDefault};
use databrowser_rs_mapper::model::{Mapper, ModelClass};
use databrowser_rs_mapper::properties::{
    ColumnSource, PropertyDef, PropertyKind, RelationDirection, RelationshipDef,
};
use databrowser_rs_mapper::session::{DeferredQuery, Session};

use crate::fields::{FieldArgs, FieldFactory, FormField, FormFieldType, FormatterFn};
use crate::validators::{FieldValidator, UniqueValidator};
use crate::view::ModelView;

/// A conversion function: builds a form field for one column.
pub type ConverterFn = fn(&AdminModelConverter, &ColumnDef, FieldArgs) -> FormField;

/// The built-in registration table, one entry per type identifier.
///
/// Common types register under short names; dialect-specific and binary
/// types register under qualified identifiers so they never shadow a
/// same-named type from another module.
static DEFAULT_CONVERTERS: &[(&str, ConverterFn)] = &[
    ("String", AdminModelConverter::conv_string),
    ("Unicode", AdminModelConverter::conv_string),
    ("Text", AdminModelConverter::conv_text),
    ("UnicodeText", AdminModelConverter::conv_text),
    ("types.LargeBinary", AdminModelConverter::conv_text),
    ("types.Binary", AdminModelConverter::conv_text),
    ("Boolean", AdminModelConverter::conv_boolean),
    ("Date", AdminModelConverter::conv_date),
    ("DateTime", AdminModelConverter::conv_date_time),
    ("Time", AdminModelConverter::conv_time),
    ("Integer", AdminModelConverter::conv_integer),
    ("SmallInteger", AdminModelConverter::conv_integer),
    ("Numeric", AdminModelConverter::conv_decimal),
    ("Float", AdminModelConverter::conv_decimal),
    ("dialects.mysql.Year", AdminModelConverter::conv_mysql_year),
    ("dialects.postgresql.Inet", AdminModelConverter::conv_pg_inet),
    (
        "dialects.postgresql.MacAddr",
        AdminModelConverter::conv_pg_macaddr,
    ),
    ("dialects.postgresql.Uuid", AdminModelConverter::conv_pg_uuid),
    (
        "dialects.postgresql.Array",
        AdminModelConverter::conv_pg_array,
    ),
];

/// Resolves a column's runtime type to a conversion function.
///
/// Immutable after construction; one registry instance serves any number
/// of conversions.
#[derive(Debug, Clone)]
pub struct ConverterRegistry {
    converters: HashMap<String, ConverterFn>,
    use_mro: bool,
}

impl Default for ConverterRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl ConverterRegistry {
    /// Creates a registry with the built-in table and inheritance-aware
    /// lookup.
    pub fn new() -> Self {
        Self::with_converters(Vec::new(), true)
    }

    /// Creates a registry layering `extra` entries over the built-in
    /// table (same identifier replaces the built-in). `use_mro = false`
    /// restricts lookup to the concrete type, ignoring ancestors.
    pub fn with_converters(extra: Vec<(String, ConverterFn)>, use_mro: bool) -> Self {
        let mut converters: HashMap<String, ConverterFn> = DEFAULT_CONVERTERS
            .iter()
            .map(|&(ident, f)| (ident.to_string(), f))
            .collect();
        converters.extend(extra);
        Self {
            converters,
            use_mro,
        }
    }

    /// Finds the most specific converter for a column's type.
    ///
    /// Candidates are the type's identifier lineage, most derived first.
    /// The whole chain is scanned by qualified identifier before any short
    /// name is consulted, so a qualified registration on an ancestor beats
    /// a short-name registration on the concrete type.
    pub fn get_converter(&self, column: &ColumnDef) -> Option<ConverterFn> {
        let lineage = column.column_type.lineage();
        let candidates = if self.use_mro {
            lineage
        } else {
            &lineage[..1]
        };

        for ident in candidates {
            if let Some(f) = self.converters.get(ident.qualified) {
                trace!(identifier = ident.qualified, column = %column.name, "converter resolved by qualified identifier");
                return Some(*f);
            }
        }
        for ident in candidates {
            if let Some(f) = self.converters.get(ident.name) {
                trace!(identifier = ident.name, column = %column.name, "converter resolved by short name");
                return Some(*f);
            }
        }
        None
    }
}

/// Converts mapped-model properties into form fields.
///
/// Holds the session handle (captured into deferred queries, never used to
/// run one), the view configuration, and the converter registry. Safe to
/// share across conversions; every call builds its own argument bag.
#[derive(Debug, Clone)]
pub struct AdminModelConverter {
    registry: ConverterRegistry,
    session: Session,
    view: ModelView,
}

impl AdminModelConverter {
    /// Creates a converter with the built-in registry.
    pub fn new(session: Session, view: ModelView) -> Self {
        Self {
            registry: ConverterRegistry::new(),
            session,
            view,
        }
    }

    /// Creates a converter with a caller-configured registry.
    pub fn with_registry(session: Session, view: ModelView, registry: ConverterRegistry) -> Self {
        Self {
            registry,
            session,
            view,
        }
    }

    /// The view configuration this converter consults.
    pub const fn view(&self) -> &ModelView {
        &self.view
    }

    /// The session handle captured into deferred queries.
    pub const fn session(&self) -> &Session {
        &self.session
    }

    fn resolve_label(&self, name: &str, args: &FieldArgs) -> Option<String> {
        if args.label.is_some() {
            return args.label.clone();
        }
        if let Some(label) = self.view.column_labels.get(name) {
            return Some(label.clone());
        }
        Some(self.view.prettify_name(name))
    }

    fn resolve_description(&self, name: &str, args: &FieldArgs) -> Option<String> {
        if args.description.is_some() {
            return args.description.clone();
        }
        self.view.column_descriptions.get(name).cloned()
    }

    fn resolve_formatter(&self, name: &str, args: &FieldArgs) -> Option<FormatterFn> {
        if args.formatter.is_some() {
            return args.formatter;
        }
        self.view.form_formatters.get(name).copied()
    }

    fn field_override(&self, name: &str) -> Option<FieldFactory> {
        self.view.form_overrides.get(name).copied()
    }

    /// Converts one property into a form field.
    ///
    /// `Ok(None)` means the property contributes no field: a column type
    /// with no registered converter, a foreign-key column, a hidden
    /// back-reference, a primary key not asked for. Errors are reserved
    /// for unsupported constructs.
    pub fn convert(
        &self,
        model: &ModelClass,
        mapper: &Mapper,
        prop: &PropertyDef,
        field_args: Option<&FieldArgs>,
        hidden_pk: bool,
    ) -> DatabrowserResult<Option<FormField>> {
        let args = field_args.cloned().unwrap_or_default();
        trace!(model = %model.name, table = %mapper.table, property = %prop.key, "converting property");

        match &prop.kind {
            PropertyKind::Relationship(rel) => Ok(self.convert_relationship(prop, rel, args)),
            PropertyKind::Scalar(scalar) => {
                if scalar.columns.len() != 1 {
                    return Err(DatabrowserError::MultiColumnProperty {
                        model: model.name.clone(),
                        name: prop.key.clone(),
                    });
                }
                let column = match &scalar.columns[0] {
                    ColumnSource::Table(column) => column,
                    ColumnSource::Expression(_) => {
                        debug!(property = %prop.key, "skipping expression-backed property");
                        return Ok(None);
                    }
                };
                self.convert_column(model, prop, column, args, hidden_pk)
            }
            PropertyKind::Synthetic => {
                debug!(property = %prop.key, "skipping property with no storage mapping");
                Ok(None)
            }
        }
    }

    fn convert_relationship(
        &self,
        prop: &PropertyDef,
        rel: &RelationshipDef,
        mut args: FieldArgs,
    ) -> Option<FormField> {
        args.label = self.resolve_label(&prop.key, &args);
        args.description = self.resolve_description(&prop.key, &args);
        args.formatter = self.resolve_formatter(&prop.key, &args);

        let local = &rel.local_column;

        if local.nullable {
            args.validators.push(FieldValidator::Optional);
        } else if rel.direction != RelationDirection::ManyToMany {
            args.validators.push(FieldValidator::Required);
        }

        if let Some(factory) = self.field_override(&prop.key) {
            return Some(factory(args));
        }

        let allow_blank = args.allow_blank.take().unwrap_or(local.nullable);
        let query = args
            .query
            .take()
            .unwrap_or_else(|| DeferredQuery::new(&self.session, rel.remote_model.clone()));

        match rel.direction {
            RelationDirection::ManyToOne => Some(FormField::new(
                FormFieldType::QuerySelect { query, allow_blank },
                args,
            )),
            RelationDirection::OneToMany => {
                // A one-to-many with no local foreign key is a bare
                // back-reference.
                if !local.foreign_key && self.view.column_hide_backrefs {
                    debug!(property = %prop.key, "hiding back-reference relationship");
                    return None;
                }
                Some(FormField::new(
                    FormFieldType::QuerySelectMultiple { query },
                    args,
                ))
            }
            RelationDirection::ManyToMany => Some(FormField::new(
                FormFieldType::QuerySelectMultiple { query },
                args,
            )),
        }
    }

    fn convert_column(
        &self,
        model: &ModelClass,
        prop: &PropertyDef,
        column: &ColumnDef,
        mut args: FieldArgs,
        hidden_pk: bool,
    ) -> DatabrowserResult<Option<FormField>> {
        // Foreign keys are represented through relationships.
        if column.foreign_key {
            return Ok(None);
        }

        let mut unique = false;

        if column.primary_key {
            if hidden_pk {
                return Ok(Some(FormField::new(FormFieldType::Hidden, FieldArgs::new())));
            }

            // A primary key only appears when the view names it
            // explicitly, and then carries a uniqueness probe.
            let Some(form_columns) = &self.view.form_columns else {
                return Ok(None);
            };
            if !form_columns.iter().any(|c| c == &prop.key) {
                return Ok(None);
            }

            args.validators.push(FieldValidator::Unique(UniqueValidator::new(
                DeferredQuery::new(&self.session, model.name.clone()),
                column.name.clone(),
            )));
            unique = true;
        }

        if column.unique && !unique {
            args.validators.push(FieldValidator::Unique(UniqueValidator::new(
                DeferredQuery::new(&self.session, model.name.clone()),
                column.name.clone(),
            )));
        }

        if !column.nullable && !column.column_type.is_boolean() {
            args.validators.push(FieldValidator::Required);
        }

        // Labels and descriptions belong to the top-level model only;
        // inline fields inherit theirs from the embedding form.
        if self.view.model == model.name {
            args.label = self.resolve_label(&prop.key, &args);
            args.description = self.resolve_description(&prop.key, &args);
        }

        if let Some(default) = &column.default {
            let value = match default {
                ColumnDefault::Scalar(v) => Some(v.clone()),
                ColumnDefault::Callable(f) => Some(f()),
                ColumnDefault::Clause(_) => None,
            };
            if value.is_some() {
                args.default = value;
            }
        }

        if column.nullable {
            args.validators.push(FieldValidator::Optional);
        }

        if let Some(factory) = self.field_override(&prop.key) {
            return Ok(Some(factory(args)));
        }

        let Some(converter) = self.registry.get_converter(column) else {
            debug!(property = %prop.key, column_type = column.column_type.concrete().qualified, "no converter for column type");
            return Ok(None);
        };
        Ok(Some(converter(self, column, args)))
    }

    fn string_common(column: &ColumnDef, args: &mut FieldArgs) {
        if let Some(max) = column.column_type.length {
            args.validators.push(FieldValidator::Length { max });
        }
    }

    fn conv_string(&self, column: &ColumnDef, mut args: FieldArgs) -> FormField {
        if let Some(enums) = column.column_type.enums.clone() {
            args.validators.push(FieldValidator::AnyOf {
                choices: enums.clone(),
            });
            let choices = enums.into_iter().map(|v| (v.clone(), v)).collect();
            return FormField::new(FormFieldType::Select { choices }, args);
        }
        Self::string_common(column, &mut args);
        FormField::new(FormFieldType::Text, args)
    }

    fn conv_text(&self, column: &ColumnDef, mut args: FieldArgs) -> FormField {
        Self::string_common(column, &mut args);
        FormField::new(FormFieldType::TextArea, args)
    }

    fn conv_boolean(&self, _column: &ColumnDef, args: FieldArgs) -> FormField {
        FormField::new(FormFieldType::Boolean, args)
    }

    fn conv_date(&self, _column: &ColumnDef, args: FieldArgs) -> FormField {
        FormField::new(FormFieldType::Date, args)
    }

    fn conv_date_time(&self, _column: &ColumnDef, args: FieldArgs) -> FormField {
        FormField::new(FormFieldType::DateTime, args)
    }

    fn conv_time(&self, _column: &ColumnDef, args: FieldArgs) -> FormField {
        FormField::new(FormFieldType::Time, args)
    }

    fn conv_integer(&self, column: &ColumnDef, mut args: FieldArgs) -> FormField {
        if column.column_type.unsigned {
            args.validators.push(FieldValidator::NumberRange {
                min: Some(0),
                max: None,
            });
        }
        FormField::new(FormFieldType::Integer, args)
    }

    fn conv_decimal(&self, column: &ColumnDef, args: FieldArgs) -> FormField {
        let places = column.column_type.scale.unwrap_or(2);
        FormField::new(FormFieldType::Decimal { places }, args)
    }

    fn conv_mysql_year(&self, _column: &ColumnDef, mut args: FieldArgs) -> FormField {
        args.validators.push(FieldValidator::NumberRange {
            min: Some(1901),
            max: Some(2155),
        });
        FormField::new(FormFieldType::Text, args)
    }

    fn conv_pg_inet(&self, _column: &ColumnDef, mut args: FieldArgs) -> FormField {
        if args.label.is_none() {
            args.label = Some("IP Address".to_string());
        }
        args.validators.push(FieldValidator::IpAddress);
        FormField::new(FormFieldType::Text, args)
    }

    fn conv_pg_macaddr(&self, _column: &ColumnDef, mut args: FieldArgs) -> FormField {
        if args.label.is_none() {
            args.label = Some("MAC Address".to_string());
        }
        args.validators.push(FieldValidator::MacAddress);
        FormField::new(FormFieldType::Text, args)
    }

    fn conv_pg_uuid(&self, _column: &ColumnDef, mut args: FieldArgs) -> FormField {
        if args.label.is_none() {
            args.label = Some("UUID".to_string());
        }
        args.validators.push(FieldValidator::Uuid);
        FormField::new(FormFieldType::Text, args)
    }

    fn conv_pg_array(&self, _column: &ColumnDef, args: FieldArgs) -> FormField {
        FormField::new(FormFieldType::Tags { save_as_list: true }, args)
    }
}
