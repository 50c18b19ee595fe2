//! Form field model and the per-property argument bag.
//!
//! A [`FormField`] is one entry of a generated form schema: a field kind
//! plus everything the rendering and binding layers need (widget, label,
//! validators, default). Fields are assembled from a [`FieldArgs`] bag
//! that conversion fills in, one fresh bag per property.

use databrowser_rs_mapper::session::DeferredQuery;
use databrowser_rs_mapper::value::Value;

use crate::validators::FieldValidator;
use crate::widgets::WidgetType;

/// A value-transform function applied by the form library at bind time.
pub type FilterFn = fn(Value) -> Value;

/// Renders a related row as an option label in a relationship select.
pub type FormatterFn = fn(&Value) -> String;

/// Constructs a field directly from an argument bag, bypassing the
/// converter registry. Registered per property name in the view
/// configuration as an explicit field-type override.
pub type FieldFactory = fn(FieldArgs) -> FormField;

/// The kind of a generated form field, with kind-specific parameters.
#[derive(Debug, Clone, PartialEq)]
pub enum FormFieldType {
    /// Single-line text.
    Text,
    /// Multi-line text.
    TextArea,
    /// Checkbox.
    Boolean,
    /// Date.
    Date,
    /// Date and time.
    DateTime,
    /// Time of day.
    Time,
    /// Whole number.
    Integer,
    /// Fixed-precision decimal.
    Decimal {
        /// Digits after the decimal point.
        places: u32,
    },
    /// Single choice from a fixed set, as `(value, display_label)` pairs.
    Select {
        /// The available choices.
        choices: Vec<(String, String)>,
    },
    /// Single choice from a query-backed set.
    QuerySelect {
        /// The deferred query producing the option rows.
        query: DeferredQuery,
        /// Whether an empty selection is presented.
        allow_blank: bool,
    },
    /// Multiple choices from a query-backed set.
    QuerySelectMultiple {
        /// The deferred query producing the option rows.
        query: DeferredQuery,
    },
    /// Free-entry tag list.
    Tags {
        /// Whether the bound value is stored as a list rather than a
        /// delimited string.
        save_as_list: bool,
    },
    /// Hidden input.
    Hidden,
}

/// Returns the default widget for a field kind.
pub fn default_widget_for_field_type(field_type: &FormFieldType) -> WidgetType {
    match field_type {
        FormFieldType::Text => WidgetType::TextInput,
        FormFieldType::TextArea => WidgetType::Textarea,
        FormFieldType::Boolean => WidgetType::CheckboxInput,
        FormFieldType::Date => WidgetType::DatePicker,
        FormFieldType::DateTime => WidgetType::DateTimePicker,
        FormFieldType::Time => WidgetType::TimeInput,
        FormFieldType::Integer | FormFieldType::Decimal { .. } => WidgetType::NumberInput,
        FormFieldType::Select { .. } | FormFieldType::QuerySelect { .. } => {
            WidgetType::Select2 { multiple: false }
        }
        FormFieldType::QuerySelectMultiple { .. } => WidgetType::Select2 { multiple: true },
        FormFieldType::Tags { .. } => WidgetType::Select2Tags,
        FormFieldType::Hidden => WidgetType::HiddenInput,
    }
}

/// Per-field configuration accumulated during conversion.
///
/// One bag is created per property, merged from the caller's per-field
/// overrides, filled in by the precedence rules, and finally consumed by
/// field construction. Nothing outlives the property it was built for.
#[derive(Debug, Clone, Default)]
pub struct FieldArgs {
    /// Field label.
    pub label: Option<String>,
    /// Field description / help text.
    pub description: Option<String>,
    /// Validators, in the order they will run.
    pub validators: Vec<FieldValidator>,
    /// Bind-time value filters.
    pub filters: Vec<FilterFn>,
    /// Initial value.
    pub default: Option<Value>,
    /// Explicit widget, overriding the field kind's default.
    pub widget: Option<WidgetType>,
    /// Explicit choices for select fields.
    pub choices: Option<Vec<(String, String)>>,
    /// Whether a blank option is presented in relationship selects.
    pub allow_blank: Option<bool>,
    /// The deferred option source for relationship selects.
    pub query: Option<DeferredQuery>,
    /// Option-label formatter for relationship selects.
    pub formatter: Option<FormatterFn>,
}

impl FieldArgs {
    /// Creates an empty argument bag.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the label.
    #[must_use]
    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Sets the description.
    #[must_use]
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Appends a validator.
    #[must_use]
    pub fn validator(mut self, validator: FieldValidator) -> Self {
        self.validators.push(validator);
        self
    }

    /// Appends a bind-time filter.
    #[must_use]
    pub fn filter(mut self, filter: FilterFn) -> Self {
        self.filters.push(filter);
        self
    }

    /// Sets the initial value.
    #[must_use]
    pub fn default_value(mut self, value: impl Into<Value>) -> Self {
        self.default = Some(value.into());
        self
    }

    /// Sets an explicit widget.
    #[must_use]
    pub fn widget(mut self, widget: WidgetType) -> Self {
        self.widget = Some(widget);
        self
    }

    /// Sets the option-label formatter.
    #[must_use]
    pub fn formatter(mut self, formatter: FormatterFn) -> Self {
        self.formatter = Some(formatter);
        self
    }
}

/// One field of a generated form schema.
#[derive(Debug, Clone)]
pub struct FormField {
    /// The field kind.
    pub field_type: FormFieldType,
    /// The widget the rendering layer should use.
    pub widget: WidgetType,
    /// Label; `None` for inline fields, whose label the embedding form
    /// supplies.
    pub label: Option<String>,
    /// Description / help text.
    pub description: Option<String>,
    /// Validators, in run order.
    pub validators: Vec<FieldValidator>,
    /// Bind-time value filters.
    pub filters: Vec<FilterFn>,
    /// Initial value.
    pub default: Option<Value>,
    /// Option-label formatter for relationship selects.
    pub formatter: Option<FormatterFn>,
}

impl FormField {
    /// Builds a field of the given kind from an argument bag.
    ///
    /// The bag's explicit widget wins over the kind's default widget.
    /// Kind-specific arguments (`choices`, `query`, `allow_blank`) are
    /// consumed by the caller before construction; anything left in the
    /// bag that the kind has no use for is discarded.
    pub fn new(field_type: FormFieldType, args: FieldArgs) -> Self {
        let widget = args
            .widget
            .unwrap_or_else(|| default_widget_for_field_type(&field_type));
        Self {
            field_type,
            widget,
            label: args.label,
            description: args.description,
            validators: args.validators,
            filters: args.filters,
            default: args.default,
            formatter: args.formatter,
        }
    }

    /// Returns `true` if a validator with the given name is attached.
    pub fn has_validator(&self, name: &str) -> bool {
        self.validators.iter().any(|v| v.name() == name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_widgets() {
        assert_eq!(
            default_widget_for_field_type(&FormFieldType::Text),
            WidgetType::TextInput
        );
        assert_eq!(
            default_widget_for_field_type(&FormFieldType::Boolean),
            WidgetType::CheckboxInput
        );
        assert_eq!(
            default_widget_for_field_type(&FormFieldType::Date),
            WidgetType::DatePicker
        );
        assert_eq!(
            default_widget_for_field_type(&FormFieldType::Hidden),
            WidgetType::HiddenInput
        );
        assert_eq!(
            default_widget_for_field_type(&FormFieldType::Tags { save_as_list: true }),
            WidgetType::Select2Tags
        );
    }

    #[test]
    fn test_new_uses_default_widget() {
        let f = FormField::new(FormFieldType::TextArea, FieldArgs::new());
        assert_eq!(f.widget, WidgetType::Textarea);
    }

    #[test]
    fn test_new_prefers_explicit_widget() {
        let args = FieldArgs::new().widget(WidgetType::TextInput);
        let f = FormField::new(FormFieldType::TextArea, args);
        assert_eq!(f.widget, WidgetType::TextInput);
    }

    #[test]
    fn test_args_builder() {
        let args = FieldArgs::new()
            .label("Name")
            .description("Full name")
            .validator(FieldValidator::Required)
            .default_value("anonymous");
        let f = FormField::new(FormFieldType::Text, args);
        assert_eq!(f.label.as_deref(), Some("Name"));
        assert_eq!(f.description.as_deref(), Some("Full name"));
        assert!(f.has_validator("Required"));
        assert_eq!(f.default, Some(Value::String("anonymous".into())));
    }

    #[test]
    fn test_filters_carried_through() {
        fn trim(value: Value) -> Value {
            match value {
                Value::String(s) => Value::String(s.trim().to_string()),
                other => other,
            }
        }
        let f = FormField::new(FormFieldType::Text, FieldArgs::new().filter(trim));
        assert_eq!(f.filters.len(), 1);
        assert_eq!(
            f.filters[0](Value::String("  padded  ".into())),
            Value::String("padded".into())
        );
    }

    #[test]
    fn test_has_validator() {
        let f = FormField::new(
            FormFieldType::Text,
            FieldArgs::new().validator(FieldValidator::Length { max: 10 }),
        );
        assert!(f.has_validator("Length"));
        assert!(!f.has_validator("Required"));
    }
}
