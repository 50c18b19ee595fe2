//! View-level configuration consulted during conversion.
//!
//! A [`ModelView`] is the admin view's contribution to form generation:
//! label and description maps, explicit field-type overrides, the
//! back-reference hiding flag, and option-label formatters. Every field is
//! an explicit optional with an inert default, so an unconfigured view
//! changes nothing.

use std::collections::HashMap;

use databrowser_rs_core::utils::text;

use crate::fields::{FieldFactory, FormatterFn};

/// Per-model view configuration.
///
/// # Examples
///
/// ```
/// use databrowser_rs_forms::view::ModelView;
///
/// let view = ModelView::new("User")
///     .column_label("email", "E-mail address")
///     .column_description("email", "Used for password recovery")
///     .hide_backrefs(true);
/// assert_eq!(view.prettify_name("first_name"), "First Name");
/// ```
#[derive(Debug, Clone)]
pub struct ModelView {
    /// Name of the model this view administers.
    pub model: String,
    /// Label overrides keyed by property name.
    pub column_labels: HashMap<String, String>,
    /// Description overrides keyed by property name.
    pub column_descriptions: HashMap<String, String>,
    /// Explicit field-type overrides keyed by property name.
    pub form_overrides: HashMap<String, FieldFactory>,
    /// Restricts which properties (including primary keys named here)
    /// appear on the form.
    pub form_columns: Option<Vec<String>>,
    /// Drop one-to-many relationships that exist only as back-references.
    pub column_hide_backrefs: bool,
    /// Option-label formatters for relationship selects, keyed by
    /// property name.
    pub form_formatters: HashMap<String, FormatterFn>,
    prettify: fn(&str) -> String,
}

impl ModelView {
    /// Creates an unconfigured view for the given model.
    pub fn new(model: impl Into<String>) -> Self {
        Self {
            model: model.into(),
            column_labels: HashMap::new(),
            column_descriptions: HashMap::new(),
            form_overrides: HashMap::new(),
            form_columns: None,
            column_hide_backrefs: false,
            form_formatters: HashMap::new(),
            prettify: text::prettify_name,
        }
    }

    /// Adds a label override for a property.
    #[must_use]
    pub fn column_label(mut self, name: impl Into<String>, label: impl Into<String>) -> Self {
        self.column_labels.insert(name.into(), label.into());
        self
    }

    /// Adds a description override for a property.
    #[must_use]
    pub fn column_description(
        mut self,
        name: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        self.column_descriptions
            .insert(name.into(), description.into());
        self
    }

    /// Registers an explicit field-type override for a property.
    #[must_use]
    pub fn form_override(mut self, name: impl Into<String>, factory: FieldFactory) -> Self {
        self.form_overrides.insert(name.into(), factory);
        self
    }

    /// Restricts the form to the named properties.
    #[must_use]
    pub fn form_columns(mut self, columns: Vec<String>) -> Self {
        self.form_columns = Some(columns);
        self
    }

    /// Sets whether back-reference relationships are hidden.
    #[must_use]
    pub const fn hide_backrefs(mut self, hide: bool) -> Self {
        self.column_hide_backrefs = hide;
        self
    }

    /// Registers an option-label formatter for a relationship property.
    #[must_use]
    pub fn form_formatter(mut self, name: impl Into<String>, formatter: FormatterFn) -> Self {
        self.form_formatters.insert(name.into(), formatter);
        self
    }

    /// Replaces the default name-prettification function.
    #[must_use]
    pub fn prettify_with(mut self, prettify: fn(&str) -> String) -> Self {
        self.prettify = prettify;
        self
    }

    /// Turns a property name into a display label.
    pub fn prettify_name(&self, name: &str) -> String {
        (self.prettify)(name)
    }
}
