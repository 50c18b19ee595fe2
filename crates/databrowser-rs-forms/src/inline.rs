//! Inline (nested) model form settings.
//!
//! An admin view may embed child-model forms inside a parent's form. Each
//! nested model is described by an [`InlineFormAdmin`]: which columns to
//! include or exclude, per-field argument overrides, an optional display
//! label, and a post-processing hook applied to the generated schema.
//!
//! Callers hand the view one of three shapes per nested model (an
//! [`InlineSpec`]) and [`InlineModelConverter::get_info`] normalizes all
//! of them to a settings object.

use std::collections::HashMap;

use databrowser_rs_mapper::model::ModelClass;

use crate::fields::FieldArgs;
use crate::form::FormSchema;
use crate::view::ModelView;

/// Post-processing hook applied to a generated nested-model schema.
pub type PostprocessFn = fn(FormSchema) -> FormSchema;

fn identity(form: FormSchema) -> FormSchema {
    form
}

/// Options accompanying a bare model in an [`InlineSpec::Options`] pair.
#[derive(Debug, Clone, Default)]
pub struct InlineOptions {
    /// Restrict the nested form to these columns.
    pub form_columns: Option<Vec<String>>,
    /// Exclude these columns from the nested form.
    pub form_excluded_columns: Option<Vec<String>>,
    /// Per-field argument overrides.
    pub form_args: HashMap<String, FieldArgs>,
    /// Display label for the nested form.
    pub form_label: Option<String>,
}

/// Settings for one inline model.
#[derive(Debug, Clone)]
pub struct InlineFormAdmin {
    /// The nested model.
    pub model: ModelClass,
    /// Restrict the nested form to these columns.
    pub form_columns: Option<Vec<String>>,
    /// Exclude these columns from the nested form.
    pub form_excluded_columns: Option<Vec<String>>,
    /// Per-field argument overrides.
    pub form_args: HashMap<String, FieldArgs>,
    /// Display label for the nested form.
    pub form_label: Option<String>,
    postprocess: PostprocessFn,
}

impl InlineFormAdmin {
    /// Creates default settings for the given model.
    pub fn new(model: ModelClass) -> Self {
        Self {
            model,
            form_columns: None,
            form_excluded_columns: None,
            form_args: HashMap::new(),
            form_label: None,
            postprocess: identity,
        }
    }

    /// Restricts the nested form to the named columns.
    #[must_use]
    pub fn form_columns(mut self, columns: Vec<String>) -> Self {
        self.form_columns = Some(columns);
        self
    }

    /// Excludes the named columns from the nested form.
    #[must_use]
    pub fn form_excluded_columns(mut self, columns: Vec<String>) -> Self {
        self.form_excluded_columns = Some(columns);
        self
    }

    /// Adds per-field argument overrides for one column.
    #[must_use]
    pub fn form_arg(mut self, name: impl Into<String>, args: FieldArgs) -> Self {
        self.form_args.insert(name.into(), args);
        self
    }

    /// Sets the display label.
    #[must_use]
    pub fn form_label(mut self, label: impl Into<String>) -> Self {
        self.form_label = Some(label.into());
        self
    }

    /// Replaces the post-processing hook. Use this to contribute extra
    /// fields to the generated schema.
    #[must_use]
    pub fn postprocess_with(mut self, f: PostprocessFn) -> Self {
        self.postprocess = f;
        self
    }

    /// Applies the post-processing hook to a generated schema.
    pub fn postprocess_form(&self, form: FormSchema) -> FormSchema {
        (self.postprocess)(form)
    }
}

/// The accepted shapes for declaring an inline model on a view.
#[derive(Debug, Clone)]
pub enum InlineSpec {
    /// A bare model class.
    Model(ModelClass),
    /// A model paired with options.
    Options(ModelClass, InlineOptions),
    /// Preconfigured settings.
    Admin(InlineFormAdmin),
}

/// Resolves inline-model declarations against a parent view.
#[derive(Debug, Clone)]
pub struct InlineModelConverter {
    view: ModelView,
}

impl InlineModelConverter {
    /// Creates a resolver for the given parent view.
    pub fn new(view: ModelView) -> Self {
        Self { view }
    }

    /// Normalizes any accepted shape to an [`InlineFormAdmin`].
    pub fn get_info(&self, spec: InlineSpec) -> InlineFormAdmin {
        match spec {
            InlineSpec::Model(model) => InlineFormAdmin::new(model),
            InlineSpec::Options(model, options) => {
                let mut info = InlineFormAdmin::new(model);
                info.form_columns = options.form_columns;
                info.form_excluded_columns = options.form_excluded_columns;
                info.form_args = options.form_args;
                info.form_label = options.form_label;
                info
            }
            InlineSpec::Admin(info) => info,
        }
    }

    /// Computes the display label for a nested-model field.
    ///
    /// Checks the settings object's explicit label, then the parent view's
    /// column-label map; `None` lets the caller fall back to its own
    /// default.
    pub fn get_label(&self, info: &InlineFormAdmin, name: &str) -> Option<String> {
        if let Some(label) = &info.form_label {
            return Some(label.clone());
        }
        self.view.column_labels.get(name).cloned()
    }
}
