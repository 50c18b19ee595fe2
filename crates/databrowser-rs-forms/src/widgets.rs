//! Widget types for generated form fields.
//!
//! The HTML rendering library owns widget markup; the scaffolding layer
//! only records *which* widget a field should render with. Each variant
//! corresponds to a distinct form control.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Enumerates the widget types the rendering layer dispatches on.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum WidgetType {
    /// `<input type="text">`.
    TextInput,
    /// `<input type="number">`.
    NumberInput,
    /// `<textarea>`.
    Textarea,
    /// `<input type="checkbox">`.
    CheckboxInput,
    /// `<input type="hidden">`.
    HiddenInput,
    /// A calendar date picker.
    DatePicker,
    /// A combined date and time picker.
    DateTimePicker,
    /// `<input type="time">`.
    TimeInput,
    /// An enhanced select box.
    Select2 {
        /// Whether multiple options may be selected.
        multiple: bool,
    },
    /// A free-entry tag list backed by an enhanced select box.
    Select2Tags,
}

impl fmt::Display for WidgetType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::TextInput => "TextInput",
            Self::NumberInput => "NumberInput",
            Self::Textarea => "Textarea",
            Self::CheckboxInput => "CheckboxInput",
            Self::HiddenInput => "HiddenInput",
            Self::DatePicker => "DatePicker",
            Self::DateTimePicker => "DateTimePicker",
            Self::TimeInput => "TimeInput",
            Self::Select2 { multiple: false } => "Select2",
            Self::Select2 { multiple: true } => "Select2Multiple",
            Self::Select2Tags => "Select2Tags",
        };
        write!(f, "{name}")
    }
}
