use contact_form_models::form::FieldName;
use serde::Deserialize;

/// A user interaction with the form, as delivered by the event binding layer.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum FormEvent {
    /// The input of `field` now holds `value`.
    Change { field: FieldName, value: String },
    /// `text` is typed into `field` one character at a time, appending to the
    /// current value.
    Type { field: FieldName, text: String },
    /// The submit button was clicked.
    Submit,
}
