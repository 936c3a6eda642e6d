use contact_form_models::form::{FieldErrors, FieldName, FieldValues, Submission};
use thiserror::Error;
use tracing::{debug, info, trace};

use crate::{
    validate::{validate_all, validate_field},
    FormEvent,
};

/// State of one contact form instance.
///
/// Field values are validated as they change and all together on submit. A
/// valid submit stores a [`Submission`] snapshot and empties the inputs; an
/// invalid one only updates the errors.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormModel {
    values: FieldValues,
    errors: FieldErrors,
    submission: Option<Submission>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum FormSubmitError {
    #[error("The form has {0} invalid field(s).")]
    Invalid(usize),
}

impl FormModel {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn values(&self) -> &FieldValues {
        &self.values
    }

    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    /// The snapshot of the most recent valid submit, if any.
    pub fn submission(&self) -> Option<&Submission> {
        self.submission.as_ref()
    }

    /// Stores a new value and re-validates only that field.
    pub fn set_field(&mut self, field: FieldName, value: impl Into<String>) {
        let value = value.into();
        let error = validate_field(field, &value);
        trace!(%field, len = value.chars().count(), ?error, "field changed");

        self.values.set(field, value);
        self.errors.set(field, error);
    }

    /// Validates all fields. On success the submission snapshot is replaced,
    /// the inputs are emptied and the errors cleared. On failure the errors
    /// are replaced by exactly the failing fields and the previous snapshot
    /// is kept.
    pub fn submit(&mut self) -> Result<&Submission, FormSubmitError> {
        match validate_all(&self.values) {
            Ok(submission) => {
                info!(has_message = submission.message.is_some(), "form submitted");
                self.values = FieldValues::default();
                self.errors = FieldErrors::default();
                Ok(self.submission.insert(submission))
            }
            Err(errors) => {
                let count = errors.len();
                debug!(invalid = count, "form submit rejected");
                self.errors = errors;
                Err(FormSubmitError::Invalid(count))
            }
        }
    }

    /// Applies a single event from the event binding layer.
    pub fn dispatch(&mut self, event: FormEvent) {
        match event {
            FormEvent::Change { field, value } => self.set_field(field, value),
            FormEvent::Type { field, text } => {
                let mut value = self.values.get(field).to_owned();
                for c in text.chars() {
                    value.push(c);
                    self.set_field(field, value.clone());
                }
            }
            FormEvent::Submit => {
                // rejected submits are reflected in the errors
                let _ = self.submit();
            }
        }
    }
}
