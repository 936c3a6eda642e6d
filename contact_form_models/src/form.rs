use std::collections::BTreeMap;

use serde::Deserialize;
use thiserror::Error;

use crate::{email_address::EmailAddress, macros::nutype_string};

/// One of the four inputs of the contact form, in rendering order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FieldName {
    FirstName,
    LastName,
    Email,
    Message,
}

impl FieldName {
    pub const ALL: [Self; 4] = [Self::FirstName, Self::LastName, Self::Email, Self::Message];

    /// The name used for input ids, event payloads and validation messages.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::FirstName => "firstName",
            Self::LastName => "lastName",
            Self::Email => "email",
            Self::Message => "message",
        }
    }

    /// The human readable label shown next to the input and in the
    /// confirmation display.
    pub fn label(self) -> &'static str {
        match self {
            Self::FirstName => "First Name",
            Self::LastName => "Last Name",
            Self::Email => "Email",
            Self::Message => "Message",
        }
    }

    pub fn is_required(self) -> bool {
        !matches!(self, Self::Message)
    }
}

impl std::fmt::Display for FieldName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.as_str().fmt(f)
    }
}

/// The raw, unvalidated contents of the form inputs.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldValues {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub message: String,
}

impl FieldValues {
    pub fn get(&self, field: FieldName) -> &str {
        match field {
            FieldName::FirstName => &self.first_name,
            FieldName::LastName => &self.last_name,
            FieldName::Email => &self.email,
            FieldName::Message => &self.message,
        }
    }

    pub fn set(&mut self, field: FieldName, value: String) {
        let slot = match field {
            FieldName::FirstName => &mut self.first_name,
            FieldName::LastName => &mut self.last_name,
            FieldName::Email => &mut self.email,
            FieldName::Message => &mut self.message,
        };
        *slot = value;
    }
}

nutype_string!(FirstName(validate(len_char_min = FirstName::MIN_LENGTH)));
impl FirstName {
    pub const MIN_LENGTH: usize = 5;
}

nutype_string!(LastName(validate(not_empty)));

nutype_string!(ContactMessage(validate(not_empty)));

/// Why the current value of a required field is rejected. The `Display`
/// output is the message shown next to the input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
pub enum ValidationError {
    #[error("firstName must have at least {} characters", FirstName::MIN_LENGTH)]
    FirstNameTooShort,
    #[error("lastName is a required field")]
    LastNameRequired,
    #[error("email is a required field")]
    EmailRequired,
    #[error("email must be a valid email address")]
    EmailInvalid,
}

impl ValidationError {
    pub fn field(self) -> FieldName {
        match self {
            Self::FirstNameTooShort => FieldName::FirstName,
            Self::LastNameRequired => FieldName::LastName,
            Self::EmailRequired | Self::EmailInvalid => FieldName::Email,
        }
    }
}

/// The validation errors of all currently invalid fields, at most one per
/// field, iterated in field order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors(BTreeMap<FieldName, ValidationError>);

impl FieldErrors {
    pub fn get(&self, field: FieldName) -> Option<ValidationError> {
        self.0.get(&field).copied()
    }

    /// Records the outcome of validating `field`, touching no other key.
    pub fn set(&mut self, field: FieldName, error: Option<ValidationError>) {
        match error {
            Some(error) => {
                self.0.insert(field, error);
            }
            None => {
                self.0.remove(&field);
            }
        }
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (FieldName, ValidationError)> + '_ {
        self.0.iter().map(|(&field, &error)| (field, error))
    }
}

impl FromIterator<ValidationError> for FieldErrors {
    fn from_iter<I: IntoIterator<Item = ValidationError>>(iter: I) -> Self {
        Self(iter.into_iter().map(|error| (error.field(), error)).collect())
    }
}

/// Snapshot of the form taken when it was submitted with valid values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Submission {
    pub first_name: FirstName,
    pub last_name: LastName,
    pub email: EmailAddress,
    pub message: Option<ContactMessage>,
}

impl Submission {
    /// The submitted values as `(field, value)` pairs in field order. The
    /// message is only included if one was entered.
    pub fn entries(&self) -> Vec<(FieldName, &str)> {
        let mut entries = vec![
            (FieldName::FirstName, self.first_name.as_str()),
            (FieldName::LastName, self.last_name.as_str()),
            (FieldName::Email, self.email.as_str()),
        ];
        if let Some(message) = &self.message {
            entries.push((FieldName::Message, message.as_str()));
        }
        entries
    }
}
