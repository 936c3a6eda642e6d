//! Pure validation rules of the contact form.

use contact_form_models::{
    email_address::EmailAddress,
    form::{
        ContactMessage, FieldErrors, FieldName, FieldValues, FirstName, LastName, Submission,
        ValidationError,
    },
};

/// Validates the value of a single field. The message never fails.
pub fn validate_field(field: FieldName, value: &str) -> Option<ValidationError> {
    match field {
        FieldName::FirstName => first_name(value).err(),
        FieldName::LastName => last_name(value).err(),
        FieldName::Email => email(value).err(),
        FieldName::Message => None,
    }
}

/// Validates all fields at once, producing either the submission snapshot
/// or the errors of every failing field.
pub fn validate_all(values: &FieldValues) -> Result<Submission, FieldErrors> {
    match (
        first_name(&values.first_name),
        last_name(&values.last_name),
        email(&values.email),
    ) {
        (Ok(first_name), Ok(last_name), Ok(email)) => Ok(Submission {
            first_name,
            last_name,
            email,
            message: ContactMessage::try_new(values.message.clone()).ok(),
        }),
        (first_name, last_name, email) => Err([first_name.err(), last_name.err(), email.err()]
            .into_iter()
            .flatten()
            .collect()),
    }
}

fn first_name(value: &str) -> Result<FirstName, ValidationError> {
    FirstName::try_new(value.to_owned()).map_err(|_| ValidationError::FirstNameTooShort)
}

fn last_name(value: &str) -> Result<LastName, ValidationError> {
    LastName::try_new(value.to_owned()).map_err(|_| ValidationError::LastNameRequired)
}

fn email(value: &str) -> Result<EmailAddress, ValidationError> {
    if value.is_empty() {
        return Err(ValidationError::EmailRequired);
    }
    value.parse().map_err(|_| ValidationError::EmailInvalid)
}

#[cfg(test)]
mod tests {
    use contact_form_utils::assert_matches;
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn first_name_rule() {
        for (input, expected) in [
            ("", Some(ValidationError::FirstNameTooShort)),
            ("L", Some(ValidationError::FirstNameTooShort)),
            ("four", Some(ValidationError::FirstNameTooShort)),
            ("fives", None),
            ("éééé", Some(ValidationError::FirstNameTooShort)),
            ("ééééé", None),
            ("onetwothreefourfive", None),
        ] {
            assert_eq!(validate_field(FieldName::FirstName, input), expected, "{input:?}");
        }
    }

    #[test]
    fn last_name_rule() {
        assert_eq!(
            validate_field(FieldName::LastName, ""),
            Some(ValidationError::LastNameRequired)
        );
        assert_eq!(validate_field(FieldName::LastName, "X"), None);
    }

    #[test]
    fn email_rule() {
        for (input, expected) in [
            ("", Some(ValidationError::EmailRequired)),
            ("notavalidemailaddress", Some(ValidationError::EmailInvalid)),
            ("max@", Some(ValidationError::EmailInvalid)),
            ("nonvalid@email.adrs", None),
            ("max.mustermann@example.de", None),
        ] {
            assert_eq!(validate_field(FieldName::Email, input), expected, "{input:?}");
        }
    }

    #[test]
    fn message_never_fails() {
        assert_eq!(validate_field(FieldName::Message, ""), None);
        assert_eq!(validate_field(FieldName::Message, "message!"), None);
    }

    #[test]
    fn all_empty() {
        // Act
        let result = validate_all(&FieldValues::default());

        // Assert
        let errors = result.unwrap_err();
        assert_eq!(
            errors.iter().collect::<Vec<_>>(),
            [
                (FieldName::FirstName, ValidationError::FirstNameTooShort),
                (FieldName::LastName, ValidationError::LastNameRequired),
                (FieldName::Email, ValidationError::EmailRequired),
            ]
        );
    }

    #[test]
    fn only_email_missing() {
        // Arrange
        let values = FieldValues {
            first_name: "onetwothreefourfive".into(),
            last_name: "onetwothreefourfive".into(),
            ..Default::default()
        };

        // Act
        let result = validate_all(&values);

        // Assert
        assert_matches!(result, Err(errors) if errors.len() == 1
            && errors.get(FieldName::Email) == Some(ValidationError::EmailRequired));
    }

    #[test]
    fn valid_without_message() {
        // Arrange
        let values = FieldValues {
            first_name: "onetwothreefourfive".into(),
            last_name: "onetwothreefourfive".into(),
            email: "nonvalid@email.adrs".into(),
            message: String::new(),
        };

        // Act
        let result = validate_all(&values);

        // Assert
        assert_eq!(
            result.unwrap(),
            Submission {
                first_name: "onetwothreefourfive".try_into().unwrap(),
                last_name: "onetwothreefourfive".try_into().unwrap(),
                email: "nonvalid@email.adrs".parse().unwrap(),
                message: None,
            }
        );
    }

    #[test]
    fn valid_with_message() {
        // Arrange
        let values = FieldValues {
            first_name: "onetwothreefourfive".into(),
            last_name: "onetwothreefourfive".into(),
            email: "nonvalid@email.adrs".into(),
            message: "message!".into(),
        };

        // Act
        let result = validate_all(&values);

        // Assert
        assert_eq!(
            result.unwrap().message,
            Some("message!".try_into().unwrap())
        );
    }
}
