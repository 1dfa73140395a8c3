use kontakt_core_form_contracts::{EmailError, MessageError, NameError, ValidationResult};
use kontakt_models::{
    contact::{
        text_len, ContactFormInput, ContactMessageContent, ContactMessageContentError, ContactName,
        ContactNameError, ContactSubmission, CONTACT_EMAIL_MAX_LEN,
    },
    email_address::EmailAddress,
};

pub fn validate(input: &ContactFormInput) -> ValidationResult {
    accept(input).err().unwrap_or_default()
}

/// Each field is checked on its own and reports its first violated rule.
/// Emptiness is checked first. Lengths are counted in UTF-16 code units.
pub fn accept(input: &ContactFormInput) -> Result<ContactSubmission, ValidationResult> {
    match (
        check_name(&input.name),
        check_email(&input.email),
        check_message(&input.message),
    ) {
        (Ok(name), Ok(email), Ok(message)) => Ok(ContactSubmission {
            name,
            email,
            message,
            botcheck: input.botcheck,
        }),
        (name, email, message) => Err(ValidationResult {
            name: name.err(),
            email: email.err(),
            message: message.err(),
        }),
    }
}

fn check_name(value: &str) -> Result<ContactName, NameError> {
    if value.is_empty() {
        return Err(NameError::Required);
    }

    ContactName::try_new(value).map_err(|err| match err {
        ContactNameError::NotEmptyViolated => NameError::Required,
        ContactNameError::PredicateViolated if text_len(value) < ContactName::MIN_LEN => {
            NameError::TooShort
        }
        ContactNameError::PredicateViolated => NameError::TooLong,
    })
}

fn check_email(value: &str) -> Result<EmailAddress, EmailError> {
    if value.is_empty() {
        return Err(EmailError::Required);
    }

    let email = value
        .parse::<EmailAddress>()
        .map_err(|_| EmailError::InvalidFormat)?;

    if text_len(value) > CONTACT_EMAIL_MAX_LEN {
        return Err(EmailError::TooLong);
    }

    Ok(email)
}

fn check_message(value: &str) -> Result<ContactMessageContent, MessageError> {
    if value.is_empty() {
        return Err(MessageError::Required);
    }

    ContactMessageContent::try_new(value).map_err(|err| match err {
        ContactMessageContentError::NotEmptyViolated => MessageError::Required,
        ContactMessageContentError::PredicateViolated
            if text_len(value) < ContactMessageContent::MIN_LEN =>
        {
            MessageError::TooShort
        }
        ContactMessageContentError::PredicateViolated => MessageError::TooLong,
    })
}

#[cfg(test)]
mod tests {
    use kontakt_core_form_contracts::{FieldError, FormField};
    use pretty_assertions::assert_eq;

    use super::*;

    fn input(name: &str, email: &str, message: &str) -> ContactFormInput {
        ContactFormInput {
            name: name.into(),
            email: email.into(),
            message: message.into(),
            botcheck: false,
        }
    }

    /// An email address with exactly `len` characters.
    fn email_of_len(len: usize) -> String {
        let domain_len = len - "jo@".len() - ".de".len();
        let first = domain_len / 2;
        let second = domain_len - first - 1;
        format!("jo@{}.{}.de", "a".repeat(first), "b".repeat(second))
    }

    #[test]
    fn acceptable() {
        // Arrange
        let input = input("Jo", "jo@example.com", "Hi there");

        // Act
        let result = accept(&input);

        // Assert
        assert_eq!(
            result.unwrap(),
            ContactSubmission {
                name: "Jo".try_into().unwrap(),
                email: "jo@example.com".parse().unwrap(),
                message: "Hi there".try_into().unwrap(),
                botcheck: false,
            }
        );
        assert_eq!(validate(&input), ValidationResult::default());
        assert!(validate(&input).is_acceptable());
    }

    #[test]
    fn name_too_short() {
        let result = validate(&input("J", "jo@example.com", "Hi there"));

        assert_eq!(
            result,
            ValidationResult {
                name: Some(NameError::TooShort),
                ..Default::default()
            }
        );
        assert_eq!(
            result.message(FormField::Name),
            Some("Der Name muss mindestens 2 Zeichen lang sein")
        );
        assert!(!result.is_acceptable());
    }

    #[test]
    fn email_invalid_format() {
        let result = validate(&input("Jo", "not-an-email", "Hi there"));

        assert_eq!(result.email, Some(EmailError::InvalidFormat));
        assert_eq!(
            result.message(FormField::Email),
            Some("Die E-Mail-Adresse ist ungültig")
        );
        assert_eq!(result.iter().count(), 1);
    }

    #[test]
    fn empty_fields_report_required_only() {
        let result = validate(&ContactFormInput::default());

        assert_eq!(
            result,
            ValidationResult {
                name: Some(NameError::Required),
                email: Some(EmailError::Required),
                message: Some(MessageError::Required),
            }
        );
    }

    #[test]
    fn bounds() {
        let name_max = "n".repeat(ContactName::MAX_LEN);
        let message_max = "m".repeat(ContactMessageContent::MAX_LEN);
        let email_max = email_of_len(CONTACT_EMAIL_MAX_LEN);
        assert_eq!(text_len(&email_max), CONTACT_EMAIL_MAX_LEN);

        assert!(validate(&input(&name_max, &email_max, &message_max)).is_acceptable());
        assert!(validate(&input("Jo", "jo@example.com", "Hey")).is_acceptable());

        for (input, field, expected) in [
            (input("Jo", "jo@example.com", "Hi"), FormField::Message, FieldError::TooShort),
            (
                input(&format!("{name_max}n"), "jo@example.com", "Hey"),
                FormField::Name,
                FieldError::TooLong,
            ),
            (
                input("Jo", &email_of_len(CONTACT_EMAIL_MAX_LEN + 1), "Hey"),
                FormField::Email,
                FieldError::TooLong,
            ),
            (
                input("Jo", "jo@example.com", &format!("{message_max}m")),
                FormField::Message,
                FieldError::TooLong,
            ),
        ] {
            let result = validate(&input);
            assert_eq!(result.get(field), Some(expected), "{field}");
            assert_eq!(result.iter().count(), 1, "{field}");
        }
    }

    #[test]
    fn lengths_count_utf16_code_units() {
        assert!(validate(&input("Jö", "jo@example.com", "Süß")).is_acceptable());
        assert_eq!(
            validate(&input("ö", "jo@example.com", "Süß")).name,
            Some(NameError::TooShort)
        );
    }

    #[test]
    fn astral_plane_characters_count_twice() {
        let name_max = "😀".repeat(ContactName::MAX_LEN / 2);
        let message_max = "😀".repeat(ContactMessageContent::MAX_LEN / 2);

        assert!(validate(&input("😀", "jo@example.com", "😀x")).is_acceptable());
        assert!(validate(&input(&name_max, "jo@example.com", &message_max)).is_acceptable());

        assert_eq!(
            validate(&input("Jo", "jo@example.com", "😀")).message,
            Some(MessageError::TooShort)
        );
        assert_eq!(
            validate(&input(&format!("{name_max}x"), "jo@example.com", "Hey")).name,
            Some(NameError::TooLong)
        );
        assert_eq!(
            validate(&input("Jo", "jo@example.com", &format!("{message_max}x"))).message,
            Some(MessageError::TooLong)
        );
    }

    #[test]
    fn email_format_takes_precedence_over_length() {
        let email = "x".repeat(CONTACT_EMAIL_MAX_LEN + 1);

        let result = validate(&input("Jo", &email, "Hi there"));

        assert_eq!(result.email, Some(EmailError::InvalidFormat));
    }

    #[test]
    fn botcheck_is_not_validated() {
        let input = ContactFormInput {
            botcheck: true,
            ..input("Jo", "jo@example.com", "Hi there")
        };

        let submission = accept(&input).unwrap();

        assert!(submission.botcheck);
    }

    #[test]
    fn idempotent() {
        for input in [
            input("Jo", "jo@example.com", "Hi there"),
            input("J", "not-an-email", ""),
            ContactFormInput::default(),
        ] {
            assert_eq!(validate(&input), validate(&input));
        }
    }
}
