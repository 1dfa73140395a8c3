use nutype::nutype;
use serde::{Deserialize, Serialize};

use crate::email_address::EmailAddress;

/// The raw values of a contact form, exactly as entered by the user.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactFormInput {
    pub name: String,
    pub email: String,
    pub message: String,
    /// Hidden anti-automation field, expected to stay unset.
    #[serde(default)]
    pub botcheck: bool,
}

impl ContactFormInput {
    /// Resets every field to its empty default, including `botcheck`.
    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

/// A contact form submission whose fields have passed validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactSubmission {
    pub name: ContactName,
    pub email: EmailAddress,
    pub message: ContactMessageContent,
    pub botcheck: bool,
}

/// Length of `text` in UTF-16 code units, which is what browsers report as
/// the length of a form value.
pub fn text_len(text: &str) -> usize {
    text.encode_utf16().count()
}

#[nutype(
    validate(
        not_empty,
        predicate = |x| (ContactName::MIN_LEN..=ContactName::MAX_LEN).contains(&text_len(x))
    ),
    derive(Debug, Clone, PartialEq, Eq, TryFrom, Deref, Serialize, Deserialize)
)]
pub struct ContactName(String);

impl ContactName {
    pub const MIN_LEN: usize = 2;
    pub const MAX_LEN: usize = 64;
}

#[nutype(
    validate(
        not_empty,
        predicate = |x| (ContactMessageContent::MIN_LEN..=ContactMessageContent::MAX_LEN)
            .contains(&text_len(x))
    ),
    derive(Debug, Clone, PartialEq, Eq, TryFrom, Deref, Serialize, Deserialize)
)]
pub struct ContactMessageContent(String);

impl ContactMessageContent {
    pub const MIN_LEN: usize = 3;
    pub const MAX_LEN: usize = 4096;
}

/// Maximum length of a contact email address, see [`text_len`].
pub const CONTACT_EMAIL_MAX_LEN: usize = 128;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clear() {
        // Arrange
        let mut input = ContactFormInput {
            name: "Jo".into(),
            email: "jo@example.com".into(),
            message: "Hi there".into(),
            botcheck: true,
        };

        // Act
        input.clear();

        // Assert
        assert_eq!(input, ContactFormInput::default());
        assert!(!input.botcheck);
    }

    #[test]
    fn deserialize_without_botcheck() {
        let input = serde_json::from_str::<ContactFormInput>(
            r#"{"name":"Jo","email":"jo@example.com","message":"Hi there"}"#,
        )
        .unwrap();
        assert!(!input.botcheck);
    }

    #[test]
    fn text_len_counts_utf16_code_units() {
        assert_eq!(text_len(""), 0);
        assert_eq!(text_len("Jo"), 2);
        assert_eq!(text_len("Jö"), 2);
        assert_eq!(text_len("😀"), 2);
        assert_eq!(text_len("a😀b"), 4);
    }

    #[test]
    fn name_bounds() {
        assert!(ContactName::try_new("Jö").is_ok());
        assert!(ContactName::try_new("J").is_err());
        assert!(ContactName::try_new("😀").is_ok());
        assert!(ContactName::try_new("ä".repeat(ContactName::MAX_LEN)).is_ok());
        assert!(ContactName::try_new("ä".repeat(ContactName::MAX_LEN + 1)).is_err());
        assert!(ContactName::try_new("😀".repeat(ContactName::MAX_LEN / 2)).is_ok());
        assert!(ContactName::try_new(format!("{}x", "😀".repeat(ContactName::MAX_LEN / 2))).is_err());
    }

    #[test]
    fn message_bounds() {
        assert!(ContactMessageContent::try_new("Hi!").is_ok());
        assert!(ContactMessageContent::try_new("Hi").is_err());
        assert!(ContactMessageContent::try_new("x".repeat(ContactMessageContent::MAX_LEN)).is_ok());
        assert!(
            ContactMessageContent::try_new("x".repeat(ContactMessageContent::MAX_LEN + 1)).is_err()
        );
        assert!(ContactMessageContent::try_new("😀x").is_ok());
        assert!(ContactMessageContent::try_new("😀".repeat(ContactMessageContent::MAX_LEN / 2)).is_ok());
        assert!(
            ContactMessageContent::try_new("😀".repeat(ContactMessageContent::MAX_LEN / 2 + 1)).is_err()
        );
    }
}
