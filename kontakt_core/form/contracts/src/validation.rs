use std::fmt;

/// The kind of constraint a form field violates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldError {
    Required,
    TooShort,
    TooLong,
    InvalidFormat,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum FormField {
    Name,
    Email,
    Message,
}

impl FormField {
    pub const ALL: [Self; 3] = [Self::Name, Self::Email, Self::Message];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Email => "email",
            Self::Message => "message",
        }
    }
}

impl fmt::Display for FormField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

macro_rules! field_error {
    ($(#[$meta:meta])* $ident:ident { $($variant:ident => $message:literal),* $(,)? }) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum $ident {
            $($variant),*
        }

        impl $ident {
            /// The message shown next to the form field.
            pub const fn message(self) -> &'static str {
                match self {
                    $(Self::$variant => $message),*
                }
            }

            pub const fn kind(self) -> FieldError {
                match self {
                    $(Self::$variant => FieldError::$variant),*
                }
            }
        }

        impl fmt::Display for $ident {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.message())
            }
        }

        impl std::error::Error for $ident {}
    };
}

field_error!(NameError {
    Required => "Der Name darf nicht leer sein",
    TooShort => "Der Name muss mindestens 2 Zeichen lang sein",
    TooLong => "Der Name darf maximal 64 Zeichen lang sein",
});

field_error!(EmailError {
    Required => "Die E-Mail-Adresse darf nicht leer sein",
    TooLong => "Die E-Mail-Adresse darf nicht länger als 128 Zeichen sein",
    InvalidFormat => "Die E-Mail-Adresse ist ungültig",
});

field_error!(MessageError {
    Required => "Die Nachricht darf nicht leer sein",
    TooShort => "Die Nachricht muss mindestens 3 Zeichen lang sein",
    TooLong => "Die Nachricht darf maximal 4096 Zeichen lang sein",
});

/// Outcome of validating a contact form. A field without an error is valid.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct ValidationResult {
    pub name: Option<NameError>,
    pub email: Option<EmailError>,
    pub message: Option<MessageError>,
}

impl ValidationResult {
    pub fn is_acceptable(&self) -> bool {
        self.name.is_none() && self.email.is_none() && self.message.is_none()
    }

    pub fn get(&self, field: FormField) -> Option<FieldError> {
        match field {
            FormField::Name => self.name.map(NameError::kind),
            FormField::Email => self.email.map(EmailError::kind),
            FormField::Message => self.message.map(MessageError::kind),
        }
    }

    pub fn message(&self, field: FormField) -> Option<&'static str> {
        match field {
            FormField::Name => self.name.map(NameError::message),
            FormField::Email => self.email.map(EmailError::message),
            FormField::Message => self.message.map(MessageError::message),
        }
    }

    /// Iterates over the invalid fields and their messages in form order.
    pub fn iter(&self) -> impl Iterator<Item = (FormField, &'static str)> + '_ {
        FormField::ALL
            .into_iter()
            .filter_map(|field| Some((field, self.message(field)?)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_is_acceptable() {
        let result = ValidationResult::default();
        assert!(result.is_acceptable());
        assert_eq!(result.iter().count(), 0);
        for field in FormField::ALL {
            assert_eq!(result.get(field), None);
            assert_eq!(result.message(field), None);
        }
    }

    #[test]
    fn lookup() {
        // Arrange
        let result = ValidationResult {
            name: Some(NameError::TooShort),
            email: None,
            message: Some(MessageError::Required),
        };

        // Act
        let messages = result.iter().collect::<Vec<_>>();

        // Assert
        assert!(!result.is_acceptable());
        assert_eq!(result.get(FormField::Name), Some(FieldError::TooShort));
        assert_eq!(result.get(FormField::Email), None);
        assert_eq!(result.get(FormField::Message), Some(FieldError::Required));
        assert_eq!(
            messages,
            [
                (FormField::Name, "Der Name muss mindestens 2 Zeichen lang sein"),
                (FormField::Message, "Die Nachricht darf nicht leer sein"),
            ]
        );
    }

    #[test]
    fn error_display_is_message() {
        assert_eq!(
            EmailError::InvalidFormat.to_string(),
            "Die E-Mail-Adresse ist ungültig"
        );
        assert_eq!(EmailError::InvalidFormat.kind(), FieldError::InvalidFormat);
    }
}
