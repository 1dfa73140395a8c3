use std::ops::{Deref, DerefMut};

use kontakt_models::contact::ContactFormInput;

use crate::ValidationResult;

/// State of a single contact form instance.
///
/// The view edits [`input`](Self::input) and displays
/// [`errors`](Self::errors); while [`is_submitting`](Self::is_submitting)
/// is `true` the submit trigger must stay disabled.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactForm {
    pub input: ContactFormInput,
    errors: ValidationResult,
    submitting: bool,
}

impl ContactForm {
    pub fn new(input: ContactFormInput) -> Self {
        Self {
            input,
            ..Default::default()
        }
    }

    /// Field errors of the most recent submit attempt.
    pub fn errors(&self) -> &ValidationResult {
        &self.errors
    }

    pub fn set_errors(&mut self, errors: ValidationResult) {
        self.errors = errors;
    }

    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    /// Enter the submitting state.
    ///
    /// Returns `None` if a submission is already in progress. The state is
    /// left again when the returned guard is dropped.
    pub fn begin_submission(&mut self) -> Option<Submitting<'_>> {
        if self.submitting {
            return None;
        }
        self.submitting = true;
        Some(Submitting { form: self })
    }
}

/// Guard for a form in the submitting state. Resets the state on drop.
#[derive(Debug)]
pub struct Submitting<'a> {
    form: &'a mut ContactForm,
}

impl Deref for Submitting<'_> {
    type Target = ContactForm;

    fn deref(&self) -> &Self::Target {
        self.form
    }
}

impl DerefMut for Submitting<'_> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        self.form
    }
}

impl Drop for Submitting<'_> {
    fn drop(&mut self) {
        self.form.submitting = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_form_is_idle() {
        let form = ContactForm::default();
        assert!(!form.is_submitting());
        assert!(form.errors().is_acceptable());
    }

    #[test]
    fn begin_submission() {
        // Arrange
        let mut form = ContactForm::default();

        // Act
        let mut guard = form.begin_submission().unwrap();
        let submitting = guard.is_submitting();
        let nested = guard.begin_submission().is_none();
        drop(guard);

        // Assert
        assert!(submitting);
        assert!(nested);
        assert!(!form.is_submitting());
    }

    #[test]
    fn guard_resets_on_unwind() {
        let mut form = ContactForm::default();

        let result = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
            let _guard = form.begin_submission().unwrap();
            panic!("view went away");
        }));

        assert!(result.is_err());
        assert!(!form.is_submitting());
    }
}
