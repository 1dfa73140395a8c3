use std::future::Future;

use kontakt_models::contact::{ContactFormInput, ContactSubmission};
use thiserror::Error;

pub use crate::{
    form::{ContactForm, Submitting},
    validation::{EmailError, FieldError, FormField, MessageError, NameError, ValidationResult},
};

mod form;
mod validation;

pub trait ContactFormService: Send + Sync + 'static {
    /// Check every field of `input` and collect at most one error per field.
    ///
    /// The input is acceptable iff [`ValidationResult::is_acceptable`].
    fn validate(&self, input: &ContactFormInput) -> ValidationResult;

    /// Same as [`validate`](Self::validate), but returns the validated
    /// submission if the input is acceptable.
    fn accept(&self, input: &ContactFormInput) -> Result<ContactSubmission, ValidationResult>;

    /// Validate the current input of `form` and forward it to the form
    /// submission API.
    ///
    /// The user is notified about the outcome. On success the input of the
    /// form is cleared, otherwise it is left untouched. The form is never
    /// left in the submitting state once this future completes or is
    /// dropped.
    fn submit(
        &self,
        form: &mut ContactForm,
    ) -> impl Future<Output = Result<(), ContactFormSubmitError>> + Send;
}

#[derive(Debug, Error)]
pub enum ContactFormSubmitError {
    #[error("A submission of this form is already in progress.")]
    Busy,
    #[error("The form input is invalid.")]
    Invalid(ValidationResult),
    #[error(transparent)]
    Submission(#[from] SubmissionError),
}

#[derive(Debug, Error)]
pub enum SubmissionError {
    #[error("The submission was rejected: {}", .message.as_deref().unwrap_or("no reason given"))]
    ApplicationRejected { message: Option<String> },
    #[error("Failed to reach the form submission API.")]
    NetworkFailure(#[source] anyhow::Error),
    #[error("The form submission API returned a malformed response.")]
    MalformedResponse(#[source] anyhow::Error),
}
