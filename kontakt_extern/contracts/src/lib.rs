use std::future::Future;

use kontakt_models::contact::ContactSubmission;
use thiserror::Error;

/// Client of the hosted form-processing API which forwards contact form
/// submissions.
#[cfg_attr(feature = "mock", mockall::automock)]
pub trait FormSubmissionApiService: Send + Sync + 'static {
    /// Send a submission to the external API.
    ///
    /// An `Ok` response may still report `success: false` if the API
    /// rejected the submission.
    fn submit(
        &self,
        request: FormSubmissionRequest,
    ) -> impl Future<Output = Result<FormSubmissionResponse, FormSubmissionError>> + Send;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormSubmissionRequest {
    pub subject: String,
    pub submission: ContactSubmission,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormSubmissionResponse {
    pub success: bool,
    /// Human readable status message, if the API sent one.
    pub message: Option<String>,
}

#[derive(Debug, Error)]
pub enum FormSubmissionError {
    /// The request could not be sent or the response could not be received,
    /// including timeouts.
    #[error("Failed to reach the form submission API.")]
    Network(#[source] anyhow::Error),
    /// The API responded with something other than the expected JSON object.
    #[error("The form submission API returned a malformed response.")]
    MalformedResponse(#[source] anyhow::Error),
}

#[cfg(feature = "mock")]
impl MockFormSubmissionApiService {
    pub fn with_submit(
        mut self,
        request: FormSubmissionRequest,
        result: Result<FormSubmissionResponse, FormSubmissionError>,
    ) -> Self {
        self.expect_submit()
            .once()
            .with(mockall::predicate::eq(request))
            .return_once(|_| Box::pin(std::future::ready(result)));
        self
    }

    /// Expect a single call whose response never arrives.
    pub fn with_submit_pending(mut self, request: FormSubmissionRequest) -> Self {
        self.expect_submit()
            .once()
            .with(mockall::predicate::eq(request))
            .return_once(|_| Box::pin(std::future::pending()));
        self
    }
}
