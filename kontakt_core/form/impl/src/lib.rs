use std::sync::Arc;

use kontakt_core_form_contracts::{
    ContactForm, ContactFormService, ContactFormSubmitError, SubmissionError, ValidationResult,
};
use kontakt_extern_contracts::{
    FormSubmissionApiService, FormSubmissionError, FormSubmissionRequest, FormSubmissionResponse,
};
use kontakt_models::contact::{ContactFormInput, ContactName, ContactSubmission};
use kontakt_notification_contracts::{Notification, NotificationService};
use tracing::{debug, instrument, warn};

mod validation;

pub const SUCCESS_MESSAGE: &str = "Nachricht erfolgreich versendet.";
pub const ERROR_MESSAGE: &str = "Es ist ein Fehler aufgetreten.";

#[derive(Debug, Clone)]
pub struct ContactFormServiceImpl<FormSubmissionApi, Notifications> {
    form_submission_api: FormSubmissionApi,
    notifications: Notifications,
    config: ContactFormServiceConfig,
}

#[derive(Debug, Clone)]
pub struct ContactFormServiceConfig {
    pub subject_prefix: Arc<str>,
}

impl ContactFormServiceConfig {
    fn subject(&self, name: &ContactName) -> String {
        format!("{} - {}", self.subject_prefix, **name)
    }
}

impl<FormSubmissionApi, Notifications> ContactFormServiceImpl<FormSubmissionApi, Notifications> {
    pub fn new(
        form_submission_api: FormSubmissionApi,
        notifications: Notifications,
        config: ContactFormServiceConfig,
    ) -> Self {
        Self {
            form_submission_api,
            notifications,
            config,
        }
    }
}

impl<FormSubmissionApi, Notifications> ContactFormService
    for ContactFormServiceImpl<FormSubmissionApi, Notifications>
where
    FormSubmissionApi: FormSubmissionApiService,
    Notifications: NotificationService,
{
    fn validate(&self, input: &ContactFormInput) -> ValidationResult {
        validation::validate(input)
    }

    fn accept(&self, input: &ContactFormInput) -> Result<ContactSubmission, ValidationResult> {
        validation::accept(input)
    }

    #[instrument(skip_all)]
    async fn submit(&self, form: &mut ContactForm) -> Result<(), ContactFormSubmitError> {
        if form.is_submitting() {
            return Err(ContactFormSubmitError::Busy);
        }

        let submission = match validation::accept(&form.input) {
            Ok(submission) => submission,
            Err(errors) => {
                debug!(?errors, "rejecting invalid form input");
                form.set_errors(errors);
                return Err(ContactFormSubmitError::Invalid(errors));
            }
        };
        form.set_errors(ValidationResult::default());

        let mut form = form
            .begin_submission()
            .ok_or(ContactFormSubmitError::Busy)?;

        let request = FormSubmissionRequest {
            subject: self.config.subject(&submission.name),
            submission,
        };
        let settlement = Settlement::from(self.form_submission_api.submit(request).await);
        debug!(?settlement, "submission settled");

        self.notify(settlement.notification());

        match settlement {
            Settlement::Success => {
                form.input.clear();
                Ok(())
            }
            Settlement::ApplicationFailure { message } => {
                Err(SubmissionError::ApplicationRejected { message }.into())
            }
            Settlement::TransportFailure(FormSubmissionError::Network(err)) => {
                Err(SubmissionError::NetworkFailure(err).into())
            }
            Settlement::TransportFailure(FormSubmissionError::MalformedResponse(err)) => {
                Err(SubmissionError::MalformedResponse(err).into())
            }
        }
    }
}

impl<FormSubmissionApi, Notifications> ContactFormServiceImpl<FormSubmissionApi, Notifications>
where
    Notifications: NotificationService,
{
    fn notify(&self, notification: Notification) {
        if let Err(err) = self.notifications.show(notification) {
            warn!("Failed to show notification: {err:#}");
        }
    }
}

/// How a call to the form submission API ended.
#[derive(Debug)]
enum Settlement {
    Success,
    ApplicationFailure { message: Option<String> },
    TransportFailure(FormSubmissionError),
}

impl From<Result<FormSubmissionResponse, FormSubmissionError>> for Settlement {
    fn from(value: Result<FormSubmissionResponse, FormSubmissionError>) -> Self {
        match value {
            Ok(FormSubmissionResponse { success: true, .. }) => Self::Success,
            Ok(FormSubmissionResponse {
                success: false,
                message,
            }) => Self::ApplicationFailure { message },
            Err(err) => Self::TransportFailure(err),
        }
    }
}

impl Settlement {
    fn notification(&self) -> Notification {
        match self {
            Self::Success => Notification::Success(SUCCESS_MESSAGE.into()),
            Self::ApplicationFailure { .. } | Self::TransportFailure(_) => {
                Notification::Error(ERROR_MESSAGE.into())
            }
        }
    }
}
