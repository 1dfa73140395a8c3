use anyhow::{bail, Context};
use clap::Args;
use kontakt_config::Config;
use kontakt_core_form_contracts::{
    ContactForm, ContactFormService, ContactFormSubmitError, ValidationResult,
};
use kontakt_models::contact::ContactFormInput;
use tokio::io::AsyncReadExt;
use tracing::{debug, info};

use crate::environment;

#[derive(Debug, Args)]
pub struct SubmitCommand {
    /// Your name
    #[arg(long)]
    name: String,
    /// Your email address
    #[arg(long)]
    email: String,
    /// The message to send, read from stdin if omitted
    #[arg(long)]
    message: Option<String>,
    /// Value of the hidden anti-automation field
    #[arg(long, hide = true)]
    botcheck: bool,
    /// Only validate the input without sending it
    #[arg(long)]
    dry_run: bool,
}

impl SubmitCommand {
    pub async fn invoke(self, config: Config) -> anyhow::Result<()> {
        let message = match self.message {
            Some(message) => message,
            None => read_message().await?,
        };

        let mut form = ContactForm::new(ContactFormInput {
            name: self.name,
            email: self.email,
            message,
            botcheck: self.botcheck,
        });

        let service = environment::contact_form_service(&config)?;
        submit(&service, &mut form, self.dry_run).await
    }
}

/// Submit `form` and print per-field errors if it is rejected.
pub async fn submit(
    service: &impl ContactFormService,
    form: &mut ContactForm,
    dry_run: bool,
) -> anyhow::Result<()> {
    if dry_run {
        let errors = service.validate(&form.input);
        form.set_errors(errors);
        if !errors.is_acceptable() {
            eprint!("{}", render_errors(&errors));
            bail!("The form input is invalid");
        }
        info!("Form input is valid, not sending it (dry run)");
        return Ok(());
    }

    match service.submit(form).await {
        Ok(()) => Ok(()),
        Err(ContactFormSubmitError::Invalid(errors)) => {
            eprint!("{}", render_errors(&errors));
            bail!("The form input is invalid");
        }
        Err(err) => {
            debug!("Submission failed: {err:?}");
            Err(err).context("Failed to submit the contact form")
        }
    }
}

/// One line per invalid field: `<field>: <message>`.
pub fn render_errors(errors: &ValidationResult) -> String {
    errors
        .iter()
        .map(|(field, message)| format!("{field}: {message}\n"))
        .collect()
}

async fn read_message() -> anyhow::Result<String> {
    let mut message = String::new();
    tokio::io::stdin()
        .read_to_string(&mut message)
        .await
        .context("Failed to read message from stdin")?;

    let trimmed = message
        .strip_suffix("\r\n")
        .or_else(|| message.strip_suffix('\n'))
        .map(str::len);
    if let Some(len) = trimmed {
        message.truncate(len);
    }

    Ok(message)
}

#[cfg(test)]
mod tests {
    use kontakt_core_form_contracts::{EmailError, NameError};

    use super::*;

    #[test]
    fn render() {
        let errors = ValidationResult {
            name: Some(NameError::Required),
            email: Some(EmailError::InvalidFormat),
            message: None,
        };

        assert_eq!(
            render_errors(&errors),
            "name: Der Name darf nicht leer sein\nemail: Die E-Mail-Adresse ist ungültig\n"
        );
        assert_eq!(render_errors(&ValidationResult::default()), "");
    }
}
