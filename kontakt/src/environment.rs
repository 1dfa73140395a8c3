use kontakt_config::Config;
use kontakt_core_form_impl::{ContactFormServiceConfig, ContactFormServiceImpl};
use kontakt_extern_impl::{
    http::HttpClient,
    web3forms::{Web3FormsApiServiceConfig, Web3FormsApiServiceImpl},
};
use kontakt_notification_impl::{TerminalNotificationService, TerminalNotificationServiceConfig};

pub type ContactFormService =
    ContactFormServiceImpl<Web3FormsApiServiceImpl, TerminalNotificationService>;

/// Wire up the contact form service from the loaded configuration.
pub fn contact_form_service(config: &Config) -> anyhow::Result<ContactFormService> {
    let http = HttpClient::new(*config.web3forms.timeout)?;

    let web3forms = Web3FormsApiServiceImpl::new(
        Web3FormsApiServiceConfig::new(
            config.web3forms.access_key.as_str(),
            config.web3forms.endpoint_override.clone(),
        ),
        http,
    );

    let notifications = TerminalNotificationService::new(TerminalNotificationServiceConfig {
        color: config.notification.color,
    });

    Ok(ContactFormServiceImpl::new(
        web3forms,
        notifications,
        ContactFormServiceConfig {
            subject_prefix: config.contact.subject_prefix.as_str().into(),
        },
    ))
}
