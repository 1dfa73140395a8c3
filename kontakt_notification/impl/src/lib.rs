use std::io::Write;

use anyhow::Context;
use colored::Colorize;
use kontakt_notification_contracts::{Notification, NotificationService};
use tracing::{info, warn};

/// Prints notifications to the terminal: successes to stdout, errors to
/// stderr.
#[derive(Debug, Clone, Copy)]
pub struct TerminalNotificationService {
    config: TerminalNotificationServiceConfig,
}

#[derive(Debug, Clone, Copy)]
pub struct TerminalNotificationServiceConfig {
    pub color: bool,
}

impl TerminalNotificationService {
    pub fn new(config: TerminalNotificationServiceConfig) -> Self {
        Self { config }
    }
}

impl NotificationService for TerminalNotificationService {
    fn show(&self, notification: Notification) -> anyhow::Result<()> {
        let line = render(&notification, self.config.color);
        match notification {
            Notification::Success(message) => {
                info!(text = %message, "success notification");
                writeln!(std::io::stdout().lock(), "{line}")
            }
            Notification::Error(message) => {
                warn!(text = %message, "error notification");
                writeln!(std::io::stderr().lock(), "{line}")
            }
        }
        .context("Failed to write notification to the terminal")
    }
}

/// Colors are dropped if the terminal does not support them, even with
/// `color` set.
fn render(notification: &Notification, color: bool) -> String {
    let symbol = match notification {
        Notification::Success(_) => "✔".green(),
        Notification::Error(_) => "✘".red(),
    };
    let symbol = if color { symbol } else { symbol.clear() };
    format!("{symbol} {}", notification.message())
}
