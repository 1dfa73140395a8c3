/// Shows short-lived messages to the user, similar to a toast.
#[cfg_attr(feature = "mock", mockall::automock)]
pub trait NotificationService: Send + Sync + 'static {
    /// Emits the notification. Callers treat this as fire-and-forget and
    /// only log a returned error.
    fn show(&self, notification: Notification) -> anyhow::Result<()>;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notification {
    Success(String),
    Error(String),
}

impl Notification {
    pub fn message(&self) -> &str {
        match self {
            Self::Success(message) | Self::Error(message) => message,
        }
    }
}

#[cfg(feature = "mock")]
impl MockNotificationService {
    pub fn with_show(mut self, notification: Notification) -> Self {
        self.expect_show()
            .once()
            .with(mockall::predicate::eq(notification))
            .return_once(|_| Ok(()));
        self
    }

    pub fn with_show_failing(mut self, notification: Notification) -> Self {
        self.expect_show()
            .once()
            .with(mockall::predicate::eq(notification))
            .return_once(|_| Err(anyhow::anyhow!("notification backend unavailable")));
        self
    }
}
