//! Notification collaborator used by the form controller

/// How a notification should be presented
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Info,
    Success,
    Error,
}

/// A fire-and-forget message for the user
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub title: String,
    pub message: String,
    pub severity: Severity,
}

impl Notification {
    pub fn new(title: impl Into<String>, message: impl Into<String>, severity: Severity) -> Self {
        Self {
            title: title.into(),
            message: message.into(),
            severity,
        }
    }

    /// Aggregate notice for a submit blocked by field errors
    pub fn validation_failed() -> Self {
        Self::new(
            "Validation error",
            "Correct the highlighted fields",
            Severity::Error,
        )
    }

    pub fn sent() -> Self {
        Self::new(
            "Message sent",
            "Thanks! I'll get back to you as soon as possible.",
            Severity::Success,
        )
    }

    pub fn send_failed() -> Self {
        Self::new(
            "Send failed",
            "Your message could not be sent. Please try again.",
            Severity::Error,
        )
    }

    /// Placeholder for interactive elements that have no behavior yet
    pub fn unimplemented(feature: &str) -> Self {
        Self::new(
            feature,
            "🚧 This feature isn't implemented yet, but you can ask for it in your next request! 🚀",
            Severity::Info,
        )
    }
}

/// Receives notifications emitted by the controller
#[cfg_attr(test, mockall::automock)]
pub trait Notifier {
    fn notify(&mut self, notification: Notification);
}
