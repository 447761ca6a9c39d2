//! Contact form controller: edits, validation and the submission lifecycle

use super::notify::{Notification, Notifier};
use crate::delivery::{MessageSender, SendError};
use crate::state::{ContactField, ContactForm, ContactMessage, ErrorMap};

/// Lifecycle of one submit attempt
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SubmissionStatus {
    #[default]
    Idle,
    Submitting,
    Succeeded,
    Failed,
}

impl SubmissionStatus {
    /// Whether a send is in flight
    pub fn is_busy(&self) -> bool {
        matches!(self, Self::Submitting)
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Idle => "Idle",
            Self::Submitting => "Sending...",
            Self::Succeeded => "Sent",
            Self::Failed => "Failed",
        }
    }
}

/// Why a submit did not start a send
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Blocked {
    /// Validation produced errors; they are now in the error map
    Invalid,
    /// A previous send has not settled yet
    InFlight,
}

/// Result of a complete submit attempt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    #[allow(dead_code)] // Only produced by the all-in-one submit
    Blocked(Blocked),
    Sent,
    Failed,
}

/// Owns the form record, its error map and submission status.
///
/// The controller is the only writer of all three; the renderer reads them
/// through the accessors.
pub struct FormController<S, N> {
    form: ContactForm,
    errors: ErrorMap,
    status: SubmissionStatus,
    sender: S,
    notifier: N,
}

impl<S, N: Notifier> FormController<S, N> {
    pub fn new(sender: S, notifier: N) -> Self {
        Self {
            form: ContactForm::new(),
            errors: ErrorMap::new(),
            status: SubmissionStatus::Idle,
            sender,
            notifier,
        }
    }

    pub fn form(&self) -> &ContactForm {
        &self.form
    }

    pub fn errors(&self) -> &ErrorMap {
        &self.errors
    }

    pub fn status(&self) -> SubmissionStatus {
        self.status
    }

    pub fn sender(&self) -> &S {
        &self.sender
    }

    pub fn notifier(&self) -> &N {
        &self.notifier
    }

    pub fn notifier_mut(&mut self) -> &mut N {
        &mut self.notifier
    }

    /// Overwrite a field and drop its error, if any, without re-validating
    pub fn edit(&mut self, field: ContactField, value: String) {
        self.form.set(field, value);
        if self.errors.remove(field).is_some() {
            tracing::debug!(%field, "Cleared field error on edit");
        }
        // A successful send cleared the form; typing again starts a new attempt
        if self.status == SubmissionStatus::Succeeded {
            self.status = SubmissionStatus::Idle;
        }
    }

    pub fn validate(&self) -> ErrorMap {
        self.form.validate()
    }

    /// Validate and enter `Submitting`, returning the snapshot to send.
    ///
    /// Must be followed by [`settle`](Self::settle) once the send finishes.
    pub fn begin_submit(&mut self) -> Result<ContactMessage, Blocked> {
        if self.status.is_busy() {
            tracing::debug!("Submit ignored, send already in flight");
            return Err(Blocked::InFlight);
        }

        let errors = self.validate();
        if !errors.is_empty() {
            tracing::debug!(count = errors.len(), "Submit rejected by validation");
            self.errors = errors;
            self.notifier.notify(Notification::validation_failed());
            return Err(Blocked::Invalid);
        }

        self.errors.clear();
        self.status = SubmissionStatus::Submitting;
        tracing::info!("Submitting contact message");
        Ok(self.form.snapshot())
    }

    /// Apply the result of the send started by [`begin_submit`](Self::begin_submit).
    ///
    /// Returns `None` when no send was in flight.
    pub fn settle(&mut self, result: Result<(), SendError>) -> Option<SubmitOutcome> {
        if !self.status.is_busy() {
            tracing::warn!("Ignoring send result with no submission in flight");
            return None;
        }

        match result {
            Ok(()) => {
                self.form.clear();
                self.errors.clear();
                self.status = SubmissionStatus::Succeeded;
                tracing::info!("Contact message sent");
                self.notifier.notify(Notification::sent());
                Some(SubmitOutcome::Sent)
            }
            Err(err) => {
                self.status = SubmissionStatus::Failed;
                tracing::warn!(error = %err, "Contact message send failed");
                self.notifier.notify(Notification::send_failed());
                Some(SubmitOutcome::Failed)
            }
        }
    }

    /// Placeholder handler for interactions that have no behavior yet
    pub fn notify_unimplemented(&mut self, feature: &str) {
        tracing::debug!(feature, "Unimplemented feature requested");
        self.notifier.notify(Notification::unimplemented(feature));
    }
}

impl<S: MessageSender, N: Notifier> FormController<S, N> {
    /// Validate, send and settle in one step
    #[allow(dead_code)]
    pub async fn submit(&mut self) -> SubmitOutcome {
        let message = match self.begin_submit() {
            Ok(message) => message,
            Err(blocked) => return SubmitOutcome::Blocked(blocked),
        };

        let result = self.sender.send(&message).await;
        self.settle(result).unwrap_or(SubmitOutcome::Failed)
    }
}
