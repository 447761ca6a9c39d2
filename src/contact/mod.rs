//! Contact form core: the controller and its notification collaborator

mod controller;
mod notify;

pub use controller::{Blocked, FormController, SubmissionStatus, SubmitOutcome};
pub use notify::{Notification, Notifier, Severity};
