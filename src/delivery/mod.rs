//! Delivery of submitted contact messages

mod error;
mod outbox;
mod simulated;
mod traits;

pub use error::SendError;
pub use outbox::OutboxSender;
pub use simulated::{SimulatedSender, DEFAULT_SEND_DELAY};
pub use traits::MessageSender;

#[cfg(test)]
pub use traits::MockMessageSender;
