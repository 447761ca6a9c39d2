//! Fixed-delay sender standing in for a real delivery service

use super::{MessageSender, SendError};
use crate::state::ContactMessage;
use async_trait::async_trait;
use std::time::Duration;

/// Default time a simulated send takes
pub const DEFAULT_SEND_DELAY: Duration = Duration::from_millis(1500);

/// Waits for a fixed delay, then reports success (or failure when `fail`
/// is set)
#[derive(Debug, Clone)]
pub struct SimulatedSender {
    delay: Duration,
    fail: bool,
}

impl SimulatedSender {
    pub fn new(delay: Duration) -> Self {
        Self { delay, fail: false }
    }

    /// A sender whose every attempt fails after the delay
    pub fn failing(delay: Duration) -> Self {
        Self { delay, fail: true }
    }
}

impl Default for SimulatedSender {
    fn default() -> Self {
        Self::new(DEFAULT_SEND_DELAY)
    }
}

#[async_trait]
impl MessageSender for SimulatedSender {
    async fn send(&self, message: &ContactMessage) -> Result<(), SendError> {
        tracing::debug!(delay_ms = self.delay.as_millis() as u64, "Simulating send");
        tokio::time::sleep(self.delay).await;

        if self.fail {
            return Err(SendError::Rejected(format!(
                "simulated failure for {}",
                message.email.trim()
            )));
        }
        Ok(())
    }
}
