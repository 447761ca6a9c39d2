//! Trait abstraction for message delivery to enable mocking in tests

use super::SendError;
use crate::state::ContactMessage;
use async_trait::async_trait;
use std::sync::Arc;

/// Delivers a validated contact message somewhere
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait MessageSender: Send + Sync {
    /// Send one message. Resolves once delivery succeeded or failed.
    async fn send(&self, message: &ContactMessage) -> Result<(), SendError>;
}

#[async_trait]
impl<T: MessageSender + ?Sized> MessageSender for Arc<T> {
    async fn send(&self, message: &ContactMessage) -> Result<(), SendError> {
        (**self).send(message).await
    }
}
