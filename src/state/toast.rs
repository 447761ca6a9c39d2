//! On-screen notification queue

use crate::contact::{Notification, Notifier};
use std::collections::VecDeque;
use std::time::{Duration, Instant};

/// Oldest toasts are dropped beyond this many
const MAX_TOASTS: usize = 3;

/// A notification and when it was shown
#[derive(Debug, Clone)]
pub struct Toast {
    pub notification: Notification,
    pub shown_at: Instant,
}

impl Toast {
    pub fn is_expired(&self, ttl: Duration, now: Instant) -> bool {
        now.saturating_duration_since(self.shown_at) >= ttl
    }
}

/// Notifier that keeps recent notifications for the renderer
#[derive(Debug)]
pub struct ToastQueue {
    toasts: VecDeque<Toast>,
    ttl: Duration,
}

impl ToastQueue {
    pub fn new(ttl: Duration) -> Self {
        Self {
            toasts: VecDeque::new(),
            ttl,
        }
    }

    /// Drop toasts older than the configured lifetime
    pub fn prune(&mut self, now: Instant) {
        let ttl = self.ttl;
        self.toasts.retain(|t| !t.is_expired(ttl, now));
    }

    /// Dismiss the most recent toast
    pub fn dismiss(&mut self) -> Option<Toast> {
        self.toasts.pop_back()
    }

    #[cfg(test)]
    pub fn latest(&self) -> Option<&Toast> {
        self.toasts.back()
    }

    /// Newest first
    pub fn iter(&self) -> impl Iterator<Item = &Toast> {
        self.toasts.iter().rev()
    }

    #[cfg(test)]
    pub fn len(&self) -> usize {
        self.toasts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.toasts.is_empty()
    }
}

impl Notifier for ToastQueue {
    fn notify(&mut self, notification: Notification) {
        tracing::debug!(title = %notification.title, severity = ?notification.severity, "Toast");
        self.toasts.push_back(Toast {
            notification,
            shown_at: Instant::now(),
        });
        while self.toasts.len() > MAX_TOASTS {
            self.toasts.pop_front();
        }
    }
}
