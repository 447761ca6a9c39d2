//! Local outbox: one JSON file per submitted message

use super::{MessageSender, SendError};
use crate::state::ContactMessage;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use uuid::Uuid;

/// What gets written to disk for each message
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutboxEnvelope {
    pub id: Uuid,
    pub received_at: DateTime<Utc>,
    pub message: ContactMessage,
}

impl OutboxEnvelope {
    pub fn new(message: ContactMessage) -> Self {
        Self {
            id: Uuid::new_v4(),
            received_at: Utc::now(),
            message,
        }
    }

    /// `<yyyymmddThhmmssZ>-<uuid>.json`, sortable by arrival
    pub fn file_name(&self) -> String {
        format!(
            "{}-{}.json",
            self.received_at.format("%Y%m%dT%H%M%SZ"),
            self.id
        )
    }
}

/// Writes messages into a directory instead of delivering them
#[derive(Debug, Clone)]
pub struct OutboxSender {
    dir: PathBuf,
}

impl OutboxSender {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Platform data directory + `outbox`
    pub fn default_dir() -> Option<PathBuf> {
        ProjectDirs::from("fr", "webcreator", "folio-contact")
            .map(|dirs| dirs.data_dir().join("outbox"))
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }
}

#[async_trait]
impl MessageSender for OutboxSender {
    async fn send(&self, message: &ContactMessage) -> Result<(), SendError> {
        let envelope = OutboxEnvelope::new(message.clone());
        let content = serde_json::to_string_pretty(&envelope)?;

        tokio::fs::create_dir_all(&self.dir).await?;
        let path = self.dir.join(envelope.file_name());
        tokio::fs::write(&path, content).await?;

        tracing::info!(id = %envelope.id, path = %path.display(), "Message written to outbox");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn message() -> ContactMessage {
        ContactMessage {
            name: "Ana".to_string(),
            email: "ana@x.com".to_string(),
            message: "Hello there, nice site!".to_string(),
        }
    }

    #[test]
    fn test_file_name_shape() {
        let envelope = OutboxEnvelope::new(message());
        let name = envelope.file_name();
        assert!(name.ends_with(&format!("-{}.json", envelope.id)));
        assert!(name.contains('T'));
    }

    #[test]
    fn test_default_dir_ends_with_outbox() {
        if let Some(dir) = OutboxSender::default_dir() {
            assert!(dir.ends_with("outbox"));
        }
    }

    #[tokio::test]
    async fn test_send_writes_one_json_file() {
        let tmp = tempfile::tempdir().unwrap();
        let sender = OutboxSender::new(tmp.path().join("nested").join("outbox"));

        sender.send(&message()).await.unwrap();

        let entries: Vec<_> = std::fs::read_dir(sender.dir())
            .unwrap()
            .map(|e| e.unwrap().path())
            .collect();
        assert_eq!(entries.len(), 1);

        let content = std::fs::read_to_string(&entries[0]).unwrap();
        let parsed: OutboxEnvelope = serde_json::from_str(&content).unwrap();
        assert_eq!(parsed.message, message());
    }

    #[tokio::test]
    async fn test_each_send_gets_its_own_file() {
        let tmp = tempfile::tempdir().unwrap();
        let sender = OutboxSender::new(tmp.path());

        sender.send(&message()).await.unwrap();
        sender.send(&message()).await.unwrap();

        assert_eq!(std::fs::read_dir(tmp.path()).unwrap().count(), 2);
    }

    #[tokio::test]
    async fn test_unwritable_dir_is_io_error() {
        let tmp = tempfile::tempdir().unwrap();
        let blocker = tmp.path().join("file");
        std::fs::write(&blocker, "not a dir").unwrap();

        let sender = OutboxSender::new(blocker.join("outbox"));
        let result = sender.send(&message()).await;
        assert!(matches!(result, Err(SendError::Io(_))));
    }
}
