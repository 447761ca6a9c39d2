//! Configuration handling for the contact form

use crate::delivery::{MessageSender, OutboxSender, SimulatedSender, DEFAULT_SEND_DELAY};
use anyhow::Result;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;

const DEFAULT_TOAST_DURATION_MS: u64 = 5000;

/// Which delivery collaborator to use
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SenderKind {
    #[default]
    Simulated,
    Outbox,
}

/// Contact details shown beside the form
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContactProfile {
    pub email: String,
    pub phone: String,
    pub location: String,
}

impl Default for ContactProfile {
    fn default() -> Self {
        Self {
            email: "contact@webcreator.fr".to_string(),
            phone: "+33 1 23 45 67 89".to_string(),
            location: "Paris, France".to_string(),
        }
    }
}

/// User configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct AppConfig {
    /// Delivery collaborator
    pub sender: Option<SenderKind>,
    /// Simulated send delay in milliseconds
    pub submit_delay_ms: Option<u64>,
    /// Make the simulated sender fail every attempt
    pub simulate_failure: Option<bool>,
    /// Directory for the outbox sender
    pub outbox_dir: Option<PathBuf>,
    /// How long a notification stays on screen, in milliseconds
    pub toast_duration_ms: Option<u64>,
    /// Contact details shown beside the form
    pub profile: Option<ContactProfile>,
}

impl AppConfig {
    /// Get the config file path
    fn config_path() -> Option<PathBuf> {
        ProjectDirs::from("fr", "webcreator", "folio-contact")
            .map(|dirs| dirs.config_dir().join("config.json"))
    }

    /// Directory for log output, if the platform has one
    pub fn log_dir() -> Option<PathBuf> {
        ProjectDirs::from("fr", "webcreator", "folio-contact")
            .map(|dirs| dirs.data_dir().to_path_buf())
    }

    /// Load configuration from the user config file
    pub fn load() -> Result<Self> {
        match Self::config_path() {
            Some(path) => Self::load_from(&path),
            None => Ok(Self::default()),
        }
    }

    /// Load configuration from `path`, falling back to defaults when the
    /// file does not exist
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)?;
        let config: AppConfig = serde_json::from_str(&content)?;
        tracing::info!(path = %path.display(), "Loaded config");
        Ok(config)
    }

    pub fn submit_delay(&self) -> Duration {
        self.submit_delay_ms
            .map(Duration::from_millis)
            .unwrap_or(DEFAULT_SEND_DELAY)
    }

    pub fn toast_duration(&self) -> Duration {
        Duration::from_millis(self.toast_duration_ms.unwrap_or(DEFAULT_TOAST_DURATION_MS))
    }

    pub fn profile(&self) -> ContactProfile {
        self.profile.clone().unwrap_or_default()
    }

    /// Build the configured delivery collaborator
    pub fn build_sender(&self) -> Result<Arc<dyn MessageSender>> {
        match self.sender.unwrap_or_default() {
            SenderKind::Simulated => {
                let delay = self.submit_delay();
                if self.simulate_failure.unwrap_or(false) {
                    Ok(Arc::new(SimulatedSender::failing(delay)))
                } else {
                    Ok(Arc::new(SimulatedSender::new(delay)))
                }
            }
            SenderKind::Outbox => {
                let dir = self
                    .outbox_dir
                    .clone()
                    .or_else(OutboxSender::default_dir)
                    .ok_or_else(|| anyhow::anyhow!("no outbox directory available"))?;
                let sender = OutboxSender::new(dir);
                tracing::info!(dir = %sender.dir().display(), "Delivering to outbox");
                Ok(Arc::new(sender))
            }
        }
    }
}
