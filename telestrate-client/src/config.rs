//! Client Configuration
//!
//! Configuration management for the telestrate client.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

/// Client configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Participant configuration
    pub participant: ParticipantConfig,

    /// Synchronization tuning
    pub sync: SyncConfig,

    /// Storage paths
    pub paths: PathConfig,
}

/// Participant configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ParticipantConfig {
    /// Display name shown to other participants
    pub name: String,

    /// Participant identity (auto-generated if not set)
    #[serde(default)]
    pub participant_id: Option<String>,
}

/// Synchronization tuning
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SyncConfig {
    /// Minimum milliseconds between outbound stroke updates
    #[serde(default = "default_update_interval_ms")]
    pub update_interval_ms: u64,

    /// How long a late joiner waits for a state snapshot, in milliseconds
    #[serde(default = "default_snapshot_wait_ms")]
    pub snapshot_wait_ms: u64,
}

/// Storage paths configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PathConfig {
    /// Configuration directory
    pub config_dir: PathBuf,
}

fn default_update_interval_ms() -> u64 {
    16
}

fn default_snapshot_wait_ms() -> u64 {
    3000
}

impl Default for SyncConfig {
    fn default() -> Self {
        Self {
            update_interval_ms: default_update_interval_ms(),
            snapshot_wait_ms: default_snapshot_wait_ms(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        let config_dir = dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from(".config"))
            .join("telestrate");

        Self {
            participant: ParticipantConfig {
                name: hostname::get()
                    .ok()
                    .and_then(|h| h.into_string().ok())
                    .unwrap_or_else(|| "Unknown Participant".to_string()),
                participant_id: None,
            },
            sync: SyncConfig::default(),
            paths: PathConfig { config_dir },
        }
    }
}

impl Config {
    /// Load configuration from file, creating default if not found
    pub fn load() -> Result<Self> {
        let config_dir = dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from(".config"))
            .join("telestrate");

        Self::load_from(config_dir.join("client.toml"))
    }

    /// Load configuration from a specific path
    pub fn load_from(config_path: PathBuf) -> Result<Self> {
        if config_path.exists() {
            let contents = fs::read_to_string(&config_path)
                .context("Failed to read config file")?;
            let config: Config = toml::from_str(&contents)
                .context("Failed to parse config file")?;
            Ok(config)
        } else {
            let config = Config::default();
            config.save()?;
            Ok(config)
        }
    }

    /// Save configuration to file
    pub fn save(&self) -> Result<()> {
        fs::create_dir_all(&self.paths.config_dir)
            .context("Failed to create config directory")?;

        let config_path = self.paths.config_dir.join("client.toml");
        let contents = toml::to_string_pretty(self)
            .context("Failed to serialize config")?;

        fs::write(&config_path, contents)
            .context("Failed to write config file")?;

        Ok(())
    }

    /// The participant identity, generating one if not configured
    pub fn participant_id(&self) -> String {
        self.participant
            .participant_id
            .clone()
            .unwrap_or_else(|| uuid::Uuid::new_v4().to_string())
    }
}
