//! Monitor configuration. Loaded from a JSON file; absent or malformed
//! files fall back to defaults.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MonitorConfig {
    /// Threat feed source
    pub feed: FeedConfig,
    /// Scoring model
    pub model: ModelConfig,
    /// Severity thresholds
    pub risk: RiskConfig,
    /// Logging
    pub log: LogConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FeedConfig {
    /// Local threat intel document
    pub path: PathBuf,
    /// Optional remote feed endpoint, tried before the local file
    pub url: Option<String>,
    /// Seconds between checks; 0 runs a single cycle
    pub interval_secs: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModelConfig {
    /// Trained weights document; the built-in weights are used when unset
    pub weights_path: Option<PathBuf>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RiskConfig {
    /// Score at or above this is high severity (0.0–1.0)
    pub high_threshold: f32,
    /// Score at or above this is medium severity
    pub medium_threshold: f32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogConfig {
    pub level: String,
    pub json: bool,
}

impl Default for MonitorConfig {
    fn default() -> Self {
        Self {
            feed: FeedConfig::default(),
            model: ModelConfig::default(),
            risk: RiskConfig::default(),
            log: LogConfig::default(),
        }
    }
}

impl Default for FeedConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from("threat_intel.json"),
            url: None,
            interval_secs: 60,
        }
    }
}

impl Default for ModelConfig {
    fn default() -> Self {
        Self { weights_path: None }
    }
}

impl Default for RiskConfig {
    fn default() -> Self {
        Self {
            high_threshold: 0.8,
            medium_threshold: 0.5,
        }
    }
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            json: true,
        }
    }
}

impl MonitorConfig {
    /// Load from JSON file if present; otherwise return default
    pub fn load(path: &std::path::Path) -> Self {
        if path.exists() {
            if let Ok(data) = std::fs::read_to_string(path) {
                if let Ok(c) = serde_json::from_str::<MonitorConfig>(&data) {
                    return c;
                }
            }
        }
        Self::default()
    }

    /// Per-user config location, e.g. `~/.config/threatwatch/config.json`
    pub fn default_path() -> PathBuf {
        dirs::config_dir()
            .map(|d| d.join("threatwatch").join("config.json"))
            .unwrap_or_else(|| PathBuf::from("config.json"))
    }
}
