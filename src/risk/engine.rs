//! Maps threat scores to severity levels via inclusive lower-bound
//! thresholds; each severity carries a fixed recommended action.

use crate::config::RiskConfig;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Severity {
    Low,
    Medium,
    High,
}

impl Severity {
    pub fn from_score(score: f32, config: &RiskConfig) -> Self {
        if score >= config.high_threshold {
            Severity::High
        } else if score >= config.medium_threshold {
            Severity::Medium
        } else {
            Severity::Low
        }
    }

    pub fn recommended_action(self) -> &'static str {
        match self {
            Severity::High => "Block and investigate immediately",
            Severity::Medium => "Monitor closely and investigate",
            Severity::Low => "Log for future reference",
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Severity::Low => "LOW",
            Severity::Medium => "MEDIUM",
            Severity::High => "HIGH",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Pure classification over [0, 1]; no side effects, no state beyond the
/// configured thresholds.
pub struct RiskEngine {
    config: RiskConfig,
}

impl RiskEngine {
    pub fn new(config: RiskConfig) -> Self {
        Self { config }
    }

    pub fn classify(&self, score: f32) -> Severity {
        Severity::from_score(score, &self.config)
    }

    pub fn config(&self) -> &RiskConfig {
        &self.config
    }
}
