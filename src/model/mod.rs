//! Threat models and the scoring wrapper.
//!
//! [`ThreatModel`] is the pluggable seam: production uses the built-in
//! [`LogisticModel`] (optionally with weights loaded from disk), tests
//! substitute fixed-output stand-ins to drive downstream severity logic
//! deterministically.

mod baseline;
mod overrides;

pub use baseline::LogisticModel;
pub use overrides::OverrideTable;

use crate::config::ModelConfig;
use crate::features::{extract, FeatureVector};
use thiserror::Error;

/// Maps a feature vector to a raw threat estimate. Outputs are clamped
/// into [0, 1] by the [`Scorer`]; implementations need not clamp.
pub trait ThreatModel: Send + Sync {
    fn predict(&self, features: &FeatureVector) -> f32;
}

#[derive(Debug, Error)]
pub enum ModelError {
    #[error("model weights {path}: {source}")]
    Read {
        path: String,
        source: std::io::Error,
    },
    #[error("model weights {path}: {source}")]
    Parse {
        path: String,
        source: serde_json::Error,
    },
    #[error("model weights {path}: {schema} weight vector has {got} values, expected {expected}")]
    Dimension {
        path: String,
        schema: &'static str,
        got: usize,
        expected: usize,
    },
}

/// Build the scoring model from configuration. A configured weights file
/// that is missing or malformed is a startup error, never a per-call one.
pub fn build(config: &ModelConfig) -> Result<Box<dyn ThreatModel>, ModelError> {
    match &config.weights_path {
        Some(path) => Ok(Box::new(LogisticModel::from_file(path)?)),
        None => Ok(Box::new(LogisticModel::default())),
    }
}

/// Wraps a threat model with the known-identifier override table and
/// score clamping. Stateless after construction; safe to share across
/// threads.
pub struct Scorer {
    model: Box<dyn ThreatModel>,
    overrides: OverrideTable,
}

impl Scorer {
    pub fn new(model: Box<dyn ThreatModel>, overrides: OverrideTable) -> Self {
        Self { model, overrides }
    }

    /// Score an identifier. Known identifiers short-circuit to their
    /// fixed score without running the feature pipeline; everything else
    /// is extracted and run through the model.
    pub fn score(&self, identifier: &str) -> f32 {
        if let Some(score) = self.overrides.lookup(identifier) {
            return clamp_score(score);
        }
        self.predict(&extract(identifier))
    }

    /// Run the model on an already-extracted vector, clamped into [0, 1].
    pub fn predict(&self, features: &FeatureVector) -> f32 {
        clamp_score(self.model.predict(features))
    }

    pub fn overrides(&self) -> &OverrideTable {
        &self.overrides
    }
}

/// Threat scores live in [0.0, 1.0]; NaN collapses to 0.0.
fn clamp_score(score: f32) -> f32 {
    if score.is_nan() {
        0.0
    } else {
        score.clamp(0.0, 1.0)
    }
}
