//! Deterministic weighted-sum model: per-schema weights, sigmoid squash.

use super::{ModelError, ThreatModel};
use crate::features::{FeatureSchema, FeatureVector, FEATURE_DIM};
use ndarray::{arr1, aview1, Array1};
use serde::Deserialize;
use std::path::Path;

// Built-in weights, tuned by hand against the feature schemas: entropy and
// lexical suspicion push scores up, private-range flags and vowel-heavy
// names push them down.
const IPV4_WEIGHTS: [f32; FEATURE_DIM] = [
    0.004, 0.008, 0.002, -0.002, 0.05, 0.18, -0.75, -0.75, 0.10, 0.15,
];
const IPV4_BIAS: f32 = -1.6;

const DOMAIN_WEIGHTS: [f32; FEATURE_DIM] = [
    0.010, 0.05, 0.22, 0.90, 0.30, 1.10, 0.08, 0.50, 1.20, -0.80,
];
const DOMAIN_BIAS: f32 = -1.8;

struct SchemaWeights {
    weights: Array1<f32>,
    bias: f32,
}

impl SchemaWeights {
    fn apply(&self, values: &[f32; FEATURE_DIM]) -> f32 {
        self.weights.dot(&aview1(values)) + self.bias
    }
}

/// Linear model over the 10 features with a sigmoid output. The weight
/// vector is selected by feature schema; both are fixed at construction.
pub struct LogisticModel {
    ipv4: SchemaWeights,
    domain: SchemaWeights,
}

#[derive(Deserialize)]
struct WeightsSpec {
    weights: Vec<f32>,
    bias: f32,
}

#[derive(Deserialize)]
struct WeightsFile {
    ipv4: WeightsSpec,
    domain: WeightsSpec,
}

impl Default for LogisticModel {
    fn default() -> Self {
        Self {
            ipv4: SchemaWeights {
                weights: arr1(&IPV4_WEIGHTS),
                bias: IPV4_BIAS,
            },
            domain: SchemaWeights {
                weights: arr1(&DOMAIN_WEIGHTS),
                bias: DOMAIN_BIAS,
            },
        }
    }
}

impl LogisticModel {
    /// Load trained weights from a JSON document:
    /// `{"ipv4": {"weights": [..], "bias": b}, "domain": {...}}`.
    /// Both vectors must carry exactly [`FEATURE_DIM`] values.
    pub fn from_file(path: &Path) -> Result<Self, ModelError> {
        let display = path.display().to_string();
        let data = std::fs::read_to_string(path).map_err(|source| ModelError::Read {
            path: display.clone(),
            source,
        })?;
        let spec: WeightsFile =
            serde_json::from_str(&data).map_err(|source| ModelError::Parse {
                path: display.clone(),
                source,
            })?;
        Ok(Self {
            ipv4: Self::schema_weights(&display, "ipv4", spec.ipv4)?,
            domain: Self::schema_weights(&display, "domain", spec.domain)?,
        })
    }

    fn schema_weights(
        path: &str,
        schema: &'static str,
        spec: WeightsSpec,
    ) -> Result<SchemaWeights, ModelError> {
        if spec.weights.len() != FEATURE_DIM {
            return Err(ModelError::Dimension {
                path: path.to_string(),
                schema,
                got: spec.weights.len(),
                expected: FEATURE_DIM,
            });
        }
        Ok(SchemaWeights {
            weights: Array1::from(spec.weights),
            bias: spec.bias,
        })
    }
}

impl ThreatModel for LogisticModel {
    fn predict(&self, features: &FeatureVector) -> f32 {
        let schema = match features.schema {
            FeatureSchema::Ipv4 => &self.ipv4,
            FeatureSchema::Domain => &self.domain,
        };
        sigmoid(schema.apply(&features.values))
    }
}

fn sigmoid(z: f32) -> f32 {
    1.0 / (1.0 + (-z).exp())
}
