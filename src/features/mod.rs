//! Lexical and statistical feature extraction from raw identifiers.

mod extract;

pub use extract::{extract, IdentifierKind};

use serde::{Deserialize, Serialize};

/// Number of features produced per identifier, for either schema.
pub const FEATURE_DIM: usize = 10;

/// Which encoding an identifier resolved to. Recoverable from the
/// identifier alone: four dot-separated octets in 0–255 is IPv4,
/// anything else is a domain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FeatureSchema {
    Ipv4,
    Domain,
}

/// Fixed-size feature vector for model input.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeatureVector {
    pub schema: FeatureSchema,
    pub values: [f32; FEATURE_DIM],
}

impl FeatureVector {
    pub fn as_slice(&self) -> &[f32] {
        &self.values
    }

    /// All-zero domain-schema vector, used for empty identifiers.
    pub fn zeroed(schema: FeatureSchema) -> Self {
        Self {
            schema,
            values: [0.0; FEATURE_DIM],
        }
    }
}
