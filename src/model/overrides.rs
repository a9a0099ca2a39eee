//! Known-identifier override table: fixed scores consulted before the
//! general scoring path. Deny entries carry high scores; allow entries
//! work the same way with low ones.

use std::collections::HashMap;

#[derive(Debug, Clone, Default)]
pub struct OverrideTable {
    entries: HashMap<String, f32>,
}

/// Curated threat-intel entries shipped with the monitor.
const KNOWN_THREATS: [(&str, f32); 9] = [
    ("45.227.253.214", 0.95),
    ("31.192.45.78", 0.85),
    ("185.143.223.45", 0.90),
    ("103.91.206.72", 0.80),
    ("malware-site.com", 0.95),
    ("phishing-attempt.net", 0.90),
    ("suspicious-domain.org", 0.85),
    ("spam-source.com", 0.80),
    ("botnet-cc.net", 0.90),
];

impl OverrideTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Table pre-seeded with the shipped known-threat entries.
    pub fn with_known_threats() -> Self {
        let mut table = Self::new();
        for (identifier, score) in KNOWN_THREATS {
            table.insert(identifier, score);
        }
        table
    }

    pub fn insert(&mut self, identifier: impl Into<String>, score: f32) {
        self.entries.insert(identifier.into(), score);
    }

    pub fn lookup(&self, identifier: &str) -> Option<f32> {
        self.entries.get(identifier).copied()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
