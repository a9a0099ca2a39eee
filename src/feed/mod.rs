//! Check events and threat feed sources.
//!
//! The feed document is a JSON object with `malicious_ips` and
//! `malicious_domains` string arrays, read locally or fetched over HTTP.
//! Load failures substitute a built-in default list; they are logged,
//! never fatal.

mod collector;
mod remote;

pub use collector::DataCollector;
pub use remote::FeedClient;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::warn;
use uuid::Uuid;

/// A single check request flowing into the processor.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Event {
    pub id: String,
    pub ts: DateTime<Utc>,
    #[serde(flatten)]
    pub kind: EventKind,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum EventKind {
    IpCheck(IpCheckEvent),
    DomainCheck(DomainCheckEvent),
    Network(NetworkEvent),
    Log(LogEvent),
    /// Catch-all for event types this monitor does not understand;
    /// processing one fails explicitly instead of producing an alert.
    #[serde(other)]
    Unknown,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IpCheckEvent {
    pub ip_address: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DomainCheckEvent {
    pub domain: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NetworkEvent {
    pub source_ip: String,
    pub dest_ip: String,
    pub packet_size: u32,
    pub protocol: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogEvent {
    pub user: String,
    pub action: String,
    pub resource: String,
}

impl Event {
    pub fn new(kind: EventKind) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            ts: Utc::now(),
            kind,
        }
    }

    pub fn ip_check(ip_address: impl Into<String>) -> Self {
        Self::new(EventKind::IpCheck(IpCheckEvent {
            ip_address: ip_address.into(),
        }))
    }

    pub fn domain_check(domain: impl Into<String>) -> Self {
        Self::new(EventKind::DomainCheck(DomainCheckEvent {
            domain: domain.into(),
        }))
    }
}

#[derive(Debug, Error)]
pub enum FeedError {
    #[error("feed read: {0}")]
    Io(#[from] std::io::Error),
    #[error("feed parse: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("feed fetch: {0}")]
    Http(#[from] reqwest::Error),
    #[error("feed endpoint returned {0}")]
    Status(reqwest::StatusCode),
}

/// Identifier lists to evaluate each cycle.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ThreatFeed {
    #[serde(default)]
    pub malicious_ips: Vec<String>,
    #[serde(default)]
    pub malicious_domains: Vec<String>,
}

impl ThreatFeed {
    /// Built-in fallback list used when no feed source is reachable.
    pub fn defaults() -> Self {
        Self {
            malicious_ips: vec![
                "45.227.253.214".to_string(),
                "192.168.1.100".to_string(),
                "31.192.45.78".to_string(),
            ],
            malicious_domains: vec![
                "malware-site.com".to_string(),
                "phishing-attempt.net".to_string(),
                "suspicious-domain.org".to_string(),
            ],
        }
    }

    pub fn try_load(path: &std::path::Path) -> Result<Self, FeedError> {
        let data = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&data)?)
    }

    /// Load from disk, substituting the built-in defaults on any failure.
    pub fn load(path: &std::path::Path) -> Self {
        match Self::try_load(path) {
            Ok(feed) => feed,
            Err(e) => {
                warn!(path = %path.display(), error = %e, "threat feed load failed; using defaults");
                Self::defaults()
            }
        }
    }

    /// Expand the identifier lists into check events.
    pub fn events(&self) -> Vec<Event> {
        let mut out = Vec::with_capacity(self.len());
        for ip in &self.malicious_ips {
            out.push(Event::ip_check(ip.clone()));
        }
        for domain in &self.malicious_domains {
            out.push(Event::domain_check(domain.clone()));
        }
        out
    }

    pub fn len(&self) -> usize {
        self.malicious_ips.len() + self.malicious_domains.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
