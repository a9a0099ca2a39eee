//! Alert records and delivery sinks.
//!
//! The processor hands medium/high alerts to an [`AlertSink`];
//! delivery is fire-and-forget, and a failing sink never propagates
//! back into event processing.

use crate::feed::{Event, EventKind};
use crate::logging::{AlertLine, StructuredLogger};
use crate::risk::Severity;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::io::Write;
use std::sync::mpsc::{self, Receiver, Sender};
use std::sync::Mutex;
use thiserror::Error;

/// Threat assessment for one processed event. Immutable once created.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Alert {
    pub id: String,
    pub ts: DateTime<Utc>,
    pub severity: Severity,
    pub threat_score: f32,
    pub recommended_action: String,
    /// The originating event, payload included
    pub event: Event,
}

impl Alert {
    /// The identifier this alert is about, with its kind, when one exists.
    pub fn target(&self) -> Option<(&'static str, &str)> {
        match &self.event.kind {
            EventKind::IpCheck(e) => Some(("ip", &e.ip_address)),
            EventKind::DomainCheck(e) => Some(("domain", &e.domain)),
            EventKind::Network(e) => Some(("ip", &e.source_ip)),
            EventKind::Log(_) | EventKind::Unknown => None,
        }
    }
}

#[derive(Debug, Error)]
pub enum SinkError {
    #[error("alert queue disconnected")]
    Disconnected,
}

/// Receives alert records for rendering or notification. Implementations
/// must not panic back into the processor.
pub trait AlertSink: Send + Sync {
    fn deliver(&self, alert: Alert) -> Result<(), SinkError>;
}

/// FIFO queue sink: the processor enqueues, a consumer thread dequeues
/// and renders. Backed by a standard mpsc channel.
pub struct ChannelSink {
    tx: Mutex<Sender<Alert>>,
}

impl ChannelSink {
    pub fn new() -> (Self, Receiver<Alert>) {
        let (tx, rx) = mpsc::channel();
        (Self { tx: Mutex::new(tx) }, rx)
    }
}

impl AlertSink for ChannelSink {
    fn deliver(&self, alert: Alert) -> Result<(), SinkError> {
        self.tx
            .lock()
            .expect("lock")
            .send(alert)
            .map_err(|_| SinkError::Disconnected)
    }
}

/// Renders each alert as one JSON line (ndjson) on the configured writer.
/// Stands in for a desktop notifier in headless deployments.
pub struct LogSink {
    out: Mutex<Box<dyn Write + Send>>,
}

impl LogSink {
    pub fn new(out: Box<dyn Write + Send>) -> Self {
        Self {
            out: Mutex::new(out),
        }
    }

    pub fn stdout() -> Self {
        Self::new(Box::new(std::io::stdout()))
    }
}

impl AlertSink for LogSink {
    fn deliver(&self, alert: Alert) -> Result<(), SinkError> {
        let mut out = self.out.lock().expect("lock");
        StructuredLogger::emit_json(&AlertLine::from_alert(&alert), &mut *out);
        Ok(())
    }
}
