//! JSON log lines: one JSON object per line (ndjson) for ingestion and audit.

use crate::alerts::Alert;
use serde::Serialize;
use std::io::Write;
use tracing_subscriber::fmt::format::FmtSpan;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

/// Flat rendering of an alert for ndjson output and ingestion.
#[derive(Serialize)]
pub struct AlertLine<'a> {
    pub ts: String,
    pub severity: &'a str,
    pub threat_score: f32,
    pub recommended_action: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target_kind: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target: Option<&'a str>,
    pub event_id: &'a str,
}

impl<'a> AlertLine<'a> {
    pub fn from_alert(alert: &'a Alert) -> Self {
        let (target_kind, target) = match alert.target() {
            Some((kind, value)) => (Some(kind), Some(value)),
            None => (None, None),
        };
        Self {
            ts: alert.ts.to_rfc3339(),
            severity: alert.severity.as_str(),
            threat_score: alert.threat_score,
            recommended_action: &alert.recommended_action,
            target_kind,
            target,
            event_id: &alert.event.id,
        }
    }
}

/// Initialize tracing with JSON format (one JSON object per line)
pub struct StructuredLogger;

impl StructuredLogger {
    /// Install global subscriber: JSON lines to stdout, level from RUST_LOG or default.
    pub fn init(json: bool, default_level: &str) {
        let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
        if json {
            let fmt = tracing_subscriber::fmt::layer()
                .json()
                .with_span_events(FmtSpan::NONE)
                .with_writer(std::io::stdout);
            tracing_subscriber::registry()
                .with(filter)
                .with(fmt)
                .init();
        } else {
            tracing_subscriber::registry()
                .with(filter)
                .with(tracing_subscriber::fmt::layer().with_writer(std::io::stdout))
                .init();
        }
    }

    /// Emit a single structured line (e.g. an alert) without going through tracing
    pub fn emit_json(event: &impl Serialize, w: &mut impl Write) {
        if let Ok(line) = serde_json::to_string(event) {
            let _ = writeln!(w, "{}", line);
        }
    }
}
