//! Event orchestration: dispatch on event kind, run the feature → score →
//! severity pipeline, emit an alert. Holds no mutable state; safe to call
//! from concurrent threads.

use crate::alerts::{Alert, AlertSink};
use crate::feed::{Event, EventKind};
use crate::model::Scorer;
use crate::risk::{RiskEngine, Severity};
use chrono::Utc;
use thiserror::Error;
use tracing::warn;
use uuid::Uuid;

/// Log events carry no identifier to extract features from; they are
/// assessed at a fixed floor score.
const LOG_EVENT_SCORE: f32 = 0.0;

#[derive(Debug, Error)]
pub enum ProcessError {
    #[error("unsupported event type (event {0})")]
    UnsupportedEventType(String),
}

pub struct EventProcessor {
    scorer: Scorer,
    risk: RiskEngine,
    sink: Option<Box<dyn AlertSink>>,
}

impl EventProcessor {
    pub fn new(scorer: Scorer, risk: RiskEngine) -> Self {
        Self {
            scorer,
            risk,
            sink: None,
        }
    }

    /// Attach an alert sink; medium and high alerts are forwarded to it.
    pub fn with_sink(mut self, sink: Box<dyn AlertSink>) -> Self {
        self.sink = Some(sink);
        self
    }

    /// Assess one event and produce its alert record. IP and domain
    /// checks score their identifier; network events score the remote
    /// peer (`source_ip`); log events take the fixed floor score.
    pub fn process(&self, event: &Event) -> Result<Alert, ProcessError> {
        let score = match &event.kind {
            EventKind::IpCheck(check) => self.scorer.score(&check.ip_address),
            EventKind::DomainCheck(check) => self.scorer.score(&check.domain),
            EventKind::Network(net) => self.scorer.score(&net.source_ip),
            EventKind::Log(_) => LOG_EVENT_SCORE,
            EventKind::Unknown => {
                return Err(ProcessError::UnsupportedEventType(event.id.clone()))
            }
        };

        let severity = self.risk.classify(score);
        let alert = Alert {
            id: Uuid::new_v4().to_string(),
            ts: Utc::now(),
            severity,
            threat_score: score,
            recommended_action: severity.recommended_action().to_string(),
            event: event.clone(),
        };

        if severity >= Severity::Medium {
            self.forward(&alert);
        }
        Ok(alert)
    }

    /// Fire-and-forget delivery; sink failures are logged, never raised.
    fn forward(&self, alert: &Alert) {
        if let Some(sink) = &self.sink {
            if let Err(e) = sink.deliver(alert.clone()) {
                warn!(alert_id = %alert.id, error = %e, "alert sink delivery failed");
            }
        }
    }
}
