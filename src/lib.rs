//! threatwatch — IP and domain threat scoring monitor.
//!
//! Modular structure:
//! - [`feed`] — Check events, threat feed loading, in-memory data collection
//! - [`features`] — Lexical/statistical feature extraction from identifiers
//! - [`model`] — Pluggable threat models and the scoring wrapper
//! - [`risk`] — Severity classification and recommended actions
//! - [`processor`] — Event orchestration: extract → score → classify → alert
//! - [`alerts`] — Alert records, sink trait, queue and log sinks
//! - [`logging`] — Structured JSON logging

pub mod config;
pub mod feed;
pub mod features;
pub mod model;
pub mod risk;
pub mod processor;
pub mod alerts;
pub mod logging;

pub use config::MonitorConfig;
pub use feed::{DataCollector, Event, EventKind, ThreatFeed};
pub use features::{extract, FeatureSchema, FeatureVector, FEATURE_DIM};
pub use model::{LogisticModel, OverrideTable, Scorer, ThreatModel};
pub use risk::{RiskEngine, Severity};
pub use processor::{EventProcessor, ProcessError};
pub use alerts::{Alert, AlertSink, ChannelSink, LogSink};
pub use logging::StructuredLogger;
