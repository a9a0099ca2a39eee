//! In-memory buffer of observed network and log data points.
//! Append-only; callers decide how much history to keep around.

use super::{Event, EventKind, LogEvent, NetworkEvent};
use std::sync::Mutex;

pub struct DataCollector {
    buffer: Mutex<Vec<Event>>,
}

impl Default for DataCollector {
    fn default() -> Self {
        Self {
            buffer: Mutex::new(Vec::new()),
        }
    }
}

impl DataCollector {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a network traffic data point; returns the buffered event.
    pub fn record_network(
        &self,
        source_ip: impl Into<String>,
        dest_ip: impl Into<String>,
        packet_size: u32,
        protocol: impl Into<String>,
    ) -> Event {
        self.push(Event::new(EventKind::Network(NetworkEvent {
            source_ip: source_ip.into(),
            dest_ip: dest_ip.into(),
            packet_size,
            protocol: protocol.into(),
        })))
    }

    /// Record a system log data point; returns the buffered event.
    pub fn record_log(
        &self,
        user: impl Into<String>,
        action: impl Into<String>,
        resource: impl Into<String>,
    ) -> Event {
        self.push(Event::new(EventKind::Log(LogEvent {
            user: user.into(),
            action: action.into(),
            resource: resource.into(),
        })))
    }

    fn push(&self, event: Event) -> Event {
        self.buffer.lock().expect("lock").push(event.clone());
        event
    }

    /// The `n` most recent data points, oldest first.
    pub fn recent(&self, n: usize) -> Vec<Event> {
        let buffer = self.buffer.lock().expect("lock");
        let start = buffer.len().saturating_sub(n);
        buffer[start..].to_vec()
    }

    pub fn len(&self) -> usize {
        self.buffer.lock().expect("lock").len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
