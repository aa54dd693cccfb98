//! Price-change notifications
//!
//! Collaborators that render fuel-price lists subscribe here instead of
//! relying on an ambient global callback. Events are published after the
//! triggering transaction commits, so a subscriber reading the store on
//! receipt always observes the new state.

use serde::Serialize;
use tokio::sync::broadcast;

/// A committed mutation of the price history
#[derive(Debug, Clone, Serialize)]
pub enum PriceEvent {
    Added { id: i64, name: String },
    Removed { id: i64, name: String },
}

#[derive(Clone)]
pub struct PriceEventBus {
    tx: broadcast::Sender<PriceEvent>,
}

impl PriceEventBus {
    pub fn new(capacity: usize) -> Self {
        let (tx, _) = broadcast::channel(capacity);
        Self { tx }
    }

    pub fn subscribe(&self) -> broadcast::Receiver<PriceEvent> {
        self.tx.subscribe()
    }

    /// Publishing with no subscribers is a no-op
    pub fn publish(&self, event: PriceEvent) {
        match self.tx.send(event) {
            Ok(receivers) => tracing::debug!("Price event delivered to {} subscribers", receivers),
            Err(_) => tracing::debug!("Price event published with no subscribers"),
        }
    }
}

impl Default for PriceEventBus {
    fn default() -> Self {
        Self::new(32)
    }
}
