//! Send-rate throttle
//!
//! The bridge drops commands that arrive too close together. The throttle
//! holds the earliest instant the next send may go out.

use std::time::Duration;

use tokio::time::{sleep_until, Instant};
use tracing::trace;

/// Earliest-next-send clock
#[derive(Debug, Clone)]
pub struct Throttle {
    interval: Duration,
    next_send: Option<Instant>,
}

impl Throttle {
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            next_send: None,
        }
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    pub fn next_send(&self) -> Option<Instant> {
        self.next_send
    }

    /// Sleep until the next send is allowed
    pub async fn wait(&self) {
        if let Some(at) = self.next_send {
            let now = Instant::now();
            if at > now {
                trace!(delay_ms = (at - now).as_millis() as u64, "Throttling send");
                sleep_until(at).await;
            }
        }
    }

    /// Record a completed exchange
    pub fn reset(&mut self) {
        self.next_send = Some(Instant::now() + self.interval);
    }

    /// Push the next send further out by `extra`
    pub fn delay(&mut self, extra: Duration) {
        let base = self.next_send.unwrap_or_else(Instant::now);
        self.next_send = Some(base + extra);
    }
}
