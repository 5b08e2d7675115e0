//! Transport layer for the MiLight bridge protocol
//!
//! Provides UDP request/acknowledgement exchange with a bridge and the
//! send-rate throttle.

pub mod error;
pub mod throttle;
pub mod udp;

pub use error::{Error, Result};
pub use throttle::Throttle;
pub use udp::UdpTransport;

use async_trait::async_trait;
use bytes::BytesMut;

/// Transport trait for bridge communication
#[async_trait]
pub trait Transport: Send + Sync {
    /// Bind the local socket
    async fn bind(&mut self) -> Result<()>;

    /// Release the local socket
    async fn close(&mut self) -> Result<()>;

    /// Check if a socket is bound
    fn is_bound(&self) -> bool;

    /// Send `request` and collect replies until `marker` shows up
    ///
    /// Stale datagrams queued before the send are discarded. Returns every
    /// byte received for this request once the accumulated stream contains
    /// `marker`. One call is one attempt; nothing is retried here.
    async fn exchange(&mut self, request: &[u8], marker: &[u8]) -> Result<BytesMut>;

    /// Get remote address
    fn remote_addr(&self) -> String;
}
