//! Transport errors

use std::io;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Unable to bind to the UDP socket on {addr}: {source}")]
    Bind {
        addr: String,
        #[source]
        source: io::Error,
    },

    #[error("Unable to send data to the bridge: {0}")]
    Send(#[source] io::Error),

    #[error("Unable to receive data from the bridge: {0}")]
    Receive(#[source] io::Error),

    #[error("Read timeout")]
    ReadTimeout,

    #[error("Connection closed by remote")]
    ConnectionClosed,

    #[error("Response exceeded {limit} bytes without an acknowledgement")]
    ResponseOverflow { limit: usize },

    #[error("Invalid address: {0}")]
    InvalidAddress(String),
}

impl Error {
    /// Check if another attempt might succeed
    ///
    /// Local configuration problems (bind, address) and failed sends are
    /// final; a missing or garbled reply is not.
    pub fn is_retryable(&self) -> bool {
        matches!(
            self,
            Self::ReadTimeout | Self::ConnectionClosed | Self::Receive(_) | Self::ResponseOverflow { .. }
        )
    }
}
