//! Error types for milight-core

/// Result type alias for milight-core operations
pub type Result<T> = std::result::Result<T, Error>;

/// Core protocol errors
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// Caller-supplied value out of range
    #[error(transparent)]
    Types(#[from] milight_types::Error),

    /// Hex string could not be decoded
    #[error("Invalid hex {input:?}: {reason}")]
    InvalidHex { input: String, reason: String },

    /// Hex field has the wrong width
    #[error("Invalid {field}: expected {expected} hex characters, got {actual}")]
    InvalidLength {
        field: &'static str,
        expected: usize,
        actual: usize,
    },

    /// Response did not contain a session acknowledgement
    #[error("Invalid session data received from bridge: no session acknowledgement")]
    MissingSessionAck,

    /// Session acknowledgement had the wrong size
    #[error("Invalid session data received from bridge: expected {expected} bytes, got {actual}")]
    InvalidSessionData { expected: usize, actual: usize },

    /// No session has been acquired yet
    #[error("Session not initialized - no session acquired from the bridge")]
    SessionNotInitialized,
}

impl Error {
    /// Check if the error is caused by caller input rather than the bridge
    pub fn is_input(&self) -> bool {
        matches!(
            self,
            Self::Types(_) | Self::InvalidHex { .. } | Self::InvalidLength { .. }
        )
    }

    /// Check if the error concerns session state
    pub fn is_session(&self) -> bool {
        matches!(
            self,
            Self::MissingSessionAck | Self::InvalidSessionData { .. } | Self::SessionNotInitialized
        )
    }
}
