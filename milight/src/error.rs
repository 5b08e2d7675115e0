//! High-level error types

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Invalid input: {0}")]
    InvalidInput(#[from] milight_types::Error),

    #[error("Core protocol error: {0}")]
    Core(#[from] milight_core::Error),

    #[error("Transport error: {0}")]
    Transport(#[from] milight_transport::Error),

    #[error("Could not obtain a session from the bridge after {attempts} attempts")]
    SessionUnavailable { attempts: u32 },

    #[error("Gave up attempting to get a response after {attempts} attempts")]
    NoAcknowledgement { attempts: u32 },
}

/// Broad category of an [`Error`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Caller passed something invalid; nothing was sent
    Input,
    /// Socket could not be bound or a datagram could not be sent
    Transport,
    /// No usable session could be obtained
    Session,
    /// The bridge never acknowledged the command
    Timeout,
}

impl Error {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::InvalidInput(_) => ErrorKind::Input,
            Self::Core(e) if e.is_input() => ErrorKind::Input,
            Self::Core(_) => ErrorKind::Session,
            Self::Transport(e) if e.is_retryable() => ErrorKind::Timeout,
            Self::Transport(_) => ErrorKind::Transport,
            Self::SessionUnavailable { .. } => ErrorKind::Session,
            Self::NoAcknowledgement { .. } => ErrorKind::Timeout,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_kinds() {
        let input: Error = milight_types::Brightness::new(150).unwrap_err().into();
        assert_eq!(input.kind(), ErrorKind::Input);

        let bad_hex: Error = milight_core::Frame::from_hex("3", "080401", 0, "000000")
            .unwrap_err()
            .into();
        assert_eq!(bad_hex.kind(), ErrorKind::Input);

        let session: Error = milight_core::Error::MissingSessionAck.into();
        assert_eq!(session.kind(), ErrorKind::Session);

        let send: Error = milight_transport::Error::Send(std::io::Error::from(
            std::io::ErrorKind::NetworkUnreachable,
        ))
        .into();
        assert_eq!(send.kind(), ErrorKind::Transport);

        assert_eq!(Error::NoAcknowledgement { attempts: 10 }.kind(), ErrorKind::Timeout);
        assert_eq!(Error::SessionUnavailable { attempts: 2 }.kind(), ErrorKind::Session);
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(
            Error::NoAcknowledgement { attempts: 10 }.to_string(),
            "Gave up attempting to get a response after 10 attempts"
        );
    }
}
