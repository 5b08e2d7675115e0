//! Session state for the bridge protocol
//!
//! A session tracks:
//! - The 2-byte token handed out by the bridge
//! - When it was issued (sessions are only trusted for a limited time)
//! - The serial counter stamped on each command

use std::time::{Duration, Instant};

use tracing::debug;

use crate::{
    codec,
    constants::{SESSION_ACK, SESSION_ACK_LEN, SESSION_TOKEN_OFFSET},
    error::{Error, Result},
};

/// A bridge session
///
/// Owned exclusively by one client; renewal replaces it wholesale.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    token: [u8; 2],
    issued_at: Instant,
    serial: u8,
}

impl Session {
    /// Serial of the first command in a session
    pub const INITIAL_SERIAL: u8 = 1;

    pub fn new(token: [u8; 2], issued_at: Instant) -> Self {
        Self {
            token,
            issued_at,
            serial: Self::INITIAL_SERIAL,
        }
    }

    /// Parse a session acknowledgement
    ///
    /// The acknowledgement may be preceded by unrelated bytes; everything from
    /// the marker onward must be exactly [`SESSION_ACK_LEN`] bytes.
    ///
    /// # Examples
    ///
    /// ```
    /// use milight_core::{constants::SESSION_ACK, Session};
    ///
    /// let mut ack = SESSION_ACK.to_vec();
    /// ack.resize(22, 0);
    /// ack[19] = 0xBE;
    /// ack[20] = 0xEF;
    ///
    /// let session = Session::from_ack(&ack).unwrap();
    /// assert_eq!(session.token(), [0xBE, 0xEF]);
    /// assert_eq!(session.serial(), 1);
    /// ```
    pub fn from_ack(response: &[u8]) -> Result<Self> {
        let start = codec::find(response, &SESSION_ACK).ok_or(Error::MissingSessionAck)?;
        let ack = &response[start..];

        if ack.len() != SESSION_ACK_LEN {
            return Err(Error::InvalidSessionData {
                expected: SESSION_ACK_LEN,
                actual: ack.len(),
            });
        }

        let token = [ack[SESSION_TOKEN_OFFSET], ack[SESSION_TOKEN_OFFSET + 1]];

        debug!(token = %hex::encode_upper(token), skipped = start, "Parsed session acknowledgement");

        Ok(Self::new(token, Instant::now()))
    }

    pub fn token(&self) -> [u8; 2] {
        self.token
    }

    pub fn issued_at(&self) -> Instant {
        self.issued_at
    }

    /// Serial the next command will use
    pub fn serial(&self) -> u8 {
        self.serial
    }

    /// Take the current serial and advance the counter
    ///
    /// Wraps from 255 to 0.
    pub fn next_serial(&mut self) -> u8 {
        let current = self.serial;
        self.serial = self.serial.wrapping_add(1);
        current
    }

    /// Whether the session may still be used at `now`
    ///
    /// A session is trusted until `lifetime` minus one send interval has
    /// passed since it was issued, so a command never goes out on a session
    /// about to lapse.
    pub fn is_fresh_at(&self, now: Instant, lifetime: Duration, min_interval: Duration) -> bool {
        let window = lifetime.saturating_sub(min_interval);
        self.issued_at + window > now
    }

    pub fn is_fresh(&self, lifetime: Duration, min_interval: Duration) -> bool {
        self.is_fresh_at(Instant::now(), lifetime, min_interval)
    }
}
