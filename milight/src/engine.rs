//! Session management and command execution
//!
//! The engine owns everything one client needs to talk to a bridge: the
//! transport, the current session with its serial counter, and the send
//! throttle. Commands are executed one at a time through `&mut self`.

use std::time::Duration;

use bytes::BytesMut;
use tracing::{debug, info, warn};

use milight_core::{
    constants::{SESSION_ACK, SESSION_REQUEST},
    Frame, Request, Session,
};
use milight_transport::{Throttle, Transport};

use crate::config::Config;
use crate::error::{Error, Result};

/// Protocol engine for a single bridge
pub struct Engine {
    transport: Box<dyn Transport>,
    throttle: Throttle,
    session: Option<Session>,
    config: Config,
}

impl Engine {
    pub fn new(transport: Box<dyn Transport>, config: Config) -> Self {
        Self {
            transport,
            throttle: Throttle::new(config.min_send_interval),
            session: None,
            config,
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Current session, if one has been acquired
    pub fn session(&self) -> Option<&Session> {
        self.session.as_ref()
    }

    pub fn remote_addr(&self) -> String {
        self.transport.remote_addr()
    }

    /// Hold off the next send by an extra `delay`
    pub fn delay_next_send(&mut self, delay: Duration) {
        self.throttle.delay(delay);
    }

    /// Make sure a usable session exists
    ///
    /// Reuses the current session while it is fresh unless `force` is set.
    /// Otherwise requests a new one, trying up to `session_attempts` times.
    ///
    /// # Errors
    ///
    /// - [`Error::SessionUnavailable`] when the bridge never answered
    /// - [`Error::Core`] when the answer was not a valid session
    /// - [`Error::Transport`] when the socket could not be used at all
    pub async fn ensure_session(&mut self, force: bool) -> Result<()> {
        if !force {
            if let Some(session) = &self.session {
                if session.is_fresh(self.config.session_lifetime, self.config.min_send_interval) {
                    return Ok(());
                }
                debug!("Session expired, requesting a new one");
            }
        }

        self.session = None;

        let attempts = self.config.session_attempts;
        for attempt in 1..=attempts {
            match self.exchange(&SESSION_REQUEST, &SESSION_ACK).await {
                Ok(response) => {
                    let session = Session::from_ack(&response)?;
                    info!(
                        "Session acquired from {} (token={})",
                        self.transport.remote_addr(),
                        hex::encode_upper(session.token())
                    );
                    self.session = Some(session);
                    return Ok(());
                }
                Err(e) if e.is_retryable() => {
                    warn!("Session request {}/{} failed: {}", attempt, attempts, e);
                }
                Err(e) => return Err(e.into()),
            }
        }

        Err(Error::SessionUnavailable { attempts })
    }

    /// Send one command and wait for the bridge to acknowledge it
    ///
    /// The command gets a serial from the current session before anything is
    /// sent. Unacknowledged attempts are repeated up to `max_attempts` times;
    /// if attempt `session_retry_attempt` fails the session is renewed and the
    /// remaining attempts use the new token and a new serial. No renewal
    /// happens after the last attempt.
    pub async fn execute(&mut self, frame: &Frame) -> Result<()> {
        self.ensure_session(false).await?;

        let mut serial = self.next_serial()?;
        let attempts = self.config.max_attempts;

        debug!("Executing {:?} (serial={})", frame, serial);

        for attempt in 1..=attempts {
            let token = self.token()?;
            let request = Request::new(token, serial, *frame);
            let marker = request.ack_marker();

            match self.exchange(&request.encode(), &marker).await {
                Ok(_) => {
                    debug!("Acknowledged serial {} on attempt {}", serial, attempt);
                    return Ok(());
                }
                Err(e) if e.is_retryable() => {
                    debug!("Attempt {}/{} for serial {} failed: {}", attempt, attempts, serial, e);
                }
                Err(e) => return Err(e.into()),
            }

            if attempt == self.config.session_retry_attempt && attempt < attempts {
                warn!("Bridge stopped acknowledging, renewing session");
                self.ensure_session(true).await?;
                serial = self.next_serial()?;
            }
        }

        warn!("No acknowledgement for {:?} after {} attempts", frame, attempts);

        Err(Error::NoAcknowledgement { attempts })
    }

    /// Release the socket and forget the session
    pub async fn close(&mut self) -> Result<()> {
        self.session = None;
        self.transport.close().await?;
        Ok(())
    }

    async fn exchange(&mut self, request: &[u8], marker: &[u8]) -> milight_transport::Result<BytesMut> {
        self.throttle.wait().await;
        let response = self.transport.exchange(request, marker).await?;
        self.throttle.reset();
        Ok(response)
    }

    fn token(&self) -> Result<[u8; 2]> {
        self.session
            .as_ref()
            .map(Session::token)
            .ok_or_else(|| milight_core::Error::SessionNotInitialized.into())
    }

    fn next_serial(&mut self) -> Result<u8> {
        self.session
            .as_mut()
            .map(Session::next_serial)
            .ok_or_else(|| milight_core::Error::SessionNotInitialized.into())
    }
}
