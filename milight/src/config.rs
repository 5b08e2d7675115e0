//! Engine configuration

use std::time::Duration;

use milight_core::constants;

/// Retry, session and pacing policy for a [`Bridge`](crate::Bridge)
///
/// Defaults follow what iBox bridges tolerate in practice.
///
/// ```
/// use std::time::Duration;
/// use milight::Config;
///
/// let config = Config::default()
///     .with_max_attempts(4)
///     .with_session_lifetime(Duration::from_secs(10));
/// assert_eq!(config.max_attempts, 4);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Send attempts per command
    pub max_attempts: u32,
    /// Attempt after whose failure the session is renewed
    ///
    /// Values at or above `max_attempts` disable the renewal.
    pub session_retry_attempt: u32,
    /// Tries when acquiring a session
    pub session_attempts: u32,
    /// How long a session is trusted
    pub session_lifetime: Duration,
    /// Minimum spacing between sends
    pub min_send_interval: Duration,
    /// Extra spacing after a power-on command
    pub wakeup_delay: Duration,
    /// Link/unlink repetitions
    pub link_pulses: u32,
    /// Pause after each link/unlink pulse
    pub link_interval: Duration,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            max_attempts: constants::EXECUTE_RETRY_LOOPS,
            session_retry_attempt: constants::EXECUTE_SESSION_TRY,
            session_attempts: constants::SESSION_ATTEMPTS,
            session_lifetime: constants::SESSION_TIMEOUT,
            min_send_interval: constants::MAX_RATE,
            wakeup_delay: constants::WAKEUP_TIME,
            link_pulses: constants::LINK_LOOPS,
            link_interval: constants::LINK_INTERVAL,
        }
    }
}

impl Config {
    pub fn with_max_attempts(mut self, attempts: u32) -> Self {
        self.max_attempts = attempts;
        self
    }

    pub fn with_session_retry_attempt(mut self, attempt: u32) -> Self {
        self.session_retry_attempt = attempt;
        self
    }

    pub fn with_session_attempts(mut self, attempts: u32) -> Self {
        self.session_attempts = attempts;
        self
    }

    pub fn with_session_lifetime(mut self, lifetime: Duration) -> Self {
        self.session_lifetime = lifetime;
        self
    }

    pub fn with_min_send_interval(mut self, interval: Duration) -> Self {
        self.min_send_interval = interval;
        self
    }

    pub fn with_wakeup_delay(mut self, delay: Duration) -> Self {
        self.wakeup_delay = delay;
        self
    }

    pub fn with_link_pulses(mut self, pulses: u32, interval: Duration) -> Self {
        self.link_pulses = pulses;
        self.link_interval = interval;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.max_attempts, 10);
        assert_eq!(config.session_retry_attempt, 5);
        assert_eq!(config.session_attempts, 2);
        assert_eq!(config.min_send_interval, Duration::from_millis(30));
        assert_eq!(config.wakeup_delay, Duration::from_millis(50));
        assert_eq!(config.link_pulses, 3);
    }
}
