//! Protocol constants

use std::time::Duration;

/// Session request sent to obtain a fresh session token
pub const SESSION_REQUEST: [u8; 27] = [
    0x20, 0x00, 0x00, 0x00, 0x16, 0x02, 0x62, 0x3A, 0xD5, 0xED, 0xA3, 0x01, 0xAE, 0x08, 0x2D,
    0x46, 0x61, 0x41, 0xA7, 0xF6, 0xDC, 0xAF, 0xD3, 0xE6, 0x00, 0x00, 0x1E,
];

/// Leading bytes of a session acknowledgement
pub const SESSION_ACK: [u8; 7] = [0x28, 0x00, 0x00, 0x00, 0x11, 0x00, 0x02];

/// Length of a session acknowledgement, marker included
pub const SESSION_ACK_LEN: usize = 22;

/// Offset of the 2-byte session token within the acknowledgement
pub const SESSION_TOKEN_OFFSET: usize = 19;

/// Header of every command request
pub const SEND_HEADER: [u8; 5] = [0x80, 0x00, 0x00, 0x00, 0x11];

/// Header of every command acknowledgement
pub const RECEIVE_HEADER: [u8; 5] = [0x88, 0x00, 0x00, 0x00, 0x03];

/// Fixed bridge password
pub const PASSWORD: [u8; 2] = [0x00, 0x00];

/// Default bridge UDP port
pub const DEFAULT_PORT: u16 = 5987;

/// Attempts per command before giving up
pub const EXECUTE_RETRY_LOOPS: u32 = 10;

/// Attempt after which the session is forcibly renewed
pub const EXECUTE_SESSION_TRY: u32 = 5;

/// Session acquisition attempts
pub const SESSION_ATTEMPTS: u32 = 2;

/// Number of link/unlink pulses
pub const LINK_LOOPS: u32 = 3;

/// Pause after each link/unlink pulse
pub const LINK_INTERVAL: Duration = Duration::from_secs(1);

/// Minimum spacing between two sends
pub const MAX_RATE: Duration = Duration::from_millis(30);

/// Extra spacing after a power-on command while the lamp wakes up
pub const WAKEUP_TIME: Duration = Duration::from_millis(50);

/// How long a session is trusted after it was issued
pub const SESSION_TIMEOUT: Duration = Duration::from_secs(30);

/// Per-fragment receive timeout
pub const DEFAULT_READ_TIMEOUT: Duration = Duration::from_secs(1);

/// Largest response accumulated for a single request
pub const MAX_RESPONSE_SIZE: usize = 1024;
