//! Command frames and the datagrams that carry them

use bytes::{BufMut, BytesMut};
use std::fmt;

use milight_types::Zone;

use crate::{
    codec,
    command::{Action, CommandCode},
    constants::{PASSWORD, RECEIVE_HEADER, SEND_HEADER},
    error::Result,
};

/// One bridge command, independent of session and serial
///
/// # Frame Structure
///
/// ```text
/// ┌────────┬──────────┬──────────┬──────────┬────────┬──────────┐
/// │ Action │ Password │ Command  │  Values  │  Zone  │ Checksum │
/// │ 1 byte │ 2 bytes  │ 3 bytes  │ 3 bytes  │ 1 byte │  1 byte  │
/// └────────┴──────────┴──────────┴──────────┴────────┴──────────┘
/// ```
///
/// The checksum is the low byte of the sum of the ten bytes before it.
///
/// # Examples
///
/// ```
/// use milight_core::{command::{rgbww, Action}, Frame};
/// use milight_types::{Brightness, Zone};
///
/// let brightness = Brightness::new(75).unwrap();
/// let frame = Frame::new(Action::Command, rgbww::brightness(brightness), Zone::new(2).unwrap());
/// assert_eq!(frame.checksum(), 0x89);
/// ```
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct Frame {
    pub action: Action,
    pub command: CommandCode,
    pub values: [u8; 3],
    pub zone: Zone,
}

impl Frame {
    /// Frame length before the checksum
    pub const BODY_SIZE: usize = 10;

    /// Create a frame with an all-zero value payload
    pub fn new(action: Action, command: CommandCode, zone: Zone) -> Self {
        Self {
            action,
            command,
            values: [0; 3],
            zone,
        }
    }

    /// Create a frame with an explicit value payload
    pub fn with_values(action: Action, command: CommandCode, zone: Zone, values: [u8; 3]) -> Self {
        Self {
            action,
            command,
            values,
            zone,
        }
    }

    /// Build a frame from its hex-encoded parts
    ///
    /// `action` must be 2 hex characters, `command` and `values` 6 each and
    /// `zone` within 0-4. Nothing is sent when any of these is wrong. Any
    /// action byte is accepted.
    ///
    /// ```
    /// use milight_core::Frame;
    ///
    /// let frame = Frame::from_hex("31", "080401", 1, "000000").unwrap();
    /// assert_eq!(frame.zone.value(), 1);
    /// assert!(Frame::from_hex("31", "0804", 1, "000000").is_err());
    /// assert!(Frame::from_hex("31", "080401", 5, "000000").is_err());
    /// ```
    pub fn from_hex(action: &str, command: &str, zone: u8, values: &str) -> Result<Self> {
        let [action] = codec::decode_exact::<1>(action, "action")?;
        let action = Action::from(action);
        let command = CommandCode(codec::decode_exact::<3>(command, "command")?);
        let values = codec::decode_exact::<3>(values, "values")?;
        let zone = Zone::new(zone)?;

        Ok(Self::with_values(action, command, zone, values))
    }

    /// The ten bytes covered by the checksum
    pub fn body(&self) -> [u8; Self::BODY_SIZE] {
        let c = self.command.bytes();
        [
            self.action.into(),
            PASSWORD[0],
            PASSWORD[1],
            c[0],
            c[1],
            c[2],
            self.values[0],
            self.values[1],
            self.values[2],
            self.zone.value(),
        ]
    }

    pub fn checksum(&self) -> u8 {
        codec::checksum(&self.body())
    }

    /// Hex rendering of body and checksum, as the protocol documents it
    pub fn to_hex(&self) -> String {
        let mut out = hex::encode_upper(self.body());
        out.push_str(&codec::encode_byte(self.checksum().into()));
        out
    }
}

impl fmt::Debug for Frame {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Frame")
            .field("action", &self.action)
            .field("command", &self.command)
            .field("values", &hex::encode_upper(self.values))
            .field("zone", &self.zone.value())
            .field("checksum", &format!("0x{:02X}", self.checksum()))
            .finish()
    }
}

/// A frame bound to a session token and serial, ready for the wire
///
/// # Request Structure
///
/// ```text
/// ┌────────┬───────┬────┬────────┬────┬────────────┬────┬──────────┐
/// │ Header │ Token │ 00 │ Serial │ 00 │ Frame body │ 00 │ Checksum │
/// │   5    │   2   │ 1  │   1    │ 1  │     10     │ 1  │    1     │
/// └────────┴───────┴────┴────────┴────┴────────────┴────┴──────────┘
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Request {
    pub token: [u8; 2],
    pub serial: u8,
    pub frame: Frame,
}

impl Request {
    pub const SIZE: usize = 22;

    pub fn new(token: [u8; 2], serial: u8, frame: Frame) -> Self {
        Self {
            token,
            serial,
            frame,
        }
    }

    pub fn encode(&self) -> BytesMut {
        let mut buf = BytesMut::with_capacity(Self::SIZE);

        buf.put_slice(&SEND_HEADER);
        buf.put_slice(&self.token);
        buf.put_u8(0);
        buf.put_u8(self.serial);
        buf.put_u8(0);
        buf.put_slice(&self.frame.body());
        buf.put_u8(0);
        buf.put_u8(self.frame.checksum());

        buf
    }

    /// The acknowledgement the bridge sends back for this request
    pub fn ack_marker(&self) -> [u8; 8] {
        ack_marker(self.serial)
    }
}

/// Acknowledgement for a given serial: receive header, 00, serial, 00
pub fn ack_marker(serial: u8) -> [u8; 8] {
    let h = RECEIVE_HEADER;
    [h[0], h[1], h[2], h[3], h[4], 0x00, serial, 0x00]
}
