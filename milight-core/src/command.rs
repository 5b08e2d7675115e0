//! Action and command codes
//!
//! A command is an action byte plus a 3-byte command code. Codes that carry a
//! value (color, brightness, ...) end with that value; the rest are fixed.

use std::fmt;

use milight_types::{Brightness, Color, Mode, Saturation, SpeedStep, WhiteTemperature};

/// First byte of a command frame
///
/// Bytes without a known meaning are kept as [`Action::Other`] so raw
/// dispatch can reach codes the typed API does not cover.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Action {
    Command,
    Link,
    Unlink,
    Other(u8),
}

impl Action {
    pub fn code(self) -> u8 {
        match self {
            Self::Command => 0x31,
            Self::Link => 0x3D,
            Self::Unlink => 0x3E,
            Self::Other(code) => code,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Command => "COMMAND",
            Self::Link => "LINK",
            Self::Unlink => "UNLINK",
            Self::Other(_) => "OTHER",
        }
    }
}

impl From<Action> for u8 {
    fn from(action: Action) -> u8 {
        action.code()
    }
}

impl From<u8> for Action {
    fn from(value: u8) -> Self {
        match value {
            0x31 => Self::Command,
            0x3D => Self::Link,
            0x3E => Self::Unlink,
            other => Self::Other(other),
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}(0x{:02X})", self.name(), self.code())
    }
}

/// 3-byte command code
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct CommandCode(pub [u8; 3]);

impl CommandCode {
    const fn with_value(prefix: [u8; 2], value: u8) -> Self {
        Self([prefix[0], prefix[1], value])
    }

    pub fn bytes(self) -> [u8; 3] {
        self.0
    }
}

impl fmt::Debug for CommandCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "CommandCode({})", hex::encode_upper(self.0))
    }
}

impl fmt::Display for CommandCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&hex::encode_upper(self.0))
    }
}

/// Zoned RGBWW fixtures
pub mod rgbww {
    use super::*;

    pub const LINK_UNLINK: CommandCode = CommandCode([0x08, 0x00, 0x00]);
    pub const ON: CommandCode = CommandCode([0x08, 0x04, 0x01]);
    pub const OFF: CommandCode = CommandCode([0x08, 0x04, 0x02]);
    pub const FASTER: CommandCode = CommandCode([0x08, 0x04, 0x03]);
    pub const SLOWER: CommandCode = CommandCode([0x08, 0x04, 0x04]);
    pub const NIGHT: CommandCode = CommandCode([0x08, 0x04, 0x05]);

    const COLOR: [u8; 2] = [0x08, 0x01];
    const SATURATION: [u8; 2] = [0x08, 0x02];
    const BRIGHTNESS: [u8; 2] = [0x08, 0x03];
    const WHITE: [u8; 2] = [0x08, 0x05];
    const MODE: [u8; 2] = [0x08, 0x06];

    pub fn color(color: Color) -> CommandCode {
        CommandCode::with_value(COLOR, color.value())
    }

    pub fn saturation(saturation: Saturation) -> CommandCode {
        CommandCode::with_value(SATURATION, saturation.value())
    }

    pub fn brightness(brightness: Brightness) -> CommandCode {
        CommandCode::with_value(BRIGHTNESS, brightness.value())
    }

    pub fn white(temperature: WhiteTemperature) -> CommandCode {
        CommandCode::with_value(WHITE, temperature.value())
    }

    pub fn mode(mode: Mode) -> CommandCode {
        CommandCode::with_value(MODE, mode.value())
    }

    pub fn speed(step: SpeedStep) -> CommandCode {
        match step {
            SpeedStep::Faster => FASTER,
            SpeedStep::Slower => SLOWER,
        }
    }
}

/// The lamp built into the bridge itself
pub mod lamp {
    use super::*;

    pub const SLOWER: CommandCode = CommandCode([0x00, 0x03, 0x01]);
    pub const FASTER: CommandCode = CommandCode([0x00, 0x03, 0x02]);
    pub const ON: CommandCode = CommandCode([0x00, 0x03, 0x03]);
    pub const OFF: CommandCode = CommandCode([0x00, 0x03, 0x04]);
    pub const WHITE: CommandCode = CommandCode([0x00, 0x03, 0x05]);

    const COLOR: [u8; 2] = [0x00, 0x01];
    const BRIGHTNESS: [u8; 2] = [0x00, 0x02];
    const MODE: [u8; 2] = [0x00, 0x04];

    pub fn color(color: Color) -> CommandCode {
        CommandCode::with_value(COLOR, color.value())
    }

    pub fn brightness(brightness: Brightness) -> CommandCode {
        CommandCode::with_value(BRIGHTNESS, brightness.value())
    }

    pub fn mode(mode: Mode) -> CommandCode {
        CommandCode::with_value(MODE, mode.value())
    }

    pub fn speed(step: SpeedStep) -> CommandCode {
        match step {
            SpeedStep::Faster => FASTER,
            SpeedStep::Slower => SLOWER,
        }
    }
}
