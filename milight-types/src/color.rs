//! Color wheel position

/// Position on the bridge's 256-step color wheel.
///
/// Every `u8` is a valid color, so construction cannot fail.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color(u8);

impl Color {
    pub const fn new(value: u8) -> Self {
        Self(value)
    }

    pub fn value(self) -> u8 {
        self.0
    }

    /// The color byte repeated across the 3-byte command payload
    pub fn payload(self) -> [u8; 3] {
        [self.0; 3]
    }
}

impl From<u8> for Color {
    fn from(value: u8) -> Self {
        Self(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_color_payload() {
        assert_eq!(Color::new(0xFF).payload(), [0xFF, 0xFF, 0xFF]);
        assert_eq!(Color::from(0x1A).payload(), [0x1A; 3]);
    }
}
