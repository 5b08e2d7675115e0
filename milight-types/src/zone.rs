//! Zone addressing

use std::fmt;

use crate::error::{Error, Result};

/// Target group on the bridge.
///
/// Zone `0` broadcasts to every group, `1..=4` address a single group.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Zone(u8);

impl Zone {
    /// All zones
    pub const ALL: Zone = Zone(0);

    /// Highest addressable group
    pub const MAX: u8 = 4;

    /// Validate a zone number
    ///
    /// # Examples
    ///
    /// ```
    /// use milight_types::Zone;
    ///
    /// assert_eq!(Zone::new(2).unwrap().value(), 2);
    /// assert!(Zone::new(5).is_err());
    /// ```
    pub fn new(value: u8) -> Result<Self> {
        if value > Self::MAX {
            return Err(Error::out_of_range("Zone", value, 0, Self::MAX.into()));
        }
        Ok(Self(value))
    }

    pub fn value(self) -> u8 {
        self.0
    }

    pub fn is_all(self) -> bool {
        self.0 == 0
    }
}

impl TryFrom<u8> for Zone {
    type Error = Error;

    fn try_from(value: u8) -> Result<Self> {
        Self::new(value)
    }
}

impl fmt::Display for Zone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_all() {
            write!(f, "all zones")
        } else {
            write!(f, "zone {}", self.0)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zone_bounds() {
        assert!(Zone::new(0).unwrap().is_all());
        assert_eq!(Zone::new(4).unwrap().value(), 4);
        assert_eq!(
            Zone::new(5),
            Err(Error::OutOfRange {
                name: "Zone",
                value: 5,
                min: 0,
                max: 4
            })
        );
    }

    #[test]
    fn test_zone_display() {
        assert_eq!(Zone::ALL.to_string(), "all zones");
        assert_eq!(Zone::new(3).unwrap().to_string(), "zone 3");
    }
}
