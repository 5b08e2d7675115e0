//! Built-in animation modes and their speed

use std::cmp::Ordering;

use crate::error::{Error, Result};

/// One of the ten built-in animation modes (0-9).
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Mode(u8);

impl Mode {
    pub const MAX: u8 = 9;

    pub fn new(value: u8) -> Result<Self> {
        if value > Self::MAX {
            return Err(Error::out_of_range("Mode", value, 0, Self::MAX.into()));
        }
        Ok(Self(value))
    }

    pub fn value(self) -> u8 {
        self.0
    }
}

impl TryFrom<u8> for Mode {
    type Error = Error;

    fn try_from(value: u8) -> Result<Self> {
        Self::new(value)
    }
}

/// Direction of a single speed step
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpeedStep {
    Faster,
    Slower,
}

/// Relative animation speed change, in steps from -10 to 10.
///
/// The bridge only understands single faster/slower steps, so an adjustment
/// of `n` is sent as `|n|` individual commands.
///
/// ```
/// use milight_types::{SpeedAdjust, SpeedStep};
///
/// let adjust = SpeedAdjust::new(-3).unwrap();
/// assert_eq!(adjust.steps(), 3);
/// assert_eq!(adjust.direction(), Some(SpeedStep::Slower));
/// ```
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SpeedAdjust(i8);

impl SpeedAdjust {
    pub const MIN: i8 = -10;
    pub const MAX: i8 = 10;

    pub fn new(value: i8) -> Result<Self> {
        if !(Self::MIN..=Self::MAX).contains(&value) {
            return Err(Error::out_of_range(
                "Speed adjust",
                value,
                Self::MIN.into(),
                Self::MAX.into(),
            ));
        }
        Ok(Self(value))
    }

    pub fn value(self) -> i8 {
        self.0
    }

    /// Number of single-step commands needed
    pub fn steps(self) -> u8 {
        self.0.unsigned_abs()
    }

    /// `None` when no adjustment is requested
    pub fn direction(self) -> Option<SpeedStep> {
        match self.0.cmp(&0) {
            Ordering::Greater => Some(SpeedStep::Faster),
            Ordering::Less => Some(SpeedStep::Slower),
            Ordering::Equal => None,
        }
    }
}

impl TryFrom<i8> for SpeedAdjust {
    type Error = Error;

    fn try_from(value: i8) -> Result<Self> {
        Self::new(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mode_range() {
        assert_eq!(Mode::new(9).unwrap().value(), 9);
        assert!(Mode::new(10).is_err());
    }

    #[test]
    fn test_speed_adjust_range() {
        assert!(SpeedAdjust::new(-10).is_ok());
        assert!(SpeedAdjust::new(10).is_ok());
        assert!(SpeedAdjust::new(-11).is_err());
        assert!(SpeedAdjust::new(11).is_err());
    }

    #[test]
    fn test_speed_adjust_direction() {
        assert_eq!(SpeedAdjust::new(4).unwrap().direction(), Some(SpeedStep::Faster));
        assert_eq!(SpeedAdjust::new(4).unwrap().steps(), 4);
        assert_eq!(SpeedAdjust::new(-10).unwrap().steps(), 10);
        assert_eq!(SpeedAdjust::new(0).unwrap().direction(), None);
        assert_eq!(SpeedAdjust::new(0).unwrap().steps(), 0);
    }
}
