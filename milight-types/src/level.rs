//! Percentage levels: brightness, saturation and white temperature

use crate::error::{Error, Result};

macro_rules! percent_type {
    ($(#[$meta:meta])* $name:ident, $label:literal) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub struct $name(u8);

        impl $name {
            pub const MIN: u8 = 0;
            pub const MAX: u8 = 100;

            pub fn new(value: u8) -> Result<Self> {
                if value > Self::MAX {
                    return Err(Error::out_of_range(
                        $label,
                        value,
                        Self::MIN.into(),
                        Self::MAX.into(),
                    ));
                }
                Ok(Self(value))
            }

            pub fn value(self) -> u8 {
                self.0
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self(Self::MAX)
            }
        }

        impl TryFrom<u8> for $name {
            type Error = Error;

            fn try_from(value: u8) -> Result<Self> {
                Self::new(value)
            }
        }
    };
}

percent_type!(
    /// Brightness from 0 to 100 percent.
    ///
    /// ```
    /// use milight_types::Brightness;
    ///
    /// assert_eq!(Brightness::new(75).unwrap().value(), 75);
    /// assert!(Brightness::new(150).is_err());
    /// ```
    Brightness,
    "Brightness"
);

percent_type!(
    /// Color saturation from 0 to 100 percent.
    Saturation,
    "Saturation"
);

percent_type!(
    /// White color temperature, 0 (warm) to 100 (cool).
    WhiteTemperature,
    "Colour temperature"
);
