//! Validated value types for milight

pub mod color;
pub mod error;
pub mod level;
pub mod mode;
pub mod zone;

pub use color::Color;
pub use error::{Error, Result};
pub use level::{Brightness, Saturation, WhiteTemperature};
pub use mode::{Mode, SpeedAdjust, SpeedStep};
pub use zone::Zone;
