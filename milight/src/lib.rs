//! # milight
//!
//! Rust driver for MiLight iBox bridges (the v6 UDP protocol).
//!
//! ## Features
//!
//! - Session handling with automatic renewal
//! - Acknowledged delivery with bounded retries over UDP
//! - Send pacing so the bridge never drops a command
//! - Zoned RGBWW fixtures and the bridge's own lamp
//!
//! ## Quick Start
//!
//! ```no_run
//! use milight::Bridge;
//!
//! #[tokio::main]
//! async fn main() -> milight::Result<()> {
//!     let mut bridge = Bridge::new("192.168.1.50");
//!
//!     // Zone 2 on, 75% brightness
//!     bridge.rgbww_on(2).await?;
//!     bridge.rgbww_brightness(75, 2).await?;
//!
//!     bridge.close().await?;
//!
//!     Ok(())
//! }
//! ```

pub mod bridge;
pub mod config;
pub mod engine;
pub mod error;

#[cfg(test)]
mod testing;

// Re-exports
pub use bridge::Bridge;
pub use config::Config;
pub use engine::Engine;
pub use error::{Error, ErrorKind, Result};

// Re-export protocol types
pub use milight_core::{Action, CommandCode, Frame, Session};
pub use milight_transport::{Transport, UdpTransport};
pub use milight_types::{Brightness, Color, Mode, Saturation, SpeedAdjust, WhiteTemperature, Zone};
