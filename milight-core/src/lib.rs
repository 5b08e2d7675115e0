//! # milight-core
//!
//! Core protocol implementation for MiLight iBox bridges.
//!
//! This crate provides the low-level protocol primitives:
//! - Hex encoding and checksum calculation
//! - Action and command codes for RGBWW fixtures and the bridge lamp
//! - Command frame and request encoding
//! - Session parsing and serial numbering
//! - Protocol constants

pub mod codec;
pub mod command;
pub mod constants;
pub mod error;
pub mod frame;
pub mod session;

pub use command::{Action, CommandCode};
pub use error::{Error, Result};
pub use frame::{ack_marker, Frame, Request};
pub use session::Session;

/// Default bridge port
pub const DEFAULT_PORT: u16 = constants::DEFAULT_PORT;
