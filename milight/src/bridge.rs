//! High-level bridge interface

use std::time::Duration;

use tracing::{debug, info};

use milight_core::{
    command::{lamp, rgbww, Action, CommandCode},
    Frame, DEFAULT_PORT,
};
use milight_transport::{Transport, UdpTransport};
use milight_types::{
    Brightness, Color, Mode, Saturation, SpeedAdjust, WhiteTemperature, Zone,
};

use crate::config::Config;
use crate::engine::Engine;
use crate::error::Result;

/// MiLight iBox bridge
///
/// Controls the zoned RGBWW fixtures paired with the bridge (`rgbww_*`) and
/// the lamp built into the bridge itself (`lamp_*`). Arguments are validated
/// before anything touches the network.
///
/// # Examples
///
/// ```no_run
/// use milight::Bridge;
///
/// #[tokio::main]
/// async fn main() -> milight::Result<()> {
///     let mut bridge = Bridge::new("192.168.1.50");
///
///     bridge.rgbww_on(2).await?;
///     bridge.rgbww_brightness(75, 2).await?;
///     bridge.lamp_color(0xFF).await?;
///
///     bridge.close().await?;
///     Ok(())
/// }
/// ```
pub struct Bridge {
    engine: Engine,
}

impl Bridge {
    /// Create a bridge client on the default port (5987)
    pub fn new(ip: impl Into<String>) -> Self {
        Self::with_port(ip, DEFAULT_PORT)
    }

    /// Create a bridge client on a specific port
    ///
    /// The local socket binds the same port.
    pub fn with_port(ip: impl Into<String>, port: u16) -> Self {
        Self::with_transport(UdpTransport::new(ip, port), Config::default())
    }

    /// Create a bridge client over any transport
    pub fn with_transport(transport: impl Transport + 'static, config: Config) -> Self {
        Self {
            engine: Engine::new(Box::new(transport), config),
        }
    }

    pub fn engine(&self) -> &Engine {
        &self.engine
    }

    /// Release the socket and forget the session
    pub async fn close(&mut self) -> Result<()> {
        info!("Closing connection to {}", self.engine.remote_addr());
        self.engine.close().await
    }

    /// Send a command given as hex strings
    ///
    /// `action` is one byte (2 hex characters), `command` and `values` three
    /// bytes each (6 hex characters), `zone` 0-4.
    pub async fn send_raw(&mut self, action: &str, command: &str, zone: u8, values: &str) -> Result<()> {
        let frame = Frame::from_hex(action, command, zone, values)?;
        self.engine.execute(&frame).await
    }

    // RGBWW fixtures

    /// Pair the fixture currently in pairing mode with `zone`
    pub async fn rgbww_link(&mut self, zone: u8) -> Result<()> {
        self.pulse(Action::Link, Zone::new(zone)?).await
    }

    /// Unpair the fixture currently in pairing mode from `zone`
    pub async fn rgbww_unlink(&mut self, zone: u8) -> Result<()> {
        self.pulse(Action::Unlink, Zone::new(zone)?).await
    }

    pub async fn rgbww_on(&mut self, zone: u8) -> Result<()> {
        let zone = Zone::new(zone)?;
        self.power_on(rgbww::ON, zone).await
    }

    pub async fn rgbww_off(&mut self, zone: u8) -> Result<()> {
        let zone = Zone::new(zone)?;
        self.command(rgbww::OFF, zone).await
    }

    pub async fn rgbww_night(&mut self, zone: u8) -> Result<()> {
        let zone = Zone::new(zone)?;
        self.command(rgbww::NIGHT, zone).await
    }

    /// Switch to animation mode 0-9
    pub async fn rgbww_mode(&mut self, mode: u8, zone: u8) -> Result<()> {
        let mode = Mode::new(mode)?;
        let zone = Zone::new(zone)?;
        self.command(rgbww::mode(mode), zone).await
    }

    /// Speed the current animation up (positive) or down (negative) by up to 10 steps
    pub async fn rgbww_mode_speed_adjust(&mut self, adjust: i8, zone: u8) -> Result<()> {
        let adjust = SpeedAdjust::new(adjust)?;
        let zone = Zone::new(zone)?;
        self.speed(adjust, zone, rgbww::speed).await
    }

    /// Brightness 0-100
    pub async fn rgbww_brightness(&mut self, brightness: u8, zone: u8) -> Result<()> {
        let brightness = Brightness::new(brightness)?;
        let zone = Zone::new(zone)?;
        self.command(rgbww::brightness(brightness), zone).await
    }

    /// Saturation 0-100
    pub async fn rgbww_saturation(&mut self, saturation: u8, zone: u8) -> Result<()> {
        let saturation = Saturation::new(saturation)?;
        let zone = Zone::new(zone)?;
        self.command(rgbww::saturation(saturation), zone).await
    }

    /// White color temperature 0-100
    pub async fn rgbww_white(&mut self, temperature: u8, zone: u8) -> Result<()> {
        let temperature = WhiteTemperature::new(temperature)?;
        let zone = Zone::new(zone)?;
        self.command(rgbww::white(temperature), zone).await
    }

    /// Color wheel position 0-255
    pub async fn rgbww_color(&mut self, color: u8, zone: u8) -> Result<()> {
        let color = Color::new(color);
        let zone = Zone::new(zone)?;
        let frame = Frame::with_values(Action::Command, rgbww::color(color), zone, color.payload());
        self.engine.execute(&frame).await
    }

    // Bridge lamp

    pub async fn lamp_on(&mut self) -> Result<()> {
        self.power_on(lamp::ON, Zone::ALL).await
    }

    pub async fn lamp_off(&mut self) -> Result<()> {
        self.command(lamp::OFF, Zone::ALL).await
    }

    /// Switch to animation mode 0-9
    pub async fn lamp_mode(&mut self, mode: u8) -> Result<()> {
        let mode = Mode::new(mode)?;
        self.command(lamp::mode(mode), Zone::ALL).await
    }

    /// Speed the current animation up (positive) or down (negative) by up to 10 steps
    pub async fn lamp_mode_speed_adjust(&mut self, adjust: i8) -> Result<()> {
        let adjust = SpeedAdjust::new(adjust)?;
        self.speed(adjust, Zone::ALL, lamp::speed).await
    }

    /// Brightness 0-100
    pub async fn lamp_brightness(&mut self, brightness: u8) -> Result<()> {
        let brightness = Brightness::new(brightness)?;
        self.command(lamp::brightness(brightness), Zone::ALL).await
    }

    /// Switch the lamp to white
    ///
    /// The lamp has a single white setting; unlike the RGBWW fixtures it
    /// takes no color temperature.
    pub async fn lamp_white(&mut self) -> Result<()> {
        self.command(lamp::WHITE, Zone::ALL).await
    }

    /// Color wheel position 0-255
    pub async fn lamp_color(&mut self, color: u8) -> Result<()> {
        let color = Color::new(color);
        let frame = Frame::with_values(Action::Command, lamp::color(color), Zone::ALL, color.payload());
        self.engine.execute(&frame).await
    }

    // Helper methods

    async fn command(&mut self, command: CommandCode, zone: Zone) -> Result<()> {
        let frame = Frame::new(Action::Command, command, zone);
        self.engine.execute(&frame).await
    }

    /// Power-on commands need extra time before the next send while the
    /// fixture wakes up, whatever the outcome
    async fn power_on(&mut self, command: CommandCode, zone: Zone) -> Result<()> {
        let result = self.command(command, zone).await;
        let delay = self.engine.config().wakeup_delay;
        self.engine.delay_next_send(delay);
        result
    }

    async fn speed(
        &mut self,
        adjust: SpeedAdjust,
        zone: Zone,
        code: fn(milight_types::SpeedStep) -> CommandCode,
    ) -> Result<()> {
        let Some(step) = adjust.direction() else {
            return Ok(());
        };

        for _ in 0..adjust.steps() {
            self.command(code(step), zone).await?;
        }

        Ok(())
    }

    /// Fixtures only pair after seeing the request several times in a row
    async fn pulse(&mut self, action: Action, zone: Zone) -> Result<()> {
        let pulses = self.engine.config().link_pulses;
        let interval: Duration = self.engine.config().link_interval;
        let frame = Frame::new(action, rgbww::LINK_UNLINK, zone);

        for pulse in 1..=pulses {
            debug!("{} pulse {}/{} for {}", action, pulse, pulses, zone);
            self.engine.execute(&frame).await?;
            tokio::time::sleep(interval).await;
        }

        Ok(())
    }
}
