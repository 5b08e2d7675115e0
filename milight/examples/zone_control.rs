//! Zone control example

use std::time::Duration;
use tokio::time::sleep;
use tracing_subscriber::EnvFilter;
use milight::Bridge;

#[tokio::main]
async fn main() -> milight::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    // Change to your bridge IP
    let ip = std::env::var("BRIDGE_IP").unwrap_or_else(|_| "192.168.1.50".to_string());
    let zone = 1;

    let mut bridge = Bridge::new(ip);

    println!("Switching zone {} on...", zone);
    bridge.rgbww_on(zone).await?;

    println!("Cycling colors...");
    for color in (0..=255u8).step_by(32) {
        bridge.rgbww_color(color, zone).await?;
        sleep(Duration::from_millis(500)).await;
    }

    println!("Warm white at 40%...");
    bridge.rgbww_white(0, zone).await?;
    bridge.rgbww_brightness(40, zone).await?;

    println!("Mode 3, a bit faster...");
    bridge.rgbww_mode(3, zone).await?;
    bridge.rgbww_mode_speed_adjust(2, zone).await?;
    sleep(Duration::from_secs(3)).await;

    bridge.rgbww_off(zone).await?;
    println!("Done!");

    bridge.close().await?;

    Ok(())
}
