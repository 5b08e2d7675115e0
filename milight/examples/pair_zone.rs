//! Pairing example
//!
//! Power-cycle the fixture, then run this within a few seconds.

use milight::Bridge;

#[tokio::main]
async fn main() -> milight::Result<()> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    let ip = std::env::var("BRIDGE_IP").unwrap_or_else(|_| "192.168.1.50".to_string());
    let zone: u8 = std::env::args()
        .nth(1)
        .and_then(|z| z.parse().ok())
        .unwrap_or(1);

    let mut bridge = Bridge::new(ip);

    println!("Linking fixture to zone {}...", zone);
    match bridge.rgbww_link(zone).await {
        Ok(()) => println!("✓ Link pulses sent"),
        Err(e) => println!("✗ {} ({:?})", e, e.kind()),
    }

    bridge.close().await?;

    Ok(())
}
