//! Basic example: capture one snapshot of a local document with the default
//! CDP runtime.

use pagesnap::{capture, CaptureConfig, Viewport};
use std::path::Path;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let config = CaptureConfig {
        viewport: Viewport {
            width: 1280,
            height: 720,
        },
        settle_delay_ms: 2000,
        ..Default::default()
    };

    println!("Capturing index.html at {}x{}...", config.viewport.width, config.viewport.height);
    capture(&config, Path::new("index.html"), Path::new("verification.png"))?;
    println!("Snapshot saved to: verification.png");

    Ok(())
}
