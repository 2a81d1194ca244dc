//! Command-line entry point: capture one raster snapshot of a local HTML
//! document and exit.

use clap::Parser;
use pagesnap::{capture, CaptureConfig, Viewport};
use std::path::PathBuf;
use std::process::ExitCode;

/// Capture a raster snapshot of a local HTML document
#[derive(Parser, Debug)]
#[command(name = "pagesnap", version, about)]
struct Args {
    /// Path to the HTML document to render
    #[arg(default_value = "index.html")]
    input: PathBuf,

    /// Where to write the PNG snapshot
    #[arg(short, long, default_value = "verification.png")]
    output: PathBuf,

    /// Delay between navigation and capture, in milliseconds
    #[arg(long, default_value_t = 2000)]
    settle_delay_ms: u64,

    /// Viewport width in pixels
    #[arg(long, default_value_t = 1280)]
    width: u32,

    /// Viewport height in pixels
    #[arg(long, default_value_t = 720)]
    height: u32,

    /// Navigation timeout in milliseconds
    #[arg(long, default_value_t = 30000)]
    timeout_ms: u64,
}

fn main() -> ExitCode {
    env_logger::init();

    let args = Args::parse();

    let config = CaptureConfig {
        viewport: Viewport {
            width: args.width,
            height: args.height,
        },
        settle_delay_ms: args.settle_delay_ms,
        timeout_ms: args.timeout_ms,
    };

    match capture(&config, &args.input, &args.output) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("pagesnap: {}", e);
            ExitCode::FAILURE
        }
    }
}
