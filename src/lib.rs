//! pagesnap
//!
//! Capture a deterministic visual snapshot of a local HTML document: render it
//! in an isolated, disposable browsing context and persist one raster image of
//! its rendered state.
//!
//! # Features
//!
//! - **CDP Backend** (default): drives headless Chrome via the Chrome DevTools
//!   Protocol
//! - **Swappable runtimes**: the capture pipeline is written against a small
//!   trait seam, so tests can substitute an in-process mock
//! - **Guaranteed cleanup**: the browsing context is released on every exit
//!   path, success or failure
//!
//! # Example
//!
//! ```no_run
//! use pagesnap::{capture, CaptureConfig, Viewport};
//! use std::path::Path;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = CaptureConfig {
//!     viewport: Viewport { width: 1280, height: 720 },
//!     settle_delay_ms: 2000,
//!     ..Default::default()
//! };
//!
//! capture(&config, Path::new("index.html"), Path::new("verification.png"))?;
//! # Ok(())
//! # }
//! ```

use std::time::Duration;

pub mod error;
pub use error::{Error, Result};

pub mod capture;
pub use capture::{capture_with, file_uri};

#[cfg(feature = "cdp")]
pub use capture::capture;

#[cfg(feature = "cdp")]
pub mod cdp;

// Async-friendly facade over the CDP backend (worker-thread abstraction)
#[cfg(feature = "cdp")]
pub mod async_api;

// Re-export the Browser type at the crate root for ergonomic examples
#[cfg(feature = "cdp")]
pub use async_api::Browser;

/// Configuration for a snapshot capture
///
/// The defaults mirror the behavior the capturer is meant to reproduce: a
/// 1280x720 viewport and a two-second settle delay between navigation and
/// capture.
///
/// # Examples
///
/// ```
/// let cfg = pagesnap::CaptureConfig::default();
/// assert_eq!(cfg.settle_delay_ms, 2000);
/// ```
#[derive(Debug, Clone)]
pub struct CaptureConfig {
    /// Viewport dimensions of the browsing context
    pub viewport: Viewport,
    /// Fixed wait between navigation and capture, in milliseconds.
    ///
    /// This is a heuristic that gives script-driven layout a chance to finish,
    /// not a guarantee of render completion.
    pub settle_delay_ms: u64,
    /// Timeout for navigation in milliseconds
    pub timeout_ms: u64,
}

impl Default for CaptureConfig {
    fn default() -> Self {
        Self {
            viewport: Viewport::default(),
            settle_delay_ms: 2000,
            timeout_ms: 30000,
        }
    }
}

/// Viewport dimensions
#[derive(Debug, Clone, Copy)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
}

impl Default for Viewport {
    fn default() -> Self {
        Self {
            width: 1280,
            height: 720,
        }
    }
}

/// Provider of isolated browsing contexts
///
/// The production implementation launches a headless browser; tests implement
/// this trait with in-process mocks to observe the capture pipeline.
pub trait Runtime {
    /// The browsing context type this runtime hands out
    type Context: BrowsingContext;

    /// Acquire a fresh, isolated browsing context sized to the configured
    /// viewport. Fails with `Error::RuntimeUnavailable` when the underlying
    /// runtime cannot be launched.
    fn open_context(&self, config: &CaptureConfig) -> Result<Self::Context>;
}

/// One isolated, disposable rendering environment holding a single page
///
/// A context is acquired from a [`Runtime`], driven through the linear
/// navigate/settle/capture sequence, and must be released with
/// [`BrowsingContext::close`] exactly once on every exit path.
pub trait BrowsingContext {
    /// Navigate the page to a URI and wait until the document has loaded
    fn navigate(&mut self, url: &str) -> Result<()>;

    /// Suspend unconditionally for the given duration.
    ///
    /// There is no early-wake condition. The default implementation blocks the
    /// calling thread; mocks override this to record the delay instead.
    fn settle(&mut self, delay: Duration) {
        std::thread::sleep(delay);
    }

    /// Rasterize the current visual state of the page as PNG bytes
    fn capture_png(&self) -> Result<Vec<u8>>;

    /// Release the context and clean up resources
    fn close(self) -> Result<()>;
}
