//! Error types for the snapshot capturer

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for capture operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while capturing a snapshot
#[derive(Error, Debug)]
pub enum Error {
    /// The input path could not be resolved to a loadable file URI
    #[error("Failed to resolve input path {path:?}: {source}")]
    PathResolution {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The browsing context failed to load the target document
    #[error("Navigation failed: {0}")]
    Navigation(String),

    /// The captured image could not be written to disk
    #[error("Failed to write capture to {path:?}: {source}")]
    CaptureWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The browser runtime could not be launched
    #[error("Browser runtime unavailable: {0}")]
    RuntimeUnavailable(String),

    /// The runtime failed to rasterize the page
    #[error("Capture failed: {0}")]
    Capture(String),

    /// Operation timed out
    #[error("Operation timed out after {0}ms")]
    Timeout(u64),
}

#[cfg(feature = "cdp")]
impl From<anyhow::Error> for Error {
    fn from(err: anyhow::Error) -> Self {
        Error::RuntimeUnavailable(err.to_string())
    }
}
