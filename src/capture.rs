//! The snapshot capturer
//!
//! A linear open -> navigate -> settle -> capture -> close pipeline over a
//! browsing context. The context is released on every exit path, and the
//! output image is written atomically so a failure never leaves a partial
//! file behind.

use crate::{BrowsingContext, CaptureConfig, Error, Result, Runtime};
use log::info;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;
use url::Url;

/// Resolve a local document path to an absolute file-scheme URI.
///
/// Relative paths are ambiguous once handed to a browsing context that may not
/// share this process's working directory, so the path is canonicalized first.
/// The path must exist and be readable.
pub fn file_uri(input: &Path) -> Result<Url> {
    let abs = fs::canonicalize(input).map_err(|source| Error::PathResolution {
        path: input.to_path_buf(),
        source,
    })?;

    Url::from_file_path(&abs).map_err(|_| Error::PathResolution {
        path: input.to_path_buf(),
        source: std::io::Error::new(
            std::io::ErrorKind::InvalidInput,
            "path is not representable as a file URI",
        ),
    })
}

/// Capture one snapshot of `input` into `output` using the default CDP runtime.
#[cfg(feature = "cdp")]
pub fn capture(config: &CaptureConfig, input: &Path, output: &Path) -> Result<()> {
    capture_with(&crate::cdp::CdpRuntime::new(), config, input, output)
}

/// Capture one snapshot of `input` into `output` using the given runtime.
///
/// Exactly one browsing context is opened and it is closed unconditionally,
/// even when navigation or the output write fails. The input path is resolved
/// before any context is acquired, so a `PathResolution` error opens nothing.
pub fn capture_with<R: Runtime>(
    runtime: &R,
    config: &CaptureConfig,
    input: &Path,
    output: &Path,
) -> Result<()> {
    let uri = file_uri(input)?;

    let mut ctx = runtime.open_context(config)?;

    // Drive the page and keep the first failure; close happens regardless of
    // which step failed.
    let driven = drive(&mut ctx, uri.as_str(), config, output);
    let closed = ctx.close();

    driven?;
    closed
}

fn drive<C: BrowsingContext>(
    ctx: &mut C,
    uri: &str,
    config: &CaptureConfig,
    output: &Path,
) -> Result<()> {
    info!("navigating to {}", uri);
    ctx.navigate(uri)?;

    ctx.settle(Duration::from_millis(config.settle_delay_ms));

    let png = ctx.capture_png()?;
    write_atomic(output, &png)?;
    info!("wrote {} bytes to {}", png.len(), output.display());

    Ok(())
}

/// Write `bytes` to `path` via a temporary sibling file and a rename, so an
/// interrupted or failed write never leaves a partial image at `path`.
pub(crate) fn write_atomic(path: &Path, bytes: &[u8]) -> Result<()> {
    let tmp = tmp_sibling(path);

    let written = fs::write(&tmp, bytes).and_then(|_| fs::rename(&tmp, path));
    if let Err(source) = written {
        let _ = fs::remove_file(&tmp);
        return Err(Error::CaptureWrite {
            path: path.to_path_buf(),
            source,
        });
    }

    Ok(())
}

fn tmp_sibling(path: &Path) -> PathBuf {
    let mut name = path
        .file_name()
        .map(|n| n.to_os_string())
        .unwrap_or_else(|| "capture".into());
    name.push(".tmp");
    path.with_file_name(name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn file_uri_for_existing_file() {
        let dir = tempfile::tempdir().unwrap();
        let doc = dir.path().join("index.html");
        fs::write(&doc, "<!DOCTYPE html><title>t</title>").unwrap();

        let uri = file_uri(&doc).unwrap();
        assert_eq!(uri.scheme(), "file");
        assert!(uri.path().ends_with("index.html"));
    }

    #[test]
    fn file_uri_missing_file_is_path_resolution() {
        let err = file_uri(Path::new("definitely/not/here.html")).unwrap_err();
        assert!(matches!(err, Error::PathResolution { .. }));
    }

    #[test]
    fn write_atomic_places_bytes() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("out.png");

        write_atomic(&out, b"bytes").unwrap();
        assert_eq!(fs::read(&out).unwrap(), b"bytes");
        // No temp file left behind
        assert!(!tmp_sibling(&out).exists());
    }

    #[test]
    fn write_atomic_missing_parent_is_capture_write() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("no-such-dir").join("out.png");

        let err = write_atomic(&out, b"bytes").unwrap_err();
        assert!(matches!(err, Error::CaptureWrite { .. }));
        assert!(!out.exists());
    }

    #[test]
    fn tmp_sibling_keeps_directory() {
        let tmp = tmp_sibling(Path::new("a/b/out.png"));
        assert_eq!(tmp, Path::new("a/b/out.png.tmp"));
    }
}
