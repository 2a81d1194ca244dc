//! Integration tests against a real headless Chrome
//!
//! Ignored by default because they require Chrome to be installed.

#![cfg(feature = "cdp")]

use pagesnap::{capture, CaptureConfig, Viewport};
use std::fs;
use std::path::{Path, PathBuf};

const PNG_MAGIC: &[u8] = b"\x89PNG\r\n\x1a\n";

fn write_document(dir: &Path) -> PathBuf {
    let doc = dir.join("index.html");
    fs::write(
        &doc,
        r#"<!DOCTYPE html>
<html>
<head>
<title>Zoom check</title>
<style>.zoomed { transform: scale(2); transform-origin: top left; width: 120px; height: 120px; background: #3a7; }</style>
</head>
<body>
<div class="zoomed"></div>
<script>
  // Script-driven layout change that a plain load event would not wait for
  setTimeout(function () {
    document.querySelector('.zoomed').style.background = '#73a';
  }, 100);
</script>
</body>
</html>"#,
    )
    .expect("Failed to write test document");
    doc
}

#[test]
#[ignore] // Requires Chrome to be installed
fn test_capture_local_document() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_document(dir.path());
    let output = dir.path().join("out.png");

    let config = CaptureConfig {
        viewport: Viewport {
            width: 1280,
            height: 720,
        },
        settle_delay_ms: 2000,
        ..Default::default()
    };

    capture(&config, &input, &output).expect("Failed to capture snapshot");

    let data = fs::read(&output).expect("Output file should exist");
    assert!(data.len() > 100, "PNG data seems too small");
    assert_eq!(&data[0..8], PNG_MAGIC);
}

#[test]
#[ignore] // Requires Chrome to be installed
fn test_capture_overwrites_previous_snapshot() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_document(dir.path());
    let output = dir.path().join("out.png");

    let config = CaptureConfig {
        settle_delay_ms: 500,
        ..Default::default()
    };

    capture(&config, &input, &output).expect("First capture failed");
    capture(&config, &input, &output).expect("Second capture failed");

    let data = fs::read(&output).unwrap();
    assert_eq!(&data[0..8], PNG_MAGIC);
}

#[tokio::test]
#[ignore] // Requires Chrome to be installed
async fn test_async_facade_snapshot() {
    use pagesnap::Browser;

    let dir = tempfile::tempdir().unwrap();
    let input = write_document(dir.path());
    let output = dir.path().join("out.png");

    let browser = Browser::new(None).await.expect("Failed to launch browser");
    let page = browser.new_page().await.expect("Failed to open page");

    let uri = pagesnap::file_uri(&input).expect("Failed to build file URI");
    page.goto(uri.as_str()).await.expect("Navigation failed");
    page.settle(2000).await;

    let png = page
        .snapshot(Some(&output))
        .await
        .expect("Snapshot failed");
    assert_eq!(&png[0..8], PNG_MAGIC);
    assert!(output.exists());

    browser.close().await.expect("Close failed");
}
