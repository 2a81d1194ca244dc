//! Async facade example: drive the browser from an async runtime.

use pagesnap::{file_uri, Browser};
use std::path::Path;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let browser = Browser::new(None).await?;
    let page = browser.new_page().await?;

    let uri = file_uri(Path::new("index.html"))?;
    page.goto(uri.as_str()).await?;

    // Give the page a moment to settle before rasterizing
    page.settle(2000).await;

    let png = page.snapshot(Some(Path::new("verification.png"))).await?;
    println!("Captured {} bytes to verification.png", png.len());

    browser.close().await?;
    Ok(())
}
