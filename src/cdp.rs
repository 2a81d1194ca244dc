//! Chrome DevTools Protocol runtime implementation
//!
//! Launches a headless Chrome instance per browsing context (uses the
//! `headless_chrome` crate) and manages a single tab inside it.

use crate::{BrowsingContext, CaptureConfig, Error, Result, Runtime};
use headless_chrome::browser::tab::Tab;
use headless_chrome::protocol::cdp::Page;
use headless_chrome::{Browser, LaunchOptions};
use std::sync::Arc;
use std::time::Duration;

/// CDP-backed runtime: each [`Runtime::open_context`] call launches a fresh
/// headless Chrome sized to the configured viewport.
pub struct CdpRuntime;

impl CdpRuntime {
    pub fn new() -> Self {
        CdpRuntime
    }
}

impl Default for CdpRuntime {
    fn default() -> Self {
        Self::new()
    }
}

impl Runtime for CdpRuntime {
    type Context = CdpContext;

    fn open_context(&self, config: &CaptureConfig) -> Result<CdpContext> {
        // Configure headless Chrome launch options
        let launch_options = LaunchOptions::default_builder()
            .headless(true)
            .window_size(Some((config.viewport.width, config.viewport.height)))
            .build()
            .map_err(|e| {
                Error::RuntimeUnavailable(format!("Failed to build launch options: {}", e))
            })?;

        // Launch the browser
        let browser = Browser::new(launch_options)
            .map_err(|e| Error::RuntimeUnavailable(format!("Failed to launch browser: {}", e)))?;

        // Open the single tab this context owns
        let tab = browser
            .new_tab()
            .map_err(|e| Error::RuntimeUnavailable(format!("Failed to create tab: {}", e)))?;

        tab.set_default_timeout(Duration::from_millis(config.timeout_ms));

        Ok(CdpContext { browser, tab })
    }
}

/// An isolated browsing context backed by one headless Chrome instance with a
/// single tab.
pub struct CdpContext {
    browser: Browser,
    tab: Arc<Tab>,
}

impl BrowsingContext for CdpContext {
    fn navigate(&mut self, url: &str) -> Result<()> {
        self.tab
            .navigate_to(url)
            .map_err(|e| Error::Navigation(format!("Navigation failed: {}", e)))?;

        self.tab
            .wait_until_navigated()
            .map_err(|e| Error::Navigation(format!("Wait for navigation failed: {}", e)))?;

        Ok(())
    }

    fn capture_png(&self) -> Result<Vec<u8>> {
        let screenshot_data = self
            .tab
            .capture_screenshot(Page::CaptureScreenshotFormatOption::Png, None, None, true)
            .map_err(|e| Error::Capture(format!("Screenshot failed: {}", e)))?;

        Ok(screenshot_data)
    }

    fn close(self) -> Result<()> {
        // Drop the tab and browser explicitly so the child process is
        // terminated promptly.
        drop(self.tab);
        drop(self.browser);
        Ok(())
    }
}
