use crate::{cdp, BrowsingContext, CaptureConfig, Error, Result, Runtime};
use std::path::{Path, PathBuf};
use std::sync::mpsc::{self, Sender};
use std::thread;
use std::time::Duration;
use tokio::sync::oneshot;

enum Command {
    Goto(String, oneshot::Sender<Result<()>>),
    Settle(u64, oneshot::Sender<()>),
    Snapshot(Option<PathBuf>, oneshot::Sender<Result<Vec<u8>>>),
    Close(oneshot::Sender<Result<()>>),
}

/// An async-friendly browser abstraction backed by a dedicated worker thread.
///
/// The worker thread owns a synchronous CDP browsing context and executes
/// commands sent from async tasks so callers can use an async interface
/// without requiring the context to be `Send` across threads.
#[derive(Clone)]
pub struct Browser {
    cmd_tx: Sender<Command>,
}

/// A handle representing the page in the browser.
#[derive(Clone)]
pub struct Page {
    cmd_tx: Sender<Command>,
}

impl Browser {
    /// Create a new browser (spawns a background thread that owns the context).
    pub async fn new(config: Option<CaptureConfig>) -> Result<Self> {
        let config = config.unwrap_or_default();

        let (cmd_tx, cmd_rx) = mpsc::channel::<Command>();
        let (init_tx, init_rx): (oneshot::Sender<Result<()>>, oneshot::Receiver<Result<()>>) =
            oneshot::channel();

        thread::spawn(move || {
            // Open the browsing context on the worker thread
            let runtime = cdp::CdpRuntime::new();
            let mut ctx = match runtime.open_context(&config) {
                Ok(c) => c,
                Err(err) => {
                    let _ = init_tx.send(Err(err));
                    return;
                }
            };

            // Signal successful creation
            let _ = init_tx.send(Ok(()));

            // Command loop
            while let Ok(cmd) = cmd_rx.recv() {
                match cmd {
                    Command::Goto(url, resp) => {
                        let res = ctx.navigate(&url);
                        let _ = resp.send(res);
                    }
                    Command::Settle(ms, resp) => {
                        ctx.settle(Duration::from_millis(ms));
                        let _ = resp.send(());
                    }
                    Command::Snapshot(path_opt, resp) => {
                        let res = ctx.capture_png();
                        // If a path is provided, also persist the bytes
                        let res = match (res, path_opt) {
                            (Ok(data), Some(path)) => {
                                match crate::capture::write_atomic(&path, &data) {
                                    Ok(()) => Ok(data),
                                    Err(e) => Err(e),
                                }
                            }
                            (res, _) => res,
                        };
                        let _ = resp.send(res);
                    }
                    Command::Close(resp) => {
                        let res = ctx.close();
                        let _ = resp.send(res);
                        break;
                    }
                }
            }
        });

        // Wait for the worker to report initialization success or failure
        let init_res = init_rx
            .await
            .map_err(|e| Error::RuntimeUnavailable(format!("Worker init canceled: {}", e)))?;
        init_res?;

        Ok(Self { cmd_tx })
    }

    /// Open a page handle backed by the same worker thread.
    pub async fn new_page(&self) -> Result<Page> {
        Ok(Page {
            cmd_tx: self.cmd_tx.clone(),
        })
    }

    /// Shutdown the background worker and close the browser.
    pub async fn close(self) -> Result<()> {
        let (tx, rx) = oneshot::channel();
        let _ = self.cmd_tx.send(Command::Close(tx));
        rx.await
            .map_err(|e| Error::RuntimeUnavailable(format!("Close canceled: {}", e)))?
    }
}

impl Page {
    /// Navigate to a URL
    pub async fn goto(&self, url: &str) -> Result<()> {
        let (tx, rx) = oneshot::channel();
        let _ = self.cmd_tx.send(Command::Goto(url.to_string(), tx));
        rx.await
            .map_err(|e| Error::RuntimeUnavailable(format!("Goto canceled: {}", e)))?
    }

    /// Suspend the page for the given number of milliseconds.
    ///
    /// The wait happens on the worker thread; the async caller is not blocked.
    pub async fn settle(&self, delay_ms: u64) {
        let (tx, rx) = oneshot::channel();
        let _ = self.cmd_tx.send(Command::Settle(delay_ms, tx));
        let _ = rx.await;
    }

    /// Take a snapshot; if `path` is Some, the bytes are also written to that
    /// path atomically.
    pub async fn snapshot(&self, path: Option<&Path>) -> Result<Vec<u8>> {
        let (tx, rx) = oneshot::channel();
        let path_opt = path.map(|p| p.to_path_buf());
        let _ = self.cmd_tx.send(Command::Snapshot(path_opt, tx));
        rx.await
            .map_err(|e| Error::RuntimeUnavailable(format!("Snapshot canceled: {}", e)))?
    }
}
