//! Opening the flight search app in a new browser tab

use crate::error::ActionResult;

/// Something that can open a URL in a new browsing context.
///
/// A successful return only means the request was handed to the host. There
/// is no handshake with whatever ends up being opened.
pub trait BrowserLauncher: Send + Sync {
    fn open(&self, url: &str) -> ActionResult<()>;
}

/// Launcher backed by the platform's default browser
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemBrowser;

impl BrowserLauncher for SystemBrowser {
    fn open(&self, url: &str) -> ActionResult<()> {
        tracing::info!("Requesting browser tab for {}", url);
        webbrowser::open(url)?;
        Ok(())
    }
}
