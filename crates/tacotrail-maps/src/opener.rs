// Seam for "hand this URL to the OS"
//
// Kept as a trait so presenters and tests never actually launch a
// browser. Failure to open is surfaced to the caller; the URL itself is
// always well-formed by the time it gets here.
use tracing::debug;

#[cfg_attr(test, mockall::automock)]
pub trait UrlOpener: Send + Sync {
    fn open(&self, url: &str) -> anyhow::Result<()>;
}

/// Opens URLs with whatever the OS considers the right application
pub struct SystemOpener;

impl UrlOpener for SystemOpener {
    fn open(&self, url: &str) -> anyhow::Result<()> {
        debug!("Opening external URL: {}", url);
        open::that(url)?;
        Ok(())
    }
}
