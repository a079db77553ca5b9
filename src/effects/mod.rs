//! Side-effect capabilities
//!
//! The interpreter never opens links or writes files itself. It asks a
//! `LinkOpener` or a `FileDownloader`, so tests can swap in recorders and
//! `--dry-run` can swap in loggers.

pub mod system;

use crate::error::Result;
use tracing::info;

pub use system::{LocalFileDownloader, SystemLinkOpener};

/// Opens a URL in a new browsing context
pub trait LinkOpener {
    /// Open `url`
    fn open_link(&self, url: &str) -> Result<()>;
}

/// Delivers a downloadable resource to the user
pub trait FileDownloader {
    /// Save `resource` under `file_name`
    fn download(&self, resource: &str, file_name: &str) -> Result<()>;
}

/// Backend that only logs what it was asked to do
#[derive(Debug, Clone, Copy, Default)]
pub struct DryRunEffects;

impl LinkOpener for DryRunEffects {
    fn open_link(&self, url: &str) -> Result<()> {
        info!(url, "dry run: would open link");
        Ok(())
    }
}

impl FileDownloader for DryRunEffects {
    fn download(&self, resource: &str, file_name: &str) -> Result<()> {
        info!(resource, file_name, "dry run: would download file");
        Ok(())
    }
}
