//! Native side-effect backends
//!
//! `SystemLinkOpener` hands URLs to the desktop's opener program.
//! `LocalFileDownloader` copies a bundled asset into the download directory.

use crate::effects::{FileDownloader, LinkOpener};
use crate::error::{Result, TerminalError};
use std::fs;
use std::path::PathBuf;
use std::process::{Command, Stdio};
use std::thread;
use tracing::{debug, info};

/// Opens links with the platform's opener program
///
/// `xdg-open` on Linux and BSD, `open` on macOS, and
/// `rundll32 url.dll,FileProtocolHandler` on Windows, which takes the URL as
/// a plain argument instead of a `cmd` command line.
#[derive(Debug, Clone)]
pub struct SystemLinkOpener {
    /// Program to run
    program: PathBuf,
    /// Arguments placed before the URL
    args: Vec<String>,
}

impl Default for SystemLinkOpener {
    fn default() -> Self {
        #[cfg(target_os = "windows")]
        let opener = Self::with_program("rundll32", ["url.dll,FileProtocolHandler"]);

        #[cfg(target_os = "macos")]
        let opener = Self::with_program("open", [] as [&str; 0]);

        #[cfg(not(any(target_os = "windows", target_os = "macos")))]
        let opener = Self::with_program("xdg-open", [] as [&str; 0]);

        opener
    }
}

impl SystemLinkOpener {
    /// Use `program`, called as `program <args..> <url>`
    pub fn with_program<I, S>(program: impl Into<PathBuf>, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            program: program.into(),
            args: args.into_iter().map(Into::into).collect(),
        }
    }
}

impl LinkOpener for SystemLinkOpener {
    fn open_link(&self, url: &str) -> Result<()> {
        // Opener output would land in the middle of the prompt.
        let mut child = Command::new(&self.program)
            .args(&self.args)
            .arg(url)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()
            .map_err(|e| TerminalError::effect("open link", e))?;

        let pid = child.id();
        info!(url, pid, "opened link");

        thread::spawn(move || match child.wait() {
            Ok(status) => debug!(pid, %status, "opener exited"),
            Err(e) => debug!(pid, error = %e, "could not wait for opener"),
        });
        Ok(())
    }
}

/// Copies assets from a local directory into a download directory
#[derive(Debug, Clone)]
pub struct LocalFileDownloader {
    /// Where resources are looked up
    assets_dir: PathBuf,
    /// Where downloaded files land
    target_dir: PathBuf,
}

impl LocalFileDownloader {
    /// Create a downloader reading from `assets_dir` and writing to `target_dir`
    pub fn new(assets_dir: impl Into<PathBuf>, target_dir: impl Into<PathBuf>) -> Self {
        Self {
            assets_dir: assets_dir.into(),
            target_dir: target_dir.into(),
        }
    }

    /// Create a downloader writing to the user's download directory
    ///
    /// Falls back to the current directory when the platform has none.
    pub fn to_download_dir(assets_dir: impl Into<PathBuf>) -> Self {
        let target_dir = dirs::download_dir().unwrap_or_else(|| PathBuf::from("."));
        Self::new(assets_dir, target_dir)
    }

    /// Path a resource is read from
    ///
    /// Resource paths are site-absolute (`/resume.pdf`), so the leading
    /// slash is dropped before joining.
    pub fn source_path(&self, resource: &str) -> PathBuf {
        self.assets_dir.join(resource.trim_start_matches('/'))
    }

    /// Path a downloaded file is written to
    pub fn target_path(&self, file_name: &str) -> PathBuf {
        self.target_dir.join(file_name)
    }
}

impl FileDownloader for LocalFileDownloader {
    fn download(&self, resource: &str, file_name: &str) -> Result<()> {
        let source = self.source_path(resource);
        let target = self.target_path(file_name);

        fs::create_dir_all(&self.target_dir)
            .map_err(|e| TerminalError::effect("download", e))?;
        let bytes = fs::copy(&source, &target).map_err(|e| {
            TerminalError::effect("download", format!("{}: {}", source.display(), e))
        })?;

        info!(
            source = %source.display(),
            target = %target.display(),
            bytes,
            "downloaded file"
        );
        Ok(())
    }
}
