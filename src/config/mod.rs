//! Configuration module
//!
//! This module loads the profile and catalogs and wires them, together with
//! the chosen side-effect backends, into an `Interpreter`.

pub mod storage;

pub use storage::{Config, Profile};

use crate::cli::interpreter::Interpreter;
use crate::effects::{DryRunEffects, LocalFileDownloader, SystemLinkOpener};
use crate::error::Result;

/// Which side-effect backends to use
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EffectsMode {
    /// Really open links and copy files
    System,
    /// Only log what would happen
    DryRun,
}

/// Build an interpreter from a loaded configuration
pub fn build_interpreter(config: &Config, mode: EffectsMode) -> Result<Interpreter> {
    let projects = config.project_catalog()?;
    let posts = config.post_catalog()?;

    let interpreter = match mode {
        EffectsMode::System => Interpreter::new(
            config.profile.clone(),
            projects,
            posts,
            Box::new(SystemLinkOpener::default()),
            Box::new(LocalFileDownloader::to_download_dir(&config.assets_dir)),
        ),
        EffectsMode::DryRun => Interpreter::new(
            config.profile.clone(),
            projects,
            posts,
            Box::new(DryRunEffects),
            Box::new(DryRunEffects),
        ),
    };

    Ok(interpreter)
}
