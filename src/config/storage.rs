//! Configuration Storage
//!
//! Reads the optional TOML config file. Every field has a default, so an
//! empty or partial file is valid and a missing file means "use defaults".

use crate::catalog::{Catalog, Entity, EntityKind};
use crate::error::{Result, TerminalError};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Configuration file name
const CONFIG_FILE: &str = "config.toml";

/// Configuration directory name under the platform config dir
const CONFIG_DIR: &str = "portfolio-term";

/// Links and downloadable resources behind the fixed commands
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Profile {
    /// Opened by `github`
    pub github_url: String,
    /// Opened by `linkedin`
    pub linkedin_url: String,
    /// Resource path fetched by `download cv`
    pub cv_resource: String,
    /// File name the CV is saved under
    pub cv_file_name: String,
}

impl Default for Profile {
    fn default() -> Self {
        Self {
            github_url: "https://github.com/levkany".to_string(),
            linkedin_url: "https://www.linkedin.com/in/levkany/".to_string(),
            cv_resource: "resume.pdf".to_string(),
            cv_file_name: "Lev_Kany_CV.pdf".to_string(),
        }
    }
}

/// Persistent configuration data
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Links and CV settings
    pub profile: Profile,
    /// Directory downloadable resources are read from
    pub assets_dir: PathBuf,
    /// Project catalog, in display order
    pub projects: Vec<Entity>,
    /// Post catalog, in display order
    pub posts: Vec<Entity>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            profile: Profile::default(),
            assets_dir: PathBuf::from("."),
            projects: Catalog::default_projects().iter().cloned().collect(),
            posts: Catalog::default_posts().iter().cloned().collect(),
        }
    }
}

impl Config {
    /// Get the configuration directory path
    pub fn config_dir() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| {
                TerminalError::Config("Could not find configuration directory".to_string())
            })?
            .join(CONFIG_DIR);

        Ok(config_dir)
    }

    /// Get the default configuration file path
    pub fn config_file() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join(CONFIG_FILE))
    }

    /// Load configuration
    ///
    /// An explicit `path` must exist. Without one, the default location is
    /// tried and a missing file yields the built-in defaults.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let config_file = match path {
            Some(path) => {
                if !path.exists() {
                    return Err(TerminalError::Config(format!(
                        "Config file not found: {}",
                        path.display()
                    )));
                }
                path.to_path_buf()
            }
            None => match Self::config_file() {
                Ok(file) if file.exists() => file,
                _ => {
                    debug!("no config file, using defaults");
                    return Ok(Self::default());
                }
            },
        };

        debug!(path = %config_file.display(), "loading config");
        let content = fs::read_to_string(&config_file)?;
        Self::from_toml(&content)
    }

    /// Parse configuration from TOML text
    pub fn from_toml(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Build the project catalog
    pub fn project_catalog(&self) -> Result<Catalog> {
        Catalog::new(EntityKind::Project, self.projects.clone())
    }

    /// Build the post catalog
    pub fn post_catalog(&self) -> Result<Catalog> {
        Catalog::new(EntityKind::Post, self.posts.clone())
    }
}
