use std::path::{Path, PathBuf};
use std::{env, fs};

use serde::Deserialize;

use fb_core::{DEFAULT_ROLE, TimeRange};

use crate::error::Result;

pub const DB_FILE: &str = "familybond.db";
pub const CONFIG_FILE: &str = "config.toml";

/// Default base directory for all FamilyBond storage.
pub fn default_base_dir() -> PathBuf {
    dirs_home().join(".familybond")
}

fn dirs_home() -> PathBuf {
    env::var("HOME")
        .or_else(|_| env::var("USERPROFILE"))
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from("."))
}

pub fn db_path(base_dir: &Path) -> PathBuf {
    base_dir.join(DB_FILE)
}

/// Optional per-installation settings read from `config.toml`.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Role used for advice when no profile has been onboarded.
    pub default_role: String,
    pub report_range: TimeRange,
    /// Fixed seed for chat reply selection.
    pub seed: Option<u64>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            default_role: DEFAULT_ROLE.to_string(),
            report_range: TimeRange::Week,
            seed: None,
        }
    }
}

impl Config {
    pub fn parse(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Load `config.toml` from `base_dir`, falling back to defaults when absent.
    pub fn load(base_dir: &Path) -> Result<Self> {
        let path = base_dir.join(CONFIG_FILE);
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = fs::read_to_string(&path)?;
        let config = Self::parse(&content)?;
        tracing::debug!(?config, "loaded {}", path.display());
        Ok(config)
    }
}
