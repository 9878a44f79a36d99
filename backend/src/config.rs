//! Backend configuration.
//!
//! Read from a YAML file whose path comes from `BABYCARE_CONFIG`; every
//! field has a default, so an empty file or no file at all is valid.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

use crate::domain::milestone_catalog::MilestoneCatalog;
use crate::domain::milestone_service::DEFAULT_NOW_WINDOW_WEEKS;
use crate::domain::vaccine_service::DEFAULT_DUE_SOON_DAYS;

pub const CONFIG_PATH_ENV: &str = "BABYCARE_CONFIG";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BackendConfig {
    /// Default tracing filter; `RUST_LOG` takes precedence
    pub log_level: String,
    /// Weeks past the current age that count as "now" on the milestone board
    pub now_window_weeks: u32,
    /// Days ahead of a due date at which a vaccine shows as due soon
    pub vaccine_due_soon_days: i64,
    /// YAML file replacing the built-in milestone catalog
    pub milestone_catalog_path: Option<PathBuf>,
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            now_window_weeks: DEFAULT_NOW_WINDOW_WEEKS,
            vaccine_due_soon_days: DEFAULT_DUE_SOON_DAYS,
            milestone_catalog_path: None,
        }
    }
}

impl BackendConfig {
    pub fn load(path: &Path) -> Result<Self> {
        let yaml_content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        if yaml_content.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(&yaml_content)
            .with_context(|| format!("Failed to parse config file {}", path.display()))
    }

    /// Load from the file named by `BABYCARE_CONFIG`, or use defaults when it is unset
    pub fn from_env() -> Result<Self> {
        match std::env::var_os(CONFIG_PATH_ENV) {
            Some(path) => Self::load(Path::new(&path)),
            None => Ok(Self::default()),
        }
    }

    /// The configured milestone catalog, or the built-in one
    pub fn milestone_catalog(&self) -> Result<MilestoneCatalog> {
        match &self.milestone_catalog_path {
            Some(path) => MilestoneCatalog::load_yaml(path),
            None => {
                info!("Using built-in milestone catalog");
                Ok(MilestoneCatalog::builtin().clone())
            }
        }
    }
}
