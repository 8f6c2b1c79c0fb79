//! Configuration for asset path generation.
//!
//! Values come from an optional TOML file, then the environment
//! (`BASE_URL`, `APP_ASSETS_ICONS`), with environment values taking priority.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{read_to_string, Result};

/// Environment variable holding the deployment base path.
pub const BASE_URL_ENV: &str = "BASE_URL";

/// Environment variable pointing at an icon table file.
pub const ICONS_PATH_ENV: &str = "APP_ASSETS_ICONS";

/// Default base path when none is configured.
pub const DEFAULT_BASE_URL: &str = "/";

/// Asset path configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssetConfig {
    /// Prefix applied to every generated asset path.
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Icon table file (`.json` or `.toml`). Bundled tables are used when unset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icons_path: Option<PathBuf>,
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

impl Default for AssetConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            icons_path: None,
        }
    }
}

impl AssetConfig {
    /// Load from a TOML file, then apply environment overrides.
    pub fn load(path: &Path) -> Result<Self> {
        let mut config: Self = toml::from_str(&read_to_string(path)?)?;
        config.resolve_icons_path(path);
        config.apply_env();
        tracing::debug!("Loaded asset config from {}", path.display());
        Ok(config)
    }

    /// Defaults plus environment overrides (reads `.env` when present).
    pub fn from_env() -> Self {
        let mut config = Self::default();
        config.apply_env();
        config
    }

    /// Apply `BASE_URL` / `APP_ASSETS_ICONS` from the process environment.
    pub fn apply_env(&mut self) {
        let _ = dotenvy::dotenv();
        self.apply_overrides(|key| std::env::var(key).ok());
    }

    /// Apply overrides from an arbitrary variable source. Empty values are ignored.
    pub fn apply_overrides<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        let lookup = |key: &str| lookup(key).filter(|v| !v.is_empty());

        if let Some(base) = lookup(BASE_URL_ENV) {
            self.base_url = base;
        }
        if let Some(icons) = lookup(ICONS_PATH_ENV) {
            self.icons_path = Some(PathBuf::from(icons));
        }
    }

    /// Base path guaranteed to end in `/`.
    pub fn normalized_base(&self) -> String {
        if self.base_url.ends_with('/') {
            self.base_url.clone()
        } else {
            format!("{}/", self.base_url)
        }
    }

    /// Relative `icons_path` entries resolve against the config file's directory.
    fn resolve_icons_path(&mut self, config_path: &Path) {
        if let Some(icons) = self.icons_path.as_mut() {
            if icons.is_relative() {
                if let Some(dir) = config_path.parent() {
                    *icons = dir.join(&*icons);
                }
            }
        }
    }
}
