//! Site configuration loaded from TOML.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::loading::LoadingTimings;
use crate::nav::NavConfig;

/// Environment variable naming a config file when `--config` is absent.
pub const CONFIG_ENV_VAR: &str = "FOLIO_CONFIG";

/// Top-level configuration for the portfolio window.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    /// Splash screen timings
    pub loading: LoadingTimings,
    /// Header behaviour
    pub nav: NavConfig,
    /// Desktop window settings
    pub window: WindowConfig,
}

/// Desktop window settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    pub title: String,
    pub width: f64,
    pub height: f64,
    pub maximized: bool,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: "Blues | Niladri Roy".to_string(),
            width: 1280.0,
            height: 860.0,
            maximized: false,
        }
    }
}

impl SiteConfig {
    /// Parse and validate a TOML document.
    pub fn from_toml_str(input: &str) -> Result<Self, ConfigError> {
        let config: SiteConfig = toml::from_str(input)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a config file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_toml_str(&contents)?;
        tracing::debug!(path = %path.display(), "Loaded site config");
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        self.loading.validate()?;
        self.nav.validate()?;

        let WindowConfig { width, height, .. } = self.window;
        if !(width > 0.0 && height > 0.0) {
            return Err(ConfigError::InvalidWindowSize { width, height });
        }
        Ok(())
    }
}
