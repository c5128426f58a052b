//! Error types for Folio

use std::path::PathBuf;

use thiserror::Error;

/// Top-level error type for Folio
#[derive(Debug, Error)]
pub enum FolioError {
    #[error("Config error: {0}")]
    Config(#[from] ConfigError),
}

/// Errors raised while loading or validating [`SiteConfig`](crate::SiteConfig)
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Loading tick interval must be greater than zero")]
    ZeroTick,

    #[error("Loading progress step must be greater than zero")]
    ZeroStep,

    #[error("Scroll threshold must be a finite, non-negative number (got {0})")]
    InvalidThreshold(f64),

    #[error("Window size must be positive (got {width}x{height})")]
    InvalidWindowSize { width: f64, height: f64 },
}

/// Result alias for Folio operations
pub type FolioResult<T> = Result<T, FolioError>;
