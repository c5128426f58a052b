//! Resolution of the active [`SiteConfig`].

use std::path::PathBuf;
use std::sync::OnceLock;

use folio_core::{FolioResult, SiteConfig, CONFIG_ENV_VAR};

/// Config installed by `main` before launch.
static SITE_CONFIG: OnceLock<SiteConfig> = OnceLock::new();

/// Pick the config path: explicit flag first, then `FOLIO_CONFIG`.
pub fn resolve_config_path(flag: Option<PathBuf>, env_value: Option<String>) -> Option<PathBuf> {
    flag.or_else(|| env_value.filter(|v| !v.trim().is_empty()).map(PathBuf::from))
}

/// Load the config at `path`, or defaults when no path was given.
pub fn load_config(path: Option<PathBuf>) -> FolioResult<SiteConfig> {
    match path {
        Some(path) => Ok(SiteConfig::load(path)?),
        None => Ok(SiteConfig::default()),
    }
}

/// Resolve and load using the process environment.
pub fn load_from_env(flag: Option<PathBuf>) -> FolioResult<SiteConfig> {
    let env_value = std::env::var(CONFIG_ENV_VAR).ok();
    load_config(resolve_config_path(flag, env_value))
}

/// Install the config for components. Later calls are ignored.
pub fn install(config: SiteConfig) {
    if SITE_CONFIG.set(config).is_err() {
        tracing::warn!("Site config already installed, keeping the first one");
    }
}

/// Active config, falling back to defaults if none was installed.
pub fn current() -> SiteConfig {
    SITE_CONFIG.get().cloned().unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_flag_wins_over_env() {
        let path = resolve_config_path(
            Some(PathBuf::from("cli.toml")),
            Some("env.toml".to_string()),
        );
        assert_eq!(path, Some(PathBuf::from("cli.toml")));
    }

    #[test]
    fn test_env_fallback() {
        let path = resolve_config_path(None, Some("env.toml".to_string()));
        assert_eq!(path, Some(PathBuf::from("env.toml")));

        assert_eq!(resolve_config_path(None, Some("  ".to_string())), None);
        assert_eq!(resolve_config_path(None, None), None);
    }

    #[test]
    fn test_load_defaults_without_path() {
        let config = load_config(None).unwrap();
        assert_eq!(config, SiteConfig::default());
    }

    #[test]
    fn test_load_from_path() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[loading]\ncompletion_delay_ms = 1500").unwrap();

        let config = load_config(Some(file.path().to_path_buf())).unwrap();
        assert_eq!(config.loading.completion_delay_ms, 1500);
    }

    #[test]
    fn test_load_invalid_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[loading]\nstep = 0").unwrap();

        assert!(load_config(Some(file.path().to_path_buf())).is_err());
    }
}
