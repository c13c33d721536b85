//! Configuration for themecheck
//!
//! The themes root defaults to `extensions/themes` next to the crate and can
//! be overridden from the command line, the environment or `themecheck.toml`.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::error::{CheckError, Result};

pub const DEFAULT_MANIFEST_FILE: &str = "manifest.json";
pub const CONFIG_FILE_NAME: &str = "themecheck.toml";

/// Settings read from `themecheck.toml`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Config {
    pub themes_dir: Option<PathBuf>,
    pub manifest_file: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            themes_dir: None,
            manifest_file: DEFAULT_MANIFEST_FILE.to_string(),
        }
    }
}

/// Directory the tool ships in
pub fn repo_root() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
}

/// `<repo>/extensions/themes`
pub fn default_themes_dir() -> PathBuf {
    repo_root().join("extensions").join("themes")
}

pub fn default_config_path() -> PathBuf {
    repo_root().join(CONFIG_FILE_NAME)
}

/// Load configuration, falling back to defaults when the file is absent
pub fn load_config(path: &Path) -> Result<Config> {
    if !path.exists() {
        return Ok(Config::default());
    }
    load_config_file(path)
}

/// Load a config file the user named explicitly; it must exist
pub fn load_config_file(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path).map_err(|e| CheckError::io(path, e))?;
    let mut config: Config = toml::from_str(&content).map_err(|source| CheckError::Config {
        path: path.to_path_buf(),
        source,
    })?;

    // Relative roots are taken from the config file's location
    if let Some(dir) = config.themes_dir.take() {
        let base = path.parent().unwrap_or_else(|| Path::new("."));
        config.themes_dir = Some(if dir.is_relative() { base.join(dir) } else { dir });
    }
    Ok(config)
}

/// Fully resolved locations for one run
#[derive(Debug, Clone, PartialEq)]
pub struct CheckPaths {
    pub themes_root: PathBuf,
    pub manifest_file: String,
}

impl CheckPaths {
    pub fn new(themes_root: impl Into<PathBuf>) -> Self {
        Self {
            themes_root: themes_root.into(),
            manifest_file: DEFAULT_MANIFEST_FILE.to_string(),
        }
    }

    /// Explicit root wins, then the config file, then the built-in default
    pub fn resolve(root_override: Option<PathBuf>, config: Config) -> Self {
        let themes_root = root_override
            .or(config.themes_dir)
            .unwrap_or_else(default_themes_dir);
        debug!(root = %themes_root.display(), "Resolved themes root");
        Self {
            themes_root,
            manifest_file: config.manifest_file,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_missing_config_uses_defaults() {
        let temp = TempDir::new().unwrap();
        let config = load_config(&temp.path().join(CONFIG_FILE_NAME)).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_relative_themes_dir_resolves_against_config() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join(CONFIG_FILE_NAME);
        fs::write(&path, "themes_dir = \"assets/themes\"\n").unwrap();

        let config = load_config(&path).unwrap();
        assert_eq!(config.themes_dir, Some(temp.path().join("assets/themes")));
        assert_eq!(config.manifest_file, DEFAULT_MANIFEST_FILE);
    }

    #[test]
    fn test_explicit_config_must_exist() {
        let temp = TempDir::new().unwrap();
        let result = load_config_file(&temp.path().join("typo.toml"));
        assert!(matches!(result, Err(CheckError::Io { .. })));
    }

    #[test]
    fn test_malformed_config_is_error() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join(CONFIG_FILE_NAME);
        fs::write(&path, "themes_dir = [").unwrap();

        assert!(matches!(load_config(&path), Err(CheckError::Config { .. })));
    }

    #[test]
    fn test_resolve_precedence() {
        let config = Config {
            themes_dir: Some(PathBuf::from("/from/config")),
            manifest_file: "theme.json".to_string(),
        };
        let paths = CheckPaths::resolve(Some(PathBuf::from("/from/cli")), config.clone());
        assert_eq!(paths.themes_root, PathBuf::from("/from/cli"));
        assert_eq!(paths.manifest_file, "theme.json");

        let paths = CheckPaths::resolve(None, config);
        assert_eq!(paths.themes_root, PathBuf::from("/from/config"));

        let paths = CheckPaths::resolve(None, Config::default());
        assert_eq!(paths.themes_root, default_themes_dir());
    }
}
