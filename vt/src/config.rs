//! User configuration file.
//!
//! The file is TOML and lives at `$XDG_CONFIG_HOME/vt/config.toml`, or
//! `~/.config/vt/config.toml` when `XDG_CONFIG_HOME` is unset:
//!
//! ```toml
//! auth_key = "0123456789abcdef"
//! default_origin = "Chalmers"
//! default_destination = "Centralstationen"
//!
//! [aliases]
//! hem = "Mölndals innerstad"
//! ```

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use tracing::debug;

/// Environment variable that overrides `auth_key`.
pub const AUTH_KEY_ENV: &str = "VT_AUTH_KEY";

/// Errors loading the configuration file.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Config file doesn't exist: {}", path.display())]
    Missing { path: PathBuf },

    #[error("Failed to read config file {}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to load config. Make sure {} is valid", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Cannot locate the config directory; set XDG_CONFIG_HOME or HOME, or pass --config")]
    NoConfigDir,
}

/// Settings read from the configuration file. Every key is optional.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Key for the planner API
    pub auth_key: Option<String>,
    /// Origin used when only a destination is given
    pub default_origin: Option<String>,
    /// Destination used when no stops are given
    pub default_destination: Option<String>,
    /// Short names for stops, expanded before lookup
    pub aliases: HashMap<String, String>,
}

impl Config {
    /// Read and parse the file at `path`.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Err(ConfigError::Missing {
                path: path.to_path_buf(),
            });
        }

        debug!("Reading config from file {:?}", path);
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        toml::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Replace the auth key when `key` is set and non-empty.
    pub fn with_auth_key_override(mut self, key: Option<String>) -> Self {
        if let Some(key) = key.filter(|k| !k.trim().is_empty()) {
            self.auth_key = Some(key);
        }
        self
    }

    /// Apply overrides from the environment.
    pub fn with_env_overrides(self) -> Self {
        self.with_auth_key_override(std::env::var(AUTH_KEY_ENV).ok())
    }
}

/// Location of the config file, from the process environment.
pub fn default_path() -> Result<PathBuf, ConfigError> {
    config_path_from(
        std::env::var_os("XDG_CONFIG_HOME").map(PathBuf::from),
        std::env::var_os("HOME").map(PathBuf::from),
    )
    .ok_or(ConfigError::NoConfigDir)
}

/// Location of the config file given `XDG_CONFIG_HOME` and `HOME`.
///
/// A relative or empty `XDG_CONFIG_HOME` is ignored.
fn config_path_from(xdg_config_home: Option<PathBuf>, home: Option<PathBuf>) -> Option<PathBuf> {
    let base = xdg_config_home
        .filter(|dir| dir.is_absolute())
        .or_else(|| home.filter(|dir| !dir.as_os_str().is_empty()).map(|dir| dir.join(".config")))?;
    Some(base.join("vt").join("config.toml"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::{NamedTempFile, TempDir};

    fn write_config(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn load_full_config() {
        let file = write_config(
            r#"
                auth_key = "secret"
                default_origin = "Chalmers"
                default_destination = "Centralstationen"

                [aliases]
                hem = "Mölndals innerstad"
                jobb = "Lindholmen"
            "#,
        );

        let config = Config::load(file.path()).unwrap();
        assert_eq!(config.auth_key.as_deref(), Some("secret"));
        assert_eq!(config.default_origin.as_deref(), Some("Chalmers"));
        assert_eq!(config.default_destination.as_deref(), Some("Centralstationen"));
        assert_eq!(config.aliases.len(), 2);
        assert_eq!(config.aliases["hem"], "Mölndals innerstad");
    }

    #[test]
    fn missing_keys_default() {
        let file = write_config("auth_key = \"secret\"\n");

        let config = Config::load(file.path()).unwrap();
        assert_eq!(config.default_origin, None);
        assert_eq!(config.default_destination, None);
        assert!(config.aliases.is_empty());
    }

    #[test]
    fn empty_file_is_valid() {
        let file = write_config("");
        assert_eq!(Config::load(file.path()).unwrap(), Config::default());
    }

    #[test]
    fn unknown_keys_are_ignored() {
        let file = write_config("auth_key = \"k\"\ntheme = \"dark\"\n");
        assert_eq!(Config::load(file.path()).unwrap().auth_key.as_deref(), Some("k"));
    }

    #[test]
    fn missing_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");

        let err = Config::load(&path).unwrap_err();
        assert!(matches!(err, ConfigError::Missing { .. }));
        assert!(err.to_string().starts_with("Config file doesn't exist"));
    }

    #[test]
    fn invalid_toml_names_the_file() {
        let file = write_config("auth_key = \n");

        let err = Config::load(file.path()).unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
        assert!(err.to_string().contains(&file.path().display().to_string()));
    }

    #[test]
    fn wrong_type_is_a_parse_error() {
        let file = write_config("aliases = \"none\"\n");
        assert!(matches!(
            Config::load(file.path()),
            Err(ConfigError::Parse { .. })
        ));
    }

    #[test]
    fn auth_key_override() {
        let config = Config {
            auth_key: Some("from-file".into()),
            ..Config::default()
        };

        let kept = config.clone().with_auth_key_override(None);
        assert_eq!(kept.auth_key.as_deref(), Some("from-file"));

        let kept = config.clone().with_auth_key_override(Some("  ".into()));
        assert_eq!(kept.auth_key.as_deref(), Some("from-file"));

        let replaced = config.with_auth_key_override(Some("from-env".into()));
        assert_eq!(replaced.auth_key.as_deref(), Some("from-env"));
    }

    #[test]
    fn path_prefers_xdg() {
        let path = config_path_from(Some("/xdg".into()), Some("/home/me".into()));
        assert_eq!(path, Some(PathBuf::from("/xdg/vt/config.toml")));
    }

    #[test]
    fn path_falls_back_to_home() {
        let path = config_path_from(None, Some("/home/me".into()));
        assert_eq!(path, Some(PathBuf::from("/home/me/.config/vt/config.toml")));

        let path = config_path_from(Some("relative".into()), Some("/home/me".into()));
        assert_eq!(path, Some(PathBuf::from("/home/me/.config/vt/config.toml")));
    }

    #[test]
    fn no_path_without_environment() {
        assert_eq!(config_path_from(None, None), None);
        assert_eq!(config_path_from(None, Some(PathBuf::new())), None);
    }
}
