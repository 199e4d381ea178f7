use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{ReleaserError, Result};

/// File looked up in the working directory and the user config directory.
pub const CONFIG_FILE_NAME: &str = "releaser.toml";

/// Environment variable overriding the configured log level.
pub const LOG_LEVEL_ENV: &str = "RELEASER_LOG_LEVEL";

/// Represents the complete configuration for releaser.
///
/// Built once at process start and passed by reference to the gateway.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct Settings {
    #[serde(default = "default_changelog_file")]
    pub changelog_file: PathBuf,

    #[serde(default, alias = "RELEASER_LOG_LEVEL")]
    pub log_level: LogLevel,

    #[serde(default, deserialize_with = "deserialize_flag")]
    pub dryrun: bool,

    #[serde(default)]
    pub version_files: Vec<VersionFileTarget>,
}

/// A version declaration file and the literal prefix of its version line.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
pub struct VersionFileTarget {
    pub path: PathBuf,
    pub pattern: String,
}

/// Verbosity of diagnostics written to stderr.
#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Debug,
    #[default]
    Info,
}

impl LogLevel {
    /// Parse a level name, case-insensitive
    pub fn from_name(name: &str) -> Option<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "debug" => Some(LogLevel::Debug),
            "info" => Some(LogLevel::Info),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returns the default changelog location.
fn default_changelog_file() -> PathBuf {
    PathBuf::from("./CHANGELOG.md")
}

/// Accepts a TOML boolean, or a string where only `"true"` switches the flag on.
fn deserialize_flag<'de, D>(deserializer: D) -> std::result::Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Flag {
        Bool(bool),
        Text(String),
    }

    Ok(match Flag::deserialize(deserializer)? {
        Flag::Bool(value) => value,
        Flag::Text(text) => text == "true",
    })
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            changelog_file: default_changelog_file(),
            log_level: LogLevel::default(),
            dryrun: false,
            version_files: Vec::new(),
        }
    }
}

impl Settings {
    /// Parse settings from TOML text
    pub fn from_toml(text: &str) -> Result<Self> {
        toml::from_str(text).map_err(|e| ReleaserError::config(e.to_string()))
    }

    /// Apply `RELEASER_LOG_LEVEL` from the environment, if set.
    ///
    /// An unrecognised value is reported and ignored.
    pub fn apply_env_overrides(&mut self) {
        if let Ok(value) = std::env::var(LOG_LEVEL_ENV) {
            match LogLevel::from_name(&value) {
                Some(level) => self.log_level = level,
                None => tracing::warn!(
                    value = %value,
                    "ignoring unrecognised {}; expected debug or info",
                    LOG_LEVEL_ENV
                ),
            }
        }
    }
}

/// Loads configuration from file or returns defaults.
///
/// Attempts to load configuration in the following order:
/// 1. Custom path provided as parameter
/// 2. `releaser.toml` in current directory
/// 3. `releaser.toml` in user config directory
/// 4. Default configuration if no file found
///
/// The `RELEASER_LOG_LEVEL` environment variable is applied on top.
///
/// # Returns
/// * `Ok(Settings)` - Loaded or default configuration
/// * `Err` - If a custom path is missing, or a file exists but cannot be read or parsed
pub fn load_config(config_path: Option<&str>) -> Result<Settings> {
    let mut settings = match locate_config(config_path)? {
        Some(path) => {
            tracing::debug!(path = %path.display(), "loading settings");
            let text = fs::read_to_string(&path)?;
            Settings::from_toml(&text)?
        }
        None => Settings::default(),
    };

    settings.apply_env_overrides();
    Ok(settings)
}

fn locate_config(config_path: Option<&str>) -> Result<Option<PathBuf>> {
    if let Some(path) = config_path {
        let path = PathBuf::from(path);
        if !path.exists() {
            return Err(ReleaserError::FileNotFound(path));
        }
        return Ok(Some(path));
    }

    let local = Path::new(".").join(CONFIG_FILE_NAME);
    if local.exists() {
        return Ok(Some(local));
    }

    Ok(dirs::config_dir()
        .map(|dir| dir.join(CONFIG_FILE_NAME))
        .filter(|path| path.exists()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let settings = Settings::default();
        assert_eq!(settings.changelog_file, PathBuf::from("./CHANGELOG.md"));
        assert_eq!(settings.log_level, LogLevel::Info);
        assert!(!settings.dryrun);
        assert!(settings.version_files.is_empty());
    }

    #[test]
    fn test_empty_toml_gives_defaults() {
        assert_eq!(Settings::from_toml("").unwrap(), Settings::default());
    }

    #[test]
    fn test_dryrun_string_forms() {
        assert!(Settings::from_toml("dryrun = \"true\"").unwrap().dryrun);
        assert!(!Settings::from_toml("dryrun = \"yes\"").unwrap().dryrun);
        assert!(!Settings::from_toml("dryrun = \"TRUE\"").unwrap().dryrun);
        assert!(Settings::from_toml("dryrun = true").unwrap().dryrun);
    }

    #[test]
    fn test_log_level_alias() {
        let settings = Settings::from_toml("RELEASER_LOG_LEVEL = \"debug\"").unwrap();
        assert_eq!(settings.log_level, LogLevel::Debug);
    }

    #[test]
    fn test_invalid_log_level_is_config_error() {
        let err = Settings::from_toml("log_level = \"trace\"").unwrap_err();
        assert!(matches!(err, ReleaserError::Config(_)));
    }

    #[test]
    fn test_log_level_from_name() {
        assert_eq!(LogLevel::from_name(" DEBUG "), Some(LogLevel::Debug));
        assert_eq!(LogLevel::from_name("info"), Some(LogLevel::Info));
        assert_eq!(LogLevel::from_name("warn"), None);
    }

    #[test]
    fn test_version_files_table() {
        let settings = Settings::from_toml(
            r#"
[[version_files]]
path = "bin/tool"
pattern = "VERSION="
"#,
        )
        .unwrap();
        assert_eq!(
            settings.version_files,
            vec![VersionFileTarget {
                path: PathBuf::from("bin/tool"),
                pattern: "VERSION=".to_string(),
            }]
        );
    }
}
