use serde::Deserialize;
use std::path::{Path, PathBuf};
use thiserror::Error;

const APP_NAME: &str = "semver-value";

/// Default log filter when neither the config file nor RUST_LOG sets one
pub const DEFAULT_LOG_LEVEL: &str = "warn";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path:?}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse config file {path:?}: {source}")]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },
}

/// CLI configuration structure
#[derive(Debug, Clone, Deserialize, Default, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct CliConfig {
    pub output: OutputConfig,
    pub log: LogConfig,
}

/// Output-related configuration
#[derive(Debug, Clone, Deserialize, Default, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct OutputConfig {
    pub format: OutputFormat,
}

#[derive(Debug, Clone, Copy, Deserialize, Default, PartialEq, Eq, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct LogConfig {
    /// EnvFilter directive, e.g. "debug" or "semver_value=trace"
    pub level: String,
    /// Write logs to the data directory instead of stderr
    pub file: bool,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: DEFAULT_LOG_LEVEL.to_string(),
            file: false,
        }
    }
}

impl CliConfig {
    /// Load configuration from `path`. A missing file yields the defaults.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = match std::fs::read_to_string(path) {
            Ok(content) => content,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
                return Ok(Self::default());
            }
            Err(source) => {
                return Err(ConfigError::Io {
                    path: path.to_path_buf(),
                    source,
                });
            }
        };

        serde_json::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }
}

/// Returns the path to the config file.
/// Uses $XDG_CONFIG_HOME/semver-value/config.json if XDG_CONFIG_HOME is set,
/// otherwise falls back to ~/.config/semver-value/config.json,
/// or ./semver-value/config.json if neither is available.
pub fn config_path() -> PathBuf {
    app_dir_with_env(
        std::env::var("XDG_CONFIG_HOME").ok(),
        dirs::home_dir(),
        ".config",
    )
    .join("config.json")
}

/// Returns the path to the data directory for semver-value.
/// Uses $XDG_DATA_HOME/semver-value if XDG_DATA_HOME is set,
/// otherwise falls back to ~/.local/share/semver-value,
/// or ./semver-value if neither is available.
pub fn data_dir() -> PathBuf {
    app_dir_with_env(
        std::env::var("XDG_DATA_HOME").ok(),
        dirs::home_dir(),
        ".local/share",
    )
}

/// Returns the path to the log file.
pub fn log_path() -> PathBuf {
    data_dir().join("semver-value.log")
}

fn app_dir_with_env(xdg_dir: Option<String>, home_dir: Option<PathBuf>, home_subdir: &str) -> PathBuf {
    let base = xdg_dir
        .map(PathBuf::from)
        .or_else(|| home_dir.map(|home| home.join(home_subdir)))
        .unwrap_or_else(|| PathBuf::from("."));

    base.join(APP_NAME)
}
