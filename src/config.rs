use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::models::Locale;

/// Source of a configuration value
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ConfigSource {
    Default,
    File,
    Environment,
}

impl std::fmt::Display for ConfigSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigSource::Default => write!(f, "default"),
            ConfigSource::File => write!(f, "file"),
            ConfigSource::Environment => write!(f, "environment"),
        }
    }
}

/// A configuration value with its source
#[derive(Debug, Clone, Serialize)]
pub struct ConfigValue<T> {
    pub value: T,
    pub source: ConfigSource,
}

impl<T> ConfigValue<T> {
    pub fn new(value: T, source: ConfigSource) -> Self {
        Self { value, source }
    }
}

/// Application configuration with source tracking
#[derive(Debug, Clone, Serialize)]
pub struct Config {
    /// Menu file the `dish` commands work on
    pub menu_file: ConfigValue<PathBuf>,
    /// Directory holding the daily diagnostics logs
    pub log_dir: ConfigValue<PathBuf>,
    /// Language for table headers and prompts
    pub locale: ConfigValue<Locale>,
    /// Config file path used (if any)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub config_file: Option<PathBuf>,
}

/// Internal struct for deserializing config file
#[derive(Debug, Deserialize, Default)]
#[serde(default)]
struct ConfigFile {
    menu_file: Option<PathBuf>,
    log_dir: Option<PathBuf>,
    locale: Option<Locale>,
}

impl Config {
    /// Load configuration with priority: env vars > config file > defaults
    pub fn load(config_path: Option<PathBuf>) -> Result<Self, ConfigError> {
        let mut menu_file = ConfigValue::new(
            Self::default_data_dir().join("menu.txt"),
            ConfigSource::Default,
        );
        let mut log_dir = ConfigValue::new(PathBuf::from("logs"), ConfigSource::Default);
        let mut locale = ConfigValue::new(Locale::default(), ConfigSource::Default);
        let mut config_file = None;

        let path = config_path.unwrap_or_else(Self::default_config_path);
        if path.exists() {
            let contents = std::fs::read_to_string(&path)
                .map_err(|e| ConfigError::ReadError(path.clone(), e))?;
            let file_config: ConfigFile = serde_yaml::from_str(&contents)
                .map_err(|e| ConfigError::ParseError(path.clone(), e))?;

            if let Some(file) = file_config.menu_file {
                menu_file = ConfigValue::new(resolve(&path, file), ConfigSource::File);
            }
            if let Some(dir) = file_config.log_dir {
                log_dir = ConfigValue::new(resolve(&path, dir), ConfigSource::File);
            }
            if let Some(file_locale) = file_config.locale {
                locale = ConfigValue::new(file_locale, ConfigSource::File);
            }
            config_file = Some(path);
        }

        if let Ok(file) = std::env::var("MENU_FILE") {
            menu_file = ConfigValue::new(PathBuf::from(file), ConfigSource::Environment);
        }
        if let Ok(dir) = std::env::var("MENU_LOG_DIR") {
            log_dir = ConfigValue::new(PathBuf::from(dir), ConfigSource::Environment);
        }
        if let Ok(value) = std::env::var("MENU_LOCALE") {
            let env_locale = value
                .parse()
                .map_err(|e| ConfigError::InvalidValue("MENU_LOCALE".to_string(), e))?;
            locale = ConfigValue::new(env_locale, ConfigSource::Environment);
        }

        Ok(Self {
            menu_file,
            log_dir,
            locale,
            config_file,
        })
    }

    /// Default config directory (platform-specific):
    /// - Linux: ~/.config/menu-manager/
    /// - macOS: ~/Library/Application Support/menu-manager/
    /// - Windows: %APPDATA%/menu-manager/
    pub fn default_config_dir() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("menu-manager")
    }

    /// Default data directory (platform-specific):
    /// - Linux: ~/.local/share/menu-manager/
    /// - macOS: ~/Library/Application Support/menu-manager/
    /// - Windows: %APPDATA%/menu-manager/
    pub fn default_data_dir() -> PathBuf {
        dirs::data_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("menu-manager")
    }

    /// Default config file path (platform-specific config dir + config.yaml)
    pub fn default_config_path() -> PathBuf {
        Self::default_config_dir().join("config.yaml")
    }
}

/// Resolve relative paths against the config file's directory
fn resolve(config_path: &Path, value: PathBuf) -> PathBuf {
    if value.is_relative() {
        config_path
            .parent()
            .map(|p| p.join(&value))
            .unwrap_or(value)
    } else {
        value
    }
}

#[derive(Debug)]
pub enum ConfigError {
    ReadError(PathBuf, std::io::Error),
    ParseError(PathBuf, serde_yaml::Error),
    InvalidValue(String, String),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::ReadError(path, e) => {
                write!(f, "Failed to read config file '{}': {}", path.display(), e)
            }
            ConfigError::ParseError(path, e) => {
                write!(f, "Failed to parse config file '{}': {}", path.display(), e)
            }
            ConfigError::InvalidValue(key, e) => {
                write!(f, "Invalid value for {}: {}", key, e)
            }
        }
    }
}

impl std::error::Error for ConfigError {}
