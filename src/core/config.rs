//! Configuration module for `CampusPortal`

use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use crate::core::auth::DEFAULT_MIN_PASSWORD_LENGTH;
use crate::core::splash::DEFAULT_SPLASH_DELAY_MS;

/// Default CLI configuration loaded based on build profile.
/// Uses release defaults in release mode, debug defaults in debug mode.
#[cfg(not(debug_assertions))]
const CONFIG_DEFAULTS: &str = include_str!("../../assets/DefaultCLIConfigRelease.toml");

#[cfg(debug_assertions)]
const CONFIG_DEFAULTS: &str = include_str!("../../assets/DefaultCLIConfigDebug.toml");

#[cfg(not(debug_assertions))]
const CONFIG_FILE_NAME: &str = "config.toml";

#[cfg(debug_assertions)]
const CONFIG_FILE_NAME: &str = "dconfig.toml";

/// Placeholder expanded to the portal's config directory
const DIR_VARIABLE: &str = "$CAMPUS_PORTAL";

/// Logging configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level (error, warn, info, debug)
    #[serde(default)]
    pub level: String,
    /// Log file path
    #[serde(default)]
    pub file: String,
    /// Enable verbose output
    #[serde(default)]
    pub verbose: bool,
}

/// Device-local storage configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StorageConfig {
    /// Directory holding the session file
    #[serde(default)]
    pub data_dir: String,
    /// Session file name inside `data_dir`
    #[serde(default)]
    pub session_file: String,
}

/// Portal behavior configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PortalConfig {
    /// Welcome-screen delay before moving a logged-in user home
    #[serde(default = "default_splash_delay_ms")]
    pub splash_delay_ms: u64,
    /// Minimum password length accepted at registration
    #[serde(default = "default_min_password_length")]
    pub min_password_length: usize,
}

const fn default_splash_delay_ms() -> u64 {
    DEFAULT_SPLASH_DELAY_MS
}

const fn default_min_password_length() -> usize {
    DEFAULT_MIN_PASSWORD_LENGTH
}

impl Default for PortalConfig {
    fn default() -> Self {
        Self {
            splash_delay_ms: DEFAULT_SPLASH_DELAY_MS,
            min_password_length: DEFAULT_MIN_PASSWORD_LENGTH,
        }
    }
}

/// Main configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Logging settings
    pub logging: LoggingConfig,
    /// Storage settings
    #[serde(default)]
    pub storage: StorageConfig,
    /// Portal settings
    #[serde(default)]
    pub portal: PortalConfig,
}

/// Optional CLI overrides for configuration values
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    /// Override logging level
    pub level: Option<String>,
    /// Override log file path
    pub file: Option<String>,
    /// Override verbose flag
    pub verbose: Option<bool>,
    /// Override data directory
    pub data_dir: Option<String>,
    /// Override splash delay
    pub splash_delay_ms: Option<u64>,
}

impl Config {
    /// Get the `$CAMPUS_PORTAL` directory path
    ///
    /// Returns:
    /// - Linux: `~/.config/campusportal`
    /// - macOS: `~/Library/Application Support/campusportal`
    /// - Windows: `%APPDATA%\campusportal`
    #[must_use]
    pub fn get_campus_portal_dir() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("campusportal")
    }

    /// Merge missing fields from defaults into this config
    ///
    /// Only string fields that are empty here and non-empty in `defaults` are
    /// filled. Numeric portal settings already fall back through serde.
    ///
    /// # Returns
    ///
    /// `true` if any fields were added/changed, `false` otherwise
    #[allow(clippy::useless_let_if_seq)]
    pub fn merge_defaults(&mut self, defaults: &Self) -> bool {
        let mut changed = false;

        if self.logging.level.is_empty() && !defaults.logging.level.is_empty() {
            self.logging.level.clone_from(&defaults.logging.level);
            changed = true;
        }
        if self.logging.file.is_empty() && !defaults.logging.file.is_empty() {
            self.logging.file.clone_from(&defaults.logging.file);
            changed = true;
        }

        if self.storage.data_dir.is_empty() && !defaults.storage.data_dir.is_empty() {
            self.storage.data_dir.clone_from(&defaults.storage.data_dir);
            changed = true;
        }
        if self.storage.session_file.is_empty() && !defaults.storage.session_file.is_empty() {
            self.storage
                .session_file
                .clone_from(&defaults.storage.session_file);
            changed = true;
        }

        changed
    }

    /// Apply CLI-provided overrides onto the loaded configuration
    ///
    /// Only non-`None` values replace config values, and nothing is written
    /// back to the config file.
    pub fn apply_overrides(&mut self, overrides: &ConfigOverrides) {
        if let Some(level) = &overrides.level {
            self.logging.level.clone_from(level);
        }
        if let Some(file) = &overrides.file {
            self.logging.file.clone_from(file);
        }
        if let Some(verbose) = overrides.verbose {
            self.logging.verbose = verbose;
        }
        if let Some(data_dir) = &overrides.data_dir {
            self.storage.data_dir.clone_from(data_dir);
        }
        if let Some(delay) = overrides.splash_delay_ms {
            self.portal.splash_delay_ms = delay;
        }
    }

    /// Get the user config file path
    ///
    /// `config.toml` for release builds, `dconfig.toml` for debug builds, inside
    /// [`get_campus_portal_dir`](Self::get_campus_portal_dir).
    #[must_use]
    pub fn get_config_file_path() -> PathBuf {
        Self::get_campus_portal_dir().join(CONFIG_FILE_NAME)
    }

    /// Full path of the session file
    #[must_use]
    pub fn session_file_path(&self) -> PathBuf {
        PathBuf::from(&self.storage.data_dir).join(&self.storage.session_file)
    }

    /// Expand `$CAMPUS_PORTAL` in a string to the portal directory
    #[must_use]
    fn expand_variables(value: &str) -> String {
        if value.contains(DIR_VARIABLE) {
            let portal_dir = Self::get_campus_portal_dir();
            value.replace(DIR_VARIABLE, portal_dir.to_str().unwrap_or("."))
        } else {
            value.to_string()
        }
    }

    /// Initialize config from a TOML string
    ///
    /// Path-like values have `$CAMPUS_PORTAL` expanded. Missing fields use
    /// their serde defaults.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML cannot be parsed or doesn't match the expected schema
    pub fn from_toml(toml_str: &str) -> Result<Self, toml::de::Error> {
        let mut config: Self = toml::from_str(toml_str)?;

        config.logging.file = Self::expand_variables(&config.logging.file);
        config.storage.data_dir = Self::expand_variables(&config.storage.data_dir);

        Ok(config)
    }

    /// Load configuration from embedded defaults
    ///
    /// # Panics
    /// Panics if the embedded default configuration is invalid TOML. The
    /// defaults are compiled into the binary and covered by tests.
    #[must_use]
    pub fn from_defaults() -> Self {
        Self::from_toml(CONFIG_DEFAULTS).expect("Failed to parse compiled-in default configuration")
    }

    /// Load configuration from the user config file, creating it on first run
    #[must_use]
    pub fn load() -> Self {
        Self::load_from(&Self::get_config_file_path())
    }

    /// Load configuration from `config_file`, or create it from defaults if absent
    ///
    /// An existing file has missing fields merged in from defaults and is
    /// rewritten when that changed anything. An unreadable file falls back to
    /// defaults without being overwritten.
    #[must_use]
    pub fn load_from(config_file: &Path) -> Self {
        let defaults = Self::from_defaults();

        if config_file.exists() {
            if let Ok(content) = fs::read_to_string(config_file) {
                if let Ok(mut config) = Self::from_toml(&content) {
                    if config.merge_defaults(&defaults) {
                        let _ = config.save_to(config_file);
                    }
                    return config;
                }
            }
        } else {
            // First run: persist the defaults
            let _ = defaults.save_to(config_file);
            return defaults;
        }

        defaults
    }

    /// Save configuration to the user config file
    ///
    /// # Errors
    /// Returns an error if the config cannot be serialized, the directory
    /// cannot be created, or the file cannot be written
    pub fn save(&self) -> Result<(), Box<dyn std::error::Error>> {
        self.save_to(&Self::get_config_file_path())
    }

    /// Save configuration to `config_file`
    ///
    /// # Errors
    /// Returns an error if the config cannot be serialized, the directory
    /// cannot be created, or the file cannot be written
    pub fn save_to(&self, config_file: &Path) -> Result<(), Box<dyn std::error::Error>> {
        if let Some(parent) = config_file.parent() {
            fs::create_dir_all(parent)?;
        }
        let toml_str = toml::to_string_pretty(self)?;
        fs::write(config_file, toml_str)?;
        Ok(())
    }

    /// Get a configuration value by key
    ///
    /// Supported keys: `level`, `file`, `verbose`, `data_dir`, `session_file`,
    /// `splash_delay_ms`, `min_password_length` (dashes accepted in place of
    /// underscores).
    #[must_use]
    pub fn get(&self, key: &str) -> Option<String> {
        match normalize_key(key).as_str() {
            "level" => Some(self.logging.level.clone()),
            "file" => Some(self.logging.file.clone()),
            "verbose" => Some(self.logging.verbose.to_string()),
            "data_dir" => Some(self.storage.data_dir.clone()),
            "session_file" => Some(self.storage.session_file.clone()),
            "splash_delay_ms" => Some(self.portal.splash_delay_ms.to_string()),
            "min_password_length" => Some(self.portal.min_password_length.to_string()),
            _ => None,
        }
    }

    /// Set a configuration value by key
    ///
    /// Updates the in-memory config only; call [`save()`](Config::save) to persist.
    ///
    /// # Errors
    /// Returns an error if the key is unknown or the value does not parse
    pub fn set(&mut self, key: &str, value: &str) -> Result<(), String> {
        match normalize_key(key).as_str() {
            "level" => self.logging.level = value.to_string(),
            "file" => self.logging.file = value.to_string(),
            "verbose" => {
                self.logging.verbose = value
                    .parse::<bool>()
                    .map_err(|_| format!("Invalid boolean value for 'verbose': '{value}'"))?;
            }
            "data_dir" => self.storage.data_dir = value.to_string(),
            "session_file" => {
                if value.trim().is_empty() {
                    return Err("'session_file' cannot be empty".to_string());
                }
                self.storage.session_file = value.to_string();
            }
            "splash_delay_ms" => {
                self.portal.splash_delay_ms = value.parse::<u64>().map_err(|_| {
                    format!("Invalid millisecond value for 'splash_delay_ms': '{value}'")
                })?;
            }
            "min_password_length" => {
                let min = value.parse::<usize>().map_err(|_| {
                    format!("Invalid length for 'min_password_length': '{value}'")
                })?;
                if min == 0 {
                    return Err("'min_password_length' must be at least 1".to_string());
                }
                self.portal.min_password_length = min;
            }
            _ => return Err(format!("Unknown config key: '{key}'")),
        }
        Ok(())
    }

    /// Unset a configuration value by key (reset to default)
    ///
    /// # Errors
    /// Returns an error if the key is unknown
    pub fn unset(&mut self, key: &str, defaults: &Self) -> Result<(), String> {
        match normalize_key(key).as_str() {
            "level" => self.logging.level.clone_from(&defaults.logging.level),
            "file" => self.logging.file.clone_from(&defaults.logging.file),
            "verbose" => self.logging.verbose = defaults.logging.verbose,
            "data_dir" => self.storage.data_dir.clone_from(&defaults.storage.data_dir),
            "session_file" => self
                .storage
                .session_file
                .clone_from(&defaults.storage.session_file),
            "splash_delay_ms" => self.portal.splash_delay_ms = defaults.portal.splash_delay_ms,
            "min_password_length" => {
                self.portal.min_password_length = defaults.portal.min_password_length;
            }
            _ => return Err(format!("Unknown config key: '{key}'")),
        }
        Ok(())
    }

    /// Reset all configuration to defaults by deleting the config file
    ///
    /// # Errors
    /// Returns an error if the config file exists but cannot be deleted
    pub fn reset() -> Result<(), std::io::Error> {
        let config_file = Self::get_config_file_path();
        if config_file.exists() {
            fs::remove_file(config_file)?;
        }
        Ok(())
    }
}

fn normalize_key(key: &str) -> String {
    key.trim().replace('-', "_")
}

impl fmt::Display for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "[logging]")?;
        writeln!(f, "  level = \"{}\"", self.logging.level)?;
        writeln!(f, "  file = \"{}\"", self.logging.file)?;
        writeln!(f, "  verbose = {}", self.logging.verbose)?;

        writeln!(f, "\n[storage]")?;
        writeln!(f, "  data_dir = \"{}\"", self.storage.data_dir)?;
        writeln!(f, "  session_file = \"{}\"", self.storage.session_file)?;

        writeln!(f, "\n[portal]")?;
        writeln!(f, "  splash_delay_ms = {}", self.portal.splash_delay_ms)?;
        writeln!(f, "  min_password_length = {}", self.portal.min_password_length)?;

        Ok(())
    }
}
