//! Configuration module for `NuAdvisor`

use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::PathBuf;

/// Default CLI configuration loaded based on build profile.
/// Uses release defaults in release mode, debug defaults in debug mode.
#[cfg(not(debug_assertions))]
const CONFIG_DEFAULTS: &str = include_str!("../assets/DefaultCLIConfigRelease.toml");

#[cfg(debug_assertions)]
const CONFIG_DEFAULTS: &str = include_str!("../assets/DefaultCLIConfigDebug.toml");

#[cfg(not(debug_assertions))]
const CONFIG_FILE_NAME: &str = "config.toml";

#[cfg(debug_assertions)]
const CONFIG_FILE_NAME: &str = "dconfig.toml";

/// Variable expanded to the configuration directory in path values
const DIR_VARIABLE: &str = "$NU_ADVISOR";

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

/// Advising workflow configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AdvisingConfig {
    /// Advising file used when a command is given no input file
    #[serde(default)]
    pub default_file: String,
    /// Submit every student's first draft plan before reviewing
    #[serde(default)]
    pub submit_drafts: bool,
}

/// Paths configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PathsConfig {
    /// Directory for review report files
    #[serde(default)]
    pub reports_dir: String,
}

/// Main configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Logging settings
    pub logging: LoggingConfig,
    /// Advising workflow settings
    #[serde(default)]
    pub advising: AdvisingConfig,
    /// Path settings
    #[serde(default)]
    pub paths: PathsConfig,
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
    /// Override default advising file
    pub default_file: Option<String>,
    /// Override draft submission before review
    pub submit_drafts: Option<bool>,
    /// Override reports output directory
    pub reports_dir: Option<String>,
}

impl Config {
    /// Get the `$NU_ADVISOR` directory path
    ///
    /// Returns:
    /// - Linux: `~/.config/nuadvisor`
    /// - macOS: `~/Library/Application Support/nuadvisor`
    /// - Windows: `%APPDATA%\nuadvisor`
    #[must_use]
    pub fn get_nuadvisor_dir() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("nuadvisor")
    }

    /// Merge missing fields from defaults into this config
    ///
    /// Only string fields that are empty here and non-empty in `defaults` are
    /// filled, so user settings survive upgrades that add new keys.
    ///
    /// # Returns
    ///
    /// `true` if any fields were added/changed, `false` otherwise
    pub fn merge_defaults(&mut self, defaults: &Self) -> bool {
        fn fill(target: &mut String, default: &str) -> bool {
            if target.is_empty() && !default.is_empty() {
                default.clone_into(target);
                true
            } else {
                false
            }
        }

        let mut changed = fill(&mut self.logging.level, &defaults.logging.level);
        changed |= fill(&mut self.logging.file, &defaults.logging.file);
        changed |= fill(
            &mut self.advising.default_file,
            &defaults.advising.default_file,
        );
        changed |= fill(&mut self.paths.reports_dir, &defaults.paths.reports_dir);
        changed
    }

    /// Apply CLI-provided overrides onto the loaded configuration
    ///
    /// Only non-`None` values replace config values; the config file is not
    /// touched.
    ///
    /// # Examples
    ///
    /// ```ignore
    /// let mut config = Config::load();
    /// let overrides = ConfigOverrides {
    ///     level: Some("debug".to_string()),
    ///     ..Default::default()
    /// };
    /// config.apply_overrides(&overrides);
    /// ```
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
        if let Some(default_file) = &overrides.default_file {
            self.advising.default_file.clone_from(default_file);
        }
        if let Some(submit_drafts) = overrides.submit_drafts {
            self.advising.submit_drafts = submit_drafts;
        }
        if let Some(reports_dir) = &overrides.reports_dir {
            self.paths.reports_dir.clone_from(reports_dir);
        }
    }

    /// Get the user config file path
    ///
    /// `config.toml` for release builds, `dconfig.toml` for debug builds, inside
    /// [`get_nuadvisor_dir`](Self::get_nuadvisor_dir).
    #[must_use]
    pub fn get_config_file_path() -> PathBuf {
        Self::get_nuadvisor_dir().join(CONFIG_FILE_NAME)
    }

    /// Expand `$NU_ADVISOR` in a string to the configuration directory
    #[must_use]
    fn expand_variables(value: &str) -> String {
        if value.contains(DIR_VARIABLE) {
            let dir = Self::get_nuadvisor_dir();
            value.replace(DIR_VARIABLE, dir.to_str().unwrap_or("."))
        } else {
            value.to_string()
        }
    }

    /// Initialize config from a TOML string
    ///
    /// Missing fields use their serde defaults and `$NU_ADVISOR` is expanded in
    /// path values.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML cannot be parsed or doesn't match the expected schema
    pub fn from_toml(toml_str: &str) -> Result<Self, toml::de::Error> {
        let mut config: Self = toml::from_str(toml_str)?;

        config.logging.file = Self::expand_variables(&config.logging.file);
        config.advising.default_file = Self::expand_variables(&config.advising.default_file);
        config.paths.reports_dir = Self::expand_variables(&config.paths.reports_dir);

        Ok(config)
    }

    /// Load configuration from embedded defaults
    ///
    /// # Panics
    /// Panics if the compiled-in default configuration is not valid TOML.
    #[must_use]
    pub fn from_defaults() -> Self {
        Self::from_toml(CONFIG_DEFAULTS).expect("Failed to parse compiled-in default configuration")
    }

    /// Load configuration from file, or create it from defaults if not found
    ///
    /// An existing file gets any newly added fields merged in from defaults and is
    /// saved back. Any read or parse error falls back to the defaults.
    #[must_use]
    pub fn load() -> Self {
        let config_file = Self::get_config_file_path();
        let defaults = Self::from_defaults();

        if !config_file.exists() {
            if let Some(parent) = config_file.parent() {
                let _ = fs::create_dir_all(parent);
            }
            let _ = defaults.save();
            return defaults;
        }

        match fs::read_to_string(&config_file)
            .ok()
            .and_then(|content| Self::from_toml(&content).ok())
        {
            Some(mut config) => {
                if config.merge_defaults(&defaults) {
                    let _ = config.save();
                }
                config
            }
            None => defaults,
        }
    }

    /// Save configuration to the platform config file
    ///
    /// # Errors
    /// Returns an error if the config cannot be serialized, or the directory or
    /// file cannot be written
    pub fn save(&self) -> Result<(), Box<dyn std::error::Error>> {
        let config_file = Self::get_config_file_path();
        if let Some(parent) = config_file.parent() {
            fs::create_dir_all(parent)?;
        }
        let toml_str = toml::to_string_pretty(self)?;
        fs::write(&config_file, toml_str)?;
        Ok(())
    }

    /// Get a configuration value by key
    ///
    /// Supported keys: `level`, `file`, `verbose`, `default_file`,
    /// `submit_drafts`, `reports_dir` (dashed spellings are accepted too).
    #[must_use]
    pub fn get(&self, key: &str) -> Option<String> {
        match key {
            "level" => Some(self.logging.level.clone()),
            "file" => Some(self.logging.file.clone()),
            "verbose" => Some(self.logging.verbose.to_string()),
            "default_file" | "default-file" => Some(self.advising.default_file.clone()),
            "submit_drafts" | "submit-drafts" => Some(self.advising.submit_drafts.to_string()),
            "reports_dir" | "reports-dir" => Some(self.paths.reports_dir.clone()),
            _ => None,
        }
    }

    /// Set a configuration value by key
    ///
    /// Updates the in-memory config only; call [`save()`](Config::save) to persist.
    ///
    /// # Errors
    /// Returns an error if the key is unknown, the level is not a log level, or
    /// a boolean value cannot be parsed
    pub fn set(&mut self, key: &str, value: &str) -> Result<(), String> {
        match key {
            "level" => {
                if crate::logger::Level::parse(value).is_none() {
                    return Err(format!("Invalid log level: '{value}'"));
                }
                self.logging.level = value.to_ascii_lowercase();
            }
            "file" => self.logging.file = value.to_string(),
            "verbose" => self.logging.verbose = parse_bool(key, value)?,
            "default_file" | "default-file" => self.advising.default_file = value.to_string(),
            "submit_drafts" | "submit-drafts" => {
                self.advising.submit_drafts = parse_bool(key, value)?;
            }
            "reports_dir" | "reports-dir" => self.paths.reports_dir = value.to_string(),
            _ => return Err(format!("Unknown config key: '{key}'")),
        }
        Ok(())
    }

    /// Unset a configuration value by key (reset to default)
    ///
    /// # Errors
    /// Returns an error if the key is not recognized.
    pub fn unset(&mut self, key: &str, defaults: &Self) -> Result<(), String> {
        match key {
            "level" => self.logging.level.clone_from(&defaults.logging.level),
            "file" => self.logging.file.clone_from(&defaults.logging.file),
            "verbose" => self.logging.verbose = defaults.logging.verbose,
            "default_file" | "default-file" => self
                .advising
                .default_file
                .clone_from(&defaults.advising.default_file),
            "submit_drafts" | "submit-drafts" => {
                self.advising.submit_drafts = defaults.advising.submit_drafts;
            }
            "reports_dir" | "reports-dir" => self
                .paths
                .reports_dir
                .clone_from(&defaults.paths.reports_dir),
            _ => return Err(format!("Unknown config key: '{key}'")),
        }
        Ok(())
    }

    /// Reset all configuration to defaults by deleting the config file
    ///
    /// Succeeds without doing anything if the file does not exist.
    ///
    /// # Errors
    /// Returns an error if the file exists but cannot be deleted
    pub fn reset() -> Result<(), std::io::Error> {
        let config_file = Self::get_config_file_path();
        if config_file.exists() {
            fs::remove_file(config_file)?;
        }
        Ok(())
    }
}

fn parse_bool(key: &str, value: &str) -> Result<bool, String> {
    value
        .parse::<bool>()
        .map_err(|_| format!("Invalid boolean value for '{key}': '{value}'"))
}

impl fmt::Display for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "[logging]")?;
        writeln!(f, "  level = \"{}\"", self.logging.level)?;
        writeln!(f, "  file = \"{}\"", self.logging.file)?;
        writeln!(f, "  verbose = {}", self.logging.verbose)?;

        writeln!(f, "\n[advising]")?;
        writeln!(f, "  default_file = \"{}\"", self.advising.default_file)?;
        writeln!(f, "  submit_drafts = {}", self.advising.submit_drafts)?;

        writeln!(f, "\n[paths]")?;
        writeln!(f, "  reports_dir = \"{}\"", self.paths.reports_dir)?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_rejects_bad_level() {
        let mut config = Config::default();
        assert!(config.set("level", "loud").is_err());
        assert!(config.set("level", "DEBUG").is_ok());
        assert_eq!(config.logging.level, "debug");
    }

    #[test]
    fn test_expand_variables() {
        let expanded = Config::expand_variables("$NU_ADVISOR/reports");
        assert!(!expanded.contains(DIR_VARIABLE));
        assert!(expanded.ends_with("reports"));
        assert_eq!(Config::expand_variables("./plain"), "./plain");
    }
}
