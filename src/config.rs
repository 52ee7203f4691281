//! Configuration management for path-sanitizer
//!
//! Loads the repair policy from an optional TOML file with environment
//! overrides. Every field has a default, so no file is required.

use config::{Config, Environment, File};
use serde::Deserialize;
use std::path::Path;

use crate::error::PolicyError;
use crate::inspect::DEFAULT_MAX_LENGTH;
use crate::repair::{DEFAULT_REPLACEMENT_CHAR, RepairPolicy};

/// Files searched, in order, when no explicit path is given
const CONFIG_PATHS: [&str; 2] = ["path-sanitizer", "config/path-sanitizer"];

/// Environment prefix, e.g. `PATH_SANITIZER_MAX_LENGTH=200`
const ENV_PREFIX: &str = "PATH_SANITIZER";

/// Raw settings as read from file and environment
#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct SanitizerSettings {
    pub replace_illegal_chars: bool,

    /// Must be a single accepted filename character
    pub replacement_char: String,

    pub clip_overlength: bool,
    pub max_length: usize,
    pub create_missing_directory: bool,
}

impl Default for SanitizerSettings {
    fn default() -> Self {
        Self {
            replace_illegal_chars: true,
            replacement_char: DEFAULT_REPLACEMENT_CHAR.to_string(),
            clip_overlength: true,
            max_length: DEFAULT_MAX_LENGTH,
            create_missing_directory: true,
        }
    }
}

impl SanitizerSettings {
    /// Load settings from the default config files with environment overrides
    pub fn load() -> Result<Self, config::ConfigError> {
        let mut builder = Config::builder();
        for config_path in CONFIG_PATHS {
            builder = builder.add_source(File::with_name(config_path).required(false));
        }
        let settings = builder
            .add_source(Environment::with_prefix(ENV_PREFIX))
            .build()?;

        let config: SanitizerSettings = settings.try_deserialize()?;
        config.validate()?;
        Ok(config)
    }

    /// Load settings from one explicit file, without environment overrides
    pub fn load_from(path: &Path) -> Result<Self, config::ConfigError> {
        let settings = Config::builder().add_source(File::from(path)).build()?;

        let config: SanitizerSettings = settings.try_deserialize()?;
        config.validate()?;
        Ok(config)
    }

    /// Convert into a validated repair policy
    pub fn policy(&self) -> Result<RepairPolicy, PolicyError> {
        let mut chars = self.replacement_char.chars();
        let replacement = match (chars.next(), chars.next()) {
            (Some(c), None) => c,
            _ => {
                return Err(PolicyError::InvalidReplacement(
                    self.replacement_char.clone(),
                ));
            }
        };

        RepairPolicy::builder()
            .replace_illegal_chars(self.replace_illegal_chars)
            .replacement_char(replacement)
            .clip_overlength(self.clip_overlength)
            .max_length(self.max_length)
            .create_missing_directory(self.create_missing_directory)
            .build()
    }

    fn validate(&self) -> Result<(), config::ConfigError> {
        self.policy()
            .map(|_| ())
            .map_err(|e| config::ConfigError::Message(e.to_string()))
    }
}
