//! # vox-config
//!
//! Layered configuration loading for voxtask using figment.
//!
//! Configuration sources (in priority order, highest wins):
//! 1. Environment variables (`VOXTASK_*` prefix, `__` as separator)
//! 2. Project-level `.voxtask/config.toml`
//! 3. User-level `~/.config/voxtask/config.toml`
//! 4. Built-in defaults (including the built-in lexicon)
//!
//! # Environment Variable Mapping
//!
//! Figment maps `VOXTASK_GENERAL__DEFAULT_FORMAT` -> `general.default_format`, etc.
//! The `__` (double underscore) separates nested config sections.
//!
//! # Lexicon overrides
//!
//! Each lexicon table is replaced wholesale by a config file that names it:
//!
//! ```toml
//! [[lexicon.reminders]]
//! phrase = "half an hour"
//! minutes = 30
//! ```
//!
//! Tables a file does not mention keep their built-in entries.

mod error;
mod general;

pub use error::ConfigError;
pub use general::{GeneralConfig, OUTPUT_FORMATS};

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use vox_core::Lexicon;

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct VoxConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub lexicon: Lexicon,
}

impl VoxConfig {
    /// Load configuration from all sources (TOML files + environment variables).
    ///
    /// Does NOT call `dotenvy` -- use [`VoxConfig::load_with_dotenv`] if you need
    /// `.env` file loading.
    pub fn load() -> Result<Self, ConfigError> {
        Self::from_figment(&Self::figment())
    }

    /// Load configuration with `.env` file support.
    pub fn load_with_dotenv() -> Result<Self, ConfigError> {
        Self::load_dotenv_from_workspace();
        Self::load()
    }

    /// Extract and validate a config from an arbitrary provider chain.
    pub fn from_figment(figment: &Figment) -> Result<Self, ConfigError> {
        let config: Self = figment.extract()?;
        config.validate()?;
        Ok(config)
    }

    /// Build the figment provider chain.
    ///
    /// This is public so tests can inspect the figment directly or add
    /// additional providers on top.
    pub fn figment() -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        // Layer 1: User-global config
        if let Some(global_path) = Self::global_config_path() {
            if global_path.exists() {
                tracing::debug!(path = %global_path.display(), "merging user config");
                figment = figment.merge(Toml::file(global_path));
            }
        }

        // Layer 2: Project-local config
        let local_path = PathBuf::from(".voxtask/config.toml");
        if local_path.exists() {
            tracing::debug!(path = %local_path.display(), "merging project config");
            figment = figment.merge(Toml::file(local_path));
        }

        // Layer 3: Environment variables (highest priority)
        figment = figment.merge(Env::prefixed("VOXTASK_").split("__"));

        figment
    }

    /// Reject a lexicon that would misclassify everything, and unknown formats.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.lexicon
            .validate()
            .map_err(|error| ConfigError::InvalidValue {
                field: "lexicon".into(),
                reason: error.to_string(),
            })?;

        if !self.general.has_known_format() {
            return Err(ConfigError::InvalidValue {
                field: "general.default_format".into(),
                reason: format!(
                    "'{}' is not one of {}",
                    self.general.default_format,
                    OUTPUT_FORMATS.join(", ")
                ),
            });
        }
        Ok(())
    }

    /// The effective lexicon as a TOML document, ready to paste into a config file.
    pub fn lexicon_toml(&self) -> Result<String, ConfigError> {
        #[derive(Serialize)]
        struct Document<'a> {
            lexicon: &'a Lexicon,
        }

        Ok(toml::to_string_pretty(&Document {
            lexicon: &self.lexicon,
        })?)
    }

    /// Path to the user-global config file.
    fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("voxtask").join("config.toml"))
    }

    /// Load `.env` from the workspace root.
    ///
    /// Walks up from `CARGO_MANIFEST_DIR` (if available) or current dir looking
    /// for a `.env` file. Silently does nothing if no `.env` is found.
    fn load_dotenv_from_workspace() {
        if let Ok(manifest_dir) = std::env::var("CARGO_MANIFEST_DIR") {
            let mut dir = PathBuf::from(manifest_dir);
            // Walk up at most 3 levels (crate -> crates/ -> workspace root)
            for _ in 0..3 {
                let env_path = dir.join(".env");
                if env_path.exists() {
                    let _ = dotenvy::from_path(&env_path);
                    return;
                }
                if !dir.pop() {
                    break;
                }
            }
        }

        let _ = dotenvy::dotenv();
    }
}
