//! General application configuration.

use serde::{Deserialize, Serialize};

/// Output formats the CLI knows how to render.
pub const OUTPUT_FORMATS: [&str; 3] = ["json", "table", "raw"];

fn default_format() -> String {
    String::from("json")
}

/// Default result limit.
const fn default_limit() -> u32 {
    20
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct GeneralConfig {
    /// Output format used when `--format` is not given.
    #[serde(default = "default_format")]
    pub default_format: String,

    /// Default result limit for `vox filter`.
    #[serde(default = "default_limit")]
    pub default_limit: u32,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            default_format: default_format(),
            default_limit: default_limit(),
        }
    }
}

impl GeneralConfig {
    #[must_use]
    pub fn has_known_format(&self) -> bool {
        OUTPUT_FORMATS.contains(&self.default_format.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_correct() {
        let config = GeneralConfig::default();
        assert_eq!(config.default_format, "json");
        assert_eq!(config.default_limit, 20);
        assert!(config.has_known_format());
    }

    #[test]
    fn unknown_format_is_flagged() {
        let config = GeneralConfig {
            default_format: "xml".into(),
            ..GeneralConfig::default()
        };
        assert!(!config.has_known_format());
    }
}
