use std::path::PathBuf;

use eyre::Result;
use log::debug;
use serde::{Deserialize, Serialize};

use crate::summarize::is_anthropic_model;

pub const DEFAULT_MODEL: &str = "claude-sonnet-4-6";

#[derive(Debug, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct Config {
    pub default_model: Option<String>,
}

impl Config {
    /// Load config from ~/.config/nutshell/config.toml if it exists
    pub fn load() -> Result<Self> {
        let path = config_path();
        if path.exists() {
            debug!("Loading config from {}", path.display());
            let content = std::fs::read_to_string(&path)?;
            let config: Config = toml::from_str(&content)?;
            Ok(config)
        } else {
            debug!("No config file found at {}", path.display());
            Ok(Config::default())
        }
    }
}

pub fn config_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from(".config"))
        .join("nutshell")
        .join("config.toml")
}

/// Environment variable holding the credential for the given model's provider
pub fn api_key_var(model: &str) -> &'static str {
    if is_anthropic_model(model) {
        "ANTHROPIC_API_KEY"
    } else {
        "OPENAI_API_KEY"
    }
}

/// Read the summarization credential from the environment. Called once at
/// startup; the key is handed to the summarizer at construction time.
pub fn resolve_api_key(model: &str) -> Result<String> {
    let var = api_key_var(model);
    std::env::var(var)
        .map_err(|_| eyre::eyre!("{var} environment variable not set (required to summarize with {model})"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_config() {
        let toml_str = r#"default_model = "gpt-4o""#;
        let config: Config = toml::from_str(toml_str).unwrap();
        assert_eq!(config.default_model.as_deref(), Some("gpt-4o"));
    }

    #[test]
    fn test_parse_empty_config() {
        let toml_str = "";
        let config: Config = toml::from_str(toml_str).unwrap();
        assert!(config.default_model.is_none());
    }

    #[test]
    fn test_parse_config_ignores_unknown_keys() {
        let toml_str = "default_model = \"gpt-4o\"\nleftover_setting = true\n";
        let config: Config = toml::from_str(toml_str).unwrap();
        assert_eq!(config.default_model.as_deref(), Some("gpt-4o"));
    }

    #[test]
    fn test_api_key_var() {
        assert_eq!(api_key_var("claude-sonnet-4-6"), "ANTHROPIC_API_KEY");
        assert_eq!(api_key_var("gpt-4o-mini"), "OPENAI_API_KEY");
    }
}
