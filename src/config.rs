use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use anyhow::Result;
use regex::Regex;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub system_config: SystemConfig,
    #[serde(default)]
    pub translator_config: TranslatorConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SystemConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

impl Default for SystemConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

/// Selects and configures the backend that performs the actual translation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TranslatorConfig {
    #[serde(default = "default_translator_model")]
    pub translator_model: String,
    #[serde(default)]
    pub google: GoogleConfig,
    #[serde(default)]
    pub translation_service: TranslationServiceConfig,
}

fn default_translator_model() -> String {
    "google".to_string()
}

impl Default for TranslatorConfig {
    fn default() -> Self {
        Self {
            translator_model: default_translator_model(),
            google: GoogleConfig::default(),
            translation_service: TranslationServiceConfig::default(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GoogleConfig {
    #[serde(default = "default_google_base_url")]
    pub base_url: String,
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

fn default_google_base_url() -> String {
    "https://translate.googleapis.com/translate_a/single".to_string()
}

fn default_user_agent() -> String {
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36".to_string()
}

impl Default for GoogleConfig {
    fn default() -> Self {
        Self {
            base_url: default_google_base_url(),
            user_agent: default_user_agent(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TranslationServiceConfig {
    #[serde(default = "default_service_url")]
    pub base_url: String,
}

fn default_service_url() -> String {
    "http://localhost:8000".to_string()
}

impl Default for TranslationServiceConfig {
    fn default() -> Self {
        Self {
            base_url: default_service_url(),
        }
    }
}

impl Config {
    pub fn load(path: &str) -> Result<Self> {
        if !Path::new(path).exists() {
            anyhow::bail!("Configuration file not found: {}", path);
        }

        let bytes = fs::read(path)?;
        // decode() strips a UTF-8 BOM if present
        let (content, _, had_errors) = encoding_rs::UTF_8.decode(&bytes);
        if had_errors {
            anyhow::bail!("Configuration file is not valid UTF-8: {}", path);
        }
        let content = substitute_env_vars(&content);

        Self::parse(path, &content)
    }

    /// Parse configuration text, choosing the format by the file extension
    pub fn parse(path: &str, content: &str) -> Result<Self> {
        let path_lower = path.to_lowercase();
        if path_lower.ends_with(".json") {
            let config: Config = serde_json::from_str(content)?;
            Ok(config)
        } else {
            let config: Config = serde_yaml::from_str(content)?;
            Ok(config)
        }
    }
}

/// Replace `${VAR_NAME}` with the value of the environment variable.
/// Unset variables are left as-is.
pub fn substitute_env_vars(content: &str) -> String {
    let pattern = Regex::new(r"\$\{(\w+)\}").expect("static pattern is valid");
    pattern
        .replace_all(content, |caps: &regex::Captures| {
            std::env::var(&caps[1]).unwrap_or_else(|_| caps[0].to_string())
        })
        .into_owned()
}
