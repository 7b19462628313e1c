#[cfg(feature = "cli")]
pub mod cli;
pub mod toml_config;

use crate::utils::error::Result;
use crate::utils::validation::{validate_non_empty_string, validate_url, Validate};
use serde::{Deserialize, Serialize};
use std::env;

pub const API_KEY_ENV: &str = "OPENAI_API_KEY";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[serde(rename_all = "lowercase")]
pub enum JudgeKind {
    /// Ask the OpenAI chat model (needs OPENAI_API_KEY)
    Openai,
    /// Deterministic in-order word matching, no network
    Local,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    Compact,
    Json,
}

/// Connection settings for the OpenAI chat comparator.
///
/// `api_key` is `None` when the credential is absent; the server still
/// starts, but every comparison request is rejected.
#[derive(Clone)]
pub struct OpenAiSettings {
    pub api_key: Option<String>,
    pub model: String,
    pub api_base: String,
}

impl OpenAiSettings {
    pub fn from_env(model: impl Into<String>, api_base: impl Into<String>) -> Self {
        let api_key = env::var(API_KEY_ENV)
            .ok()
            .map(|key| key.trim().to_string())
            .filter(|key| !key.is_empty());

        Self {
            api_key,
            model: model.into(),
            api_base: api_base.into(),
        }
    }

    pub fn is_configured(&self) -> bool {
        self.api_key.is_some()
    }
}

// The key never goes to the log.
impl std::fmt::Debug for OpenAiSettings {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OpenAiSettings")
            .field("api_key", &self.api_key.as_ref().map(|_| "<redacted>"))
            .field("model", &self.model)
            .field("api_base", &self.api_base)
            .finish()
    }
}

impl Validate for OpenAiSettings {
    fn validate(&self) -> Result<()> {
        validate_url("api_base", &self.api_base)?;
        validate_non_empty_string("model", &self.model)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_debug_redacts_key() {
        let settings = OpenAiSettings {
            api_key: Some("sk-secret".to_string()),
            model: "gpt-4o-mini".to_string(),
            api_base: "https://api.openai.com/v1".to_string(),
        };
        let printed = format!("{:?}", settings);
        assert!(!printed.contains("sk-secret"));
        assert!(printed.contains("<redacted>"));
        assert!(settings.is_configured());
        assert!(settings.validate().is_ok());
    }

    #[test]
    fn test_invalid_api_base() {
        let settings = OpenAiSettings {
            api_key: None,
            model: "gpt-4o-mini".to_string(),
            api_base: "not a url".to_string(),
        };
        assert!(!settings.is_configured());
        assert!(settings.validate().is_err());
    }
}
