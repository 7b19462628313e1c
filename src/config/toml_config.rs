use crate::domain::phrases::PhraseList;
use crate::utils::error::{GameError, Result};
use crate::utils::validation::{
    validate_non_empty_string, validate_placeholders, validate_url, Validate,
};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Game data shipped with the binary.
const BUILTIN_GAME_TOML: &str = include_str!("../../config/game.toml");

pub const DEFAULT_MODEL: &str = "gpt-4o-mini";
pub const DEFAULT_API_BASE: &str = "https://api.openai.com/v1";

static ENV_VAR: Lazy<Regex> = Lazy::new(|| Regex::new(r"\$\{([^}]+)\}").unwrap());

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameConfig {
    pub game: GameSection,
    pub model: Option<ModelConfig>,
    pub prompt: PromptConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameSection {
    pub phrases: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModelConfig {
    pub name: Option<String>,
    pub api_base: Option<String>,
}

/// Prompt templates for the model judge. `user` must contain the
/// `{expected}` and `{spoken}` placeholders.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PromptConfig {
    pub system: String,
    pub user: String,
}

impl PromptConfig {
    pub fn render_user(&self, expected: &str, spoken: &str) -> String {
        self.user
            .replace("{expected}", expected)
            .replace("{spoken}", spoken)
    }
}

impl GameConfig {
    /// The configuration compiled into the binary.
    pub fn builtin() -> Result<Self> {
        Self::from_toml_str(BUILTIN_GAME_TOML)
    }

    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(GameError::IoError)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content);

        toml::from_str(&processed_content).map_err(|e| GameError::ConfigError {
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// Replace `${VAR}` with its environment value; unset variables stay as written.
    fn substitute_env_vars(content: &str) -> String {
        ENV_VAR
            .replace_all(content, |caps: &regex::Captures| {
                let var_name = &caps[1];
                std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
            })
            .into_owned()
    }

    pub fn phrase_list(&self) -> Result<PhraseList> {
        PhraseList::new(self.game.phrases.clone())
    }

    pub fn model_name(&self) -> &str {
        self.model
            .as_ref()
            .and_then(|m| m.name.as_deref())
            .unwrap_or(DEFAULT_MODEL)
    }

    pub fn api_base(&self) -> &str {
        self.model
            .as_ref()
            .and_then(|m| m.api_base.as_deref())
            .unwrap_or(DEFAULT_API_BASE)
    }
}

impl Validate for GameConfig {
    fn validate(&self) -> Result<()> {
        self.phrase_list()?;
        validate_url("model.api_base", self.api_base())?;
        validate_non_empty_string("model.name", self.model_name())?;
        validate_non_empty_string("prompt.system", &self.prompt.system)?;
        validate_placeholders("prompt.user", &self.prompt.user, &["expected", "spoken"])?;
        Ok(())
    }
}
