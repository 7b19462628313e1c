//! Wiring: turns configuration into a ready `GuessChecker`.

use crate::adapters::{OpenAiComparator, OrderedWordsComparator};
use crate::config::toml_config::GameConfig;
use crate::config::{JudgeKind, OpenAiSettings};
use crate::core::checker::GuessChecker;
use crate::domain::ports::Comparator;
use crate::utils::error::Result;
use crate::utils::validation::Validate;
use std::path::Path;
use std::sync::Arc;

/// Load the game file, or the built-in one when no path is given.
pub fn load_game_config(path: Option<&Path>) -> Result<GameConfig> {
    let config = match path {
        Some(path) => {
            tracing::info!("Loading game config from {}", path.display());
            GameConfig::from_file(path)?
        }
        None => GameConfig::builtin()?,
    };
    config.validate()?;
    Ok(config)
}

/// Pick the comparator. A missing OpenAI credential yields `None`, which
/// leaves the server running with the guess endpoint disabled.
pub fn build_comparator(
    judge: JudgeKind,
    game: &GameConfig,
    openai: &OpenAiSettings,
) -> Result<Option<Arc<dyn Comparator>>> {
    match judge {
        JudgeKind::Local => {
            tracing::info!("Using local in-order word judge");
            let comparator: Arc<dyn Comparator> = Arc::new(OrderedWordsComparator::new());
            Ok(Some(comparator))
        }
        JudgeKind::Openai if !openai.is_configured() => {
            tracing::warn!(
                "Error: Could not initialize OpenAI client. Is {} set?",
                crate::config::API_KEY_ENV
            );
            Ok(None)
        }
        JudgeKind::Openai => {
            openai.validate()?;
            let comparator: Arc<dyn Comparator> =
                Arc::new(OpenAiComparator::new(openai, game.prompt.clone())?);
            tracing::info!("OpenAI client initialized successfully (model {}).", openai.model);
            Ok(Some(comparator))
        }
    }
}

pub fn build_checker(
    judge: JudgeKind,
    game: &GameConfig,
    openai: &OpenAiSettings,
) -> Result<GuessChecker> {
    let phrases = game.phrase_list()?;
    let comparator = build_comparator(judge, game, openai)?;
    Ok(GuessChecker::new(phrases, comparator))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn settings(api_key: Option<&str>) -> OpenAiSettings {
        OpenAiSettings {
            api_key: api_key.map(str::to_string),
            model: "gpt-4o-mini".to_string(),
            api_base: "https://api.openai.com/v1".to_string(),
        }
    }

    #[test]
    fn test_openai_without_key_is_disabled() {
        let game = GameConfig::builtin().unwrap();
        let checker = build_checker(JudgeKind::Openai, &game, &settings(None)).unwrap();
        assert_eq!(checker.comparator_name(), None);
        assert_eq!(checker.phrases().len(), 10);
    }

    #[test]
    fn test_openai_with_key() {
        let game = GameConfig::builtin().unwrap();
        let checker = build_checker(JudgeKind::Openai, &game, &settings(Some("sk-test"))).unwrap();
        assert_eq!(checker.comparator_name(), Some("openai"));
    }

    #[test]
    fn test_local_judge_needs_no_key() {
        let game = GameConfig::builtin().unwrap();
        let checker = build_checker(JudgeKind::Local, &game, &settings(None)).unwrap();
        assert_eq!(checker.comparator_name(), Some("local"));
    }

    #[test]
    fn test_load_game_config_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(
            br#"
[game]
phrases = ["Hold the line"]

[prompt]
system = "JSON only."
user = "{expected} vs {spoken}"
"#,
        )
        .unwrap();

        let config = load_game_config(Some(file.path())).unwrap();
        assert_eq!(config.game.phrases, vec!["Hold the line"]);

        assert!(load_game_config(None).is_ok());
        assert!(load_game_config(Some(Path::new("/nonexistent/game.toml"))).is_err());
    }
}
