use crate::utils::error::{GameError, Result};
use crate::utils::validation::{validate_non_empty_string, validate_positive_number};

/// The ordered phrases a player is asked to repeat. Fixed for the lifetime
/// of the process.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PhraseList {
    phrases: Vec<String>,
}

impl PhraseList {
    pub fn new(phrases: Vec<String>) -> Result<Self> {
        validate_positive_number("game.phrases", phrases.len(), 1)?;
        for (i, phrase) in phrases.iter().enumerate() {
            validate_non_empty_string(&format!("game.phrases[{}]", i), phrase)?;
        }
        Ok(Self { phrases })
    }

    /// Bounds-checked lookup. Negative indices are rejected rather than
    /// counted from the end.
    pub fn get(&self, index: i64) -> Result<&str> {
        usize::try_from(index)
            .ok()
            .and_then(|i| self.phrases.get(i))
            .map(String::as_str)
            .ok_or(GameError::IndexOutOfRange {
                index,
                len: self.phrases.len(),
            })
    }

    pub fn len(&self) -> usize {
        self.phrases.len()
    }

    pub fn is_empty(&self) -> bool {
        self.phrases.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.phrases.iter().map(String::as_str)
    }
}
