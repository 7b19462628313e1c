use crate::core::normalize::normalize_text;
use crate::domain::model::{GuessRequest, MatchResult};
use crate::domain::phrases::PhraseList;
use crate::domain::ports::Comparator;
use crate::utils::error::{GameError, Result};
use std::sync::Arc;

/// Checks a transcript against the phrase at the requested index.
///
/// The comparator is optional: without one every check fails with
/// `ComparatorNotConfigured` before any other work is done.
#[derive(Clone)]
pub struct GuessChecker {
    phrases: Arc<PhraseList>,
    comparator: Option<Arc<dyn Comparator>>,
}

impl GuessChecker {
    pub fn new(phrases: PhraseList, comparator: Option<Arc<dyn Comparator>>) -> Self {
        Self {
            phrases: Arc::new(phrases),
            comparator,
        }
    }

    pub fn phrases(&self) -> &PhraseList {
        &self.phrases
    }

    pub fn comparator_name(&self) -> Option<&str> {
        self.comparator.as_deref().map(|c| c.name())
    }

    pub async fn check(&self, request: &GuessRequest) -> Result<MatchResult> {
        let comparator = self
            .comparator
            .as_ref()
            .ok_or_else(|| GameError::ComparatorNotConfigured {
                reason: "no comparator available".to_string(),
            })?;

        let expected = self.phrases.get(request.current_index)?;

        let normalized_user_text = normalize_text(&request.user_guess);
        let normalized_expected_text = normalize_text(expected);

        tracing::info!("User (clean): '{}'", normalized_user_text);
        tracing::info!("Expected (clean): '{}'", normalized_expected_text);

        let is_match = comparator
            .judge(&normalized_expected_text, &normalized_user_text)
            .await?;

        tracing::info!(
            "{} judge decided: {} (index {})",
            comparator.name(),
            is_match,
            request.current_index
        );

        Ok(MatchResult { is_match })
    }
}
