use crate::domain::ports::Comparator;
use crate::utils::error::Result;
use async_trait::async_trait;

const ARTICLES: &[&str] = &["a", "an", "the"];
const FILLERS: &[&str] = &["um", "uh", "er", "ah", "hmm", "like"];

/// Offline judge: the expected key words must appear in the spoken words,
/// in the same relative order. Articles and filler words are ignored on
/// both sides; extra spoken words are allowed.
#[derive(Debug, Default, Clone)]
pub struct OrderedWordsComparator;

impl OrderedWordsComparator {
    pub fn new() -> Self {
        Self
    }

    fn key_words(text: &str) -> Vec<&str> {
        text.split_whitespace()
            .filter(|w| !ARTICLES.contains(w) && !FILLERS.contains(w))
            .collect()
    }

    pub fn matches(expected: &str, spoken: &str) -> bool {
        let expected = Self::key_words(expected);
        if expected.is_empty() {
            return false;
        }

        let mut spoken = Self::key_words(spoken).into_iter();
        expected
            .iter()
            .all(|word| spoken.by_ref().any(|candidate| candidate == *word))
    }
}

#[async_trait]
impl Comparator for OrderedWordsComparator {
    async fn judge(&self, expected: &str, spoken: &str) -> Result<bool> {
        Ok(Self::matches(expected, spoken))
    }

    fn name(&self) -> &str {
        "local"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identical() {
        assert!(OrderedWordsComparator::matches("keep going", "keep going"));
    }

    #[test]
    fn test_reordered_is_rejected() {
        assert!(!OrderedWordsComparator::matches(
            "stay low and follow me",
            "follow me and stay low"
        ));
    }

    #[test]
    fn test_substitution_is_rejected() {
        assert!(!OrderedWordsComparator::matches("stay low and follow me", "get low and follow me"));
        assert!(!OrderedWordsComparator::matches("we are almost there", "we are there"));
    }

    #[test]
    fn test_articles_and_fillers_ignored() {
        assert!(OrderedWordsComparator::matches(
            "the camp should be ahead",
            "um a camp should uh be ahead"
        ));
    }

    #[test]
    fn test_empty_expected_never_matches() {
        assert!(!OrderedWordsComparator::matches("", "anything"));
        assert!(!OrderedWordsComparator::matches("the", "the"));
    }

    #[test]
    fn test_judge() {
        let comparator = OrderedWordsComparator::new();
        assert!(tokio_test::block_on(comparator.judge("i hope this ends", "i hope this ends")).unwrap());
        assert!(!tokio_test::block_on(comparator.judge("i hope this ends", "this ends i hope")).unwrap());
        assert_eq!(comparator.name(), "local");
    }
}
