use crate::utils::error::Result;
use async_trait::async_trait;

/// Judges whether a spoken sentence matches the expected one.
///
/// Both arguments are already normalized. Implementations decide what
/// counts as a match; the checker only forwards the verdict.
#[async_trait]
pub trait Comparator: Send + Sync {
    async fn judge(&self, expected: &str, spoken: &str) -> Result<bool>;

    /// Short label used in logs and the health endpoint.
    fn name(&self) -> &str;
}
