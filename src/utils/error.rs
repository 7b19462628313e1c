use thiserror::Error;

#[derive(Error, Debug)]
pub enum GameError {
    #[error("Comparator is not configured: {reason}")]
    ComparatorNotConfigured { reason: String },

    #[error("Upstream request failed: {0}")]
    UpstreamError(#[from] reqwest::Error),

    #[error("Upstream returned status {status}: {body}")]
    UpstreamStatusError { status: u16, body: String },

    #[error("Malformed comparator response: {message}")]
    MalformedResponseError { message: String },

    #[error("Phrase index {index} is out of range (0..{len})")]
    IndexOutOfRange { index: i64, len: usize },

    #[error("Invalid request: {message}")]
    InvalidRequest { message: String },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value for {field} ({value}): {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing required configuration: {field}")]
    MissingConfigError { field: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// Server-side setup problem: missing credential, bad config file.
    Configuration,
    /// The external model service failed or could not be reached.
    Upstream,
    /// The caller sent something we refuse to process.
    Client,
    Internal,
}

impl GameError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            GameError::ComparatorNotConfigured { .. }
            | GameError::ConfigError { .. }
            | GameError::InvalidConfigValueError { .. }
            | GameError::MissingConfigError { .. } => ErrorCategory::Configuration,
            GameError::UpstreamError(_) | GameError::UpstreamStatusError { .. } => {
                ErrorCategory::Upstream
            }
            GameError::InvalidRequest { .. } => ErrorCategory::Client,
            GameError::MalformedResponseError { .. }
            | GameError::IndexOutOfRange { .. }
            | GameError::IoError(_)
            | GameError::SerializationError(_) => ErrorCategory::Internal,
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            GameError::ComparatorNotConfigured { .. } => {
                "Set OPENAI_API_KEY (or add it to .env), or start with --judge local"
            }
            GameError::UpstreamError(_) | GameError::UpstreamStatusError { .. } => {
                "Check network access and the model service status"
            }
            GameError::IndexOutOfRange { .. } => "Send a currentIndex within the phrase list",
            GameError::ConfigError { .. }
            | GameError::InvalidConfigValueError { .. }
            | GameError::MissingConfigError { .. } => "Review the game configuration file",
            _ => "See the server log for details",
        }
    }
}

pub type Result<T> = std::result::Result<T, GameError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_categories() {
        let err = GameError::ComparatorNotConfigured {
            reason: "no key".to_string(),
        };
        assert_eq!(err.category(), ErrorCategory::Configuration);

        let err = GameError::UpstreamStatusError {
            status: 502,
            body: String::new(),
        };
        assert_eq!(err.category(), ErrorCategory::Upstream);

        let err = GameError::IndexOutOfRange { index: 10, len: 10 };
        assert_eq!(err.category(), ErrorCategory::Internal);
        assert!(err.to_string().contains("10"));

        let err = GameError::InvalidRequest {
            message: "userGuess must not be empty".to_string(),
        };
        assert_eq!(err.category(), ErrorCategory::Client);
    }
}
