//! Mapping from internal errors to the three response shapes clients see.

use crate::domain::model::ErrorBody;
use crate::utils::error::{ErrorCategory, GameError};
use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

pub const NOT_CONFIGURED_MESSAGE: &str = "OpenAI client not configured.";
pub const UPSTREAM_MESSAGE: &str = "Failed to communicate with OpenAI";
pub const INTERNAL_MESSAGE: &str = "An internal server error occurred.";

#[derive(Debug)]
pub enum ApiError {
    /// Body could not be turned into a `GuessRequest`.
    Rejected(JsonRejection),
    Game(GameError),
}

impl From<GameError> for ApiError {
    fn from(err: GameError) -> Self {
        ApiError::Game(err)
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::Rejected(rejection)
    }
}

impl ApiError {
    pub fn status_and_message(&self) -> (StatusCode, String) {
        match self {
            ApiError::Rejected(rejection) => (rejection.status(), rejection.body_text()),
            ApiError::Game(err) => match err.category() {
                ErrorCategory::Configuration => (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    NOT_CONFIGURED_MESSAGE.to_string(),
                ),
                ErrorCategory::Upstream => {
                    (StatusCode::SERVICE_UNAVAILABLE, UPSTREAM_MESSAGE.to_string())
                }
                ErrorCategory::Client => (StatusCode::UNPROCESSABLE_ENTITY, err.to_string()),
                ErrorCategory::Internal => (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    INTERNAL_MESSAGE.to_string(),
                ),
            },
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = self.status_and_message();

        match &self {
            ApiError::Rejected(rejection) => {
                tracing::warn!("Rejected request body: {}", rejection.body_text());
            }
            ApiError::Game(err) => match err.category() {
                ErrorCategory::Configuration => {
                    tracing::error!("{} ({})", err, err.recovery_suggestion());
                }
                ErrorCategory::Upstream => {
                    tracing::error!("An error occurred with the OpenAI API: {}", err);
                }
                ErrorCategory::Client => tracing::warn!("{}", err),
                ErrorCategory::Internal => {
                    tracing::error!("An unexpected error occurred: {}", err);
                }
            },
        }

        (status, Json(ErrorBody { error: message })).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_game_error_shapes() {
        let (status, message) = ApiError::from(GameError::ComparatorNotConfigured {
            reason: "missing key".to_string(),
        })
        .status_and_message();
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(message, "OpenAI client not configured.");

        let (status, message) = ApiError::from(GameError::UpstreamStatusError {
            status: 429,
            body: "rate limited".to_string(),
        })
        .status_and_message();
        assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
        assert_eq!(message, "Failed to communicate with OpenAI");

        let (status, message) =
            ApiError::from(GameError::IndexOutOfRange { index: 12, len: 10 }).status_and_message();
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(message, "An internal server error occurred.");

        let (status, message) = ApiError::from(GameError::MalformedResponseError {
            message: "not json".to_string(),
        })
        .status_and_message();
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(message, INTERNAL_MESSAGE);
    }

    #[test]
    fn test_client_error_keeps_detail() {
        let (status, message) = ApiError::from(GameError::InvalidRequest {
            message: "userGuess must not be empty".to_string(),
        })
        .status_and_message();
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert!(message.contains("userGuess"));
    }
}
