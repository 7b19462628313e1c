use crate::domain::model::{GuessRequest, MatchResult};
use crate::server::error::ApiError;
use crate::server::AppState;
use crate::utils::error::GameError;
use axum::{
    extract::{rejection::JsonRejection, State},
    Json,
};
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub comparator: Option<String>,
    pub phrases: usize,
    pub version: &'static str,
}

/// POST /check-text-guess
pub async fn check_text_guess(
    State(state): State<AppState>,
    payload: Result<Json<GuessRequest>, JsonRejection>,
) -> Result<Json<MatchResult>, ApiError> {
    let Json(request) = payload?;

    if request.user_guess.trim().is_empty() {
        return Err(GameError::InvalidRequest {
            message: "userGuess must not be empty".to_string(),
        }
        .into());
    }

    let result = state.checker.check(&request).await?;
    Ok(Json(result))
}

/// GET /health
pub async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        comparator: state.checker.comparator_name().map(str::to_string),
        phrases: state.checker.phrases().len(),
        version: env!("CARGO_PKG_VERSION"),
    })
}
