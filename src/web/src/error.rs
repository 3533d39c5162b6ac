use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use lineup_core::LineupError;
use serde_json::json;

#[derive(Debug)]
pub enum ApiError {
    NotFound(String),
    InternalError(String),
    BadRequest(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error_message) = match self {
            ApiError::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            ApiError::InternalError(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg),
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
        };

        let body = Json(json!({
            "error": error_message,
        }));

        (status, body).into_response()
    }
}

impl From<LineupError> for ApiError {
    fn from(err: LineupError) -> Self {
        match err {
            LineupError::PeriodNotFound(_) => ApiError::NotFound(err.to_string()),
            LineupError::PlayerNotInPeriod { .. }
            | LineupError::InvalidDuration(_)
            | LineupError::InvalidPeriodCount(_) => ApiError::BadRequest(err.to_string()),
        }
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        ApiError::InternalError(format!("JSON error: {}", err))
    }
}

pub type ApiResult<T> = Result<T, ApiError>;
