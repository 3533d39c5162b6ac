use crate::ApiError;
use axum::http::Uri;
use axum::response::{IntoResponse, Response};

pub async fn default_handler(uri: Uri) -> Response {
    ApiError::NotFound(format!("no route for {}", uri.path())).into_response()
}
