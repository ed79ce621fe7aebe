//! HTTP error response mapping.

use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

/// JSON error body, same shape as the validation envelope.
#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

/// A request body the JSON extractor refused (not JSON, not an object, wrong
/// content type).
///
/// Keeps the extractor's status code but answers with an `{"error": …}` body
/// instead of plain text.
pub struct ApiError(JsonRejection);

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        Self(rejection)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.0.status();
        let message = self.0.body_text();
        tracing::debug!(%status, error = %message, "rejected request body");
        (status, Json(ErrorBody { error: message })).into_response()
    }
}
