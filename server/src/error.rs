//! HTTP mapping of the core error taxonomy.
//!
//! NotFound → 404, Conflict → 409, Validation → 400 (body carries the option
//! list when the rule has one), Storage → 500 with the detail logged and a
//! generic body returned.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;

pub struct AppError(api::Error);

impl From<api::Error> for AppError {
    fn from(err: api::Error) -> Self {
        AppError(err)
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self.0 {
            api::Error::NotFound(message) => {
                (StatusCode::NOT_FOUND, Json(json!({ "message": message }))).into_response()
            }
            api::Error::Conflict(message) => {
                (StatusCode::CONFLICT, Json(json!({ "message": message }))).into_response()
            }
            api::Error::Validation { message, options } => {
                let body = if options.is_empty() {
                    json!({ "message": message })
                } else {
                    json!({ "message": message, "options": options })
                };
                (StatusCode::BAD_REQUEST, Json(body)).into_response()
            }
            api::Error::Storage(err) => {
                tracing::error!(error = %err, "storage error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({ "message": "Internal server error." })),
                )
                    .into_response()
            }
        }
    }
}
