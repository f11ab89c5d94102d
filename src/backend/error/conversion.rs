//! Error Conversion
//!
//! `IntoResponse` for [`ApiError`], so handlers can return it directly.
//! Expected 4xx conditions become `{"message": ...}` JSON bodies; the
//! infrastructure variants are logged here and answered with a generic
//! 5xx body so internals never leak to clients.

use axum::{
    response::{IntoResponse, Response},
    Json,
};

use crate::backend::error::types::ApiError;

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        let message = if status.is_server_error() {
            tracing::error!("request failed: {:?}", self);
            "internal server error".to_string()
        } else {
            self.to_string()
        };

        let body = Json(serde_json::json!({ "message": message }));
        (status, body).into_response()
    }
}
