//! HTTP rendering of submission failures.
//!
//! The two contact endpoints answer with different JSON shapes, so each has
//! its own wrapper around the shared [`Error`]. Only a fixed message leaves
//! the process; the underlying error is logged.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use contact_desk_shared::Error;
use serde_json::json;

fn status_code(err: &Error) -> StatusCode {
    match err {
        Error::Validation(reason) => {
            tracing::debug!(%reason, "Rejected contact submission");
            StatusCode::BAD_REQUEST
        }
        Error::Storage(e) => {
            tracing::error!(error = ?e, "Database error");
            StatusCode::INTERNAL_SERVER_ERROR
        }
        Error::Notification(e) => {
            tracing::error!(error = ?e, "Error sending email");
            StatusCode::INTERNAL_SERVER_ERROR
        }
    }
}

/// Failure body of `POST /contact`: `{ok: false, message}`.
#[derive(Debug)]
pub struct ContactFailure(pub Error);

impl IntoResponse for ContactFailure {
    fn into_response(self) -> Response {
        let status = status_code(&self.0);
        let message = if self.0.is_validation() {
            "All required fields must be filled"
        } else {
            "Database error"
        };

        (status, Json(json!({ "ok": false, "message": message }))).into_response()
    }
}

/// Failure body of `POST /api/contact`: `{error}`.
#[derive(Debug)]
pub struct ApiFailure(pub Error);

impl IntoResponse for ApiFailure {
    fn into_response(self) -> Response {
        let status = status_code(&self.0);
        let message = if self.0.is_validation() {
            "All fields are required"
        } else {
            "Failed to send message. Check your settings."
        };

        (status, Json(json!({ "error": message }))).into_response()
    }
}
