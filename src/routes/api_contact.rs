use axum::{Json, extract::State, response::IntoResponse};
use contact_desk_shared::{Error, contact::ContactForm};
use serde_json::json;

use crate::{
    error::ApiFailure,
    extract::{Payload, PayloadRejection},
    routes::AppState,
};

/// POST /api/contact - email a submission to the inbox, every field required
pub async fn action(
    State(app_state): State<AppState>,
    payload: Result<Payload<ContactForm>, PayloadRejection>,
) -> Result<impl IntoResponse, ApiFailure> {
    let Payload(form) =
        payload.map_err(|rejection| ApiFailure(Error::Validation(rejection.to_string())))?;

    app_state
        .notifier
        .notify(form.into())
        .await
        .map_err(ApiFailure)?;

    Ok(Json(json!({ "success": "Message sent successfully!" })))
}
