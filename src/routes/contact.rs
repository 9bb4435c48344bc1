use axum::{Json, extract::State};
use contact_desk_shared::{Error, contact::ContactForm};
use serde::Serialize;

use crate::{
    error::ContactFailure,
    extract::{Payload, PayloadRejection},
    routes::AppState,
};

#[derive(Debug, Serialize)]
pub struct ContactAck {
    pub ok: bool,
    pub message: &'static str,
    pub id: i64,
}

/// POST /contact - store a submission, phone optional
pub async fn action(
    State(app_state): State<AppState>,
    payload: Result<Payload<ContactForm>, PayloadRejection>,
) -> Result<Json<ContactAck>, ContactFailure> {
    let Payload(form) =
        payload.map_err(|rejection| ContactFailure(Error::Validation(rejection.to_string())))?;

    let id = app_state
        .store
        .submit(form.into())
        .await
        .map_err(ContactFailure)?;

    Ok(Json(ContactAck {
        ok: true,
        message: "Message received successfully!",
        id,
    }))
}
