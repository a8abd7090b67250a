//! `/api/interested` for the method routed server.
//! The handlers here stay thin: they map HTTP onto `Registry` and back.

use axum::{
    body::Bytes,
    extract::State,
    http::{Method, StatusCode},
    Json,
};

use crate::{
    model::Registration,
    web::{
        types::{Envelope, SubmitRequest},
        Error, WebResult,
    },
    AppState,
};

pub const SUBMIT_SUCCESS_MSG: &str = "Thank you for your interest!";

pub async fn list(
    State(app_state): State<AppState>,
) -> WebResult<Json<Envelope<Vec<Registration>>>> {
    list_registrations(&app_state).await
}

pub async fn submit(
    State(app_state): State<AppState>,
    body: Bytes,
) -> WebResult<Json<Envelope<Registration>>> {
    let request = SubmitRequest::from_body(&body)?;
    submit_registration(&app_state, request).await
}

/// Pre-flight requests succeed without a body and without touching storage.
pub async fn preflight() -> StatusCode {
    StatusCode::OK
}

pub async fn method_not_allowed(method: Method) -> Error {
    Error::MethodNotAllowed(method)
}

// ###################################
// ->   SHARED WITH THE FUNCTION ADAPTER
// ###################################
pub(in crate::web) async fn list_registrations(
    app_state: &AppState,
) -> WebResult<Json<Envelope<Vec<Registration>>>> {
    let registrations = app_state.registry.list().await.map_err(Error::List)?;

    Ok(Json(Envelope::data(registrations)))
}

pub(in crate::web) async fn submit_registration(
    app_state: &AppState,
    request: SubmitRequest,
) -> WebResult<Json<Envelope<Registration>>> {
    let SubmitRequest { email, contact } = request;
    let registration = app_state
        .registry
        .submit(email, contact)
        .await
        .map_err(Error::Submit)?;

    Ok(Json(Envelope::data_with_message(
        registration,
        SUBMIT_SUCCESS_MSG,
    )))
}
