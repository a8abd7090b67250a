//! The function style adapter: one handler receives every request for the endpoint
//! and dispatches on the method itself, the way a serverless function would.

use axum::{
    body::Bytes,
    extract::State,
    http::{Method, StatusCode},
    response::{IntoResponse, Response},
    routing::any,
    Router,
};

use super::{
    routes::{
        interested::{list_registrations, submit_registration},
        INTERESTED_PATH,
    },
    types::SubmitRequest,
    Error, WebResult,
};
use crate::AppState;

#[tracing::instrument(name = "interested function", skip(app_state, body))]
pub async fn interested(
    State(app_state): State<AppState>,
    method: Method,
    body: Bytes,
) -> WebResult<Response> {
    match method {
        Method::OPTIONS => Ok(StatusCode::OK.into_response()),
        Method::GET => Ok(list_registrations(&app_state).await?.into_response()),
        Method::POST => {
            let request = SubmitRequest::from_body(&body)?;
            Ok(submit_registration(&app_state, request)
                .await?
                .into_response())
        }
        method => Err(Error::MethodNotAllowed(method)),
    }
}

pub fn routes(app_state: AppState) -> Router {
    Router::new()
        .route(INTERESTED_PATH, any(interested))
        .with_state(app_state)
}
