use std::sync::Arc;

use axum::{
    http::{Method, StatusCode},
    response::{IntoResponse, Response},
};
use strum_macros::AsRefStr;

use crate::model::RegistryError;

pub type WebResult<T> = core::result::Result<T, Error>;

#[derive(Debug, AsRefStr, thiserror::Error)]
pub enum Error {
    #[error("submit failed: {0}")]
    Submit(#[source] RegistryError),
    #[error("list failed: {0}")]
    List(#[source] RegistryError),
    #[error("invalid request body: {0}")]
    InvalidBody(String),
    #[error("method not allowed: {0}")]
    MethodNotAllowed(Method),
}

impl Error {
    pub fn status_code_and_client_error(&self) -> (StatusCode, ClientError) {
        use ClientError::*;

        match self {
            Error::Submit(RegistryError::EmailRequired) => (StatusCode::BAD_REQUEST, EmailRequired),
            Error::Submit(RegistryError::Duplicate { .. }) => {
                (StatusCode::CONFLICT, AlreadyRegistered)
            }
            Error::Submit(RegistryError::Storage(_)) => {
                (StatusCode::INTERNAL_SERVER_ERROR, SubmitFailed)
            }
            Error::List(_) => (StatusCode::INTERNAL_SERVER_ERROR, FetchFailed),
            Error::InvalidBody(_) => (StatusCode::BAD_REQUEST, InvalidBody),
            Error::MethodNotAllowed(_) => (StatusCode::METHOD_NOT_ALLOWED, MethodNotAllowed),
        }
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        tracing::debug!("{:<12} - into_response(Error: {self:?})", "INTO_RESP");

        // Construct a response
        let mut res = StatusCode::INTERNAL_SERVER_ERROR.into_response();

        // Insert the Error into response so that it can be retrieved later.
        res.extensions_mut().insert(Arc::new(self));

        res
    }
}

/// What the caller gets to see. Never carries internal detail.
#[derive(Debug, AsRefStr, derive_more::Display)]
pub enum ClientError {
    #[display("Email is required")]
    EmailRequired,
    #[display("Invalid request body")]
    InvalidBody,
    #[display("This email is already registered")]
    AlreadyRegistered,
    #[display("An error occurred. Please try again.")]
    SubmitFailed,
    #[display("Error fetching data")]
    FetchFailed,
    #[display("Method not allowed")]
    MethodNotAllowed,
}
