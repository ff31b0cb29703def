//! HTTP mapping for domain errors.
//!
//! Keeps [`Error`] transport agnostic while giving Actix handlers one place
//! that decides status codes and the `{"error": ...}` body.

use actix_web::{HttpResponse, ResponseError, http::StatusCode};

use crate::domain::{Error, ErrorCode};

use super::envelope::ErrorEnvelope;

/// Result alias for HTTP handlers.
pub type ApiResult<T> = Result<T, Error>;

/// Client-facing text for every internal failure.
pub const INTERNAL_ERROR_MESSAGE: &str = "internal server error";

fn status_for(code: ErrorCode) -> StatusCode {
    match code {
        ErrorCode::InvalidRequest => StatusCode::BAD_REQUEST,
        ErrorCode::Conflict => StatusCode::CONFLICT,
        ErrorCode::InternalError => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

/// Message safe to show the client. Internal detail never leaves the process.
fn client_message(error: &Error) -> &str {
    match error.code() {
        ErrorCode::InternalError => INTERNAL_ERROR_MESSAGE,
        ErrorCode::InvalidRequest | ErrorCode::Conflict => error.message(),
    }
}

impl ResponseError for Error {
    fn status_code(&self) -> StatusCode {
        status_for(self.code())
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(ErrorEnvelope::new(client_message(self)))
    }
}
