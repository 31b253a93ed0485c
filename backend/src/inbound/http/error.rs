//! HTTP adapter mapping for domain errors.
//!
//! Keeps the domain error type HTTP-agnostic while letting Actix handlers
//! return it directly. The mapping preserves the legacy wire contract: the
//! mobile client keys off exact status codes and body literals, so structural
//! failures collapse to a plain-text 500 and only the reconciler and lookup
//! failures surface their own messages.

use actix_web::{HttpResponse, ResponseError, http::StatusCode};
use tracing::error;

use crate::domain::{Error, ErrorCode};

/// Convenient result alias for HTTP handlers.
pub type ApiResult<T> = Result<T, Error>;

/// Body sent for every failure whose detail must not reach the client.
pub const INTERNAL_ERROR_BODY: &str = "Internal Server Error";

fn status_for(code: ErrorCode) -> StatusCode {
    match code {
        ErrorCode::ArityMismatch => StatusCode::BAD_REQUEST,
        ErrorCode::NotFound => StatusCode::NOT_FOUND,
        ErrorCode::MissingField
        | ErrorCode::InvalidType
        | ErrorCode::StorageFailure
        | ErrorCode::Internal => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

impl ResponseError for Error {
    fn status_code(&self) -> StatusCode {
        status_for(self.code())
    }

    fn error_response(&self) -> HttpResponse {
        let status = self.status_code();
        let body = if status == StatusCode::INTERNAL_SERVER_ERROR {
            error!(
                code = ?self.code(),
                message = self.message(),
                details = ?self.details(),
                "request failed; detail redacted from response"
            );
            INTERNAL_ERROR_BODY.to_owned()
        } else {
            self.message().to_owned()
        };
        HttpResponse::build(status)
            .content_type("text/plain; charset=utf-8")
            .body(body)
    }
}

#[cfg(test)]
mod tests;
