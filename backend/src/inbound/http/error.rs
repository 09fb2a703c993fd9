//! HTTP mapping for domain errors.
//!
//! Every failure leaves the service as `{"error": <message>}` with a status
//! derived from the [`ErrorCode`] and the request's `trace-id` header.

use actix_web::error::JsonPayloadError;
use actix_web::{HttpRequest, HttpResponse, ResponseError, http::StatusCode};
use serde::{Deserialize, Serialize};
use serde_json::error::Category;
use tracing::debug;
use utoipa::ToSchema;

use crate::domain::{Error, ErrorCode, TRACE_ID_HEADER};

/// Convenient result alias for HTTP handlers.
pub type ApiResult<T> = Result<T, Error>;

/// Message returned when the body cannot be decoded as a login request.
pub const INVALID_BODY_MESSAGE: &str = "Invalid request body";

const INTERNAL_MESSAGE: &str = "Internal server error";

/// Error envelope returned by every failing endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ErrorBody {
    /// Human-readable error message.
    #[schema(example = "Invalid login credentials")]
    pub error: String,
}

fn status_for(code: ErrorCode) -> StatusCode {
    match code {
        ErrorCode::InvalidRequest | ErrorCode::InvalidCredentials => StatusCode::BAD_REQUEST,
        ErrorCode::InternalError => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

fn public_message(error: &Error) -> &str {
    if matches!(error.code(), ErrorCode::InternalError) {
        INTERNAL_MESSAGE
    } else {
        error.message()
    }
}

impl ResponseError for Error {
    fn status_code(&self) -> StatusCode {
        status_for(self.code())
    }

    fn error_response(&self) -> HttpResponse {
        let mut builder = HttpResponse::build(self.status_code());
        if let Some(id) = self.trace_id() {
            builder.insert_header((TRACE_ID_HEADER, id.to_owned()));
        }
        builder.json(ErrorBody {
            error: public_message(self).to_owned(),
        })
    }
}

/// Fixed label for a body rejection.
///
/// Decoder messages quote the offending value, which may be a password, so
/// only the failure category is logged.
fn rejection_reason(err: &JsonPayloadError) -> &'static str {
    match err {
        JsonPayloadError::ContentType => "unsupported_content_type",
        JsonPayloadError::Overflow { .. } | JsonPayloadError::OverflowKnownLength { .. } => {
            "payload_too_large"
        }
        JsonPayloadError::Deserialize(source) => match source.classify() {
            Category::Syntax => "malformed_json",
            Category::Eof => "truncated_json",
            Category::Data => "unexpected_field_type",
            Category::Io => "unreadable_body",
        },
        _ => "unreadable_body",
    }
}

/// `JsonConfig` error handler turning extractor failures into a 400 envelope.
pub fn json_error_handler(err: JsonPayloadError, _req: &HttpRequest) -> actix_web::Error {
    let reason = rejection_reason(&err);
    match &err {
        JsonPayloadError::Deserialize(source) => debug!(
            reason,
            line = source.line(),
            column = source.column(),
            "request body rejected"
        ),
        _ => debug!(reason, "request body rejected"),
    }
    Error::invalid_request(INVALID_BODY_MESSAGE).into()
}
