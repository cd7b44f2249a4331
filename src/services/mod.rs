//! HTTP service handlers
//!
//! Thin transport layer over the record store. All field validation
//! happens here; the store only ever sees well-formed input.

use actix_web::HttpResponse;
use actix_web::http::StatusCode;

use crate::errors::MinilinkError;
use crate::structs::ErrorResponse;

mod health;
mod redirect;
mod shorten;
mod stats;

pub use health::HealthService;
pub use redirect::RedirectService;
pub use shorten::ShortenService;
pub use stats::StatsService;

/// Map a core error to its JSON error response.
pub(crate) fn error_response(err: &MinilinkError) -> HttpResponse {
    let status = match err {
        MinilinkError::Conflict(_) => StatusCode::CONFLICT,
        MinilinkError::NotFound(_) => StatusCode::NOT_FOUND,
        MinilinkError::Validation(_) => StatusCode::BAD_REQUEST,
        MinilinkError::KeyspaceExhausted(_) | MinilinkError::Config(_) => {
            StatusCode::INTERNAL_SERVER_ERROR
        }
    };

    HttpResponse::build(status).json(ErrorResponse {
        message: err.message().to_string(),
    })
}
