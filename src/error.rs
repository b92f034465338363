//! Error taxonomy and HTTP error envelope.
//!
//! Every failure in the request pipeline maps to one of the variants below
//! and renders as a JSON `{status, message}` body. All variants currently
//! map to 400, matching the upstream-facing contract this service replaced;
//! the per-variant mapping lives in one place so it can be refined without
//! touching the services.

use crate::models::ErrorBody;
use actix_web::{HttpResponse, http::StatusCode};
use thiserror::Error;

/// Failures the request pipeline can surface to the caller.
#[derive(Debug, Error)]
pub enum WeatherError {
    /// Malformed or empty request body.
    #[error("{0}")]
    Input(String),

    /// The API key could not be fetched, or came back empty.
    #[error("{0}")]
    Credential(String),

    /// The autocomplete lookup returned no matching locations.
    #[error("No results found")]
    NotFound,

    /// The location resolved but the history endpoint had no daily
    /// summary for the requested date.
    #[error("No results found")]
    NoData,

    /// Transport or decode failure talking to an upstream. Carries the
    /// failed URL for diagnostics.
    #[error("request to {url} failed: {reason}")]
    Upstream { url: String, reason: String },
}

impl WeatherError {
    /// Wrap a transport or decode failure together with the URL that
    /// produced it.
    pub fn upstream(url: impl Into<String>, reason: impl std::fmt::Display) -> Self {
        WeatherError::Upstream {
            url: url.into(),
            reason: reason.to_string(),
        }
    }
}

impl actix_web::ResponseError for WeatherError {
    fn status_code(&self) -> StatusCode {
        // One status for every kind. Upstream failures arguably deserve a
        // 502, but callers of the previous incarnation of this service
        // expect a 400 envelope for every failure.
        match self {
            WeatherError::Input(_)
            | WeatherError::Credential(_)
            | WeatherError::NotFound
            | WeatherError::NoData
            | WeatherError::Upstream { .. } => StatusCode::BAD_REQUEST,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let status = self.status_code();
        HttpResponse::build(status).json(ErrorBody {
            status: status.as_u16(),
            message: self.to_string(),
        })
    }
}
