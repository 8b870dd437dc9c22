//! Response rendering for `/health`.
//!
//! # Design Decisions
//! - Plain text bodies, terminated by a newline
//! - Unhealthy responses name the failed endpoints, never the errors
//!   behind them

use axum::http::{header, HeaderValue, StatusCode};
use axum::response::{IntoResponse, Response};

use crate::health::AggregateVerdict;

pub const HEALTHY_BODY: &str = "ok\n";
pub const METHOD_NOT_ALLOWED_BODY: &str = "method not allowed\n";
const UNHEALTHY_PREFIX: &str = "500 internal server error - unhealthy: ";

/// Body of an unhealthy response.
pub fn unhealthy_body(verdict: &AggregateVerdict) -> String {
    let names: Vec<&str> = verdict.failed_names().iter().map(String::as_str).collect();
    format!("{UNHEALTHY_PREFIX}{}\n", names.join(", "))
}

/// 200 with `ok`, or 500 naming every failed endpoint.
pub fn render_verdict(verdict: &AggregateVerdict) -> Response {
    if verdict.is_healthy() {
        (StatusCode::OK, HEALTHY_BODY).into_response()
    } else {
        (StatusCode::INTERNAL_SERVER_ERROR, unhealthy_body(verdict)).into_response()
    }
}

pub fn method_not_allowed() -> Response {
    (
        StatusCode::METHOD_NOT_ALLOWED,
        [(header::ALLOW, HeaderValue::from_static("GET, HEAD"))],
        METHOD_NOT_ALLOWED_BODY,
    )
        .into_response()
}
