//! HTTP request/response tracing middleware.

use axum::body::Body;
use axum::http::Request;
use tower_http::LatencyUnit;
use tower_http::classify::{ServerErrorsAsFailures, SharedClassifier};
use tower_http::trace::{DefaultOnFailure, DefaultOnResponse, TraceLayer};
use tracing::{Level, Span};

type MakeRequestSpan = for<'a> fn(&'a Request<Body>) -> Span;

/// Span for an incoming request: method and path, never the query string.
fn make_span(request: &Request<Body>) -> Span {
    tracing::info_span!(
        "request",
        method = %request.method(),
        path = %request.uri().path(),
    )
}

/// Creates a tracing middleware for HTTP requests.
///
/// Responses are logged at `INFO` with status and latency in milliseconds;
/// server errors are additionally logged at `WARN`.
///
/// ```text
/// INFO request{method=POST path=/api/fans}: finished processing request latency=4 ms status=201
/// ```
pub fn layer() -> TraceLayer<SharedClassifier<ServerErrorsAsFailures>, MakeRequestSpan> {
    TraceLayer::new_for_http()
        .make_span_with(make_span as MakeRequestSpan)
        .on_response(
            DefaultOnResponse::new()
                .level(Level::INFO)
                .latency_unit(LatencyUnit::Millis),
        )
        .on_failure(DefaultOnFailure::new().level(Level::WARN))
}
