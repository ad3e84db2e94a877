//! Request logging middleware for tracing and monitoring

use axum::{
    extract::Request,
    http::{HeaderName, HeaderValue},
    middleware::Next,
    response::Response,
};
use std::time::Instant;
use tracing::{Instrument, info, warn};
use uuid::Uuid;

/// Header carrying the request id, read from the request or generated
pub const REQUEST_ID_HEADER: &str = "x-request-id";

/// Header carrying the handling time in milliseconds
pub const RESPONSE_TIME_HEADER: &str = "x-response-time";

/// Log every request inside its own span and tag the response with its id
/// and timing
pub async fn request_logging_middleware(request: Request, next: Next) -> Response {
    let start_time = Instant::now();
    let method = request.method().clone();
    let uri = request.uri().clone();

    let request_id = request
        .headers()
        .get(REQUEST_ID_HEADER)
        .and_then(|h| h.to_str().ok())
        .map_or_else(generate_request_id, String::from);

    let span = tracing::info_span!(
        "request",
        method = %method,
        uri = %uri,
        request_id = %request_id,
    );

    async move {
        let mut response = next.run(request).await;
        let elapsed = start_time.elapsed();
        let status = response.status();

        if status.is_client_error() || status.is_server_error() {
            warn!(status = %status, elapsed = ?elapsed, "Request completed with error");
        } else {
            info!(status = %status, elapsed = ?elapsed, "Request completed");
        }

        let headers = response.headers_mut();
        if let Ok(value) = HeaderValue::from_str(&request_id) {
            headers.insert(HeaderName::from_static(REQUEST_ID_HEADER), value);
        }
        let millis = u64::try_from(elapsed.as_millis()).unwrap_or(u64::MAX);
        headers.insert(
            HeaderName::from_static(RESPONSE_TIME_HEADER),
            HeaderValue::from(millis),
        );

        response
    }
    .instrument(span)
    .await
}

/// Generate a unique request id for tracing
fn generate_request_id() -> String {
    let (high, _) = Uuid::new_v4().as_u64_pair();
    format!("req_{high:016x}")
}
