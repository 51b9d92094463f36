use axum::extract::Request;
use axum::http::HeaderValue;
use axum::middleware::Next;
use axum::response::Response;
use std::time::Instant;
use tracing::Instrument;

const REQUEST_ID_HEADER: &str = "x-request-id";

/// Request identifier stored in request extensions.
#[derive(Debug, Clone)]
pub struct RequestId(pub String);

/// Request ID injection middleware
pub async fn request_id(mut request: Request, next: Next) -> Response {
    // Reuse the caller's id when present
    let request_id = request
        .headers()
        .get(REQUEST_ID_HEADER)
        .and_then(|v| v.to_str().ok())
        .map(|s| s.to_string())
        .unwrap_or_else(|| uuid::Uuid::new_v4().to_string());

    request
        .extensions_mut()
        .insert(RequestId(request_id.clone()));

    let mut response = next.run(request).await;

    if let Ok(value) = HeaderValue::from_str(&request_id) {
        response.headers_mut().insert(REQUEST_ID_HEADER, value);
    }

    response
}

/// Request logging middleware
///
/// Runs the rest of the stack inside a `request` span carrying the request
/// id, method, and path, so handler events such as "Calling add contact" are
/// tied to their request. Emits one completion event whose level follows the
/// status class.
pub async fn log_requests(request: Request, next: Next) -> Response {
    let request_id = request
        .extensions()
        .get::<RequestId>()
        .map(|id| id.0.clone())
        .unwrap_or_default();
    let span = tracing::info_span!(
        "request",
        request_id = %request_id,
        method = %request.method(),
        path = %request.uri().path(),
    );

    let start = Instant::now();
    let response = next.run(request).instrument(span.clone()).await;
    let status = response.status();
    let duration_ms = start.elapsed().as_millis() as u64;

    let _entered = span.enter();
    if status.is_server_error() {
        tracing::error!(status = status.as_u16(), duration_ms, "Request failed");
    } else if status.is_client_error() {
        tracing::warn!(status = status.as_u16(), duration_ms, "Request rejected");
    } else {
        tracing::info!(status = status.as_u16(), duration_ms, "Request completed");
    }

    response
}
