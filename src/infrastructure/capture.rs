// src/infrastructure/capture.rs
//! Drives an axum [`Router`] in-process and buffers the exchange.
use crate::application::dto::{Exchange, RecordedRequest, RecordedResponse};
use crate::application::{DocsError, DocsResult};
use axum::{Router, body::Body, http::Request};
use tower::ServiceExt;

pub const DEFAULT_BODY_LIMIT: usize = 1024 * 1024;

pub async fn capture(router: Router, request: Request<Body>) -> DocsResult<Exchange> {
    capture_with_limit(router, request, DEFAULT_BODY_LIMIT).await
}

/// Send `request` through `router`, buffering both bodies up to `limit`
/// bytes each.
pub async fn capture_with_limit(
    router: Router,
    request: Request<Body>,
    limit: usize,
) -> DocsResult<Exchange> {
    let (parts, body) = request.into_parts();
    let request_body = axum::body::to_bytes(body, limit)
        .await
        .map_err(|err| DocsError::body(err.to_string()))?;

    let recorded_request = RecordedRequest {
        method: parts.method.clone(),
        uri: parts.uri.clone(),
        url_template: None,
        headers: parts.headers.clone(),
        body: request_body.clone(),
    };

    let request = Request::from_parts(parts, Body::from(request_body));
    let response = router
        .oneshot(request)
        .await
        .unwrap_or_else(|never| match never {});

    let (parts, body) = response.into_parts();
    let response_body = axum::body::to_bytes(body, limit)
        .await
        .map_err(|err| DocsError::body(err.to_string()))?;

    tracing::debug!(
        method = %recorded_request.method,
        uri = %recorded_request.uri,
        status = %parts.status,
        "captured exchange"
    );

    Ok(Exchange::new(
        recorded_request,
        RecordedResponse {
            status: parts.status,
            headers: parts.headers,
            body: response_body,
        },
    ))
}

/// Fill `{name}` placeholders of `template` with `values`, left to right.
/// Placeholders without a value are kept as written.
pub fn expand_template(template: &str, values: &[&str]) -> String {
    let mut out = String::with_capacity(template.len());
    let mut values = values.iter();
    let mut rest = template;
    while let Some(start) = rest.find('{') {
        let Some(len) = rest[start..].find('}') else {
            break;
        };
        out.push_str(&rest[..start]);
        match values.next() {
            Some(value) => out.push_str(value),
            None => out.push_str(&rest[start..=start + len]),
        }
        rest = &rest[start + len + 1..];
    }
    out.push_str(rest);
    out
}
