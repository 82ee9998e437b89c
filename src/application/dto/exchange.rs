// src/application/dto/exchange.rs
use axum::http::{HeaderMap, Method, StatusCode, Uri, header};
use bytes::Bytes;

/// Request half of a completed exchange, with its body fully buffered.
#[derive(Debug, Clone)]
pub struct RecordedRequest {
    pub method: Method,
    pub uri: Uri,
    /// Template the uri was expanded from, e.g. `/users/{id}`.
    pub url_template: Option<String>,
    pub headers: HeaderMap,
    pub body: Bytes,
}

#[derive(Debug, Clone)]
pub struct RecordedResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: Bytes,
}

/// A completed request/response pair, ready to be documented.
#[derive(Debug, Clone)]
pub struct Exchange {
    pub request: RecordedRequest,
    pub response: RecordedResponse,
}

impl Exchange {
    pub fn new(request: RecordedRequest, response: RecordedResponse) -> Self {
        Self { request, response }
    }

    pub fn with_url_template(mut self, template: impl Into<String>) -> Self {
        self.request.url_template = Some(template.into());
        self
    }
}

impl RecordedRequest {
    pub fn new(method: Method, uri: Uri) -> Self {
        Self {
            method,
            uri,
            url_template: None,
            headers: HeaderMap::new(),
            body: Bytes::new(),
        }
    }

    /// Path used to key the operation: the template when known, the
    /// concrete path otherwise.
    pub fn path_template(&self) -> &str {
        self.url_template
            .as_deref()
            .unwrap_or_else(|| self.uri.path())
    }

    pub fn content_type(&self) -> Option<&str> {
        content_type(&self.headers)
    }

    pub fn body_text(&self) -> String {
        String::from_utf8_lossy(&self.body).into_owned()
    }
}

impl RecordedResponse {
    pub fn new(status: StatusCode) -> Self {
        Self {
            status,
            headers: HeaderMap::new(),
            body: Bytes::new(),
        }
    }

    pub fn content_type(&self) -> Option<&str> {
        content_type(&self.headers)
    }

    pub fn body_text(&self) -> String {
        String::from_utf8_lossy(&self.body).into_owned()
    }
}

fn content_type(headers: &HeaderMap) -> Option<&str> {
    headers
        .get(header::CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
}
