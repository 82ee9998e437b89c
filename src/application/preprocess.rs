// src/application/preprocess.rs
//! Request/response sanitizing applied before snippets are written.
use crate::application::dto::{RecordedRequest, RecordedResponse};
use axum::http::{
    HeaderValue, Uri,
    header,
    uri::{Authority, PathAndQuery, Scheme},
};
use bytes::Bytes;

/// Host written into documented requests in place of the test server.
pub const DEFAULT_DOCS_HOST: &str = "dev.drunk.com";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestPreprocessor {
    pub scheme: Option<String>,
    pub host: Option<String>,
    pub remove_port: bool,
    pub pretty_print: bool,
}

impl RequestPreprocessor {
    /// `http://<host>` without port, JSON bodies pretty printed.
    pub fn documentation(host: impl Into<String>) -> Self {
        Self {
            scheme: Some("http".into()),
            host: Some(host.into()),
            remove_port: true,
            pretty_print: true,
        }
    }

    /// Leaves the request untouched.
    pub fn identity() -> Self {
        Self {
            scheme: None,
            host: None,
            remove_port: false,
            pretty_print: false,
        }
    }

    pub fn apply(&self, request: &RecordedRequest) -> RecordedRequest {
        let mut out = request.clone();
        if let Some(uri) = self.modify_uri(&request.uri) {
            if let Some(authority) = uri.authority() {
                if let Ok(value) = HeaderValue::from_str(authority.as_str()) {
                    out.headers.insert(header::HOST, value);
                }
            }
            out.uri = uri;
        }
        if self.pretty_print {
            out.body = pretty_print(&request.body);
        }
        out
    }

    fn modify_uri(&self, uri: &Uri) -> Option<Uri> {
        if self.scheme.is_none() && self.host.is_none() && !self.remove_port {
            return None;
        }

        let host = self
            .host
            .as_deref()
            .or_else(|| uri.authority().map(Authority::host))?;
        let port = uri
            .port_u16()
            .filter(|_| !self.remove_port);
        let authority = match port {
            Some(port) => format!("{host}:{port}"),
            None => host.to_string(),
        };

        let scheme = self
            .scheme
            .as_deref()
            .or_else(|| uri.scheme_str())
            .unwrap_or("http");

        let mut parts = uri.clone().into_parts();
        parts.scheme = Some(scheme.parse::<Scheme>().ok()?);
        parts.authority = Some(authority.parse::<Authority>().ok()?);
        if parts.path_and_query.is_none() {
            parts.path_and_query = Some(PathAndQuery::from_static("/"));
        }
        match Uri::from_parts(parts) {
            Ok(uri) => Some(uri),
            Err(err) => {
                tracing::warn!(error = %err, "could not rewrite documented uri");
                None
            }
        }
    }
}

impl Default for RequestPreprocessor {
    fn default() -> Self {
        Self::documentation(DEFAULT_DOCS_HOST)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResponsePreprocessor {
    pub pretty_print: bool,
}

impl ResponsePreprocessor {
    pub fn pretty_print() -> Self {
        Self { pretty_print: true }
    }

    pub fn apply(&self, response: &RecordedResponse) -> RecordedResponse {
        let mut out = response.clone();
        if self.pretty_print {
            out.body = pretty_print(&response.body);
        }
        out
    }
}

impl Default for ResponsePreprocessor {
    fn default() -> Self {
        Self::pretty_print()
    }
}

/// Pretty print a JSON body; anything else is returned unchanged.
pub fn pretty_print(body: &Bytes) -> Bytes {
    if body.is_empty() {
        return body.clone();
    }
    match serde_json::from_slice::<serde_json::Value>(body) {
        Ok(value) => match serde_json::to_vec_pretty(&value) {
            Ok(pretty) => Bytes::from(pretty),
            Err(_) => body.clone(),
        },
        Err(_) => body.clone(),
    }
}
