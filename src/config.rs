// src/config.rs
use crate::application::DocsResult;
use crate::application::document::{DocumentRequest, MakeDocument};
use crate::application::dto::Exchange;
use crate::application::ports::Recorder;
use crate::application::preprocess::{DEFAULT_DOCS_HOST, RequestPreprocessor, ResponsePreprocessor};
use crate::infrastructure::capture::{DEFAULT_BODY_LIMIT, capture_with_limit};
use crate::infrastructure::recorder::SnippetRecorder;
use crate::infrastructure::render::SnippetFormat;
use crate::presentation::openapi::{OpenApiSettings, OutputFormat, SecurityMode};
use axum::{Router, body::Body, http::Request};
use std::{collections::HashSet, env, path::PathBuf};
use thiserror::Error;

#[derive(Clone, Debug)]
pub struct DocsConfig {
    snippets_dir: PathBuf,
    docs_host: String,
    snippet_format: SnippetFormat,
    body_limit: usize,
    openapi: OpenApiSettings,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid configuration: {0}")]
    Invalid(String),
}

fn default_snippets_dir() -> PathBuf {
    PathBuf::from("target/generated-snippets")
}

fn parse_with<T>(key: &'static str, value: Option<String>, default: T) -> Result<T, ConfigError>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    match value {
        Some(raw) if !raw.trim().is_empty() => raw
            .parse::<T>()
            .map_err(|err| ConfigError::Invalid(format!("{key}: {err}"))),
        _ => Ok(default),
    }
}

/// Split a comma separated list, dropping blanks, trailing slashes and
/// repeats while keeping the first occurrence order.
fn server_urls(value: Option<String>) -> Vec<String> {
    let mut seen = HashSet::new();
    value
        .map(|raw| {
            raw.split(',')
                .map(str::trim)
                .filter(|segment| !segment.is_empty())
                .map(|segment| segment.trim_end_matches('/').to_string())
                .filter(|url| seen.insert(url.clone()))
                .collect()
        })
        .unwrap_or_default()
}

impl DocsConfig {
    /// Build configuration from environment variables, loading `.env`
    /// first when present.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build configuration from any key lookup; every key is optional.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let snippets_dir = lookup("RESTDOCS_SNIPPETS_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(default_snippets_dir);
        let docs_host = lookup("RESTDOCS_HOST")
            .map(|host| host.trim().to_string())
            .filter(|host| !host.is_empty())
            .unwrap_or_else(|| DEFAULT_DOCS_HOST.to_string());
        let snippet_format = parse_with(
            "RESTDOCS_SNIPPET_FORMAT",
            lookup("RESTDOCS_SNIPPET_FORMAT"),
            SnippetFormat::default(),
        )?;
        let body_limit = parse_with(
            "RESTDOCS_BODY_LIMIT",
            lookup("RESTDOCS_BODY_LIMIT"),
            DEFAULT_BODY_LIMIT,
        )?;
        if body_limit == 0 {
            return Err(ConfigError::Invalid(
                "RESTDOCS_BODY_LIMIT must be greater than zero".into(),
            ));
        }

        let defaults = OpenApiSettings::default();
        let file_name = lookup("OPENAPI3_FILE_NAME")
            .filter(|name| !name.trim().is_empty())
            .unwrap_or(defaults.file_name);
        if file_name.contains(['/', '\\']) {
            return Err(ConfigError::Invalid(
                "OPENAPI3_FILE_NAME must not contain path separators".into(),
            ));
        }

        let openapi = OpenApiSettings {
            title: lookup("OPENAPI3_TITLE").unwrap_or(defaults.title),
            description: lookup("OPENAPI3_DESCRIPTION").unwrap_or(defaults.description),
            version: lookup("OPENAPI3_DOCS_VERSION").unwrap_or(defaults.version),
            server_urls: server_urls(lookup("OPENAPI3_SERVER_URLS")),
            format: parse_with(
                "OPENAPI3_FORMAT",
                lookup("OPENAPI3_FORMAT"),
                OutputFormat::default(),
            )?,
            security: parse_with(
                "OPENAPI3_SECURITY_MODE",
                lookup("OPENAPI3_SECURITY_MODE"),
                SecurityMode::default(),
            )?,
            file_name,
            out_dir: lookup("OPENAPI3_OUT_DIR")
                .map(PathBuf::from)
                .unwrap_or(defaults.out_dir),
            publish_dir: lookup("OPENAPI3_INTO_DIR")
                .filter(|dir| !dir.trim().is_empty())
                .map(PathBuf::from),
        };

        Ok(Self {
            snippets_dir,
            docs_host,
            snippet_format,
            body_limit,
            openapi,
        })
    }

    pub fn snippets_dir(&self) -> &PathBuf {
        &self.snippets_dir
    }

    pub fn docs_host(&self) -> &str {
        &self.docs_host
    }

    pub fn snippet_format(&self) -> SnippetFormat {
        self.snippet_format
    }

    /// Maximum buffered body size when capturing an exchange.
    pub fn body_limit(&self) -> usize {
        self.body_limit
    }

    pub fn openapi(&self) -> &OpenApiSettings {
        &self.openapi
    }

    pub fn request_preprocessor(&self) -> RequestPreprocessor {
        RequestPreprocessor::documentation(self.docs_host.clone())
    }

    pub fn snippet_recorder(&self) -> SnippetRecorder {
        SnippetRecorder::new(self.snippets_dir.clone(), self.snippet_format)
    }

    /// Capture an exchange, buffering bodies up to the configured limit.
    pub async fn capture(&self, router: Router, request: Request<Body>) -> DocsResult<Exchange> {
        capture_with_limit(router, request, self.body_limit).await
    }

    /// Document `exchange` with the configured docs host.
    pub fn document<R>(
        &self,
        exchange: Exchange,
        request: DocumentRequest,
        recorder: &R,
    ) -> DocsResult<Exchange>
    where
        R: Recorder + ?Sized,
    {
        exchange.make_document_with(
            request,
            recorder,
            &self.request_preprocessor(),
            &ResponsePreprocessor::default(),
        )
    }
}
