// src/infrastructure/render/mod.rs
//! Turns snippet directives and exchanges into text fragments.
mod asciidoc;
mod markdown;

pub use asciidoc::AsciidocRenderer;
pub use markdown::MarkdownRenderer;

use crate::application::dto::{RecordedRequest, RecordedResponse};
use crate::application::snippet::Snippet;
use crate::domain::{AttributeKey, Descriptor};
use std::{fmt, str::FromStr};

pub trait SnippetRenderer: Send + Sync {
    fn render_snippet(&self, snippet: &Snippet) -> String;
    fn render_http_request(&self, request: &RecordedRequest) -> String;
    fn render_http_response(&self, response: &RecordedResponse) -> String;
    fn file_extension(&self) -> &'static str;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SnippetFormat {
    #[default]
    Asciidoctor,
    Markdown,
}

impl SnippetFormat {
    pub fn renderer(&self) -> Box<dyn SnippetRenderer> {
        match self {
            SnippetFormat::Asciidoctor => Box::new(AsciidocRenderer),
            SnippetFormat::Markdown => Box::new(MarkdownRenderer),
        }
    }
}

impl fmt::Display for SnippetFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SnippetFormat::Asciidoctor => f.write_str("asciidoctor"),
            SnippetFormat::Markdown => f.write_str("markdown"),
        }
    }
}

impl FromStr for SnippetFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "asciidoctor" | "asciidoc" | "adoc" => Ok(SnippetFormat::Asciidoctor),
            "markdown" | "md" => Ok(SnippetFormat::Markdown),
            other => Err(format!("unknown snippet format '{other}'")),
        }
    }
}

pub(crate) const HEADER_ROW: [&str; 7] = [
    "Name",
    "Type",
    "Optional",
    "Default",
    "Format",
    "Example",
    "Description",
];

/// One table row; ignored descriptors never produce one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Row {
    pub name: String,
    pub type_name: String,
    pub optional: bool,
    pub default_value: String,
    pub format: String,
    pub sample: String,
    pub description: String,
}

impl Row {
    fn from_descriptor<D: Descriptor>(descriptor: &D, type_name: String) -> Self {
        Self {
            name: descriptor.name().to_string(),
            type_name,
            optional: descriptor.is_optional(),
            default_value: descriptor.attribute(AttributeKey::DefaultValue).to_string(),
            format: descriptor.attribute(AttributeKey::Format).to_string(),
            sample: descriptor.attribute(AttributeKey::Sample).to_string(),
            description: descriptor.description().to_string(),
        }
    }
}

fn param_rows<D: Descriptor>(items: &[D]) -> Vec<Row> {
    items
        .iter()
        .filter(|d| !d.is_ignored())
        .map(|d| Row::from_descriptor(d, d.attribute(AttributeKey::ParamType).to_string()))
        .collect()
}

pub(crate) fn rows(snippet: &Snippet) -> Vec<Row> {
    match snippet {
        Snippet::PathParameters(items) | Snippet::QueryParameters(items) => param_rows(items),
        Snippet::RequestHeaders(items) => param_rows(items),
        Snippet::RequestFields(items) | Snippet::ResponseFields(items) => items
            .iter()
            .filter(|d| !d.is_ignored())
            .map(|d| Row::from_descriptor(d, d.field_type().to_string()))
            .collect(),
    }
}

/// `METHOD path HTTP/1.1`, headers, blank line, body.
pub(crate) fn http_request_text(request: &RecordedRequest) -> String {
    let target = request
        .uri
        .path_and_query()
        .map(|pq| pq.as_str())
        .unwrap_or("/");
    let mut out = format!("{} {} HTTP/1.1\n", request.method, target);
    push_headers(&mut out, &request.headers);
    out.push('\n');
    out.push_str(&request.body_text());
    out
}

pub(crate) fn http_response_text(response: &RecordedResponse) -> String {
    let mut out = format!(
        "HTTP/1.1 {} {}\n",
        response.status.as_u16(),
        response.status.canonical_reason().unwrap_or("")
    );
    push_headers(&mut out, &response.headers);
    out.push('\n');
    out.push_str(&response.body_text());
    out
}

fn push_headers(out: &mut String, headers: &axum::http::HeaderMap) {
    for (name, value) in headers {
        out.push_str(&canonical_header_name(name.as_str()));
        out.push_str(": ");
        out.push_str(&String::from_utf8_lossy(value.as_bytes()));
        out.push('\n');
    }
}

fn canonical_header_name(name: &str) -> String {
    name.split('-')
        .map(|part| {
            let mut chars = part.chars();
            match chars.next() {
                Some(first) => first.to_ascii_uppercase().to_string() + chars.as_str(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join("-")
}
