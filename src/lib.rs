// src/lib.rs
//! Document HTTP endpoints from integration tests.
//!
//! Declare the fields, headers and parameters of an exchange with a small
//! vocabulary, record it as Asciidoctor or Markdown snippets, and aggregate
//! the recorded resources into an OpenAPI document.
pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;
pub mod presentation;

/// Everything a documentation test usually needs.
pub mod prelude {
    pub use crate::application::document::{DocumentRequest, MakeDocument, assemble};
    pub use crate::application::dsl::{DocsDsl, Field, Header, Parameter};
    pub use crate::application::dto::Exchange;
    pub use crate::application::enum_format::enum_format;
    pub use crate::application::preprocess::{RequestPreprocessor, ResponsePreprocessor};
    pub use crate::application::{DocsError, DocsResult};
    pub use crate::config::DocsConfig;
    pub use crate::domain::{DocEnum, FieldType, HeaderType, ParamType};
    pub use crate::infrastructure::capture::{capture, capture_with_limit, expand_template};
    pub use crate::infrastructure::recorder::{MemoryRecorder, SnippetRecorder};
    pub use crate::infrastructure::render::SnippetFormat;
}
