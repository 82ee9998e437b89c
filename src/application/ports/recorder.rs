// src/application/ports/recorder.rs
use crate::application::DocsResult;
use crate::application::dto::{Exchange, ResourceSnippetParameters};
use crate::application::preprocess::{RequestPreprocessor, ResponsePreprocessor};
use crate::application::snippet::Snippet;

/// Everything a recorder receives for one documented operation.
#[derive(Debug, Clone, Copy)]
pub struct Documentation<'a> {
    pub identifier: &'a str,
    pub exchange: &'a Exchange,
    pub request_preprocessor: &'a RequestPreprocessor,
    pub response_preprocessor: &'a ResponsePreprocessor,
    pub resource: &'a ResourceSnippetParameters,
    pub snippets: &'a [Snippet],
}

/// Emits snippets and the schema contribution of a documented exchange.
pub trait Recorder {
    fn document(&self, documentation: &Documentation<'_>) -> DocsResult<()>;
}

impl<R: Recorder + ?Sized> Recorder for &R {
    fn document(&self, documentation: &Documentation<'_>) -> DocsResult<()> {
        (**self).document(documentation)
    }
}

impl<R: Recorder + ?Sized> Recorder for std::sync::Arc<R> {
    fn document(&self, documentation: &Documentation<'_>) -> DocsResult<()> {
        (**self).document(documentation)
    }
}
