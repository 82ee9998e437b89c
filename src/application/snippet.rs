// src/application/snippet.rs
use crate::domain::{FieldDescriptor, HeaderDescriptor, ParameterDescriptor};

/// A snippet-producing directive: one descriptor category to render.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Snippet {
    PathParameters(Vec<ParameterDescriptor>),
    RequestHeaders(Vec<HeaderDescriptor>),
    QueryParameters(Vec<ParameterDescriptor>),
    RequestFields(Vec<FieldDescriptor>),
    ResponseFields(Vec<FieldDescriptor>),
}

impl Snippet {
    /// File stem of the rendered snippet.
    pub fn name(&self) -> &'static str {
        match self {
            Snippet::PathParameters(_) => "path-parameters",
            Snippet::RequestHeaders(_) => "request-headers",
            Snippet::QueryParameters(_) => "query-parameters",
            Snippet::RequestFields(_) => "request-fields",
            Snippet::ResponseFields(_) => "response-fields",
        }
    }

    pub fn len(&self) -> usize {
        match self {
            Snippet::PathParameters(items) | Snippet::QueryParameters(items) => items.len(),
            Snippet::RequestHeaders(items) => items.len(),
            Snippet::RequestFields(items) | Snippet::ResponseFields(items) => items.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
