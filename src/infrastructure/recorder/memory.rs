// src/infrastructure/recorder/memory.rs
use crate::application::DocsResult;
use crate::application::dto::{
    RecordedRequest, RecordedResponse, ResourceModel, ResourceSnippetParameters,
};
use crate::application::ports::{Documentation, Recorder};
use crate::application::snippet::Snippet;
use std::sync::{Mutex, PoisonError};

/// Owned copy of what a recorder was handed, after preprocessing.
#[derive(Debug, Clone)]
pub struct RecordedDocument {
    pub identifier: String,
    pub request: RecordedRequest,
    pub response: RecordedResponse,
    pub resource: ResourceSnippetParameters,
    pub snippets: Vec<Snippet>,
}

impl RecordedDocument {
    pub fn model(&self) -> ResourceModel {
        ResourceModel::from_parts(&self.identifier, &self.resource, &self.request, &self.response)
    }
}

/// Keeps every documented operation in memory.
#[derive(Debug, Default)]
pub struct MemoryRecorder {
    documents: Mutex<Vec<RecordedDocument>>,
}

impl MemoryRecorder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn documents(&self) -> Vec<RecordedDocument> {
        self.documents
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    pub fn models(&self) -> Vec<ResourceModel> {
        self.documents().iter().map(RecordedDocument::model).collect()
    }
}

impl Recorder for MemoryRecorder {
    fn document(&self, documentation: &Documentation<'_>) -> DocsResult<()> {
        let recorded = RecordedDocument {
            identifier: documentation.identifier.to_string(),
            request: documentation
                .request_preprocessor
                .apply(&documentation.exchange.request),
            response: documentation
                .response_preprocessor
                .apply(&documentation.exchange.response),
            resource: documentation.resource.clone(),
            snippets: documentation.snippets.to_vec(),
        };
        self.documents
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(recorded);
        Ok(())
    }
}
