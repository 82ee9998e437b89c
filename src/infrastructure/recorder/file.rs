// src/infrastructure/recorder/file.rs
use crate::application::dto::ResourceModel;
use crate::application::ports::{Documentation, Recorder};
use crate::application::{DocsError, DocsResult};
use crate::infrastructure::render::{SnippetFormat, SnippetRenderer};
use std::{
    fs,
    path::{Path, PathBuf},
};

pub const RESOURCE_FILE_NAME: &str = "resource.json";

/// Writes snippets and `resource.json` under `<output_dir>/<identifier>/`.
pub struct SnippetRecorder {
    output_dir: PathBuf,
    renderer: Box<dyn SnippetRenderer>,
}

impl SnippetRecorder {
    pub fn new(output_dir: impl Into<PathBuf>, format: SnippetFormat) -> Self {
        Self {
            output_dir: output_dir.into(),
            renderer: format.renderer(),
        }
    }

    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    fn write(&self, dir: &Path, stem: &str, content: &str) -> DocsResult<()> {
        let path = dir.join(format!("{stem}.{}", self.renderer.file_extension()));
        fs::write(&path, content).map_err(|err| DocsError::io(&path, err))
    }
}

impl Recorder for SnippetRecorder {
    fn document(&self, documentation: &Documentation<'_>) -> DocsResult<()> {
        let request = documentation
            .request_preprocessor
            .apply(&documentation.exchange.request);
        let response = documentation
            .response_preprocessor
            .apply(&documentation.exchange.response);

        let dir = self.output_dir.join(documentation.identifier);
        fs::create_dir_all(&dir).map_err(|err| DocsError::io(&dir, err))?;

        self.write(&dir, "http-request", &self.renderer.render_http_request(&request))?;
        self.write(&dir, "http-response", &self.renderer.render_http_response(&response))?;
        for snippet in documentation.snippets {
            self.write(&dir, snippet.name(), &self.renderer.render_snippet(snippet))?;
        }

        let model = ResourceModel::from_parts(
            documentation.identifier,
            documentation.resource,
            &request,
            &response,
        );
        let path = dir.join(RESOURCE_FILE_NAME);
        let json = serde_json::to_string_pretty(&model)?;
        fs::write(&path, json).map_err(|err| DocsError::io(&path, err))?;

        tracing::info!(
            identifier = documentation.identifier,
            dir = %dir.display(),
            snippets = documentation.snippets.len(),
            "documentation snippets written"
        );
        Ok(())
    }
}
