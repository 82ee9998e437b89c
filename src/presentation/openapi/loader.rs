// src/presentation/openapi/loader.rs
use crate::application::dto::ResourceModel;
use crate::application::{DocsError, DocsResult};
use crate::infrastructure::recorder::RESOURCE_FILE_NAME;
use std::{fs, path::Path};
use walkdir::WalkDir;

/// Read every `resource.json` below `snippets_dir`, in path order.
///
/// A missing directory yields no resources. Symbolic links are not followed.
pub fn load_resources(snippets_dir: &Path) -> DocsResult<Vec<ResourceModel>> {
    if !snippets_dir.is_dir() {
        return Ok(Vec::new());
    }

    let mut resources = Vec::new();
    for entry in WalkDir::new(snippets_dir)
        .follow_links(false)
        .sort_by_file_name()
    {
        let entry = entry.map_err(|err| {
            let path = err
                .path()
                .map_or_else(|| snippets_dir.to_path_buf(), Path::to_path_buf);
            DocsError::io(path, err.into())
        })?;
        if !entry.file_type().is_file() || entry.file_name() != RESOURCE_FILE_NAME {
            continue;
        }

        let path = entry.path();
        let text = fs::read_to_string(path).map_err(|err| DocsError::io(path, err))?;
        resources.push(serde_json::from_str(&text)?);
        tracing::debug!(path = %path.display(), "loaded resource");
    }
    Ok(resources)
}
