// src/presentation/openapi/writer.rs
use super::security::{SecurityMode, append_security_block};
use crate::application::{DocsError, DocsResult};
use std::{
    fmt, fs,
    path::{Path, PathBuf},
    str::FromStr,
};
use utoipa::openapi::OpenApi;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Yaml,
    Json,
}

impl OutputFormat {
    pub fn extension(self) -> &'static str {
        match self {
            OutputFormat::Yaml => "yaml",
            OutputFormat::Json => "json",
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.extension())
    }
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "yaml" | "yml" => Ok(OutputFormat::Yaml),
            "json" => Ok(OutputFormat::Json),
            other => Err(format!("unknown output format '{other}'")),
        }
    }
}

/// Serialize the document. In append mode the literal security block is
/// added after YAML serialization; JSON output never receives text.
pub fn render(openapi: &OpenApi, format: OutputFormat, security: SecurityMode) -> DocsResult<String> {
    match format {
        OutputFormat::Yaml => {
            let yaml = serde_yaml::to_string(openapi).map_err(|err| DocsError::yaml(err.to_string()))?;
            if security == SecurityMode::Append {
                Ok(append_security_block(&yaml))
            } else {
                Ok(yaml)
            }
        }
        OutputFormat::Json => Ok(openapi.to_pretty_json()?),
    }
}

/// Write `<out_dir>/<file_name>.<ext>`, creating the directory.
pub fn write_document(
    text: &str,
    out_dir: &Path,
    file_name: &str,
    format: OutputFormat,
) -> DocsResult<PathBuf> {
    fs::create_dir_all(out_dir).map_err(|err| DocsError::io(out_dir, err))?;
    let path = out_dir.join(format!("{file_name}.{}", format.extension()));
    fs::write(&path, text).map_err(|err| DocsError::io(&path, err))?;
    Ok(path)
}

/// Copy a written document into the publish directory.
pub fn publish(document: &Path, into_dir: &Path) -> DocsResult<PathBuf> {
    fs::create_dir_all(into_dir).map_err(|err| DocsError::io(into_dir, err))?;
    let file_name = document
        .file_name()
        .ok_or_else(|| DocsError::io(document, std::io::ErrorKind::InvalidInput.into()))?;
    let target = into_dir.join(file_name);
    fs::copy(document, &target).map_err(|err| DocsError::io(&target, err))?;
    Ok(target)
}
