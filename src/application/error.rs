// src/application/error.rs
use crate::domain::errors::DomainError;
use std::{io, path::PathBuf};
use thiserror::Error;

pub type DocsResult<T> = Result<T, DocsError>;

#[derive(Debug, Error)]
pub enum DocsError {
    #[error(transparent)]
    Domain(#[from] DomainError),

    #[error("invalid document identifier: {0}")]
    InvalidIdentifier(String),

    #[error("failed to read http body: {0}")]
    Body(String),

    #[error("io error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("yaml error: {0}")]
    Yaml(String),
}

impl DocsError {
    pub fn invalid_identifier(msg: impl Into<String>) -> Self {
        Self::InvalidIdentifier(msg.into())
    }

    pub fn body(msg: impl Into<String>) -> Self {
        Self::Body(msg.into())
    }

    pub fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    pub fn yaml(msg: impl Into<String>) -> Self {
        Self::Yaml(msg.into())
    }
}
