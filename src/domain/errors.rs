// src/domain/errors.rs
use thiserror::Error;

pub type DomainResult<T> = Result<T, DomainError>;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum DomainError {
    #[error("unsupported {kind} type: '{name}'")]
    UnsupportedType { kind: &'static str, name: String },
}

impl DomainError {
    pub fn unsupported(kind: &'static str, name: impl Into<String>) -> Self {
        Self::UnsupportedType {
            kind,
            name: name.into(),
        }
    }
}
