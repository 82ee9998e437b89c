// src/application/mod.rs
pub mod document;
pub mod dsl;
pub mod dto;
pub mod enum_format;
pub mod error;
pub mod ports;
pub mod preprocess;
pub mod snippet;

pub use error::{DocsError, DocsResult};
