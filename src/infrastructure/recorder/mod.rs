// src/infrastructure/recorder/mod.rs
mod file;
mod memory;

pub use file::{RESOURCE_FILE_NAME, SnippetRecorder};
pub use memory::{MemoryRecorder, RecordedDocument};
