// src/application/ports/mod.rs
pub mod recorder;

pub use recorder::{Documentation, Recorder};
