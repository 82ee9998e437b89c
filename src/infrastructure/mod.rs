// src/infrastructure/mod.rs
pub mod capture;
pub mod recorder;
pub mod render;
