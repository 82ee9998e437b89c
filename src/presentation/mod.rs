// src/presentation/mod.rs
pub mod openapi;
