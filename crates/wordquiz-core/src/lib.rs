//! wordquiz-core — Vocabulary loading, sampling and quiz generation.
//!
//! This crate defines the data model, the loader and sampler, and the
//! generation engine that the renderers and the CLI build on.

pub mod engine;
pub mod error;
pub mod loader;
pub mod model;
pub mod prompt;
pub mod sampler;
pub mod traits;
