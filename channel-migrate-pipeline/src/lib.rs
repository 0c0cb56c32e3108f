//! # Channel Migrate Pipeline
//! This crate defines the core components of the migration pipeline.
//! It includes modules for transforming and loading entities and for
//! orchestrating a full migration run, along with error handling.
pub mod loader;
pub mod orchestrator;

pub mod errors;
