//! Error types for the loader module of the migration pipeline.
//! Defines specific errors that can occur while transforming and persisting
//! a single entity.
use channel_migrate_repository::DestinationRepositoryError;
use thiserror::Error;

use crate::errors::TransformError;

/// Represents errors that can occur within the entity loader.
///
/// A loader error is always scoped to one entity; the orchestrator records
/// it and moves on to the next entity.
#[derive(Debug, Error)]
pub enum LoaderError {
    #[error("transform error: {0}")]
    Transform(#[from] TransformError),
    #[error("destination repository error: {0}")]
    Repository(#[from] DestinationRepositoryError),
}
