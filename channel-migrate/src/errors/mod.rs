//! Error types for the channel migrate binary.
//! Defines the errors that can abort a migration run, consolidating errors
//! from the orchestrator, the destination store, and the source export.
use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum MigrationError {
    #[error("Orchestrator error: {0}")]
    Orchestrator(#[from] channel_migrate_pipeline::errors::OrchestratorError),
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
    #[error("Repository error: {0}")]
    Repository(#[from] channel_migrate_repository::DestinationRepositoryError),
    #[error("Source export error: {0}")]
    Source(#[from] SourceError),
}

/// Represents errors that can occur while reading the grouped source export.
#[derive(Debug, thiserror::Error)]
pub enum SourceError {
    #[error("could not open source export {path}: {source}")]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("could not parse source export: {0}")]
    Parse(#[from] serde_json::Error),
}
