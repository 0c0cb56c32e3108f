//! Error types for the orchestrator module of the migration pipeline.
//! Defines the errors that are fatal to a whole migration run.
use channel_migrate_repository::DestinationRepositoryError;
use thiserror::Error;

/// Represents errors that abort a migration run.
///
/// Per-entity failures are not represented here; they are recorded in the
/// migration report and the run continues. Only a failed destination reset is
/// fatal, since it can leave the destination partially cleaned.
#[derive(Debug, Error)]
pub enum OrchestratorError {
    #[error("destination reset failed: {0}")]
    Reset(#[source] DestinationRepositoryError),
}
