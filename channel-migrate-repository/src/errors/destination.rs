//! Error types for the destination repository.
//! Defines specific errors that can occur while resetting destination tables
//! or persisting a migrated entity.
use channel_migrate_shared::types::LoadStage;
use thiserror::Error;

/// Represents errors that can occur within the destination repository.
///
/// Insert failures carry the stage of the entity pipeline that was executing,
/// so the caller can log which step of the migration broke without inspecting
/// SQL state codes.
#[derive(Debug, Error)]
pub enum DestinationRepositoryError {
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("destination reset failed: {0}")]
    Reset(#[source] sqlx::Error),

    #[error("{stage} insert failed: {source}")]
    Insert {
        stage: LoadStage,
        #[source]
        source: sqlx::Error,
    },
}

impl DestinationRepositoryError {
    /// The pipeline stage an insert failure occurred in, if this is one.
    pub fn stage(&self) -> Option<LoadStage> {
        match self {
            DestinationRepositoryError::Insert { stage, .. } => Some(*stage),
            _ => None,
        }
    }
}
