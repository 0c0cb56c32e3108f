//! This module defines the `DestinationRepository` trait, which provides an
//! interface for interacting with the normalized destination store.
//! It abstracts the destination writes so the pipeline can be tested without
//! a database.
use channel_migrate_shared::types::EntityChangeset;

use crate::errors::DestinationRepositoryError;

/// A trait that defines the interface for writing to the destination store.
///
/// Implementors provide the full-wipe reset and the atomic, ordered insert
/// sequence for one migrated entity.
#[async_trait::async_trait]
pub trait DestinationRepository: Send + Sync {
    /// Deletes all rows from the five destination tables.
    ///
    /// Link tables are cleared before the tables they reference. A failure
    /// here may leave the destination partially cleaned, so callers must
    /// treat it as fatal to the whole run.
    ///
    /// # Returns
    ///
    /// A `Result` indicating success or a `DestinationRepositoryError` if any
    /// delete fails.
    async fn reset(&self) -> Result<(), DestinationRepositoryError>;

    /// Persists one entity's changeset: auth user, then channel, membership,
    /// tracks, and channel-track links, in that order.
    ///
    /// Destination-assigned channel and track identifiers are read back from
    /// the insert results and threaded into the dependent link inserts. The
    /// whole sequence is atomic; a failure at any stage leaves no rows for
    /// this entity behind.
    ///
    /// # Arguments
    ///
    /// * `changeset` - The transformed entity to write.
    ///
    /// # Returns
    ///
    /// A `Result` indicating success or a `DestinationRepositoryError`
    /// carrying the failed stage.
    async fn persist_entity(
        &self,
        changeset: &EntityChangeset,
    ) -> Result<(), DestinationRepositoryError>;
}
