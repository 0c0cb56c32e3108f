//! This module defines the `Orchestrator` responsible for coordinating a full
//! migration run.
//! It resets the destination, drives the entity loader over the source
//! sequence, isolates per-entity failures, and accumulates the migration
//! report.
use std::sync::Arc;

use channel_migrate_shared::types::{MigrationReport, SourceEntity};

use crate::errors::OrchestratorError;
use crate::loader::EntityLoader;

/// Per-entity progress notification payload.
///
/// Mirrors the operator-facing progress line: position in the run, run total,
/// the source user identifier, and the optional channel title and track count.
pub struct EntityProgress<'a> {
    pub position: usize,
    pub total: usize,
    pub user_id: &'a str,
    pub channel_title: Option<&'a str>,
    pub track_count: Option<usize>,
}

/// Receives one notification per entity as the run advances.
///
/// Injected into the orchestrator so the core loop stays testable without
/// side-channel output.
pub trait ProgressObserver: Send + Sync {
    fn entity_started(&self, progress: &EntityProgress<'_>);
}

/// Production observer: one `tracing` info line per entity.
pub struct TracingProgress;

impl ProgressObserver for TracingProgress {
    fn entity_started(&self, progress: &EntityProgress<'_>) {
        let track_count = progress
            .track_count
            .map(|count| count.to_string())
            .unwrap_or_else(|| "no tracks".to_string());
        tracing::info!(
            "Inserting {} of {}: {} ({}, {})",
            progress.position,
            progress.total,
            progress.user_id,
            progress.channel_title.unwrap_or("no channel"),
            track_count,
        );
    }
}

/// `Orchestrator` is responsible for coordinating the reset, transform, and
/// load of all source entities.
///
/// Entities are processed strictly sequentially, in source order; one
/// entity's failure never aborts the run.
pub struct Orchestrator {
    pub entity_loader: Box<EntityLoader>,
    pub progress: Arc<dyn ProgressObserver>,
}

impl Orchestrator {
    /// Creates a new `Orchestrator` instance.
    ///
    /// # Arguments
    ///
    /// * `entity_loader` - A boxed `EntityLoader` instance
    /// * `progress` - The observer notified once per entity
    ///
    /// # Returns
    ///
    /// A new `Orchestrator` instance.
    pub fn new(entity_loader: Box<EntityLoader>, progress: Arc<dyn ProgressObserver>) -> Self {
        Self {
            entity_loader,
            progress,
        }
    }

    /// Runs the migration over the given source entities.
    ///
    /// First wipes the destination tables; a reset failure is fatal to the
    /// whole run since the destination may now be partially cleaned. Then
    /// migrates each entity in turn, recording its source user identifier in
    /// the ok or failed log, and returns the accumulated report after the
    /// last entity.
    ///
    /// # Arguments
    ///
    /// * `entities` - The source entities, already grouped per user upstream
    ///
    /// # Returns
    ///
    /// A `Result` with the final `MigrationReport` or an `OrchestratorError`
    /// if the destination reset fails.
    pub async fn run(&self, entities: &[SourceEntity]) -> Result<MigrationReport, OrchestratorError> {
        self.entity_loader
            .destination_repository
            .reset()
            .await
            .map_err(OrchestratorError::Reset)?;

        let total = entities.len();
        let mut report = MigrationReport::new();

        for (index, entity) in entities.iter().enumerate() {
            self.progress.entity_started(&EntityProgress {
                position: index + 1,
                total,
                user_id: &entity.user.id,
                channel_title: entity.channel.as_ref().map(|channel| channel.title.as_str()),
                track_count: entity.tracks.as_ref().map(|tracks| tracks.len()),
            });

            match self.entity_loader.load_entity(entity).await {
                Ok(new_user_id) => {
                    tracing::debug!(
                        source_user_id = %entity.user.id,
                        %new_user_id,
                        "entity migrated",
                    );
                    report.record_ok(entity.user.id.clone());
                }
                Err(error) => {
                    tracing::warn!(
                        source_user_id = %entity.user.id,
                        %error,
                        "entity migration failed",
                    );
                    report.record_failed(entity.user.id.clone());
                }
            }
        }

        Ok(report)
    }
}
