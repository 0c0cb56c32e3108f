//! PostgreSQL implementation of the destination repository.
//!
//! Provides the production backend for the `DestinationRepository` trait with
//! connection pooling, per-entity transactions, and bulk operations.
//!
//! ## Key Features
//!
//! - Connection pooling with `sqlx::PgPool`
//! - One transaction per migrated entity with automatic rollback
//! - Bulk sibling inserts using `QueryBuilder` with `RETURNING`
//! - Stage-tagged insert errors for operator-facing failure reports
//!
//! ## Database Tables
//!
//! - `auth.users`: Migrated authentication users
//! - `channels`: Migrated channels, identity keys assigned on insert
//! - `user_channel`: User to channel membership links
//! - `tracks`: Migrated tracks, identity keys assigned on insert
//! - `channel_track`: User/channel/track link rows
use async_trait::async_trait;
use channel_migrate_shared::types::{
    EntityChangeset, InsertedTrack, LoadStage, NewAuthUser, NewChannel, NewTrack,
};
use sqlx::Row;
use uuid::Uuid;

use crate::{DestinationRepository, DestinationRepositoryError};

/// Fixed tenant identifier written for every migrated auth user.
const INSTANCE_ID: Uuid = Uuid::nil();
/// Fixed audience and role labels expected by the destination auth schema.
const AUD: &str = "authenticated";
const ROLE: &str = "authenticated";

/// PostgreSQL implementation of the destination repository.
///
/// Wraps each entity's ordered insert sequence in a single transaction so a
/// mid-entity failure rolls back all of that entity's rows instead of leaving
/// orphaned auth users behind.
pub struct PostgresDestinationRepository {
    pool: sqlx::PgPool,
}

impl PostgresDestinationRepository {
    /// Creates a new PostgreSQL repository instance.
    ///
    /// # Arguments
    ///
    /// * `pool` - Configured PostgreSQL connection pool with the destination schema
    ///
    /// # Returns
    ///
    /// * `Ok(PostgresDestinationRepository)` - Ready-to-use repository instance
    /// * `Err(DestinationRepositoryError)` - Future validation errors (currently always succeeds)
    pub async fn new(pool: sqlx::PgPool) -> Result<Self, DestinationRepositoryError> {
        Ok(Self { pool })
    }

    /// Inserts the auth user row within an active transaction.
    ///
    /// Writes the generated identifier, the provider claim as
    /// `raw_app_meta_data`, the fixed tenant/audience/role defaults, empty
    /// token columns, and the source creation time for every timestamp column.
    async fn insert_auth_user_tx(
        &self,
        auth_user: &NewAuthUser,
        tx: &mut sqlx::Transaction<'_, sqlx::Postgres>,
    ) -> Result<(), DestinationRepositoryError> {
        sqlx::query(
            r#"
            INSERT INTO auth.users(
                id,
                instance_id,
                aud,
                role,
                email,
                encrypted_password,
                email_confirmed_at,
                created_at,
                updated_at,
                last_sign_in_at,
                raw_app_meta_data,
                raw_user_meta_data,
                confirmation_token,
                recovery_token,
                email_change_token_new,
                email_change,
                is_super_admin
            )
            VALUES($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14, $15, $16, $17)
            "#,
        )
        .bind(auth_user.id)
        .bind(INSTANCE_ID)
        .bind(AUD)
        .bind(ROLE)
        .bind(auth_user.email.clone())
        .bind(auth_user.encrypted_password.clone())
        .bind(auth_user.created_at)
        .bind(auth_user.created_at)
        .bind(auth_user.created_at)
        .bind(auth_user.created_at)
        .bind(sqlx::types::Json(
            serde_json::json!({ "provider": auth_user.provider }),
        ))
        .bind(sqlx::types::Json(serde_json::json!({})))
        .bind("")
        .bind("")
        .bind("")
        .bind("")
        .bind(false)
        .execute(&mut **tx)
        .await
        .map_err(|source| DestinationRepositoryError::Insert {
            stage: LoadStage::AuthUser,
            source,
        })?;
        Ok(())
    }

    /// Inserts the channel row within an active transaction and returns the
    /// destination-assigned channel identifier.
    async fn insert_channel_tx(
        &self,
        channel: &NewChannel,
        tx: &mut sqlx::Transaction<'_, sqlx::Postgres>,
    ) -> Result<i64, DestinationRepositoryError> {
        let stage_err = |source| DestinationRepositoryError::Insert {
            stage: LoadStage::Channel,
            source,
        };

        let row = sqlx::query(
            r#"
            INSERT INTO channels(name, slug, description, created_at, updated_at, url, image)
            VALUES($1, $2, $3, $4, $5, $6, $7)
            RETURNING id
            "#,
        )
        .bind(channel.name.clone())
        .bind(channel.slug.clone())
        .bind(channel.description.clone())
        .bind(channel.created_at)
        .bind(channel.updated_at)
        .bind(channel.url.clone())
        .bind(channel.image.clone())
        .fetch_one(&mut **tx)
        .await
        .map_err(stage_err)?;

        row.try_get("id").map_err(stage_err)
    }

    /// Inserts the user-channel membership link within an active transaction.
    async fn insert_membership_tx(
        &self,
        user_id: Uuid,
        channel_id: i64,
        tx: &mut sqlx::Transaction<'_, sqlx::Postgres>,
    ) -> Result<(), DestinationRepositoryError> {
        sqlx::query("INSERT INTO user_channel(user_id, channel_id) VALUES($1, $2)")
            .bind(user_id)
            .bind(channel_id)
            .execute(&mut **tx)
            .await
            .map_err(|source| DestinationRepositoryError::Insert {
                stage: LoadStage::Membership,
                source,
            })?;
        Ok(())
    }

    /// Inserts all sibling tracks as one multi-row statement within an active
    /// transaction, returning each destination-assigned track identifier and
    /// creation timestamp in input order.
    ///
    /// Empty slices are no-ops. A single set-based insert keeps the sibling
    /// batch all-or-nothing inside the entity's transaction.
    async fn insert_tracks_tx(
        &self,
        tracks: &[NewTrack],
        tx: &mut sqlx::Transaction<'_, sqlx::Postgres>,
    ) -> Result<Vec<InsertedTrack>, DestinationRepositoryError> {
        if tracks.is_empty() {
            return Ok(Vec::new());
        }

        let stage_err = |source| DestinationRepositoryError::Insert {
            stage: LoadStage::Tracks,
            source,
        };

        let mut query_builder =
            sqlx::QueryBuilder::new("INSERT INTO tracks(url, title, description, created_at) ");
        query_builder.push_values(tracks, |mut b, track| {
            b.push_bind(track.url.clone())
                .push_bind(track.title.clone())
                .push_bind(track.description.clone())
                .push_bind(track.created_at);
        });
        query_builder.push(" RETURNING id, created_at");

        let rows = query_builder
            .build()
            .fetch_all(&mut **tx)
            .await
            .map_err(stage_err)?;

        let mut inserted = Vec::with_capacity(rows.len());
        for row in rows {
            inserted.push(InsertedTrack {
                id: row.try_get("id").map_err(stage_err)?,
                created_at: row.try_get("created_at").map_err(stage_err)?,
            });
        }
        Ok(inserted)
    }

    /// Inserts all channel-track link rows as one multi-row statement within
    /// an active transaction.
    ///
    /// Each link references the generated user identifier, the
    /// destination-assigned channel identifier, and one inserted track.
    /// Empty slices are no-ops.
    async fn insert_channel_tracks_tx(
        &self,
        user_id: Uuid,
        channel_id: i64,
        tracks: &[InsertedTrack],
        tx: &mut sqlx::Transaction<'_, sqlx::Postgres>,
    ) -> Result<(), DestinationRepositoryError> {
        if tracks.is_empty() {
            return Ok(());
        }

        let mut query_builder = sqlx::QueryBuilder::new(
            "INSERT INTO channel_track(user_id, channel_id, track_id, created_at) ",
        );
        query_builder.push_values(tracks, |mut b, track| {
            b.push_bind(user_id)
                .push_bind(channel_id)
                .push_bind(track.id)
                .push_bind(track.created_at);
        });

        query_builder
            .build()
            .execute(&mut **tx)
            .await
            .map_err(|source| DestinationRepositoryError::Insert {
                stage: LoadStage::ChannelTracks,
                source,
            })?;
        Ok(())
    }
}

#[async_trait]
impl DestinationRepository for PostgresDestinationRepository {
    /// Deletes all rows from the five destination tables, link tables first.
    ///
    /// Runs the deletes sequentially outside a transaction; a failure leaves
    /// the destination partially cleaned, which the orchestrator treats as
    /// fatal to the run.
    async fn reset(&self) -> Result<(), DestinationRepositoryError> {
        for table in [
            "public.channel_track",
            "public.user_channel",
            "public.tracks",
            "public.channels",
            "auth.users",
        ] {
            sqlx::query(&format!("DELETE FROM {table}"))
                .execute(&self.pool)
                .await
                .map_err(DestinationRepositoryError::Reset)?;
        }
        Ok(())
    }

    /// Persists one entity's changeset atomically.
    ///
    /// Executes the ordered steps inside a single transaction: auth user,
    /// then, when a channel is present, channel, membership, tracks, and
    /// channel-track links. An absent channel commits after the auth user
    /// insert. Any stage failure rolls the whole entity back and surfaces as
    /// a stage-tagged error.
    async fn persist_entity(
        &self,
        changeset: &EntityChangeset,
    ) -> Result<(), DestinationRepositoryError> {
        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(DestinationRepositoryError::Database)?;

        self.insert_auth_user_tx(&changeset.auth_user, &mut tx).await?;

        if let Some(channel_changeset) = &changeset.channel {
            let channel_id = self
                .insert_channel_tx(&channel_changeset.channel, &mut tx)
                .await?;
            self.insert_membership_tx(changeset.auth_user.id, channel_id, &mut tx)
                .await?;
            let inserted_tracks = self
                .insert_tracks_tx(&channel_changeset.tracks, &mut tx)
                .await?;
            self.insert_channel_tracks_tx(
                changeset.auth_user.id,
                channel_id,
                &inserted_tracks,
                &mut tx,
            )
            .await?;
        }

        tx.commit()
            .await
            .map_err(DestinationRepositoryError::Database)?;
        Ok(())
    }
}
