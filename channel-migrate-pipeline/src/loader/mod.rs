//! This module defines the `EntityLoader` responsible for transforming one
//! source entity into a destination changeset and persisting it.
//! It acts as the interface between the orchestration loop and the
//! destination repository.
use std::sync::Arc;

use channel_migrate_repository::DestinationRepository;
use channel_migrate_shared::types::{
    ChannelChangeset, EntityChangeset, NewAuthUser, NewChannel, NewTrack, ProviderInfo,
    SourceEntity, SourceTrack,
};
use time::OffsetDateTime;
use uuid::Uuid;

use crate::errors::{LoaderError, TransformError};

/// Provider claim written when a source user carries no provider records.
const DEFAULT_PROVIDER: &str = "email";

/// Produces the identifier for each migrated auth user.
///
/// Injected into the loader so tests can supply deterministic identifiers.
/// The generated value is unrelated to the source user identifier; the
/// source-to-destination identity mapping is one-way unless the caller
/// records it separately.
pub trait UserIdProvider: Send + Sync {
    fn next_id(&self) -> Uuid;
}

/// Production identifier source: a fresh random v4 UUID per user.
pub struct RandomUserIds;

impl UserIdProvider for RandomUserIds {
    fn next_id(&self) -> Uuid {
        Uuid::new_v4()
    }
}

/// Derives the canonical authentication-provider label from a source user's
/// provider records.
///
/// Takes the first record's provider identifier and strips a trailing ".com"
/// ("google.com" becomes "google"); an empty list yields "email". Destination
/// auth expects the claim in this shape.
pub fn provider_claim(provider_user_info: &[ProviderInfo]) -> String {
    match provider_user_info.first() {
        Some(info) => info
            .provider_id
            .strip_suffix(".com")
            .unwrap_or(&info.provider_id)
            .to_string(),
        None => DEFAULT_PROVIDER.to_string(),
    }
}

/// Builds the destination changeset for one source entity.
///
/// Generates the new auth user identifier, derives the provider claim,
/// converts timestamps, and filters out tracks that lack a non-empty url.
/// Tracks are only carried when the entity has a channel, since the link
/// rows need a channel identifier.
pub fn build_changeset(
    entity: &SourceEntity,
    user_ids: &dyn UserIdProvider,
) -> Result<EntityChangeset, TransformError> {
    let user = &entity.user;
    let auth_user = NewAuthUser {
        id: user_ids.next_id(),
        email: user.email.clone(),
        encrypted_password: user.password_hash.clone(),
        provider: provider_claim(&user.provider_user_info),
        created_at: timestamp_from_millis(user.created_at)?,
    };

    let channel = match &entity.channel {
        Some(channel) => Some(ChannelChangeset {
            channel: NewChannel {
                name: channel.title.clone(),
                slug: channel.slug.clone(),
                description: channel.body.clone(),
                created_at: timestamp_from_millis(channel.created)?,
                updated_at: timestamp_from_millis(channel.updated)?,
                url: channel.link.clone(),
                image: channel.image.clone(),
            },
            tracks: track_changesets(entity.tracks.as_deref().unwrap_or(&[]))?,
        }),
        None => None,
    };

    Ok(EntityChangeset { auth_user, channel })
}

/// Maps url-bearing source tracks to destination track rows.
///
/// A track without a url, or with an empty one, is silently excluded; it is
/// not an error.
fn track_changesets(tracks: &[SourceTrack]) -> Result<Vec<NewTrack>, TransformError> {
    let mut changesets = Vec::with_capacity(tracks.len());
    for track in tracks {
        let Some(url) = track.url.as_deref().filter(|url| !url.is_empty()) else {
            continue;
        };
        changesets.push(NewTrack {
            url: url.to_string(),
            title: track.title.clone(),
            description: track.body.clone(),
            created_at: timestamp_from_millis(track.created)?,
        });
    }
    Ok(changesets)
}

/// Converts an epoch-milliseconds source timestamp to an `OffsetDateTime`.
fn timestamp_from_millis(millis: i64) -> Result<OffsetDateTime, TransformError> {
    OffsetDateTime::from_unix_timestamp_nanos(i128::from(millis) * 1_000_000)
        .map_err(|_| TransformError::InvalidTimestamp(millis))
}

/// `EntityLoader` transforms and persists one entity at a time.
///
/// It generates the new user identifier, builds the changeset, and delegates
/// the ordered, atomic insert sequence to the destination repository.
pub struct EntityLoader {
    pub destination_repository: Arc<dyn DestinationRepository>,
    user_ids: Arc<dyn UserIdProvider>,
}

impl EntityLoader {
    /// Creates a new `EntityLoader` instance.
    ///
    /// # Arguments
    ///
    /// * `destination_repository` - The destination store to write to.
    /// * `user_ids` - The identifier source for new auth users.
    ///
    /// # Returns
    ///
    /// A new `EntityLoader` instance.
    pub fn new(
        destination_repository: Arc<dyn DestinationRepository>,
        user_ids: Arc<dyn UserIdProvider>,
    ) -> Self {
        Self {
            destination_repository,
            user_ids,
        }
    }

    /// Migrates one entity and returns the generated auth user identifier.
    ///
    /// Any stage failure surfaces as a single entity-level error; the
    /// repository rolls back whatever the entity had already written.
    ///
    /// # Arguments
    ///
    /// * `entity` - The source entity to migrate.
    ///
    /// # Returns
    ///
    /// A `Result` with the new user identifier or a `LoaderError` if the
    /// transform or any insert stage fails.
    pub async fn load_entity(&self, entity: &SourceEntity) -> Result<Uuid, LoaderError> {
        let changeset = build_changeset(entity, self.user_ids.as_ref())?;
        let new_user_id = changeset.auth_user.id;
        self.destination_repository.persist_entity(&changeset).await?;
        Ok(new_user_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use channel_migrate_shared::types::{SourceChannel, SourceUser};
    use time::macros::datetime;
    use uuid::uuid;

    pub struct FixedUserIds(pub Uuid);

    impl UserIdProvider for FixedUserIds {
        fn next_id(&self) -> Uuid {
            self.0
        }
    }

    fn provider_infos(ids: &[&str]) -> Vec<ProviderInfo> {
        ids.iter()
            .map(|id| ProviderInfo {
                provider_id: id.to_string(),
            })
            .collect()
    }

    fn make_entity() -> SourceEntity {
        SourceEntity {
            user: SourceUser {
                id: "firebase-uid-1".to_string(),
                email: "dj@example.com".to_string(),
                created_at: 1_438_466_400_000,
                password_hash: "aGFzaA==".to_string(),
                provider_user_info: provider_infos(&["google.com"]),
            },
            channel: Some(SourceChannel {
                title: "Late Night".to_string(),
                slug: "late-night".to_string(),
                body: Some("slow jams".to_string()),
                created: 1_438_466_400_000,
                updated: 1_538_466_400_000,
                link: None,
                image: None,
            }),
            tracks: Some(vec![
                SourceTrack {
                    url: Some("https://youtu.be/abc".to_string()),
                    title: "One".to_string(),
                    body: None,
                    created: 1_452_852_000_000,
                },
                SourceTrack {
                    url: None,
                    title: "No url".to_string(),
                    body: None,
                    created: 1_452_852_000_000,
                },
                SourceTrack {
                    url: Some(String::new()),
                    title: "Empty url".to_string(),
                    body: None,
                    created: 1_452_852_000_000,
                },
            ]),
        }
    }

    #[test]
    fn provider_claim_strips_com_suffix() {
        assert_eq!(provider_claim(&provider_infos(&["google.com"])), "google");
        assert_eq!(provider_claim(&provider_infos(&["facebook.com"])), "facebook");
    }

    #[test]
    fn provider_claim_defaults_to_email_for_empty_list() {
        assert_eq!(provider_claim(&[]), "email");
    }

    #[test]
    fn provider_claim_keeps_labels_without_suffix() {
        assert_eq!(provider_claim(&provider_infos(&["password"])), "password");
    }

    #[test]
    fn provider_claim_uses_first_record_only() {
        assert_eq!(
            provider_claim(&provider_infos(&["twitter.com", "google.com"])),
            "twitter"
        );
    }

    #[test]
    fn build_changeset_maps_user_fields() {
        let id = uuid!("a7ef0016-a2f4-44fb-82ca-a4f5c61d2cf5");
        let changeset = build_changeset(&make_entity(), &FixedUserIds(id)).unwrap();

        assert_eq!(changeset.auth_user.id, id);
        assert_eq!(changeset.auth_user.email, "dj@example.com");
        assert_eq!(changeset.auth_user.encrypted_password, "aGFzaA==");
        assert_eq!(changeset.auth_user.provider, "google");
        assert_eq!(
            changeset.auth_user.created_at,
            datetime!(2015-08-01 22:00 UTC)
        );
    }

    #[test]
    fn build_changeset_filters_tracks_without_url() {
        let changeset =
            build_changeset(&make_entity(), &FixedUserIds(Uuid::new_v4())).unwrap();

        let tracks = &changeset.channel.unwrap().tracks;
        assert_eq!(tracks.len(), 1);
        assert_eq!(tracks[0].url, "https://youtu.be/abc");
        assert_eq!(tracks[0].title, "One");
    }

    #[test]
    fn build_changeset_without_channel_drops_tracks() {
        let mut entity = make_entity();
        entity.channel = None;

        let changeset = build_changeset(&entity, &FixedUserIds(Uuid::new_v4())).unwrap();
        assert!(changeset.channel.is_none());
    }

    #[test]
    fn build_changeset_with_absent_tracks_yields_empty_batch() {
        let mut entity = make_entity();
        entity.tracks = None;

        let changeset = build_changeset(&entity, &FixedUserIds(Uuid::new_v4())).unwrap();
        assert!(changeset.channel.unwrap().tracks.is_empty());
    }

    #[test]
    fn build_changeset_rejects_out_of_range_timestamp() {
        let mut entity = make_entity();
        entity.user.created_at = i64::MAX;

        let error = build_changeset(&entity, &FixedUserIds(Uuid::new_v4())).unwrap_err();
        assert_eq!(error, TransformError::InvalidTimestamp(i64::MAX));
    }

    #[test]
    fn random_user_ids_are_unique_per_call() {
        let ids = RandomUserIds;
        assert_ne!(ids.next_id(), ids.next_id());
    }
}
