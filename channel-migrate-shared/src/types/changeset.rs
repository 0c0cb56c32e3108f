use time::OffsetDateTime;
use uuid::Uuid;

/// Everything the destination store must write for one migrated entity.
///
/// Built by the transform step from a `SourceEntity` and persisted atomically
/// by the destination repository. The auth user always exists; the channel and
/// its tracks are optional.
#[derive(Debug, Clone, PartialEq)]
pub struct EntityChangeset {
    pub auth_user: NewAuthUser,
    pub channel: Option<ChannelChangeset>,
}

/// A channel together with its url-bearing tracks.
///
/// The tracks have already been filtered by the transform; every entry here
/// is expected to produce a track row and a channel-track link row.
#[derive(Debug, Clone, PartialEq)]
pub struct ChannelChangeset {
    pub channel: NewChannel,
    pub tracks: Vec<NewTrack>,
}

/// A destination auth user row.
///
/// The identifier is generated client-side before insertion and is unrelated
/// to the source user identifier. Tenant, audience, and role defaults are
/// fixed by the repository at insert time.
#[derive(Debug, Clone, PartialEq)]
pub struct NewAuthUser {
    pub id: Uuid,
    pub email: String,
    pub encrypted_password: String,
    pub provider: String,
    pub created_at: OffsetDateTime,
}

/// A destination channel row. The identifier is assigned by the destination
/// store on insert.
#[derive(Debug, Clone, PartialEq)]
pub struct NewChannel {
    pub name: String,
    pub slug: String,
    pub description: Option<String>,
    pub created_at: OffsetDateTime,
    pub updated_at: OffsetDateTime,
    pub url: Option<String>,
    pub image: Option<String>,
}

/// A destination track row. The identifier and creation timestamp are
/// assigned by the destination store on insert.
#[derive(Debug, Clone, PartialEq)]
pub struct NewTrack {
    pub url: String,
    pub title: String,
    pub description: Option<String>,
    pub created_at: OffsetDateTime,
}

/// The destination-assigned key and creation timestamp of an inserted track,
/// read back from the insert result and threaded into the channel-track link
/// inserts.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InsertedTrack {
    pub id: i64,
    pub created_at: OffsetDateTime,
}
