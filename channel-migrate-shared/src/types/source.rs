use serde::{Deserialize, Serialize};

/// A per-user source record bundling a user profile with an optional channel
/// and an optional list of tracks.
///
/// Produced by the upstream extraction step that groups the raw hierarchical
/// export by user. Read once per run and discarded.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SourceEntity {
    pub user: SourceUser,
    #[serde(default)]
    pub channel: Option<SourceChannel>,
    #[serde(default)]
    pub tracks: Option<Vec<SourceTrack>>,
}

/// A user profile as it appears in the authentication export.
///
/// Timestamps are epoch milliseconds, as the export emits them.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SourceUser {
    pub id: String,
    pub email: String,
    pub created_at: i64,
    pub password_hash: String,
    #[serde(default)]
    pub provider_user_info: Vec<ProviderInfo>,
}

/// One authentication-provider record attached to a source user.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ProviderInfo {
    pub provider_id: String,
}

/// A channel as it appears in the source export.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SourceChannel {
    pub title: String,
    pub slug: String,
    #[serde(default)]
    pub body: Option<String>,
    pub created: i64,
    pub updated: i64,
    #[serde(default)]
    pub link: Option<String>,
    #[serde(default)]
    pub image: Option<String>,
}

/// A track as it appears in the source export.
///
/// Tracks without a url are excluded from migration by the transform.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SourceTrack {
    #[serde(default)]
    pub url: Option<String>,
    pub title: String,
    #[serde(default)]
    pub body: Option<String>,
    pub created: i64,
}
