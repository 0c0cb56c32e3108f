use std::fmt;

/// The insert step that was executing when an entity failed.
///
/// Steps run in declaration order; a failure at any stage aborts the rest of
/// the entity's pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadStage {
    AuthUser,
    Channel,
    Membership,
    Tracks,
    ChannelTracks,
}

impl fmt::Display for LoadStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            LoadStage::AuthUser => "auth user",
            LoadStage::Channel => "channel",
            LoadStage::Membership => "membership",
            LoadStage::Tracks => "tracks",
            LoadStage::ChannelTracks => "channel tracks",
        };
        f.write_str(name)
    }
}
