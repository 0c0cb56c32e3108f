mod changeset;
mod report;
mod source;
mod stage;

pub use changeset::{ChannelChangeset, EntityChangeset, InsertedTrack, NewAuthUser, NewChannel, NewTrack};
pub use report::MigrationReport;
pub use source::{ProviderInfo, SourceChannel, SourceEntity, SourceTrack, SourceUser};
pub use stage::LoadStage;
