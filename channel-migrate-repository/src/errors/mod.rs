//! Error types for the channel migrate repository.
//! Consolidates and re-exports error types related to destination store operations.
mod destination;

pub use destination::DestinationRepositoryError;
