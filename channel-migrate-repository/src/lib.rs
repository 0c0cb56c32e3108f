//! # Channel Migrate Repository
//! This crate provides the trait and implementations for writing migrated
//! entities to the destination store. It includes definitions for errors,
//! interfaces, and a concrete implementation for PostgreSQL.
pub mod errors;
pub mod interfaces;
pub mod postgres;

pub use errors::DestinationRepositoryError;
pub use interfaces::DestinationRepository;
pub use postgres::PostgresDestinationRepository;
