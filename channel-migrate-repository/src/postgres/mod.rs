//! PostgreSQL implementations for the channel migrate repository.
mod destination_repository;

pub use destination_repository::PostgresDestinationRepository;
