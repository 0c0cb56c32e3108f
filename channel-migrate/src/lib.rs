//! Channel Migrate
//!
//! This library provides the operator-facing surface of the channel
//! migration, including configuration management, source export loading,
//! error handling, and dependency injection.

pub mod config;
pub mod errors;
pub mod source;

pub use config::Dependencies;
pub use errors::MigrationError;
