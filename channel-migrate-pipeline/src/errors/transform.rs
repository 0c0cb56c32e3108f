//! Error types for the source-to-destination transform.
//! Defines specific errors that can occur while mapping a source entity into
//! a destination changeset.
use thiserror::Error;

/// Represents errors that can occur while building a destination changeset
/// from a source entity.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TransformError {
    #[error("invalid source timestamp: {0}")]
    InvalidTimestamp(i64),
}
