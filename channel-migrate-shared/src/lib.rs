//! # Channel Migrate Shared
//! This crate defines shared data structures and types used across the channel
//! migration workspace. It includes common definitions for source entities,
//! destination changesets, load stages, and the migration report.
pub mod types;
