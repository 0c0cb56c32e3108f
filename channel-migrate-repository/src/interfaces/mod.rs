//! This module defines and re-exports the interfaces for the destination repository.
//! It serves as a central point for accessing traits related to data interaction.
mod destination;

pub use destination::DestinationRepository;
