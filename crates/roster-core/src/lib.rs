//! Roster Core Library
//!
//! Error taxonomy and storage port traits for the Roster service.

// Re-export pure types from roster-types
pub use roster_types::*;

pub mod error;
pub mod ports;

pub use error::{Result, RosterError, UpsertError, UpsertOutcome};
pub use ports::{RecordStore, UserStore};
