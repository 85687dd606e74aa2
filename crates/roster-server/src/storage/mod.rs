//! Storage layer
//!
//! Users live in SQLite (embedded, durable). Upsert records live in process
//! memory and are gone on restart.

pub mod db;
pub mod memory;

pub use db::Database;
pub use memory::UpsertStore;
