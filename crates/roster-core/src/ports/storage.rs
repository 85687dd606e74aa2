//! Storage traits for persistence

use crate::error::{Result, UpsertError, UpsertOutcome};
use async_trait::async_trait;
use roster_types::{Meta, UpsertRecord, User, UserId};

/// Durable, append-only user table
#[async_trait]
pub trait UserStore: Send + Sync {
    /// Create the backing table if it is missing. Safe to call repeatedly.
    async fn initialize(&self) -> Result<()>;

    /// Append a user and return its sequential identity.
    async fn add_user(&self, name: &str) -> Result<UserId>;

    async fn get_user(&self, id: UserId) -> Result<Option<User>>;
}

/// Volatile name-keyed records with replace-on-hit semantics
pub trait RecordStore: Send + Sync {
    fn try_upsert(
        &self,
        name: &str,
        meta: Meta,
    ) -> std::result::Result<UpsertOutcome, UpsertError>;

    /// `Some(true)` on insert or replace, `None` when the store is unusable.
    fn upsert(&self, name: &str, meta: Meta) -> Option<bool>;

    /// `Ok(None)` when no record carries `name`; an unusable store is an
    /// error, not an absence.
    fn get(&self, name: &str) -> std::result::Result<Option<UpsertRecord>, UpsertError>;

    /// Drop every record, returning how many were removed.
    fn clear(&self) -> usize;
}
