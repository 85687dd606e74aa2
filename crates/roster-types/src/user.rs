//! User types

use serde::{Deserialize, Serialize};

/// Identity assigned by the durable user store
pub type UserId = i64;

/// A persisted user.
///
/// Fields are private and there are no setters; a changed user is a new value
/// built with [`User::with_name`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    id: UserId,
    name: String,
}

impl User {
    pub fn new(id: UserId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }

    pub fn id(&self) -> UserId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Copy of this user carrying a different name
    pub fn with_name(&self, name: impl Into<String>) -> Self {
        Self::new(self.id, name)
    }
}

/// Trim a candidate user name, returning `None` when nothing is left.
pub fn normalize_name(name: &str) -> Option<&str> {
    let trimmed = name.trim();
    (!trimmed.is_empty()).then_some(trimmed)
}
