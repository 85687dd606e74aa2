//! Error types for Roster

use thiserror::Error;

pub type Result<T> = std::result::Result<T, RosterError>;

#[derive(Error, Debug)]
pub enum RosterError {
    /// Caller input violates a precondition; nothing was written
    #[error("{0}")]
    Validation(String),

    #[error("Storage error: {0}")]
    Storage(String),

    #[error("Config error: {0}")]
    Config(String),
}

impl RosterError {
    pub fn validation(message: impl Into<String>) -> Self {
        RosterError::Validation(message.into())
    }

    pub fn is_validation(&self) -> bool {
        matches!(self, RosterError::Validation(_))
    }
}

/// What a successful upsert did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpsertOutcome {
    Inserted,
    Replaced,
}

/// Why the record store could not be used.
///
/// Never crosses the public `upsert` boundary; it is logged and turned into
/// the `None` sentinel there.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum UpsertError {
    #[error("record store lock poisoned by a panicking writer")]
    Poisoned,

    #[error("record store holds {count} entries named {name:?}")]
    DuplicateName { name: String, count: usize },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_message_is_bare() {
        let err = RosterError::validation("name must be non-empty");
        assert!(err.is_validation());
        assert_eq!(err.to_string(), "name must be non-empty");
    }

    #[test]
    fn test_storage_is_not_validation() {
        let err = RosterError::Storage("disk I/O error".to_string());
        assert!(!err.is_validation());
        assert_eq!(err.to_string(), "Storage error: disk I/O error");
    }
}
