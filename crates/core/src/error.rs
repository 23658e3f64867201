//! Repository failure taxonomy.

use thiserror::Error;

use crate::id::ItemId;

/// Result type returned by every repository operation.
pub type RepositoryResult<T> = Result<T, RepositoryError>;

/// Failure raised by a keyed repository.
///
/// The three kinds are disjoint and exhaustive: no repository operation
/// produces anything else. All of them are recoverable.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RepositoryError {
    /// An item with this id is already stored.
    #[error("item with ID {id} already exists")]
    DuplicateKey { id: ItemId },

    /// No item with this id is stored.
    #[error("item with ID {id} not found")]
    NotFound { id: ItemId },

    /// A quantity update would make the stock negative.
    #[error("invalid quantity {quantity} for item with ID {id}")]
    InvalidQuantity { id: ItemId, quantity: i64 },
}

/// Tag identifying which kind of failure occurred (for structured logs).
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum FailureKind {
    DuplicateKey,
    NotFound,
    InvalidQuantity,
}

impl FailureKind {
    pub fn as_str(self) -> &'static str {
        match self {
            FailureKind::DuplicateKey => "duplicate_key",
            FailureKind::NotFound => "not_found",
            FailureKind::InvalidQuantity => "invalid_quantity",
        }
    }
}

impl core::fmt::Display for FailureKind {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl RepositoryError {
    pub fn duplicate_key(id: ItemId) -> Self {
        Self::DuplicateKey { id }
    }

    pub fn not_found(id: ItemId) -> Self {
        Self::NotFound { id }
    }

    pub fn invalid_quantity(id: ItemId, quantity: i64) -> Self {
        Self::InvalidQuantity { id, quantity }
    }

    /// The id the failed operation referenced.
    pub fn id(&self) -> ItemId {
        match self {
            Self::DuplicateKey { id }
            | Self::NotFound { id }
            | Self::InvalidQuantity { id, .. } => *id,
        }
    }

    pub fn kind(&self) -> FailureKind {
        match self {
            Self::DuplicateKey { .. } => FailureKind::DuplicateKey,
            Self::NotFound { .. } => FailureKind::NotFound,
            Self::InvalidQuantity { .. } => FailureKind::InvalidQuantity,
        }
    }
}
