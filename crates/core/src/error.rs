//! Domain error model.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type used across the domain layer.
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level error.
///
/// Every variant is a deterministic validation outcome. Callers decide whether
/// to re-prompt or abort; nothing here is retryable.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// An unknown plan or feature name.
    #[error("{0}")]
    NotFound(String),

    /// A known plan or feature that is currently disabled.
    #[error("{0}")]
    Unavailable(String),

    /// Input of the wrong shape (non-integer count, non-list features, bad JSON).
    #[error("{0}")]
    InvalidInput(String),

    /// A numeric value outside its allowed bounds.
    #[error("{0}")]
    OutOfRange(String),
}

/// Discriminant of [`DomainError`], for callers that branch on the kind only.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ValidationErrorKind {
    NotFound,
    Unavailable,
    InvalidInput,
    OutOfRange,
}

impl DomainError {
    pub fn not_found(msg: impl Into<String>) -> Self {
        Self::NotFound(msg.into())
    }

    pub fn unavailable(msg: impl Into<String>) -> Self {
        Self::Unavailable(msg.into())
    }

    pub fn invalid_input(msg: impl Into<String>) -> Self {
        Self::InvalidInput(msg.into())
    }

    pub fn out_of_range(msg: impl Into<String>) -> Self {
        Self::OutOfRange(msg.into())
    }

    pub fn kind(&self) -> ValidationErrorKind {
        match self {
            Self::NotFound(_) => ValidationErrorKind::NotFound,
            Self::Unavailable(_) => ValidationErrorKind::Unavailable,
            Self::InvalidInput(_) => ValidationErrorKind::InvalidInput,
            Self::OutOfRange(_) => ValidationErrorKind::OutOfRange,
        }
    }

    /// The human-readable message carried by the error.
    pub fn message(&self) -> &str {
        match self {
            Self::NotFound(m) | Self::Unavailable(m) | Self::InvalidInput(m) | Self::OutOfRange(m) => m,
        }
    }
}
