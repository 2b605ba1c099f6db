//! Unified error handling for Inventory Core.
//!
//! Business-rule violations (duplicate or missing identifiers) are never
//! errors: the controller reports them through the presentation port. What
//! ends up here is input the front-end could not turn into an [`Item`] and
//! failures of the persistence layer.
//!
//! [`Item`]: crate::domain::Item

use thiserror::Error;

use crate::application::ApplicationError;
use crate::domain::DomainError;

/// Root error type for Inventory Core operations.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum InventoryError {
    /// Errors from the domain layer (form input that is not a valid item).
    #[error("Domain error: {0}")]
    Domain(#[from] DomainError),

    /// Errors from the application layer (persistence failures).
    #[error("Application error: {0}")]
    Application(#[from] ApplicationError),

    /// Unexpected internal errors (bugs).
    #[error("Internal error: {message}. This is a bug, please report it.")]
    Internal { message: String },
}

impl InventoryError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::Domain(e) => e.suggestions(),
            Self::Application(e) => e.suggestions(),
            Self::Internal { .. } => vec![
                "This appears to be a bug in the inventory manager".into(),
                "Please report this issue with the output of -vvv".into(),
            ],
        }
    }

    /// Get error category for display/styling purposes.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::Domain(e) => e.category(),
            Self::Application(e) => e.category(),
            Self::Internal { .. } => ErrorCategory::Internal,
        }
    }
}

/// Error categories for UI display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    Storage,
    Internal,
}

/// Convenient result type alias.
pub type InventoryResult<T> = Result<T, InventoryError>;
