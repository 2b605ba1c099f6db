//! Application layer errors.
//!
//! These errors represent failures of the persistence side, not business
//! rules. Duplicate or unknown identifiers are reported through
//! `InventoryView::show_error_message` and never show up here.

use thiserror::Error;

use crate::error::ErrorCategory;

/// Errors raised by repository adapters and propagated through the controller.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ApplicationError {
    /// The backing store rejected or failed an operation.
    #[error("Persistence failure during {operation}: {reason}")]
    Persistence {
        operation: &'static str,
        reason: String,
    },

    /// Could not reach the backing store at all.
    #[error("Cannot connect to {address}: {reason}")]
    Connection { address: String, reason: String },

    /// A stored document does not map onto an item.
    #[error("Malformed record{}: {reason}", quoted_id(.id))]
    MalformedRecord { id: Option<String>, reason: String },

    /// In-process store lock poisoned by a panicking writer.
    #[error("Item store lock poisoned")]
    StoreLock,
}

impl ApplicationError {
    /// Get user-actionable suggestions.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::Persistence { operation, .. } => vec![
                format!("The database failed while running '{}'", operation),
                "Check that the database server is running and reachable".into(),
                "Re-run with -vv for driver diagnostics".into(),
            ],
            Self::Connection { address, .. } => vec![
                format!("Could not reach {}", address),
                "Check --mongo-host / --mongo-port or the [database] config section".into(),
                "Use --store memory to try the tool without a database".into(),
            ],
            Self::MalformedRecord { .. } => vec![
                "A stored document is missing fields or has the wrong types".into(),
                "Every document needs id, name, quantity, price and description".into(),
            ],
            Self::StoreLock => vec![
                "The in-memory store was poisoned by an earlier panic".into(),
                "Restart the session".into(),
            ],
        }
    }

    /// Get error category.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::Persistence { .. } | Self::Connection { .. } => ErrorCategory::Storage,
            Self::MalformedRecord { .. } => ErrorCategory::Storage,
            Self::StoreLock => ErrorCategory::Internal,
        }
    }
}

fn quoted_id(id: &Option<String>) -> String {
    id.as_ref().map(|id| format!(" '{id}'")).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn malformed_record_mentions_id_when_known() {
        let err = ApplicationError::MalformedRecord {
            id: Some("7".into()),
            reason: "missing field 'price'".into(),
        };
        assert_eq!(err.to_string(), "Malformed record '7': missing field 'price'");

        let anonymous = ApplicationError::MalformedRecord {
            id: None,
            reason: "missing field 'id'".into(),
        };
        assert_eq!(anonymous.to_string(), "Malformed record: missing field 'id'");
    }

    #[test]
    fn connection_suggests_memory_store() {
        let err = ApplicationError::Connection {
            address: "localhost:27017".into(),
            reason: "refused".into(),
        };
        assert!(err.suggestions().iter().any(|s| s.contains("--store memory")));
    }
}
