// ============================================================================
// domain/error.rs - INPUT ERRORS
// ============================================================================

use thiserror::Error;

use crate::error::ErrorCategory;

/// Root domain error type.
///
/// Raised only while turning raw form input into an `Item`. The controller
/// never produces these; duplicate and missing identifiers go through the
/// presentation port instead.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum DomainError {
    #[error("Required field missing: {field}")]
    MissingField { field: &'static str },

    #[error("Invalid quantity '{value}': {reason}")]
    InvalidQuantity { value: String, reason: String },

    #[error("Invalid price '{value}': {reason}")]
    InvalidPrice { value: String, reason: String },
}

impl DomainError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::MissingField { field } => vec![
                format!("The '{}' field cannot be blank", field),
                "Every item needs an id, name, quantity, price and description".into(),
            ],
            Self::InvalidQuantity { value, .. } => vec![
                format!("'{}' is not a whole number", value),
                "Quantities are integers, e.g. 10 or -2".into(),
            ],
            Self::InvalidPrice { value, .. } => vec![
                format!("'{}' is not a number", value),
                "Prices use a dot as decimal separator, e.g. 999.9".into(),
            ],
        }
    }

    /// Error category for CLI display styling.
    pub fn category(&self) -> ErrorCategory {
        ErrorCategory::Validation
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_field_names_the_field() {
        let err = DomainError::MissingField { field: "price" };
        assert_eq!(err.to_string(), "Required field missing: price");
        assert!(err.suggestions()[0].contains("price"));
    }

    #[test]
    fn invalid_quantity_suggests_integers() {
        let err = DomainError::InvalidQuantity {
            value: "ten".into(),
            reason: "invalid digit found in string".into(),
        };
        assert!(err.suggestions().iter().any(|s| s.contains("integers")));
    }
}
