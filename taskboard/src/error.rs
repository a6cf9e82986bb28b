//! Error types for the board engine

use thiserror::Error;

/// Result type for board operations
pub type Result<T> = std::result::Result<T, BoardError>;

/// Errors that can occur in board operations
#[derive(Debug, Error)]
pub enum BoardError {
    /// Task not found
    #[error("task not found: {id}")]
    TaskNotFound { id: String },

    /// Column not found
    #[error("column not found: {id}")]
    ColumnNotFound { id: String },

    /// Generic resource not found (checklist items, etc.)
    #[error("{resource} not found: {id}")]
    NotFound { resource: String, id: String },

    /// Title was empty after trimming
    #[error("{entity} title must not be empty")]
    EmptyTitle { entity: String },

    /// Duplicate ID
    #[error("duplicate {item_type} ID: {id}")]
    DuplicateId { item_type: String, id: String },

    /// Invalid field value
    #[error("invalid value for {field}: {message}")]
    InvalidValue { field: String, message: String },

    /// Parse error
    #[error("parse error: {message}")]
    Parse { message: String },

    /// JSON serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl BoardError {
    /// Create a parse error
    pub fn parse(message: impl Into<String>) -> Self {
        Self::Parse {
            message: message.into(),
        }
    }

    /// Create an empty title error
    pub fn empty_title(entity: impl Into<String>) -> Self {
        Self::EmptyTitle {
            entity: entity.into(),
        }
    }

    /// Create an invalid value error
    pub fn invalid_value(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidValue {
            field: field.into(),
            message: message.into(),
        }
    }

    /// Create a duplicate ID error
    pub fn duplicate_id(item_type: impl Into<String>, id: impl Into<String>) -> Self {
        Self::DuplicateId {
            item_type: item_type.into(),
            id: id.into(),
        }
    }

    /// Create a generic not-found error
    pub fn not_found(resource: impl Into<String>, id: impl Into<String>) -> Self {
        Self::NotFound {
            resource: resource.into(),
            id: id.into(),
        }
    }

    /// The operation referenced an id that no longer exists.
    ///
    /// Commands turn these into no-ops.
    pub fn is_stale(&self) -> bool {
        matches!(
            self,
            Self::TaskNotFound { .. } | Self::ColumnNotFound { .. } | Self::NotFound { .. }
        )
    }

    /// The input was rejected before touching the board
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            Self::EmptyTitle { .. }
                | Self::InvalidValue { .. }
                | Self::Parse { .. }
                | Self::DuplicateId { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = BoardError::TaskNotFound {
            id: "abc123".into(),
        };
        assert_eq!(err.to_string(), "task not found: abc123");
        assert_eq!(
            BoardError::empty_title("task").to_string(),
            "task title must not be empty"
        );
    }

    #[test]
    fn test_stale_errors() {
        assert!(BoardError::ColumnNotFound { id: "x".into() }.is_stale());
        assert!(BoardError::not_found("checklist item", "x").is_stale());
        assert!(!BoardError::empty_title("column").is_stale());
    }

    #[test]
    fn test_validation_errors() {
        assert!(BoardError::empty_title("task").is_validation());
        assert!(BoardError::parse("bad").is_validation());
        assert!(!BoardError::TaskNotFound { id: "x".into() }.is_validation());
    }
}
