use thiserror::Error;

/// Result type alias using NewsroomError
pub type Result<T> = std::result::Result<T, NewsroomError>;

/// Canonical error taxonomy for newsroom operations
///
/// Validation errors are raised before any write is issued. NotFound is
/// reserved for referenced entities that must exist (e.g. the magazine an
/// article points at); plain lookups that find nothing return `None` or an
/// empty Vec instead of erroring. ConstraintViolation carries storage-level
/// foreign-key or uniqueness failures surfaced by SQLite.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum NewsroomError {
    /// Input failed shape or content validation (empty strings, non-positive ids)
    #[error("Validation failed: {reason}")]
    Validation { reason: String },

    /// A referenced entity does not exist
    #[error("{entity} not found: {id}")]
    NotFound { entity: &'static str, id: i64 },

    /// Storage-level constraint violation (foreign key, uniqueness)
    #[error("Constraint violation in '{op}': {message}")]
    ConstraintViolation { op: String, message: String },

    /// Underlying storage engine failure
    #[error("Persistence error in '{op}': {message}")]
    Persistence { op: String, message: String },

    /// Serialization failure (JSON output)
    #[error("Serialization error: {message}")]
    Serialization { message: String },

    /// Filesystem failure (database directory creation etc.)
    #[error("IO error in '{op}': {message}")]
    Io { op: String, message: String },
}

impl NewsroomError {
    /// Get the stable error code for this error
    ///
    /// Codes are part of the external surface: the CLI prints them and tests
    /// assert on them, so they must not change between releases.
    pub fn code(&self) -> &'static str {
        match self {
            NewsroomError::Validation { .. } => "ERR_VALIDATION",
            NewsroomError::NotFound { .. } => "ERR_NOT_FOUND",
            NewsroomError::ConstraintViolation { .. } => "ERR_CONSTRAINT_VIOLATION",
            NewsroomError::Persistence { .. } => "ERR_PERSISTENCE",
            NewsroomError::Serialization { .. } => "ERR_SERIALIZATION",
            NewsroomError::Io { .. } => "ERR_IO",
        }
    }

    /// Check whether this error was raised by input validation
    pub fn is_validation(&self) -> bool {
        matches!(self, NewsroomError::Validation { .. })
    }

    /// Check whether this error means a referenced entity is absent
    pub fn is_not_found(&self) -> bool {
        matches!(self, NewsroomError::NotFound { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_codes_are_stable() {
        let err = NewsroomError::Validation {
            reason: "empty name".to_string(),
        };
        assert_eq!(err.code(), "ERR_VALIDATION");

        let err = NewsroomError::NotFound {
            entity: "Magazine",
            id: 42,
        };
        assert_eq!(err.code(), "ERR_NOT_FOUND");
    }

    #[test]
    fn test_display_carries_context() {
        let err = NewsroomError::NotFound {
            entity: "Author",
            id: 7,
        };
        assert_eq!(err.to_string(), "Author not found: 7");

        let err = NewsroomError::Validation {
            reason: "Name must be a non-empty string".to_string(),
        };
        assert!(err.to_string().contains("non-empty"));
    }

    #[test]
    fn test_classification_helpers() {
        let v = NewsroomError::Validation {
            reason: "x".to_string(),
        };
        assert!(v.is_validation());
        assert!(!v.is_not_found());
    }
}
