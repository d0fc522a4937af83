//! Error handling for newsroom-store
//!
//! Wraps newsroom-core's NewsroomError with store-specific constructors

use newsroom_core::errors::NewsroomError;

/// Result type alias using NewsroomError
pub type Result<T> = std::result::Result<T, NewsroomError>;

/// Create a persistence (or constraint) error from rusqlite::Error
///
/// Foreign-key and uniqueness failures are surfaced as ConstraintViolation so
/// callers can distinguish "the engine rejected this" from engine breakage.
pub fn from_rusqlite(op: &str, err: rusqlite::Error) -> NewsroomError {
    if is_constraint_violation(&err) {
        NewsroomError::ConstraintViolation {
            op: op.to_string(),
            message: err.to_string(),
        }
    } else {
        NewsroomError::Persistence {
            op: op.to_string(),
            message: err.to_string(),
        }
    }
}

/// Create a migration error
pub fn migration_error(migration_id: &str, reason: &str) -> NewsroomError {
    NewsroomError::Persistence {
        op: "migration".to_string(),
        message: format!("Migration {} failed: {}", migration_id, reason),
    }
}

/// Create a not-found error for a referenced entity
pub fn not_found(entity: &'static str, id: i64) -> NewsroomError {
    NewsroomError::NotFound { entity, id }
}

fn is_constraint_violation(err: &rusqlite::Error) -> bool {
    matches!(
        err,
        rusqlite::Error::SqliteFailure(
            rusqlite::ffi::Error {
                code: rusqlite::ffi::ErrorCode::ConstraintViolation,
                ..
            },
            _,
        )
    )
}
