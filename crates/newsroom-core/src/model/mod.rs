pub mod article;
pub mod author;
pub mod magazine;

pub use article::{Article, ArticleDraft};
pub use author::Author;
pub use magazine::Magazine;

use crate::errors::{NewsroomError, Result};

/// Validate a required text field, returning the trimmed value
///
/// Every user-supplied name, category, and title passes through here before
/// it reaches the database; what gets stored is always the trimmed string.
pub fn require_text(field: &str, value: &str) -> Result<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(NewsroomError::Validation {
            reason: format!("{} must be a non-empty string", field),
        });
    }
    Ok(trimmed.to_string())
}

/// Validate an identifier that must reference a row
pub fn require_positive_id(field: &str, id: i64) -> Result<i64> {
    if id <= 0 {
        return Err(NewsroomError::Validation {
            reason: format!("{} must be a positive integer, got {}", field, id),
        });
    }
    Ok(id)
}
