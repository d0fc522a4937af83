use serde::{Deserialize, Serialize};

use super::require_text;
use crate::errors::Result;

/// Magazine - a publication with a category, owning zero or more Articles
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Magazine {
    /// Row id assigned by the database on insert
    pub id: i64,

    /// Publication name, non-empty after trimming
    pub name: String,

    /// Topic category (e.g. "Technology"), non-empty after trimming
    pub category: String,
}

impl Magazine {
    /// Build a Magazine from an already-assigned id and raw fields
    ///
    /// # Errors
    /// Returns a validation error if name or category is empty after trimming.
    pub fn new(id: i64, name: &str, category: &str) -> Result<Self> {
        Ok(Self {
            id,
            name: require_text("Name", name)?,
            category: require_text("Category", category)?,
        })
    }
}

impl std::fmt::Display for Magazine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "<Magazine {}: {} ({})>", self.id, self.name, self.category)
    }
}
