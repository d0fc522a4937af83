use serde::{Deserialize, Serialize};

use super::require_text;
use crate::errors::Result;

/// Author - a writer who owns zero or more Articles
///
/// Authors only exist with a database-assigned id; construction goes through
/// the repository factory, which inserts first and builds the struct from the
/// assigned rowid. There is no unsaved in-memory-only state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Author {
    /// Row id assigned by the database on insert
    pub id: i64,

    /// Display name, non-empty after trimming
    pub name: String,
}

impl Author {
    /// Build an Author from an already-assigned id and a raw name
    ///
    /// # Errors
    /// Returns a validation error if the name is empty or whitespace-only.
    pub fn new(id: i64, name: &str) -> Result<Self> {
        Ok(Self {
            id,
            name: require_text("Name", name)?,
        })
    }
}

impl std::fmt::Display for Author {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "<Author {}: {}>", self.id, self.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_trims_name() {
        let author = Author::new(1, "  Alice Smith ").unwrap();
        assert_eq!(author.name, "Alice Smith");
    }

    #[test]
    fn test_new_rejects_empty_name() {
        assert!(Author::new(1, "").is_err());
        assert!(Author::new(1, "   ").is_err());
    }

    #[test]
    fn test_display() {
        let author = Author::new(3, "Bob").unwrap();
        assert_eq!(author.to_string(), "<Author 3: Bob>");
    }
}
