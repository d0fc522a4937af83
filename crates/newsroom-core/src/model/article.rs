use serde::{Deserialize, Serialize};

use super::{require_positive_id, require_text};
use crate::errors::Result;

/// Article - a piece of writing linking an Author to a Magazine
///
/// `id` is `None` for an article that has not been inserted yet; the
/// repository's `save` distinguishes insert from update on its presence and
/// fills it in after the insert.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Article {
    /// Row id, absent until the first save
    pub id: Option<i64>,

    /// Title, non-empty after trimming
    pub title: String,

    /// Body text, may be empty
    pub content: String,

    /// Owning author (foreign key, required)
    pub author_id: i64,

    /// Publishing magazine (foreign key, required)
    pub magazine_id: i64,
}

impl Article {
    /// Build an unsaved Article ready for insert
    ///
    /// # Errors
    /// Returns a validation error if the title is empty after trimming or
    /// either foreign key is not a positive integer.
    pub fn draft(title: &str, content: &str, author_id: i64, magazine_id: i64) -> Result<Self> {
        Ok(Self {
            id: None,
            title: require_text("Title", title)?,
            content: content.to_string(),
            author_id: require_positive_id("author_id", author_id)?,
            magazine_id: require_positive_id("magazine_id", magazine_id)?,
        })
    }

    /// Re-validate mutable fields before an update is written
    pub fn validate(&self) -> Result<()> {
        require_text("Title", &self.title)?;
        require_positive_id("author_id", self.author_id)?;
        require_positive_id("magazine_id", self.magazine_id)?;
        Ok(())
    }
}

impl std::fmt::Display for Article {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.id {
            Some(id) => write!(f, "<Article {}: {}>", id, self.title),
            None => write!(f, "<Article (unsaved): {}>", self.title),
        }
    }
}

/// Input shape for batch article creation in transactional operations
///
/// The author id is supplied by the transaction itself (the author row is
/// inserted first), so drafts only carry the fields the caller knows upfront.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArticleDraft {
    pub title: String,
    #[serde(default)]
    pub content: String,
    pub magazine_id: i64,
}

impl ArticleDraft {
    pub fn new(title: impl Into<String>, content: impl Into<String>, magazine_id: i64) -> Self {
        Self {
            title: title.into(),
            content: content.into(),
            magazine_id,
        }
    }

    /// Validate required fields; returns the trimmed title
    pub fn validate(&self) -> Result<String> {
        let title = require_text("Title", &self.title)?;
        require_positive_id("magazine_id", self.magazine_id)?;
        Ok(title)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_draft_trims_title() {
        let article = Article::draft("  AI in 2025 ", "", 1, 1).unwrap();
        assert_eq!(article.title, "AI in 2025");
        assert_eq!(article.id, None);
    }

    #[test]
    fn test_draft_rejects_empty_title() {
        assert!(Article::draft("", "body", 1, 1).is_err());
    }

    #[test]
    fn test_draft_rejects_bad_foreign_keys() {
        assert!(Article::draft("Title", "", 0, 1).is_err());
        assert!(Article::draft("Title", "", 1, -2).is_err());
    }

    #[test]
    fn test_article_draft_validate() {
        let draft = ArticleDraft::new("Tech for Good", "", 1);
        assert_eq!(draft.validate().unwrap(), "Tech for Good");

        let bad = ArticleDraft::new(" ", "", 1);
        assert!(bad.validate().is_err());

        let bad_mag = ArticleDraft::new("Title", "", 0);
        assert!(bad_mag.validate().is_err());
    }
}
