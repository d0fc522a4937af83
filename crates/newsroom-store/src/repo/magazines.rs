//! Magazine repository

use newsroom_core::model::{require_text, Article, Author, Magazine};
use rusqlite::{Connection, OptionalExtension};

use super::{row_to_article, row_to_author, row_to_magazine};
use crate::errors::{from_rusqlite, not_found, Result};

/// Authors need strictly more than this many articles in a magazine to count
/// as contributing authors.
const CONTRIBUTING_AUTHOR_THRESHOLD: i64 = 2;

/// SQLite repository for Magazines
pub struct MagazineRepo;

impl MagazineRepo {
    /// Insert a new magazine and return it with the assigned id
    ///
    /// # Errors
    /// Validation error if name or category is empty after trimming.
    pub fn create(conn: &Connection, name: &str, category: &str) -> Result<Magazine> {
        let name = require_text("Name", name)?;
        let category = require_text("Category", category)?;

        conn.execute(
            "INSERT INTO magazines (name, category) VALUES (?1, ?2)",
            rusqlite::params![name, category],
        )
        .map_err(|e| from_rusqlite("create_magazine", e))?;

        let id = conn.last_insert_rowid();
        tracing::debug!(magazine_id = id, "created magazine");

        Ok(Magazine { id, name, category })
    }

    /// Look up a magazine by id
    pub fn find_by_id(conn: &Connection, id: i64) -> Result<Option<Magazine>> {
        conn.query_row(
            "SELECT id, name, category FROM magazines WHERE id = ?1",
            [id],
            row_to_magazine,
        )
        .optional()
        .map_err(|e| from_rusqlite("find_magazine_by_id", e))
    }

    /// Look up a magazine by exact name (first match by id)
    pub fn find_by_name(conn: &Connection, name: &str) -> Result<Option<Magazine>> {
        conn.query_row(
            "SELECT id, name, category FROM magazines WHERE name = ?1 ORDER BY id LIMIT 1",
            [name],
            row_to_magazine,
        )
        .optional()
        .map_err(|e| from_rusqlite("find_magazine_by_name", e))
    }

    /// All magazines in an exact category
    pub fn find_by_category(conn: &Connection, category: &str) -> Result<Vec<Magazine>> {
        let mut stmt = conn
            .prepare("SELECT id, name, category FROM magazines WHERE category = ?1 ORDER BY id")
            .map_err(|e| from_rusqlite("find_magazines_by_category", e))?;

        let magazines = stmt
            .query_map([category], row_to_magazine)
            .map_err(|e| from_rusqlite("find_magazines_by_category", e))?
            .collect::<std::result::Result<Vec<_>, _>>()
            .map_err(|e| from_rusqlite("find_magazines_by_category", e))?;

        Ok(magazines)
    }

    /// List all magazines, ordered by id
    pub fn all(conn: &Connection) -> Result<Vec<Magazine>> {
        let mut stmt = conn
            .prepare("SELECT id, name, category FROM magazines ORDER BY id")
            .map_err(|e| from_rusqlite("list_magazines", e))?;

        let magazines = stmt
            .query_map([], row_to_magazine)
            .map_err(|e| from_rusqlite("list_magazines", e))?
            .collect::<std::result::Result<Vec<_>, _>>()
            .map_err(|e| from_rusqlite("list_magazines", e))?;

        Ok(magazines)
    }

    /// All articles published in this magazine
    pub fn articles(conn: &Connection, magazine_id: i64) -> Result<Vec<Article>> {
        let mut stmt = conn
            .prepare(
                "SELECT id, title, content, author_id, magazine_id
                 FROM articles
                 WHERE magazine_id = ?1
                 ORDER BY id",
            )
            .map_err(|e| from_rusqlite("magazine_articles", e))?;

        let articles = stmt
            .query_map([magazine_id], row_to_article)
            .map_err(|e| from_rusqlite("magazine_articles", e))?
            .collect::<std::result::Result<Vec<_>, _>>()
            .map_err(|e| from_rusqlite("magazine_articles", e))?;

        Ok(articles)
    }

    /// Distinct authors who have written for this magazine
    pub fn contributors(conn: &Connection, magazine_id: i64) -> Result<Vec<Author>> {
        let mut stmt = conn
            .prepare(
                "SELECT DISTINCT au.id, au.name
                 FROM authors au
                 JOIN articles a ON a.author_id = au.id
                 WHERE a.magazine_id = ?1
                 ORDER BY au.id",
            )
            .map_err(|e| from_rusqlite("magazine_contributors", e))?;

        let authors = stmt
            .query_map([magazine_id], row_to_author)
            .map_err(|e| from_rusqlite("magazine_contributors", e))?
            .collect::<std::result::Result<Vec<_>, _>>()
            .map_err(|e| from_rusqlite("magazine_contributors", e))?;

        Ok(authors)
    }

    /// Titles of all articles in this magazine
    pub fn article_titles(conn: &Connection, magazine_id: i64) -> Result<Vec<String>> {
        let mut stmt = conn
            .prepare("SELECT title FROM articles WHERE magazine_id = ?1 ORDER BY id")
            .map_err(|e| from_rusqlite("magazine_article_titles", e))?;

        let titles = stmt
            .query_map([magazine_id], |row| row.get(0))
            .map_err(|e| from_rusqlite("magazine_article_titles", e))?
            .collect::<std::result::Result<Vec<_>, _>>()
            .map_err(|e| from_rusqlite("magazine_article_titles", e))?;

        Ok(titles)
    }

    /// Authors with strictly more than 2 articles in this magazine
    ///
    /// Grouped by author id and filtered post-aggregation; an author with
    /// exactly 2 articles is excluded.
    pub fn contributing_authors(conn: &Connection, magazine_id: i64) -> Result<Vec<Author>> {
        let mut stmt = conn
            .prepare(
                "SELECT au.id, au.name
                 FROM authors au
                 JOIN articles a ON a.author_id = au.id
                 WHERE a.magazine_id = ?1
                 GROUP BY au.id
                 HAVING COUNT(*) > ?2
                 ORDER BY au.id",
            )
            .map_err(|e| from_rusqlite("contributing_authors", e))?;

        let authors = stmt
            .query_map(
                rusqlite::params![magazine_id, CONTRIBUTING_AUTHOR_THRESHOLD],
                row_to_author,
            )
            .map_err(|e| from_rusqlite("contributing_authors", e))?
            .collect::<std::result::Result<Vec<_>, _>>()
            .map_err(|e| from_rusqlite("contributing_authors", e))?;

        Ok(authors)
    }

    /// The magazine with the most articles; ties broken by lowest id
    ///
    /// Outer-join semantics: magazines with zero articles count as zero and
    /// stay eligible. None only when the magazines table is empty.
    pub fn top_publisher(conn: &Connection) -> Result<Option<Magazine>> {
        conn.query_row(
            "SELECT m.id, m.name, m.category
             FROM magazines m
             LEFT JOIN articles a ON a.magazine_id = m.id
             GROUP BY m.id
             ORDER BY COUNT(a.id) DESC, m.id ASC
             LIMIT 1",
            [],
            row_to_magazine,
        )
        .optional()
        .map_err(|e| from_rusqlite("top_publisher", e))
    }

    /// Partial update: only supplied fields change; persists immediately
    ///
    /// Supplied fields are still validated non-empty.
    pub fn update(
        conn: &Connection,
        id: i64,
        name: Option<&str>,
        category: Option<&str>,
    ) -> Result<Magazine> {
        let name = name.map(|n| require_text("Name", n)).transpose()?;
        let category = category.map(|c| require_text("Category", c)).transpose()?;

        let changed = conn
            .execute(
                "UPDATE magazines
                 SET name = COALESCE(?1, name),
                     category = COALESCE(?2, category)
                 WHERE id = ?3",
                rusqlite::params![name, category, id],
            )
            .map_err(|e| from_rusqlite("update_magazine", e))?;

        if changed == 0 {
            return Err(not_found("Magazine", id));
        }

        Self::find_by_id(conn, id)?.ok_or_else(|| not_found("Magazine", id))
    }

    /// Delete a magazine row
    ///
    /// Rejected with a constraint violation while dependent articles exist;
    /// move the articles first (see `transactions::transfer_articles_between_magazines`)
    /// or delete them explicitly.
    pub fn delete(conn: &Connection, id: i64) -> Result<()> {
        let changed = conn
            .execute("DELETE FROM magazines WHERE id = ?1", [id])
            .map_err(|e| from_rusqlite("delete_magazine", e))?;

        if changed == 0 {
            return Err(not_found("Magazine", id));
        }

        Ok(())
    }
}
