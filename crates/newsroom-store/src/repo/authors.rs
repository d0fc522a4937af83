//! Author repository

use newsroom_core::model::{require_text, Article, Author, Magazine};
use rusqlite::{Connection, OptionalExtension};

use super::{row_to_article, row_to_author, row_to_magazine};
use crate::errors::{from_rusqlite, not_found, Result};

/// SQLite repository for Authors
pub struct AuthorRepo;

impl AuthorRepo {
    /// Insert a new author and return it with the assigned id
    ///
    /// # Errors
    /// Validation error if the name is empty after trimming.
    pub fn create(conn: &Connection, name: &str) -> Result<Author> {
        let name = require_text("Name", name)?;

        conn.execute(
            "INSERT INTO authors (name) VALUES (?1)",
            rusqlite::params![name],
        )
        .map_err(|e| from_rusqlite("create_author", e))?;

        let id = conn.last_insert_rowid();
        tracing::debug!(author_id = id, "created author");

        Ok(Author { id, name })
    }

    /// Look up an author by id
    pub fn find_by_id(conn: &Connection, id: i64) -> Result<Option<Author>> {
        conn.query_row(
            "SELECT id, name FROM authors WHERE id = ?1",
            [id],
            row_to_author,
        )
        .optional()
        .map_err(|e| from_rusqlite("find_author_by_id", e))
    }

    /// Look up an author by exact name (case-sensitive, first match by id)
    pub fn find_by_name(conn: &Connection, name: &str) -> Result<Option<Author>> {
        conn.query_row(
            "SELECT id, name FROM authors WHERE name = ?1 ORDER BY id LIMIT 1",
            [name],
            row_to_author,
        )
        .optional()
        .map_err(|e| from_rusqlite("find_author_by_name", e))
    }

    /// List all authors, ordered by id
    pub fn all(conn: &Connection) -> Result<Vec<Author>> {
        let mut stmt = conn
            .prepare("SELECT id, name FROM authors ORDER BY id")
            .map_err(|e| from_rusqlite("list_authors", e))?;

        let authors = stmt
            .query_map([], row_to_author)
            .map_err(|e| from_rusqlite("list_authors", e))?
            .collect::<std::result::Result<Vec<_>, _>>()
            .map_err(|e| from_rusqlite("list_authors", e))?;

        Ok(authors)
    }

    /// All articles written by this author
    pub fn articles(conn: &Connection, author_id: i64) -> Result<Vec<Article>> {
        let mut stmt = conn
            .prepare(
                "SELECT id, title, content, author_id, magazine_id
                 FROM articles
                 WHERE author_id = ?1
                 ORDER BY id",
            )
            .map_err(|e| from_rusqlite("author_articles", e))?;

        let articles = stmt
            .query_map([author_id], row_to_article)
            .map_err(|e| from_rusqlite("author_articles", e))?
            .collect::<std::result::Result<Vec<_>, _>>()
            .map_err(|e| from_rusqlite("author_articles", e))?;

        Ok(articles)
    }

    /// Distinct magazines this author has written for, via the articles join
    pub fn magazines(conn: &Connection, author_id: i64) -> Result<Vec<Magazine>> {
        let mut stmt = conn
            .prepare(
                "SELECT DISTINCT m.id, m.name, m.category
                 FROM magazines m
                 JOIN articles a ON a.magazine_id = m.id
                 WHERE a.author_id = ?1
                 ORDER BY m.id",
            )
            .map_err(|e| from_rusqlite("author_magazines", e))?;

        let magazines = stmt
            .query_map([author_id], row_to_magazine)
            .map_err(|e| from_rusqlite("author_magazines", e))?
            .collect::<std::result::Result<Vec<_>, _>>()
            .map_err(|e| from_rusqlite("author_magazines", e))?;

        Ok(magazines)
    }

    /// Distinct categories of the magazines this author has written for
    pub fn topic_areas(conn: &Connection, author_id: i64) -> Result<Vec<String>> {
        let mut stmt = conn
            .prepare(
                "SELECT DISTINCT m.category
                 FROM magazines m
                 JOIN articles a ON a.magazine_id = m.id
                 WHERE a.author_id = ?1
                 ORDER BY m.category",
            )
            .map_err(|e| from_rusqlite("author_topic_areas", e))?;

        let topics = stmt
            .query_map([author_id], |row| row.get(0))
            .map_err(|e| from_rusqlite("author_topic_areas", e))?
            .collect::<std::result::Result<Vec<_>, _>>()
            .map_err(|e| from_rusqlite("author_topic_areas", e))?;

        Ok(topics)
    }

    /// Create a new article for this author in the given magazine
    ///
    /// Validation happens before the insert; the foreign-key constraints take
    /// care of rejecting unknown author or magazine ids.
    pub fn add_article(
        conn: &Connection,
        author_id: i64,
        magazine_id: i64,
        title: &str,
        content: &str,
    ) -> Result<Article> {
        let mut article = Article::draft(title, content, author_id, magazine_id)?;

        conn.execute(
            "INSERT INTO articles (title, content, author_id, magazine_id)
             VALUES (?1, ?2, ?3, ?4)",
            rusqlite::params![article.title, article.content, author_id, magazine_id],
        )
        .map_err(|e| from_rusqlite("add_article", e))?;

        article.id = Some(conn.last_insert_rowid());
        Ok(article)
    }

    /// The author with the most articles; ties broken by lowest id
    ///
    /// Authors with zero articles count as zero and stay eligible, so an
    /// all-zero table still yields the lowest-id author. None only when the
    /// authors table is empty.
    pub fn most_prolific(conn: &Connection) -> Result<Option<Author>> {
        conn.query_row(
            "SELECT au.id, au.name
             FROM authors au
             LEFT JOIN articles a ON a.author_id = au.id
             GROUP BY au.id
             ORDER BY COUNT(a.id) DESC, au.id ASC
             LIMIT 1",
            [],
            row_to_author,
        )
        .optional()
        .map_err(|e| from_rusqlite("most_prolific_author", e))
    }

    /// Rename an author; persists immediately
    pub fn update_name(conn: &Connection, id: i64, name: &str) -> Result<Author> {
        let name = require_text("Name", name)?;

        let changed = conn
            .execute(
                "UPDATE authors SET name = ?1 WHERE id = ?2",
                rusqlite::params![name, id],
            )
            .map_err(|e| from_rusqlite("update_author", e))?;

        if changed == 0 {
            return Err(not_found("Author", id));
        }

        Ok(Author { id, name })
    }

    /// Delete an author row
    ///
    /// Rejected with a constraint violation while dependent articles exist;
    /// cascade deletion only happens through
    /// `transactions::delete_author_and_articles`.
    pub fn delete(conn: &Connection, id: i64) -> Result<()> {
        let changed = conn
            .execute("DELETE FROM authors WHERE id = ?1", [id])
            .map_err(|e| from_rusqlite("delete_author", e))?;

        if changed == 0 {
            return Err(not_found("Author", id));
        }

        Ok(())
    }
}
