//! Multi-statement transactional operations
//!
//! Each operation follows the same shape: Begin, Validate, Mutate, Commit.
//! Input validation runs before the transaction opens, so a validation
//! failure never touches the database. Any failure after Begin returns early;
//! dropping the uncommitted `rusqlite::Transaction` rolls back every
//! statement issued so far.

use newsroom_core::errors::NewsroomError;
use newsroom_core::model::{require_positive_id, require_text, ArticleDraft};
use rusqlite::{Connection, OptionalExtension, Transaction};
use serde::Serialize;

use crate::errors::{from_rusqlite, not_found, Result};

/// Outcome of `add_author_with_articles`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AuthorWithArticlesReport {
    pub author_id: i64,
    pub article_count: usize,
}

/// Outcome of `delete_author_and_articles`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DeleteAuthorReport {
    pub author_id: i64,
    pub deleted_articles: i64,
}

/// Outcome of `transfer_articles_between_magazines`
///
/// Transferring zero articles is a success; `note` carries the informational
/// message for that case.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TransferReport {
    pub from_magazine_id: i64,
    pub to_magazine_id: i64,
    pub transferred: i64,
    pub note: Option<String>,
}

/// Create an author and all of their articles atomically
///
/// Every draft is validated before any write. Inside the transaction each
/// referenced magazine is checked; one missing magazine rolls back the whole
/// operation, including the author insert.
pub fn add_author_with_articles(
    conn: &mut Connection,
    name: &str,
    drafts: &[ArticleDraft],
) -> Result<AuthorWithArticlesReport> {
    let name = require_text("Author name", name)?;

    if drafts.is_empty() {
        return Err(NewsroomError::Validation {
            reason: "Articles list must be non-empty".to_string(),
        });
    }

    let mut titles = Vec::with_capacity(drafts.len());
    for draft in drafts {
        titles.push(draft.validate()?);
    }

    let tx = conn
        .transaction()
        .map_err(|e| from_rusqlite("add_author_with_articles", e))?;

    tx.execute(
        "INSERT INTO authors (name) VALUES (?1)",
        rusqlite::params![name],
    )
    .map_err(|e| from_rusqlite("add_author_with_articles", e))?;
    let author_id = tx.last_insert_rowid();

    for (draft, title) in drafts.iter().zip(titles.iter()) {
        if !magazine_exists(&tx, draft.magazine_id)? {
            tracing::warn!(
                magazine_id = draft.magazine_id,
                "referenced magazine missing, rolling back author insert"
            );
            return Err(not_found("Magazine", draft.magazine_id));
        }

        tx.execute(
            "INSERT INTO articles (title, content, author_id, magazine_id)
             VALUES (?1, ?2, ?3, ?4)",
            rusqlite::params![title, draft.content.trim(), author_id, draft.magazine_id],
        )
        .map_err(|e| from_rusqlite("add_author_with_articles", e))?;
    }

    tx.commit()
        .map_err(|e| from_rusqlite("add_author_with_articles", e))?;

    tracing::info!(author_id, articles = drafts.len(), "created author with articles");

    Ok(AuthorWithArticlesReport {
        author_id,
        article_count: drafts.len(),
    })
}

/// Delete an author and all of their articles atomically
///
/// Articles go first so the author delete does not trip the foreign-key
/// constraint.
pub fn delete_author_and_articles(
    conn: &mut Connection,
    author_id: i64,
) -> Result<DeleteAuthorReport> {
    require_positive_id("author_id", author_id)?;

    let tx = conn
        .transaction()
        .map_err(|e| from_rusqlite("delete_author_and_articles", e))?;

    let exists: Option<i64> = tx
        .query_row("SELECT id FROM authors WHERE id = ?1", [author_id], |row| {
            row.get(0)
        })
        .optional()
        .map_err(|e| from_rusqlite("delete_author_and_articles", e))?;

    if exists.is_none() {
        return Err(not_found("Author", author_id));
    }

    let deleted_articles = tx
        .execute("DELETE FROM articles WHERE author_id = ?1", [author_id])
        .map_err(|e| from_rusqlite("delete_author_and_articles", e))?
        as i64;

    tx.execute("DELETE FROM authors WHERE id = ?1", [author_id])
        .map_err(|e| from_rusqlite("delete_author_and_articles", e))?;

    tx.commit()
        .map_err(|e| from_rusqlite("delete_author_and_articles", e))?;

    tracing::info!(author_id, deleted_articles, "deleted author and articles");

    Ok(DeleteAuthorReport {
        author_id,
        deleted_articles,
    })
}

/// Bulk-reassign every article of one magazine to another, atomically
///
/// Both magazines must exist and be distinct. Moving zero articles is a
/// success, reported with an informational note.
pub fn transfer_articles_between_magazines(
    conn: &mut Connection,
    from_magazine_id: i64,
    to_magazine_id: i64,
) -> Result<TransferReport> {
    require_positive_id("from_magazine_id", from_magazine_id)?;
    require_positive_id("to_magazine_id", to_magazine_id)?;

    if from_magazine_id == to_magazine_id {
        return Err(NewsroomError::Validation {
            reason: "Source and target magazines cannot be the same".to_string(),
        });
    }

    let tx = conn
        .transaction()
        .map_err(|e| from_rusqlite("transfer_articles", e))?;

    for id in [from_magazine_id, to_magazine_id] {
        if !magazine_exists(&tx, id)? {
            return Err(not_found("Magazine", id));
        }
    }

    let transferred = tx
        .execute(
            "UPDATE articles SET magazine_id = ?1 WHERE magazine_id = ?2",
            rusqlite::params![to_magazine_id, from_magazine_id],
        )
        .map_err(|e| from_rusqlite("transfer_articles", e))? as i64;

    tx.commit()
        .map_err(|e| from_rusqlite("transfer_articles", e))?;

    tracing::info!(
        from_magazine_id,
        to_magazine_id,
        transferred,
        "transferred articles between magazines"
    );

    Ok(TransferReport {
        from_magazine_id,
        to_magazine_id,
        transferred,
        note: (transferred == 0).then(|| "No articles to transfer".to_string()),
    })
}

fn magazine_exists(tx: &Transaction<'_>, magazine_id: i64) -> Result<bool> {
    let row: Option<i64> = tx
        .query_row(
            "SELECT id FROM magazines WHERE id = ?1",
            [magazine_id],
            |row| row.get(0),
        )
        .optional()
        .map_err(|e| from_rusqlite("magazine_exists", e))?;

    Ok(row.is_some())
}
