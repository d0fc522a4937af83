//! Repository layer: per-entity CRUD and relationship queries over SQLite
//!
//! Repositories are stateless; every operation borrows the connection it
//! runs on, so the caller owns the connection lifecycle.

pub mod articles;
pub mod authors;
pub mod magazines;

pub use articles::ArticleRepo;
pub use authors::AuthorRepo;
pub use magazines::MagazineRepo;

use newsroom_core::model::{Article, Author, Magazine};
use rusqlite::Row;

// Fixed field-by-field row decoders shared by the repos. Column order must
// match the SELECT lists below; no positional `SELECT *` decoding.

pub(crate) fn row_to_author(row: &Row<'_>) -> rusqlite::Result<Author> {
    Ok(Author {
        id: row.get(0)?,
        name: row.get(1)?,
    })
}

pub(crate) fn row_to_magazine(row: &Row<'_>) -> rusqlite::Result<Magazine> {
    Ok(Magazine {
        id: row.get(0)?,
        name: row.get(1)?,
        category: row.get(2)?,
    })
}

pub(crate) fn row_to_article(row: &Row<'_>) -> rusqlite::Result<Article> {
    Ok(Article {
        id: Some(row.get(0)?),
        title: row.get(1)?,
        content: row.get(2)?,
        author_id: row.get(3)?,
        magazine_id: row.get(4)?,
    })
}
