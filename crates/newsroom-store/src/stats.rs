//! Cross-entity aggregation queries
//!
//! Top publisher and most prolific author live on their repos; this module
//! holds the list-shaped statistics the CLI surfaces.

use newsroom_core::model::{Author, Magazine};
use rusqlite::Connection;
use serde::Serialize;

use crate::errors::{from_rusqlite, Result};

/// A magazine with its total article count (zero included)
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MagazineArticleCount {
    pub magazine: Magazine,
    pub article_count: i64,
}

/// An author with their total article count (zero included)
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AuthorArticleCount {
    pub author: Author,
    pub article_count: i64,
}

/// Article counts per magazine, highest first, ties by lowest id
pub fn article_counts_by_magazine(conn: &Connection) -> Result<Vec<MagazineArticleCount>> {
    let mut stmt = conn
        .prepare(
            "SELECT m.id, m.name, m.category, COUNT(a.id) AS article_count
             FROM magazines m
             LEFT JOIN articles a ON a.magazine_id = m.id
             GROUP BY m.id
             ORDER BY article_count DESC, m.id ASC",
        )
        .map_err(|e| from_rusqlite("article_counts_by_magazine", e))?;

    let counts = stmt
        .query_map([], |row| {
            Ok(MagazineArticleCount {
                magazine: Magazine {
                    id: row.get(0)?,
                    name: row.get(1)?,
                    category: row.get(2)?,
                },
                article_count: row.get(3)?,
            })
        })
        .map_err(|e| from_rusqlite("article_counts_by_magazine", e))?
        .collect::<std::result::Result<Vec<_>, _>>()
        .map_err(|e| from_rusqlite("article_counts_by_magazine", e))?;

    Ok(counts)
}

/// Article counts per author, highest first, ties by lowest id
pub fn author_article_counts(conn: &Connection) -> Result<Vec<AuthorArticleCount>> {
    let mut stmt = conn
        .prepare(
            "SELECT au.id, au.name, COUNT(a.id) AS article_count
             FROM authors au
             LEFT JOIN articles a ON a.author_id = au.id
             GROUP BY au.id
             ORDER BY article_count DESC, au.id ASC",
        )
        .map_err(|e| from_rusqlite("author_article_counts", e))?;

    let counts = stmt
        .query_map([], |row| {
            Ok(AuthorArticleCount {
                author: Author {
                    id: row.get(0)?,
                    name: row.get(1)?,
                },
                article_count: row.get(2)?,
            })
        })
        .map_err(|e| from_rusqlite("author_article_counts", e))?
        .collect::<std::result::Result<Vec<_>, _>>()
        .map_err(|e| from_rusqlite("author_article_counts", e))?;

    Ok(counts)
}

/// Magazines with articles from at least 2 distinct authors
pub fn magazines_with_multiple_authors(conn: &Connection) -> Result<Vec<Magazine>> {
    let mut stmt = conn
        .prepare(
            "SELECT m.id, m.name, m.category
             FROM magazines m
             JOIN articles a ON a.magazine_id = m.id
             GROUP BY m.id
             HAVING COUNT(DISTINCT a.author_id) >= 2
             ORDER BY m.id",
        )
        .map_err(|e| from_rusqlite("magazines_with_multiple_authors", e))?;

    let magazines = stmt
        .query_map([], crate::repo::row_to_magazine)
        .map_err(|e| from_rusqlite("magazines_with_multiple_authors", e))?
        .collect::<std::result::Result<Vec<_>, _>>()
        .map_err(|e| from_rusqlite("magazines_with_multiple_authors", e))?;

    Ok(magazines)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db;
    use crate::repo::{AuthorRepo, MagazineRepo};

    #[test]
    fn test_counts_include_zero_rows() {
        let conn = db::open_in_memory().unwrap();
        let busy = MagazineRepo::create(&conn, "Busy", "Misc").unwrap();
        let idle = MagazineRepo::create(&conn, "Idle", "Misc").unwrap();
        let author = AuthorRepo::create(&conn, "Alice").unwrap();
        AuthorRepo::add_article(&conn, author.id, busy.id, "A", "").unwrap();

        let counts = article_counts_by_magazine(&conn).unwrap();
        assert_eq!(counts.len(), 2);
        assert_eq!(counts[0].magazine.id, busy.id);
        assert_eq!(counts[0].article_count, 1);
        assert_eq!(counts[1].magazine.id, idle.id);
        assert_eq!(counts[1].article_count, 0);

        let idle_author = AuthorRepo::create(&conn, "Idle Writer").unwrap();
        let by_author = author_article_counts(&conn).unwrap();
        assert_eq!(by_author.len(), 2);
        assert_eq!(by_author[1].author.id, idle_author.id);
        assert_eq!(by_author[1].article_count, 0);
    }

    #[test]
    fn test_magazines_with_multiple_authors() {
        let conn = db::open_in_memory().unwrap();
        let shared = MagazineRepo::create(&conn, "Shared", "Misc").unwrap();
        let solo = MagazineRepo::create(&conn, "Solo", "Misc").unwrap();
        let a1 = AuthorRepo::create(&conn, "Alice").unwrap();
        let a2 = AuthorRepo::create(&conn, "Bob").unwrap();

        AuthorRepo::add_article(&conn, a1.id, shared.id, "A", "").unwrap();
        AuthorRepo::add_article(&conn, a2.id, shared.id, "B", "").unwrap();
        AuthorRepo::add_article(&conn, a1.id, solo.id, "C", "").unwrap();
        AuthorRepo::add_article(&conn, a1.id, solo.id, "D", "").unwrap();

        let multi = magazines_with_multiple_authors(&conn).unwrap();
        assert_eq!(multi.len(), 1);
        assert_eq!(multi[0].id, shared.id);
    }
}
