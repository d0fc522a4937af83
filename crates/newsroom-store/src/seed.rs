//! Sample-data seeding
//!
//! Clears the three tables and inserts a fixed sample set in one
//! transaction, so re-running yields the same rows instead of duplicates.

use rusqlite::Connection;
use serde::Serialize;

use crate::errors::{from_rusqlite, Result};

/// What the seed inserted
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SeedReport {
    pub authors: usize,
    pub magazines: usize,
    pub articles: usize,
}

const SAMPLE_AUTHORS: [&str; 3] = ["Alice Smith", "Bob Johnson", "Charlie Rose"];

const SAMPLE_MAGAZINES: [(&str, &str); 3] = [
    ("Tech Weekly", "Technology"),
    ("Health Monthly", "Health"),
    ("Art & Culture", "Art"),
];

// (title, author index, magazine index) into the arrays above
const SAMPLE_ARTICLES: [(&str, usize, usize); 7] = [
    ("AI in 2025", 0, 0),
    ("Meditation Benefits", 1, 1),
    ("Modern Art Trends", 2, 2),
    ("Tech for Good", 0, 0),
    ("Healthy Eating", 1, 1),
    ("Gallery Reviews", 2, 2),
    ("Cultural Commentary", 0, 2),
];

/// Reset the database to the fixed sample set
pub fn seed_sample_data(conn: &mut Connection) -> Result<SeedReport> {
    let tx = conn.transaction().map_err(|e| from_rusqlite("seed", e))?;

    // Children first so the foreign keys never complain
    tx.execute("DELETE FROM articles", [])
        .map_err(|e| from_rusqlite("seed", e))?;
    tx.execute("DELETE FROM authors", [])
        .map_err(|e| from_rusqlite("seed", e))?;
    tx.execute("DELETE FROM magazines", [])
        .map_err(|e| from_rusqlite("seed", e))?;

    let mut author_ids = Vec::with_capacity(SAMPLE_AUTHORS.len());
    for name in SAMPLE_AUTHORS {
        tx.execute(
            "INSERT INTO authors (name) VALUES (?1)",
            rusqlite::params![name],
        )
        .map_err(|e| from_rusqlite("seed", e))?;
        author_ids.push(tx.last_insert_rowid());
    }

    let mut magazine_ids = Vec::with_capacity(SAMPLE_MAGAZINES.len());
    for (name, category) in SAMPLE_MAGAZINES {
        tx.execute(
            "INSERT INTO magazines (name, category) VALUES (?1, ?2)",
            rusqlite::params![name, category],
        )
        .map_err(|e| from_rusqlite("seed", e))?;
        magazine_ids.push(tx.last_insert_rowid());
    }

    for (title, author_idx, magazine_idx) in SAMPLE_ARTICLES {
        tx.execute(
            "INSERT INTO articles (title, author_id, magazine_id) VALUES (?1, ?2, ?3)",
            rusqlite::params![title, author_ids[author_idx], magazine_ids[magazine_idx]],
        )
        .map_err(|e| from_rusqlite("seed", e))?;
    }

    tx.commit().map_err(|e| from_rusqlite("seed", e))?;

    tracing::info!(
        authors = SAMPLE_AUTHORS.len(),
        magazines = SAMPLE_MAGAZINES.len(),
        articles = SAMPLE_ARTICLES.len(),
        "seeded sample data"
    );

    Ok(SeedReport {
        authors: SAMPLE_AUTHORS.len(),
        magazines: SAMPLE_MAGAZINES.len(),
        articles: SAMPLE_ARTICLES.len(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db;
    use crate::repo::{ArticleRepo, AuthorRepo, MagazineRepo};

    #[test]
    fn test_seed_inserts_sample_rows() {
        let mut conn = db::open_in_memory().unwrap();
        let report = seed_sample_data(&mut conn).unwrap();

        assert_eq!(report.authors, 3);
        assert_eq!(report.magazines, 3);
        assert_eq!(report.articles, 7);
        assert_eq!(AuthorRepo::all(&conn).unwrap().len(), 3);
        assert_eq!(MagazineRepo::all(&conn).unwrap().len(), 3);
        assert_eq!(ArticleRepo::all(&conn).unwrap().len(), 7);
    }

    #[test]
    fn test_seed_is_rerunnable_without_duplicates() {
        let mut conn = db::open_in_memory().unwrap();
        seed_sample_data(&mut conn).unwrap();
        seed_sample_data(&mut conn).unwrap();

        assert_eq!(AuthorRepo::all(&conn).unwrap().len(), 3);
        assert_eq!(ArticleRepo::all(&conn).unwrap().len(), 7);
    }
}
