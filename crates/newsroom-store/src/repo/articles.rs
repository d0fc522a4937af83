//! Article repository

use newsroom_core::model::{Article, Author, Magazine};
use rusqlite::{Connection, OptionalExtension};

use super::{row_to_article, row_to_author, row_to_magazine};
use crate::errors::{from_rusqlite, Result};

/// SQLite repository for Articles
pub struct ArticleRepo;

impl ArticleRepo {
    /// Insert a new article and return it with the assigned id
    ///
    /// # Errors
    /// Validation error if the title is empty after trimming or either
    /// foreign key is non-positive; constraint violation if a foreign key
    /// references a missing row.
    pub fn create(
        conn: &Connection,
        title: &str,
        content: &str,
        author_id: i64,
        magazine_id: i64,
    ) -> Result<Article> {
        let mut article = Article::draft(title, content, author_id, magazine_id)?;
        Self::save(conn, &mut article)?;
        Ok(article)
    }

    /// Insert or update depending on id presence
    ///
    /// Absent id: insert and capture the generated rowid. Present id: update
    /// all mutable fields by id. Fields are re-validated either way.
    pub fn save(conn: &Connection, article: &mut Article) -> Result<()> {
        article.validate()?;

        match article.id {
            Some(id) => {
                conn.execute(
                    "UPDATE articles
                     SET title = ?1, content = ?2, author_id = ?3, magazine_id = ?4
                     WHERE id = ?5",
                    rusqlite::params![
                        article.title,
                        article.content,
                        article.author_id,
                        article.magazine_id,
                        id,
                    ],
                )
                .map_err(|e| from_rusqlite("update_article", e))?;
            }
            None => {
                conn.execute(
                    "INSERT INTO articles (title, content, author_id, magazine_id)
                     VALUES (?1, ?2, ?3, ?4)",
                    rusqlite::params![
                        article.title,
                        article.content,
                        article.author_id,
                        article.magazine_id,
                    ],
                )
                .map_err(|e| from_rusqlite("insert_article", e))?;

                article.id = Some(conn.last_insert_rowid());
            }
        }

        Ok(())
    }

    /// List all articles, ordered by id
    pub fn all(conn: &Connection) -> Result<Vec<Article>> {
        let mut stmt = conn
            .prepare(
                "SELECT id, title, content, author_id, magazine_id
                 FROM articles
                 ORDER BY id",
            )
            .map_err(|e| from_rusqlite("list_articles", e))?;

        let articles = stmt
            .query_map([], row_to_article)
            .map_err(|e| from_rusqlite("list_articles", e))?
            .collect::<std::result::Result<Vec<_>, _>>()
            .map_err(|e| from_rusqlite("list_articles", e))?;

        Ok(articles)
    }

    /// Look up an article by id
    pub fn find_by_id(conn: &Connection, id: i64) -> Result<Option<Article>> {
        conn.query_row(
            "SELECT id, title, content, author_id, magazine_id
             FROM articles
             WHERE id = ?1",
            [id],
            row_to_article,
        )
        .optional()
        .map_err(|e| from_rusqlite("find_article_by_id", e))
    }

    /// Substring title search (case follows SQLite LIKE semantics)
    ///
    /// LIKE metacharacters in the needle are escaped so "100%" matches
    /// literally.
    pub fn find_by_title(conn: &Connection, title: &str) -> Result<Vec<Article>> {
        let pattern = format!("%{}%", escape_like(title));

        let mut stmt = conn
            .prepare(
                "SELECT id, title, content, author_id, magazine_id
                 FROM articles
                 WHERE title LIKE ?1 ESCAPE '\\'
                 ORDER BY id",
            )
            .map_err(|e| from_rusqlite("find_articles_by_title", e))?;

        let articles = stmt
            .query_map([pattern], row_to_article)
            .map_err(|e| from_rusqlite("find_articles_by_title", e))?
            .collect::<std::result::Result<Vec<_>, _>>()
            .map_err(|e| from_rusqlite("find_articles_by_title", e))?;

        Ok(articles)
    }

    /// All articles written by the given author
    pub fn find_by_author(conn: &Connection, author_id: i64) -> Result<Vec<Article>> {
        let mut stmt = conn
            .prepare(
                "SELECT id, title, content, author_id, magazine_id
                 FROM articles
                 WHERE author_id = ?1
                 ORDER BY id",
            )
            .map_err(|e| from_rusqlite("find_articles_by_author", e))?;

        let articles = stmt
            .query_map([author_id], row_to_article)
            .map_err(|e| from_rusqlite("find_articles_by_author", e))?
            .collect::<std::result::Result<Vec<_>, _>>()
            .map_err(|e| from_rusqlite("find_articles_by_author", e))?;

        Ok(articles)
    }

    /// All articles published in the given magazine
    pub fn find_by_magazine(conn: &Connection, magazine_id: i64) -> Result<Vec<Article>> {
        let mut stmt = conn
            .prepare(
                "SELECT id, title, content, author_id, magazine_id
                 FROM articles
                 WHERE magazine_id = ?1
                 ORDER BY id",
            )
            .map_err(|e| from_rusqlite("find_articles_by_magazine", e))?;

        let articles = stmt
            .query_map([magazine_id], row_to_article)
            .map_err(|e| from_rusqlite("find_articles_by_magazine", e))?
            .collect::<std::result::Result<Vec<_>, _>>()
            .map_err(|e| from_rusqlite("find_articles_by_magazine", e))?;

        Ok(articles)
    }

    /// The author who wrote this article
    pub fn author(conn: &Connection, article: &Article) -> Result<Option<Author>> {
        conn.query_row(
            "SELECT id, name FROM authors WHERE id = ?1",
            [article.author_id],
            row_to_author,
        )
        .optional()
        .map_err(|e| from_rusqlite("article_author", e))
    }

    /// The magazine that published this article
    pub fn magazine(conn: &Connection, article: &Article) -> Result<Option<Magazine>> {
        conn.query_row(
            "SELECT id, name, category FROM magazines WHERE id = ?1",
            [article.magazine_id],
            row_to_magazine,
        )
        .optional()
        .map_err(|e| from_rusqlite("article_magazine", e))
    }
}

fn escape_like(needle: &str) -> String {
    needle
        .replace('\\', "\\\\")
        .replace('%', "\\%")
        .replace('_', "\\_")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db;
    use crate::repo::{AuthorRepo, MagazineRepo};

    fn setup() -> (Connection, i64, i64) {
        let conn = db::open_in_memory().unwrap();
        let author = AuthorRepo::create(&conn, "Alice").unwrap();
        let mag = MagazineRepo::create(&conn, "Tech Weekly", "Technology").unwrap();
        (conn, author.id, mag.id)
    }

    #[test]
    fn test_save_inserts_then_updates() {
        let (conn, author_id, magazine_id) = setup();

        let mut article = Article::draft("AI in 2025", "body", author_id, magazine_id).unwrap();
        ArticleRepo::save(&conn, &mut article).unwrap();
        let id = article.id.unwrap();

        article.content = "revised body".to_string();
        ArticleRepo::save(&conn, &mut article).unwrap();
        assert_eq!(article.id, Some(id)); // update, not a second insert

        let stored = ArticleRepo::find_by_id(&conn, id).unwrap().unwrap();
        assert_eq!(stored.content, "revised body");
        assert_eq!(ArticleRepo::all(&conn).unwrap().len(), 1);
    }

    #[test]
    fn test_create_rejects_empty_title() {
        let (conn, author_id, magazine_id) = setup();
        let err = ArticleRepo::create(&conn, " ", "", author_id, magazine_id).unwrap_err();
        assert!(err.is_validation());
        assert!(ArticleRepo::all(&conn).unwrap().is_empty());
    }

    #[test]
    fn test_find_by_title_is_substring() {
        let (conn, author_id, magazine_id) = setup();
        ArticleRepo::create(&conn, "AI in Healthcare", "", author_id, magazine_id).unwrap();
        ArticleRepo::create(&conn, "Healthy Eating", "", author_id, magazine_id).unwrap();
        ArticleRepo::create(&conn, "Gallery Reviews", "", author_id, magazine_id).unwrap();

        let hits = ArticleRepo::find_by_title(&conn, "Health").unwrap();
        assert_eq!(hits.len(), 2);

        assert!(ArticleRepo::find_by_title(&conn, "Nothing").unwrap().is_empty());
    }

    #[test]
    fn test_find_by_title_escapes_like_metacharacters() {
        let (conn, author_id, magazine_id) = setup();
        ArticleRepo::create(&conn, "100% Organic", "", author_id, magazine_id).unwrap();
        ArticleRepo::create(&conn, "1000 Organic Farms", "", author_id, magazine_id).unwrap();

        let hits = ArticleRepo::find_by_title(&conn, "100%").unwrap();
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].title, "100% Organic");
    }

    #[test]
    fn test_author_and_magazine_lookups() {
        let (conn, author_id, magazine_id) = setup();
        let article =
            ArticleRepo::create(&conn, "AI in 2025", "", author_id, magazine_id).unwrap();

        assert_eq!(
            ArticleRepo::author(&conn, &article).unwrap().unwrap().name,
            "Alice"
        );
        assert_eq!(
            ArticleRepo::magazine(&conn, &article).unwrap().unwrap().name,
            "Tech Weekly"
        );
    }
}
