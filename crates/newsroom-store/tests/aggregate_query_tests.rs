// Integration tests for the aggregation queries against the sample data set

use newsroom_store::repo::{AuthorRepo, MagazineRepo};
use newsroom_store::{db, seed, stats};
use rusqlite::Connection;

fn seeded_db() -> Connection {
    let mut conn = db::open_in_memory().unwrap();
    seed::seed_sample_data(&mut conn).unwrap();
    conn
}

#[test]
fn test_top_publisher_on_sample_data() {
    let conn = seeded_db();
    // Art & Culture carries 3 of the 7 sample articles
    let top = MagazineRepo::top_publisher(&conn).unwrap().unwrap();
    assert_eq!(top.name, "Art & Culture");
}

#[test]
fn test_most_prolific_on_sample_data() {
    let conn = seeded_db();
    // Alice Smith owns 3 of the 7 sample articles
    let top = AuthorRepo::most_prolific(&conn).unwrap().unwrap();
    assert_eq!(top.name, "Alice Smith");
}

#[test]
fn test_article_counts_by_magazine() {
    let conn = seeded_db();
    let counts = stats::article_counts_by_magazine(&conn).unwrap();

    assert_eq!(counts.len(), 3);
    assert_eq!(counts[0].magazine.name, "Art & Culture");
    assert_eq!(counts[0].article_count, 3);

    let total: i64 = counts.iter().map(|c| c.article_count).sum();
    assert_eq!(total, 7);
}

#[test]
fn test_author_article_counts() {
    let conn = seeded_db();
    let counts = stats::author_article_counts(&conn).unwrap();

    assert_eq!(counts.len(), 3);
    assert_eq!(counts[0].author.name, "Alice Smith");
    assert_eq!(counts[0].article_count, 3);
}

#[test]
fn test_magazines_with_multiple_authors_on_sample_data() {
    let conn = seeded_db();
    // Only Art & Culture has articles from two distinct authors
    let multi = stats::magazines_with_multiple_authors(&conn).unwrap();
    assert_eq!(multi.len(), 1);
    assert_eq!(multi[0].name, "Art & Culture");
}

#[test]
fn test_contributors_and_contributing_authors_on_sample_data() {
    let conn = seeded_db();
    let art = MagazineRepo::find_by_name(&conn, "Art & Culture")
        .unwrap()
        .unwrap();

    let contributors = MagazineRepo::contributors(&conn, art.id).unwrap();
    assert_eq!(contributors.len(), 2);

    // Charlie has exactly 2 articles there, Alice 1: neither clears the
    // strictly-more-than-2 threshold
    assert!(MagazineRepo::contributing_authors(&conn, art.id)
        .unwrap()
        .is_empty());

    // One more Charlie article tips him over
    let charlie = AuthorRepo::find_by_name(&conn, "Charlie Rose")
        .unwrap()
        .unwrap();
    AuthorRepo::add_article(&conn, charlie.id, art.id, "Sculpture Notes", "").unwrap();

    let contributing = MagazineRepo::contributing_authors(&conn, art.id).unwrap();
    assert_eq!(contributing.len(), 1);
    assert_eq!(contributing[0].id, charlie.id);
}
