// Round-trip tests: what goes in through a repo factory comes back identical

use newsroom_store::db;
use newsroom_store::repo::{ArticleRepo, AuthorRepo, MagazineRepo};
use proptest::prelude::*;

#[test]
fn test_author_round_trip() {
    let conn = db::open_in_memory().unwrap();
    let created = AuthorRepo::create(&conn, "Alice Smith").unwrap();

    let by_id = AuthorRepo::find_by_id(&conn, created.id).unwrap().unwrap();
    assert_eq!(by_id, created);

    let by_name = AuthorRepo::find_by_name(&conn, "Alice Smith")
        .unwrap()
        .unwrap();
    assert_eq!(by_name, created);
}

#[test]
fn test_magazine_round_trip() {
    let conn = db::open_in_memory().unwrap();
    let created = MagazineRepo::create(&conn, "Tech Weekly", "Technology").unwrap();

    let found = MagazineRepo::find_by_id(&conn, created.id).unwrap().unwrap();
    assert_eq!(found, created);
}

#[test]
fn test_article_round_trip_preserves_content() {
    let conn = db::open_in_memory().unwrap();
    let author = AuthorRepo::create(&conn, "Alice").unwrap();
    let mag = MagazineRepo::create(&conn, "Tech Weekly", "Technology").unwrap();

    let created =
        ArticleRepo::create(&conn, "AI in 2025", "long body text", author.id, mag.id).unwrap();
    let found = ArticleRepo::find_by_id(&conn, created.id.unwrap())
        .unwrap()
        .unwrap();
    assert_eq!(found, created);
    assert_eq!(found.content, "long body text");
}

#[test]
fn test_round_trip_survives_reopen() {
    // File-backed DB: rows persist across connections
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("newsroom.db");

    let author_id = {
        let conn = db::open(&path).unwrap();
        AuthorRepo::create(&conn, "Alice Smith").unwrap().id
    };

    let conn = db::open(&path).unwrap();
    let found = AuthorRepo::find_by_id(&conn, author_id).unwrap().unwrap();
    assert_eq!(found.name, "Alice Smith");
}

proptest! {
    // Any valid (non-empty after trimming) name round-trips with the stored
    // value equal to the trimmed input.
    #[test]
    fn prop_author_create_find_round_trip(
        name in "[a-zA-Z][a-zA-Z0-9 .'-]{0,40}[a-zA-Z0-9]",
    ) {
        let conn = db::open_in_memory().unwrap();
        let created = AuthorRepo::create(&conn, &name).unwrap();
        let found = AuthorRepo::find_by_id(&conn, created.id).unwrap().unwrap();
        prop_assert_eq!(found.name, name.trim());
    }
}
