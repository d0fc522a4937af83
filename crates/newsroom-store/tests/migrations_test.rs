// Integration tests for the migration framework

use rusqlite::Connection;

fn setup_test_db() -> Connection {
    Connection::open_in_memory().expect("Failed to create in-memory database")
}

fn get_table_names(conn: &Connection) -> Vec<String> {
    let mut stmt = conn
        .prepare("SELECT name FROM sqlite_master WHERE type = 'table' ORDER BY name")
        .unwrap();
    stmt.query_map([], |row| row.get(0))
        .unwrap()
        .collect::<Result<Vec<String>, _>>()
        .unwrap()
}

#[test]
fn test_apply_migrations_on_empty_db() {
    // Given: An empty SQLite database
    let mut conn = setup_test_db();

    // When: Migrations are applied
    let result = newsroom_store::migrations::apply_migrations(&mut conn);

    // Then: All migrations succeed
    assert!(
        result.is_ok(),
        "Migrations should succeed: {:?}",
        result.err()
    );

    // And: The expected tables exist (sqlite_sequence comes from AUTOINCREMENT)
    let tables = get_table_names(&conn);
    for expected in [
        "schema_version",
        "authors",
        "magazines",
        "articles",
        "sqlite_sequence",
    ] {
        assert!(
            tables.contains(&expected.to_string()),
            "Missing table: {}",
            expected
        );
    }
}

#[test]
fn test_migration_idempotency() {
    let mut conn = setup_test_db();
    newsroom_store::migrations::apply_migrations(&mut conn).unwrap();
    newsroom_store::migrations::apply_migrations(&mut conn).unwrap();

    let version_count: i64 = conn
        .query_row("SELECT COUNT(*) FROM schema_version", [], |row| row.get(0))
        .unwrap();
    assert_eq!(version_count, 1, "Re-running must not re-record migrations");
}

#[test]
fn test_migration_records_checksum() {
    let mut conn = setup_test_db();
    newsroom_store::migrations::apply_migrations(&mut conn).unwrap();

    let checksum: String = conn
        .query_row(
            "SELECT checksum FROM schema_version WHERE migration_id = '001_initial_schema'",
            [],
            |row| row.get(0),
        )
        .unwrap();
    assert_eq!(checksum.len(), 64, "SHA256 checksum is 64 hex chars");
}

#[test]
fn test_foreign_keys_are_declared() {
    let mut conn = setup_test_db();
    newsroom_store::migrations::apply_migrations(&mut conn).unwrap();

    let fk_count: i64 = conn
        .query_row(
            "SELECT COUNT(*) FROM pragma_foreign_key_list('articles')",
            [],
            |row| row.get(0),
        )
        .unwrap();
    assert_eq!(fk_count, 2, "articles carries both foreign keys");
}
