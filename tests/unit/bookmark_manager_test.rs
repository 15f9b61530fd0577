//! Unit tests for the BookmarkManager public API.
//!
//! These tests exercise the bookmark store through the `BookmarkManagerTrait`
//! interface, using an in-memory SQLite database.

use linkstash::database::Database;
use linkstash::managers::bookmark_manager::{BookmarkManager, BookmarkManagerTrait};
use linkstash::types::errors::StoreError;

/// Helper: a fresh in-memory database.
fn setup() -> Database {
    Database::open_in_memory().expect("Failed to open in-memory database")
}

/// Inserts a row with an explicit creation time so ordering is deterministic.
fn insert_at(db: &Database, created_at: &str, title: &str, link: &str) -> i64 {
    db.connection()
        .execute(
            "INSERT INTO bookmarks (created_at, title, link) VALUES (?1, ?2, ?3)",
            rusqlite::params![created_at, title, link],
        )
        .unwrap();
    db.connection().last_insert_rowid()
}

#[test]
fn test_insert_then_get() {
    let db = setup();
    let mut mgr = BookmarkManager::new(db.connection());

    let id = mgr.insert("Rust Blog", "https://blog.rust-lang.org").unwrap();
    let bm = mgr.get(id).unwrap().expect("bookmark should exist");

    assert_eq!(bm.id, id);
    assert_eq!(bm.title, "Rust Blog");
    assert_eq!(bm.link, "https://blog.rust-lang.org");
    assert!(!bm.created_at.is_empty(), "created_at should default to now");
}

#[test]
fn test_ids_are_distinct() {
    let db = setup();
    let mut mgr = BookmarkManager::new(db.connection());

    let a = mgr.insert("A", "https://a.example").unwrap();
    let b = mgr.insert("B", "https://b.example").unwrap();
    assert_ne!(a, b);
}

#[test]
fn test_get_missing_returns_none() {
    let db = setup();
    let mgr = BookmarkManager::new(db.connection());
    assert!(mgr.get(12345).unwrap().is_none());
}

#[test]
fn test_empty_title_is_allowed() {
    let db = setup();
    let mut mgr = BookmarkManager::new(db.connection());
    let id = mgr.insert("", "https://untitled.example").unwrap();
    assert_eq!(mgr.get(id).unwrap().unwrap().title, "");
}

#[test]
fn test_empty_link_is_rejected() {
    let db = setup();
    let mut mgr = BookmarkManager::new(db.connection());
    assert!(matches!(mgr.insert("No link", ""), Err(StoreError::EmptyLink)));
    assert!(mgr.list("").unwrap().is_empty());
}

#[test]
fn test_duplicate_link_on_insert() {
    let db = setup();
    let mut mgr = BookmarkManager::new(db.connection());

    mgr.insert("First", "https://dup.example").unwrap();
    let err = mgr.insert("Second", "https://dup.example").unwrap_err();
    assert!(matches!(err, StoreError::DuplicateLink(ref l) if l == "https://dup.example"));

    let all = mgr.list("").unwrap();
    assert_eq!(all.len(), 1);
    assert_eq!(all[0].title, "First");
}

#[test]
fn test_update_title() {
    let db = setup();
    let mut mgr = BookmarkManager::new(db.connection());
    let id = mgr.insert("Old", "https://a.example").unwrap();

    assert_eq!(mgr.update_title(id, "New #tag").unwrap(), 1);
    assert_eq!(mgr.get(id).unwrap().unwrap().title, "New #tag");
}

#[test]
fn test_update_missing_rows_affects_nothing() {
    let db = setup();
    let mut mgr = BookmarkManager::new(db.connection());

    assert_eq!(mgr.update_title(99, "x").unwrap(), 0);
    assert_eq!(mgr.update_link(99, "https://x.example").unwrap(), 0);
    assert_eq!(mgr.delete(99).unwrap(), 0);
}

#[test]
fn test_update_link() {
    let db = setup();
    let mut mgr = BookmarkManager::new(db.connection());
    let id = mgr.insert("Site", "http://old.example").unwrap();

    assert_eq!(mgr.update_link(id, "https://new.example").unwrap(), 1);
    let bm = mgr.get(id).unwrap().unwrap();
    assert_eq!(bm.link, "https://new.example");
    assert_eq!(bm.title, "Site");
}

#[test]
fn test_update_link_to_own_value_is_not_a_conflict() {
    let db = setup();
    let mut mgr = BookmarkManager::new(db.connection());
    let id = mgr.insert("Site", "https://same.example").unwrap();
    assert_eq!(mgr.update_link(id, "https://same.example").unwrap(), 1);
}

#[test]
fn test_duplicate_link_on_update() {
    let db = setup();
    let mut mgr = BookmarkManager::new(db.connection());
    mgr.insert("A", "https://a.example").unwrap();
    let b = mgr.insert("B", "https://b.example").unwrap();

    let err = mgr.update_link(b, "https://a.example").unwrap_err();
    assert!(matches!(err, StoreError::DuplicateLink(_)));
    assert_eq!(mgr.get(b).unwrap().unwrap().link, "https://b.example");
}

#[test]
fn test_delete_removes_row() {
    let db = setup();
    let mut mgr = BookmarkManager::new(db.connection());
    let id = mgr.insert("Gone soon", "https://gone.example").unwrap();

    assert_eq!(mgr.delete(id).unwrap(), 1);
    assert!(mgr.get(id).unwrap().is_none());
    // a second delete is a no-op
    assert_eq!(mgr.delete(id).unwrap(), 0);
}

#[test]
fn test_deleted_link_can_be_stored_again() {
    let db = setup();
    let mut mgr = BookmarkManager::new(db.connection());
    let id = mgr.insert("Once", "https://again.example").unwrap();
    mgr.delete(id).unwrap();
    assert!(mgr.insert("Twice", "https://again.example").is_ok());
}

#[test]
fn test_list_is_newest_first() {
    let db = setup();
    insert_at(&db, "2021-03-01 10:00:00", "middle", "https://m.example");
    insert_at(&db, "2023-07-15 08:30:00", "newest", "https://n.example");
    insert_at(&db, "2019-01-01 00:00:00", "oldest", "https://o.example");

    let mgr = BookmarkManager::new(db.connection());
    let titles: Vec<_> = mgr.list("").unwrap().into_iter().map(|b| b.title).collect();
    assert_eq!(titles, vec!["newest", "middle", "oldest"]);
}

#[test]
fn test_list_ties_break_on_id() {
    let db = setup();
    let first = insert_at(&db, "2022-02-02 02:02:02", "first", "https://1.example");
    let second = insert_at(&db, "2022-02-02 02:02:02", "second", "https://2.example");

    let mgr = BookmarkManager::new(db.connection());
    let ids: Vec<_> = mgr.list("").unwrap().into_iter().map(|b| b.id).collect();
    assert_eq!(ids, vec![second, first]);
}

#[test]
fn test_filter_is_case_insensitive_substring() {
    let db = setup();
    let mut mgr = BookmarkManager::new(db.connection());
    mgr.insert("Learning RUST the hard way", "https://a.example").unwrap();
    mgr.insert("Gardening #rust", "https://b.example").unwrap();
    mgr.insert("Python notes", "https://c.example").unwrap();

    let hits = mgr.list("rust").unwrap();
    assert_eq!(hits.len(), 2);
    assert!(hits.iter().all(|b| b.title.to_lowercase().contains("rust")));
}

#[test]
fn test_filter_matches_title_not_link() {
    let db = setup();
    let mut mgr = BookmarkManager::new(db.connection());
    mgr.insert("Unrelated", "https://rust.example").unwrap();
    assert!(mgr.list("rust").unwrap().is_empty());
}

#[test]
fn test_filter_with_underscore_is_literal() {
    let db = setup();
    let mut mgr = BookmarkManager::new(db.connection());
    mgr.insert("snake_case guide", "https://a.example").unwrap();
    mgr.insert("snakeXcase guide", "https://b.example").unwrap();

    let hits = mgr.list("snake_case").unwrap();
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].link, "https://a.example");
}

#[test]
fn test_filter_by_tag() {
    let db = setup();
    let mut mgr = BookmarkManager::new(db.connection());
    mgr.insert("Async book #rust", "https://a.example").unwrap();
    mgr.insert("Tokio docs #rust #async", "https://b.example").unwrap();
    mgr.insert("Dinner recipes", "https://c.example").unwrap();

    assert_eq!(mgr.list("#rust").unwrap().len(), 2);
    assert_eq!(mgr.list("#async").unwrap().len(), 1);
}

#[test]
fn test_tagged_titles_only_returns_titles_with_hash() {
    let db = setup();
    let mut mgr = BookmarkManager::new(db.connection());
    mgr.insert("plain", "https://a.example").unwrap();
    mgr.insert("tagged #one", "https://b.example").unwrap();
    mgr.insert("C# in depth", "https://c.example").unwrap();

    let mut titles = mgr.tagged_titles().unwrap();
    titles.sort();
    assert_eq!(titles, vec!["C# in depth".to_string(), "tagged #one".to_string()]);
}
