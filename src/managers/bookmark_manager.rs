//! Bookmark Manager for linkstash.
//!
//! Implements `BookmarkManagerTrait`: single-statement CRUD over the
//! `bookmarks` table, backed by SQLite via `rusqlite`. Every value reaches
//! SQLite as a bound parameter.

use rusqlite::{params, Connection};
use tracing::debug;

use crate::types::bookmark::Bookmark;
use crate::types::errors::StoreError;

/// Trait defining bookmark store operations.
///
/// Mutations return the number of affected rows; callers decide whether zero
/// is an error.
pub trait BookmarkManagerTrait {
    fn insert(&mut self, title: &str, link: &str) -> Result<i64, StoreError>;
    fn update_title(&mut self, id: i64, title: &str) -> Result<usize, StoreError>;
    fn update_link(&mut self, id: i64, link: &str) -> Result<usize, StoreError>;
    fn delete(&mut self, id: i64) -> Result<usize, StoreError>;
    fn get(&self, id: i64) -> Result<Option<Bookmark>, StoreError>;
    /// Newest first; `filter` is a literal, ASCII case-insensitive substring of the title.
    fn list(&self, filter: &str) -> Result<Vec<Bookmark>, StoreError>;
    /// Titles that contain at least one `#`, in listing order.
    fn tagged_titles(&self) -> Result<Vec<String>, StoreError>;
}

/// Bookmark manager backed by a SQLite connection.
pub struct BookmarkManager<'a> {
    conn: &'a Connection,
}

const SELECT_COLUMNS: &str = "SELECT id, created_at, title, link FROM bookmarks";

impl<'a> BookmarkManager<'a> {
    /// Creates a new `BookmarkManager` using the provided database connection.
    pub fn new(conn: &'a Connection) -> Self {
        Self { conn }
    }

    /// Reads a single `Bookmark` row into a struct.
    fn row_to_bookmark(row: &rusqlite::Row) -> rusqlite::Result<Bookmark> {
        Ok(Bookmark {
            id: row.get(0)?,
            created_at: row.get(1)?,
            title: row.get(2)?,
            link: row.get(3)?,
        })
    }

    /// Maps a failed write, turning a `link` uniqueness violation into `DuplicateLink`.
    fn write_error(e: rusqlite::Error, link: &str) -> StoreError {
        match &e {
            rusqlite::Error::SqliteFailure(err, _)
                if err.extended_code == rusqlite::ffi::SQLITE_CONSTRAINT_UNIQUE =>
            {
                StoreError::DuplicateLink(link.to_string())
            }
            _ => StoreError::from(e),
        }
    }
}

/// Escapes `LIKE` wildcards so the filter matches literally.
pub fn escape_like(filter: &str) -> String {
    let mut out = String::with_capacity(filter.len());
    for ch in filter.chars() {
        if matches!(ch, '\\' | '%' | '_') {
            out.push('\\');
        }
        out.push(ch);
    }
    out
}

impl<'a> BookmarkManagerTrait for BookmarkManager<'a> {
    /// Inserts a bookmark and returns the id SQLite assigned to it.
    fn insert(&mut self, title: &str, link: &str) -> Result<i64, StoreError> {
        if link.is_empty() {
            return Err(StoreError::EmptyLink);
        }
        self.conn
            .execute(
                "INSERT INTO bookmarks (title, link) VALUES (?1, ?2)",
                params![title, link],
            )
            .map_err(|e| Self::write_error(e, link))?;
        let id = self.conn.last_insert_rowid();
        debug!(id, link, "inserted bookmark");
        Ok(id)
    }

    fn update_title(&mut self, id: i64, title: &str) -> Result<usize, StoreError> {
        let affected = self
            .conn
            .execute(
                "UPDATE bookmarks SET title = ?1 WHERE id = ?2",
                params![title, id],
            )?;
        debug!(id, affected, "updated bookmark title");
        Ok(affected)
    }

    fn update_link(&mut self, id: i64, link: &str) -> Result<usize, StoreError> {
        if link.is_empty() {
            return Err(StoreError::EmptyLink);
        }
        let affected = self
            .conn
            .execute(
                "UPDATE bookmarks SET link = ?1 WHERE id = ?2",
                params![link, id],
            )
            .map_err(|e| Self::write_error(e, link))?;
        debug!(id, affected, "updated bookmark link");
        Ok(affected)
    }

    fn delete(&mut self, id: i64) -> Result<usize, StoreError> {
        let affected = self
            .conn
            .execute("DELETE FROM bookmarks WHERE id = ?1", params![id])?;
        debug!(id, affected, "deleted bookmark");
        Ok(affected)
    }

    fn get(&self, id: i64) -> Result<Option<Bookmark>, StoreError> {
        let result = self.conn.query_row(
            &format!("{} WHERE id = ?1", SELECT_COLUMNS),
            params![id],
            Self::row_to_bookmark,
        );
        match result {
            Ok(bookmark) => Ok(Some(bookmark)),
            Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn list(&self, filter: &str) -> Result<Vec<Bookmark>, StoreError> {
        let pattern = format!("%{}%", escape_like(filter));
        let mut stmt = self.conn.prepare(&format!(
            "{} WHERE title LIKE ?1 ESCAPE '\\' ORDER BY created_at DESC, id DESC",
            SELECT_COLUMNS
        ))?;

        let rows = stmt.query_map(params![pattern], Self::row_to_bookmark)?;

        let mut results = Vec::new();
        for row in rows {
            results.push(row?);
        }
        Ok(results)
    }

    fn tagged_titles(&self) -> Result<Vec<String>, StoreError> {
        let mut stmt = self.conn.prepare(
            "SELECT title FROM bookmarks WHERE instr(title, '#') > 0 \
             ORDER BY created_at DESC, id DESC",
        )?;
        let rows = stmt.query_map([], |row| row.get::<_, String>(0))?;

        let mut results = Vec::new();
        for row in rows {
            results.push(row?);
        }
        Ok(results)
    }
}
