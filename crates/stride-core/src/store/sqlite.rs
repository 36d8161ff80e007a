//! SQLite-backed key-value storage.

use std::path::Path;

use jiff::Timestamp;
use rusqlite::{params, Connection, OptionalExtension};
use serde_json::Value;

use super::KvBackend;
use crate::error::{DatabaseResultExt, Result};

const SELECT_VALUE_SQL: &str = "SELECT value FROM kv_entries WHERE key = ?1";
const UPSERT_VALUE_SQL: &str = "INSERT INTO kv_entries (key, value, updated_at) VALUES (?1, ?2, ?3) \
     ON CONFLICT(key) DO UPDATE SET value = excluded.value, updated_at = excluded.updated_at";

/// Key-value backend over a single SQLite table.
///
/// `get` and `set` are separate statements; no transaction spans a
/// read-modify-write done by a store on top of this backend.
pub struct SqliteBackend {
    connection: Connection,
}

impl SqliteBackend {
    /// Opens (or creates) the database file and initializes the schema.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let connection = Connection::open(path).db_context("Failed to open database connection")?;
        Self::with_connection(connection)
    }

    /// Opens a private in-memory database.
    pub fn in_memory() -> Result<Self> {
        let connection =
            Connection::open_in_memory().db_context("Failed to open in-memory database")?;
        Self::with_connection(connection)
    }

    fn with_connection(connection: Connection) -> Result<Self> {
        let backend = Self { connection };
        backend.initialize_schema()?;
        Ok(backend)
    }

    /// Initializes the database schema using the embedded SQL file.
    fn initialize_schema(&self) -> Result<()> {
        let schema_sql = include_str!("../../assets/schema.sql");
        self.connection
            .execute_batch(schema_sql)
            .db_context("Failed to initialize database schema")
    }
}

impl KvBackend for SqliteBackend {
    fn get(&self, key: &str) -> Result<Option<Value>> {
        let raw: Option<String> = self
            .connection
            .query_row(SELECT_VALUE_SQL, params![key], |row| row.get(0))
            .optional()
            .db_context("Failed to read stored value")?;

        match raw {
            Some(raw) => Ok(Some(serde_json::from_str(&raw)?)),
            None => Ok(None),
        }
    }

    fn set(&mut self, key: &str, value: Value) -> Result<()> {
        let raw = serde_json::to_string(&value)?;
        let now = Timestamp::now().to_string();

        self.connection
            .execute(UPSERT_VALUE_SQL, params![key, raw, now])
            .db_context("Failed to write stored value")?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;
    use tempfile::TempDir;

    use super::*;

    #[test]
    fn test_sqlite_backend_missing_key() {
        let backend = SqliteBackend::in_memory().unwrap();
        assert_eq!(backend.get("actionPlans:nobody").unwrap(), None);
    }

    #[test]
    fn test_sqlite_backend_overwrites_whole_value() {
        let mut backend = SqliteBackend::in_memory().unwrap();

        backend.set("k", json!([{"id": "a"}, {"id": "b"}])).unwrap();
        backend.set("k", json!([{"id": "c"}])).unwrap();

        assert_eq!(backend.get("k").unwrap(), Some(json!([{"id": "c"}])));
    }

    #[test]
    fn test_sqlite_backend_survives_reopen() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let path = temp_dir.path().join("stride.db");

        {
            let mut backend = SqliteBackend::open(&path).unwrap();
            backend.set("k", json!({"title": "Kept"})).unwrap();
        }

        let backend = SqliteBackend::open(&path).unwrap();
        assert_eq!(backend.get("k").unwrap(), Some(json!({"title": "Kept"})));
    }
}
