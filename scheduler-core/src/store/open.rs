//! Open task databases and make sure the schema exists.

use std::path::Path;
use std::time::Duration;

use rusqlite::Connection;
use tracing::{debug, info};

use super::TaskStore;
use crate::error::SchedulerResult;

const SCHEMA_SQL: &str = "
CREATE TABLE IF NOT EXISTS scheduler (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    date CHAR(8) NOT NULL DEFAULT '',
    title TEXT NOT NULL DEFAULT '',
    comment TEXT NOT NULL DEFAULT '',
    repeat VARCHAR(128) NOT NULL DEFAULT ''
);
CREATE INDEX IF NOT EXISTS idx_date ON scheduler (date);
";

impl TaskStore {
    /// Open (or create) the database file at `path`.
    pub fn open(path: impl AsRef<Path>) -> SchedulerResult<Self> {
        let path = path.as_ref();
        let created = !path.exists();

        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)?;
        }

        let store = Self::bootstrap(Connection::open(path)?)?;
        info!(path = %path.display(), created, "opened task database");

        Ok(store)
    }

    /// Open a private in-memory database. Used by tests and dry runs.
    pub fn open_in_memory() -> SchedulerResult<Self> {
        let store = Self::bootstrap(Connection::open_in_memory()?)?;
        debug!("opened in-memory task database");
        Ok(store)
    }

    fn bootstrap(conn: Connection) -> SchedulerResult<Self> {
        conn.busy_timeout(Duration::from_secs(5))?;
        conn.execute_batch(SCHEMA_SQL)?;
        Ok(TaskStore { conn })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn open_creates_file_and_schema() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("scheduler.db");

        let store = TaskStore::open(&path).unwrap();
        let id = store.insert("20240126", "Write report", "", "").unwrap();
        drop(store);

        assert!(path.exists());
        let reopened = TaskStore::open(&path).unwrap();
        assert_eq!(reopened.get(id).unwrap().unwrap().title, "Write report");
    }

    #[test]
    fn schema_has_date_index() {
        let store = TaskStore::open_in_memory().unwrap();
        let count: i64 = store
            .conn
            .query_row(
                "SELECT COUNT(*) FROM sqlite_master WHERE type = 'index' AND name = 'idx_date'",
                [],
                |row| row.get(0),
            )
            .unwrap();
        assert_eq!(count, 1);
    }
}
