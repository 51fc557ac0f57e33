//! Insert and fetch single tasks.

use rusqlite::{OptionalExtension, params};
use tracing::debug;

use super::{TASK_COLUMNS, TaskStore, task_from_row};
use crate::error::SchedulerResult;
use crate::task::{Task, TaskId};

impl TaskStore {
    /// Insert a task row and return its new identifier.
    ///
    /// Values are stored as given; callers are expected to have validated them.
    pub fn insert(
        &self,
        date: &str,
        title: &str,
        comment: &str,
        repeat: &str,
    ) -> SchedulerResult<TaskId> {
        self.conn.execute(
            "INSERT INTO scheduler (date, title, comment, repeat) VALUES (?1, ?2, ?3, ?4)",
            params![date, title, comment, repeat],
        )?;

        let id = self.conn.last_insert_rowid();
        debug!(id, date, repeat, "inserted task");
        Ok(id)
    }

    pub fn get(&self, id: TaskId) -> SchedulerResult<Option<Task>> {
        let task = self
            .conn
            .query_row(
                &format!("SELECT {TASK_COLUMNS} FROM scheduler WHERE id = ?1"),
                params![id],
                task_from_row,
            )
            .optional()?;

        Ok(task)
    }
}
