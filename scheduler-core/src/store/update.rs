//! Update task rows.

use rusqlite::params;
use tracing::debug;

use super::TaskStore;
use crate::error::{SchedulerError, SchedulerResult};
use crate::task::{Task, TaskId};

impl TaskStore {
    /// Overwrite every field of an existing task.
    pub fn update(&self, task: &Task) -> SchedulerResult<()> {
        let changed = self.conn.execute(
            "UPDATE scheduler SET date = ?1, title = ?2, comment = ?3, repeat = ?4 WHERE id = ?5",
            params![task.date, task.title, task.comment, task.repeat, task.id],
        )?;

        if changed == 0 {
            return Err(SchedulerError::TaskNotFound(task.id));
        }

        debug!(id = task.id, "updated task");
        Ok(())
    }

    /// Move a task to a new anchor date.
    pub fn set_date(&self, id: TaskId, date: &str) -> SchedulerResult<()> {
        let changed = self.conn.execute(
            "UPDATE scheduler SET date = ?1 WHERE id = ?2",
            params![date, id],
        )?;

        if changed == 0 {
            return Err(SchedulerError::TaskNotFound(id));
        }

        debug!(id, date, "rescheduled task");
        Ok(())
    }
}
