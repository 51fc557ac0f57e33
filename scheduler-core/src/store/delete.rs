//! Delete task rows.

use rusqlite::params;
use tracing::debug;

use super::TaskStore;
use crate::error::{SchedulerError, SchedulerResult};
use crate::task::TaskId;

impl TaskStore {
    pub fn delete(&self, id: TaskId) -> SchedulerResult<()> {
        let changed = self
            .conn
            .execute("DELETE FROM scheduler WHERE id = ?1", params![id])?;

        if changed == 0 {
            return Err(SchedulerError::TaskNotFound(id));
        }

        debug!(id, "deleted task");
        Ok(())
    }
}
