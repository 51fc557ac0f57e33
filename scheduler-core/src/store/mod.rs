//! SQLite task storage.
//!
//! All tasks live in a single `scheduler` table. The store only persists and
//! queries rows; date policy and rule validation happen in
//! [`TaskService`](crate::service::TaskService).

mod create;
mod delete;
mod list;
mod open;
mod update;

pub use list::TaskSearch;

use rusqlite::{Connection, Row};

use crate::task::Task;

const TASK_COLUMNS: &str = "id, date, title, comment, repeat";

/// Handle to the task database.
pub struct TaskStore {
    conn: Connection,
}

fn task_from_row(row: &Row<'_>) -> rusqlite::Result<Task> {
    Ok(Task {
        id: row.get(0)?,
        date: row.get(1)?,
        title: row.get(2)?,
        comment: row.get(3)?,
        repeat: row.get(4)?,
    })
}
