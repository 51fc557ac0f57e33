//! List and search tasks.

use chrono::NaiveDate;
use rusqlite::params;

use super::{TASK_COLUMNS, TaskStore, task_from_row};
use crate::constants::SEARCH_DATE_FORMAT;
use crate::date::format_compact;
use crate::error::SchedulerResult;
use crate::task::Task;

/// Filter applied when listing tasks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TaskSearch {
    All,
    /// Tasks anchored on this compact date.
    OnDate(String),
    /// Tasks whose title or comment contains this text.
    Text(String),
}

impl TaskSearch {
    /// Interpret a free-form search string.
    ///
    /// `DD.MM.YYYY` searches by date, anything else by text. Blank means all.
    pub fn from_query(query: &str) -> Self {
        let query = query.trim();

        if query.is_empty() {
            return TaskSearch::All;
        }

        match NaiveDate::parse_from_str(query, SEARCH_DATE_FORMAT) {
            Ok(date) => TaskSearch::OnDate(format_compact(date)),
            Err(_) => TaskSearch::Text(query.to_string()),
        }
    }
}

impl TaskStore {
    /// List tasks matching `search`, ordered by date, at most `limit` rows.
    pub fn list(&self, search: &TaskSearch, limit: u32) -> SchedulerResult<Vec<Task>> {
        let tasks = match search {
            TaskSearch::All => {
                let mut stmt = self.conn.prepare(&format!(
                    "SELECT {TASK_COLUMNS} FROM scheduler ORDER BY date LIMIT ?1"
                ))?;
                let rows = stmt
                    .query_map(params![limit], task_from_row)?
                    .collect::<rusqlite::Result<Vec<_>>>()?;
                rows
            }
            TaskSearch::OnDate(date) => {
                let mut stmt = self.conn.prepare(&format!(
                    "SELECT {TASK_COLUMNS} FROM scheduler WHERE date = ?1 ORDER BY date LIMIT ?2"
                ))?;
                let rows = stmt
                    .query_map(params![date, limit], task_from_row)?
                    .collect::<rusqlite::Result<Vec<_>>>()?;
                rows
            }
            TaskSearch::Text(text) => {
                let pattern = format!("%{text}%");
                let mut stmt = self.conn.prepare(&format!(
                    "SELECT {TASK_COLUMNS} FROM scheduler \
                     WHERE title LIKE ?1 OR comment LIKE ?1 ORDER BY date LIMIT ?2"
                ))?;
                let rows = stmt
                    .query_map(params![pattern, limit], task_from_row)?
                    .collect::<rusqlite::Result<Vec<_>>>()?;
                rows
            }
        };

        Ok(tasks)
    }
}
