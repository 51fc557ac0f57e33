//! Task use-cases on top of the store.
//!
//! This is where dates submitted by clients are normalized: stale anchors
//! are rolled forward on creation, and completing a recurring task moves it
//! to its next occurrence instead of deleting it. "Today" is always passed
//! in by the caller.

use chrono::NaiveDate;
use tracing::info;

use crate::constants::{DAILY_RULE, TASK_LIMIT};
use crate::date::{format_compact, parse_compact};
use crate::error::{SchedulerError, SchedulerResult};
use crate::next_date::next_date;
use crate::rule::validate_rule;
use crate::store::{TaskSearch, TaskStore};
use crate::task::{Task, TaskId, TaskInput};

/// Token accepted in place of a date on creation.
const TODAY_TOKEN: &str = "today";

/// Outcome of marking a task done.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Completion {
    /// One-off task; it was removed.
    Deleted,
    /// Recurring task; it now sits on this date.
    Rescheduled(String),
}

pub struct TaskService {
    store: TaskStore,
}

impl TaskService {
    pub fn new(store: TaskStore) -> Self {
        TaskService { store }
    }

    /// Create a task and return its identifier.
    pub fn add_task(&self, input: TaskInput, today: NaiveDate) -> SchedulerResult<TaskId> {
        let title = required_title(input.title)?;
        let comment = input.comment.unwrap_or_default();
        let repeat = input.repeat.unwrap_or_default();

        let date = creation_date(input.date.as_deref().unwrap_or_default(), &repeat, today)?;
        validate_rule(&repeat)?;

        let id = self.store.insert(&date, &title, &comment, &repeat)?;
        info!(id, date = %date, repeat = %repeat, "created task");

        Ok(id)
    }

    /// Up to [`TASK_LIMIT`] tasks matching a free-form search, ordered by date.
    pub fn list_tasks(&self, query: &str) -> SchedulerResult<Vec<Task>> {
        self.store.list(&TaskSearch::from_query(query), TASK_LIMIT)
    }

    pub fn get_task(&self, id: TaskId) -> SchedulerResult<Task> {
        self.store
            .get(id)?
            .ok_or(SchedulerError::TaskNotFound(id))
    }

    /// Replace an existing task. `id`, `date` and `title` are required.
    pub fn update_task(&self, input: TaskInput) -> SchedulerResult<()> {
        let id = parse_id(input.id.as_deref().unwrap_or_default())?;
        let date = input
            .date
            .filter(|d| !d.is_empty())
            .ok_or(SchedulerError::MissingField("date"))?;
        let title = required_title(input.title)?;
        let comment = input.comment.unwrap_or_default();
        let repeat = input.repeat.unwrap_or_default();

        parse_compact(&date).map_err(|_| SchedulerError::InvalidDate(date.clone()))?;
        validate_rule(&repeat)?;

        self.store.update(&Task {
            id,
            date,
            title,
            comment,
            repeat,
        })?;
        info!(id, "updated task");

        Ok(())
    }

    /// Mark a task done.
    ///
    /// One-off tasks are deleted. Recurring tasks move to the next occurrence
    /// after `today`. Callers sharing a store must not interleave this with
    /// other writes to the same task.
    pub fn complete_task(&self, id: TaskId, today: NaiveDate) -> SchedulerResult<Completion> {
        let task = self.get_task(id)?;

        if !task.is_recurring() {
            self.store.delete(id)?;
            info!(id, "completed one-off task");
            return Ok(Completion::Deleted);
        }

        let next = next_date(today, &task.date, &task.repeat)?;
        self.store.set_date(id, &next)?;
        info!(id, from = %task.date, to = %next, "rescheduled recurring task");

        Ok(Completion::Rescheduled(next))
    }

    pub fn delete_task(&self, id: TaskId) -> SchedulerResult<()> {
        self.store.delete(id)?;
        info!(id, "deleted task");
        Ok(())
    }
}

/// Parse a client-supplied task identifier.
pub fn parse_id(text: &str) -> SchedulerResult<TaskId> {
    if text.is_empty() {
        return Err(SchedulerError::MissingField("id"));
    }

    text.parse()
        .map_err(|_| SchedulerError::InvalidId(text.to_string()))
}

fn required_title(title: Option<String>) -> SchedulerResult<String> {
    title
        .filter(|t| !t.is_empty())
        .ok_or(SchedulerError::MissingTitle)
}

/// Decide the stored date for a new task.
///
/// - empty or `"today"` → today
/// - today or later → unchanged
/// - in the past with no rule, or with `"d 1"` → today
/// - in the past with another rule → next occurrence after today
pub fn creation_date(date: &str, repeat: &str, today: NaiveDate) -> SchedulerResult<String> {
    if date.is_empty() || date == TODAY_TOKEN {
        return Ok(format_compact(today));
    }

    let parsed = parse_compact(date).map_err(|_| SchedulerError::InvalidDate(date.to_string()))?;

    if parsed >= today {
        return Ok(date.to_string());
    }

    if repeat.is_empty() || repeat == DAILY_RULE {
        return Ok(format_compact(today));
    }

    Ok(next_date(today, date, repeat)?)
}
