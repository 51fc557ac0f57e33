//! Error types for the scheduler.

use thiserror::Error;

use crate::task::TaskId;

/// Errors produced by rule validation and next-date resolution.
///
/// All of these are caused by bad input; none are worth retrying.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RuleError {
    #[error("invalid date format: {0}")]
    InvalidDateFormat(String),

    #[error("repeat is required")]
    RuleRequired,

    #[error("invalid repeat rule format: {0}")]
    InvalidRuleFormat(String),

    #[error("invalid number of days: {0}")]
    InvalidDayCount(String),

    #[error("unsupported repeat rule: {0}")]
    UnsupportedRule(String),

    #[error("the repetition rule is in the wrong format: {0}")]
    InvalidRule(String),

    #[error("date is out of range for the YYYYMMDD format")]
    DateOutOfRange,
}

/// Errors that can occur in task storage and service operations.
#[derive(Error, Debug)]
pub enum SchedulerError {
    #[error(transparent)]
    Rule(#[from] RuleError),

    #[error("no task title")]
    MissingTitle,

    #[error("missing required field: {0}")]
    MissingField(&'static str),

    #[error("incorrect identifier format: {0}")]
    InvalidId(String),

    #[error("the date is in the wrong format: {0}")]
    InvalidDate(String),

    #[error("task not found: {0}")]
    TaskNotFound(TaskId),

    #[error("Database error: {0}")]
    Database(#[from] rusqlite::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl SchedulerError {
    /// Whether the error was caused by the caller's input rather than the system.
    pub fn is_client_error(&self) -> bool {
        matches!(
            self,
            SchedulerError::Rule(_)
                | SchedulerError::MissingTitle
                | SchedulerError::MissingField(_)
                | SchedulerError::InvalidId(_)
                | SchedulerError::InvalidDate(_)
        )
    }
}

/// Result type alias for scheduler operations.
pub type SchedulerResult<T> = Result<T, SchedulerError>;
