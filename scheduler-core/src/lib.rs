//! Core types for the scheduler.
//!
//! This crate provides everything shared by the scheduler CLI and server:
//! - `next_date` and `rule` for recurrence rules and next-occurrence resolution
//! - `store` for SQLite task persistence
//! - `service` for the task use-cases (create, complete, update, ...)

pub mod constants;
pub mod date;
pub mod error;
pub mod next_date;
pub mod rule;
pub mod scheduler_config;
pub mod service;
pub mod store;
pub mod task;

pub use error::{RuleError, SchedulerError, SchedulerResult};
pub use next_date::next_date;
pub use rule::{RepeatRule, validate_rule};
pub use scheduler_config::SchedulerConfig;
pub use service::{Completion, TaskService};
pub use store::{TaskSearch, TaskStore};
pub use task::{Task, TaskId, TaskInput};
