pub mod add;
pub mod config;
pub mod delete;
pub mod done;
pub mod edit;
pub mod list;
pub mod next_date;
pub mod show;

use anyhow::{Context, Result};
use chrono::{Local, NaiveDate};
use scheduler_core::{SchedulerConfig, TaskService, TaskStore};
use std::path::PathBuf;
use tracing::debug;

/// Open the task service on the configured database, or on `db_override`.
pub fn open_service(db_override: Option<PathBuf>) -> Result<TaskService> {
    let db_file = match db_override {
        Some(path) => path,
        None => SchedulerConfig::load()?.db_file,
    };

    debug!(db = %db_file.display(), "using task database");
    let store = TaskStore::open(&db_file)
        .with_context(|| format!("Failed to open task database at {}", db_file.display()))?;

    Ok(TaskService::new(store))
}

pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

#[cfg(test)]
pub fn test_service() -> TaskService {
    TaskService::new(TaskStore::open_in_memory().unwrap())
}
