use std::path::Path;
use std::sync::Arc;

use anyhow::{Context, Result};
use chrono::{Local, NaiveDate};
use scheduler_core::{SchedulerResult, TaskService, TaskStore};
use tokio::sync::Mutex;

use crate::routes::AppError;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    // One connection, one writer at a time. This also serializes the
    // read-resolve-write sequence of completing a task.
    service: Arc<Mutex<TaskService>>,
    today: Option<NaiveDate>,
}

impl AppState {
    pub fn open(db_file: &Path) -> Result<Self> {
        let store = TaskStore::open(db_file)
            .with_context(|| format!("Failed to open task database at {}", db_file.display()))?;
        Ok(AppState::new(TaskService::new(store)))
    }

    pub fn new(service: TaskService) -> Self {
        AppState {
            service: Arc::new(Mutex::new(service)),
            today: None,
        }
    }

    /// Pin "today" to a fixed date instead of the local clock.
    #[cfg(test)]
    pub fn with_today(mut self, today: NaiveDate) -> Self {
        self.today = Some(today);
        self
    }

    /// Run a service call on the blocking pool; SQLite I/O stays off the async workers.
    pub async fn run<T, F>(&self, call: F) -> Result<T, AppError>
    where
        F: FnOnce(&TaskService) -> SchedulerResult<T> + Send + 'static,
        T: Send + 'static,
    {
        let service = Arc::clone(&self.service);
        let result = tokio::task::spawn_blocking(move || call(&service.blocking_lock())).await?;
        Ok(result?)
    }

    pub fn today(&self) -> NaiveDate {
        self.today.unwrap_or_else(|| Local::now().date_naive())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::StatusCode;
    use scheduler_core::{SchedulerError, TaskInput};

    fn state() -> AppState {
        AppState::new(TaskService::new(TaskStore::open_in_memory().unwrap()))
    }

    #[tokio::test]
    async fn run_returns_service_result() {
        let state = state();
        let today = NaiveDate::from_ymd_opt(2024, 1, 26).unwrap();

        let id = state
            .run(move |service| service.add_task(TaskInput::new("Call mom"), today))
            .await
            .unwrap();
        let task = state.run(move |service| service.get_task(id)).await.unwrap();

        assert_eq!(task.title, "Call mom");
        assert_eq!(task.date, "20240126");
    }

    #[tokio::test]
    async fn run_maps_service_errors() {
        let error = state()
            .run(|service| service.get_task(42))
            .await
            .err()
            .unwrap();
        assert_eq!(error.status(), StatusCode::NOT_FOUND);

        let error = state()
            .run(|_| Err::<(), _>(SchedulerError::MissingTitle))
            .await
            .err()
            .unwrap();
        assert_eq!(error.status(), StatusCode::BAD_REQUEST);
    }
}
