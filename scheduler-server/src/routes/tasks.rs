//! Task endpoints

use axum::{
    Json, Router,
    extract::{Query, State, rejection::JsonRejection},
    routing::{get, post},
};
use scheduler_core::service::parse_id;
use scheduler_core::{Task, TaskId, TaskInput};
use serde::{Deserialize, Serialize};
use serde_json::{Value, json};

use crate::routes::AppError;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/tasks", get(list_tasks))
        .route(
            "/api/task",
            post(create_task)
                .get(get_task)
                .put(update_task)
                .delete(delete_task),
        )
        .route("/api/task/done", post(complete_task))
}

#[derive(Deserialize, Default)]
#[serde(default)]
pub struct IdParams {
    pub id: String,
}

#[derive(Deserialize, Default)]
#[serde(default)]
pub struct SearchParams {
    pub search: String,
}

/// Response for task creation
#[derive(Serialize)]
pub struct CreatedTask {
    pub id: TaskId,
}

/// Response for task listing
#[derive(Serialize)]
pub struct TaskList {
    pub tasks: Vec<Task>,
}

/// GET /api/tasks?search= - List up to 50 tasks, optionally filtered
async fn list_tasks(
    State(state): State<AppState>,
    Query(params): Query<SearchParams>,
) -> Result<Json<TaskList>, AppError> {
    let tasks = state
        .run(move |service| service.list_tasks(&params.search))
        .await?;
    Ok(Json(TaskList { tasks }))
}

/// POST /api/task - Create a task
async fn create_task(
    State(state): State<AppState>,
    payload: Result<Json<TaskInput>, JsonRejection>,
) -> Result<Json<CreatedTask>, AppError> {
    let Json(input) = payload.map_err(AppError::bad_request)?;
    let today = state.today();
    let id = state
        .run(move |service| service.add_task(input, today))
        .await?;
    Ok(Json(CreatedTask { id }))
}

/// GET /api/task?id= - Fetch one task
async fn get_task(
    State(state): State<AppState>,
    Query(params): Query<IdParams>,
) -> Result<Json<Task>, AppError> {
    let id = parse_id(&params.id)?;
    let task = state.run(move |service| service.get_task(id)).await?;
    Ok(Json(task))
}

/// PUT /api/task - Replace a task
async fn update_task(
    State(state): State<AppState>,
    payload: Result<Json<TaskInput>, JsonRejection>,
) -> Result<Json<Value>, AppError> {
    let Json(input) = payload.map_err(AppError::bad_request)?;
    state.run(move |service| service.update_task(input)).await?;
    Ok(Json(json!({})))
}

/// DELETE /api/task?id= - Delete a task
async fn delete_task(
    State(state): State<AppState>,
    Query(params): Query<IdParams>,
) -> Result<Json<Value>, AppError> {
    let id = parse_id(&params.id)?;
    state.run(move |service| service.delete_task(id)).await?;
    Ok(Json(json!({})))
}

/// POST /api/task/done?id= - Complete a task (delete or reschedule)
async fn complete_task(
    State(state): State<AppState>,
    Query(params): Query<IdParams>,
) -> Result<Json<Value>, AppError> {
    let id = parse_id(&params.id)?;
    let today = state.today();
    state
        .run(move |service| service.complete_task(id, today))
        .await?;
    Ok(Json(json!({})))
}
