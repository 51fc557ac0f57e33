use anyhow::Result;
use owo_colors::OwoColorize;
use scheduler_core::TaskService;

use super::today;
use crate::render::{Render, is_due};

pub fn run(service: &TaskService, search: Option<String>, json: bool) -> Result<()> {
    let tasks = service.list_tasks(search.as_deref().unwrap_or_default())?;

    if json {
        println!("{}", serde_json::to_string_pretty(&tasks)?);
        return Ok(());
    }

    if tasks.is_empty() {
        println!("{}", "No tasks".dimmed());
        return Ok(());
    }

    let today = today();
    for task in &tasks {
        let marker = if is_due(task, today) { "!".red().to_string() } else { " ".to_string() };
        println!("{} {}", marker, task.render());
    }

    Ok(())
}
