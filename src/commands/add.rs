use anyhow::Result;
use owo_colors::OwoColorize;
use scheduler_core::{TaskInput, TaskService};

use super::today;
use crate::render::Render;

pub fn run(
    service: &TaskService,
    title: String,
    date: Option<String>,
    comment: Option<String>,
    repeat: Option<String>,
) -> Result<()> {
    let input = TaskInput {
        id: None,
        date,
        title: Some(title),
        comment,
        repeat,
    };

    let id = service.add_task(input, today())?;
    let task = service.get_task(id)?;

    println!("{} {}", "Created".green(), task.render());

    Ok(())
}
