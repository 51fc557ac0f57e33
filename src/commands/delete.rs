use anyhow::Result;
use owo_colors::OwoColorize;
use scheduler_core::TaskService;
use scheduler_core::service::parse_id;

pub fn run(service: &TaskService, id: &str) -> Result<()> {
    let id = parse_id(id)?;
    service.delete_task(id)?;
    println!("{} #{}", "Deleted".red(), id);
    Ok(())
}
