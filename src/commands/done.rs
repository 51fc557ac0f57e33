use anyhow::Result;
use scheduler_core::TaskService;
use scheduler_core::service::parse_id;

use super::today;
use crate::render::Render;

pub fn run(service: &TaskService, id: &str) -> Result<()> {
    let completion = service.complete_task(parse_id(id)?, today())?;
    println!("{}", completion.render());
    Ok(())
}
