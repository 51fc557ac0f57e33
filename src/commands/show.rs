use anyhow::Result;
use scheduler_core::TaskService;
use scheduler_core::service::parse_id;

use crate::render::Render;

pub fn run(service: &TaskService, id: &str, json: bool) -> Result<()> {
    let task = service.get_task(parse_id(id)?)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&task)?);
    } else {
        println!("{}", task.render());
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::{test_service, today};
    use scheduler_core::TaskInput;

    #[test]
    fn show_existing_task() {
        let service = test_service();
        let id = service.add_task(TaskInput::new("Read"), today()).unwrap();

        run(&service, &id.to_string(), false).unwrap();
        run(&service, &id.to_string(), true).unwrap();
    }

    #[test]
    fn show_unknown_task_fails() {
        let service = test_service();
        assert!(run(&service, "5", false).is_err());
        assert!(run(&service, "five", false).is_err());
    }
}
