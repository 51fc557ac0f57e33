use anyhow::Result;
use owo_colors::OwoColorize;
use scheduler_core::service::parse_id;
use scheduler_core::{TaskInput, TaskService};

use crate::render::Render;

/// Changes requested on the command line; unset fields keep their current value.
pub struct TaskEdit {
    pub date: Option<String>,
    pub title: Option<String>,
    pub comment: Option<String>,
    pub repeat: Option<String>,
}

pub fn run(service: &TaskService, id: &str, edit: TaskEdit) -> Result<()> {
    let current = service.get_task(parse_id(id)?)?;

    let input = TaskInput {
        id: Some(current.id.to_string()),
        date: Some(edit.date.unwrap_or(current.date)),
        title: Some(edit.title.unwrap_or(current.title)),
        comment: Some(edit.comment.unwrap_or(current.comment)),
        repeat: Some(edit.repeat.unwrap_or(current.repeat)),
    };
    service.update_task(input)?;

    let task = service.get_task(current.id)?;
    println!("{} {}", "Updated".yellow(), task.render());

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::{test_service, today};

    fn no_changes() -> TaskEdit {
        TaskEdit {
            date: None,
            title: None,
            comment: None,
            repeat: None,
        }
    }

    #[test]
    fn edit_keeps_unset_fields() {
        let service = test_service();
        let id = service
            .add_task(
                TaskInput::new("Draft").with_comment("v1").with_repeat("d 7"),
                today(),
            )
            .unwrap();

        let edit = TaskEdit {
            title: Some("Final".into()),
            ..no_changes()
        };
        run(&service, &id.to_string(), edit).unwrap();

        let task = service.get_task(id).unwrap();
        assert_eq!(task.title, "Final");
        assert_eq!(task.comment, "v1");
        assert_eq!(task.repeat, "d 7");
    }

    #[test]
    fn edit_can_clear_rule() {
        let service = test_service();
        let id = service
            .add_task(TaskInput::new("Gym").with_repeat("d 2"), today())
            .unwrap();

        let edit = TaskEdit {
            repeat: Some(String::new()),
            ..no_changes()
        };
        run(&service, &id.to_string(), edit).unwrap();

        assert!(!service.get_task(id).unwrap().is_recurring());
    }

    #[test]
    fn edit_rejects_invalid_date() {
        let service = test_service();
        let id = service.add_task(TaskInput::new("Gym"), today()).unwrap();

        let edit = TaskEdit {
            date: Some("2024-01-26".into()),
            ..no_changes()
        };
        assert!(run(&service, &id.to_string(), edit).is_err());
    }
}
