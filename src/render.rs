//! Terminal rendering for scheduler types.
//!
//! Extension traits that add colored output to scheduler-core types using
//! owo_colors.

use chrono::NaiveDate;
use owo_colors::OwoColorize;
use scheduler_core::date::parse_compact;
use scheduler_core::{Completion, RepeatRule, Task};

/// Extension trait for terminal rendering with colors.
pub trait Render {
    fn render(&self) -> String;
}

/// `YYYYMMDD` shown as `YYYY-MM-DD`, or the raw text if it does not parse.
pub fn render_date(date: &str) -> String {
    match parse_compact(date) {
        Ok(d) => d.format("%Y-%m-%d").to_string(),
        Err(_) => date.to_string(),
    }
}

/// Rule in words. Rules the resolver cannot handle are shown as stored.
fn render_rule(rule: &str) -> String {
    match RepeatRule::parse(rule) {
        Ok(RepeatRule::Yearly) => "every year".to_string(),
        Ok(RepeatRule::EveryDays(1)) => "every day".to_string(),
        Ok(RepeatRule::EveryDays(days)) => format!("every {days} days"),
        Err(_) => rule.to_string(),
    }
}

impl Render for Task {
    fn render(&self) -> String {
        let mut line = format!(
            "{} {} {}",
            format!("#{}", self.id).dimmed(),
            render_date(&self.date).cyan(),
            self.title.bold()
        );

        if self.is_recurring() {
            line.push_str(&format!(" {}", format!("↻ {}", render_rule(&self.repeat)).yellow()));
        }

        if !self.comment.is_empty() {
            line.push_str(&format!("\n   {}", self.comment.dimmed()));
        }

        line
    }
}

impl Render for Completion {
    fn render(&self) -> String {
        match self {
            Completion::Deleted => format!("{}", "✓ done, removed".green()),
            Completion::Rescheduled(date) => format!(
                "{} {}",
                "✓ done, next on".green(),
                render_date(date).cyan()
            ),
        }
    }
}

/// Whether a task is due on or before `today`.
pub fn is_due(task: &Task, today: NaiveDate) -> bool {
    parse_compact(&task.date).is_ok_and(|date| date <= today)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn task(date: &str, repeat: &str) -> Task {
        Task {
            id: 1,
            date: date.into(),
            title: "t".into(),
            comment: String::new(),
            repeat: repeat.into(),
        }
    }

    #[test]
    fn dates_render_with_dashes() {
        assert_eq!(render_date("20240126"), "2024-01-26");
        assert_eq!(render_date("garbage"), "garbage");
    }

    #[test]
    fn rules_render_in_words() {
        assert_eq!(render_rule(""), "");
        assert_eq!(render_rule("y"), "every year");
        assert_eq!(render_rule("d 1"), "every day");
        assert_eq!(render_rule("d 14"), "every 14 days");
        assert_eq!(render_rule("d 007"), "every 7 days");
    }

    #[test]
    fn unresolvable_rules_render_as_stored() {
        assert_eq!(render_rule("d 500"), "d 500");
        assert_eq!(render_rule("w 1"), "w 1");
    }

    #[test]
    fn due_tasks() {
        let today = NaiveDate::from_ymd_opt(2024, 1, 26).unwrap();
        assert!(is_due(&task("20240126", ""), today));
        assert!(is_due(&task("20240101", "y"), today));
        assert!(!is_due(&task("20240127", ""), today));
    }
}
