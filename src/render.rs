//! One-line terminal summaries of records.

use owo_colors::OwoColorize;
use rpm_core::{CalendarEvent, Category, CategoryType, RpmBlock};

pub trait Render {
    fn render(&self) -> String;
}

fn plural(n: usize, word: &str) -> String {
    if n == 1 {
        format!("{n} {word}")
    } else {
        format!("{n} {word}s")
    }
}

/// Minutes as a short human duration ("45m", "1h 30m", "3d 2h")
fn format_minutes(total: f64) -> String {
    let minutes = total.round() as i64;
    let (days, rest) = (minutes / (60 * 24), minutes % (60 * 24));
    let (hours, mins) = (rest / 60, rest % 60);

    match (days, hours, mins) {
        (0, 0, m) => format!("{m}m"),
        (0, h, 0) => format!("{h}h"),
        (0, h, m) => format!("{h}h {m}m"),
        (d, 0, _) => format!("{d}d"),
        (d, h, _) => format!("{d}d {h}h"),
    }
}

impl Render for Category {
    fn render(&self) -> String {
        let kind = match self.kind {
            Some(CategoryType::Personal) => " (personal)",
            Some(CategoryType::Professional) => " (professional)",
            None => "",
        };

        format!(
            "{}{} {} {}",
            self.name.bold(),
            kind,
            plural(self.roles.len(), "role").dimmed(),
            self.id.dimmed()
        )
    }
}

impl Render for RpmBlock {
    fn render(&self) -> String {
        let result = if self.result.is_empty() {
            "(no result)"
        } else {
            self.result.as_str()
        };
        let saved = if self.saved { "" } else { " [draft]" };

        let mut details = plural(self.massive_actions.len(), "action");
        let total = self.total_minutes();
        if total > 0.0 {
            details.push_str(&format!(", {}", format_minutes(total)));
        }

        format!(
            "{}{} {} {}",
            result.bold(),
            saved.yellow(),
            details.dimmed(),
            self.id.dimmed()
        )
    }
}

impl Render for CalendarEvent {
    fn render(&self) -> String {
        let title = self.title().unwrap_or("(untitled)");
        let start = self
            .fields
            .get("start")
            .and_then(|v| v.as_str())
            .unwrap_or_default();

        format!("{} {} {}", title.bold(), start, self.id.dimmed())
    }
}
