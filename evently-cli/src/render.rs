//! Terminal rendering for evently-core types.
//!
//! Extension traits adding colored output to core types using owo_colors.

use evently_core::{CalendarInsert, Event};
use owo_colors::OwoColorize;

/// Extension trait for TUI rendering with colors.
pub trait Render {
    fn render(&self) -> String;
}

/// One line per event, as in the event list.
impl Render for Event {
    fn render(&self) -> String {
        let owner = format!("[{}]", self.owner());
        format!(
            "{}  {}  {} {}",
            self.name().bold(),
            self.place(),
            self.time().to_string().dimmed(),
            owner.dimmed()
        )
    }
}

impl Render for CalendarInsert {
    fn render(&self) -> String {
        let mut lines = vec![
            format!("{} {}", "title:".dimmed(), self.title),
            format!("{} {}", "location:".dimmed(), self.location),
            format!("{} {}", "description:".dimmed(), self.description),
            format!("{} {}", "begin:".dimmed(), self.begin.format("%Y-%m-%d %H:%M")),
            format!("{} {}", "end:".dimmed(), self.end.format("%Y-%m-%d %H:%M")),
            format!("{} {}", "all day:".dimmed(), self.all_day),
            format!("{} {:?}", "availability:".dimmed(), self.availability),
        ];

        let tz = chrono::Local;
        if let (Some(begin), Some(end)) = (self.begin_millis(&tz), self.end_millis(&tz)) {
            lines.push(format!("{} {} - {}", "millis:".dimmed(), begin, end));
        }

        lines.join("\n")
    }
}

/// Detail view of a single event.
pub fn render_details(event: &Event) -> String {
    [
        event.name().bold().to_string(),
        format!("  {}", event.time()),
        format!("  {} {}", "at".dimmed(), event.place()),
        format!("  {} {}", "by".dimmed(), event.owner()),
    ]
    .join("\n")
}
