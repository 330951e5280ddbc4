use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::ValueEnum;
use evently_core::ics::generate_ics;
use evently_core::{Availability, CalendarInsert, Event};

use crate::render::Render;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ExportFormat {
    /// Fields of a calendar-insert request
    Insert,
    /// An .ics calendar file
    Ics,
}

pub fn run(
    event: &Event,
    format: ExportFormat,
    availability: Availability,
    output: Option<PathBuf>,
) -> Result<()> {
    let content = match format {
        ExportFormat::Insert => CalendarInsert::from_event(event)
            .with_context(|| format!("Cannot export '{}'", event.name()))?
            .with_availability(availability)
            .render(),
        ExportFormat::Ics => generate_ics(event)
            .with_context(|| format!("Cannot export '{}'", event.name()))?,
    };

    match output {
        Some(path) => {
            std::fs::write(&path, &content)
                .with_context(|| format!("Failed to write {}", path.display()))?;
            println!("Exported '{}' to {}", event.name(), path.display());
        }
        None => print!("{}", ensure_trailing_newline(content)),
    }

    Ok(())
}

/// Parse a payload strictly; exporting a fallback event makes no sense.
pub fn event_from_payload(payload: &str) -> Result<Event> {
    let parsed = Event::from_payload(payload);
    match parsed.failure {
        Some(failure) => Err(failure).context("Cannot export payload"),
        None => Ok(parsed.event),
    }
}

fn ensure_trailing_newline(mut content: String) -> String {
    if !content.ends_with('\n') {
        content.push('\n');
    }
    content
}

#[cfg(test)]
mod tests {
    use super::*;
    use evently_core::sample::sample_events;

    #[test]
    fn test_event_from_payload_accepts_valid_payload() {
        let event = &sample_events()[0];
        assert_eq!(&event_from_payload(&event.to_payload()).unwrap(), event);
    }

    #[test]
    fn test_event_from_payload_rejects_malformed_payload() {
        let err = event_from_payload("{\"name\": \"Yoga\"}").unwrap_err();
        assert!(err.to_string().contains("Cannot export payload"));
    }

    #[test]
    fn test_export_insert_as_free_to_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("insert.txt");

        run(&sample_events()[0], ExportFormat::Insert, Availability::Free, Some(path.clone())).unwrap();

        let insert = std::fs::read_to_string(&path).unwrap();
        assert!(insert.contains("Free"), "got:\n{}", insert);
    }

    #[test]
    fn test_export_ics_to_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("event.ics");

        run(&sample_events()[2], ExportFormat::Ics, Availability::Busy, Some(path.clone())).unwrap();

        let ics = std::fs::read_to_string(&path).unwrap();
        assert!(ics.contains("DTSTART;VALUE=DATE:20130510"));
    }
}
