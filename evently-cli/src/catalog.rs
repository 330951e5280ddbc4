//! Where the events shown by the CLI come from.

use std::path::Path;

use anyhow::{Context, Result};
use evently_core::Event;
use evently_core::sample::sample_events;

use crate::config::Config;

/// Events from the configured events file, or the sample events.
pub fn load_events(cfg: &Config) -> Result<Vec<Event>> {
    match cfg.events_path() {
        Some(path) => read_events_file(&path),
        None => Ok(sample_events()),
    }
}

/// Read a JSON array of event records. A malformed record becomes the
/// default event, like any other payload.
pub fn read_events_file(path: &Path) -> Result<Vec<Event>> {
    let contents = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read events file at {}", path.display()))?;

    let records: Vec<serde_json::Value> = serde_json::from_str(&contents)
        .with_context(|| format!("Events file at {} is not a JSON array", path.display()))?;

    let events: Vec<Event> = records
        .iter()
        .enumerate()
        .map(|(index, record)| {
            let parsed = Event::parse_or_default(record);
            if parsed.is_fallback() {
                tracing::warn!(index, path = %path.display(), "replaced malformed event record with defaults");
            }
            parsed.into_event()
        })
        .collect();

    tracing::debug!(count = events.len(), path = %path.display(), "loaded events");
    Ok(events)
}

/// First event with the given name.
pub fn find_event<'a>(events: &'a [Event], name: &str) -> Result<&'a Event> {
    match events.iter().find(|e| e.name() == name) {
        Some(event) => Ok(event),
        None => {
            let available: Vec<_> = events.iter().map(|e| e.name()).collect();
            anyhow::bail!(
                "Event '{}' not found. Available: {}",
                name,
                available.join(", ")
            );
        }
    }
}
