use anyhow::Result;
use evently_core::Event;
use owo_colors::OwoColorize;

use crate::render::render_details;

/// Show an event received as a payload. A malformed payload still shows
/// the default event, with the reason on stderr.
pub fn run(payload: &str) -> Result<()> {
    let parsed = Event::from_payload(payload);

    if let Some(failure) = &parsed.failure {
        eprintln!("{} {}", "warning:".yellow(), failure);
        eprintln!("{}", "Showing an empty event instead.".dimmed());
    }

    println!("{}", render_details(&parsed.event));
    Ok(())
}
