use anyhow::Result;
use evently_core::Event;
use owo_colors::OwoColorize;

use crate::render::Render;

pub fn run(events: &[Event]) -> Result<()> {
    if events.is_empty() {
        println!("{}", "No events found".dimmed());
        return Ok(());
    }

    for event in events {
        println!("{}", event.render());
    }

    Ok(())
}
