use anyhow::Result;
use evently_core::Event;

use crate::catalog::find_event;

/// Print the JSON payload another screen would receive.
pub fn run(events: &[Event], name: &str) -> Result<()> {
    let event = find_event(events, name)?;
    println!("{}", event.to_payload());
    Ok(())
}
