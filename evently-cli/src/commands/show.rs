use anyhow::Result;
use evently_core::Event;

use crate::catalog::find_event;
use crate::render::render_details;

pub fn run(events: &[Event], name: &str) -> Result<()> {
    let event = find_event(events, name)?;
    println!("{}", render_details(event));
    Ok(())
}
