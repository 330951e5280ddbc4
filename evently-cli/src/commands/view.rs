use anyhow::{Context, Result};
use evently_core::{CalendarView, Event};

/// Print the host calendar URI showing the event's begin instant.
pub fn run(event: &Event) -> Result<()> {
    println!("{}", view_uri(event, &chrono::Local)?);
    Ok(())
}

fn view_uri<Tz: chrono::TimeZone>(event: &Event, tz: &Tz) -> Result<String> {
    CalendarView::for_event(event)
        .with_context(|| format!("Cannot view '{}'", event.name()))?
        .uri(tz)
        .with_context(|| format!("'{}' begins at a time that does not exist locally", event.name()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use evently_core::sample::sample_events;

    #[test]
    fn test_view_uri_for_sample_event() {
        let uri = view_uri(&sample_events()[0], &chrono::Utc).unwrap();
        // 2012-12-25T16:00:00Z
        assert_eq!(uri, "content://com.android.calendar/time/1356451200000");
    }

    #[test]
    fn test_view_uri_for_default_event_is_an_error() {
        let err = view_uri(&Event::default(), &chrono::Utc).unwrap_err();
        assert!(err.to_string().contains("Cannot view"));
    }
}
