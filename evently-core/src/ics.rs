//! ICS generation for exporting events to calendar applications.

use chrono::{NaiveDateTime, Utc};
use icalendar::{Calendar, Component, EventLike, Property, ValueType};

use crate::error::ExportResult;
use crate::event::Event;
use crate::export::export_span;

/// Generate .ics content for an event.
pub fn generate_ics(event: &Event) -> ExportResult<String> {
    let (begin, end) = export_span(event)?;

    let mut cal = Calendar::new();

    let mut ics_event = icalendar::Event::new();
    ics_event.uid(&uid_for(event, &begin));
    ics_event.summary(event.name());

    // DTSTAMP - required by RFC 5545
    let dtstamp = Utc::now().format("%Y%m%dT%H%M%SZ").to_string();
    ics_event.add_property("DTSTAMP", &dtstamp);

    if event.time().is_all_day() {
        add_date_property(&mut ics_event, "DTSTART", &begin);
        add_date_property(&mut ics_event, "DTEND", &end);
    } else {
        // Clocks carry no timezone, so times are floating
        ics_event.add_property("DTSTART", begin.format("%Y%m%dT%H%M%S").to_string());
        ics_event.add_property("DTEND", end.format("%Y%m%dT%H%M%S").to_string());
    }

    if !event.place().is_empty() {
        ics_event.location(event.place());
    }

    if !event.owner().name().is_empty() {
        ics_event.description(event.owner().name());
    }

    let ics_event = ics_event.done();
    cal.push(ics_event);
    let cal = cal.done();

    Ok(strip_ics_bloat(&cal.to_string()))
}

/// Stable UID: `YYYY-MM-DDTHHMM__slug@evently`, or `YYYY-MM-DD__slug@evently`
/// for all-day events.
fn uid_for(event: &Event, begin: &NaiveDateTime) -> String {
    let date = if event.time().is_all_day() {
        begin.format("%Y-%m-%d").to_string()
    } else {
        begin.format("%Y-%m-%dT%H%M").to_string()
    };

    format!("{}__{}@evently", date, slug::slugify(event.name()))
}

fn add_date_property(ics_event: &mut icalendar::Event, name: &str, dt: &NaiveDateTime) {
    let mut prop = Property::new(name, dt.format("%Y%m%d").to_string());
    prop.append_parameter(ValueType::Date);
    ics_event.append_property(prop);
}

/// Replace the icalendar crate's PRODID and drop the default CALSCALE.
fn strip_ics_bloat(ics: &str) -> String {
    let mut result = String::with_capacity(ics.len());

    for line in ics.lines() {
        if line.starts_with("PRODID:") {
            result.push_str("PRODID:EVENTLY\r\n");
            continue;
        }

        if line == "CALSCALE:GREGORIAN" {
            continue;
        }

        result.push_str(line);
        result.push_str("\r\n");
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::Clock;
    use crate::error::ExportError;
    use crate::event_date::EventDate;
    use crate::group::Group;

    fn make_test_event() -> Event {
        Event::new(
            "Compiler Construction revision",
            EventDate::new(false, Clock::new(2012, 12, 25, 16, 0), Clock::new(2012, 12, 25, 17, 0)),
            "INM202",
            Group::new("SemaphoreLovers"),
        )
    }

    #[test]
    fn test_generate_ics_timed_event_is_floating() {
        let ics = generate_ics(&make_test_event()).unwrap();

        assert!(ics.contains("DTSTART:20121225T160000\r\n"), "ICS:\n{}", ics);
        assert!(ics.contains("DTEND:20121225T170000\r\n"), "ICS:\n{}", ics);
        assert!(ics.contains("SUMMARY:Compiler Construction revision"), "ICS:\n{}", ics);
        assert!(ics.contains("LOCATION:INM202"), "ICS:\n{}", ics);
        assert!(ics.contains("DESCRIPTION:SemaphoreLovers"), "ICS:\n{}", ics);
    }

    #[test]
    fn test_generate_ics_uid_is_stable() {
        let ics = generate_ics(&make_test_event()).unwrap();
        assert!(
            ics.contains("UID:2012-12-25T1600__compiler-construction-revision@evently"),
            "ICS:\n{}",
            ics
        );
    }

    #[test]
    fn test_generate_ics_all_day_event_has_value_date() {
        let event = Event::new(
            "Balélec",
            EventDate::new(true, Clock::new(2013, 5, 10, 0, 0), Clock::new(2012, 12, 1, 0, 0)),
            "Esplanade",
            Group::new("Balelec"),
        );

        let ics = generate_ics(&event).unwrap();

        assert!(
            ics.contains("DTSTART;VALUE=DATE:20130510"),
            "DTSTART should have VALUE=DATE parameter. ICS:\n{}",
            ics
        );
        assert!(
            ics.contains("DTEND;VALUE=DATE:20130511"),
            "DTEND should be the day after begin. ICS:\n{}",
            ics
        );
    }

    #[test]
    fn test_generate_ics_strips_bloat() {
        let ics = generate_ics(&make_test_event()).unwrap();
        assert!(ics.contains("PRODID:EVENTLY"));
        assert!(!ics.contains("CALSCALE:GREGORIAN"));
    }

    #[test]
    fn test_generate_ics_skips_empty_optional_fields() {
        let event = Event::new(
            "Yoga",
            EventDate::new(false, Clock::new(2012, 1, 19, 7, 30), Clock::new(2012, 1, 19, 8, 30)),
            "",
            Group::new(""),
        );

        let ics = generate_ics(&event).unwrap();

        assert!(!ics.contains("LOCATION"));
        assert!(!ics.contains("DESCRIPTION"));
    }

    #[test]
    fn test_generate_ics_rejects_all_day_on_last_date() {
        use chrono::{Datelike, NaiveDate};
        let last = NaiveDate::MAX;
        let clock = Clock::new(last.year(), last.month() as i32, last.day() as i32, 0, 0);
        let event = Event::new("Last", EventDate::new(true, clock, clock), "", Group::new(""));

        assert!(generate_ics(&event).is_err());
    }

    #[test]
    fn test_generate_ics_rejects_default_event() {
        // Zero clocks are not a calendar date
        let err = generate_ics(&Event::default()).unwrap_err();
        assert!(matches!(err, ExportError::InvalidClock { which: "begin", .. }));
    }
}
