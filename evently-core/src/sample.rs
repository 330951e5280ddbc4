//! Built-in events shown when no events file is configured.

use crate::clock::Clock;
use crate::event::Event;
use crate::event_date::EventDate;
use crate::group::Group;

pub fn sample_events() -> Vec<Event> {
    vec![
        Event::new(
            "Compiler Construction revision",
            EventDate::new(false, Clock::new(2012, 12, 25, 16, 0), Clock::new(2012, 12, 25, 17, 0)),
            "INM202",
            Group::new("SemaphoreLovers"),
        ),
        Event::new(
            "Souper de faculté",
            EventDate::new(false, Clock::new(2012, 12, 25, 18, 30), Clock::new(2012, 12, 26, 19, 30)),
            "Hall BC",
            Group::new("CLIC"),
        ),
        // End precedes begin; all-day labels and exports only read begin
        Event::new(
            "Balélec",
            EventDate::new(true, Clock::new(2013, 5, 10, 0, 0), Clock::new(2012, 12, 1, 0, 0)),
            "Esplanade",
            Group::new("Balelec"),
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_labels() {
        let labels: Vec<String> = sample_events().iter().map(|e| e.time().to_string()).collect();
        assert_eq!(
            labels,
            [
                "25.12.2012: 16h00 - 17h00",
                "25.12.2012 (18h30) - 26.12.2012 (19h30)",
                "10.5.2013 - All day",
            ]
        );
    }

    #[test]
    fn test_sample_events_all_export() {
        for event in sample_events() {
            assert!(
                crate::export::CalendarInsert::from_event(&event).is_ok(),
                "{} should export",
                event.name()
            );
        }
    }
}
