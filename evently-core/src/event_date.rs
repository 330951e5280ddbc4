//! Event time spans.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::clock::Clock;
use crate::codec::{JsonRecord, keyed_record};

/// Either an all-day marker or a begin/end pair.
///
/// Begin and end are not ordered: an end before the begin is accepted
/// here and only refused by timed calendar exports. For all-day dates only
/// the date part of `begin` is meaningful.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EventDate {
    #[serde(rename = "allDay")]
    all_day: bool,
    #[serde(deserialize_with = "keyed_record")]
    begin: Clock,
    #[serde(deserialize_with = "keyed_record")]
    end: Clock,
}

impl EventDate {
    pub fn new(all_day: bool, begin: Clock, end: Clock) -> Self {
        EventDate {
            all_day,
            begin,
            end,
        }
    }

    pub fn is_all_day(&self) -> bool {
        self.all_day
    }

    pub fn begin(&self) -> &Clock {
        &self.begin
    }

    pub fn end(&self) -> &Clock {
        &self.end
    }

    /// Whether `end` is not before `begin`, comparing fields from year down
    /// to minute.
    pub fn is_chronological(&self) -> bool {
        let key = |c: &Clock| (c.year(), c.month(), c.day(), c.hour(), c.minute());
        key(&self.begin) <= key(&self.end)
    }
}

impl Default for EventDate {
    fn default() -> Self {
        EventDate::new(true, Clock::default(), Clock::default())
    }
}

impl JsonRecord for EventDate {
    const KIND: &'static str = "event date";
}

/// The label shown in event lists.
impl fmt::Display for EventDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (begin, end) = (&self.begin, &self.end);

        if self.all_day {
            write!(f, "{} - All day", begin.date_label())
        } else if begin.same_day(end) {
            write!(
                f,
                "{}: {} - {}",
                begin.date_label(),
                begin.time_label(),
                end.time_label()
            )
        } else {
            write!(
                f,
                "{} ({}) - {} ({})",
                begin.date_label(),
                begin.time_label(),
                end.date_label(),
                end.time_label()
            )
        }
    }
}
