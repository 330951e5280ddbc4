//! Calendar-insert requests for a host calendar provider.
//!
//! The host provider takes begin/end instants as epoch milliseconds plus a
//! handful of text fields. Clocks are converted through `chrono`, so the
//! 1-based month never leaks into a 0-based host API.
//!
//! [`CalendarView`] covers the other host entry point: opening the calendar
//! at a given instant.

use chrono::{Duration, NaiveDateTime, TimeZone};

use crate::clock::Clock;
use crate::error::{ExportError, ExportResult};
use crate::event::Event;

/// Busy/free marker sent with the insert. Inserts are busy unless the
/// caller says otherwise with [`CalendarInsert::with_availability`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Availability {
    #[default]
    Busy,
    Free,
}

/// Everything a host calendar needs to pre-fill a new event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CalendarInsert {
    pub title: String,
    pub location: String,
    /// The owning group's name.
    pub description: String,
    pub begin: NaiveDateTime,
    pub end: NaiveDateTime,
    pub all_day: bool,
    pub availability: Availability,
}

impl CalendarInsert {
    pub fn from_event(event: &Event) -> ExportResult<Self> {
        let (begin, end) = export_span(event)?;

        Ok(CalendarInsert {
            title: event.name().to_string(),
            location: event.place().to_string(),
            description: event.owner().name().to_string(),
            begin,
            end,
            all_day: event.time().is_all_day(),
            availability: Availability::default(),
        })
    }

    pub fn with_availability(mut self, availability: Availability) -> Self {
        self.availability = availability;
        self
    }

    /// Begin as epoch milliseconds in `tz`.
    pub fn begin_millis<Tz: TimeZone>(&self, tz: &Tz) -> Option<i64> {
        epoch_millis(&self.begin, tz)
    }

    /// End as epoch milliseconds in `tz`.
    pub fn end_millis<Tz: TimeZone>(&self, tz: &Tz) -> Option<i64> {
        epoch_millis(&self.end, tz)
    }
}

/// Base of the host calendar's "show this instant" URI.
pub const CALENDAR_TIME_URI: &str = "content://com.android.calendar/time";

/// A request to open the host calendar at an instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CalendarView {
    pub at: NaiveDateTime,
}

impl CalendarView {
    pub fn at_clock(clock: &Clock) -> ExportResult<Self> {
        let at = clock
            .to_naive_datetime()
            .ok_or_else(|| invalid_clock("view", clock))?;
        Ok(CalendarView { at })
    }

    /// Open the calendar where the event begins.
    pub fn for_event(event: &Event) -> ExportResult<Self> {
        let (at, _) = export_span(event)?;
        Ok(CalendarView { at })
    }

    pub fn millis<Tz: TimeZone>(&self, tz: &Tz) -> Option<i64> {
        epoch_millis(&self.at, tz)
    }

    /// `content://com.android.calendar/time/<millis>`
    pub fn uri<Tz: TimeZone>(&self, tz: &Tz) -> Option<String> {
        self.millis(tz)
            .map(|millis| format!("{}/{}", CALENDAR_TIME_URI, millis))
    }
}

/// Resolve an event's span to real date-times.
///
/// All-day events run from midnight of the begin date to the next midnight;
/// their `end` clock is ignored. Timed events must not end before they begin.
pub(crate) fn export_span(event: &Event) -> ExportResult<(NaiveDateTime, NaiveDateTime)> {
    let time = event.time();

    if time.is_all_day() {
        let date = time
            .begin()
            .to_naive_date()
            .ok_or_else(|| invalid_clock("begin", time.begin()))?;
        let begin = date.and_time(chrono::NaiveTime::MIN);
        let end = begin
            .checked_add_signed(Duration::days(1))
            .ok_or_else(|| invalid_clock("begin", time.begin()))?;
        return Ok((begin, end));
    }

    let begin = time
        .begin()
        .to_naive_datetime()
        .ok_or_else(|| invalid_clock("begin", time.begin()))?;
    let end = time
        .end()
        .to_naive_datetime()
        .ok_or_else(|| invalid_clock("end", time.end()))?;

    if end < begin {
        return Err(ExportError::EndBeforeBegin {
            begin: begin.to_string(),
            end: end.to_string(),
        });
    }

    Ok((begin, end))
}

fn invalid_clock(which: &'static str, clock: &Clock) -> ExportError {
    ExportError::InvalidClock {
        which,
        clock: format!(
            "{}-{}-{} {}:{}",
            clock.year(),
            clock.month(),
            clock.day(),
            clock.hour(),
            clock.minute()
        ),
    }
}

fn epoch_millis<Tz: TimeZone>(dt: &NaiveDateTime, tz: &Tz) -> Option<i64> {
    tz.from_local_datetime(dt)
        .earliest()
        .map(|local| local.timestamp_millis())
}
