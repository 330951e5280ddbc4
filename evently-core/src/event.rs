//! Events, the unit handed between screens.
//!
//! An event travels as a JSON payload string. Parsing comes in two
//! flavors: [`Event::parse`] is strict and returns the failure, while
//! [`Event::parse_or_default`] and [`Event::from_payload`] never fail and
//! fall back to [`Event::default`] so a screen always has something to show.
//! The fallback is logged and reported through [`ParsedEvent::failure`].

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::codec::{JsonRecord, Record, keyed_record, parse_payload};
use crate::error::EventParseFailure;
use crate::event_date::EventDate;
use crate::group::Group;

#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Event {
    name: String,
    #[serde(deserialize_with = "keyed_record")]
    time: EventDate,
    place: String,
    owner: Group,
}

/// Outcome of a lenient parse.
#[derive(Debug)]
pub struct ParsedEvent {
    pub event: Event,
    /// Set when `event` is the default fallback.
    pub failure: Option<EventParseFailure>,
}

impl ParsedEvent {
    pub fn is_fallback(&self) -> bool {
        self.failure.is_some()
    }

    pub fn into_event(self) -> Event {
        self.event
    }
}

impl Event {
    pub fn new(name: impl Into<String>, time: EventDate, place: impl Into<String>, owner: Group) -> Self {
        Event {
            name: name.into(),
            time,
            place: place.into(),
            owner,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn time(&self) -> &EventDate {
        &self.time
    }

    pub fn place(&self) -> &str {
        &self.place
    }

    pub fn owner(&self) -> &Group {
        &self.owner
    }

    /// Strict parse of an event record.
    pub fn parse(record: &Value) -> Result<Event, EventParseFailure> {
        Ok(Event::from_record(record)?)
    }

    /// Parse an event record, substituting the default event on failure.
    pub fn parse_or_default(record: &Value) -> ParsedEvent {
        fallback_on_error(Event::parse(record))
    }

    /// Parse a payload string produced by [`Event::to_payload`].
    pub fn from_payload(payload: &str) -> ParsedEvent {
        let parsed = parse_payload(payload)
            .map_err(EventParseFailure::from)
            .and_then(|record| Event::parse(&record));
        fallback_on_error(parsed)
    }

    /// The event record, or an empty record if serialization fails.
    pub fn to_record(&self) -> Record {
        match self.try_to_record() {
            Ok(record) => record,
            Err(e) => {
                tracing::warn!(event = %self.name, error = %e, "event serialization failed, using empty record");
                Record::new()
            }
        }
    }

    /// Compact JSON text of [`Event::to_record`]; `{}` signals failure.
    pub fn to_payload(&self) -> String {
        Value::Object(self.to_record()).to_string()
    }
}

impl JsonRecord for Event {
    const KIND: &'static str = "event";
}

fn fallback_on_error(parsed: Result<Event, EventParseFailure>) -> ParsedEvent {
    match parsed {
        Ok(event) => ParsedEvent {
            event,
            failure: None,
        },
        Err(failure) => {
            tracing::warn!(error = %failure, "malformed event payload, using default event");
            ParsedEvent {
                event: Event::default(),
                failure: Some(failure),
            }
        }
    }
}
