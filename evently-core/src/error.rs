//! Error types for evently.

use thiserror::Error;

/// A record could not be turned into a Clock, EventDate or Event.
#[derive(Error, Debug)]
pub enum ParseError {
    /// A key is missing or holds a value of the wrong type.
    #[error("Invalid {kind} record: {source}")]
    Record {
        kind: &'static str,
        #[source]
        source: serde_json::Error,
    },

    /// The payload text is not JSON at all.
    #[error("Payload is not valid JSON: {0}")]
    Payload(#[source] serde_json::Error),
}

/// An event payload was rejected. Callers at the UI boundary usually
/// replace the event with `Event::default()` and keep this for diagnostics.
#[derive(Error, Debug)]
#[error("Could not parse event: {0}")]
pub struct EventParseFailure(#[from] pub ParseError);

/// Building the output record failed.
#[derive(Error, Debug)]
pub enum SerializationFailure {
    #[error("Could not serialize {kind}: {source}")]
    Serde {
        kind: &'static str,
        #[source]
        source: serde_json::Error,
    },

    #[error("{kind} did not serialize to a JSON object")]
    NotARecord { kind: &'static str },
}

/// Errors raised when handing an event to an external calendar.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ExportError {
    #[error("{which} clock is not a valid calendar date/time: {clock}")]
    InvalidClock { which: &'static str, clock: String },

    #[error("Event ends before it begins ({begin} > {end})")]
    EndBeforeBegin { begin: String, end: String },
}

/// Result type alias for record parsing.
pub type ParseResult<T> = Result<T, ParseError>;

/// Result type alias for calendar export.
pub type ExportResult<T> = Result<T, ExportError>;
