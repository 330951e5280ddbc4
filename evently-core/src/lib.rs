//! Core types for evently.
//!
//! - `Clock`, `EventDate`, `Group` and `Event`: immutable event value objects
//! - `codec` for their JSON record form and `Event` payload strings
//! - `export` and `ics` for handing events to external calendars

pub mod clock;
pub mod codec;
pub mod error;
pub mod event;
pub mod event_date;
pub mod export;
pub mod group;
pub mod ics;
pub mod sample;

pub use clock::Clock;
pub use codec::{JsonRecord, Record};
pub use error::{EventParseFailure, ExportError, ParseError, SerializationFailure};
pub use event::{Event, ParsedEvent};
pub use event_date::EventDate;
pub use export::{Availability, CalendarInsert, CalendarView};
pub use group::Group;
