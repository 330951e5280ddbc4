use anyhow::{Context, Result};
use chrono::{Duration, NaiveDate, NaiveDateTime, NaiveTime};
use evently_core::{Clock, Event, EventDate, Group};

/// User input for a new event, as typed on the command line.
#[derive(Debug, Default, Clone)]
pub struct NewEvent {
    pub title: String,
    pub date: String,
    pub begin: Option<String>,
    pub end: Option<String>,
    pub end_date: Option<String>,
    pub all_day: bool,
    pub place: Option<String>,
    pub group: Option<String>,
}

pub fn run(input: NewEvent, default_group: Option<String>) -> Result<()> {
    let event = build_event(input, default_group)?;
    println!("{}", event.to_payload());
    Ok(())
}

/// Build an event from user input.
///
/// Timed events need a begin time; without an end time they last one hour.
/// All-day events ignore times.
pub fn build_event(input: NewEvent, default_group: Option<String>) -> Result<Event> {
    let date = parse_date(&input.date)?;
    let end_date = input.end_date.as_deref().map(parse_date).transpose()?;

    let time = if input.all_day {
        let begin = date.and_time(NaiveTime::MIN);
        let end = end_date.unwrap_or(date).and_time(NaiveTime::MIN);
        EventDate::new(true, Clock::from_naive_datetime(&begin), Clock::from_naive_datetime(&end))
    } else {
        let begin_time = input
            .begin
            .as_deref()
            .context("--begin is required unless --all-day is set")?;
        let begin = date.and_time(parse_time(begin_time)?);

        let end = match input.end.as_deref() {
            Some(end_time) => end_date.unwrap_or(date).and_time(parse_time(end_time)?),
            None => one_hour_after(begin)?,
        };

        EventDate::new(false, Clock::from_naive_datetime(&begin), Clock::from_naive_datetime(&end))
    };

    let owner = input.group.or(default_group).unwrap_or_default();

    Ok(Event::new(
        input.title,
        time,
        input.place.unwrap_or_default(),
        Group::new(owner),
    ))
}

fn one_hour_after(begin: NaiveDateTime) -> Result<NaiveDateTime> {
    begin
        .checked_add_signed(Duration::hours(1))
        .with_context(|| format!("No end time fits one hour after {}; give --end", begin))
}

fn parse_date(s: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .with_context(|| format!("Invalid date '{}'. Expected YYYY-MM-DD", s))
}

fn parse_time(s: &str) -> Result<NaiveTime> {
    NaiveTime::parse_from_str(s, "%H:%M")
        .with_context(|| format!("Invalid time '{}'. Expected HH:MM", s))
}
