//! Subscription feed generation.
//!
//! Builds a complete `VCALENDAR` document from a company's events. The output
//! is a pure function of its inputs: the same name, events and generation
//! instant always produce byte-identical text.

use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::calendar::{filter_public_events, Event};

use super::text::{escape_text, fold_line};

/// Product identifier emitted in every document.
pub const PRODUCT_ID: &str = "-//calfeed//Calendar Feed 1.0//EN";

/// Domain suffix of every event UID.
pub const UID_DOMAIN: &str = "calfeed";

const CRLF: &str = "\r\n";

/// Returns the globally unique identifier published for an event.
///
/// Derived only from the event ID, so it survives any edit of the event.
pub fn event_uid(id: Uuid) -> String {
    format!("{id}@{UID_DOMAIN}")
}

/// Formats an instant as an iCalendar UTC date-time (`YYYYMMDDTHHMMSSZ`).
pub fn format_utc(instant: &DateTime<Utc>) -> String {
    instant.format("%Y%m%dT%H%M%SZ").to_string()
}

/// Encodes a feed stamped with the current time.
pub fn encode_feed<'a, I>(company_name: &str, events: I) -> String
where
    I: IntoIterator<Item = &'a Event>,
{
    encode_feed_at(company_name, events, Utc::now())
}

/// Encodes a feed stamped with `generated_at`.
///
/// Private events are dropped before anything is written. Events appear in the
/// order given; an empty input yields a valid calendar with no events.
pub fn encode_feed_at<'a, I>(company_name: &str, events: I, generated_at: DateTime<Utc>) -> String
where
    I: IntoIterator<Item = &'a Event>,
{
    let dtstamp = format_utc(&generated_at);
    let mut writer = ContentWriter::default();

    writer.line("BEGIN:VCALENDAR");
    writer.line("VERSION:2.0");
    writer.property("PRODID", PRODUCT_ID);
    writer.line("CALSCALE:GREGORIAN");
    writer.line("METHOD:PUBLISH");
    writer.property("X-WR-CALNAME", &escape_text(company_name));

    for event in filter_public_events(events) {
        write_event(&mut writer, event, &dtstamp);
    }

    writer.line("END:VCALENDAR");
    writer.finish()
}

fn write_event(writer: &mut ContentWriter, event: &Event, dtstamp: &str) {
    debug_assert!(
        event.start < event.end,
        "event {} reached the encoder with start >= end",
        event.id
    );

    writer.line("BEGIN:VEVENT");
    writer.property("UID", &event_uid(event.id));
    writer.property("DTSTAMP", dtstamp);
    writer.property("DTSTART", &format_utc(&event.start));
    writer.property("DTEND", &format_utc(&event.end));
    writer.property("SUMMARY", &escape_text(&event.title));

    if !event.description.is_empty() {
        writer.property("DESCRIPTION", &escape_text(&event.description));
    }

    if let Some(location) = event.location.as_deref().filter(|l| !l.is_empty()) {
        writer.property("LOCATION", &escape_text(location));
    }

    writer.line("END:VEVENT");
}

/// Accumulates folded, CRLF-terminated content lines.
#[derive(Default)]
struct ContentWriter {
    out: String,
}

impl ContentWriter {
    /// Writes `name:value`, where `value` is already escaped.
    fn property(&mut self, name: &str, value: &str) {
        self.line(&format!("{name}:{value}"));
    }

    fn line(&mut self, logical: &str) {
        for physical in fold_line(logical) {
            self.out.push_str(&physical);
            self.out.push_str(CRLF);
        }
    }

    fn finish(self) -> String {
        self.out
    }
}
