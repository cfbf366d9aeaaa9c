//! `VEVENT` extraction from unfolded feed text.

use super::lexer::split_lines;
use crate::ical::core::{CalendarEvent, ContentLine};

const EVENT_BEGIN: &str = "BEGIN:VEVENT";
const EVENT_NAME: &str = "VEVENT";
const ESCAPED_NEWLINE: &str = "\\n";

/// Result of scanning a feed for events.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Extraction {
    /// Complete events, in feed order.
    pub events: Vec<CalendarEvent>,
    /// Number of `BEGIN:VEVENT` blocks seen.
    pub blocks: usize,
}

impl Extraction {
    /// Blocks that did not produce an event.
    #[must_use]
    pub fn dropped(&self) -> usize {
        self.blocks.saturating_sub(self.events.len())
    }
}

/// Extracts events from unfolded iCalendar text.
///
/// The text is cut at every `BEGIN:VEVENT`; whatever precedes the first
/// marker is calendar header and is skipped. Inside a block only `UID`,
/// `DTSTART`, `DTEND`, `SUMMARY` and `DESCRIPTION` are read, a repeated
/// property overwrites the earlier one, and the block ends at `END:VEVENT`.
/// An event is kept only if it is complete at that point; blocks that are
/// incomplete or never closed are dropped without error.
#[must_use]
pub fn extract_events(unfolded: &str) -> Extraction {
    let mut extraction = Extraction::default();

    for block in unfolded.split(EVENT_BEGIN).skip(1) {
        extraction.blocks += 1;
        if let Some(event) = extract_block(block) {
            extraction.events.push(event);
        }
    }

    tracing::debug!(
        blocks = extraction.blocks,
        events = extraction.events.len(),
        "Extracted calendar events"
    );

    extraction
}

fn extract_block(block: &str) -> Option<CalendarEvent> {
    let mut event = CalendarEvent::default();

    for line in split_lines(block) {
        let line = ContentLine::parse(line);
        match line.name {
            "UID" => event.uid = Some(line.value.to_string()),
            "DTSTART" => event.dtstart = Some(line.value.to_string()),
            "DTEND" => event.dtend = Some(line.value.to_string()),
            "SUMMARY" => event.summary = Some(line.value.to_string()),
            "DESCRIPTION" => event.description = Some(line.value.replace(ESCAPED_NEWLINE, "\n")),
            "END" if line.value == EVENT_NAME => {
                if event.is_complete() {
                    return Some(event);
                }
                tracing::trace!(has_uid = event.uid.is_some(), "Dropping incomplete event");
                return None;
            }
            _ => {}
        }
    }

    tracing::trace!(has_uid = event.uid.is_some(), "Dropping unterminated event");
    None
}
