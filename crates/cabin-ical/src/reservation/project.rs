//! Public entry point: feed text to reservation records.

use cabin_core::types::{ReservationRecord, ReservationSource};

use super::date::normalize_date;
use super::guest::GuestNameRules;
use crate::ical::parse::{extract_events, unfold};

/// Records projected from one feed, plus how many event blocks were dropped.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Projection {
    /// One record per complete event, in feed order.
    pub records: Vec<ReservationRecord>,
    /// `VEVENT` blocks that were incomplete or never closed.
    pub dropped: usize,
}

/// Projects a calendar feed into reservation records tagged with `source`.
///
/// Uses the default [`GuestNameRules`]. Never fails: an empty or
/// unrecognizable feed gives an empty list.
#[must_use]
pub fn project(input: &str, source: ReservationSource) -> Vec<ReservationRecord> {
    project_with_rules(input, source, &GuestNameRules::default())
}

/// [`project`] with explicit guest-name rules.
#[must_use]
pub fn project_with_rules(
    input: &str,
    source: ReservationSource,
    rules: &GuestNameRules,
) -> Vec<ReservationRecord> {
    project_with_report(input, source, rules).records
}

/// [`project_with_rules`] that also reports how many events were dropped.
#[must_use]
#[tracing::instrument(skip(input, rules), fields(input_len = input.len()))]
pub fn project_with_report(
    input: &str,
    source: ReservationSource,
    rules: &GuestNameRules,
) -> Projection {
    let extraction = extract_events(&unfold(input));
    let dropped = extraction.dropped();

    let records: Vec<ReservationRecord> = extraction
        .events
        .iter()
        .map(|event| {
            ReservationRecord::from_calendar(
                event.uid.as_deref().unwrap_or_default(),
                rules.resolve(event),
                normalize_date(event.dtstart.as_deref()),
                normalize_date(event.dtend.as_deref()),
                source,
            )
        })
        .collect();

    if dropped > 0 {
        tracing::debug!(dropped, "Dropped incomplete calendar events");
    }
    tracing::debug!(count = records.len(), "Projected reservations");

    Projection { records, dropped }
}
