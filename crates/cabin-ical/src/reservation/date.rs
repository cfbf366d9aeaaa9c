//! Date normalization for `DTSTART`/`DTEND` values.

use cabin_core::constants::DATE_FORMAT;
use chrono::{Local, NaiveDate};

/// Reformats an iCalendar `DATE` or `DATE-TIME` as `YYYY-MM-DD`, defaulting
/// to today's local date when the value is missing or empty.
///
/// See [`normalize_date_or`].
#[must_use]
pub fn normalize_date(raw: Option<&str>) -> String {
    normalize_date_or(raw, Local::now().date_naive())
}

/// Reformats an iCalendar `DATE` (`YYYYMMDD`) or `DATE-TIME`
/// (`YYYYMMDDTHHMMSS[Z]`) as `YYYY-MM-DD`.
///
/// The value is trimmed and cut at the first `T`, then split by position
/// into 4/2/2 characters. Nothing is validated: `20241399` becomes
/// `2024-13-99`, and short input gives short or empty parts. A missing or
/// empty value yields `today`.
#[must_use]
pub fn normalize_date_or(raw: Option<&str>, today: NaiveDate) -> String {
    let Some(raw) = raw.filter(|raw| !raw.is_empty()) else {
        tracing::debug!(%today, "Missing date, defaulting to today");
        return today.format(DATE_FORMAT).to_string();
    };

    let date = raw.trim();
    let date = date.split_once('T').map_or(date, |(date, _time)| date);

    format!(
        "{}-{}-{}",
        char_range(date, 0, 4),
        char_range(date, 4, 6),
        char_range(date, 6, 8)
    )
}

/// Characters `start..end` of `s`, clamped to its length.
fn char_range(s: &str, start: usize, end: usize) -> &str {
    let byte_at = |n: usize| s.char_indices().nth(n).map_or(s.len(), |(i, _)| i);
    &s[byte_at(start)..byte_at(end)]
}
