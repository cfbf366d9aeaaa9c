//! Guest display names from free-text event fields.

use std::borrow::Cow;

use cabin_core::config::GuestConfig;
use cabin_core::constants::{DEFAULT_GUEST_FALLBACK, DEFAULT_GUEST_MARKER, DEFAULT_RESERVED_PHRASES};

use crate::ical::core::CalendarEvent;

/// Literal two-character escape some exporters leave in descriptions.
const ESCAPED_NEWLINE: &str = "\\n";

/// Rules for deriving a guest name from an event.
///
/// Precedence, first match wins:
/// 1. The text after `marker` in `DESCRIPTION`, up to the end of that line.
/// 2. `SUMMARY` with its first parenthesized part removed, unless it is one
///    of the reserved phrases platforms use for blocked nights.
/// 3. `fallback`.
///
/// The description marker is preferred because aggregator summaries are
/// often generic placeholders.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GuestNameRules {
    marker: String,
    /// Lower-cased.
    reserved_phrases: Vec<String>,
    fallback: String,
}

impl GuestNameRules {
    /// Creates rules from a marker, reserved summary phrases and a fallback name.
    ///
    /// The marker and the phrases are matched ignoring case.
    #[must_use]
    pub fn new<I, S>(
        marker: impl Into<String>,
        reserved_phrases: I,
        fallback: impl Into<String>,
    ) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            marker: marker.into(),
            reserved_phrases: reserved_phrases
                .into_iter()
                .map(|phrase| phrase.as_ref().trim().to_lowercase())
                .collect(),
            fallback: fallback.into(),
        }
    }

    #[must_use]
    pub fn fallback(&self) -> &str {
        &self.fallback
    }

    /// Derives the display name for `event`. Never empty as long as the
    /// fallback is not.
    #[must_use]
    pub(crate) fn resolve(&self, event: &CalendarEvent) -> String {
        if let Some(name) = event.description().and_then(|d| self.name_in_description(d)) {
            return name.to_string();
        }

        if let Some(name) = event.summary().and_then(|s| self.name_in_summary(s)) {
            return name;
        }

        self.fallback.clone()
    }

    /// Text following the marker, up to a newline (real or escaped) or the end.
    fn name_in_description<'a>(&self, description: &'a str) -> Option<&'a str> {
        let start = find_ignore_case(description, &self.marker)?;

        // Leading whitespace, line breaks included, is skipped
        let rest = description[start..].trim_start();
        let end = [rest.find('\n'), rest.find(ESCAPED_NEWLINE)]
            .into_iter()
            .flatten()
            .min()
            .unwrap_or(rest.len());

        let name = rest[..end].trim();
        (!name.is_empty()).then_some(name)
    }

    fn name_in_summary(&self, summary: &str) -> Option<String> {
        let cleaned = strip_first_parenthetical(summary);
        let cleaned = cleaned.trim();

        if cleaned.is_empty() || self.is_reserved(cleaned) {
            return None;
        }

        Some(cleaned.to_string())
    }

    fn is_reserved(&self, summary: &str) -> bool {
        let summary = summary.to_lowercase();
        self.reserved_phrases.iter().any(|phrase| *phrase == summary)
    }
}

impl Default for GuestNameRules {
    fn default() -> Self {
        Self::new(
            DEFAULT_GUEST_MARKER,
            DEFAULT_RESERVED_PHRASES,
            DEFAULT_GUEST_FALLBACK,
        )
    }
}

impl From<&GuestConfig> for GuestNameRules {
    fn from(config: &GuestConfig) -> Self {
        Self::new(
            config.marker.clone(),
            &config.reserved_phrases,
            config.fallback_name.clone(),
        )
    }
}

/// Byte offset just past the first case-insensitive occurrence of `needle`.
fn find_ignore_case(haystack: &str, needle: &str) -> Option<usize> {
    haystack.char_indices().find_map(|(start, _)| {
        let mut rest = haystack[start..].char_indices();
        for expected in needle.chars() {
            let (_, found) = rest.next()?;
            if !found.to_lowercase().eq(expected.to_lowercase()) {
                return None;
            }
        }
        Some(start + rest.next().map_or(haystack.len() - start, |(offset, _)| offset))
    })
}

/// Removes the first `(...)` group, shortest match.
fn strip_first_parenthetical(text: &str) -> Cow<'_, str> {
    if let Some(open) = text.find('(')
        && let Some(len) = text[open..].find(')')
    {
        let close = open + len + 1;
        let mut stripped = String::with_capacity(text.len() - (close - open));
        stripped.push_str(&text[..open]);
        stripped.push_str(&text[close..]);
        return Cow::Owned(stripped);
    }

    Cow::Borrowed(text)
}
