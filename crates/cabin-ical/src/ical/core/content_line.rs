//! Content line splitting (RFC 5545 §3.1), lenient form.

/// A property line split into its name and raw value.
///
/// Borrowed from the unfolded feed text. Parameters are dropped: booking
/// feeds use them only for `VALUE=DATE`, which does not change how the
/// value is read.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContentLine<'a> {
    /// Property name as written (not case-normalized).
    pub name: &'a str,
    /// Everything after the first `:`, including any later colons.
    pub value: &'a str,
}

impl<'a> ContentLine<'a> {
    /// Splits `name *(";" param) ":" value`.
    ///
    /// Never fails: a line without a colon yields the whole line as the name
    /// and an empty value.
    #[must_use]
    pub fn parse(line: &'a str) -> Self {
        let (key, value) = line.split_once(':').unwrap_or((line, ""));
        let name = key.split_once(';').map_or(key, |(name, _params)| name);

        Self { name, value }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_summary_line() {
        let line = ContentLine::parse("SUMMARY:John Smith (HMXK2Y4Z)");
        assert_eq!(line.name, "SUMMARY");
        assert_eq!(line.value, "John Smith (HMXK2Y4Z)");
    }

    #[test]
    fn parse_ignores_params() {
        let line = ContentLine::parse("DTSTART;VALUE=DATE:20240601");
        assert_eq!(line.name, "DTSTART");
        assert_eq!(line.value, "20240601");
    }

    #[test]
    fn parse_keeps_later_colons_in_value() {
        let line = ContentLine::parse("DESCRIPTION:Check-in: 15:00");
        assert_eq!(line.name, "DESCRIPTION");
        assert_eq!(line.value, "Check-in: 15:00");
    }

    #[test]
    fn parse_line_without_colon() {
        let line = ContentLine::parse("continuation text");
        assert_eq!(line.name, "continuation text");
        assert_eq!(line.value, "");
    }

    #[test]
    fn parse_is_case_sensitive() {
        let line = ContentLine::parse("uid:abc");
        assert_eq!(line.name, "uid");
    }
}
