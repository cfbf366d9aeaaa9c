//! Content line lexer for booking-platform iCalendar feeds (RFC 5545 §3.1).
//!
//! Handles line unfolding and splitting into physical lines.

/// CRLF followed by the single space that marks a folded continuation.
const FOLD: &str = "\r\n ";

/// Unfolds content lines by removing every CRLF that is followed by a space.
///
/// Only the exact `CRLF SPACE` sequence is treated as a fold:
/// - A tab after CRLF is left in place.
/// - Bare LF continuations are left in place, so LF-only feeds pass through
///   unchanged and their continuation lines are later read as lines of
///   their own.
///
/// The result contains no `CRLF SPACE` sequence, so unfolding twice gives the
/// same text as unfolding once.
#[must_use]
pub fn unfold(input: &str) -> String {
    let mut result = String::with_capacity(input.len());

    for c in input.chars() {
        result.push(c);
        // A removal can expose an earlier CRLF to a following space
        if c == ' ' && result.ends_with(FOLD) {
            result.truncate(result.len() - FOLD.len());
        }
    }

    result
}

/// Splits unfolded text into physical lines on CRLF or bare LF.
pub fn split_lines(input: &str) -> impl Iterator<Item = &str> {
    input.lines()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unfold_joins_folded_description() {
        let input = "DESCRIPTION:GUEST: Maria Lo\r\n pez\\nPhone: +57 300";
        assert_eq!(unfold(input), "DESCRIPTION:GUEST: Maria Lopez\\nPhone: +57 300");
    }

    #[test]
    fn unfold_joins_every_continuation() {
        let input = "UID:1418fb94e984-\r\n 0af3a4b2@airbnb\r\n .com";
        assert_eq!(unfold(input), "UID:1418fb94e984-0af3a4b2@airbnb.com");
    }

    #[test]
    fn unfold_removes_only_one_space() {
        let input = "SUMMARY:John\r\n  Smith";
        assert_eq!(unfold(input), "SUMMARY:John Smith");
    }

    #[test]
    fn unfold_leaves_bare_lf_continuation() {
        let input = "DESCRIPTION:Check-in 15:00\n Check-out 11:00";
        assert_eq!(unfold(input), input);
    }

    #[test]
    fn unfold_leaves_tab_continuation() {
        let input = "DESCRIPTION:Check-in 15:00\r\n\tCheck-out 11:00";
        assert_eq!(unfold(input), input);
    }

    #[test]
    fn unfold_keeps_unfolded_line_breaks() {
        let input = "DTSTART;VALUE=DATE:20240601\r\nDTEND;VALUE=DATE:20240605\r\n";
        assert_eq!(unfold(input), input);
    }

    #[test]
    fn unfold_empty() {
        assert_eq!(unfold(""), "");
    }

    #[test]
    fn unfold_is_idempotent() {
        let inputs = [
            "BEGIN:VEVENT\r\nSUMMARY:Long\r\n  name\r\nEND:VEVENT\r\n",
            "A:1\r\n\r\n  B",
            "\r\n\r\n\r\n   ",
            "plain text",
        ];

        for input in inputs {
            let once = unfold(input);
            assert!(!once.contains(FOLD), "fold left in {once:?}");
            assert_eq!(unfold(&once), once);
        }
    }

    #[test]
    fn split_lines_handles_crlf_and_lf() {
        let lines: Vec<&str> = split_lines("A:1\r\nB:2\nC:3").collect();
        assert_eq!(lines, vec!["A:1", "B:2", "C:3"]);
    }
}
