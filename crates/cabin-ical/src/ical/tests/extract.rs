use super::fixtures::*;
use crate::ical::core::CalendarEvent;
use crate::ical::parse::{extract_events, unfold};

fn extract(feed: &str) -> Vec<CalendarEvent> {
    extract_events(&unfold(feed)).events
}

fn uids(events: &[CalendarEvent]) -> Vec<&str> {
    events.iter().filter_map(|e| e.uid.as_deref()).collect()
}

#[test_log::test]
fn airbnb_feed_extracts_all_events() {
    let events = extract(AIRBNB_FEED);

    assert_eq!(
        uids(&events),
        vec![
            "1418fb94e984-a1b2c3@airbnb.com",
            "1418fb94e984-d4e5f6@airbnb.com"
        ]
    );
    assert_eq!(events[0].dtstart.as_deref(), Some("20240601"));
    assert_eq!(events[0].dtend.as_deref(), Some("20240605"));
    assert_eq!(events[1].summary.as_deref(), Some("Airbnb (Not available)"));
}

#[test]
fn folded_description_is_joined_and_decoded() {
    let events = extract(AIRBNB_FEED);

    assert_eq!(
        events[0].description.as_deref(),
        Some(
            "Reservation URL: https://www.airbnb.com/hosting/reservations/details/HMABCDEF\n\
             Phone Number (Last 4 Digits): 1234"
        )
    );
}

#[test]
fn header_before_first_event_is_ignored() {
    let feed = "BEGIN:VCALENDAR\r\nUID:calendar-level\r\nDTSTART:20240101\r\nDTEND:20240102\r\n";
    let extraction = extract_events(&unfold(feed));

    assert!(extraction.events.is_empty());
    assert_eq!(extraction.blocks, 0);
}

#[test_log::test]
fn incomplete_events_are_dropped() {
    let extraction = extract_events(&unfold(FEED_WITH_INCOMPLETE_EVENT));

    assert_eq!(uids(&extraction.events), vec!["first", "third"]);
    assert_eq!(extraction.blocks, 3);
    assert_eq!(extraction.dropped(), 1);
}

#[test]
fn completeness_filter_counts() {
    let complete = "BEGIN:VEVENT\r\nUID:u\r\nDTSTART:20240101\r\nDTEND:20240102\r\nEND:VEVENT\r\n";
    let missing = [
        "BEGIN:VEVENT\r\nDTSTART:20240101\r\nDTEND:20240102\r\nEND:VEVENT\r\n",
        "BEGIN:VEVENT\r\nUID:u\r\nDTEND:20240102\r\nEND:VEVENT\r\n",
        "BEGIN:VEVENT\r\nUID:u\r\nDTSTART:20240101\r\nEND:VEVENT\r\n",
    ];

    let mut feed = String::from("BEGIN:VCALENDAR\r\n");
    for i in 0..7 {
        if i % 3 == 0 {
            feed.push_str(missing[i / 3]);
        } else {
            feed.push_str(complete);
        }
    }
    feed.push_str("END:VCALENDAR\r\n");

    // Blocks 0, 3 and 6 are incomplete
    let extraction = extract_events(&unfold(&feed));
    assert_eq!(extraction.blocks, 7);
    assert_eq!(extraction.events.len(), 4);
    assert_eq!(extraction.dropped(), 3);
}

#[test]
fn empty_values_count_as_missing() {
    let feed = single_event(&["UID:", "DTSTART:20240101", "DTEND:20240102"]);
    assert!(extract(&feed).is_empty());
}

#[test]
fn later_property_overwrites_earlier() {
    let feed = single_event(&[
        "UID:first",
        "UID:second",
        "DTSTART:20240101",
        "DTEND:20240102",
    ]);
    assert_eq!(uids(&extract(&feed)), vec!["second"]);
}

#[test]
fn unterminated_event_is_dropped() {
    let feed = "BEGIN:VEVENT\r\nUID:a\r\nDTSTART:20240101\r\nDTEND:20240102\r\n";
    let extraction = extract_events(&unfold(feed));

    assert!(extraction.events.is_empty());
    assert_eq!(extraction.dropped(), 1);
}

#[test]
fn nested_alarm_end_does_not_close_event() {
    let feed = single_event(&[
        "UID:with-alarm",
        "DTSTART:20240101",
        "BEGIN:VALARM",
        "ACTION:DISPLAY",
        "END:VALARM",
        "DTEND:20240102",
    ]);
    assert_eq!(uids(&extract(&feed)), vec!["with-alarm"]);
}

#[test]
fn lowercase_property_names_are_not_recognized() {
    let feed = single_event(&["uid:abc", "DTSTART:20240101", "DTEND:20240102"]);
    assert!(extract(&feed).is_empty());
}

#[test]
fn lf_only_feed_is_parsed() {
    let feed = "BEGIN:VEVENT\nUID:lf\nDTSTART:20240101\nDTEND:20240102\nSUMMARY:Ana\nEND:VEVENT\n";
    let events = extract(feed);

    assert_eq!(uids(&events), vec!["lf"]);
    assert_eq!(events[0].summary.as_deref(), Some("Ana"));
}

#[test]
fn lf_folded_continuation_is_not_joined() {
    let feed = "BEGIN:VEVENT\nUID:lf\nDTSTART:20240101\nDTEND:20240102\nSUMMARY:Ana\n García\nEND:VEVENT\n";
    let events = extract(feed);

    assert_eq!(events[0].summary.as_deref(), Some("Ana"));
}

#[test]
fn order_follows_feed() {
    let events = extract(BOOKING_FEED);
    assert_eq!(
        uids(&events),
        vec!["b0c1d2e3@booking.com", "f4a5b6c7@booking.com"]
    );
}
