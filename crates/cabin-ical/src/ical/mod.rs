//! Minimal iCalendar (RFC 5545) reading for booking-platform feeds.
//!
//! Only the `VEVENT` properties a reservation needs are read. Everything
//! else in the feed is skipped.

pub mod core;
pub mod parse;

#[cfg(test)]
pub(crate) mod tests;
