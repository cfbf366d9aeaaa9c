//! Calendar feed ingestion for the cabin manager.
//!
//! Turns the `.ics` exports of booking platforms (Airbnb, Booking.com, ...)
//! into [`ReservationRecord`]s. Everything here is a pure function over its
//! input: no I/O, no shared state, and no failure path. Malformed input
//! degrades to fewer records or placeholder values instead of errors.

mod ical;
mod reservation;

pub use cabin_core::types::{ReservationRecord, ReservationSource};
pub use ical::parse::unfold;
pub use reservation::{
    GuestNameRules, Projection, normalize_date, normalize_date_or, project, project_with_report,
    project_with_rules,
};
