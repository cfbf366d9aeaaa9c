//! iCalendar parsing: unfolding, line splitting and event extraction.

mod extract;
mod lexer;

pub use extract::extract_events;
pub use lexer::unfold;
