//! iCalendar models used during extraction.

mod content_line;
mod event;

pub use content_line::ContentLine;
pub use event::CalendarEvent;
