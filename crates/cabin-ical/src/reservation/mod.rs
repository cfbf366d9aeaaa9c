//! Projection of calendar events into reservation records.

mod date;
mod guest;
mod project;

pub use date::{normalize_date, normalize_date_or};
pub use guest::GuestNameRules;
pub use project::{Projection, project, project_with_report, project_with_rules};
