/// The subset of a `VEVENT` needed to build a reservation.
///
/// Values are kept raw, apart from `description`, whose `\n` escapes are
/// decoded during extraction.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CalendarEvent {
    pub uid: Option<String>,
    pub dtstart: Option<String>,
    pub dtend: Option<String>,
    pub summary: Option<String>,
    pub description: Option<String>,
}

impl CalendarEvent {
    /// An event is usable only when `UID`, `DTSTART` and `DTEND` are all non-empty.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        [&self.uid, &self.dtstart, &self.dtend]
            .into_iter()
            .all(|field| field.as_deref().is_some_and(|value| !value.is_empty()))
    }

    /// `SUMMARY`, treating an empty value as absent.
    #[must_use]
    pub fn summary(&self) -> Option<&str> {
        self.summary.as_deref().filter(|s| !s.is_empty())
    }

    /// `DESCRIPTION`, treating an empty value as absent.
    #[must_use]
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref().filter(|s| !s.is_empty())
    }
}
