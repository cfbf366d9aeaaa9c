/// Marker that introduces an explicit guest name inside an event description.
pub const DEFAULT_GUEST_MARKER: &str = "GUEST:";

/// Summaries that calendar exporters use for blocked or anonymous nights.
pub const DEFAULT_RESERVED_PHRASES: &[&str] = &["reserved", "not available", "closed", "bloqueado"];

/// Display name used when no guest name can be derived.
pub const DEFAULT_GUEST_FALLBACK: &str = "Reservado";

/// Canonical calendar-date format of reservation check-in/check-out.
pub const DATE_FORMAT: &str = "%Y-%m-%d";
