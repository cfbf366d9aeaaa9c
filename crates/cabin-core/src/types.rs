//! Reservation domain types shared by the parser and the front ends.

use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::constants::DATE_FORMAT;
use crate::error::{CoreError, CoreResult};

/// Upstream platform that produced a batch of reservations.
///
/// Supplied by the caller, never derived from feed content.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ReservationSource {
    Airbnb,
    #[serde(rename = "Booking.com")]
    Booking,
    #[serde(rename = "Directo")]
    Direct,
}

impl ReservationSource {
    pub const ALL: [Self; 3] = [Self::Airbnb, Self::Booking, Self::Direct];

    /// Wire label stored by the backend.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Airbnb => "Airbnb",
            Self::Booking => "Booking.com",
            Self::Direct => "Directo",
        }
    }

    const fn variant_name(self) -> &'static str {
        match self {
            Self::Airbnb => "Airbnb",
            Self::Booking => "Booking",
            Self::Direct => "Direct",
        }
    }

    /// Whether reservations from this source arrive through a calendar feed.
    #[must_use]
    pub const fn is_synced(self) -> bool {
        !matches!(self, Self::Direct)
    }
}

impl std::fmt::Display for ReservationSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ReservationSource {
    type Err = CoreError;

    /// Accepts either the wire label (`Booking.com`) or the variant name
    /// (`booking`), ignoring ASCII case.
    fn from_str(s: &str) -> CoreResult<Self> {
        let s = s.trim();
        Self::ALL
            .into_iter()
            .find(|source| {
                source.as_str().eq_ignore_ascii_case(s) || source.variant_name().eq_ignore_ascii_case(s)
            })
            .ok_or_else(|| CoreError::InvalidInput(format!("unknown reservation source '{s}'")))
    }
}

/// How the guest settled the stay. Filled in by a human editor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PaymentMethod {
    #[serde(rename = "Efectivo")]
    Cash,
    Nequi,
    Daviplata,
    Paypal,
    #[serde(rename = "Otro")]
    Other,
}

/// A reservation as persisted by the backend and shown by the dashboard.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReservationRecord {
    /// Opaque identifier. For calendar-derived records this is the event `UID`.
    pub id: String,
    pub guest_name: String,
    /// `YYYY-MM-DD`
    pub check_in: String,
    /// `YYYY-MM-DD`
    pub check_out: String,
    pub source: ReservationSource,
    pub total_paid: f64,
    pub commission: f64,
    pub taxes: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payment_method: Option<PaymentMethod>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub guest_count: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub guest_phone: Option<String>,
}

impl ReservationRecord {
    /// Builds a record for a stay imported from a calendar feed.
    ///
    /// Feeds carry no money, so every financial field starts at zero.
    #[must_use]
    pub fn from_calendar(
        id: impl Into<String>,
        guest_name: impl Into<String>,
        check_in: impl Into<String>,
        check_out: impl Into<String>,
        source: ReservationSource,
    ) -> Self {
        Self {
            id: id.into(),
            guest_name: guest_name.into(),
            check_in: check_in.into(),
            check_out: check_out.into(),
            source,
            total_paid: 0.0,
            commission: 0.0,
            taxes: 0.0,
            payment_method: None,
            guest_count: None,
            guest_phone: None,
        }
    }

    /// Number of nights between check-in and check-out.
    ///
    /// `None` when either date is not a real calendar date.
    #[must_use]
    pub fn nights(&self) -> Option<i64> {
        let check_in = NaiveDate::parse_from_str(&self.check_in, DATE_FORMAT).ok()?;
        let check_out = NaiveDate::parse_from_str(&self.check_out, DATE_FORMAT).ok()?;
        Some((check_out - check_in).num_days())
    }
}
