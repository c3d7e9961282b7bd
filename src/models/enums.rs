//! Enumeration types for constrained API values.

use serde::{Deserialize, Serialize};

/// Lifecycle status of a booking.
///
/// `Pending` is the initial state for pay-later bookings; paid bookings
/// are created directly as `Confirmed`. Only the vendor (or an admin)
/// moves a booking out of `Pending`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BookingStatus {
    /// Awaiting vendor confirmation.
    Pending,
    /// Accepted by the vendor (or created via a verified payment).
    Confirmed,
    /// Rejected or withdrawn.
    Cancelled,
}

impl BookingStatus {
    /// Returns the lowercase wire representation.
    #[inline]
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Confirmed => "confirmed",
            Self::Cancelled => "cancelled",
        }
    }
}

/// Admin-set status of an event listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EventStatus {
    /// Scheduled for a future date.
    Upcoming,
    /// Currently running.
    Ongoing,
    /// Finished.
    Completed,
    /// Called off.
    Cancelled,
}

impl Default for EventStatus {
    #[inline]
    fn default() -> Self {
        Self::Upcoming
    }
}
