//! Aggregate statistics shown on the admin dashboard.

use serde::{Deserialize, Serialize};

/// Counters returned by the admin stats endpoint. Missing counters
/// default to zero.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdminStats {
    /// Total event listings.
    #[serde(default)]
    pub total_events: u64,
    /// Total vendors.
    #[serde(default)]
    pub total_vendors: u64,
    /// Total categories.
    #[serde(default)]
    pub total_categories: u64,
    /// Events with status `upcoming`.
    #[serde(default)]
    pub upcoming_events: u64,
    /// Total bookings.
    #[serde(default)]
    pub total_bookings: u64,
    /// Bookings with status `pending`.
    #[serde(default)]
    pub pending_bookings: u64,
}
