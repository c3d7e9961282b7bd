//! Booking slice.
//!
//! One `bookings` field serves both the "my bookings" and "vendor's
//! bookings" views — the two fetches are mutually exclusive in practice
//! and the last one to settle wins. The slice records which scope
//! populated the cache so views can label it.

use crate::models::Booking;
use crate::state::Slice;

/// Which fetch last populated the booking cache.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BookingScope {
    /// The current user's own bookings.
    User,
    /// Bookings addressed to a vendor.
    Vendor,
}

/// Transitions of the booking slice.
#[derive(Debug, Clone)]
pub enum BookingAction {
    /// A list fetch (either scope) issued.
    FetchPending,
    /// A list fetch succeeded for the given scope.
    FetchFulfilled {
        /// Which view requested the list.
        scope: BookingScope,
        /// The fetched bookings.
        bookings: Vec<Booking>,
    },
    /// A list fetch failed.
    FetchRejected(String),
    /// Create-booking issued.
    CreatePending,
    /// Create-booking succeeded; the record is appended to the cache.
    CreateFulfilled(Box<Booking>),
    /// Create-booking failed.
    CreateRejected(String),
    /// Status change issued.
    StatusPending,
    /// Status change succeeded; the matching record is replaced in
    /// place. A record whose id is not cached is NOT inserted.
    StatusFulfilled(Box<Booking>),
    /// Status change failed.
    StatusRejected(String),
}

/// Booking list state.
#[derive(Debug, Default)]
pub struct BookingState {
    /// The cached bookings of whichever scope last fetched.
    pub bookings: Vec<Booking>,
    /// Scope of the cached list, `None` until the first fetch settles.
    pub scope: Option<BookingScope>,
    /// Whether an operation is in flight.
    pub loading: bool,
    /// Last error message, cleared when a new operation starts.
    pub error: Option<String>,
}

impl Slice for BookingState {
    type Action = BookingAction;

    fn apply(&mut self, action: BookingAction) {
        match action {
            BookingAction::FetchPending
            | BookingAction::CreatePending
            | BookingAction::StatusPending => {
                self.loading = true;
                self.error = None;
            }
            BookingAction::FetchFulfilled { scope, bookings } => {
                self.loading = false;
                self.scope = Some(scope);
                self.bookings = bookings;
            }
            BookingAction::CreateFulfilled(booking) => {
                self.loading = false;
                self.bookings.push(*booking);
            }
            BookingAction::StatusFulfilled(booking) => {
                self.loading = false;
                if let Some(slot) = self.bookings.iter_mut().find(|b| b.id == booking.id) {
                    *slot = *booking;
                }
            }
            BookingAction::FetchRejected(message)
            | BookingAction::CreateRejected(message)
            | BookingAction::StatusRejected(message) => {
                self.loading = false;
                self.error = Some(message);
            }
        }
    }
}
