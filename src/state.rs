//! Client-side state: five independent slices and their composition.
//!
//! Each slice is a pure reducer over its own cache plus a loading flag
//! and an error value. Async operations dispatch three outcomes:
//! *pending* (loading on, error cleared), *fulfilled* (cache replaced or
//! patched), *rejected* (error recorded, prior cache left untouched —
//! stale-but-present, never rolled back to empty). Side effects (HTTP,
//! profile persistence) live in [`crate::store`], not here.
//!
//! [`AppState`] is the explicit composition of the five slices. It is an
//! ordinary owned value created at process start and passed into view
//! bindings — there is no global store.

mod auth;
mod booking;
mod category;
mod notification;
mod vendor;

pub use auth::{AuthAction, AuthState};
pub use booking::{BookingAction, BookingScope, BookingState};
pub use category::{CategoryAction, CategoryState, demo_categories};
pub use notification::{NotificationAction, NotificationState};
pub use vendor::{VendorAction, VendorState};

/// A state slice: a pure reducer over one entity cache.
///
/// `apply` must not perform I/O; it only folds an action into the state.
pub trait Slice: core::fmt::Debug + Default {
    /// All recognized transitions of this slice.
    type Action;

    /// Folds one action into the state.
    fn apply(&mut self, action: Self::Action);
}

/// The whole application state: the five slices, composed.
#[derive(Debug, Default)]
pub struct AppState {
    /// Session and profile slice.
    pub auth: AuthState,
    /// Category list slice.
    pub category: CategoryState,
    /// Vendor list + selected-vendor slice.
    pub vendor: VendorState,
    /// Booking list slice (one scope at a time).
    pub booking: BookingState,
    /// Notification list + unread-count slice.
    pub notification: NotificationState,
}

/// Any action of any slice, for dispatch through the composed state.
#[derive(Debug, Clone)]
pub enum Action {
    /// An auth slice action.
    Auth(AuthAction),
    /// A category slice action.
    Category(CategoryAction),
    /// A vendor slice action.
    Vendor(VendorAction),
    /// A booking slice action.
    Booking(BookingAction),
    /// A notification slice action.
    Notification(NotificationAction),
}

impl Slice for AppState {
    type Action = Action;

    #[inline]
    fn apply(&mut self, action: Action) {
        match action {
            Action::Auth(inner) => self.auth.apply(inner),
            Action::Category(inner) => self.category.apply(inner),
            Action::Vendor(inner) => self.vendor.apply(inner),
            Action::Booking(inner) => self.booking.apply(inner),
            Action::Notification(inner) => self.notification.apply(inner),
        }
    }
}

impl AppState {
    /// Creates the initial (empty, unauthenticated) application state.
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}
