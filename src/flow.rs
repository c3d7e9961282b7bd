//! Login and checkout flows as explicit finite-state machines.
//!
//! Each flow is a pure transition table over named states: the caller
//! performs the effectful step through the store, then feeds the outcome
//! back as an event. An event that is not valid for the current state
//! leaves the state unchanged, so a double-fired callback or an
//! out-of-order step cannot corrupt the flow.

use chrono::NaiveDate;

use crate::error::{Result, SlotifyError};
use crate::models::{BookingId, BookingStatus, CreateBookingRequest, PaymentOrder, VendorId};

/// Message surfaced when a payment was captured but the booking record
/// could not be created — an inconsistency the client cannot resolve.
pub const CONTACT_SUPPORT_MESSAGE: &str =
    "Payment successful but booking creation failed. Please contact support.";

// ── Login flow ──────────────────────────────────────────────────────────

/// States of the OTP login flow.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoginFlow {
    /// Waiting for the user to enter an email address.
    AwaitingEmail,
    /// An OTP was sent; waiting for the code.
    AwaitingOtp {
        /// Address the code was sent to.
        email: String,
    },
    /// The code was verified and a session exists.
    Authenticated,
}

/// Events fed into the login flow.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoginEvent {
    /// The send-OTP call resolved for this address. Also valid while
    /// already awaiting a code (re-send, or changed email).
    OtpSent {
        /// Address the code was sent to.
        email: String,
    },
    /// The verify-OTP call resolved.
    OtpVerified,
    /// Start over (logout, or "change email").
    Reset,
}

impl LoginFlow {
    /// Folds one event into the flow. Invalid state/event pairs leave
    /// the state unchanged.
    #[inline]
    #[must_use]
    pub fn on(self, event: LoginEvent) -> Self {
        match (self, event) {
            // Transition table
            (Self::AwaitingEmail | Self::AwaitingOtp { .. }, LoginEvent::OtpSent { email }) => {
                Self::AwaitingOtp { email }
            }
            (Self::AwaitingOtp { .. }, LoginEvent::OtpVerified) => Self::Authenticated,
            (
                Self::AwaitingEmail | Self::AwaitingOtp { .. } | Self::Authenticated,
                LoginEvent::Reset,
            ) => Self::AwaitingEmail,
            // Invalid pairs: stay
            (state @ Self::Authenticated, LoginEvent::OtpSent { .. })
            | (state @ (Self::AwaitingEmail | Self::Authenticated), LoginEvent::OtpVerified) => {
                state
            }
        }
    }

    /// Returns `true` once the flow reached [`LoginFlow::Authenticated`].
    #[inline]
    #[must_use]
    pub const fn is_authenticated(&self) -> bool {
        matches!(self, Self::Authenticated)
    }

    /// Returns the email an OTP is pending for, if any.
    #[inline]
    #[must_use]
    pub fn pending_email(&self) -> Option<&str> {
        match self {
            Self::AwaitingOtp { email } => Some(email.as_str()),
            Self::AwaitingEmail | Self::Authenticated => None,
        }
    }
}

impl Default for LoginFlow {
    #[inline]
    fn default() -> Self {
        Self::AwaitingEmail
    }
}

// ── Checkout flow ───────────────────────────────────────────────────────

/// States of the booking-with-payment flow.
///
/// The paid path walks `Filling → OrderCreated → Verifying →
/// BookingCreated | Failed`; the pay-later path jumps from `Filling`
/// straight to `BookingCreated`.
#[derive(Debug, Clone, PartialEq)]
pub enum CheckoutFlow {
    /// Collecting form fields; nothing sent yet.
    Filling,
    /// A payment order exists and the widget owns the interaction.
    OrderCreated {
        /// The provider order handed to the widget.
        order: PaymentOrder,
    },
    /// The widget called back; the backend is verifying the signature.
    Verifying,
    /// Terminal: the booking record exists.
    BookingCreated {
        /// Id of the created booking.
        booking_id: BookingId,
    },
    /// Terminal: the flow aborted. No booking was created unless the
    /// message is [`CONTACT_SUPPORT_MESSAGE`].
    Failed {
        /// What went wrong, shown as a blocking alert.
        message: String,
    },
}

/// Events fed into the checkout flow.
#[derive(Debug, Clone, PartialEq)]
pub enum CheckoutEvent {
    /// The create-order call resolved.
    OrderPlaced(Box<PaymentOrder>),
    /// The payment widget invoked its callback.
    CallbackReceived,
    /// The booking record was created (verified payment, or pay-later).
    BookingConfirmed(BookingId),
    /// A step was rejected; the flow aborts with no compensation.
    StepFailed(String),
}

impl CheckoutFlow {
    /// Folds one event into the flow. Invalid state/event pairs leave
    /// the state unchanged; terminal states ignore everything.
    #[inline]
    #[must_use]
    pub fn on(self, event: CheckoutEvent) -> Self {
        match (self, event) {
            // Transition table
            (Self::Filling, CheckoutEvent::OrderPlaced(order)) => {
                Self::OrderCreated { order: *order }
            }
            (Self::OrderCreated { .. }, CheckoutEvent::CallbackReceived) => Self::Verifying,
            (Self::Filling | Self::Verifying, CheckoutEvent::BookingConfirmed(booking_id)) => {
                Self::BookingCreated { booking_id }
            }
            (
                Self::Filling | Self::OrderCreated { .. } | Self::Verifying,
                CheckoutEvent::StepFailed(message),
            ) => Self::Failed { message },
            // Invalid pairs and terminal states: stay
            (
                state @ (Self::OrderCreated { .. }
                | Self::Verifying
                | Self::BookingCreated { .. }
                | Self::Failed { .. }),
                CheckoutEvent::OrderPlaced(_),
            )
            | (
                state @ (Self::Filling
                | Self::Verifying
                | Self::BookingCreated { .. }
                | Self::Failed { .. }),
                CheckoutEvent::CallbackReceived,
            )
            | (
                state @ (Self::OrderCreated { .. }
                | Self::BookingCreated { .. }
                | Self::Failed { .. }),
                CheckoutEvent::BookingConfirmed(_),
            )
            | (
                state @ (Self::BookingCreated { .. } | Self::Failed { .. }),
                CheckoutEvent::StepFailed(_),
            ) => state,
        }
    }

    /// Returns `true` for the two terminal states.
    #[inline]
    #[must_use]
    pub const fn is_terminal(&self) -> bool {
        matches!(self, Self::BookingCreated { .. } | Self::Failed { .. })
    }

    /// Returns the failure message if the flow aborted.
    #[inline]
    #[must_use]
    pub fn failure_message(&self) -> Option<&str> {
        match self {
            Self::Failed { message } => Some(message.as_str()),
            Self::Filling
            | Self::OrderCreated { .. }
            | Self::Verifying
            | Self::BookingCreated { .. } => None,
        }
    }
}

impl Default for CheckoutFlow {
    #[inline]
    fn default() -> Self {
        Self::Filling
    }
}

// ── Booking form validation ─────────────────────────────────────────────

/// The five booking form fields, as entered (all strings, like the
/// form itself).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BookingForm {
    /// Customer name (required).
    pub user_name: String,
    /// Customer email (required).
    pub user_email: String,
    /// Customer phone (optional).
    pub user_phone: String,
    /// Event date, `YYYY-MM-DD` (required).
    pub event_date: String,
    /// Special requests (optional).
    pub notes: String,
}

impl BookingForm {
    /// Validates the required fields and produces a create-booking
    /// request with the given vendor and initial status.
    ///
    /// This is the local check guarding the pay-later path: an empty
    /// name, email, or event date is rejected before any network call.
    ///
    /// # Errors
    ///
    /// Returns [`SlotifyError::Validation`] naming the first missing or
    /// malformed required field.
    pub fn validate(
        &self,
        vendor_id: VendorId,
        status: BookingStatus,
    ) -> Result<CreateBookingRequest> {
        if self.user_name.trim().is_empty() {
            return Err(SlotifyError::Validation { field: "userName" });
        }
        if self.user_email.trim().is_empty() {
            return Err(SlotifyError::Validation { field: "userEmail" });
        }
        if self.event_date.trim().is_empty() {
            return Err(SlotifyError::Validation { field: "eventDate" });
        }
        let event_date = NaiveDate::parse_from_str(self.event_date.trim(), "%Y-%m-%d")
            .map_err(|_| SlotifyError::Validation { field: "eventDate" })?;

        let phone = self.user_phone.trim();
        let notes = self.notes.trim();
        Ok(CreateBookingRequest {
            vendor_id,
            user_name: self.user_name.trim().to_owned(),
            user_email: self.user_email.trim().to_owned(),
            user_phone: (!phone.is_empty()).then(|| phone.to_owned()),
            event_date,
            notes: (!notes.is_empty()).then(|| notes.to_owned()),
            status,
        })
    }
}
