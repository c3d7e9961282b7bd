//! Payment order and verification bodies.
//!
//! The client never trusts the provider callback directly: the signed
//! payload is forwarded to the backend verify endpoint, and a booking is
//! created only when the verify response carries the exact success
//! message.

use serde::{Deserialize, Serialize};

use super::OrderId;

/// Exact message the verify endpoint returns for a successful payment.
/// Anything else means the booking must not be created.
pub const PAYMENT_VERIFIED_MESSAGE: &str = "Payment verified successfully";

/// Body for the create-order endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CreateOrderRequest {
    /// Amount in the display currency unit (the backend converts to the
    /// provider's subunit).
    pub amount: f64,
}

/// A payment order issued by the provider, handed to the payment widget.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaymentOrder {
    /// Provider-assigned order id.
    pub id: OrderId,
    /// Amount in the provider's currency subunit.
    pub amount: i64,
    /// ISO currency code.
    pub currency: String,
}

/// Provider-signed payload delivered to the payment widget callback,
/// forwarded verbatim to the backend for signature verification.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaymentCallback {
    /// Order id echoed by the provider.
    pub razorpay_order_id: String,
    /// Provider-assigned payment id.
    pub razorpay_payment_id: String,
    /// Provider signature over order id + payment id.
    pub razorpay_signature: String,
}

/// Response of the verify endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VerifyPaymentResponse {
    /// Verification outcome text; compare against
    /// [`PAYMENT_VERIFIED_MESSAGE`].
    pub message: String,
}

impl VerifyPaymentResponse {
    /// Returns `true` only for the exact success message.
    #[inline]
    #[must_use]
    pub fn is_verified(&self) -> bool {
        self.message == PAYMENT_VERIFIED_MESSAGE
    }
}
