//! Request and response bodies for the OTP login endpoints.

use serde::{Deserialize, Serialize};

/// Body for the send-OTP endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SendOtpRequest {
    /// Address the one-time passcode is delivered to.
    pub email: String,
}

impl SendOtpRequest {
    /// Creates a send-OTP request for the given address.
    #[inline]
    #[must_use]
    pub fn new<T: Into<String>>(email: T) -> Self {
        Self {
            email: email.into(),
        }
    }
}

/// Body for the verify-OTP endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VerifyOtpRequest {
    /// Address the passcode was sent to.
    pub email: String,
    /// The passcode the user typed.
    pub otp: String,
}

impl VerifyOtpRequest {
    /// Creates a verify-OTP request.
    #[inline]
    #[must_use]
    pub fn new<E: Into<String>, O: Into<String>>(email: E, otp: O) -> Self {
        Self {
            email: email.into(),
            otp: otp.into(),
        }
    }
}

/// Generic `{"message": "..."}` acknowledgement returned by several
/// endpoints (send-OTP, mark-all-read, deletes).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiMessage {
    /// Human-readable acknowledgement text.
    pub message: String,
}
