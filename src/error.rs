//! Error types for the Slotify client library.

/// All errors that can occur when using the Slotify client.
#[derive(Debug, thiserror::Error)]
pub enum SlotifyError {
    /// Underlying HTTP transport failed (connection, TLS, timeout).
    #[cfg(any(feature = "async", feature = "blocking"))]
    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),

    /// The backend rejected the request with a non-success status.
    ///
    /// `message` is taken from the JSON body's `message` field when
    /// present, otherwise a generic fallback string.
    #[error("api error ({status}): {message}")]
    Api {
        /// HTTP status code returned by the backend.
        status: u16,
        /// Human-readable message extracted from the response body.
        message: String,
    },

    /// JSON serialization or deserialization failed.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Profile storage backend failed.
    #[error("profile storage error: {0}")]
    Storage(Box<dyn core::error::Error + Send + Sync>),

    /// A required booking field was empty at local validation time.
    #[error("validation failed: {field} is required")]
    Validation {
        /// Name of the offending form field.
        field: &'static str,
    },

    /// The payment verify endpoint answered with something other than
    /// the expected success message; no booking was created.
    #[error("payment not verified: {message}")]
    PaymentNotVerified {
        /// Message the verify endpoint actually returned.
        message: String,
    },

    /// The operation requires an authenticated session and none exists.
    #[error("not authenticated: no profile is stored")]
    NotAuthenticated,
}

/// Convenience alias used throughout the crate.
pub type Result<T> = core::result::Result<T, SlotifyError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_from_serde_json() {
        let serde_err = serde_json::from_str::<String>("not json").unwrap_err();
        let err = SlotifyError::from(serde_err);
        assert!(matches!(err, SlotifyError::Serialization(_)));
        let msg = err.to_string();
        assert!(msg.contains("serialization error"));
    }

    #[test]
    fn error_api_display() {
        let err = SlotifyError::Api {
            status: 401,
            message: "Invalid OTP".to_owned(),
        };
        let msg = err.to_string();
        assert!(msg.contains("401"));
        assert!(msg.contains("Invalid OTP"));
    }

    #[test]
    fn error_storage_display() {
        let inner = std::io::Error::new(std::io::ErrorKind::NotFound, "file missing");
        let err = SlotifyError::Storage(Box::new(inner));
        let msg = err.to_string();
        assert!(msg.contains("profile storage error"));
        assert!(msg.contains("file missing"));
    }

    #[test]
    fn error_validation_display() {
        let err = SlotifyError::Validation { field: "userName" };
        assert!(err.to_string().contains("userName"));
    }

    #[test]
    fn error_payment_not_verified_display() {
        let err = SlotifyError::PaymentNotVerified {
            message: "Signature mismatch".to_owned(),
        };
        let msg = err.to_string();
        assert!(msg.contains("payment not verified"));
        assert!(msg.contains("Signature mismatch"));
    }

    #[test]
    fn error_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<SlotifyError>();
    }
}
