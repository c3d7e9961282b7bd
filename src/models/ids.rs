//! Newtype wrappers for entity identifiers.
//!
//! Every Slotify entity is keyed by a backend-assigned object id
//! (serialized as a plain string). Wrapping each in its own type
//! prevents accidentally mixing up ids of different entity types at
//! compile time.

use serde::{Deserialize, Serialize};

/// Macro to define a newtype ID wrapping a `String` inner type.
macro_rules! define_string_id {
    (
        $(#[$meta:meta])*
        $name:ident
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            /// Creates a new identifier from the given string.
            #[inline]
            #[must_use]
            pub const fn new(value: String) -> Self {
                Self(value)
            }

            /// Returns a reference to the inner string.
            #[inline]
            #[must_use]
            pub fn as_inner(&self) -> &str {
                &self.0
            }

            /// Consumes the wrapper and returns the inner string.
            #[inline]
            #[must_use]
            pub fn into_inner(self) -> String {
                self.0
            }
        }

        impl core::fmt::Display for $name {
            #[inline]
            fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
                core::fmt::Display::fmt(&self.0, f)
            }
        }

        impl From<String> for $name {
            #[inline]
            fn from(value: String) -> Self {
                Self(value)
            }
        }

        impl From<&str> for $name {
            #[inline]
            fn from(value: &str) -> Self {
                Self(value.to_owned())
            }
        }
    };
}

define_string_id! {
    /// Unique identifier for a user.
    UserId
}

define_string_id! {
    /// Unique identifier for a vendor category.
    CategoryId
}

define_string_id! {
    /// Unique identifier for a vendor.
    VendorId
}

define_string_id! {
    /// Unique identifier for a booking.
    BookingId
}

define_string_id! {
    /// Unique identifier for a notification.
    NotificationId
}

define_string_id! {
    /// Unique identifier for an event (admin surface).
    EventId
}

define_string_id! {
    /// Unique identifier for a payment order issued by the provider.
    OrderId
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn category_id_serde_roundtrip() {
        let id = CategoryId::new("507f1f77bcf86cd799439011".to_owned());
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, r#""507f1f77bcf86cd799439011""#);
        let deserialized: CategoryId = serde_json::from_str(&json).unwrap();
        assert_eq!(deserialized, id);
    }

    #[test]
    fn vendor_id_serde_roundtrip() {
        let id = VendorId::new("65f0c0ffee0000000000beef".to_owned());
        let json = serde_json::to_string(&id).unwrap();
        let deserialized: VendorId = serde_json::from_str(&json).unwrap();
        assert_eq!(deserialized, id);
    }

    #[test]
    fn id_display() {
        let id = BookingId::new("abc-123".to_owned());
        assert_eq!(id.to_string(), "abc-123");
    }

    #[test]
    fn id_from_inner() {
        let id: NotificationId = "n-1".into();
        assert_eq!(id.as_inner(), "n-1");

        let id: UserId = "u-1".to_owned().into();
        assert_eq!(id.as_inner(), "u-1");
    }

    #[test]
    fn id_into_inner() {
        let id = OrderId::new("order_9A33XWu170gUtm".to_owned());
        assert_eq!(id.into_inner(), "order_9A33XWu170gUtm");
    }

    #[test]
    fn different_id_types_are_distinct() {
        let _vendor = VendorId::new("a".to_owned());
        let _category = CategoryId::new("a".to_owned());
        let _booking = BookingId::new("a".to_owned());
    }
}
