//! Booking model and request bodies.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use super::{BookingId, BookingStatus, VendorId, VendorRef};

/// A booking of one vendor's services for an event date.
///
/// `vendor` arrives populated on the my-bookings endpoint and as a bare
/// id elsewhere; see [`VendorRef`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Booking {
    /// Unique identifier.
    #[serde(rename = "_id")]
    pub id: BookingId,
    /// Booked vendor (populated or bare id).
    #[serde(rename = "vendorId")]
    pub vendor: VendorRef,
    /// Customer name as entered on the form.
    pub user_name: String,
    /// Customer email.
    pub user_email: String,
    /// Customer phone number.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_phone: Option<String>,
    /// Date of the event being booked.
    pub event_date: NaiveDate,
    /// Special requests.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    /// Lifecycle status.
    pub status: BookingStatus,
    /// Server-side creation timestamp.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
}

/// Body for the create-booking endpoint.
///
/// The five form fields plus the initial status: `pending` on the
/// pay-later path, `confirmed` after a verified payment.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateBookingRequest {
    /// Vendor being booked.
    pub vendor_id: VendorId,
    /// Customer name.
    pub user_name: String,
    /// Customer email.
    pub user_email: String,
    /// Customer phone number.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_phone: Option<String>,
    /// Date of the event.
    pub event_date: NaiveDate,
    /// Special requests.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    /// Initial status.
    pub status: BookingStatus,
}

/// Body for booking status updates (vendor actions and the admin
/// status select).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct StatusUpdate {
    /// The new status.
    pub status: BookingStatus,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserialize_booking_with_populated_vendor() {
        let json = r#"{
            "_id": "b-1",
            "vendorId": {
                "_id": "v-1",
                "name": "Lens & Light",
                "categoryId": "c-1",
                "email": "studio@lenslight.example",
                "price": 15000
            },
            "userName": "Asha",
            "userEmail": "asha@example.com",
            "userPhone": "+91 98765 43210",
            "eventDate": "2026-11-20",
            "notes": "Outdoor ceremony",
            "status": "pending",
            "createdAt": "2026-08-01T10:30:00Z"
        }"#;
        let booking: Booking = serde_json::from_str(json).unwrap();
        assert_eq!(booking.vendor.name_or("Unknown Vendor"), "Lens & Light");
        assert_eq!(booking.status, BookingStatus::Pending);
        assert_eq!(
            booking.event_date,
            NaiveDate::from_ymd_opt(2026, 11, 20).unwrap()
        );
        assert!(booking.created_at.is_some());
    }

    #[test]
    fn deserialize_booking_with_bare_vendor_id() {
        let json = r#"{
            "_id": "b-2",
            "vendorId": "v-9",
            "userName": "Ravi",
            "userEmail": "ravi@example.com",
            "eventDate": "2026-12-05",
            "status": "confirmed"
        }"#;
        let booking: Booking = serde_json::from_str(json).unwrap();
        assert!(booking.vendor.as_populated().is_none());
        assert_eq!(booking.vendor.id().as_inner(), "v-9");
        assert_eq!(booking.vendor.name_or("Unknown Vendor"), "Unknown Vendor");
        assert!(booking.user_phone.is_none());
        assert!(booking.notes.is_none());
    }

    #[test]
    fn create_request_serializes_camel_case() {
        let request = CreateBookingRequest {
            vendor_id: VendorId::new("v-1".to_owned()),
            user_name: "Asha".to_owned(),
            user_email: "asha@example.com".to_owned(),
            user_phone: Some("+91 98765 43210".to_owned()),
            event_date: NaiveDate::from_ymd_opt(2026, 11, 20).unwrap(),
            notes: None,
            status: BookingStatus::Pending,
        };
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["vendorId"], "v-1");
        assert_eq!(json["userName"], "Asha");
        assert_eq!(json["eventDate"], "2026-11-20");
        assert_eq!(json["status"], "pending");
        assert!(json.get("notes").is_none());
    }

    #[test]
    fn status_update_body_shape() {
        let body = StatusUpdate {
            status: BookingStatus::Confirmed,
        };
        let json = serde_json::to_string(&body).unwrap();
        assert_eq!(json, r#"{"status":"confirmed"}"#);
    }
}
