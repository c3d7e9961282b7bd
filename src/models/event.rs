//! Event listing model (admin surface).

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::{CategoryId, CategoryRef, EventId, EventStatus};

/// An event listing managed through the admin dashboard.
///
/// CRUD-only: the status is an admin-set enum with no lifecycle logic
/// on the client.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    /// Unique identifier.
    #[serde(rename = "_id")]
    pub id: EventId,
    /// Display name.
    pub name: String,
    /// Owning category (populated or bare id).
    #[serde(rename = "categoryId")]
    pub category: CategoryRef,
    /// Free-form description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Venue name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub venue: Option<String>,
    /// Street address.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    /// City.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    /// Event date.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<NaiveDate>,
    /// Start time (`HH:MM`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_time: Option<String>,
    /// End time (`HH:MM`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_time: Option<String>,
    /// Maximum attendance.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub capacity: Option<u32>,
    /// Ticket price.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ticket_price: Option<f64>,
    /// Organizer name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub organizer: Option<String>,
    /// Organizer phone contact.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub organizer_contact: Option<String>,
    /// Organizer email.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub organizer_email: Option<String>,
    /// Image URL.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    /// Admin-set status.
    #[serde(default)]
    pub status: EventStatus,
    /// Whether the event is featured on the home page.
    #[serde(default)]
    pub is_featured: bool,
    /// Search tags.
    #[serde(default)]
    pub tags: Vec<String>,
}

/// Body for admin event create/update calls.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EventInput {
    /// Display name.
    pub name: String,
    /// Owning category id.
    pub category_id: CategoryId,
    /// Free-form description.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Venue name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub venue: Option<String>,
    /// Street address.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    /// City.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    /// Event date.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<NaiveDate>,
    /// Start time (`HH:MM`).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_time: Option<String>,
    /// End time (`HH:MM`).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_time: Option<String>,
    /// Maximum attendance.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub capacity: Option<u32>,
    /// Ticket price.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ticket_price: Option<f64>,
    /// Organizer name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub organizer: Option<String>,
    /// Organizer phone contact.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub organizer_contact: Option<String>,
    /// Organizer email.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub organizer_email: Option<String>,
    /// Image URL.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    /// Admin-set status.
    pub status: EventStatus,
    /// Whether the event is featured on the home page.
    pub is_featured: bool,
    /// Search tags.
    pub tags: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserialize_event() {
        let json = r#"{
            "_id": "e-1",
            "name": "Winter Expo",
            "categoryId": "c-3",
            "venue": "City Hall",
            "city": "Pune",
            "date": "2026-12-12",
            "startTime": "10:00",
            "endTime": "18:00",
            "capacity": 400,
            "ticketPrice": 250,
            "status": "upcoming",
            "isFeatured": true,
            "tags": ["expo", "winter"]
        }"#;
        let event: Event = serde_json::from_str(json).unwrap();
        assert_eq!(event.name, "Winter Expo");
        assert_eq!(event.status, EventStatus::Upcoming);
        assert!(event.is_featured);
        assert_eq!(event.capacity, Some(400));
        assert_eq!(event.tags, vec!["expo", "winter"]);
    }

    #[test]
    fn deserialize_event_minimal_defaults() {
        let json = r#"{"_id": "e-2", "name": "Pop-up", "categoryId": "c-1"}"#;
        let event: Event = serde_json::from_str(json).unwrap();
        assert_eq!(event.status, EventStatus::Upcoming);
        assert!(!event.is_featured);
        assert!(event.tags.is_empty());
    }

    #[test]
    fn input_serializes_camel_case() {
        let input = EventInput {
            name: "Winter Expo".to_owned(),
            category_id: CategoryId::new("c-3".to_owned()),
            description: None,
            venue: None,
            address: None,
            city: None,
            date: NaiveDate::from_ymd_opt(2026, 12, 12),
            start_time: Some("10:00".to_owned()),
            end_time: None,
            capacity: Some(400),
            ticket_price: None,
            organizer: None,
            organizer_contact: None,
            organizer_email: None,
            image: None,
            status: EventStatus::Upcoming,
            is_featured: false,
            tags: vec!["expo".to_owned()],
        };
        let json = serde_json::to_value(&input).unwrap();
        assert_eq!(json["categoryId"], "c-3");
        assert_eq!(json["startTime"], "10:00");
        assert_eq!(json["isFeatured"], false);
        assert!(json.get("endTime").is_none());
    }
}
