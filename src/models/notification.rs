//! Notification model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::NotificationId;

/// A notification addressed to the current user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Notification {
    /// Unique identifier.
    #[serde(rename = "_id")]
    pub id: NotificationId,
    /// Message text.
    pub message: String,
    /// Whether the user has seen it.
    #[serde(default)]
    pub read: bool,
    /// Server-side creation timestamp.
    pub created_at: DateTime<Utc>,
}

/// Response of the list-notifications endpoint: the items plus the
/// server-computed unread count, delivered atomically.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NotificationsPage {
    /// Notifications, newest first.
    pub notifications: Vec<Notification>,
    /// Number of items with `read == false`.
    pub unread_count: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserialize_notification() {
        let json = r#"{
            "_id": "n-1",
            "message": "Your booking was confirmed",
            "read": false,
            "createdAt": "2026-08-01T10:30:00Z"
        }"#;
        let notification: Notification = serde_json::from_str(json).unwrap();
        assert_eq!(notification.message, "Your booking was confirmed");
        assert!(!notification.read);
    }

    #[test]
    fn read_defaults_to_false() {
        let json = r#"{
            "_id": "n-2",
            "message": "Welcome",
            "createdAt": "2026-08-01T10:30:00Z"
        }"#;
        let notification: Notification = serde_json::from_str(json).unwrap();
        assert!(!notification.read);
    }

    #[test]
    fn deserialize_page() {
        let json = r#"{
            "notifications": [
                {"_id": "n-1", "message": "A", "read": false, "createdAt": "2026-08-01T10:30:00Z"},
                {"_id": "n-2", "message": "B", "read": true, "createdAt": "2026-08-01T09:00:00Z"}
            ],
            "unreadCount": 1
        }"#;
        let page: NotificationsPage = serde_json::from_str(json).unwrap();
        assert_eq!(page.notifications.len(), 2);
        assert_eq!(page.unread_count, 1);
    }
}
