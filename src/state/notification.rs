//! Notification slice.
//!
//! Invariant kept under every mutation: `unread_count` equals the number
//! of loaded items with `read == false`. The count is decremented only
//! when an item actually flips from unread, and never goes negative.

use crate::models::{Notification, NotificationId, NotificationsPage};
use crate::state::Slice;

/// Transitions of the notification slice.
#[derive(Debug, Clone)]
pub enum NotificationAction {
    /// Fetch issued.
    FetchPending,
    /// Fetch succeeded; items and unread count are replaced atomically
    /// from the one backend response.
    FetchFulfilled(NotificationsPage),
    /// Fetch failed.
    FetchRejected(String),
    /// Mark-one-read confirmed by the backend, carrying the updated
    /// record.
    MarkReadFulfilled(Notification),
    /// Mark-all-read confirmed by the backend.
    MarkAllReadFulfilled,
    /// Delete confirmed by the backend.
    DeleteFulfilled(NotificationId),
    /// A server-pushed notification arriving in real time. Reserved for
    /// future delivery; no transport is implemented in this crate.
    Push(Notification),
}

/// Notification list state.
#[derive(Debug, Default)]
pub struct NotificationState {
    /// Loaded notifications, newest first.
    pub items: Vec<Notification>,
    /// Count of loaded items with `read == false`.
    pub unread_count: u32,
    /// Whether a fetch is in flight.
    pub loading: bool,
    /// Last error message, cleared when a new fetch starts.
    pub error: Option<String>,
}

impl Slice for NotificationState {
    type Action = NotificationAction;

    fn apply(&mut self, action: NotificationAction) {
        match action {
            NotificationAction::FetchPending => {
                self.loading = true;
                self.error = None;
            }
            NotificationAction::FetchFulfilled(page) => {
                self.loading = false;
                self.items = page.notifications;
                self.unread_count = page.unread_count;
            }
            NotificationAction::FetchRejected(message) => {
                self.loading = false;
                self.error = Some(message);
            }
            NotificationAction::MarkReadFulfilled(updated) => {
                if let Some(item) = self.items.iter_mut().find(|item| item.id == updated.id) {
                    if !item.read {
                        self.unread_count = self.unread_count.saturating_sub(1);
                    }
                    item.read = true;
                }
            }
            NotificationAction::MarkAllReadFulfilled => {
                for item in &mut self.items {
                    item.read = true;
                }
                self.unread_count = 0;
            }
            NotificationAction::DeleteFulfilled(id) => {
                if let Some(item) = self.items.iter().find(|item| item.id == id)
                    && !item.read
                {
                    self.unread_count = self.unread_count.saturating_sub(1);
                }
                self.items.retain(|item| item.id != id);
            }
            NotificationAction::Push(notification) => {
                self.items.insert(0, notification);
                self.unread_count += 1;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    /// Creates a notification fixture.
    fn notification(id: &str, read: bool) -> Notification {
        Notification {
            id: NotificationId::new(id.to_owned()),
            message: format!("message {id}"),
            read,
            created_at: Utc.with_ymd_and_hms(2026, 8, 1, 10, 30, 0).unwrap(),
        }
    }

    /// Creates a fetched page fixture with a consistent unread count.
    fn page(items: Vec<Notification>) -> NotificationsPage {
        let unread = u32::try_from(items.iter().filter(|n| !n.read).count()).unwrap();
        NotificationsPage {
            notifications: items,
            unread_count: unread,
        }
    }

    /// Asserts the slice invariant: the counter equals the actual
    /// number of unread items.
    fn assert_invariant(state: &NotificationState) {
        let actual = u32::try_from(state.items.iter().filter(|n| !n.read).count()).unwrap();
        assert_eq!(state.unread_count, actual);
    }

    #[test]
    fn fetch_sets_items_and_count_atomically() {
        let mut state = NotificationState::default();
        state.apply(NotificationAction::FetchFulfilled(page(vec![
            notification("n-1", false),
            notification("n-2", true),
            notification("n-3", false),
        ])));
        assert_eq!(state.unread_count, 2);
        assert_invariant(&state);
    }

    #[test]
    fn mark_read_decrements_once() {
        let mut state = NotificationState::default();
        state.apply(NotificationAction::FetchFulfilled(page(vec![
            notification("n-1", false),
            notification("n-2", false),
        ])));
        state.apply(NotificationAction::MarkReadFulfilled(notification(
            "n-1", true,
        )));
        assert_eq!(state.unread_count, 1);
        assert_invariant(&state);
    }

    #[test]
    fn mark_already_read_leaves_count_unchanged() {
        let mut state = NotificationState::default();
        state.apply(NotificationAction::FetchFulfilled(page(vec![
            notification("n-1", true),
        ])));
        state.apply(NotificationAction::MarkReadFulfilled(notification(
            "n-1", true,
        )));
        assert_eq!(state.unread_count, 0);
        assert_invariant(&state);
    }

    #[test]
    fn mark_read_unknown_id_is_noop() {
        let mut state = NotificationState::default();
        state.apply(NotificationAction::FetchFulfilled(page(vec![
            notification("n-1", false),
        ])));
        state.apply(NotificationAction::MarkReadFulfilled(notification(
            "n-404", true,
        )));
        assert_eq!(state.unread_count, 1);
        assert_eq!(state.items.len(), 1);
        assert_invariant(&state);
    }

    #[test]
    fn mark_all_read_zeroes_count_and_flips_all() {
        let mut state = NotificationState::default();
        state.apply(NotificationAction::FetchFulfilled(page(vec![
            notification("n-1", false),
            notification("n-2", false),
            notification("n-3", true),
        ])));
        state.apply(NotificationAction::MarkAllReadFulfilled);
        assert_eq!(state.unread_count, 0);
        assert!(state.items.iter().all(|item| item.read));
        assert_invariant(&state);
    }

    #[test]
    fn delete_unread_decrements_by_one() {
        let mut state = NotificationState::default();
        state.apply(NotificationAction::FetchFulfilled(page(vec![
            notification("n-1", false),
            notification("n-2", false),
        ])));
        state.apply(NotificationAction::DeleteFulfilled(NotificationId::new(
            "n-1".to_owned(),
        )));
        assert_eq!(state.unread_count, 1);
        assert_eq!(state.items.len(), 1);
        assert_invariant(&state);
    }

    #[test]
    fn delete_read_leaves_count_unchanged() {
        let mut state = NotificationState::default();
        state.apply(NotificationAction::FetchFulfilled(page(vec![
            notification("n-1", true),
            notification("n-2", false),
        ])));
        state.apply(NotificationAction::DeleteFulfilled(NotificationId::new(
            "n-1".to_owned(),
        )));
        assert_eq!(state.unread_count, 1);
        assert_eq!(state.items.len(), 1);
        assert_invariant(&state);
    }

    #[test]
    fn count_never_goes_negative() {
        let mut state = NotificationState::default();
        // A page whose counter is already zero but still has an unread
        // item would underflow a naive decrement.
        state.apply(NotificationAction::FetchFulfilled(NotificationsPage {
            notifications: vec![notification("n-1", false)],
            unread_count: 0,
        }));
        state.apply(NotificationAction::MarkReadFulfilled(notification(
            "n-1", true,
        )));
        assert_eq!(state.unread_count, 0);
    }

    #[test]
    fn push_prepends_and_increments() {
        let mut state = NotificationState::default();
        state.apply(NotificationAction::FetchFulfilled(page(vec![
            notification("n-1", true),
        ])));
        state.apply(NotificationAction::Push(notification("n-2", false)));
        assert_eq!(state.items.first().map(|n| n.id.as_inner()), Some("n-2"));
        assert_eq!(state.unread_count, 1);
        assert_invariant(&state);
    }

    #[test]
    fn rejected_keeps_stale_items() {
        let mut state = NotificationState::default();
        state.apply(NotificationAction::FetchFulfilled(page(vec![
            notification("n-1", false),
        ])));
        state.apply(NotificationAction::FetchPending);
        state.apply(NotificationAction::FetchRejected("offline".to_owned()));
        assert_eq!(state.items.len(), 1);
        assert_eq!(state.error.as_deref(), Some("offline"));
        assert_invariant(&state);
    }
}
