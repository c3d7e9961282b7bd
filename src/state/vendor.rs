//! Vendor slice: a list cache and an independent selected-vendor cache.

use crate::models::Vendor;
use crate::state::Slice;

/// Transitions of the vendor slice.
#[derive(Debug, Clone)]
pub enum VendorAction {
    /// List fetch issued (optionally filtered by category).
    FetchListPending,
    /// List fetch succeeded.
    FetchListFulfilled(Vec<Vendor>),
    /// List fetch failed.
    FetchListRejected(String),
    /// Single-vendor fetch issued.
    FetchSelectedPending,
    /// Single-vendor fetch succeeded.
    FetchSelectedFulfilled(Box<Vendor>),
    /// Single-vendor fetch failed.
    FetchSelectedRejected(String),
    /// Synchronous clear of the selected record (leaving a detail view).
    ClearSelected,
}

/// Vendor state: list and selected record are independent caches.
#[derive(Debug, Default)]
pub struct VendorState {
    /// Loaded vendor list.
    pub vendors: Vec<Vendor>,
    /// The vendor a detail view is showing, if any.
    pub selected: Option<Vendor>,
    /// Whether a fetch is in flight.
    pub loading: bool,
    /// Last error message, cleared when a new fetch starts.
    pub error: Option<String>,
}

impl Slice for VendorState {
    type Action = VendorAction;

    fn apply(&mut self, action: VendorAction) {
        match action {
            VendorAction::FetchListPending | VendorAction::FetchSelectedPending => {
                self.loading = true;
                self.error = None;
            }
            VendorAction::FetchListFulfilled(vendors) => {
                self.loading = false;
                self.vendors = vendors;
            }
            VendorAction::FetchSelectedFulfilled(vendor) => {
                self.loading = false;
                self.selected = Some(*vendor);
            }
            VendorAction::FetchListRejected(message)
            | VendorAction::FetchSelectedRejected(message) => {
                self.loading = false;
                self.error = Some(message);
            }
            VendorAction::ClearSelected => {
                self.selected = None;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{CategoryId, CategoryRef, VendorId};

    /// Creates a vendor fixture.
    fn vendor(id: &str, name: &str) -> Vendor {
        Vendor {
            id: VendorId::new(id.to_owned()),
            name: name.to_owned(),
            category: CategoryRef::Id(CategoryId::new("c-1".to_owned())),
            email: None,
            phone: None,
            price: None,
            max_price: None,
            rating: None,
            image: None,
            services: vec![],
            description: None,
            availability: true,
        }
    }

    #[test]
    fn list_fetch_lifecycle() {
        let mut state = VendorState::default();
        state.apply(VendorAction::FetchListPending);
        assert!(state.loading);

        state.apply(VendorAction::FetchListFulfilled(vec![
            vendor("v-1", "Lens & Light"),
            vendor("v-2", "Tasty Table"),
        ]));
        assert!(!state.loading);
        assert_eq!(state.vendors.len(), 2);
    }

    #[test]
    fn selected_is_independent_of_list() {
        let mut state = VendorState::default();
        state.apply(VendorAction::FetchListFulfilled(vec![vendor("v-1", "A")]));
        state.apply(VendorAction::FetchSelectedFulfilled(Box::new(vendor(
            "v-9", "Detail",
        ))));
        assert_eq!(state.vendors.len(), 1);
        assert_eq!(
            state.selected.as_ref().map(|v| v.name.as_str()),
            Some("Detail")
        );
    }

    #[test]
    fn clear_selected_leaves_list() {
        let mut state = VendorState::default();
        state.apply(VendorAction::FetchListFulfilled(vec![vendor("v-1", "A")]));
        state.apply(VendorAction::FetchSelectedFulfilled(Box::new(vendor(
            "v-9", "Detail",
        ))));
        state.apply(VendorAction::ClearSelected);
        assert!(state.selected.is_none());
        assert_eq!(state.vendors.len(), 1);
    }

    #[test]
    fn rejected_keeps_stale_caches() {
        let mut state = VendorState::default();
        state.apply(VendorAction::FetchListFulfilled(vec![vendor("v-1", "A")]));
        state.apply(VendorAction::FetchListPending);
        state.apply(VendorAction::FetchListRejected("timeout".to_owned()));
        assert_eq!(state.vendors.len(), 1);
        assert_eq!(state.error.as_deref(), Some("timeout"));
    }
}
