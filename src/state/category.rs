//! Category slice: a single fetch-all cache, plus the demo-mode
//! projection shown when the backend has no categories.

use std::borrow::Cow;

use crate::models::{Category, CategoryId};
use crate::state::Slice;

/// Transitions of the category slice.
#[derive(Debug, Clone)]
pub enum CategoryAction {
    /// Fetch issued.
    FetchPending,
    /// Fetch succeeded with the full category list.
    FetchFulfilled(Vec<Category>),
    /// Fetch failed.
    FetchRejected(String),
}

/// Category list state.
#[derive(Debug, Default)]
pub struct CategoryState {
    /// Loaded categories.
    pub categories: Vec<Category>,
    /// Whether a fetch is in flight.
    pub loading: bool,
    /// Last error message, cleared when a new fetch starts.
    pub error: Option<String>,
}

impl CategoryState {
    /// Returns `true` when the loaded list is empty and views should
    /// fall back to the demo set.
    #[inline]
    #[must_use]
    pub fn is_demo(&self) -> bool {
        self.categories.is_empty()
    }

    /// Returns the categories to display: the loaded list, or the fixed
    /// demo set when the backend returned none.
    #[inline]
    #[must_use]
    pub fn display_categories(&self) -> Cow<'_, [Category]> {
        if self.is_demo() {
            Cow::Owned(demo_categories())
        } else {
            Cow::Borrowed(&self.categories)
        }
    }
}

impl Slice for CategoryState {
    type Action = CategoryAction;

    fn apply(&mut self, action: CategoryAction) {
        match action {
            CategoryAction::FetchPending => {
                self.loading = true;
                self.error = None;
            }
            CategoryAction::FetchFulfilled(categories) => {
                self.loading = false;
                self.categories = categories;
            }
            CategoryAction::FetchRejected(message) => {
                self.loading = false;
                self.error = Some(message);
            }
        }
    }
}

/// The fixed four-item fallback set shown in demo mode.
#[must_use]
pub fn demo_categories() -> Vec<Category> {
    /// Builds one demo category.
    fn demo(id: &str, name: &str, image: &str, color: &str) -> Category {
        Category {
            id: CategoryId::new(id.to_owned()),
            name: name.to_owned(),
            image: Some(image.to_owned()),
            color: Some(color.to_owned()),
            description: None,
        }
    }

    vec![
        demo(
            "507f1f77bcf86cd799439011",
            "Photography",
            "/assets/categories/photography.png",
            "bg-blue-50",
        ),
        demo(
            "507f1f77bcf86cd799439012",
            "Catering",
            "/assets/categories/catering.png",
            "bg-red-50",
        ),
        demo(
            "507f1f77bcf86cd799439013",
            "Venue",
            "/assets/categories/venue.png",
            "bg-purple-50",
        ),
        demo(
            "507f1f77bcf86cd799439014",
            "Makeup",
            "/assets/categories/makeup.png",
            "bg-pink-50",
        ),
    ]
}
