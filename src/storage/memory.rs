//! In-memory profile storage for testing.

use std::sync::Mutex;

use crate::error::{Result, SlotifyError};
use crate::models::Profile;
use crate::storage::ProfileStore;

/// Thread-safe in-memory profile store.
///
/// A zero-setup backend for unit and integration tests where file I/O
/// is undesirable.
///
/// # Example
///
/// ```rust
/// use slotify_rs::storage::InMemoryProfileStore;
///
/// let store = InMemoryProfileStore::new();
/// // Use with Store or BlockingStore builders:
/// // Store::builder().profile_store(store).build()
/// ```
#[derive(Debug, Default)]
pub struct InMemoryProfileStore {
    /// The stored profile behind a mutex for interior mutability.
    inner: Mutex<Option<Profile>>,
}

impl InMemoryProfileStore {
    /// Creates a new empty in-memory store.
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl ProfileStore for InMemoryProfileStore {
    #[inline]
    fn load(&self) -> Result<Option<Profile>> {
        Ok(self
            .inner
            .lock()
            .map_err(|err| lock_error(&err))?
            .clone())
    }

    #[inline]
    fn save(&self, profile: &Profile) -> Result<()> {
        *self.inner.lock().map_err(|err| lock_error(&err))? = Some(profile.clone());
        Ok(())
    }

    #[inline]
    fn clear(&self) -> Result<()> {
        *self.inner.lock().map_err(|err| lock_error(&err))? = None;
        Ok(())
    }
}

/// Wraps a mutex poison error.
fn lock_error<T>(err: &std::sync::PoisonError<T>) -> SlotifyError {
    SlotifyError::Storage(err.to_string().into())
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Creates a profile fixture.
    fn test_profile() -> Profile {
        Profile {
            id: None,
            name: "A".to_owned(),
            email: "a@b.com".to_owned(),
            phone: None,
            role: None,
            token: "t1".to_owned(),
        }
    }

    #[test]
    fn empty_store_loads_none() {
        let store = InMemoryProfileStore::new();
        assert!(store.load().unwrap().is_none());
    }

    #[test]
    fn save_load_clear() {
        let store = InMemoryProfileStore::new();
        store.save(&test_profile()).unwrap();
        assert_eq!(store.load().unwrap(), Some(test_profile()));
        store.clear().unwrap();
        assert!(store.load().unwrap().is_none());
    }
}
