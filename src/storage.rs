//! Pluggable storage backends for the durable profile blob.
//!
//! The profile blob is the one piece of client-side durable state: the
//! authenticated user record plus bearer token, written on login and
//! profile updates, deleted on logout, and read once at startup to
//! restore the session.
//!
//! The trait is synchronous by design — the blob is a single small JSON
//! document (the original front-end kept it in synchronous local
//! storage), so both the async and blocking stores call it directly.

#[cfg(feature = "storage-file")]
mod file;
mod memory;

#[cfg(feature = "storage-file")]
pub use file::FileProfileStore;
pub use memory::InMemoryProfileStore;

use crate::error::Result;
use crate::models::Profile;

/// Storage backend for the persisted profile blob.
///
/// All methods take `&self` — implementations use interior mutability
/// (e.g. `Mutex`) for thread-safe mutation.
pub trait ProfileStore: core::fmt::Debug + Send + Sync {
    /// Returns the persisted profile, or `Ok(None)` if no session is
    /// stored.
    ///
    /// # Errors
    ///
    /// Returns an error if the storage backend fails to read.
    fn load(&self) -> Result<Option<Profile>>;

    /// Persists the profile, replacing any previous one.
    ///
    /// # Errors
    ///
    /// Returns an error if the storage backend fails to write.
    fn save(&self, profile: &Profile) -> Result<()>;

    /// Removes the persisted profile (logout).
    ///
    /// # Errors
    ///
    /// Returns an error if the storage backend fails to write.
    fn clear(&self) -> Result<()>;
}
