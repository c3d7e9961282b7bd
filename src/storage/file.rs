//! JSON-file-based profile storage.
//!
//! Stores the profile blob as a single JSON file under a configurable
//! directory (default: `$XDG_DATA_HOME/slotify-rs/`).

use std::fs;
use std::path::PathBuf;
use std::sync::{Mutex, MutexGuard};

use crate::error::{Result, SlotifyError};
use crate::models::Profile;
use crate::storage::ProfileStore;

/// Application name used for the XDG data directory.
const APP_NAME: &str = "slotify-rs";

/// File name of the profile blob.
const PROFILE_FILE: &str = "profile.json";

/// Sentinel file used for cross-process file locking.
const LOCK_FILE: &str = "profile.lock";

/// File-backed store that persists the profile blob as JSON.
///
/// # Concurrency
///
/// Thread safety within a single process is provided by an in-process
/// [`Mutex`]. Cross-process safety is achieved via an advisory file lock
/// on `profile.lock` (using [`std::fs::File::lock`] /
/// [`std::fs::File::lock_shared`]) — unlike a browser tab, a CLI can run
/// concurrently with itself.
///
/// Read operations acquire a shared lock (allowing concurrent readers),
/// while write operations acquire an exclusive lock.
///
/// # File layout
///
/// ```text
/// <dir>/
///   profile.lock          (cross-process lock sentinel)
///   profile.json
/// ```
#[derive(Debug)]
pub struct FileProfileStore {
    /// Directory containing the blob and lock files.
    dir: PathBuf,
    /// Mutex serializing concurrent in-process access.
    lock: Mutex<()>,
    /// Sentinel file for cross-process advisory locking.
    lock_file: fs::File,
}

impl FileProfileStore {
    /// Creates a new file store rooted at the given directory.
    ///
    /// Creates the directory (and parents) if it does not exist. Also
    /// opens (or creates) the `profile.lock` sentinel file used for
    /// cross-process advisory locking.
    ///
    /// # Errors
    ///
    /// Returns an error if the directory cannot be created or the lock
    /// file cannot be opened.
    #[inline]
    pub fn new(dir: PathBuf) -> Result<Self> {
        fs::create_dir_all(&dir).map_err(storage_io_error)?;
        let lock_file = fs::OpenOptions::new()
            .read(true)
            .write(true)
            .create(true)
            .truncate(false)
            .open(dir.join(LOCK_FILE))
            .map_err(storage_io_error)?;
        Ok(Self {
            dir,
            lock: Mutex::new(()),
            lock_file,
        })
    }

    /// Returns the default XDG-compliant data directory for this
    /// application.
    ///
    /// On Linux: `$XDG_DATA_HOME/slotify-rs/` (typically
    /// `~/.local/share/slotify-rs/`).
    ///
    /// # Errors
    ///
    /// Returns an error if the platform data directory cannot be
    /// determined.
    #[inline]
    pub fn default_dir() -> Result<PathBuf> {
        dirs::data_dir()
            .map(|data_path| data_path.join(APP_NAME))
            .ok_or_else(|| {
                SlotifyError::Storage("could not determine platform data directory".into())
            })
    }

    // ── Private helpers ─────────────────────────────────────────────

    /// Returns the full path of the profile blob.
    fn profile_path(&self) -> PathBuf {
        self.dir.join(PROFILE_FILE)
    }

    /// Acquires an in-process mutex guard and a shared (read) file
    /// lock, executes `op`, then releases the file lock.
    fn with_shared_lock<R, F: FnOnce() -> Result<R>>(&self, op: F) -> Result<R> {
        let _guard: MutexGuard<'_, ()> = self.lock.lock().map_err(|err| lock_poison_error(&err))?;
        self.lock_file.lock_shared().map_err(storage_io_error)?;
        let result = op();
        // Only surface the unlock error when the operation succeeded;
        // otherwise the original error is more useful.
        if let Err(err) = self.lock_file.unlock()
            && result.is_ok()
        {
            return Err(storage_io_error(err));
        }
        result
    }

    /// Acquires an in-process mutex guard and an exclusive (write)
    /// file lock, executes `op`, then releases the file lock.
    fn with_exclusive_lock<R, F: FnOnce() -> Result<R>>(&self, op: F) -> Result<R> {
        let _guard: MutexGuard<'_, ()> = self.lock.lock().map_err(|err| lock_poison_error(&err))?;
        self.lock_file.lock().map_err(storage_io_error)?;
        let result = op();
        if let Err(err) = self.lock_file.unlock()
            && result.is_ok()
        {
            return Err(storage_io_error(err));
        }
        result
    }
}

impl ProfileStore for FileProfileStore {
    #[inline]
    fn load(&self) -> Result<Option<Profile>> {
        self.with_shared_lock(|| match fs::read_to_string(self.profile_path()) {
            Ok(contents) => serde_json::from_str(&contents)
                .map(Some)
                .map_err(SlotifyError::from),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(err) => Err(storage_io_error(err)),
        })
    }

    #[inline]
    fn save(&self, profile: &Profile) -> Result<()> {
        self.with_exclusive_lock(|| {
            let path = self.profile_path();
            let tmp_path = self.dir.join(format!("{PROFILE_FILE}.tmp"));
            let json = serde_json::to_string(profile).map_err(SlotifyError::from)?;
            fs::write(&tmp_path, json).map_err(storage_io_error)?;
            fs::rename(&tmp_path, &path).map_err(storage_io_error)?;
            tracing::debug!(path = %path.display(), "profile persisted");
            Ok(())
        })
    }

    #[inline]
    fn clear(&self) -> Result<()> {
        self.with_exclusive_lock(|| match fs::remove_file(self.profile_path()) {
            Ok(()) => {
                tracing::debug!("profile cleared");
                Ok(())
            }
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(err) => Err(storage_io_error(err)),
        })
    }
}

/// Wraps an I/O error into a storage error.
fn storage_io_error(err: std::io::Error) -> SlotifyError {
    SlotifyError::Storage(Box::new(err))
}

/// Wraps a mutex poison error.
fn lock_poison_error<T>(err: &std::sync::PoisonError<T>) -> SlotifyError {
    SlotifyError::Storage(err.to_string().into())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::UserId;

    /// Creates a profile fixture.
    fn test_profile(token: &str) -> Profile {
        Profile {
            id: Some(UserId::new("u-1".to_owned())),
            name: "Asha".to_owned(),
            email: "asha@example.com".to_owned(),
            phone: None,
            role: None,
            token: token.to_owned(),
        }
    }

    #[test]
    fn load_missing_file_is_none() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileProfileStore::new(dir.path().to_path_buf()).unwrap();
        assert!(store.load().unwrap().is_none());
    }

    #[test]
    fn save_then_load_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileProfileStore::new(dir.path().to_path_buf()).unwrap();
        let profile = test_profile("t1");
        store.save(&profile).unwrap();
        assert_eq!(store.load().unwrap(), Some(profile));
    }

    #[test]
    fn save_replaces_previous_profile() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileProfileStore::new(dir.path().to_path_buf()).unwrap();
        store.save(&test_profile("t1")).unwrap();
        store.save(&test_profile("t2")).unwrap();
        let loaded = store.load().unwrap().unwrap();
        assert_eq!(loaded.token, "t2");
    }

    #[test]
    fn clear_removes_profile() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileProfileStore::new(dir.path().to_path_buf()).unwrap();
        store.save(&test_profile("t1")).unwrap();
        store.clear().unwrap();
        assert!(store.load().unwrap().is_none());
    }

    #[test]
    fn clear_without_profile_is_ok() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileProfileStore::new(dir.path().to_path_buf()).unwrap();
        store.clear().unwrap();
    }

    #[test]
    fn stored_file_is_plain_json() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileProfileStore::new(dir.path().to_path_buf()).unwrap();
        let profile = Profile {
            id: None,
            name: "A".to_owned(),
            email: "a@b.com".to_owned(),
            phone: None,
            role: None,
            token: "t1".to_owned(),
        };
        store.save(&profile).unwrap();
        let raw = fs::read_to_string(dir.path().join("profile.json")).unwrap();
        let value: serde_json::Value = serde_json::from_str(&raw).unwrap();
        assert_eq!(
            value,
            serde_json::json!({"name": "A", "email": "a@b.com", "token": "t1"})
        );
    }
}
