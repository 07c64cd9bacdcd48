//! Cart persistence.
//!
//! The session cart is written through to a [`CartStore`] after every
//! mutation so it survives page navigation and restarts. Persistence is a
//! side effect: the session never lets a store failure undo a mutation.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use jazz_core::Cart;
use thiserror::Error;
use tracing::debug;

/// Errors from a cart store.
#[derive(Debug, Error)]
pub enum PersistError {
    #[error("cart store I/O error: {0}")]
    Io(#[from] io::Error),
    #[error("cart store serialization error: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Storage for a single session cart.
pub trait CartStore {
    /// Load the stored cart. `Ok(None)` means nothing has been stored yet.
    ///
    /// # Errors
    ///
    /// Returns an error if the stored cart cannot be read or parsed.
    fn load(&self) -> Result<Option<Cart>, PersistError>;

    /// Replace the stored cart.
    ///
    /// # Errors
    ///
    /// Returns an error if the cart cannot be written.
    fn save(&self, cart: &Cart) -> Result<(), PersistError>;

    /// Forget the stored cart.
    ///
    /// # Errors
    ///
    /// Returns an error if the stored cart cannot be removed.
    fn clear(&self) -> Result<(), PersistError>;
}

/// Cart stored as a JSON file.
#[derive(Debug, Clone)]
pub struct JsonFileCartStore {
    path: PathBuf,
}

impl JsonFileCartStore {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn temp_path(&self) -> PathBuf {
        let mut name = self.path.file_name().unwrap_or_default().to_os_string();
        name.push(".tmp");
        self.path.with_file_name(name)
    }
}

impl CartStore for JsonFileCartStore {
    fn load(&self) -> Result<Option<Cart>, PersistError> {
        let contents = match fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(e.into()),
        };
        if contents.trim().is_empty() {
            return Ok(None);
        }
        Ok(Some(serde_json::from_str(&contents)?))
    }

    fn save(&self, cart: &Cart) -> Result<(), PersistError> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(cart)?;
        let temp = self.temp_path();
        fs::write(&temp, json)?;
        if let Err(e) = fs::rename(&temp, &self.path) {
            let _ = fs::remove_file(&temp);
            return Err(e.into());
        }
        debug!(path = %self.path.display(), lines = cart.line_item_count(), "Saved cart");
        Ok(())
    }

    fn clear(&self) -> Result<(), PersistError> {
        match fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}

/// Cart stored in memory as serialized JSON.
///
/// Serializing keeps the behavior identical to the file store, including
/// normalization on load.
#[derive(Debug, Default)]
pub struct MemoryCartStore {
    contents: Mutex<Option<String>>,
}

impl MemoryCartStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Start with raw stored contents (for example a stale snapshot).
    #[must_use]
    pub fn with_contents(contents: impl Into<String>) -> Self {
        Self {
            contents: Mutex::new(Some(contents.into())),
        }
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Option<String>> {
        // A poisoned lock still holds a usable string.
        self.contents
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
    }
}

impl CartStore for MemoryCartStore {
    fn load(&self) -> Result<Option<Cart>, PersistError> {
        self.lock()
            .as_deref()
            .map(serde_json::from_str)
            .transpose()
            .map_err(PersistError::from)
    }

    fn save(&self, cart: &Cart) -> Result<(), PersistError> {
        let json = serde_json::to_string(cart)?;
        *self.lock() = Some(json);
        Ok(())
    }

    fn clear(&self) -> Result<(), PersistError> {
        *self.lock() = None;
        Ok(())
    }
}

impl<S: CartStore + ?Sized> CartStore for &S {
    fn load(&self) -> Result<Option<Cart>, PersistError> {
        (**self).load()
    }

    fn save(&self, cart: &Cart) -> Result<(), PersistError> {
        (**self).save(cart)
    }

    fn clear(&self) -> Result<(), PersistError> {
        (**self).clear()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::indexing_slicing)]
mod tests {
    use std::num::NonZeroU32;

    use jazz_core::Catalog;
    use tempfile::TempDir;

    use super::*;

    fn sample_cart() -> Cart {
        let catalog = Catalog::bundled();
        let mut cart = Cart::new();
        cart.add_item(&catalog.products()[1], "L", "Navy", NonZeroU32::MIN)
            .unwrap();
        cart
    }

    #[test]
    fn test_file_store_missing_file_is_none() {
        let dir = TempDir::new().unwrap();
        let store = JsonFileCartStore::new(dir.path().join("cart.json"));
        assert!(store.load().unwrap().is_none());
    }

    #[test]
    fn test_file_store_roundtrip_creates_parent_dirs() {
        let dir = TempDir::new().unwrap();
        let store = JsonFileCartStore::new(dir.path().join("nested/session/cart.json"));
        let cart = sample_cart();

        store.save(&cart).unwrap();
        assert_eq!(store.load().unwrap(), Some(cart));
        assert!(!store.temp_path().exists());
    }

    #[test]
    fn test_file_store_clear() {
        let dir = TempDir::new().unwrap();
        let store = JsonFileCartStore::new(dir.path().join("cart.json"));
        store.save(&sample_cart()).unwrap();
        store.clear().unwrap();
        assert!(store.load().unwrap().is_none());
        // Clearing twice is fine.
        store.clear().unwrap();
    }

    #[test]
    fn test_file_store_corrupt_file_is_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("cart.json");
        fs::write(&path, "{ not json").unwrap();
        let store = JsonFileCartStore::new(path);
        assert!(matches!(store.load(), Err(PersistError::Serialize(_))));
    }

    #[test]
    fn test_file_store_empty_file_is_none() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("cart.json");
        fs::write(&path, "").unwrap();
        assert!(JsonFileCartStore::new(path).load().unwrap().is_none());
    }

    #[test]
    fn test_memory_store() {
        let store = MemoryCartStore::new();
        assert!(store.load().unwrap().is_none());

        let cart = sample_cart();
        store.save(&cart).unwrap();
        assert_eq!(store.load().unwrap(), Some(cart));

        store.clear().unwrap();
        assert!(store.load().unwrap().is_none());
    }

    #[test]
    fn test_file_store_failed_rename_removes_temp_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("cart.json");
        // A non-empty directory cannot be replaced by a file.
        fs::create_dir_all(path.join("occupied")).unwrap();
        let store = JsonFileCartStore::new(&path);

        assert!(matches!(store.save(&sample_cart()), Err(PersistError::Io(_))));
        assert!(!store.temp_path().exists());
    }
}
