//! [`Storage`] backed by `window.localStorage`, with an in-memory
//! fallback for browsers that withhold it.

use partpage_core::{MemoryStorage, Storage, StorageError};

/// The browser's localStorage for this origin.
///
/// Browsers may withhold localStorage (private modes, disabled site
/// data).  In that case reads find nothing and writes fail with
/// [`StorageError::Unavailable`], so the app keeps working for the
/// current session.
#[derive(Debug, Clone)]
pub struct LocalStorage {
    inner: Option<web_sys::Storage>,
}

impl LocalStorage {
    /// Bind to the current window's localStorage, if any.
    #[must_use]
    pub fn open() -> Self {
        let inner = web_sys::window().and_then(|w| w.local_storage().ok().flatten());
        Self { inner }
    }

    /// Whether the browser exposed a localStorage object.
    #[must_use]
    pub const fn is_available(&self) -> bool {
        self.inner.is_some()
    }
}

impl Storage for LocalStorage {
    fn load(&self, key: &str) -> Option<String> {
        self.inner.as_ref()?.get_item(key).ok().flatten()
    }

    fn save(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let storage = self.inner.as_ref().ok_or(StorageError::Unavailable)?;
        storage
            .set_item(key, value)
            .map_err(|e| StorageError::Backend(format!("{e:?}")))
    }
}

/// The storage the app actually uses.
///
/// `localStorage` when the browser offers it, otherwise an in-memory map
/// that lasts only as long as the page.
#[derive(Debug, Clone)]
pub enum BrowserStorage {
    /// Saved across reloads.
    Local(LocalStorage),
    /// Lost on reload.
    Memory(MemoryStorage),
}

impl BrowserStorage {
    /// Bind to localStorage, or fall back to memory.
    #[must_use]
    pub fn open() -> Self {
        Self::prefer(LocalStorage::open())
    }

    fn prefer(local: LocalStorage) -> Self {
        if local.is_available() {
            Self::Local(local)
        } else {
            Self::Memory(MemoryStorage::new())
        }
    }

    /// Whether saved state survives a reload.
    #[must_use]
    pub const fn is_persistent(&self) -> bool {
        matches!(self, Self::Local(_))
    }
}

impl Storage for BrowserStorage {
    fn load(&self, key: &str) -> Option<String> {
        match self {
            Self::Local(s) => s.load(key),
            Self::Memory(s) => s.load(key),
        }
    }

    fn save(&self, key: &str, value: &str) -> Result<(), StorageError> {
        match self {
            Self::Local(s) => s.save(key, value),
            Self::Memory(s) => s.save(key, value),
        }
    }
}
