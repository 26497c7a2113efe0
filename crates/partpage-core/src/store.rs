//! Form state with write-through persistence.
//!
//! [`StateStore`] owns the [`GeneratorState`] and a [`Storage`] backend.
//! Every mutation is applied in memory first, then the whole state is
//! serialized as JSON under [`STATE_KEY`].  A failed write is reported
//! to the caller but does not roll back the in-memory change, so the
//! user's edit stays visible while the UI reports that it was not saved.

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use crate::types::{FileType, GeneratorState, PartId, PartUpdate};

/// Key the serialized [`GeneratorState`] is stored under.
pub const STATE_KEY: &str = "4gamer_generator_state";

/// Errors reported by a [`Storage`] backend.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StorageError {
    /// The backend does not exist in this environment (e.g. storage
    /// disabled by the browser).
    #[error("storage is unavailable")]
    Unavailable,

    /// The backend rejected the operation (e.g. quota exceeded).
    #[error("storage backend error: {0}")]
    Backend(String),
}

/// A string key-value store that state is persisted to.
pub trait Storage {
    /// Read the value stored under `key`, if any.
    fn load(&self, key: &str) -> Option<String>;

    /// Store `value` under `key`, replacing any previous value.
    ///
    /// # Errors
    ///
    /// Returns a [`StorageError`] if the backend is missing or rejects
    /// the write.
    fn save(&self, key: &str, value: &str) -> Result<(), StorageError>;
}

/// In-memory [`Storage`].
///
/// Clones share the same underlying map, so a test can keep a handle
/// and reopen a store over what an earlier store wrote.
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage(Rc<RefCell<HashMap<String, String>>>);

impl MemoryStorage {
    /// Create an empty storage.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl Storage for MemoryStorage {
    fn load(&self, key: &str) -> Option<String> {
        self.0.borrow().get(key).cloned()
    }

    fn save(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.0.borrow_mut().insert(key.to_owned(), value.to_owned());
        Ok(())
    }
}

/// Errors from persisting the state after a mutation.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// The state could not be serialized.
    #[error("failed to serialize state: {0}")]
    Serialize(#[from] serde_json::Error),

    /// The storage backend rejected the write.
    #[error("failed to save state: {0}")]
    Storage(#[from] StorageError),
}

/// How [`StateStore::open`] obtained its initial state.
#[derive(Debug)]
pub enum Restore {
    /// Nothing was stored; the default state is used.
    Fresh,
    /// The stored state was loaded.
    Loaded,
    /// Something was stored but did not parse; the default state is
    /// used and the stored text is overwritten on the next mutation.
    Discarded(serde_json::Error),
}

/// The form state plus the storage it is mirrored to.
#[derive(Debug)]
pub struct StateStore<S> {
    state: GeneratorState,
    storage: S,
}

impl<S: Storage> StateStore<S> {
    /// Open a store over `storage`, loading any previously saved state.
    pub fn open(storage: S) -> (Self, Restore) {
        let (state, restore) = match storage.load(STATE_KEY) {
            None => (GeneratorState::default(), Restore::Fresh),
            Some(text) => match serde_json::from_str(&text) {
                Ok(state) => (state, Restore::Loaded),
                Err(e) => (GeneratorState::default(), Restore::Discarded(e)),
            },
        };
        (Self { state, storage }, restore)
    }

    /// Current state.
    #[must_use]
    pub const fn state(&self) -> &GeneratorState {
        &self.state
    }

    /// The backend the state is mirrored to.
    #[must_use]
    pub const fn storage(&self) -> &S {
        &self.storage
    }

    /// Total size of all parts, formatted for display.
    #[must_use]
    pub fn total_size(&self) -> String {
        self.state.total_size()
    }

    /// Append a new default part.
    ///
    /// # Errors
    ///
    /// Returns a [`StoreError`] if persisting fails; the part is still added.
    pub fn add_part(&mut self) -> Result<PartId, StoreError> {
        let id = self.state.add_part();
        self.persist()?;
        Ok(id)
    }

    /// Remove the part with `id`, if present.
    ///
    /// # Errors
    ///
    /// Returns a [`StoreError`] if persisting fails.
    pub fn remove_part(&mut self, id: &PartId) -> Result<(), StoreError> {
        self.state.remove_part(id);
        self.persist()
    }

    /// Merge `update` into the part with `id`, if present.
    ///
    /// # Errors
    ///
    /// Returns a [`StoreError`] if persisting fails.
    pub fn update_part(&mut self, id: &PartId, update: PartUpdate) -> Result<(), StoreError> {
        self.state.update_part(id, update);
        self.persist()
    }

    /// Replace the file name.
    ///
    /// # Errors
    ///
    /// Returns a [`StoreError`] if persisting fails.
    pub fn set_file_name(&mut self, name: impl Into<String>) -> Result<(), StoreError> {
        self.state.file_name = name.into();
        self.persist()
    }

    /// Replace the file type.
    ///
    /// # Errors
    ///
    /// Returns a [`StoreError`] if persisting fails.
    pub fn set_file_type(&mut self, file_type: FileType) -> Result<(), StoreError> {
        self.state.file_type = file_type;
        self.persist()
    }

    /// Replace the entire state (settings import).
    ///
    /// # Errors
    ///
    /// Returns a [`StoreError`] if persisting fails.
    pub fn replace(&mut self, state: GeneratorState) -> Result<(), StoreError> {
        self.state = state;
        self.persist()
    }

    /// Write the current state to storage.
    ///
    /// # Errors
    ///
    /// Returns a [`StoreError`] if serialization or the write fails.
    pub fn persist(&self) -> Result<(), StoreError> {
        let json = serde_json::to_string(&self.state)?;
        self.storage.save(STATE_KEY, &json)?;
        Ok(())
    }
}
