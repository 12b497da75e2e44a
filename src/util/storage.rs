//! Key-value storage shared by the session and cart stores.
//!
//! SYSTEM CONTEXT
//! ==============
//! Everything the storefront persists lives in the browser's `localStorage`.
//! Stores are generic over `KeyValueStore` so native tests can substitute
//! `MemoryStore` for the real browser storage.
//!
//! ERROR HANDLING
//! ==============
//! Storage access returns `StorageError` instead of panicking. Callers that
//! gate access (session, guard) treat any error as "nothing stored".

#[cfg(test)]
#[path = "storage_test.rs"]
mod storage_test;

use std::cell::{Cell, RefCell};
use std::collections::HashMap;

use serde::Serialize;
use serde::de::DeserializeOwned;

/// Failure to read or write persistent browser storage.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum StorageError {
    /// No window or no `localStorage` (disabled, private mode, non-browser target).
    #[error("browser storage is unavailable")]
    Unavailable,
    /// The storage call itself threw (quota exceeded, security error, ...).
    #[error("storage access failed: {0}")]
    Access(String),
    /// A value could not be serialized before writing.
    #[error("failed to encode stored value: {0}")]
    Encode(String),
}

/// Minimal synchronous string key-value store.
pub trait KeyValueStore {
    /// Read the raw value for `key`, or `None` if absent.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying storage cannot be accessed.
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Write `value` under `key`, replacing any previous value.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying storage rejects the write.
    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;

    /// Remove `key`. Removing an absent key succeeds.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying storage cannot be accessed.
    fn remove(&self, key: &str) -> Result<(), StorageError>;
}

impl<S: KeyValueStore + ?Sized> KeyValueStore for &S {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        (**self).set(key, value)
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        (**self).remove(key)
    }
}

/// Load a JSON value stored under `key`.
///
/// Missing keys, storage failures, and malformed JSON all yield `None`;
/// malformed JSON is logged since it means something else wrote the key.
pub fn load_json<T: DeserializeOwned>(store: &impl KeyValueStore, key: &str) -> Option<T> {
    let raw = match store.get(key) {
        Ok(raw) => raw?,
        Err(e) => {
            log::debug!("storage read failed: key={key} error={e}");
            return None;
        }
    };
    match serde_json::from_str(&raw) {
        Ok(value) => Some(value),
        Err(e) => {
            log::warn!("discarding malformed stored value: key={key} error={e}");
            None
        }
    }
}

/// Serialize `value` as JSON and store it under `key`.
///
/// # Errors
///
/// Returns an error if serialization fails or the store rejects the write.
pub fn save_json<T: Serialize + ?Sized>(store: &impl KeyValueStore, key: &str, value: &T) -> Result<(), StorageError> {
    let raw = serde_json::to_string(value).map_err(|e| StorageError::Encode(e.to_string()))?;
    store.set(key, &raw)
}

/// In-memory store used by tests and as a stand-in when browser storage is absent.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: RefCell<HashMap<String, String>>,
    failing: Cell<bool>,
    failing_writes: RefCell<Vec<String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a store pre-populated with `entries`.
    pub fn with_entries<'a>(entries: impl IntoIterator<Item = (&'a str, &'a str)>) -> Self {
        let store = Self::new();
        store
            .entries
            .borrow_mut()
            .extend(entries.into_iter().map(|(k, v)| (k.to_owned(), v.to_owned())));
        store
    }

    /// Make every subsequent operation fail as if storage were disabled.
    pub fn set_failing(&self, failing: bool) {
        self.failing.set(failing);
    }

    /// Make writes to `key` fail while reads and other keys keep working.
    pub fn fail_writes_to(&self, key: &str) {
        self.failing_writes.borrow_mut().push(key.to_owned());
    }

    pub fn contains(&self, key: &str) -> bool {
        self.entries.borrow().contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.entries.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.borrow().is_empty()
    }

    fn check(&self) -> Result<(), StorageError> {
        if self.failing.get() {
            return Err(StorageError::Unavailable);
        }
        Ok(())
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        self.check()?;
        Ok(self.entries.borrow().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.check()?;
        if self.failing_writes.borrow().iter().any(|k| k == key) {
            return Err(StorageError::Access(format!("write rejected: {key}")));
        }
        self.entries.borrow_mut().insert(key.to_owned(), value.to_owned());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        self.check()?;
        self.entries.borrow_mut().remove(key);
        Ok(())
    }
}

/// The browser's `window.localStorage`.
///
/// Outside the `csr` build there is no browser, so `open` always fails with
/// `StorageError::Unavailable`.
#[derive(Clone, Debug)]
pub struct LocalStorage {
    #[cfg(feature = "csr")]
    inner: web_sys::Storage,
}

impl LocalStorage {
    /// Acquire `window.localStorage`.
    ///
    /// # Errors
    ///
    /// Returns an error if there is no window or storage is disabled.
    pub fn open() -> Result<Self, StorageError> {
        #[cfg(feature = "csr")]
        {
            let window = web_sys::window().ok_or(StorageError::Unavailable)?;
            let inner = window
                .local_storage()
                .map_err(|e| StorageError::Access(format!("{e:?}")))?
                .ok_or(StorageError::Unavailable)?;
            Ok(Self { inner })
        }
        #[cfg(not(feature = "csr"))]
        {
            Err(StorageError::Unavailable)
        }
    }
}

impl KeyValueStore for LocalStorage {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        #[cfg(feature = "csr")]
        {
            self.inner.get_item(key).map_err(|e| StorageError::Access(format!("{e:?}")))
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = key;
            Err(StorageError::Unavailable)
        }
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        #[cfg(feature = "csr")]
        {
            self.inner
                .set_item(key, value)
                .map_err(|e| StorageError::Access(format!("{e:?}")))
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (key, value);
            Err(StorageError::Unavailable)
        }
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        #[cfg(feature = "csr")]
        {
            self.inner.remove_item(key).map_err(|e| StorageError::Access(format!("{e:?}")))
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = key;
            Err(StorageError::Unavailable)
        }
    }
}
