//! Key-Value Store Adapter
//!
//! Thin wrapper over browser `sessionStorage` / `localStorage`.
//! Every operation reports failure through [`StoreResult`]; deciding what a
//! failure means is left to the caller (see `cart::CartRepository`).

use std::cell::RefCell;
use std::collections::HashMap;
use std::fmt;

use serde::de::DeserializeOwned;
use serde::Serialize;
use wasm_bindgen::{JsCast, JsValue};

/// Common result type for storage operations
pub type StoreResult<T> = Result<T, StoreError>;

/// Storage-level errors
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// Storage disabled, blocked by privacy settings, or no window
    #[error("storage unavailable: {0}")]
    Unavailable(String),
    #[error("storage quota exceeded writing {key}")]
    QuotaExceeded { key: String },
    /// Stored value is not valid JSON of the expected shape
    #[error("malformed value under {key}: {source}")]
    Malformed {
        key: String,
        #[source]
        source: serde_json::Error,
    },
    #[error("failed to serialize value: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Which browser storage area a store is bound to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreScope {
    /// Tab/session scoped, cleared when the session ends
    Session,
    /// Survives across sessions
    Local,
}

impl fmt::Display for StoreScope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StoreScope::Session => write!(f, "session"),
            StoreScope::Local => write!(f, "local"),
        }
    }
}

/// String-keyed store with synchronous get/set/remove
pub trait KeyValueStore {
    fn get(&self, key: &str) -> StoreResult<Option<String>>;

    /// Overwrites any prior value for `key`
    fn set(&self, key: &str, value: &str) -> StoreResult<()>;

    fn remove(&self, key: &str) -> StoreResult<()>;
}

impl<S: KeyValueStore + ?Sized> KeyValueStore for &S {
    fn get(&self, key: &str) -> StoreResult<Option<String>> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> StoreResult<()> {
        (**self).set(key, value)
    }

    fn remove(&self, key: &str) -> StoreResult<()> {
        (**self).remove(key)
    }
}

impl<S: KeyValueStore + ?Sized> KeyValueStore for Box<S> {
    fn get(&self, key: &str) -> StoreResult<Option<String>> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> StoreResult<()> {
        (**self).set(key, value)
    }

    fn remove(&self, key: &str) -> StoreResult<()> {
        (**self).remove(key)
    }
}

// ========================
// Typed Helpers
// ========================

/// Read a JSON array stored under `key`.
///
/// An absent key, an empty string and `null` all read as an empty list.
pub fn read_list<T, S>(store: &S, key: &str) -> StoreResult<Vec<T>>
where
    T: DeserializeOwned,
    S: KeyValueStore + ?Sized,
{
    let Some(raw) = store.get(key)? else {
        return Ok(Vec::new());
    };
    if raw.trim().is_empty() {
        return Ok(Vec::new());
    }
    let parsed: Option<Vec<T>> = serde_json::from_str(&raw).map_err(|source| StoreError::Malformed {
        key: key.to_string(),
        source,
    })?;
    Ok(parsed.unwrap_or_default())
}

/// Serialize `items` as a JSON array under `key`
pub fn write_list<T, S>(store: &S, key: &str, items: &[T]) -> StoreResult<()>
where
    T: Serialize,
    S: KeyValueStore + ?Sized,
{
    write_json(store, key, items)
}

pub fn write_json<T, S>(store: &S, key: &str, value: &T) -> StoreResult<()>
where
    T: Serialize + ?Sized,
    S: KeyValueStore + ?Sized,
{
    let raw = serde_json::to_string(value)?;
    store.set(key, &raw)
}

pub fn remove<S: KeyValueStore + ?Sized>(store: &S, key: &str) -> StoreResult<()> {
    store.remove(key)
}

// ========================
// Browser Storage
// ========================

/// Store backed by `window.sessionStorage` or `window.localStorage`
pub struct BrowserStore {
    storage: web_sys::Storage,
}

impl BrowserStore {
    pub fn session() -> StoreResult<Self> {
        Self::open(StoreScope::Session)
    }

    pub fn local() -> StoreResult<Self> {
        Self::open(StoreScope::Local)
    }

    fn open(scope: StoreScope) -> StoreResult<Self> {
        let window = web_sys::window().ok_or_else(|| StoreError::Unavailable("no window".to_string()))?;
        let storage = match scope {
            StoreScope::Session => window.session_storage(),
            StoreScope::Local => window.local_storage(),
        }
        .map_err(|e| StoreError::Unavailable(describe_js_error(&e)))?
        .ok_or_else(|| StoreError::Unavailable(format!("{} storage disabled", scope)))?;
        Ok(Self { storage })
    }
}

impl KeyValueStore for BrowserStore {
    fn get(&self, key: &str) -> StoreResult<Option<String>> {
        self.storage
            .get_item(key)
            .map_err(|e| StoreError::Unavailable(describe_js_error(&e)))
    }

    fn set(&self, key: &str, value: &str) -> StoreResult<()> {
        self.storage.set_item(key, value).map_err(|e| {
            if is_quota_error(&e) {
                StoreError::QuotaExceeded { key: key.to_string() }
            } else {
                StoreError::Unavailable(describe_js_error(&e))
            }
        })
    }

    fn remove(&self, key: &str) -> StoreResult<()> {
        self.storage
            .remove_item(key)
            .map_err(|e| StoreError::Unavailable(describe_js_error(&e)))
    }
}

fn is_quota_error(err: &JsValue) -> bool {
    err.dyn_ref::<web_sys::DomException>()
        .map(|e| e.name() == "QuotaExceededError")
        .unwrap_or(false)
}

fn describe_js_error(err: &JsValue) -> String {
    match err.dyn_ref::<web_sys::DomException>() {
        Some(e) => format!("{}: {}", e.name(), e.message()),
        None => format!("{:?}", err),
    }
}

// ========================
// In-Memory Storage
// ========================

#[derive(Debug, Clone, Copy, Default)]
enum MemoryMode {
    #[default]
    Normal,
    /// Every operation fails, like storage blocked by the browser
    Disabled,
    /// Writes fail once total key+value bytes would exceed the limit
    #[cfg(test)]
    Quota(usize),
}

/// Process-local store. Used in tests and as the stand-in when browser
/// storage cannot be opened.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: RefCell<HashMap<String, String>>,
    mode: MemoryMode,
}

impl MemoryStore {
    #[cfg(test)]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn disabled() -> Self {
        Self {
            mode: MemoryMode::Disabled,
            ..Self::default()
        }
    }

    #[cfg(test)]
    pub fn with_quota(bytes: usize) -> Self {
        Self {
            mode: MemoryMode::Quota(bytes),
            ..Self::default()
        }
    }

    fn check_enabled(&self) -> StoreResult<()> {
        match self.mode {
            MemoryMode::Disabled => Err(StoreError::Unavailable("memory store disabled".to_string())),
            _ => Ok(()),
        }
    }

    #[cfg(test)]
    fn check_quota(&self, key: &str, value: &str) -> StoreResult<()> {
        let MemoryMode::Quota(limit) = self.mode else {
            return Ok(());
        };
        let others: usize = self
            .entries
            .borrow()
            .iter()
            .filter(|(k, _)| k.as_str() != key)
            .map(|(k, v)| k.len() + v.len())
            .sum();
        if others + key.len() + value.len() > limit {
            return Err(StoreError::QuotaExceeded { key: key.to_string() });
        }
        Ok(())
    }

    #[cfg(not(test))]
    fn check_quota(&self, _key: &str, _value: &str) -> StoreResult<()> {
        Ok(())
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> StoreResult<Option<String>> {
        self.check_enabled()?;
        Ok(self.entries.borrow().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> StoreResult<()> {
        self.check_enabled()?;
        self.check_quota(key, value)?;
        self.entries.borrow_mut().insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> StoreResult<()> {
        self.check_enabled()?;
        self.entries.borrow_mut().remove(key);
        Ok(())
    }
}
