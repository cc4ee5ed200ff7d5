//! Persistent Store Adapter
//!
//! Synchronous key-value access to durable storage.
//! `BrowserStore` is backed by `window.localStorage`; `MemoryStore` is
//! an in-process map for tests.

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use serde::de::DeserializeOwned;
use serde::Serialize;
use wasm_bindgen::JsValue;

/// Errors raised by the storage layer
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("localStorage is not available")]
    Unavailable,
    #[error("storage access failed: {0}")]
    Access(String),
    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),
}

impl From<JsValue> for StoreError {
    fn from(value: JsValue) -> Self {
        StoreError::Access(value.as_string().unwrap_or_else(|| format!("{:?}", value)))
    }
}

/// Raw string key-value storage
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError>;
    fn set(&self, key: &str, value: &str) -> Result<(), StoreError>;
}

/// Read and decode a JSON record. Absent key yields `None`.
pub fn load_json<T: DeserializeOwned>(store: &dyn KeyValueStore, key: &str) -> Result<Option<T>, StoreError> {
    match store.get(key)? {
        Some(raw) => Ok(Some(serde_json::from_str(&raw)?)),
        None => Ok(None),
    }
}

/// Encode and write a JSON record
pub fn save_json<T: Serialize + ?Sized>(store: &dyn KeyValueStore, key: &str, value: &T) -> Result<(), StoreError> {
    let raw = serde_json::to_string(value)?;
    store.set(key, &raw)
}

/// `window.localStorage`
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserStore;

impl BrowserStore {
    fn storage(&self) -> Result<web_sys::Storage, StoreError> {
        let window = web_sys::window().ok_or(StoreError::Unavailable)?;
        window.local_storage()?.ok_or(StoreError::Unavailable)
    }
}

impl KeyValueStore for BrowserStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        Ok(self.storage()?.get_item(key)?)
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        self.storage()?.set_item(key, value)?;
        Ok(())
    }
}

/// Shared in-memory map; clones see the same entries
#[cfg_attr(not(test), allow(dead_code))]
#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    entries: Rc<RefCell<HashMap<String, String>>>,
    writes: Rc<RefCell<usize>>,
}

#[cfg_attr(not(test), allow(dead_code))]
impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_entry(self, key: &str, value: &str) -> Self {
        self.entries.borrow_mut().insert(key.to_string(), value.to_string());
        self
    }

    /// Raw value as last written
    pub fn raw(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }

    /// Number of `set` calls so far
    pub fn write_count(&self) -> usize {
        *self.writes.borrow()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        Ok(self.raw(key))
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        self.entries.borrow_mut().insert(key.to_string(), value.to_string());
        *self.writes.borrow_mut() += 1;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;

    #[test]
    fn test_load_absent_key() {
        let store = MemoryStore::new();
        let loaded: Option<Vec<u32>> = load_json(&store, "missing").unwrap();
        assert!(loaded.is_none());
    }

    #[test]
    fn test_save_then_load_shares_entries() {
        let store = MemoryStore::new();
        let handle = store.clone();

        let mut map = BTreeMap::new();
        map.insert(1u32, vec!["a".to_string()]);
        save_json(&store, "todos", &map).unwrap();

        assert_eq!(handle.raw("todos").as_deref(), Some(r#"{"1":["a"]}"#));
        assert_eq!(handle.write_count(), 1);

        let back: BTreeMap<u32, Vec<String>> = load_json(&handle, "todos").unwrap().unwrap();
        assert_eq!(back, map);
    }

    #[test]
    fn test_corrupt_json_is_an_error() {
        let store = MemoryStore::new().with_entry("todos", "{not json");
        let result: Result<Option<BTreeMap<u32, Vec<String>>>, _> = load_json(&store, "todos");
        assert!(matches!(result, Err(StoreError::Json(_))));
    }
}
