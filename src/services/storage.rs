use log::warn;
use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;
use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum StorageError {
    #[error("local storage is not available")]
    Unavailable,
    #[error("failed to read `{key}`: {reason}")]
    Read { key: String, reason: String },
    #[error("failed to write `{key}`: {reason}")]
    Write { key: String, reason: String },
}

/// String key-value persistence, the shape of `window.localStorage`.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;
    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;
}

pub struct BrowserStorage {
    storage: web_sys::Storage,
}

impl BrowserStorage {
    pub fn open() -> Result<Self, StorageError> {
        let window = web_sys::window().ok_or(StorageError::Unavailable)?;
        match window.local_storage() {
            Ok(Some(storage)) => Ok(Self { storage }),
            _ => Err(StorageError::Unavailable),
        }
    }
}

impl KeyValueStore for BrowserStorage {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        self.storage.get_item(key).map_err(|err| StorageError::Read {
            key: key.to_string(),
            reason: format!("{err:?}"),
        })
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.storage.set_item(key, value).map_err(|err| StorageError::Write {
            key: key.to_string(),
            reason: format!("{err:?}"),
        })
    }
}

/// Lives as long as the page. Used when local storage is blocked.
#[derive(Clone, Default)]
pub struct MemoryStorage {
    entries: Rc<RefCell<HashMap<String, String>>>,
}

impl KeyValueStore for MemoryStorage {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.entries.borrow().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }
}

pub fn local_or_memory() -> Rc<dyn KeyValueStore> {
    match BrowserStorage::open() {
        Ok(storage) => Rc::new(storage),
        Err(err) => {
            warn!("{err}; consent will not survive a reload");
            Rc::new(MemoryStorage::default())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn memory_storage_round_trips_values() {
        let store = MemoryStorage::default();
        assert_eq!(store.get("nlo-cookies-ok"), Ok(None));
        store.set("nlo-cookies-ok", "1").unwrap();
        assert_eq!(store.get("nlo-cookies-ok"), Ok(Some("1".to_string())));
    }

    #[test]
    fn clones_share_entries() {
        let store = MemoryStorage::default();
        let other = store.clone();
        other.set("k", "v").unwrap();
        assert_eq!(store.get("k"), Ok(Some("v".to_string())));
    }

    #[test]
    fn errors_name_the_key() {
        let err = StorageError::Write {
            key: "nlo-cookies-ok".into(),
            reason: "QuotaExceededError".into(),
        };
        assert_eq!(
            err.to_string(),
            "failed to write `nlo-cookies-ok`: QuotaExceededError"
        );
    }
}
