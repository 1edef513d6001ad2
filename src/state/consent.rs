use crate::services::storage::{KeyValueStore, StorageError};
use log::warn;
use std::rc::Rc;

/// Persisted "cookies accepted" flag. Once set the banner never returns.
#[derive(Clone)]
pub struct ConsentFlag {
    store: Rc<dyn KeyValueStore>,
    key: String,
}

impl ConsentFlag {
    pub fn new(store: Rc<dyn KeyValueStore>, key: &str) -> Self {
        Self {
            store,
            key: key.to_string(),
        }
    }

    pub fn is_given(&self) -> bool {
        match self.store.get(&self.key) {
            Ok(value) => value.is_some_and(|v| !v.is_empty()),
            Err(err) => {
                warn!("{err}");
                false
            }
        }
    }

    pub fn should_prompt(&self) -> bool {
        !self.is_given()
    }

    pub fn accept(&self) -> Result<(), StorageError> {
        self.store.set(&self.key, "1")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::storage::MemoryStorage;

    const KEY: &str = "nlo-cookies-ok";

    struct BrokenStore;

    impl KeyValueStore for BrokenStore {
        fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
            Err(StorageError::Read {
                key: key.to_string(),
                reason: "SecurityError".to_string(),
            })
        }

        fn set(&self, key: &str, _value: &str) -> Result<(), StorageError> {
            Err(StorageError::Write {
                key: key.to_string(),
                reason: "SecurityError".to_string(),
            })
        }
    }

    #[test]
    fn first_visit_prompts_and_accept_is_remembered() {
        let store = MemoryStorage::default();

        let first_mount = ConsentFlag::new(Rc::new(store.clone()), KEY);
        assert!(first_mount.should_prompt());
        first_mount.accept().unwrap();
        assert_eq!(store.get(KEY), Ok(Some("1".to_string())));

        let second_mount = ConsentFlag::new(Rc::new(store), KEY);
        assert!(!second_mount.should_prompt());
    }

    #[test]
    fn empty_value_counts_as_absent() {
        let store = MemoryStorage::default();
        store.set(KEY, "").unwrap();
        assert!(ConsentFlag::new(Rc::new(store), KEY).should_prompt());
    }

    #[test]
    fn unreadable_storage_prompts_and_reports_write_failure() {
        let consent = ConsentFlag::new(Rc::new(BrokenStore), KEY);
        assert!(consent.should_prompt());
        assert!(matches!(consent.accept(), Err(StorageError::Write { .. })));
    }
}
