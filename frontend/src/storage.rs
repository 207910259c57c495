use log::{info, warn};
use thiserror::Error;
use web_sys::window;

use crate::config;
use crate::quiz::catalog::QuizAnswers;

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("local storage is not available")]
    Unavailable,
    #[error("failed to read `{key}`: {reason}")]
    Read { key: String, reason: String },
    #[error("failed to write `{key}`: {reason}")]
    Write { key: String, reason: String },
    #[error("failed to serialize answers: {0}")]
    Serialize(serde_json::Error),
    #[error("stored answers are malformed: {0}")]
    Deserialize(serde_json::Error),
}

pub trait KeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;
    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;
}

/// `window.localStorage`, looked up on every access.
#[derive(Clone, Copy, Debug, Default)]
pub struct LocalStorage;

impl LocalStorage {
    fn storage() -> Result<web_sys::Storage, StorageError> {
        window()
            .ok_or(StorageError::Unavailable)?
            .local_storage()
            .map_err(|_| StorageError::Unavailable)?
            .ok_or(StorageError::Unavailable)
    }
}

impl KeyValueStore for LocalStorage {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Self::storage()?.get_item(key).map_err(|e| StorageError::Read {
            key: key.to_string(),
            reason: format!("{:?}", e),
        })
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        Self::storage()?
            .set_item(key, value)
            .map_err(|e| StorageError::Write {
                key: key.to_string(),
                reason: format!("{:?}", e),
            })
    }
}

pub fn save_answers<S: KeyValueStore>(store: &S, answers: &QuizAnswers) -> Result<(), StorageError> {
    let json = serde_json::to_string(answers).map_err(StorageError::Serialize)?;
    store.set(config::ANSWERS_STORAGE_KEY, &json)
}

/// `Ok(None)` when nothing has been stored yet.
pub fn load_answers<S: KeyValueStore>(store: &S) -> Result<Option<QuizAnswers>, StorageError> {
    match store.get(config::ANSWERS_STORAGE_KEY)? {
        Some(json) => serde_json::from_str(&json)
            .map(Some)
            .map_err(StorageError::Deserialize),
        None => Ok(None),
    }
}

/// Reads the stored answers for display. Any failure is logged and treated
/// as if nothing had been stored.
pub fn load_answers_or_log<S: KeyValueStore>(store: &S) -> Option<QuizAnswers> {
    match load_answers(store) {
        Ok(Some(answers)) => {
            info!("Loaded quiz answers: {:?}", answers);
            Some(answers)
        }
        Ok(None) => {
            info!("No quiz answers found in local storage");
            None
        }
        Err(e) => {
            warn!("Ignoring stored quiz answers: {}", e);
            None
        }
    }
}

#[cfg(test)]
pub use memory::MemoryStore;

#[cfg(test)]
mod memory {
    use std::cell::RefCell;
    use std::collections::HashMap;
    use std::rc::Rc;

    use super::{KeyValueStore, StorageError};

    #[derive(Clone, Default)]
    pub struct MemoryStore {
        slots: Rc<RefCell<HashMap<String, String>>>,
        writes: Rc<RefCell<usize>>,
    }

    impl MemoryStore {
        pub fn with(key: &str, value: &str) -> Self {
            let store = Self::default();
            store.slots.borrow_mut().insert(key.to_string(), value.to_string());
            store
        }

        pub fn raw(&self, key: &str) -> Option<String> {
            self.slots.borrow().get(key).cloned()
        }

        pub fn writes(&self) -> usize {
            *self.writes.borrow()
        }
    }

    impl KeyValueStore for MemoryStore {
        fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
            Ok(self.slots.borrow().get(key).cloned())
        }

        fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
            *self.writes.borrow_mut() += 1;
            self.slots.borrow_mut().insert(key.to_string(), value.to_string());
            Ok(())
        }
    }
}
