//! Browser local storage as a [`KeyValueStore`].

use folio_core::traits::{KeyValueStore, StoreError};
use web_sys::{Storage, Window};

/// Local storage for the page's origin.
///
/// Storage can be missing (privacy modes, sandboxed frames). Reads then
/// return nothing and writes fail with `StoreError::Unavailable`.
#[derive(Debug, Clone)]
pub struct LocalStorage {
    storage: Option<Storage>,
}

impl LocalStorage {
    pub fn new(window: &Window) -> Self {
        let storage = window.local_storage().ok().flatten();
        if storage.is_none() {
            log::info!("Local storage unavailable; preferences will not persist");
        }
        Self { storage }
    }

    pub fn is_available(&self) -> bool {
        self.storage.is_some()
    }

    fn storage(&self) -> Result<&Storage, StoreError> {
        self.storage
            .as_ref()
            .ok_or_else(|| StoreError::Unavailable("localStorage".to_string()))
    }
}

impl KeyValueStore for LocalStorage {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        let Some(storage) = self.storage.as_ref() else {
            return Ok(None);
        };
        storage
            .get_item(key)
            .map_err(|e| StoreError::Unavailable(format!("{:?}", e)))
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        self.storage()?
            .set_item(key, value)
            .map_err(|e| StoreError::WriteFailed {
                key: key.to_string(),
                message: format!("{:?}", e),
            })
    }
}
