//! Token storage backed by `window.localStorage`

use gloo::storage::{LocalStorage, Storage};
use keyward_http::{StoreError, TokenStore};

/// Raw string access to local storage.
///
/// Values are stored verbatim rather than JSON-encoded so other scripts on
/// the page read the same token strings.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalStorageStore;

impl TokenStore for LocalStorageStore {
    fn get(&self, key: &str) -> Option<String> {
        LocalStorage::raw().get_item(key).ok().flatten()
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        LocalStorage::raw()
            .set_item(key, value)
            .map_err(|err| StoreError {
                key: key.to_string(),
                reason: err.as_string().unwrap_or_else(|| format!("{err:?}")),
            })
    }

    fn remove(&self, key: &str) {
        if LocalStorage::raw().remove_item(key).is_err() {
            warn!(key, "Failed to remove item from local storage");
        }
    }
}
