// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! In-memory config store fake for testing without filesystem I/O.

use compressor_core::{ConfigError, ConfigStore};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

/// In-memory implementation of [`ConfigStore`] for testing.
///
/// Tracks call counts and can be told to fail, so tests can check how
/// callers react to a broken store.
///
/// # Example
///
/// ```
/// use compressor_dry_tests::InMemoryConfigStore;
/// use compressor_core::{ConfigService, RegistryConfig};
///
/// let store = InMemoryConfigStore::new();
/// let service = ConfigService::new(store.clone());
///
/// assert_eq!(service.registry_config().unwrap(), RegistryConfig::default());
/// assert_eq!(store.load_count(), 1);
/// ```
#[derive(Clone, Default)]
pub struct InMemoryConfigStore {
    inner: Arc<Mutex<InMemoryConfigStoreInner>>,
}

#[derive(Default)]
struct InMemoryConfigStoreInner {
    data: HashMap<String, Vec<u8>>,
    load_count: usize,
    save_count: usize,
    fail_on_load: bool,
    fail_on_save: bool,
}

impl InMemoryConfigStore {
    /// Create a new empty in-memory config store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store holding `data` under `key`.
    pub fn with_entry(key: &str, data: &[u8]) -> Self {
        let store = Self::new();
        store
            .inner
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .data
            .insert(key.to_string(), data.to_vec());
        store
    }

    /// Configure the store to fail on load operations.
    pub fn set_fail_on_load(&self, fail: bool) {
        let mut inner = self.inner.lock().unwrap_or_else(|e| e.into_inner());
        inner.fail_on_load = fail;
    }

    /// Configure the store to fail on save operations.
    pub fn set_fail_on_save(&self, fail: bool) {
        let mut inner = self.inner.lock().unwrap_or_else(|e| e.into_inner());
        inner.fail_on_save = fail;
    }

    /// Number of `load_raw` calls, failed ones included.
    pub fn load_count(&self) -> usize {
        self.inner
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .load_count
    }

    /// Number of `save_raw` calls, failed ones included.
    pub fn save_count(&self) -> usize {
        self.inner
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .save_count
    }

    /// Raw bytes stored under `key`.
    pub fn raw(&self, key: &str) -> Option<Vec<u8>> {
        self.inner
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .data
            .get(key)
            .cloned()
    }
}

impl ConfigStore for InMemoryConfigStore {
    fn load_raw(&self, key: &str) -> Result<Vec<u8>, ConfigError> {
        let mut inner = self.inner.lock().unwrap_or_else(|e| e.into_inner());
        inner.load_count += 1;

        if inner.fail_on_load {
            return Err(ConfigError::Other("simulated load failure".into()));
        }

        inner.data.get(key).cloned().ok_or(ConfigError::NotFound)
    }

    fn save_raw(&self, key: &str, data: &[u8]) -> Result<(), ConfigError> {
        let mut inner = self.inner.lock().unwrap_or_else(|e| e.into_inner());
        inner.save_count += 1;

        if inner.fail_on_save {
            return Err(ConfigError::Other("simulated save failure".into()));
        }

        inner.data.insert(key.to_string(), data.to_vec());
        Ok(())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use compressor_core::{ConfigService, RegistryConfig, REGISTRY_CONFIG_KEY};

    #[test]
    fn load_missing_key_returns_not_found() {
        let store = InMemoryConfigStore::new();
        assert!(matches!(store.load_raw("missing"), Err(ConfigError::NotFound)));
    }

    #[test]
    fn with_entry_prepopulates_registry_config() {
        let store =
            InMemoryConfigStore::with_entry(REGISTRY_CONFIG_KEY, br#"{"cache_misses": false}"#);
        let config = ConfigService::new(store.clone()).registry_config().unwrap();
        assert!(!config.cache_misses);
        assert!(config.degenerate_fallback);
        assert_eq!(store.save_count(), 0);
    }

    #[test]
    fn service_save_goes_through_store() {
        let store = InMemoryConfigStore::new();
        let service = ConfigService::new(store.clone());
        service
            .save(REGISTRY_CONFIG_KEY, &RegistryConfig::default())
            .unwrap();
        assert_eq!(store.save_count(), 1);
        assert!(store.raw(REGISTRY_CONFIG_KEY).is_some());
    }

    #[test]
    fn failures_surface_as_other_and_still_count() {
        let store = InMemoryConfigStore::new();
        store.set_fail_on_load(true);
        store.set_fail_on_save(true);
        let service = ConfigService::new(store.clone());
        assert!(matches!(
            service.registry_config(),
            Err(ConfigError::Other(_))
        ));
        assert!(service.save("k", &1_u8).is_err());
        assert_eq!(store.load_count(), 1);
        assert_eq!(store.save_count(), 1);
        assert!(store.raw("k").is_none());
    }

    #[test]
    fn clone_shares_state_between_instances() {
        let a = InMemoryConfigStore::new();
        let b = a.clone();
        a.save_raw("shared", b"v").unwrap();
        assert_eq!(b.load_raw("shared").unwrap(), b"v");
        assert_eq!(b.save_count(), 1);
    }
}
