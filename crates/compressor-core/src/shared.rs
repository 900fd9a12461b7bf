// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Lock-protected registry handle for hosts that query from several threads.
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::config::RegistryConfig;
use crate::host::GenericRecipe;
use crate::ident::ItemKey;
use crate::item::ItemStack;
use crate::miner::MiningReport;
use crate::recipe::CompressedRecipe;
use crate::registry::{CompressionRegistry, LookupStats};

/// Cloneable handle to one [`CompressionRegistry`] behind a read/write lock.
///
/// `reload` holds the write lock for its whole duration. `lookup` answers
/// cache hits under the read lock, so concurrent lookups of known items do
/// not serialise; a miss resolves under the read lock and promotes to the
/// write lock only to record the answer.
#[derive(Clone, Debug, Default)]
pub struct SharedRegistry {
    inner: Arc<RwLock<CompressionRegistry>>,
}

impl SharedRegistry {
    /// Wraps `registry`.
    pub fn new(registry: CompressionRegistry) -> Self {
        Self {
            inner: Arc::new(RwLock::new(registry)),
        }
    }

    /// Creates an empty shared registry using `config`.
    pub fn with_config(config: RegistryConfig) -> Self {
        Self::new(CompressionRegistry::with_config(config))
    }

    fn read(&self) -> RwLockReadGuard<'_, CompressionRegistry> {
        self.inner.read().unwrap_or_else(|e| e.into_inner())
    }

    fn write(&self) -> RwLockWriteGuard<'_, CompressionRegistry> {
        self.inner.write().unwrap_or_else(|e| e.into_inner())
    }

    /// See [`CompressionRegistry::reload`].
    pub fn reload<I>(&self, recipes: I) -> MiningReport
    where
        I: IntoIterator,
        I::Item: GenericRecipe,
    {
        self.write().reload(recipes)
    }

    /// See [`CompressionRegistry::lookup`].
    pub fn lookup(&self, query: &ItemStack) -> Option<Arc<CompressedRecipe>> {
        let key = ItemKey::of(query);
        let (generation, resolved) = {
            let registry = self.read();
            if query.has_metadata() {
                registry.note_metadata_rejection();
                return None;
            }
            if let Some(cached) = registry.cached(&key) {
                registry.note_hit();
                return cached;
            }
            (registry.generation(), registry.resolve(query))
        };
        let mut registry = self.write();
        // Another lookup may have answered between releasing the read lock
        // and acquiring the write lock.
        if let Some(cached) = registry.cached(&key) {
            registry.note_hit();
            return cached;
        }
        let resolved = if registry.generation() == generation {
            resolved
        } else {
            registry.resolve(query)
        };
        registry.note_miss();
        registry.remember(key, resolved.clone());
        resolved
    }

    /// See [`CompressionRegistry::stats`].
    pub fn stats(&self) -> LookupStats {
        self.read().stats()
    }

    /// See [`CompressionRegistry::cached_len`].
    pub fn cached_len(&self) -> usize {
        self.read().cached_len()
    }

    /// Runs `f` with shared access to the registry.
    pub fn with_registry<T>(&self, f: impl FnOnce(&CompressionRegistry) -> T) -> T {
        f(&self.read())
    }
}
