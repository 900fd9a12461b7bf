// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Lookup engine: owns the mined tables and the identity-keyed answer cache.
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use rustc_hash::FxHashMap;
use tracing::{info, instrument};

use crate::config::RegistryConfig;
use crate::host::GenericRecipe;
use crate::ident::ItemKey;
use crate::item::ItemStack;
use crate::miner::{MiningReport, RecipeMiner};
use crate::recipe::{CompressedRecipe, RecipeTables};

/// Counters for lookups since the last reload.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub struct LookupStats {
    /// Answers served from the cache (positive or negative).
    pub hits: usize,
    /// Answers that required a table scan.
    pub misses: usize,
    /// Queries rejected up front because they carried metadata.
    pub metadata_rejections: usize,
}

#[derive(Debug, Default)]
struct StatCounters {
    hits: AtomicUsize,
    misses: AtomicUsize,
    metadata_rejections: AtomicUsize,
}

impl StatCounters {
    fn bump(counter: &AtomicUsize) {
        counter.fetch_add(1, Ordering::Relaxed);
    }

    fn snapshot(&self) -> LookupStats {
        LookupStats {
            hits: self.hits.load(Ordering::Relaxed),
            misses: self.misses.load(Ordering::Relaxed),
            metadata_rejections: self.metadata_rejections.load(Ordering::Relaxed),
        }
    }
}

/// Answers "does a compressed form of this item exist, and what is it".
///
/// The registry is populated by [`reload`](Self::reload) and queried with
/// [`lookup`](Self::lookup). Lookups never touch host rules: they scan the
/// mined tables (`large` before `small`, discovery order within each) and
/// remember the answer per [`ItemKey`], including "no recipe".
///
/// [`RegistryConfig::cache_misses`] exists for debugging; with it off,
/// "no recipe" answers are not remembered and each repeat miss rescans.
///
/// # Metadata
///
/// Stacks carrying extended metadata never compress. The check happens
/// before the cache is consulted and writes no cache entry.
#[derive(Debug)]
pub struct CompressionRegistry {
    config: RegistryConfig,
    miner: RecipeMiner,
    tables: RecipeTables,
    cache: FxHashMap<ItemKey, Option<Arc<CompressedRecipe>>>,
    stats: StatCounters,
    generation: u64,
}

impl CompressionRegistry {
    /// Creates an empty registry with default configuration.
    pub fn new() -> Self {
        Self::with_config(RegistryConfig::default())
    }

    /// Creates an empty registry using `config`.
    pub fn with_config(config: RegistryConfig) -> Self {
        Self {
            config,
            miner: RecipeMiner::new(&config),
            tables: RecipeTables::default(),
            cache: FxHashMap::default(),
            stats: StatCounters::default(),
            generation: 0,
        }
    }

    /// Active configuration.
    pub fn config(&self) -> &RegistryConfig {
        &self.config
    }

    /// Discards all derived state and mines `recipes` from scratch.
    ///
    /// Must complete before lookups are trusted; the cache is cleared first
    /// so no answer from the previous rule set survives.
    #[instrument(skip_all)]
    pub fn reload<I>(&mut self, recipes: I) -> MiningReport
    where
        I: IntoIterator,
        I::Item: GenericRecipe,
    {
        self.cache.clear();
        self.tables.clear();
        self.stats = StatCounters::default();
        self.generation = self.generation.wrapping_add(1);
        let (tables, report) = self.miner.mine(recipes);
        self.tables = tables;
        info!(
            scanned = report.recipes_scanned,
            small = report.small_recorded,
            large = report.large_recorded,
            fallback = report.fallback_recorded,
            skipped_arity = report.skipped_arity,
            malformed = report.malformed_probes,
            "compressed recipe tables rebuilt"
        );
        report
    }

    /// Returns the compressed recipe for `query`, if any.
    pub fn lookup(&mut self, query: &ItemStack) -> Option<Arc<CompressedRecipe>> {
        if query.has_metadata() {
            self.note_metadata_rejection();
            return None;
        }
        let key = ItemKey::of(query);
        if let Some(cached) = self.cached(&key) {
            self.note_hit();
            return cached;
        }
        self.note_miss();
        let found = self.tables.find(query).cloned();
        self.remember(key, found.clone());
        found
    }

    /// Cache-free answer for `query`; always equal to what
    /// [`lookup`](Self::lookup) returns.
    pub fn resolve(&self, query: &ItemStack) -> Option<Arc<CompressedRecipe>> {
        if query.has_metadata() {
            return None;
        }
        self.tables.find(query).cloned()
    }

    /// Cached answer for `query` without mutating anything.
    ///
    /// `None` means "not cached"; `Some(None)` is a cached "no recipe".
    /// Metadata-bearing queries are answered as a definite `Some(None)`.
    pub fn peek(&self, query: &ItemStack) -> Option<Option<Arc<CompressedRecipe>>> {
        if query.has_metadata() {
            return Some(None);
        }
        self.cached(&ItemKey::of(query))
    }

    /// Number of reloads performed so far.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub(crate) fn cached(&self, key: &ItemKey) -> Option<Option<Arc<CompressedRecipe>>> {
        self.cache.get(key).cloned()
    }

    pub(crate) fn remember(&mut self, key: ItemKey, answer: Option<Arc<CompressedRecipe>>) {
        if answer.is_some() || self.config.cache_misses {
            self.cache.insert(key, answer);
        }
    }

    pub(crate) fn note_hit(&self) {
        StatCounters::bump(&self.stats.hits);
    }

    pub(crate) fn note_miss(&self) {
        StatCounters::bump(&self.stats.misses);
    }

    pub(crate) fn note_metadata_rejection(&self) {
        StatCounters::bump(&self.stats.metadata_rejections);
    }

    /// Mined tables.
    pub fn tables(&self) -> &RecipeTables {
        &self.tables
    }

    /// Number of cached answers.
    pub fn cached_len(&self) -> usize {
        self.cache.len()
    }

    /// Returns `true` when an answer for `key` is cached.
    pub fn is_cached(&self, key: &ItemKey) -> bool {
        self.cache.contains_key(key)
    }

    /// Lookup counters since the last reload.
    pub fn stats(&self) -> LookupStats {
        self.stats.snapshot()
    }
}

impl Default for CompressionRegistry {
    fn default() -> Self {
        Self::new()
    }
}
