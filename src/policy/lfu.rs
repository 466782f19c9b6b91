//! # LFU (Least Frequently Used) Cache
//!
//! An O(1) LFU cache. When full, inserting a new key evicts the entry with the
//! lowest access count; among entries tied at that count, the one touched
//! longest ago goes first.
//!
//! ## Architecture
//!
//! ```text
//!   ┌──────────────────────────────────────────────────────────────────────────┐
//!   │                            LfuCache<K, V>                                │
//!   │                                                                          │
//!   │   index: FxHashMap<K, SlotId>       entries: SlotArena<Entry<K, V>>      │
//!   │   ┌─────────┬────────┐              ┌──────┬─────────────────────────┐   │
//!   │   │ "a"     │ id_0   │─────────────►│ id_0 │ freq 3, value, links    │   │
//!   │   │ "b"     │ id_1   │─────────────►│ id_1 │ freq 1, value, links    │   │
//!   │   │ "c"     │ id_2   │─────────────►│ id_2 │ freq 1, value, links    │   │
//!   │   └─────────┴────────┘              └──────┴─────────────────────────┘   │
//!   │                                                                          │
//!   │   buckets: FrequencyIndex (freq → RecencyBucket)                         │
//!   │                                                                          │
//!   │     min_freq = 1                                                         │
//!   │        │                                                                 │
//!   │        ▼                                                                 │
//!   │     freq=1: [id_2] ◄──► [id_1]      MRU ... LRU (evict from here)        │
//!   │     freq=2: (empty, kept)                                                │
//!   │     freq=3: [id_0]                                                       │
//!   │                                                                          │
//!   │   capacity: usize (0 disables the cache)                                 │
//!   └──────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The arena owns every entry. The key index and the recency buckets hold
//! [`SlotId`]s, so moving an entry between buckets never copies it.
//!
//! ## Promotion (every hit, every overwrite)
//!
//! ```text
//!   f = entry.freq
//!   1. unlink entry from bucket f
//!   2. bucket f drained and f == min_freq  →  min_freq = f + 1
//!   3. entry.freq = f + 1
//!   4. append entry as most recent in bucket f + 1 (created on first use)
//! ```
//!
//! Step 2 needs no search: `f` was the minimum and the promoted entry is about
//! to populate `f + 1`.
//!
//! ## Eviction (insert of a new key at capacity)
//!
//! ```text
//!   1. bucket at min_freq  →  remove its least recent entry
//!   2. drop that key from the index, free its slot
//!   3. the new entry goes into bucket 1 and min_freq = 1
//! ```
//!
//! ## Operations
//!
//! | Method                   | Complexity | Notes                                   |
//! |--------------------------|------------|-----------------------------------------|
//! | `get(&k)`                | O(1)       | Promotes on hit                         |
//! | `put(k, v)` / `insert`   | O(1)       | Overwrite counts as an access           |
//! | `remove(&k)`             | O(1)       | Next minimum found via bucket thread    |
//! | `pop_lfu()`              | O(1)       | Evicts on demand                        |
//! | `peek_lfu()`             | O(1)       | No state change                         |
//! | `frequency(&k)`          | O(1)       |                                         |
//! | `increment_frequency(&k)`| O(1)       | Promotion without a value read          |
//! | `prune_empty_buckets()`  | O(buckets) | Only ever runs when called              |
//! | `check_invariants()`     | O(n)       | Structural audit                        |
//!
//! ## Notes
//!
//! - **Zero capacity**: every insert is dropped and every lookup misses.
//! - **Drained buckets** stay in the frequency index until
//!   [`LfuCache::prune_empty_buckets`] is called.
//! - **Saturation**: an entry at `u64::MAX` stays there; a further access
//!   only refreshes its recency.
//! - **Thread safety**: `LfuCache` is not synchronized. With the
//!   `concurrency` feature, [`ConcurrentLfuCache`] wraps one behind a single
//!   `parking_lot::RwLock`.
//!
//! ## Example
//!
//! ```
//! use freqcache::policy::lfu::LfuCache;
//! use freqcache::traits::{CoreCache, LfuCacheTrait};
//!
//! let mut cache = LfuCache::new(2);
//! cache.put(1, "one");
//! cache.put(2, "two");
//! assert_eq!(cache.get(&1), Some(&"one"));
//!
//! // 1 has frequency 2, 2 has frequency 1: 2 is evicted
//! cache.put(3, "three");
//! assert_eq!(cache.get(&2), None);
//! assert_eq!(cache.frequency(&1), Some(2));
//! assert_eq!(cache.size(), 2);
//! ```

use std::hash::Hash;
#[cfg(feature = "concurrency")]
use std::sync::Arc;

#[cfg(feature = "concurrency")]
use parking_lot::RwLock;
use rustc_hash::FxHashMap;
use tracing::{debug, trace};

use crate::ds::frequency_index::{DEFAULT_BUCKET_PREALLOC, FrequencyIndex};
use crate::ds::recency_bucket::{Linked, Links};
use crate::ds::slot_arena::{MAX_SLOTS, SlotArena, SlotId};
use crate::error::InvariantError;
#[cfg(feature = "metrics")]
use crate::metrics::metrics_impl::LfuMetrics;
#[cfg(feature = "metrics")]
use crate::metrics::snapshot::LfuMetricsSnapshot;
#[cfg(feature = "metrics")]
use crate::metrics::traits::{
    CoreMetricsRecorder, LfuMetricsReadRecorder, LfuMetricsRecorder, MetricsReset,
    MetricsSnapshotProvider,
};
use crate::traits::{CoreCache, LfuCacheTrait, MutableCache};

/// Upper bound on up-front allocation; larger caches grow on demand.
const MAX_PREALLOC: usize = 1 << 16;

#[derive(Debug)]
struct Entry<K, V> {
    links: Links,
    freq: u64,
    key: K,
    value: V,
}

impl<K, V> Linked for Entry<K, V> {
    #[inline]
    fn links(&self) -> &Links {
        &self.links
    }

    #[inline]
    fn links_mut(&mut self) -> &mut Links {
        &mut self.links
    }
}

/// LFU cache with LRU tie-breaking.
///
/// See the [module documentation](self) for the data layout.
#[derive(Debug)]
pub struct LfuCache<K, V>
where
    K: Eq + Hash + Clone,
{
    entries: SlotArena<Entry<K, V>>,
    index: FxHashMap<K, SlotId>,
    buckets: FrequencyIndex,
    // 0 while empty
    min_freq: u64,
    capacity: usize,
    #[cfg(feature = "metrics")]
    metrics: LfuMetrics,
}

impl<K, V> LfuCache<K, V>
where
    K: Eq + Hash + Clone,
{
    /// Creates a cache holding at most `capacity` entries.
    ///
    /// A capacity of 0 yields a cache that drops every insert.
    pub fn new(capacity: usize) -> Self {
        Self::with_bucket_hint(capacity, DEFAULT_BUCKET_PREALLOC)
    }

    /// Creates a cache and pre-sizes the frequency index for `bucket_hint`
    /// distinct frequencies.
    ///
    /// Capacities above [`MAX_SLOTS`] are clamped to it.
    pub fn with_bucket_hint(capacity: usize, bucket_hint: usize) -> Self {
        let capacity = capacity.min(MAX_SLOTS);
        if capacity == 0 {
            debug!("lfu cache created with zero capacity; inserts will be dropped");
        }
        let prealloc = capacity.min(MAX_PREALLOC);
        Self {
            entries: SlotArena::with_capacity(prealloc),
            index: FxHashMap::with_capacity_and_hasher(prealloc, Default::default()),
            buckets: FrequencyIndex::with_bucket_hint(bucket_hint),
            min_freq: 0,
            capacity,
            #[cfg(feature = "metrics")]
            metrics: LfuMetrics::default(),
        }
    }

    /// Creates a cache from a signed capacity request.
    ///
    /// Zero or negative requests produce a disabled cache rather than an
    /// error.
    ///
    /// ```
    /// use freqcache::policy::lfu::LfuCache;
    /// use freqcache::traits::CoreCache;
    ///
    /// let mut cache = LfuCache::from_requested_capacity(-5);
    /// cache.put(1, 1);
    /// assert_eq!(cache.get(&1), None);
    /// assert_eq!(cache.capacity(), 0);
    /// ```
    pub fn from_requested_capacity(requested: i64) -> Self {
        if requested <= 0 {
            debug!(requested, "non-positive capacity requested; cache disabled");
            return Self::new(0);
        }
        Self::new(usize::try_from(requested).unwrap_or(usize::MAX))
    }

    /// Stores `value` under `key`.
    ///
    /// Same as [`CoreCache::insert`] but discards the previous value.
    #[inline]
    pub fn put(&mut self, key: K, value: V) {
        let _ = CoreCache::insert(self, key, value);
    }

    /// Number of live entries.
    #[inline]
    pub fn size(&self) -> usize {
        self.index.len()
    }

    /// Reads a value without counting an access.
    pub fn peek(&self, key: &K) -> Option<&V> {
        let id = *self.index.get(key)?;
        self.entries.get(id).map(|entry| &entry.value)
    }

    /// Lowest frequency among live entries, `None` when empty.
    pub fn min_freq(&self) -> Option<u64> {
        if self.min_freq == 0 {
            None
        } else {
            Some(self.min_freq)
        }
    }

    /// Number of frequency buckets ever created and not yet pruned.
    pub fn bucket_count(&self) -> usize {
        self.buckets.bucket_count()
    }

    /// Number of entries at `freq`, or `None` if no bucket exists for it.
    pub fn bucket_len(&self, freq: u64) -> Option<usize> {
        self.buckets.bucket(freq).map(|bucket| bucket.len())
    }

    /// Drops drained buckets from the frequency index.
    ///
    /// Never runs implicitly. Returns the number of buckets dropped.
    ///
    /// ```
    /// use freqcache::policy::lfu::LfuCache;
    /// use freqcache::traits::CoreCache;
    ///
    /// let mut cache = LfuCache::new(4);
    /// cache.put("a", 1);
    /// cache.get(&"a");
    /// cache.get(&"a");
    /// // buckets 1 and 2 were drained on the way to 3
    /// assert_eq!(cache.bucket_count(), 3);
    /// assert_eq!(cache.prune_empty_buckets(), 2);
    /// assert_eq!(cache.bucket_count(), 1);
    /// ```
    pub fn prune_empty_buckets(&mut self) -> usize {
        let pruned = self.buckets.prune_empty();
        trace!(pruned, remaining = self.buckets.bucket_count(), "pruned lfu buckets");
        #[cfg(feature = "metrics")]
        self.metrics.record_buckets_pruned(pruned);
        pruned
    }

    /// Live entries in ascending frequency, most recent first within a
    /// frequency.
    ///
    /// Frequency order matches eviction order, recency order within a
    /// frequency does not: the next victim is the *last* entry of the first
    /// frequency. Use [`peek_lfu`](LfuCacheTrait::peek_lfu) for it.
    pub fn iter_by_frequency(&self) -> impl Iterator<Item = (&K, &V, u64)> + '_ {
        self.buckets
            .iter_populated()
            .flat_map(move |(_, bucket)| bucket.iter(&self.entries))
            .map(|(_, entry)| (&entry.key, &entry.value, entry.freq))
    }

    /// Moves the entry at `id` one frequency up and returns its new frequency.
    fn promote(&mut self, id: SlotId) -> Option<u64> {
        let freq = self.entries.get(id)?.freq;
        let Some(next_freq) = freq.checked_add(1) else {
            self.buckets.refresh(&mut self.entries, freq, id);
            return Some(freq);
        };

        let below = self.buckets.populated_below(freq);
        let drained = self.buckets.remove(&mut self.entries, freq, id);
        if drained && freq == self.min_freq {
            self.min_freq = next_freq;
        }

        if let Some(entry) = self.entries.get_mut(id) {
            entry.freq = next_freq;
        }
        let below = if drained { below } else { Some(freq) };
        self.buckets
            .push_most_recent(&mut self.entries, next_freq, id, below);

        debug_assert_eq!(self.buckets.lowest(), self.min_freq());
        #[cfg(feature = "metrics")]
        self.metrics.record_promotion();
        Some(next_freq)
    }

    /// Removes the least recent entry of the `min_freq` bucket.
    ///
    /// Leaves `min_freq` alone; callers resynchronize it.
    fn evict_min_freq(&mut self) -> Option<(K, V)> {
        let id = self
            .buckets
            .pop_least_recent(&mut self.entries, self.min_freq)?;
        let entry = self.entries.remove(id)?;
        self.index.remove(&entry.key);
        trace!(freq = entry.freq, len = self.index.len(), "evicted lfu entry");
        Some((entry.key, entry.value))
    }

    /// Audits the cross-structure invariants.
    ///
    /// Checks that the key index, the arena and the recency buckets describe
    /// the same set of entries, that every entry sits in the bucket of its own
    /// frequency, and that `min_freq` names the lowest populated bucket.
    pub fn check_invariants(&self) -> Result<(), InvariantError> {
        let len = self.index.len();
        if self.capacity > 0 && len > self.capacity {
            return Err(InvariantError::new(format!(
                "len {len} exceeds capacity {}",
                self.capacity
            )));
        }
        if len != self.entries.len() {
            return Err(InvariantError::new(format!(
                "index holds {len} keys but arena holds {} entries",
                self.entries.len()
            )));
        }
        for (key, &id) in &self.index {
            let Some(entry) = self.entries.get(id) else {
                return Err(InvariantError::new(format!("index points at dead slot {id:?}")));
            };
            if entry.key != *key {
                return Err(InvariantError::new(format!("slot {id:?} holds another key")));
            }
            if entry.freq == 0 {
                return Err(InvariantError::new(format!("slot {id:?} has frequency 0")));
            }
        }

        if len == 0 {
            if let Some(lowest) = self.buckets.lowest() {
                return Err(InvariantError::new(format!(
                    "empty cache still threads bucket {lowest}"
                )));
            }
            return Ok(());
        }

        if self.buckets.lowest() != Some(self.min_freq) {
            return Err(InvariantError::new(format!(
                "min_freq {} but lowest populated bucket is {:?}",
                self.min_freq,
                self.buckets.lowest()
            )));
        }

        let mut seen = 0usize;
        let mut threaded = 0usize;
        let mut last_freq: Option<u64> = None;
        for (freq, bucket) in self.buckets.iter_populated() {
            threaded += 1;
            if bucket.is_empty() {
                return Err(InvariantError::new(format!("empty bucket {freq} is threaded")));
            }
            if last_freq.is_some_and(|last| last >= freq) {
                return Err(InvariantError::new(format!(
                    "bucket thread not ascending at {freq}"
                )));
            }
            if self.buckets.thread_links(freq).map(|(prev, _)| prev) != Some(last_freq) {
                return Err(InvariantError::new(format!("bucket {freq} has a bad prev link")));
            }

            let mut prev_id: Option<SlotId> = None;
            let mut count = 0usize;
            for (id, entry) in bucket.iter(&self.entries).take(bucket.len() + 1) {
                if entry.freq != freq {
                    return Err(InvariantError::new(format!(
                        "entry with frequency {} sits in bucket {freq}",
                        entry.freq
                    )));
                }
                if entry.links.prev != prev_id {
                    return Err(InvariantError::new(format!("broken prev link at {id:?}")));
                }
                if self.index.get(&entry.key) != Some(&id) {
                    return Err(InvariantError::new(format!("{id:?} is not indexed by its key")));
                }
                prev_id = Some(id);
                count += 1;
            }
            if count != bucket.len() {
                return Err(InvariantError::new(format!(
                    "bucket {freq} reports {} entries but links {count}",
                    bucket.len()
                )));
            }
            if bucket.least_recent() != prev_id {
                return Err(InvariantError::new(format!("bucket {freq} has a stale tail")));
            }
            seen += count;
            last_freq = Some(freq);
        }

        if seen != len {
            return Err(InvariantError::new(format!(
                "buckets link {seen} entries but cache holds {len}"
            )));
        }
        let populated = self
            .buckets
            .iter_all()
            .filter(|(_, bucket)| !bucket.is_empty())
            .count();
        if populated != threaded {
            return Err(InvariantError::new(format!(
                "{populated} populated buckets but only {threaded} threaded"
            )));
        }
        Ok(())
    }
}

impl<K, V> CoreCache<K, V> for LfuCache<K, V>
where
    K: Eq + Hash + Clone,
{
    fn insert(&mut self, key: K, value: V) -> Option<V> {
        #[cfg(feature = "metrics")]
        self.metrics.record_insert_call();

        if self.capacity == 0 {
            return None;
        }

        if let Some(&id) = self.index.get(&key) {
            #[cfg(feature = "metrics")]
            self.metrics.record_insert_update();

            let entry = self.entries.get_mut(id)?;
            let previous = std::mem::replace(&mut entry.value, value);
            self.promote(id);
            return Some(previous);
        }

        #[cfg(feature = "metrics")]
        self.metrics.record_insert_new();

        if self.index.len() >= self.capacity {
            #[cfg(feature = "metrics")]
            self.metrics.record_evict_call();

            if let Some((_key, _value)) = self.evict_min_freq() {
                #[cfg(feature = "metrics")]
                self.metrics.record_evicted_entry();
            }
        }

        let id = self.entries.insert(Entry {
            links: Links::default(),
            freq: 1,
            key: key.clone(),
            value,
        });
        self.index.insert(key, id);
        self.buckets.push_most_recent(&mut self.entries, 1, id, None);
        self.min_freq = 1;

        None
    }

    fn get(&mut self, key: &K) -> Option<&V> {
        let Some(&id) = self.index.get(key) else {
            #[cfg(feature = "metrics")]
            self.metrics.record_get_miss();
            return None;
        };

        self.promote(id);

        #[cfg(feature = "metrics")]
        self.metrics.record_get_hit();

        self.entries.get(id).map(|entry| &entry.value)
    }

    fn contains(&self, key: &K) -> bool {
        self.index.contains_key(key)
    }

    fn len(&self) -> usize {
        self.index.len()
    }

    fn capacity(&self) -> usize {
        self.capacity
    }

    fn clear(&mut self) {
        #[cfg(feature = "metrics")]
        self.metrics.record_clear();
        self.entries.clear();
        self.index.clear();
        self.buckets.clear();
        self.min_freq = 0;
    }
}

impl<K, V> MutableCache<K, V> for LfuCache<K, V>
where
    K: Eq + Hash + Clone,
{
    fn remove(&mut self, key: &K) -> Option<V> {
        #[cfg(feature = "metrics")]
        self.metrics.record_remove_call();

        let id = self.index.remove(key)?;
        let freq = self.entries.get(id)?.freq;
        let drained = self.buckets.remove(&mut self.entries, freq, id);
        if drained && freq == self.min_freq {
            self.min_freq = self.buckets.lowest().unwrap_or(0);
        }

        #[cfg(feature = "metrics")]
        self.metrics.record_remove_found();

        self.entries.remove(id).map(|entry| entry.value)
    }
}

impl<K, V> LfuCacheTrait<K, V> for LfuCache<K, V>
where
    K: Eq + Hash + Clone,
{
    fn pop_lfu(&mut self) -> Option<(K, V)> {
        #[cfg(feature = "metrics")]
        self.metrics.record_pop_lfu_call();

        let result = self.evict_min_freq();
        self.min_freq = self.buckets.lowest().unwrap_or(0);

        #[cfg(feature = "metrics")]
        if result.is_some() {
            self.metrics.record_pop_lfu_found();
        }

        result
    }

    fn peek_lfu(&self) -> Option<(&K, &V)> {
        #[cfg(feature = "metrics")]
        (&self.metrics).record_peek_lfu_call();

        let id = self.buckets.bucket(self.min_freq)?.least_recent()?;
        let entry = self.entries.get(id)?;

        #[cfg(feature = "metrics")]
        (&self.metrics).record_peek_lfu_found();

        Some((&entry.key, &entry.value))
    }

    fn frequency(&self, key: &K) -> Option<u64> {
        #[cfg(feature = "metrics")]
        (&self.metrics).record_frequency_call();

        let result = self
            .index
            .get(key)
            .and_then(|&id| self.entries.get(id))
            .map(|entry| entry.freq);

        #[cfg(feature = "metrics")]
        if result.is_some() {
            (&self.metrics).record_frequency_found();
        }

        result
    }

    fn increment_frequency(&mut self, key: &K) -> Option<u64> {
        #[cfg(feature = "metrics")]
        self.metrics.record_increment_frequency_call();

        let id = *self.index.get(key)?;
        let new_freq = self.promote(id)?;

        #[cfg(feature = "metrics")]
        self.metrics.record_increment_frequency_found();

        Some(new_freq)
    }
}

#[cfg(feature = "metrics")]
impl<K, V> LfuCache<K, V>
where
    K: Eq + Hash + Clone,
{
    pub fn metrics_snapshot(&self) -> LfuMetricsSnapshot {
        LfuMetricsSnapshot {
            get_calls: self.metrics.get_calls,
            get_hits: self.metrics.get_hits,
            get_misses: self.metrics.get_misses,
            insert_calls: self.metrics.insert_calls,
            insert_updates: self.metrics.insert_updates,
            insert_new: self.metrics.insert_new,
            evict_calls: self.metrics.evict_calls,
            evicted_entries: self.metrics.evicted_entries,
            promotions: self.metrics.promotions,
            remove_calls: self.metrics.remove_calls,
            remove_found: self.metrics.remove_found,
            pop_lfu_calls: self.metrics.pop_lfu_calls,
            pop_lfu_found: self.metrics.pop_lfu_found,
            peek_lfu_calls: self.metrics.peek_lfu_calls.get(),
            peek_lfu_found: self.metrics.peek_lfu_found.get(),
            frequency_calls: self.metrics.frequency_calls.get(),
            frequency_found: self.metrics.frequency_found.get(),
            increment_frequency_calls: self.metrics.increment_frequency_calls,
            increment_frequency_found: self.metrics.increment_frequency_found,
            buckets_pruned: self.metrics.buckets_pruned,
            clears: self.metrics.clears,
            cache_len: self.index.len(),
            capacity: self.capacity,
            bucket_count: self.buckets.bucket_count(),
            min_freq: self.min_freq,
        }
    }
}

#[cfg(feature = "metrics")]
impl<K, V> MetricsSnapshotProvider<LfuMetricsSnapshot> for LfuCache<K, V>
where
    K: Eq + Hash + Clone,
{
    fn snapshot(&self) -> LfuMetricsSnapshot {
        self.metrics_snapshot()
    }
}

#[cfg(feature = "metrics")]
impl<K, V> MetricsReset for LfuCache<K, V>
where
    K: Eq + Hash + Clone,
{
    fn reset_metrics(&mut self) {
        self.metrics.reset_metrics();
    }
}

/// Thread-safe [`LfuCache`] behind one `parking_lot::RwLock`.
///
/// Every call is atomic with respect to every other call. Lookups that
/// promote (`get`, `put`, `increment_frequency`) take the write lock; pure
/// reads (`peek`, `contains`, `frequency`, `len`) share the read lock.
/// Values come back cloned because no reference may outlive the guard.
///
/// ```
/// use freqcache::policy::lfu::ConcurrentLfuCache;
///
/// let cache = ConcurrentLfuCache::new(2);
/// let handle = cache.clone();
/// std::thread::spawn(move || handle.put(1, "one".to_string()))
///     .join()
///     .unwrap();
/// assert_eq!(cache.get(&1), Some("one".to_string()));
/// ```
#[cfg(feature = "concurrency")]
#[derive(Debug)]
pub struct ConcurrentLfuCache<K, V>
where
    K: Eq + Hash + Clone,
{
    inner: Arc<RwLock<LfuCache<K, V>>>,
}

#[cfg(feature = "concurrency")]
impl<K, V> Clone for ConcurrentLfuCache<K, V>
where
    K: Eq + Hash + Clone,
{
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

#[cfg(feature = "concurrency")]
impl<K, V> ConcurrentLfuCache<K, V>
where
    K: Eq + Hash + Clone + Send + Sync,
    V: Send + Sync,
{
    pub fn new(capacity: usize) -> Self {
        Self::from_cache(LfuCache::new(capacity))
    }

    pub fn from_requested_capacity(requested: i64) -> Self {
        Self::from_cache(LfuCache::from_requested_capacity(requested))
    }

    pub fn from_cache(cache: LfuCache<K, V>) -> Self {
        Self {
            inner: Arc::new(RwLock::new(cache)),
        }
    }

    pub fn get(&self, key: &K) -> Option<V>
    where
        V: Clone,
    {
        let mut cache = self.inner.write();
        cache.get(key).cloned()
    }

    pub fn put(&self, key: K, value: V) {
        let mut cache = self.inner.write();
        cache.put(key, value);
    }

    pub fn insert(&self, key: K, value: V) -> Option<V> {
        let mut cache = self.inner.write();
        cache.insert(key, value)
    }

    pub fn remove(&self, key: &K) -> Option<V> {
        let mut cache = self.inner.write();
        cache.remove(key)
    }

    pub fn pop_lfu(&self) -> Option<(K, V)> {
        let mut cache = self.inner.write();
        cache.pop_lfu()
    }

    pub fn increment_frequency(&self, key: &K) -> Option<u64> {
        let mut cache = self.inner.write();
        cache.increment_frequency(key)
    }

    pub fn peek(&self, key: &K) -> Option<V>
    where
        V: Clone,
    {
        let cache = self.inner.read();
        cache.peek(key).cloned()
    }

    pub fn frequency(&self, key: &K) -> Option<u64> {
        let cache = self.inner.read();
        cache.frequency(key)
    }

    pub fn contains(&self, key: &K) -> bool {
        let cache = self.inner.read();
        cache.contains(key)
    }

    pub fn len(&self) -> usize {
        let cache = self.inner.read();
        cache.len()
    }

    pub fn size(&self) -> usize {
        self.len()
    }

    pub fn is_empty(&self) -> bool {
        let cache = self.inner.read();
        cache.is_empty()
    }

    pub fn capacity(&self) -> usize {
        let cache = self.inner.read();
        cache.capacity()
    }

    pub fn clear(&self) {
        let mut cache = self.inner.write();
        cache.clear();
    }

    /// Runs `f` with exclusive access, for compound operations that must not
    /// interleave with other callers.
    pub fn with_lock<R>(&self, f: impl FnOnce(&mut LfuCache<K, V>) -> R) -> R {
        let mut cache = self.inner.write();
        f(&mut cache)
    }

    pub fn check_invariants(&self) -> Result<(), InvariantError> {
        let cache = self.inner.read();
        cache.check_invariants()
    }
}

#[cfg(all(feature = "metrics", feature = "concurrency"))]
impl<K, V> MetricsSnapshotProvider<LfuMetricsSnapshot> for ConcurrentLfuCache<K, V>
where
    K: Eq + Hash + Clone + Send + Sync,
    V: Send + Sync,
{
    fn snapshot(&self) -> LfuMetricsSnapshot {
        let cache = self.inner.read();
        cache.metrics_snapshot()
    }
}
