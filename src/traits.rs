//! # Cache Traits
//!
//! The operation sets a frequency-based cache exposes, split by capability so
//! that generic code can ask for exactly what it needs.
//!
//! ```text
//!   ┌─────────────────────────────────────────┐
//!   │            CoreCache<K, V>              │
//!   │                                         │
//!   │  insert(&mut, K, V) → Option<V>         │
//!   │  get(&mut, &K) → Option<&V>             │
//!   │  contains(&, &K) → bool                 │
//!   │  len / is_empty / capacity / clear      │
//!   └──────────────────┬──────────────────────┘
//!                      │
//!                      ▼
//!   ┌─────────────────────────────────────────┐
//!   │          MutableCache<K, V>             │
//!   │                                         │
//!   │  remove(&K) → Option<V>                 │
//!   │  remove_batch(&[K])                     │
//!   └──────────────────┬──────────────────────┘
//!                      │
//!                      ▼
//!   ┌─────────────────────────────────────────┐
//!   │          LfuCacheTrait<K, V>            │
//!   │                                         │
//!   │  pop_lfu() → (K, V)                     │
//!   │  peek_lfu() → (&K, &V)                  │
//!   │  frequency(&K) → u64                    │
//!   │  increment_frequency(&K)                │
//!   └─────────────────────────────────────────┘
//! ```
//!
//! ## Notes
//!
//! - `get` takes `&mut self`: a hit is an access and changes eviction order.
//! - A miss is `None`, never an error.
//! - There is deliberately no way to lower an entry's frequency. Frequencies
//!   only grow for as long as the entry lives.
//! - None of these traits imply thread safety. See
//!   `ConcurrentLfuCache` (feature `concurrency`) for a locked wrapper.

/// Core cache operations.
///
/// # Example
///
/// ```
/// use freqcache::traits::CoreCache;
/// use freqcache::policy::lfu::LfuCache;
///
/// fn warm_cache<C: CoreCache<u64, String>>(cache: &mut C, data: &[(u64, String)]) {
///     for (key, value) in data {
///         cache.insert(*key, value.clone());
///     }
/// }
///
/// let mut cache = LfuCache::new(100);
/// warm_cache(&mut cache, &[(1, "one".to_string()), (2, "two".to_string())]);
/// assert_eq!(cache.len(), 2);
/// ```
pub trait CoreCache<K, V> {
    /// Inserts a key-value pair, returning the previous value if it existed.
    ///
    /// If the cache is full and `key` is new, one entry is evicted first.
    ///
    /// ```
    /// use freqcache::traits::CoreCache;
    /// use freqcache::policy::lfu::LfuCache;
    ///
    /// let mut cache = LfuCache::new(10);
    /// assert_eq!(cache.insert(1, "first"), None);
    /// assert_eq!(cache.insert(1, "second"), Some("first"));
    /// ```
    fn insert(&mut self, key: K, value: V) -> Option<V>;

    /// Gets a reference to a value by key, counting the call as an access.
    ///
    /// Use [`contains`](Self::contains) to test membership without
    /// affecting eviction order.
    fn get(&mut self, key: &K) -> Option<&V>;

    /// Checks if a key exists without updating access state.
    fn contains(&self, key: &K) -> bool;

    /// Returns the current number of entries.
    fn len(&self) -> usize;

    /// Returns `true` if the cache contains no entries.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns the maximum number of entries.
    fn capacity(&self) -> usize;

    /// Removes all entries.
    fn clear(&mut self);
}

/// Caches that support arbitrary key-based removal.
///
/// # Example
///
/// ```
/// use freqcache::traits::{CoreCache, MutableCache};
/// use freqcache::policy::lfu::LfuCache;
///
/// fn invalidate_keys<C: MutableCache<u64, String>>(cache: &mut C, keys: &[u64]) {
///     for key in keys {
///         cache.remove(key);
///     }
/// }
///
/// let mut cache = LfuCache::new(100);
/// cache.insert(1, "one".to_string());
/// cache.insert(2, "two".to_string());
/// cache.insert(3, "three".to_string());
///
/// invalidate_keys(&mut cache, &[1, 3]);
/// assert!(!cache.contains(&1));
/// assert!(cache.contains(&2));
/// assert!(!cache.contains(&3));
/// ```
pub trait MutableCache<K, V>: CoreCache<K, V> {
    /// Removes a key, returning its value if it was present.
    fn remove(&mut self, key: &K) -> Option<V>;

    /// Removes several keys; results are in input order.
    ///
    /// ```
    /// use freqcache::traits::{CoreCache, MutableCache};
    /// use freqcache::policy::lfu::LfuCache;
    ///
    /// let mut cache = LfuCache::new(10);
    /// cache.insert(1, "one");
    /// cache.insert(2, "two");
    /// cache.insert(3, "three");
    ///
    /// let removed = cache.remove_batch(&[1, 99, 3]);
    /// assert_eq!(removed, vec![Some("one"), None, Some("three")]);
    /// assert_eq!(cache.len(), 1);
    /// ```
    fn remove_batch(&mut self, keys: &[K]) -> Vec<Option<V>> {
        keys.iter().map(|k| self.remove(k)).collect()
    }
}

/// Frequency-ordered operations.
///
/// Among entries with equal frequency, the least recently touched one is
/// the LFU entry.
///
/// # Example
///
/// ```
/// use freqcache::traits::{CoreCache, LfuCacheTrait};
/// use freqcache::policy::lfu::LfuCache;
///
/// let mut cache: LfuCache<u64, &str> = LfuCache::new(3);
/// cache.insert(1, "first");
/// cache.insert(2, "second");
/// cache.insert(3, "third");
///
/// cache.get(&1);
/// cache.get(&1);
/// cache.get(&1);
///
/// // 1 insert + 3 gets
/// assert_eq!(cache.frequency(&1), Some(4));
/// assert_eq!(cache.frequency(&2), Some(1));
///
/// // 2 and 3 tie at frequency 1; 2 was touched longer ago
/// assert_eq!(cache.pop_lfu(), Some((2, "second")));
/// ```
pub trait LfuCacheTrait<K, V>: MutableCache<K, V> {
    /// Removes and returns the least frequently used entry.
    fn pop_lfu(&mut self) -> Option<(K, V)>;

    /// Returns the entry [`pop_lfu`](Self::pop_lfu) would remove, without
    /// touching it.
    fn peek_lfu(&self) -> Option<(&K, &V)>;

    /// Access count of `key`, or `None` if absent.
    fn frequency(&self, key: &K) -> Option<u64>;

    /// Counts an access to `key` without reading its value.
    ///
    /// Returns the new frequency, or `None` if the key is absent.
    ///
    /// ```
    /// use freqcache::traits::{CoreCache, LfuCacheTrait};
    /// use freqcache::policy::lfu::LfuCache;
    ///
    /// let mut cache: LfuCache<u64, &str> = LfuCache::new(10);
    /// cache.insert(1, "value");
    /// assert_eq!(cache.increment_frequency(&1), Some(2));
    /// assert_eq!(cache.increment_frequency(&1), Some(3));
    /// assert_eq!(cache.increment_frequency(&99), None);
    /// ```
    fn increment_frequency(&mut self, key: &K) -> Option<u64>;
}
