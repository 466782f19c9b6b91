//! Cache builder.
//!
//! Collects the knobs an [`LfuCache`] accepts and validates them at build
//! time. The capacity is taken as a signed request so that callers passing
//! through untrusted or computed sizes get a defined outcome for zero and
//! negative values.
//!
//! ## Example
//!
//! ```rust
//! use freqcache::builder::LfuCacheBuilder;
//! use freqcache::traits::CoreCache;
//!
//! let mut cache = LfuCacheBuilder::new(100)
//!     .bucket_hint(8)
//!     .build::<u64, String>();
//! cache.insert(1, "hello".to_string());
//! assert_eq!(cache.get(&1), Some(&"hello".to_string()));
//! ```
//!
//! ## Validation
//!
//! | Requested capacity | `build()`             | `try_build()` (strict)     |
//! |--------------------|-----------------------|----------------------------|
//! | `<= 0`             | disabled cache        | `Err(NonPositiveCapacity)` |
//! | `> u32::MAX`       | clamped to `u32::MAX` | `Err(CapacityTooLarge)`    |
//! | otherwise          | cache of that size    | cache of that size         |
//!
//! Without strict mode `try_build` behaves like `build` and never fails.

use std::hash::Hash;

use tracing::debug;

use crate::ds::frequency_index::DEFAULT_BUCKET_PREALLOC;
use crate::ds::slot_arena::MAX_SLOTS;
use crate::error::ConfigError;
use crate::policy::lfu::LfuCache;

/// Largest capacity the entry arena can address.
const MAX_CAPACITY: usize = MAX_SLOTS;

/// Builder for [`LfuCache`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LfuCacheBuilder {
    requested_capacity: i64,
    bucket_hint: usize,
    require_positive_capacity: bool,
}

impl LfuCacheBuilder {
    /// Creates a builder for a cache of `capacity` entries.
    pub fn new(capacity: i64) -> Self {
        Self {
            requested_capacity: capacity,
            bucket_hint: DEFAULT_BUCKET_PREALLOC,
            require_positive_capacity: false,
        }
    }

    /// Expected number of distinct frequencies, used to pre-size the
    /// frequency index. Oversized hints are clamped, never rejected.
    pub fn bucket_hint(mut self, hint: usize) -> Self {
        self.bucket_hint = hint;
        self
    }

    /// Rejects out-of-range capacities in [`try_build`](Self::try_build)
    /// instead of clamping them.
    pub fn require_positive_capacity(mut self, strict: bool) -> Self {
        self.require_positive_capacity = strict;
        self
    }

    /// Capacity the built cache will have under lenient validation.
    pub fn effective_capacity(&self) -> usize {
        if self.requested_capacity <= 0 {
            0
        } else {
            usize::try_from(self.requested_capacity)
                .unwrap_or(usize::MAX)
                .min(MAX_CAPACITY)
        }
    }

    /// Builds the cache, clamping a non-positive capacity to a disabled cache.
    pub fn build<K, V>(self) -> LfuCache<K, V>
    where
        K: Eq + Hash + Clone,
    {
        if self.requested_capacity <= 0 {
            debug!(
                requested = self.requested_capacity,
                "non-positive capacity requested; cache disabled"
            );
        }
        LfuCache::with_bucket_hint(self.effective_capacity(), self.bucket_hint)
    }

    /// Builds the cache, or reports why the configuration was rejected.
    ///
    /// ```rust
    /// use freqcache::builder::LfuCacheBuilder;
    /// use freqcache::error::ConfigError;
    ///
    /// let err = LfuCacheBuilder::new(-2)
    ///     .require_positive_capacity(true)
    ///     .try_build::<u64, u64>()
    ///     .unwrap_err();
    /// assert_eq!(err, ConfigError::NonPositiveCapacity { requested: -2 });
    ///
    /// // lenient mode never fails
    /// assert!(LfuCacheBuilder::new(-2).try_build::<u64, u64>().is_ok());
    /// ```
    pub fn try_build<K, V>(self) -> Result<LfuCache<K, V>, ConfigError>
    where
        K: Eq + Hash + Clone,
    {
        if self.require_positive_capacity {
            self.validate()?;
        }
        Ok(self.build())
    }

    fn validate(&self) -> Result<(), ConfigError> {
        let requested = self.requested_capacity;
        if requested <= 0 {
            return Err(ConfigError::NonPositiveCapacity { requested });
        }
        if !usize::try_from(requested).is_ok_and(|capacity| capacity <= MAX_CAPACITY) {
            return Err(ConfigError::CapacityTooLarge {
                requested,
                max: MAX_CAPACITY,
            });
        }
        Ok(())
    }
}

impl Default for LfuCacheBuilder {
    fn default() -> Self {
        Self::new(0)
    }
}
