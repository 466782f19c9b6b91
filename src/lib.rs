//! freqcache: an O(1) least-frequently-used cache.
//!
//! Entries are ranked by how often they have been accessed; among entries
//! with the same count, the one touched longest ago is evicted first. Every
//! lookup, insert, promotion and eviction runs in constant time.
//!
//! ```
//! use freqcache::prelude::*;
//!
//! let mut cache = LfuCache::new(2);
//! cache.put(1, 1);
//! cache.put(2, 2);
//! assert_eq!(cache.get(&1), Some(&1));
//! cache.put(3, 3); // evicts 2
//! assert_eq!(cache.get(&2), None);
//! assert_eq!(cache.get(&3), Some(&3));
//! ```
//!
//! ## Layout
//!
//! - [`policy::lfu`]: the cache engine, plus `ConcurrentLfuCache` behind the
//!   `concurrency` feature.
//! - [`ds`]: the slot arena, recency buckets and frequency index it is built
//!   from.
//! - [`builder`]: validated construction from a signed capacity.
//! - [`traits`]: capability traits the engine implements.
//! - `metrics` (feature `metrics`): operation counters, snapshots and a
//!   Prometheus text exporter.

pub mod builder;
pub mod ds;
pub mod error;
pub mod policy;

#[cfg(feature = "metrics")]
pub mod metrics;

pub mod prelude;
pub mod traits;

pub use crate::builder::LfuCacheBuilder;
pub use crate::ds::{FrequencyIndex, RecencyBucket, SlotArena, SlotId};
pub use crate::error::{ConfigError, InvariantError};
#[cfg(feature = "metrics")]
pub use crate::metrics::snapshot::LfuMetricsSnapshot;
#[cfg(feature = "concurrency")]
pub use crate::policy::lfu::ConcurrentLfuCache;
pub use crate::policy::lfu::LfuCache;
