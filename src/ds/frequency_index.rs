//! Frequency → [`RecencyBucket`] index.
//!
//! Buckets are created the first time an entry reaches their frequency and
//! stay in the map after they drain; only [`FrequencyIndex::prune_empty`]
//! removes them, and only when a caller asks.
//!
//! Populated buckets are additionally threaded in ascending frequency order:
//!
//! ```text
//!   buckets: { 1: [..], 2: [], 3: [..], 7: [..] }
//!
//!   lowest = 1
//!   thread:  1 ──next──► 3 ──next──► 7       (2 is empty, so unthreaded)
//! ```
//!
//! The thread lets a caller that removes the last entry of the lowest bucket
//! find the new lowest populated frequency in O(1) instead of probing upward.

use rustc_hash::FxHashMap;

use crate::ds::recency_bucket::{Linked, RecencyBucket};
use crate::ds::slot_arena::{SlotArena, SlotId};

/// Default bucket pre-allocation for typical frequency distributions.
/// Most entries cluster at low frequencies, so 32 buckets covers most cases.
pub const DEFAULT_BUCKET_PREALLOC: usize = 32;

/// Larger hints are clamped; the map grows on demand past this.
pub const MAX_BUCKET_PREALLOC: usize = 1 << 12;

#[derive(Debug, Default)]
struct FreqBucket {
    list: RecencyBucket,
    prev: Option<u64>,
    next: Option<u64>,
}

#[derive(Debug)]
pub struct FrequencyIndex {
    buckets: FxHashMap<u64, FreqBucket>,
    lowest: Option<u64>,
}

impl FrequencyIndex {
    pub fn new() -> Self {
        Self::with_bucket_hint(DEFAULT_BUCKET_PREALLOC)
    }

    pub fn with_bucket_hint(bucket_hint: usize) -> Self {
        let prealloc = bucket_hint.min(MAX_BUCKET_PREALLOC);
        Self {
            buckets: FxHashMap::with_capacity_and_hasher(prealloc, Default::default()),
            lowest: None,
        }
    }

    /// Lowest frequency whose bucket has members.
    #[inline]
    pub fn lowest(&self) -> Option<u64> {
        self.lowest
    }

    /// Bucket at `freq`, if it was ever created.
    #[inline]
    pub fn bucket(&self, freq: u64) -> Option<&RecencyBucket> {
        self.buckets.get(&freq).map(|bucket| &bucket.list)
    }

    /// Number of buckets in the map, drained ones included.
    pub fn bucket_count(&self) -> usize {
        self.buckets.len()
    }

    /// Nearest populated frequency below `freq`, if `freq` itself is populated.
    #[inline]
    pub fn populated_below(&self, freq: u64) -> Option<u64> {
        self.buckets.get(&freq).and_then(|bucket| bucket.prev)
    }

    /// Appends `id` as most recent in the bucket at `freq`, creating it lazily.
    ///
    /// `below` must be the nearest populated frequency under `freq` (or `None`
    /// when there is none); it is only consulted if the bucket was empty.
    pub fn push_most_recent<T: Linked>(
        &mut self,
        arena: &mut SlotArena<T>,
        freq: u64,
        id: SlotId,
        below: Option<u64>,
    ) {
        let was_empty = self.buckets.get(&freq).is_none_or(|bucket| bucket.list.is_empty());
        if was_empty {
            self.thread(freq, below);
        }
        self.buckets
            .entry(freq)
            .or_default()
            .list
            .append_most_recent(arena, id);
    }

    /// Unlinks `id` from the bucket at `freq`; returns `true` if that drained it.
    pub fn remove<T: Linked>(&mut self, arena: &mut SlotArena<T>, freq: u64, id: SlotId) -> bool {
        let Some(bucket) = self.buckets.get_mut(&freq) else {
            debug_assert!(false, "no bucket at frequency {freq}");
            return false;
        };
        bucket.list.remove(arena, id);
        let drained = bucket.list.is_empty();
        if drained {
            self.unthread(freq);
        }
        drained
    }

    /// Pops the least recent member of the bucket at `freq`.
    pub fn pop_least_recent<T: Linked>(
        &mut self,
        arena: &mut SlotArena<T>,
        freq: u64,
    ) -> Option<SlotId> {
        let bucket = self.buckets.get_mut(&freq)?;
        let id = bucket.list.remove_least_recent(arena)?;
        if bucket.list.is_empty() {
            self.unthread(freq);
        }
        Some(id)
    }

    /// Moves `id` to the most recent end of its own bucket.
    pub fn refresh<T: Linked>(&mut self, arena: &mut SlotArena<T>, freq: u64, id: SlotId) {
        if let Some(bucket) = self.buckets.get_mut(&freq) {
            bucket.list.remove(arena, id);
            bucket.list.append_most_recent(arena, id);
        }
    }

    /// Drops every drained bucket from the map; returns how many were dropped.
    pub fn prune_empty(&mut self) -> usize {
        let before = self.buckets.len();
        self.buckets.retain(|_, bucket| !bucket.list.is_empty());
        before - self.buckets.len()
    }

    pub fn clear(&mut self) {
        self.buckets.clear();
        self.lowest = None;
    }

    /// Populated buckets in ascending frequency order.
    pub fn iter_populated(&self) -> PopulatedIter<'_> {
        PopulatedIter {
            index: self,
            current: self.lowest,
        }
    }

    /// All buckets, drained ones included, in unspecified order.
    pub fn iter_all(&self) -> impl Iterator<Item = (u64, &RecencyBucket)> {
        self.buckets.iter().map(|(&freq, bucket)| (freq, &bucket.list))
    }

    /// Thread links of the bucket at `freq` as `(prev, next)`.
    pub fn thread_links(&self, freq: u64) -> Option<(Option<u64>, Option<u64>)> {
        self.buckets
            .get(&freq)
            .map(|bucket| (bucket.prev, bucket.next))
    }

    fn thread(&mut self, freq: u64, below: Option<u64>) {
        let next = match below {
            Some(below) => self.buckets.get(&below).and_then(|bucket| bucket.next),
            None => self.lowest,
        };
        debug_assert!(below.is_none_or(|b| b < freq));
        debug_assert!(next.is_none_or(|n| n > freq));

        let bucket = self.buckets.entry(freq).or_default();
        bucket.prev = below;
        bucket.next = next;

        match below {
            Some(below) => {
                if let Some(below_bucket) = self.buckets.get_mut(&below) {
                    below_bucket.next = Some(freq);
                }
            },
            None => self.lowest = Some(freq),
        }
        if let Some(next) = next
            && let Some(next_bucket) = self.buckets.get_mut(&next)
        {
            next_bucket.prev = Some(freq);
        }
    }

    fn unthread(&mut self, freq: u64) {
        let Some(bucket) = self.buckets.get_mut(&freq) else {
            return;
        };
        let prev = bucket.prev.take();
        let next = bucket.next.take();

        match prev {
            Some(prev) => {
                if let Some(prev_bucket) = self.buckets.get_mut(&prev) {
                    prev_bucket.next = next;
                }
            },
            None => self.lowest = next,
        }
        if let Some(next) = next
            && let Some(next_bucket) = self.buckets.get_mut(&next)
        {
            next_bucket.prev = prev;
        }
    }
}

impl Default for FrequencyIndex {
    fn default() -> Self {
        Self::new()
    }
}

pub struct PopulatedIter<'a> {
    index: &'a FrequencyIndex,
    current: Option<u64>,
}

impl<'a> Iterator for PopulatedIter<'a> {
    type Item = (u64, &'a RecencyBucket);

    fn next(&mut self) -> Option<Self::Item> {
        let freq = self.current?;
        let bucket = self.index.buckets.get(&freq)?;
        self.current = bucket.next;
        Some((freq, &bucket.list))
    }
}
