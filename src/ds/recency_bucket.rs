//! Intrusive recency list over a [`SlotArena`].
//!
//! A [`RecencyBucket`] orders the entries that share one access frequency,
//! from most recently touched (head) to least recently touched (tail). The
//! bucket only stores the two ends and a count; the per-entry links live in
//! the entries themselves, which is what makes removing an arbitrary member
//! O(1).
//!
//! ```text
//!   head (MRU)                               tail (LRU, evicted first)
//!      │                                          │
//!      ▼                                          ▼
//!   [id_4] ◄──► [id_9] ◄──► [id_1] ◄──► [id_7]
//! ```
//!
//! Entry types opt in by implementing [`Linked`].

use crate::ds::slot_arena::{SlotArena, SlotId};

/// Neighbour links stored inside each entry.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Links {
    pub prev: Option<SlotId>,
    pub next: Option<SlotId>,
}

impl Links {
    #[inline]
    pub fn is_detached(&self) -> bool {
        self.prev.is_none() && self.next.is_none()
    }
}

/// Arena values that can sit in a [`RecencyBucket`].
pub trait Linked {
    fn links(&self) -> &Links;
    fn links_mut(&mut self) -> &mut Links;
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct RecencyBucket {
    head: Option<SlotId>,
    tail: Option<SlotId>,
    len: usize,
}

impl RecencyBucket {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Most recently touched member.
    #[inline]
    pub fn most_recent(&self) -> Option<SlotId> {
        self.head
    }

    /// Least recently touched member (the next eviction victim of this bucket).
    #[inline]
    pub fn least_recent(&self) -> Option<SlotId> {
        self.tail
    }

    /// Links `id` in as the most recently touched member.
    ///
    /// `id` must not currently belong to any bucket.
    pub fn append_most_recent<T: Linked>(&mut self, arena: &mut SlotArena<T>, id: SlotId) {
        let old_head = self.head;
        let Some(entry) = arena.get_mut(id) else {
            debug_assert!(false, "append of a dead slot {id:?}");
            return;
        };
        let links = entry.links_mut();
        debug_assert!(links.is_detached(), "slot {id:?} is still linked");
        links.prev = None;
        links.next = old_head;

        match old_head.and_then(|head| arena.get_mut(head)) {
            Some(head) => head.links_mut().prev = Some(id),
            None => self.tail = Some(id),
        }
        self.head = Some(id);
        self.len += 1;
    }

    /// Unlinks `id`, which must be a member of this bucket.
    pub fn remove<T: Linked>(&mut self, arena: &mut SlotArena<T>, id: SlotId) {
        let Some(entry) = arena.get_mut(id) else {
            debug_assert!(false, "remove of a dead slot {id:?}");
            return;
        };
        let Links { prev, next } = std::mem::take(entry.links_mut());
        debug_assert!(prev.is_some() || self.head == Some(id), "{id:?} is not in this bucket");
        debug_assert!(next.is_some() || self.tail == Some(id), "{id:?} is not in this bucket");

        match prev.and_then(|prev| arena.get_mut(prev)) {
            Some(prev_entry) => prev_entry.links_mut().next = next,
            None => self.head = next,
        }
        match next.and_then(|next| arena.get_mut(next)) {
            Some(next_entry) => next_entry.links_mut().prev = prev,
            None => self.tail = prev,
        }
        self.len -= 1;
    }

    /// Unlinks and returns the least recently touched member.
    pub fn remove_least_recent<T: Linked>(&mut self, arena: &mut SlotArena<T>) -> Option<SlotId> {
        let id = self.tail?;
        self.remove(arena, id);
        Some(id)
    }

    /// Members from most to least recently touched.
    pub fn iter<'a, T: Linked>(&self, arena: &'a SlotArena<T>) -> RecencyIter<'a, T> {
        RecencyIter {
            arena,
            current: self.head,
        }
    }
}

pub struct RecencyIter<'a, T> {
    arena: &'a SlotArena<T>,
    current: Option<SlotId>,
}

impl<'a, T: Linked> Iterator for RecencyIter<'a, T> {
    type Item = (SlotId, &'a T);

    fn next(&mut self) -> Option<Self::Item> {
        let id = self.current?;
        let entry = self.arena.get(id)?;
        self.current = entry.links().next;
        Some((id, entry))
    }
}
