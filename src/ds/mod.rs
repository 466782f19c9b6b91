pub mod frequency_index;
pub mod recency_bucket;
pub mod slot_arena;

pub use frequency_index::{DEFAULT_BUCKET_PREALLOC, FrequencyIndex};
pub use recency_bucket::{Linked, Links, RecencyBucket};
pub use slot_arena::{MAX_SLOTS, SlotArena, SlotId};
