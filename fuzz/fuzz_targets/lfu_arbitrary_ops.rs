#![no_main]

use freqcache::policy::lfu::LfuCache;
use freqcache::traits::{CoreCache, LfuCacheTrait, MutableCache};
use libfuzzer_sys::fuzz_target;

// Arbitrary operation sequences against a small cache. The first byte picks
// the capacity; every following triple is (op, key, value).
fuzz_target!(|data: &[u8]| {
    let Some((&cap, ops)) = data.split_first() else {
        return;
    };
    let capacity = usize::from(cap % 16);
    let mut cache: LfuCache<u8, u8> = LfuCache::new(capacity);

    for chunk in ops.chunks_exact(3) {
        let (op, key, value) = (chunk[0] % 10, chunk[1] % 32, chunk[2]);
        match op {
            0 | 1 => cache.put(key, value),
            2 | 3 => {
                let before = cache.frequency(&key);
                let hit = cache.get(&key).is_some();
                assert_eq!(hit, before.is_some());
                if let Some(f) = before {
                    assert_eq!(cache.frequency(&key), Some(f + 1));
                }
            },
            4 => {
                let present = cache.contains(&key);
                assert_eq!(cache.remove(&key).is_some(), present);
                assert!(!cache.contains(&key));
            },
            5 => {
                let expected = cache.peek_lfu().map(|(k, v)| (*k, *v));
                assert_eq!(cache.pop_lfu(), expected);
            },
            6 => {
                let _ = cache.increment_frequency(&key);
            },
            7 => {
                let _ = cache.peek(&key);
            },
            8 => {
                cache.prune_empty_buckets();
            },
            9 => cache.clear(),
            _ => unreachable!(),
        }

        assert!(cache.len() <= capacity);
        if let Err(err) = cache.check_invariants() {
            panic!("{err}");
        }
    }
});
