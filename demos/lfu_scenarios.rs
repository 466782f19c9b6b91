//! Replays a mixed get/put trace and prints each result.
//!
//! Run with `RUST_LOG=freqcache=trace` to see evictions as they happen.

use freqcache::policy::lfu::LfuCache;
use freqcache::traits::CoreCache;
use tracing_subscriber::EnvFilter;

enum Op {
    Put(i32, i32),
    Get(i32),
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let trace = [
        Op::Put(1, 1),
        Op::Put(2, 2),
        Op::Get(1),
        Op::Put(3, 3),
        Op::Get(2),
        Op::Get(3),
        Op::Put(4, 4),
        Op::Get(1),
        Op::Get(3),
        Op::Get(4),
    ];

    let mut cache = LfuCache::new(2);
    for op in trace {
        match op {
            Op::Put(key, value) => {
                cache.put(key, value);
                println!("put({key}, {value})");
            },
            Op::Get(key) => {
                let value = cache.get(&key).copied().unwrap_or(-1);
                println!("get({key}) -> {value}");
            },
        }
    }

    println!(
        "size={} min_freq={:?} buckets={}",
        cache.size(),
        cache.min_freq(),
        cache.bucket_count()
    );
}

// Expected output:
// put(1, 1)
// put(2, 2)
// get(1) -> 1
// put(3, 3)
// get(2) -> -1
// get(3) -> 3
// put(4, 4)
// get(1) -> -1
// get(3) -> 3
// get(4) -> 4
// size=2 min_freq=Some(2) buckets=3
