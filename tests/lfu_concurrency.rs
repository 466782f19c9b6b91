// ==============================================
// LFU CONCURRENCY TESTS (integration)
// ==============================================
#![cfg(feature = "concurrency")]

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Barrier};
use std::thread;

use freqcache::policy::lfu::ConcurrentLfuCache;

#[test]
fn test_concurrent_puts_respect_capacity() {
    let cache: ConcurrentLfuCache<String, usize> = ConcurrentLfuCache::new(64);
    let num_threads = 8;
    let ops_per_thread = 500;
    let barrier = Arc::new(Barrier::new(num_threads));

    let handles: Vec<_> = (0..num_threads)
        .map(|thread_id| {
            let cache = cache.clone();
            let barrier = barrier.clone();
            thread::spawn(move || {
                barrier.wait();
                for i in 0..ops_per_thread {
                    cache.put(format!("t{thread_id}_{i}"), i);
                    assert!(cache.len() <= 64);
                }
            })
        })
        .collect();

    for handle in handles {
        handle.join().unwrap();
    }

    assert_eq!(cache.len(), 64);
    cache.check_invariants().unwrap();
}

#[test]
fn test_hot_keys_survive_contention() {
    let cache: ConcurrentLfuCache<u64, u64> = ConcurrentLfuCache::new(32);
    for hot in 0..4 {
        cache.put(hot, hot);
        for _ in 0..1_000 {
            cache.get(&hot);
        }
    }

    let num_threads = 4;
    let barrier = Arc::new(Barrier::new(num_threads));
    let handles: Vec<_> = (0..num_threads as u64)
        .map(|thread_id| {
            let cache = cache.clone();
            let barrier = barrier.clone();
            thread::spawn(move || {
                barrier.wait();
                for i in 0..2_000u64 {
                    let cold = 1_000 + thread_id * 10_000 + i;
                    cache.put(cold, i);
                    if i % 16 == 0 {
                        cache.get(&(i % 4));
                    }
                }
            })
        })
        .collect();

    for handle in handles {
        handle.join().unwrap();
    }

    for hot in 0..4 {
        assert!(cache.contains(&hot), "hot key {hot} was evicted");
    }
    cache.check_invariants().unwrap();
}

#[test]
fn test_mixed_operations_stay_consistent() {
    let cache: ConcurrentLfuCache<u32, u32> = ConcurrentLfuCache::new(50);
    let num_threads = 6;
    let barrier = Arc::new(Barrier::new(num_threads));
    let hits = Arc::new(AtomicUsize::new(0));

    let handles: Vec<_> = (0..num_threads as u32)
        .map(|thread_id| {
            let cache = cache.clone();
            let barrier = barrier.clone();
            let hits = hits.clone();
            thread::spawn(move || {
                barrier.wait();
                for i in 0..1_000u32 {
                    let key = (thread_id * 7 + i) % 100;
                    match i % 6 {
                        0 | 1 => cache.put(key, i),
                        2 | 3 => {
                            if cache.get(&key).is_some() {
                                hits.fetch_add(1, Ordering::Relaxed);
                            }
                        },
                        4 => {
                            cache.remove(&key);
                        },
                        _ => {
                            cache.pop_lfu();
                        },
                    }
                }
            })
        })
        .collect();

    for handle in handles {
        handle.join().unwrap();
    }

    assert!(cache.len() <= 50);
    cache.check_invariants().unwrap();
}

#[test]
fn test_with_lock_is_atomic() {
    let cache: ConcurrentLfuCache<u32, u32> = ConcurrentLfuCache::new(10);
    cache.put(0, 0);

    let handles: Vec<_> = (0..4)
        .map(|_| {
            let cache = cache.clone();
            thread::spawn(move || {
                for _ in 0..250 {
                    cache.with_lock(|inner| {
                        let next = inner.peek(&0).copied().unwrap_or(0) + 1;
                        inner.put(0, next);
                    });
                }
            })
        })
        .collect();

    for handle in handles {
        handle.join().unwrap();
    }

    assert_eq!(cache.peek(&0), Some(1_000));
    assert_eq!(cache.frequency(&0), Some(1_001));
}

#[test]
fn test_zero_capacity_concurrent() {
    let cache: ConcurrentLfuCache<u32, u32> = ConcurrentLfuCache::from_requested_capacity(0);
    let handles: Vec<_> = (0..4)
        .map(|t| {
            let cache = cache.clone();
            thread::spawn(move || {
                for i in 0..100 {
                    cache.put(t * 100 + i, i);
                }
            })
        })
        .collect();
    for handle in handles {
        handle.join().unwrap();
    }
    assert!(cache.is_empty());
    assert_eq!(cache.capacity(), 0);
}
