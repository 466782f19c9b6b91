mod common;

use std::hint::black_box;
use std::time::{Duration, Instant};

use common::workload::{KeyStream, Workload, run_hit_rate};
use criterion::{BatchSize, BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use freqcache::policy::lfu::LfuCache;
use freqcache::traits::{CoreCache, LfuCacheTrait, MutableCache};

fn filled(capacity: usize) -> LfuCache<u64, u64> {
    let mut cache = LfuCache::new(capacity);
    for i in 0..capacity as u64 {
        cache.put(i, i);
    }
    cache
}

fn bench_insert_get(c: &mut Criterion) {
    let mut group = c.benchmark_group("lfu_policy");
    group.throughput(Throughput::Elements(1024 * 2));
    group.bench_function("insert_get", |b| {
        b.iter_batched(
            || filled(1024),
            |mut cache| {
                for i in 0..1024u64 {
                    cache.put(black_box(i + 10_000), i);
                    let _ = black_box(cache.get(&black_box(i)));
                }
            },
            BatchSize::SmallInput,
        )
    });
    group.finish();
}

fn bench_get_hotset(c: &mut Criterion) {
    let mut group = c.benchmark_group("lfu_policy");
    group.throughput(Throughput::Elements(4096));
    group.bench_function("get_hotset", |b| {
        b.iter_batched(
            || filled(4096),
            |mut cache| {
                for i in 0..4096u64 {
                    let _ = black_box(cache.get(&black_box(i)));
                }
            },
            BatchSize::SmallInput,
        )
    });
    group.finish();
}

fn bench_eviction_churn_sizes(c: &mut Criterion) {
    let mut group = c.benchmark_group("lfu_eviction_churn");
    for &capacity in &[256usize, 1024, 4096, 16384] {
        let inserts = capacity as u64 * 4;
        group.throughput(Throughput::Elements(inserts));
        group.bench_with_input(BenchmarkId::from_parameter(capacity), &capacity, |b, &capacity| {
            b.iter_batched(
                || filled(capacity),
                |mut cache| {
                    for i in 0..inserts {
                        cache.put(black_box(1_000_000 + i), i);
                    }
                },
                BatchSize::SmallInput,
            )
        });
    }
    group.finish();
}

fn bench_remove_and_pop(c: &mut Criterion) {
    let mut group = c.benchmark_group("lfu_policy");
    group.throughput(Throughput::Elements(1024));
    group.bench_function("pop_lfu", |b| {
        b.iter_batched(
            || filled(1024),
            |mut cache| {
                for _ in 0..1024 {
                    let _ = black_box(cache.pop_lfu());
                }
            },
            BatchSize::SmallInput,
        )
    });
    group.bench_function("remove_spread_frequencies", |b| {
        b.iter_batched(
            || {
                let mut cache = filled(1024);
                // spread entries over many frequencies so removal must skip gaps
                for i in 0..1024u64 {
                    for _ in 0..(i % 32) {
                        cache.increment_frequency(&i);
                    }
                }
                cache
            },
            |mut cache| {
                for i in 0..1024u64 {
                    let _ = black_box(cache.remove(&i));
                }
            },
            BatchSize::SmallInput,
        )
    });
    group.finish();
}

fn bench_get_hit_ns(c: &mut Criterion) {
    c.bench_function("lfu_get_hit_ns", |b| {
        b.iter_custom(|iters| {
            let capacity = 16_384u64;
            let mut cache = filled(capacity as usize);
            let start = Instant::now();
            for i in 0..iters {
                let _ = black_box(cache.get(&(i % capacity)));
            }
            start.elapsed()
        })
    });
}

fn bench_insert_full_ns(c: &mut Criterion) {
    c.bench_function("lfu_insert_full_ns", |b| {
        b.iter_custom(|iters| {
            let capacity = 4096u64;
            let mut cache = filled(capacity as usize);
            let start = Instant::now();
            for i in 0..iters {
                cache.put(black_box(capacity + i), i);
            }
            start.elapsed()
        })
    });
}

fn bench_workload_hit_rate(c: &mut Criterion) {
    let mut group = c.benchmark_group("lfu_workload_hit_rate");
    let operations = 200_000usize;
    group.throughput(Throughput::Elements(operations as u64));

    let workloads = [
        ("uniform", Workload::Uniform),
        (
            "hotset_90_10",
            Workload::Hotset {
                hot_fraction: 0.1,
                hot_prob: 0.9,
            },
        ),
        ("scan", Workload::Scan),
        ("zipfian_0.99", Workload::Zipfian { theta: 0.99 }),
    ];

    for (name, workload) in workloads {
        group.bench_function(name, |b| {
            b.iter_custom(|iters| {
                let mut total = Duration::default();
                for _ in 0..iters {
                    let mut cache: LfuCache<u64, u64> = LfuCache::new(4096);
                    let mut keys = KeyStream::new(16_384, workload, 42);
                    let start = Instant::now();
                    let stats = run_hit_rate(&mut cache, &mut keys, operations);
                    let _ = black_box(stats.hit_rate());
                    total += start.elapsed();
                }
                total
            })
        });
    }
    group.finish();
}

criterion_group!(
    policy_level,
    bench_insert_get,
    bench_get_hotset,
    bench_eviction_churn_sizes,
    bench_remove_and_pop
);
criterion_group!(micro_ops, bench_get_hit_ns, bench_insert_full_ns);
criterion_group!(workloads, bench_workload_hit_rate);
criterion_main!(policy_level, micro_ops, workloads);
