//! Recorder, snapshot and exporter traits.
//!
//! - Recorders only write counters.
//! - Providers only read them into a snapshot.
//! - Exporters only publish snapshots.

/// Counters every cache policy shares.
pub trait CoreMetricsRecorder {
    fn record_get_hit(&mut self);
    fn record_get_miss(&mut self);
    fn record_insert_call(&mut self);
    fn record_insert_new(&mut self);
    fn record_insert_update(&mut self);
    fn record_evict_call(&mut self);
    fn record_evicted_entry(&mut self);
    fn record_clear(&mut self);
}

/// LFU-specific counters for `&mut self` paths.
pub trait LfuMetricsRecorder: CoreMetricsRecorder {
    fn record_promotion(&mut self);
    fn record_remove_call(&mut self);
    fn record_remove_found(&mut self);
    fn record_pop_lfu_call(&mut self);
    fn record_pop_lfu_found(&mut self);
    fn record_increment_frequency_call(&mut self);
    fn record_increment_frequency_found(&mut self);
    fn record_buckets_pruned(&mut self, count: usize);
}

/// LFU counters for `&self` paths (interior mutability).
pub trait LfuMetricsReadRecorder {
    fn record_peek_lfu_call(&self);
    fn record_peek_lfu_found(&self);
    fn record_frequency_call(&self);
    fn record_frequency_found(&self);
}

/// Produce a point-in-time copy of a cache's counters.
pub trait MetricsSnapshotProvider<S> {
    fn snapshot(&self) -> S;
}

/// Zero the counters between test or benchmark iterations.
pub trait MetricsReset {
    fn reset_metrics(&mut self);
}

/// Publish a snapshot to a monitoring backend.
pub trait MetricsExporter<S> {
    fn export(&self, snapshot: &S);
}
