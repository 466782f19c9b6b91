use std::io::Write;
use std::sync::{Mutex, PoisonError};

use crate::metrics::snapshot::LfuMetricsSnapshot;
use crate::metrics::traits::MetricsExporter;

/// Writes snapshots in the Prometheus text exposition format.
///
/// ```
/// use freqcache::metrics::exporter::PrometheusTextExporter;
/// use freqcache::metrics::snapshot::LfuMetricsSnapshot;
/// use freqcache::metrics::traits::MetricsExporter;
///
/// let exporter = PrometheusTextExporter::new("lfu", Vec::new());
/// exporter.export(&LfuMetricsSnapshot::default());
/// let text = String::from_utf8(exporter.into_inner()).unwrap();
/// assert!(text.contains("lfu_get_hits_total 0"));
/// ```
#[derive(Debug)]
pub struct PrometheusTextExporter<W: Write + Send> {
    prefix: String,
    writer: Mutex<W>,
}

impl<W: Write + Send> PrometheusTextExporter<W> {
    pub fn new(prefix: impl Into<String>, writer: W) -> Self {
        Self {
            prefix: prefix.into(),
            writer: Mutex::new(writer),
        }
    }

    /// Returns the underlying writer.
    pub fn into_inner(self) -> W {
        self.writer
            .into_inner()
            .unwrap_or_else(PoisonError::into_inner)
    }

    fn write_sample(&self, kind: &str, suffix: &str, value: u64) {
        let name = self.metric_name(suffix);
        let mut writer = self.writer.lock().unwrap_or_else(PoisonError::into_inner);
        // Exporting is best effort; a failing sink must not take the cache down.
        let _ = writeln!(writer, "# TYPE {name} {kind}");
        let _ = writeln!(writer, "{name} {value}");
    }

    fn counter(&self, suffix: &str, value: u64) {
        self.write_sample("counter", suffix, value);
    }

    fn gauge(&self, suffix: &str, value: u64) {
        self.write_sample("gauge", suffix, value);
    }

    fn metric_name(&self, suffix: &str) -> String {
        if self.prefix.is_empty() {
            suffix.to_string()
        } else {
            format!("{}_{}", self.prefix, suffix)
        }
    }
}

impl<W: Write + Send> MetricsExporter<LfuMetricsSnapshot> for PrometheusTextExporter<W> {
    fn export(&self, snapshot: &LfuMetricsSnapshot) {
        self.counter("get_calls_total", snapshot.get_calls);
        self.counter("get_hits_total", snapshot.get_hits);
        self.counter("get_misses_total", snapshot.get_misses);
        self.counter("insert_calls_total", snapshot.insert_calls);
        self.counter("insert_updates_total", snapshot.insert_updates);
        self.counter("insert_new_total", snapshot.insert_new);
        self.counter("evict_calls_total", snapshot.evict_calls);
        self.counter("evicted_entries_total", snapshot.evicted_entries);
        self.counter("promotions_total", snapshot.promotions);
        self.counter("remove_calls_total", snapshot.remove_calls);
        self.counter("remove_found_total", snapshot.remove_found);
        self.counter("pop_lfu_calls_total", snapshot.pop_lfu_calls);
        self.counter("pop_lfu_found_total", snapshot.pop_lfu_found);
        self.counter("peek_lfu_calls_total", snapshot.peek_lfu_calls);
        self.counter("peek_lfu_found_total", snapshot.peek_lfu_found);
        self.counter("frequency_calls_total", snapshot.frequency_calls);
        self.counter("frequency_found_total", snapshot.frequency_found);
        self.counter(
            "increment_frequency_calls_total",
            snapshot.increment_frequency_calls,
        );
        self.counter(
            "increment_frequency_found_total",
            snapshot.increment_frequency_found,
        );
        self.counter("buckets_pruned_total", snapshot.buckets_pruned);
        self.counter("clears_total", snapshot.clears);
        self.gauge("cache_len", snapshot.cache_len as u64);
        self.gauge("capacity", snapshot.capacity as u64);
        self.gauge("bucket_count", snapshot.bucket_count as u64);
        self.gauge("min_freq", snapshot.min_freq);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(prefix: &str, snapshot: &LfuMetricsSnapshot) -> String {
        let exporter = PrometheusTextExporter::new(prefix, Vec::new());
        exporter.export(snapshot);
        String::from_utf8(exporter.into_inner()).unwrap()
    }

    #[test]
    fn writes_type_line_before_each_sample() {
        let snap = LfuMetricsSnapshot {
            evicted_entries: 7,
            ..Default::default()
        };
        let text = render("cache", &snap);
        assert!(text.contains("# TYPE cache_evicted_entries_total counter\ncache_evicted_entries_total 7\n"));
    }

    #[test]
    fn gauges_are_typed_as_gauge() {
        let snap = LfuMetricsSnapshot {
            cache_len: 3,
            capacity: 10,
            min_freq: 2,
            ..Default::default()
        };
        let text = render("cache", &snap);
        assert!(text.contains("# TYPE cache_cache_len gauge\ncache_cache_len 3\n"));
        assert!(text.contains("cache_capacity 10\n"));
        assert!(text.contains("cache_min_freq 2\n"));
    }

    #[test]
    fn empty_prefix_uses_bare_names() {
        let text = render("", &LfuMetricsSnapshot::default());
        assert!(text.starts_with("# TYPE get_calls_total counter\n"));
    }
}
