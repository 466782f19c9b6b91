//! Operation counters for the LFU cache (feature `metrics`).
//!
//! Recording, snapshotting and exporting are separate concerns:
//!
//! ```text
//!   LfuCache ──record_*──► LfuMetrics ──snapshot()──► LfuMetricsSnapshot
//!                                                          │
//!                                                          ▼
//!                                              PrometheusTextExporter
//! ```

pub mod cell;
pub mod exporter;
pub mod metrics_impl;
pub mod snapshot;
pub mod traits;
