use std::sync::atomic::{AtomicU64, Ordering};

#[derive(Debug, Default)]
pub struct Metrics {
    lookups: AtomicU64,
    lookup_errors: AtomicU64,
    upstream_failures: AtomicU64,
    collection_log_fallbacks: AtomicU64,
    snapshot_write_failures: AtomicU64,
    baseline_query_failures: AtomicU64,
}

impl Metrics {
    pub fn record_lookup(&self) {
        self.lookups.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_lookup_error(&self) {
        self.lookup_errors.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_upstream_failure(&self) {
        self.upstream_failures.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_collection_log_fallback(&self) {
        self.collection_log_fallbacks.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_snapshot_write_failure(&self) {
        self.snapshot_write_failures.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_baseline_query_failure(&self) {
        self.baseline_query_failures.fetch_add(1, Ordering::Relaxed);
    }

    pub fn snapshot_write_failures(&self) -> u64 {
        self.snapshot_write_failures.load(Ordering::Relaxed)
    }

    pub fn render_prometheus(&self) -> String {
        let lookups = self.lookups.load(Ordering::Relaxed);
        let lookup_errors = self.lookup_errors.load(Ordering::Relaxed);
        let upstream = self.upstream_failures.load(Ordering::Relaxed);
        let fallbacks = self.collection_log_fallbacks.load(Ordering::Relaxed);
        let writes = self.snapshot_write_failures.load(Ordering::Relaxed);
        let baselines = self.baseline_query_failures.load(Ordering::Relaxed);

        format!(
            "# TYPE skillscape_lookups_total counter\n\
skillscape_lookups_total {}\n\
# TYPE skillscape_lookup_errors_total counter\n\
skillscape_lookup_errors_total {}\n\
# TYPE skillscape_upstream_failures_total counter\n\
skillscape_upstream_failures_total {}\n\
# TYPE skillscape_collection_log_fallbacks_total counter\n\
skillscape_collection_log_fallbacks_total {}\n\
# TYPE skillscape_snapshot_write_failures_total counter\n\
skillscape_snapshot_write_failures_total {}\n\
# TYPE skillscape_baseline_query_failures_total counter\n\
skillscape_baseline_query_failures_total {}\n",
            lookups, lookup_errors, upstream, fallbacks, writes, baselines
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn render_prometheus_reports_counters() {
        let metrics = Metrics::default();
        metrics.record_lookup();
        metrics.record_lookup();
        metrics.record_snapshot_write_failure();
        let text = metrics.render_prometheus();
        assert!(text.contains("skillscape_lookups_total 2\n"));
        assert!(text.contains("skillscape_snapshot_write_failures_total 1\n"));
        assert!(text.contains("skillscape_upstream_failures_total 0\n"));
    }
}
