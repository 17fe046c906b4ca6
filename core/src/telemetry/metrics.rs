use std::sync::Mutex;

/// Run counters kept by the analysis engine.
pub struct MetricsRecorder {
    inner: Mutex<Metrics>,
}

struct Metrics {
    analyses: usize,
    failures: usize,
}

impl MetricsRecorder {
    pub fn new() -> Self {
        Self {
            inner: Mutex::new(Metrics {
                analyses: 0,
                failures: 0,
            }),
        }
    }

    pub fn record_analysis(&self) {
        if let Ok(mut metrics) = self.inner.lock() {
            metrics.analyses += 1;
        }
    }

    pub fn record_failure(&self) {
        if let Ok(mut metrics) = self.inner.lock() {
            metrics.failures += 1;
        }
    }

    pub fn snapshot(&self) -> (usize, usize) {
        if let Ok(metrics) = self.inner.lock() {
            (metrics.analyses, metrics.failures)
        } else {
            (0, 0)
        }
    }
}

impl Default for MetricsRecorder {
    fn default() -> Self {
        Self::new()
    }
}
