use std::sync::atomic::{AtomicU64, Ordering};

/// Sink for per-notification delivery outcomes.
pub trait PushMetrics: Send + Sync {
    fn record_sent(&self, push_type: &str);
    fn record_failure(&self, push_type: &str, reason: &str);
}

#[derive(Debug, Default)]
pub struct NoopMetrics;

impl PushMetrics for NoopMetrics {
    fn record_sent(&self, _push_type: &str) {}
    fn record_failure(&self, _push_type: &str, _reason: &str) {}
}

/// In-process counters, handy for tests and local runs.
#[derive(Debug, Default)]
pub struct CounterMetrics {
    sent: AtomicU64,
    failed: AtomicU64,
}

impl CounterMetrics {
    pub fn sent(&self) -> u64 {
        self.sent.load(Ordering::Relaxed)
    }

    pub fn failed(&self) -> u64 {
        self.failed.load(Ordering::Relaxed)
    }
}

impl PushMetrics for CounterMetrics {
    fn record_sent(&self, _push_type: &str) {
        self.sent.fetch_add(1, Ordering::Relaxed);
    }

    fn record_failure(&self, _push_type: &str, _reason: &str) {
        self.failed.fetch_add(1, Ordering::Relaxed);
    }
}
