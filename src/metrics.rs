//! Metrics Collection
//!
//! Counters at the registry's instrumentation points. Exposing them over
//! HTTP is the host server's concern; this struct is shared via `Arc` so an
//! exporter can read it.

use std::sync::atomic::{AtomicU64, Ordering};

/// Metrics collector for the peering registry
#[derive(Debug, Default)]
pub struct Metrics {
    /// Registry refreshes attempted (including retries)
    pub refresh_attempts: AtomicU64,

    /// Registry refreshes that failed after exhausting retries
    pub refresh_failures: AtomicU64,

    /// Live content-node fetches served to callers
    pub content_fetches: AtomicU64,

    /// Latency of the most recent successful fetch (milliseconds)
    pub last_fetch_ms: AtomicU64,

    /// Nodes currently held in the cache
    pub cached_nodes: AtomicU64,
}

impl Metrics {
    /// Create a new metrics collector
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one refresh attempt
    pub fn inc_refresh_attempts(&self) {
        self.refresh_attempts.fetch_add(1, Ordering::Relaxed);
    }

    /// Record a refresh that gave up
    pub fn inc_refresh_failures(&self) {
        self.refresh_failures.fetch_add(1, Ordering::Relaxed);
    }

    /// Record one live content-node fetch
    pub fn inc_content_fetches(&self) {
        self.content_fetches.fetch_add(1, Ordering::Relaxed);
    }

    /// Record the latency of the last successful fetch
    pub fn set_last_fetch_ms(&self, ms: u64) {
        self.last_fetch_ms.store(ms, Ordering::Relaxed);
    }

    /// Update the cached node count
    pub fn set_cached_nodes(&self, count: u64) {
        self.cached_nodes.store(count, Ordering::Relaxed);
    }
}
