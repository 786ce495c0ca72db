//! Key resolution metrics.
//!
//! Counts how often lookups are answered by the active language, by the
//! fallback language, or not at all. A growing miss count is the signal that
//! a key is used in markup but absent from every table.

use serde::Serialize;
use std::sync::atomic::{AtomicUsize, Ordering};

/// Resolution counters owned by a [`LocalizationContext`](crate::i18n::LocalizationContext).
#[derive(Debug, Default)]
pub struct ResolutionMetrics {
    /// Lookups answered by the active language's table
    direct_hits: AtomicUsize,

    /// Lookups answered by the fallback table
    fallback_hits: AtomicUsize,

    /// Lookups that returned the raw key
    misses: AtomicUsize,
}

/// Snapshot of [`ResolutionMetrics`].
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct MetricsReport {
    pub direct_hits: usize,
    pub fallback_hits: usize,
    pub misses: usize,
    pub total_lookups: usize,
    /// Percentage of lookups that needed the fallback table or failed
    pub degraded_rate: f64,
}

impl ResolutionMetrics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record_direct_hit(&self) {
        self.direct_hits.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_fallback_hit(&self) {
        self.fallback_hits.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_miss(&self) {
        self.misses.fetch_add(1, Ordering::Relaxed);
    }

    pub fn direct_hits(&self) -> usize {
        self.direct_hits.load(Ordering::Relaxed)
    }

    pub fn fallback_hits(&self) -> usize {
        self.fallback_hits.load(Ordering::Relaxed)
    }

    pub fn misses(&self) -> usize {
        self.misses.load(Ordering::Relaxed)
    }

    pub fn report(&self) -> MetricsReport {
        let direct_hits = self.direct_hits();
        let fallback_hits = self.fallback_hits();
        let misses = self.misses();
        let total_lookups = direct_hits + fallback_hits + misses;
        let degraded_rate = if total_lookups > 0 {
            ((fallback_hits + misses) as f64 / total_lookups as f64) * 100.0
        } else {
            0.0
        };

        MetricsReport {
            direct_hits,
            fallback_hits,
            misses,
            total_lookups,
            degraded_rate,
        }
    }

    pub fn reset(&self) {
        self.direct_hits.store(0, Ordering::Relaxed);
        self.fallback_hits.store(0, Ordering::Relaxed);
        self.misses.store(0, Ordering::Relaxed);
    }
}
