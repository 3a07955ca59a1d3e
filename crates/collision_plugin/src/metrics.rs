//! Engine-agnostic metrics collection for collision statistics.
//!
//! Feature-gated and runtime-toggled to ensure zero overhead when disabled.
//!
//! # Usage
//!
//! ```ignore
//! use collision_plugin::metrics::{self, COLLECT_METRICS};
//! use std::sync::atomic::Ordering;
//!
//! // Compile with --features metrics
//! // Runtime toggle:
//! COLLECT_METRICS.store(false, Ordering::Relaxed);
//!
//! // Inspect after a level load:
//! println!("unroutable: {}", world.metrics().unroutable_obstacles());
//! ```

use std::collections::VecDeque;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::Mutex;

/// Runtime toggle for metrics collection.
/// Set to false to disable metrics gathering at runtime.
pub static COLLECT_METRICS: AtomicBool = AtomicBool::new(true);

/// Check if metrics collection is enabled (both compile-time and runtime).
#[inline]
pub fn is_enabled() -> bool {
    #[cfg(feature = "metrics")]
    {
        COLLECT_METRICS.load(Ordering::Relaxed)
    }
    #[cfg(not(feature = "metrics"))]
    {
        false
    }
}

/// Default capacity of the query latency window (two seconds at 60 fps).
pub const QUERY_WINDOW: usize = 120;

/// Rolling window for storing recent values (e.g., timing history).
#[derive(Debug, Clone)]
pub struct RollingWindow<T> {
    buffer: VecDeque<T>,
    capacity: usize,
}

impl<T> RollingWindow<T> {
    /// Create a new rolling window with the given capacity.
    pub fn new(capacity: usize) -> Self {
        Self {
            buffer: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    /// Push a new value, evicting the oldest if at capacity.
    pub fn push(&mut self, value: T) {
        if self.buffer.len() >= self.capacity {
            self.buffer.pop_front();
        }
        self.buffer.push_back(value);
    }

    /// Get the number of values in the window.
    pub fn len(&self) -> usize {
        self.buffer.len()
    }

    /// Check if the window is empty.
    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    /// Clear all values.
    pub fn clear(&mut self) {
        self.buffer.clear();
    }

    /// Iterate over stored values, oldest first.
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.buffer.iter()
    }
}

impl RollingWindow<f32> {
    /// Mean of the stored values, or None if empty.
    pub fn mean(&self) -> Option<f32> {
        if self.buffer.is_empty() {
            return None;
        }
        Some(self.buffer.iter().sum::<f32>() / self.buffer.len() as f32)
    }
}

/// Collision statistics for one level: load-phase routing counters and a
/// rolling window of per-frame query latencies.
///
/// Counters are atomic so the read-only query path can record without
/// exclusive access to the world.
#[derive(Debug)]
pub struct CollisionMetrics {
    obstacles_inserted: AtomicU64,
    duplicate_routes: AtomicU64,
    unroutable_obstacles: AtomicU64,
    overlap_queries: AtomicU64,
    segment_queries: AtomicU64,
    query_time_us: Mutex<RollingWindow<f32>>,
}

impl CollisionMetrics {
    /// Metrics with a query latency window of the given capacity.
    pub fn new(window: usize) -> Self {
        Self {
            obstacles_inserted: AtomicU64::new(0),
            duplicate_routes: AtomicU64::new(0),
            unroutable_obstacles: AtomicU64::new(0),
            overlap_queries: AtomicU64::new(0),
            segment_queries: AtomicU64::new(0),
            query_time_us: Mutex::new(RollingWindow::new(window)),
        }
    }

    /// Record a routed obstacle and how many accepting cells received it.
    pub fn record_insert(&self, cells: u32) {
        if !is_enabled() {
            return;
        }
        self.obstacles_inserted.fetch_add(1, Ordering::Relaxed);
        if cells > 1 {
            self.duplicate_routes
                .fetch_add(u64::from(cells - 1), Ordering::Relaxed);
        }
    }

    /// Record an obstacle that overlapped no accepting cell.
    pub fn record_unroutable(&self) {
        if !is_enabled() {
            return;
        }
        self.unroutable_obstacles.fetch_add(1, Ordering::Relaxed);
    }

    /// Record one region-overlap query and its latency in microseconds.
    pub fn record_overlap_query(&self, elapsed_us: f32) {
        if !is_enabled() {
            return;
        }
        self.overlap_queries.fetch_add(1, Ordering::Relaxed);
        self.push_query_time(elapsed_us);
    }

    /// Record one segment query and its latency in microseconds.
    pub fn record_segment_query(&self, elapsed_us: f32) {
        if !is_enabled() {
            return;
        }
        self.segment_queries.fetch_add(1, Ordering::Relaxed);
        self.push_query_time(elapsed_us);
    }

    fn push_query_time(&self, elapsed_us: f32) {
        if let Ok(mut window) = self.query_time_us.lock() {
            window.push(elapsed_us);
        }
    }

    /// Obstacles successfully routed into the grid.
    pub fn obstacles_inserted(&self) -> u64 {
        self.obstacles_inserted.load(Ordering::Relaxed)
    }

    /// Extra leaf copies created by boundary-straddling obstacles.
    pub fn duplicate_routes(&self) -> u64 {
        self.duplicate_routes.load(Ordering::Relaxed)
    }

    /// Obstacles dropped because no accepting cell overlapped them.
    pub fn unroutable_obstacles(&self) -> u64 {
        self.unroutable_obstacles.load(Ordering::Relaxed)
    }

    /// Region-overlap queries answered.
    pub fn overlap_queries(&self) -> u64 {
        self.overlap_queries.load(Ordering::Relaxed)
    }

    /// Segment queries answered.
    pub fn segment_queries(&self) -> u64 {
        self.segment_queries.load(Ordering::Relaxed)
    }

    /// Mean recent query latency in microseconds, or None before the first
    /// recorded query.
    pub fn mean_query_time_us(&self) -> Option<f32> {
        self.query_time_us.lock().ok().and_then(|w| w.mean())
    }
}

impl Default for CollisionMetrics {
    fn default() -> Self {
        Self::new(QUERY_WINDOW)
    }
}

#[cfg(test)]
#[path = "metrics_test.rs"]
mod metrics_test;
