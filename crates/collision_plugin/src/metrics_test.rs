use super::*;

#[test]
fn test_rolling_window_respects_capacity() {
    let mut window = RollingWindow::new(3);
    for value in 0..5 {
        window.push(value);
    }
    assert_eq!(window.len(), 3);
    let stored: Vec<i32> = window.iter().copied().collect();
    assert_eq!(stored, vec![2, 3, 4], "oldest values must be evicted first");
}

#[test]
fn test_rolling_window_mean() {
    let mut window = RollingWindow::new(4);
    assert_eq!(window.mean(), None);
    window.push(2.0);
    window.push(4.0);
    assert_eq!(window.mean(), Some(3.0));
}

#[test]
fn test_rolling_window_clear() {
    let mut window = RollingWindow::new(4);
    window.push(1.0);
    window.clear();
    assert!(window.is_empty());
}

#[test]
fn test_metrics_start_at_zero() {
    let metrics = CollisionMetrics::default();
    assert_eq!(metrics.obstacles_inserted(), 0);
    assert_eq!(metrics.duplicate_routes(), 0);
    assert_eq!(metrics.unroutable_obstacles(), 0);
    assert_eq!(metrics.overlap_queries(), 0);
    assert_eq!(metrics.segment_queries(), 0);
    assert_eq!(metrics.mean_query_time_us(), None);
}

#[cfg(feature = "metrics")]
#[test]
fn test_record_insert_counts_duplicates() {
    let metrics = CollisionMetrics::default();
    metrics.record_insert(1);
    metrics.record_insert(4);
    assert_eq!(metrics.obstacles_inserted(), 2);
    assert_eq!(
        metrics.duplicate_routes(),
        3,
        "an obstacle in 4 cells adds 3 extra copies"
    );
}

#[cfg(feature = "metrics")]
#[test]
fn test_record_queries_feed_latency_window() {
    let metrics = CollisionMetrics::default();
    metrics.record_overlap_query(10.0);
    metrics.record_segment_query(30.0);
    assert_eq!(metrics.overlap_queries(), 1);
    assert_eq!(metrics.segment_queries(), 1);
    assert_eq!(metrics.mean_query_time_us(), Some(20.0));
}

/// Without the `metrics` feature every record call is a no-op.
#[cfg(not(feature = "metrics"))]
#[test]
fn test_records_disabled_without_feature() {
    let metrics = CollisionMetrics::default();
    metrics.record_insert(4);
    metrics.record_unroutable();
    metrics.record_overlap_query(10.0);
    assert_eq!(metrics.obstacles_inserted(), 0);
    assert_eq!(metrics.unroutable_obstacles(), 0);
    assert_eq!(metrics.overlap_queries(), 0);
}
