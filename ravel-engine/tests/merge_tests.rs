// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use std::sync::Arc;
use std::time::Duration;

use ravel_engine::prelude::*;
use ravel_test_utils::{FixedDurationWork, ScriptedWork};

fn config(burst_size: usize, interval_ms: u64) -> EngineConfig {
    EngineConfig {
        burst_size,
        trigger_interval: Duration::from_millis(interval_ms),
        ..EngineConfig::default()
    }
}

#[tokio::test(start_paused = true)]
async fn results_arrive_in_completion_order_not_start_order() {
    // Arrange: #1 takes 1500ms, #2 1000ms, #3 500ms; starts at 0/100/200ms,
    // so completions land at 700ms (#3), 1100ms (#2), 1500ms (#1).
    let producer = Arc::new(ScriptedWork::from_millis(&[1500, 1000, 500]));
    let orchestrator = Orchestrator::with_producer(config(3, 100), producer);

    // Act
    orchestrator.activate(PolicyKind::Merge);
    orchestrator.until_idle().await;

    // Assert: newest-first, so the slowest starter tops the sink.
    assert_eq!(
        orchestrator.results(),
        vec![
            "[merge] COMPLETED #1 (1500ms)".to_string(),
            "[merge] COMPLETED #2 (1000ms)".to_string(),
            "[merge] COMPLETED #3 (500ms)".to_string(),
        ]
    );
}

#[tokio::test(start_paused = true)]
async fn every_trigger_produces_exactly_one_result() {
    // Arrange
    let producer = Arc::new(FixedDurationWork::new(Duration::from_millis(300)));
    let orchestrator = Orchestrator::with_producer(config(5, 100), producer);

    // Act
    orchestrator.activate(PolicyKind::Merge);
    orchestrator.until_idle().await;

    // Assert
    let results = orchestrator.results();
    assert_eq!(results.len(), 5);
    for id in 1..=5 {
        assert!(
            results.contains(&format!("[merge] COMPLETED #{id} (300ms)")),
            "missing result for trigger #{id}"
        );
    }
}

#[tokio::test(start_paused = true)]
async fn overlapping_bursts_interleave_without_losing_triggers() {
    // Arrange: two bursts fired back to back share the sequence counter;
    // their combined ordering is unspecified but every trigger completes.
    let producer = Arc::new(FixedDurationWork::new(Duration::from_millis(50)));
    let orchestrator = Orchestrator::with_producer(config(2, 100), producer);

    // Act
    orchestrator.activate(PolicyKind::Merge);
    orchestrator.activate(PolicyKind::Merge);
    orchestrator.until_idle().await;

    // Assert
    let results = orchestrator.results();
    assert_eq!(results.len(), 4);
    for id in 1..=4 {
        assert!(
            results.contains(&format!("[merge] COMPLETED #{id} (50ms)")),
            "missing result for trigger #{id}"
        );
    }
}
