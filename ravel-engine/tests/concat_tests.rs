// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use std::sync::Arc;
use std::time::Duration;

use ravel_engine::prelude::*;
use ravel_test_utils::{FailingWork, FixedDurationWork};
use tokio::time::sleep;

fn config(burst_size: usize, interval_ms: u64) -> EngineConfig {
    EngineConfig {
        burst_size,
        trigger_interval: Duration::from_millis(interval_ms),
        ..EngineConfig::default()
    }
}

#[tokio::test(start_paused = true)]
async fn units_run_one_at_a_time_in_arrival_order() {
    // Arrange: 500ms units queued by triggers at t=0/100/200ms; with one
    // unit at a time, completions land at 500/1000/1500ms.
    let producer = Arc::new(FixedDurationWork::new(Duration::from_millis(500)));
    let orchestrator = Orchestrator::with_producer(config(3, 100), producer);

    // Act
    orchestrator.activate(PolicyKind::Concat);

    // Assert, staged
    sleep(Duration::from_millis(600)).await;
    assert_eq!(
        orchestrator.results(),
        vec!["[concat] COMPLETED #1 (500ms)".to_string()]
    );

    sleep(Duration::from_millis(500)).await;
    assert_eq!(
        orchestrator.results(),
        vec![
            "[concat] COMPLETED #2 (500ms)".to_string(),
            "[concat] COMPLETED #1 (500ms)".to_string(),
        ]
    );

    sleep(Duration::from_millis(500)).await;
    assert_eq!(
        orchestrator.results(),
        vec![
            "[concat] COMPLETED #3 (500ms)".to_string(),
            "[concat] COMPLETED #2 (500ms)".to_string(),
            "[concat] COMPLETED #1 (500ms)".to_string(),
        ]
    );
}

#[tokio::test(start_paused = true)]
async fn accept_enqueues_while_a_unit_is_active() {
    // Arrange: drive the policy directly to observe admissions.
    let sink = ResultSink::new(10);
    let producer = Arc::new(FixedDurationWork::new(Duration::from_millis(500)));
    let policy = ConcatPolicy::new(producer, sink.clone());

    // Act
    let first = policy.accept(TriggerEvent::new(1)).await;
    let second = policy.accept(TriggerEvent::new(2)).await;
    policy.until_idle().await;

    // Assert
    assert_eq!(first, Admission::Started);
    assert_eq!(second, Admission::Enqueued);
    assert_eq!(
        sink.snapshot(),
        vec![
            "[concat] COMPLETED #2 (500ms)".to_string(),
            "[concat] COMPLETED #1 (500ms)".to_string(),
        ]
    );
}

#[tokio::test(start_paused = true)]
async fn failure_counts_as_completion_and_the_queue_proceeds() {
    // Arrange: unit #1 fails after its full duration; #2 must still run.
    let sink = ResultSink::new(10);
    let producer = Arc::new(FailingWork::new(Duration::from_millis(500), [1]));
    let policy = ConcatPolicy::new(producer, sink.clone());

    // Act
    policy.accept(TriggerEvent::new(1)).await;
    policy.accept(TriggerEvent::new(2)).await;
    policy.until_idle().await;

    // Assert: the failure record precedes #2's result in arrival order.
    assert_eq!(
        sink.snapshot(),
        vec![
            "[concat] COMPLETED #2 (500ms)".to_string(),
            "[concat] FAILED #1: injected failure".to_string(),
        ]
    );
}
