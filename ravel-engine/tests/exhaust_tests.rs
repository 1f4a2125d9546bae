// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use std::sync::Arc;
use std::time::Duration;

use ravel_engine::prelude::*;
use ravel_test_utils::FixedDurationWork;

fn config(burst_size: usize, interval_ms: u64) -> EngineConfig {
    EngineConfig {
        burst_size,
        trigger_interval: Duration::from_millis(interval_ms),
        ..EngineConfig::default()
    }
}

#[tokio::test(start_paused = true)]
async fn triggers_arriving_while_busy_are_dropped() {
    // Arrange: triggers at t=0/100/200ms against a 1000ms unit; #2 and #3
    // find the policy busy and vanish without a trace.
    let producer = Arc::new(FixedDurationWork::new(Duration::from_millis(1000)));
    let orchestrator = Orchestrator::with_producer(config(3, 100), producer);

    // Act
    orchestrator.activate(PolicyKind::Exhaust);
    orchestrator.until_idle().await;

    // Assert
    assert_eq!(
        orchestrator.results(),
        vec!["[exhaust] COMPLETED #1 (1000ms)".to_string()]
    );
}

#[tokio::test(start_paused = true)]
async fn accept_rejects_while_busy_and_admits_once_idle() {
    // Arrange
    let sink = ResultSink::new(10);
    let producer = Arc::new(FixedDurationWork::new(Duration::from_millis(500)));
    let policy = ExhaustPolicy::new(producer, sink.clone());

    // Act & Assert: second trigger is rejected outright.
    assert_eq!(policy.accept(TriggerEvent::new(1)).await, Admission::Started);
    assert_eq!(policy.accept(TriggerEvent::new(2)).await, Admission::Rejected);
    policy.until_idle().await;

    // A trigger finding the policy idle again is admitted.
    assert_eq!(policy.accept(TriggerEvent::new(3)).await, Admission::Started);
    policy.until_idle().await;

    assert_eq!(
        sink.snapshot(),
        vec![
            "[exhaust] COMPLETED #3 (500ms)".to_string(),
            "[exhaust] COMPLETED #1 (500ms)".to_string(),
        ]
    );
}

#[tokio::test(start_paused = true)]
async fn sequence_ids_continue_across_bursts() {
    // Arrange: each burst admits only its first trigger, but the counter
    // keeps running, so the second burst starts at #4.
    let producer = Arc::new(FixedDurationWork::new(Duration::from_millis(1000)));
    let orchestrator = Orchestrator::with_producer(config(3, 100), producer);

    // Act
    orchestrator.activate(PolicyKind::Exhaust);
    orchestrator.until_idle().await;
    orchestrator.activate(PolicyKind::Exhaust);
    orchestrator.until_idle().await;

    // Assert
    assert_eq!(
        orchestrator.results(),
        vec![
            "[exhaust] COMPLETED #4 (1000ms)".to_string(),
            "[exhaust] COMPLETED #1 (1000ms)".to_string(),
        ]
    );
}
