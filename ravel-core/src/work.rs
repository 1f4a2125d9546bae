// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Simulated asynchronous work and the factory seam producing it.

use core::ops::Range;
use core::time::Duration;

use tokio::time::{sleep, Instant};

use crate::{EngineError, PolicyKind, Result, TriggerEvent};

/// One simulated unit of asynchronous work.
///
/// A unit is created when a policy decides to start work for a trigger and
/// is owned exclusively by that policy until completion. [`run`](Self::run)
/// sleeps for the unit's duration, then yields the outcome: the result
/// label on success, or [`EngineError::WorkFailed`] when the producer
/// injected a failure.
///
/// Logical cancellation never stops the underlying timer; policies discard
/// the outcome of a superseded unit instead.
#[derive(Debug, Clone)]
pub struct AsyncUnit {
    sequence_id: u64,
    started_at: Instant,
    duration: Duration,
    outcome: Result<String>,
}

impl AsyncUnit {
    /// A unit that completes successfully after `duration`, yielding the
    /// label `[<kind>] COMPLETED #<sequence_id> (<duration_ms>ms)`.
    #[must_use]
    pub fn completing(kind: PolicyKind, sequence_id: u64, duration: Duration) -> Self {
        let label = format!(
            "[{kind}] COMPLETED #{sequence_id} ({}ms)",
            duration.as_millis()
        );
        Self {
            sequence_id,
            started_at: Instant::now(),
            duration,
            outcome: Ok(label),
        }
    }

    /// A unit that fails after `duration` with the given cause.
    #[must_use]
    pub fn failing(
        sequence_id: u64,
        duration: Duration,
        cause: impl Into<String>,
    ) -> Self {
        Self {
            sequence_id,
            started_at: Instant::now(),
            duration,
            outcome: Err(EngineError::work_failed(sequence_id, cause)),
        }
    }

    /// Sequence id of the trigger this unit was started for.
    #[must_use]
    pub const fn sequence_id(&self) -> u64 {
        self.sequence_id
    }

    /// When the policy started this unit.
    #[must_use]
    pub const fn started_at(&self) -> Instant {
        self.started_at
    }

    /// Simulated completion delay.
    #[must_use]
    pub const fn duration(&self) -> Duration {
        self.duration
    }

    /// Run the unit: sleep for its duration, then yield the outcome.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::WorkFailed`] when the producer built this
    /// unit as a failing one.
    pub async fn run(self) -> Result<String> {
        sleep(self.duration).await;
        self.outcome
    }
}

/// Factory seam turning an accepted trigger into a unit of work.
///
/// Implementations decide the duration and outcome; the engine never
/// inspects either before running the unit. Deterministic implementations
/// for tests live in `ravel-test-utils`.
pub trait WorkProducer: Send + Sync {
    /// Build the unit for `trigger` under the given policy kind.
    fn produce(&self, kind: PolicyKind, trigger: &TriggerEvent) -> AsyncUnit;
}

/// Default producer: uniform random duration, never fails.
#[derive(Debug, Clone)]
pub struct SimulatedWork {
    duration_range_ms: Range<u64>,
}

impl SimulatedWork {
    /// Default duration range in milliseconds, `[500, 2500)`.
    pub const DEFAULT_RANGE_MS: Range<u64> = 500..2500;

    /// Producer drawing uniformly from the given millisecond range.
    #[must_use]
    pub const fn new(duration_range_ms: Range<u64>) -> Self {
        Self { duration_range_ms }
    }
}

impl Default for SimulatedWork {
    fn default() -> Self {
        Self::new(Self::DEFAULT_RANGE_MS)
    }
}

impl WorkProducer for SimulatedWork {
    fn produce(&self, kind: PolicyKind, trigger: &TriggerEvent) -> AsyncUnit {
        let millis = fastrand::u64(self.duration_range_ms.clone());
        AsyncUnit::completing(kind, trigger.sequence_id, Duration::from_millis(millis))
    }
}
