// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use core::time::Duration;
use std::collections::HashSet;

use ravel_core::{AsyncUnit, PolicyKind, TriggerEvent, WorkProducer};

/// Every unit completes after the same fixed duration.
#[derive(Debug, Clone)]
pub struct FixedDurationWork {
    duration: Duration,
}

impl FixedDurationWork {
    #[must_use]
    pub const fn new(duration: Duration) -> Self {
        Self { duration }
    }
}

impl WorkProducer for FixedDurationWork {
    fn produce(&self, kind: PolicyKind, trigger: &TriggerEvent) -> AsyncUnit {
        AsyncUnit::completing(kind, trigger.sequence_id, self.duration)
    }
}

/// Durations scripted per sequence id.
///
/// Trigger `#n` gets the `n`-th duration (1-indexed); triggers beyond the
/// script reuse the last entry. Useful for making merge results complete
/// out of start order deterministically.
#[derive(Debug, Clone)]
pub struct ScriptedWork {
    durations: Vec<Duration>,
}

impl ScriptedWork {
    /// # Panics
    ///
    /// Panics when `durations` is empty.
    #[must_use]
    pub fn new(durations: Vec<Duration>) -> Self {
        assert!(!durations.is_empty(), "script needs at least one duration");
        Self { durations }
    }

    /// Script from millisecond values.
    #[must_use]
    pub fn from_millis(millis: &[u64]) -> Self {
        Self::new(millis.iter().copied().map(Duration::from_millis).collect())
    }

    fn duration_for(&self, sequence_id: u64) -> Duration {
        let index = (sequence_id.saturating_sub(1) as usize).min(self.durations.len() - 1);
        self.durations[index]
    }
}

impl WorkProducer for ScriptedWork {
    fn produce(&self, kind: PolicyKind, trigger: &TriggerEvent) -> AsyncUnit {
        AsyncUnit::completing(kind, trigger.sequence_id, self.duration_for(trigger.sequence_id))
    }
}

/// Fixed-duration units where selected sequence ids fail instead of
/// completing, exercising the failure-record path.
#[derive(Debug, Clone)]
pub struct FailingWork {
    duration: Duration,
    failing_ids: HashSet<u64>,
}

impl FailingWork {
    #[must_use]
    pub fn new(duration: Duration, failing_ids: impl IntoIterator<Item = u64>) -> Self {
        Self {
            duration,
            failing_ids: failing_ids.into_iter().collect(),
        }
    }
}

impl WorkProducer for FailingWork {
    fn produce(&self, kind: PolicyKind, trigger: &TriggerEvent) -> AsyncUnit {
        if self.failing_ids.contains(&trigger.sequence_id) {
            AsyncUnit::failing(trigger.sequence_id, self.duration, "injected failure")
        } else {
            AsyncUnit::completing(kind, trigger.sequence_id, self.duration)
        }
    }
}
