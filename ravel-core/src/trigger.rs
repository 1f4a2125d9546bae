// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use tokio::time::Instant;

/// A discrete signal (e.g. a user action) that initiates one unit of
/// asynchronous work.
///
/// Sequence ids are monotonic per policy lineage and start at 1; the
/// trigger source owning the policy assigns them. A `TriggerEvent` is
/// immutable once created.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TriggerEvent {
    /// Monotonic per-policy sequence number, starting at 1.
    pub sequence_id: u64,
    /// When the trigger was emitted.
    pub emitted_at: Instant,
}

impl TriggerEvent {
    /// Create a trigger stamped with the current instant.
    #[must_use]
    pub fn new(sequence_id: u64) -> Self {
        Self {
            sequence_id,
            emitted_at: Instant::now(),
        }
    }
}
