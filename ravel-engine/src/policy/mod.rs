// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! The four interchangeable flattening policies.
//!
//! Each policy is a small state machine over a common capability: `accept`
//! decides what happens to an arriving trigger (start a unit now, enqueue
//! it, or drop it), and a completion path delivers each non-discarded
//! outcome to the shared [`ResultSink`].
//!
//! | Policy | While a unit is active, a new trigger... |
//! |---|---|
//! | [`SwitchPolicy`] | starts immediately and supersedes the active unit |
//! | [`MergePolicy`] | starts immediately alongside it |
//! | [`ConcatPolicy`] | is enqueued and runs after it, FIFO |
//! | [`ExhaustPolicy`] | is dropped with no observable effect |

mod concat;
mod exhaust;
mod merge;
mod switch;

pub use concat::ConcatPolicy;
pub use exhaust::ExhaustPolicy;
pub use merge::MergePolicy;
pub use switch::SwitchPolicy;

use async_trait::async_trait;
use ravel_core::{EngineError, PolicyKind, Result, TriggerEvent};
use tracing::{debug, warn};

use crate::sink::ResultSink;

/// What a policy decided to do with an arriving trigger.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Admission {
    /// A unit was started immediately for this trigger.
    Started,
    /// The trigger was queued behind the active unit.
    Enqueued,
    /// The trigger was dropped; it will produce no observable effect.
    Rejected,
}

/// A strategy for reconciling trigger-initiated asynchronous units into
/// one ordered result stream.
///
/// Policies never block: `accept` records its decision, schedules any
/// continuation work on the runtime, and returns. Completions (including
/// failures, which count as completions for state transitions) are
/// delivered to the sink from the scheduled tasks.
#[async_trait]
pub trait FlatteningPolicy: Send + Sync {
    /// Which strategy this instance implements.
    fn kind(&self) -> PolicyKind;

    /// Decide what happens to `trigger`.
    async fn accept(&self, trigger: TriggerEvent) -> Admission;

    /// Resolve once no unit is running or queued.
    ///
    /// Superseded units whose timers are still pending count as running;
    /// their eventual firing is the last observable activity of a burst.
    async fn until_idle(&self);
}

/// Deliver a unit's outcome to the sink.
///
/// Successes are recorded verbatim; failures count as completions and are
/// recorded as failure records rather than silently dropped.
pub(crate) fn deliver(kind: PolicyKind, sink: &ResultSink, outcome: Result<String>) {
    match outcome {
        Ok(label) => {
            debug!(%kind, %label, "unit completed");
            sink.record(label);
        }
        Err(EngineError::WorkFailed { sequence_id, cause }) => {
            warn!(%kind, sequence_id, %cause, "unit failed");
            sink.record(format!("[{kind}] FAILED #{sequence_id}: {cause}"));
        }
        Err(other) => {
            warn!(%kind, error = %other, "unit failed");
            sink.record(format!("[{kind}] FAILED: {other}"));
        }
    }
}
