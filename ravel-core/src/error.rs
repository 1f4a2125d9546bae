// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Error types for the flattening engine.
//!
//! The simulated default workload cannot fail, but the [`WorkProducer`]
//! seam makes failures expressible, so the taxonomy is defined here and
//! policies treat a failed unit as a completion for state-transition
//! purposes.
//!
//! [`WorkProducer`]: crate::WorkProducer

/// Root error type for all engine operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EngineError {
    /// A unit of asynchronous work failed before producing a result.
    ///
    /// Under `concat` and `merge` (and non-superseded `switch`/`exhaust`
    /// units) this is recorded in the sink as a failure record; superseded
    /// units discard it symmetrically with successful results.
    #[error("work failed for trigger #{sequence_id}: {cause}")]
    WorkFailed {
        /// Sequence id of the trigger whose unit failed
        sequence_id: u64,
        /// Description of the failure
        cause: String,
    },

    /// A policy name did not match any known [`PolicyKind`].
    ///
    /// [`PolicyKind`]: crate::PolicyKind
    #[error("unknown policy kind: {0}")]
    UnknownPolicy(String),
}

impl EngineError {
    /// Create a work-failure error for the given trigger.
    pub fn work_failed(sequence_id: u64, cause: impl Into<String>) -> Self {
        Self::WorkFailed {
            sequence_id,
            cause: cause.into(),
        }
    }

    /// Create an unknown-policy error from the offending name.
    pub fn unknown_policy(name: impl Into<String>) -> Self {
        Self::UnknownPolicy(name.into())
    }
}

/// Specialized `Result` type for engine operations.
pub type Result<T> = std::result::Result<T, EngineError>;
