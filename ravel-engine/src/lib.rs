// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Flattening-strategy engine.
//!
//! Given bursts of [`TriggerEvent`]s and a [`WorkProducer`] that turns each
//! accepted trigger into a simulated asynchronous unit of work, the engine
//! applies one of four selectable concurrency policies to decide which
//! units run to completion and in what order their results are observed:
//!
//! - **switch** — a new trigger supersedes the unit in flight; only the
//!   last trigger of a rapid burst reaches the sink
//! - **merge** — every trigger runs concurrently; results arrive in
//!   completion order
//! - **concat** — triggers queue and run strictly one at a time, in
//!   arrival order
//! - **exhaust** — triggers arriving while a unit is active are dropped
//!
//! Completed results land in a bounded, newest-first [`ResultSink`].
//!
//! # Example
//!
//! ```
//! use std::time::Duration;
//! use ravel_engine::prelude::*;
//!
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() {
//! let config = EngineConfig {
//!     burst_size: 3,
//!     trigger_interval: Duration::from_millis(5),
//!     duration_range_ms: 10..20,
//!     sink_capacity: 10,
//! };
//! let orchestrator = Orchestrator::new(config);
//!
//! // Rapid triggers under concat run strictly one at a time.
//! orchestrator.activate(PolicyKind::Concat);
//! orchestrator.until_idle().await;
//!
//! assert_eq!(orchestrator.results().len(), 3);
//! # }
//! ```
//!
//! # Concurrency model
//!
//! All "concurrency" is timer-driven: operations return immediately and
//! schedule continuation work on the tokio runtime. Logical cancellation
//! (switch) never stops a running timer; the superseded unit's outcome is
//! discarded via a generation check when it eventually fires.

mod config;
mod idle;
mod orchestrator;
pub mod policy;
pub mod prelude;
mod sink;
mod source;

pub use config::EngineConfig;
pub use orchestrator::Orchestrator;
pub use policy::{
    Admission, ConcatPolicy, ExhaustPolicy, FlatteningPolicy, MergePolicy, SwitchPolicy,
};
pub use sink::ResultSink;
pub use source::TriggerSource;

// Re-exported so engine users need only one crate in scope.
pub use ravel_core::{
    AsyncUnit, EngineError, PolicyKind, Result, SimulatedWork, TriggerEvent, WorkProducer,
};
