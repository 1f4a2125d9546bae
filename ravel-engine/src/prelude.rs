// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Prelude re-exporting the engine's commonly used types.
//!
//! ```ignore
//! use ravel_engine::prelude::*;
//!
//! let orchestrator = Orchestrator::new(EngineConfig::default());
//! orchestrator.activate(PolicyKind::Merge);
//! ```

pub use crate::config::EngineConfig;
pub use crate::orchestrator::Orchestrator;
pub use crate::policy::{
    Admission, ConcatPolicy, ExhaustPolicy, FlatteningPolicy, MergePolicy, SwitchPolicy,
};
pub use crate::sink::ResultSink;
pub use crate::source::TriggerSource;

pub use ravel_core::{
    AsyncUnit, EngineError, PolicyKind, Result, SimulatedWork, TriggerEvent, WorkProducer,
};
