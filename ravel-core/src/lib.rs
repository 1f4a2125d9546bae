// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Core types for the ravel flattening-strategy engine.
//!
//! This crate holds the leaf vocabulary shared by the engine and its tests:
//!
//! - [`PolicyKind`]: the four selectable flattening strategies
//! - [`TriggerEvent`]: a discrete signal initiating one unit of work
//! - [`AsyncUnit`] / [`WorkProducer`]: simulated asynchronous work and the
//!   factory seam producing it
//! - [`EngineError`] / [`Result`]: the error taxonomy
//!
//! The engine itself (policies, sink, orchestrator) lives in `ravel-engine`.

mod error;
mod kind;
mod trigger;
mod work;

pub use error::{EngineError, Result};
pub use kind::PolicyKind;
pub use trigger::TriggerEvent;
pub use work::{AsyncUnit, SimulatedWork, WorkProducer};
