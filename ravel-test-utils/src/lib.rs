// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Deterministic [`WorkProducer`] implementations for tests.
//!
//! The engine's default producer draws random durations, which is the
//! behavior being demonstrated but useless for assertions. These producers
//! make unit durations (and failures) scriptable so policy semantics can
//! be verified under tokio's paused clock.
//!
//! [`WorkProducer`]: ravel_core::WorkProducer

mod producers;

pub use producers::{FailingWork, FixedDurationWork, ScriptedWork};
