// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Wires trigger sources, policies, and the shared sink together.

use std::sync::Arc;

use ravel_core::{PolicyKind, SimulatedWork, WorkProducer};
use tracing::debug;

use crate::config::EngineConfig;
use crate::policy::{
    ConcatPolicy, ExhaustPolicy, FlatteningPolicy, MergePolicy, SwitchPolicy,
};
use crate::sink::ResultSink;
use crate::source::TriggerSource;

/// Owns one policy instance per kind, one trigger source per policy, and
/// the sink they all share.
///
/// The four policies are fully independent: each has its own sequence
/// counter and state; only the sink is shared. This is the engine's public
/// surface for a host UI: buttons call [`activate`](Self::activate), a
/// list renders [`results`](Self::results).
pub struct Orchestrator {
    config: EngineConfig,
    sink: ResultSink,
    switch: TriggerSource,
    merge: TriggerSource,
    concat: TriggerSource,
    exhaust: TriggerSource,
}

impl Orchestrator {
    /// Orchestrator with the default simulated workload drawn from
    /// `config.duration_range_ms`.
    #[must_use]
    pub fn new(config: EngineConfig) -> Self {
        let producer = Arc::new(SimulatedWork::new(config.duration_range_ms.clone()));
        Self::with_producer(config, producer)
    }

    /// Orchestrator with a custom work producer (deterministic producers
    /// for tests live in `ravel-test-utils`).
    #[must_use]
    pub fn with_producer(config: EngineConfig, producer: Arc<dyn WorkProducer>) -> Self {
        let sink = ResultSink::new(config.sink_capacity);

        let switch: Arc<dyn FlatteningPolicy> =
            Arc::new(SwitchPolicy::new(producer.clone(), sink.clone()));
        let merge: Arc<dyn FlatteningPolicy> =
            Arc::new(MergePolicy::new(producer.clone(), sink.clone()));
        let concat: Arc<dyn FlatteningPolicy> =
            Arc::new(ConcatPolicy::new(producer.clone(), sink.clone()));
        let exhaust: Arc<dyn FlatteningPolicy> =
            Arc::new(ExhaustPolicy::new(producer, sink.clone()));

        Self {
            config,
            sink,
            switch: TriggerSource::new(switch),
            merge: TriggerSource::new(merge),
            concat: TriggerSource::new(concat),
            exhaust: TriggerSource::new(exhaust),
        }
    }

    /// Fire a burst of `burst_size` triggers, `trigger_interval` apart,
    /// against the named policy. Fire-and-forget.
    pub fn activate(&self, kind: PolicyKind) {
        debug!(%kind, burst_size = self.config.burst_size, "activating policy");
        self.source(kind)
            .emit_burst(self.config.burst_size, self.config.trigger_interval);
    }

    /// Current sink entries, newest-first, for the host to render.
    #[must_use]
    pub fn results(&self) -> Vec<String> {
        self.sink.snapshot()
    }

    /// The shared result sink.
    #[must_use]
    pub fn sink(&self) -> &ResultSink {
        &self.sink
    }

    /// The trigger source feeding the named policy.
    #[must_use]
    pub fn source(&self, kind: PolicyKind) -> &TriggerSource {
        match kind {
            PolicyKind::Switch => &self.switch,
            PolicyKind::Merge => &self.merge,
            PolicyKind::Concat => &self.concat,
            PolicyKind::Exhaust => &self.exhaust,
        }
    }

    /// The engine configuration in force.
    #[must_use]
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Resolve once every burst has finished emitting and every policy has
    /// no unit running or queued.
    pub async fn until_idle(&self) {
        for kind in PolicyKind::ALL {
            let source = self.source(kind);
            source.until_drained().await;
            source.policy().until_idle().await;
        }
    }
}
