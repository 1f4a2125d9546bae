// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Switch policy: a new trigger supersedes the unit in flight.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use ravel_core::{PolicyKind, TriggerEvent, WorkProducer};
use tracing::trace;

use super::{deliver, Admission, FlatteningPolicy};
use crate::idle::InFlightGauge;
use crate::sink::ResultSink;

/// Starts a unit for every trigger, superseding the previously active one.
///
/// Supersession is a generation check rather than timer cancellation: each
/// unit is stamped with the policy generation current at its start, and a
/// completion whose generation no longer matches is discarded, success or
/// failure alike. Of N triggers arriving before any completes, exactly the
/// last one's result reaches the sink.
pub struct SwitchPolicy {
    inner: Arc<Inner>,
}

struct Inner {
    producer: Arc<dyn WorkProducer>,
    sink: ResultSink,
    generation: AtomicU64,
    in_flight: InFlightGauge,
}

impl SwitchPolicy {
    pub fn new(producer: Arc<dyn WorkProducer>, sink: ResultSink) -> Self {
        Self {
            inner: Arc::new(Inner {
                producer,
                sink,
                generation: AtomicU64::new(0),
                in_flight: InFlightGauge::default(),
            }),
        }
    }
}

#[async_trait]
impl FlatteningPolicy for SwitchPolicy {
    fn kind(&self) -> PolicyKind {
        PolicyKind::Switch
    }

    async fn accept(&self, trigger: TriggerEvent) -> Admission {
        // Bumping the generation logically cancels the active unit.
        let generation = self.inner.generation.fetch_add(1, Ordering::AcqRel) + 1;
        let unit = self.inner.producer.produce(PolicyKind::Switch, &trigger);
        trace!(
            sequence_id = trigger.sequence_id,
            generation,
            duration_ms = unit.duration().as_millis() as u64,
            "switch: starting unit"
        );

        self.inner.in_flight.enter();
        let inner = self.inner.clone();
        tokio::spawn(async move {
            let sequence_id = unit.sequence_id();
            let outcome = unit.run().await;
            if inner.generation.load(Ordering::Acquire) == generation {
                deliver(PolicyKind::Switch, &inner.sink, outcome);
            } else {
                trace!(sequence_id, "switch: unit superseded, outcome discarded");
            }
            inner.in_flight.exit();
        });

        Admission::Started
    }

    async fn until_idle(&self) {
        self.inner.in_flight.wait_empty().await;
    }
}
