// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Merge policy: every trigger's unit runs concurrently.

use std::sync::Arc;

use async_trait::async_trait;
use ravel_core::{PolicyKind, TriggerEvent, WorkProducer};
use tracing::trace;

use super::{deliver, Admission, FlatteningPolicy};
use crate::idle::InFlightGauge;
use crate::sink::ResultSink;

/// Starts a unit for every trigger, no matter how many are already running.
///
/// The policy itself is stateless; results arrive in completion order,
/// which need not match start order when durations race.
pub struct MergePolicy {
    inner: Arc<Inner>,
}

struct Inner {
    producer: Arc<dyn WorkProducer>,
    sink: ResultSink,
    in_flight: InFlightGauge,
}

impl MergePolicy {
    pub fn new(producer: Arc<dyn WorkProducer>, sink: ResultSink) -> Self {
        Self {
            inner: Arc::new(Inner {
                producer,
                sink,
                in_flight: InFlightGauge::default(),
            }),
        }
    }
}

#[async_trait]
impl FlatteningPolicy for MergePolicy {
    fn kind(&self) -> PolicyKind {
        PolicyKind::Merge
    }

    async fn accept(&self, trigger: TriggerEvent) -> Admission {
        let unit = self.inner.producer.produce(PolicyKind::Merge, &trigger);
        trace!(
            sequence_id = trigger.sequence_id,
            duration_ms = unit.duration().as_millis() as u64,
            "merge: starting unit"
        );

        self.inner.in_flight.enter();
        let inner = self.inner.clone();
        tokio::spawn(async move {
            let outcome = unit.run().await;
            deliver(PolicyKind::Merge, &inner.sink, outcome);
            inner.in_flight.exit();
        });

        Admission::Started
    }

    async fn until_idle(&self) {
        self.inner.in_flight.wait_empty().await;
    }
}
