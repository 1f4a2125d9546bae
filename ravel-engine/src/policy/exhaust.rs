// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Exhaust policy: triggers arriving while busy are dropped.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use ravel_core::{PolicyKind, TriggerEvent, WorkProducer};
use tracing::trace;

use super::{deliver, Admission, FlatteningPolicy};
use crate::idle::InFlightGauge;
use crate::sink::ResultSink;

/// Starts a unit only when idle; triggers arriving while busy are dropped
/// entirely — no unit is created and nothing is queued.
pub struct ExhaustPolicy {
    inner: Arc<Inner>,
}

struct Inner {
    producer: Arc<dyn WorkProducer>,
    sink: ResultSink,
    busy: AtomicBool,
    in_flight: InFlightGauge,
}

impl ExhaustPolicy {
    pub fn new(producer: Arc<dyn WorkProducer>, sink: ResultSink) -> Self {
        Self {
            inner: Arc::new(Inner {
                producer,
                sink,
                busy: AtomicBool::new(false),
                in_flight: InFlightGauge::default(),
            }),
        }
    }
}

#[async_trait]
impl FlatteningPolicy for ExhaustPolicy {
    fn kind(&self) -> PolicyKind {
        PolicyKind::Exhaust
    }

    async fn accept(&self, trigger: TriggerEvent) -> Admission {
        if self
            .inner
            .busy
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .is_err()
        {
            trace!(
                sequence_id = trigger.sequence_id,
                "exhaust: busy, trigger dropped"
            );
            return Admission::Rejected;
        }

        let unit = self.inner.producer.produce(PolicyKind::Exhaust, &trigger);
        trace!(
            sequence_id = trigger.sequence_id,
            duration_ms = unit.duration().as_millis() as u64,
            "exhaust: starting unit"
        );

        self.inner.in_flight.enter();
        let inner = self.inner.clone();
        tokio::spawn(async move {
            let outcome = unit.run().await;
            deliver(PolicyKind::Exhaust, &inner.sink, outcome);
            // Clear busy before waking idle waiters so a trigger fired
            // from an awakened waiter is admitted.
            inner.busy.store(false, Ordering::Release);
            inner.in_flight.exit();
        });

        Admission::Started
    }

    async fn until_idle(&self) {
        self.inner.in_flight.wait_empty().await;
    }
}
