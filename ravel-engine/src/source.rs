// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Ordered emitter of trigger events.

use core::time::Duration;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use ravel_core::TriggerEvent;
use tokio::time::sleep;
use tracing::trace;

use crate::idle::InFlightGauge;
use crate::policy::FlatteningPolicy;

/// Emits bursts of triggers, simulating rapid repeated user action.
///
/// Each source owns its policy's monotonic sequence counter, starting at 1
/// and continuous across bursts. Bursts are fire-and-forget: once
/// scheduled, every emission in the burst occurs. Invoking `emit_burst`
/// again before a prior burst finishes interleaves the two with no
/// combined-order guarantee, matching uncoordinated rapid user input.
pub struct TriggerSource {
    policy: Arc<dyn FlatteningPolicy>,
    counter: Arc<AtomicU64>,
    bursts: Arc<InFlightGauge>,
}

impl TriggerSource {
    pub fn new(policy: Arc<dyn FlatteningPolicy>) -> Self {
        Self {
            policy,
            counter: Arc::new(AtomicU64::new(0)),
            bursts: Arc::new(InFlightGauge::default()),
        }
    }

    /// Schedule `count` trigger emissions spaced `interval` apart.
    ///
    /// The first trigger fires immediately. A `count` of zero is a no-op:
    /// no task is spawned and no state changes.
    pub fn emit_burst(&self, count: usize, interval: Duration) {
        if count == 0 {
            return;
        }

        let policy = self.policy.clone();
        let counter = self.counter.clone();
        let bursts = self.bursts.clone();

        bursts.enter();
        tokio::spawn(async move {
            for i in 0..count {
                if i > 0 {
                    sleep(interval).await;
                }
                let trigger = TriggerEvent::new(counter.fetch_add(1, Ordering::AcqRel) + 1);
                let admission = policy.accept(trigger).await;
                trace!(
                    kind = %policy.kind(),
                    sequence_id = trigger.sequence_id,
                    ?admission,
                    "trigger emitted"
                );
            }
            bursts.exit();
        });
    }

    /// Resolve once every scheduled burst has finished emitting.
    ///
    /// This only covers emissions; await the policy's `until_idle` for the
    /// units those emissions started.
    pub async fn until_drained(&self) {
        self.bursts.wait_empty().await;
    }

    /// The policy this source feeds.
    #[must_use]
    pub fn policy(&self) -> &Arc<dyn FlatteningPolicy> {
        &self.policy
    }
}
