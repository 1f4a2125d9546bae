// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use std::sync::atomic::{AtomicUsize, Ordering};

use event_listener::Event;

/// Counts in-flight work and lets waiters park until it drains.
///
/// The waiter registers a listener and rechecks the count before parking,
/// so a notification between the check and `listen()` is never missed.
#[derive(Debug, Default)]
pub(crate) struct InFlightGauge {
    count: AtomicUsize,
    drained: Event,
}

impl InFlightGauge {
    pub(crate) fn enter(&self) {
        self.count.fetch_add(1, Ordering::AcqRel);
    }

    pub(crate) fn exit(&self) {
        if self.count.fetch_sub(1, Ordering::AcqRel) == 1 {
            self.drained.notify(usize::MAX);
        }
    }

    pub(crate) async fn wait_empty(&self) {
        loop {
            if self.count.load(Ordering::Acquire) == 0 {
                return;
            }
            let listener = self.drained.listen();
            if self.count.load(Ordering::Acquire) == 0 {
                return;
            }
            listener.await;
        }
    }
}
