// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Concat policy: triggers queue and run strictly one at a time.

use std::collections::VecDeque;
use std::sync::Arc;

use async_trait::async_trait;
use event_listener::Event;
use futures::lock::Mutex as FutureMutex;
use ravel_core::{PolicyKind, TriggerEvent, WorkProducer};
use tracing::trace;

use super::{deliver, Admission, FlatteningPolicy};
use crate::sink::ResultSink;

/// Runs units one at a time, strictly in trigger arrival order.
///
/// A trigger arriving while a unit is active joins a FIFO queue; when the
/// active unit completes (or fails), its outcome is delivered and the next
/// queued trigger starts. At most one worker drains the queue, so no two
/// units are ever concurrently active and results emit in arrival order.
pub struct ConcatPolicy {
    inner: Arc<Inner>,
}

struct Inner {
    producer: Arc<dyn WorkProducer>,
    sink: ResultSink,
    state: FutureMutex<State>,
    processing_complete: Event,
}

struct State {
    queue: VecDeque<TriggerEvent>,
    is_processing: bool,
}

impl ConcatPolicy {
    pub fn new(producer: Arc<dyn WorkProducer>, sink: ResultSink) -> Self {
        Self {
            inner: Arc::new(Inner {
                producer,
                sink,
                state: FutureMutex::new(State {
                    queue: VecDeque::new(),
                    is_processing: false,
                }),
                processing_complete: Event::new(),
            }),
        }
    }
}

impl Inner {
    /// Worker loop: run `first`, then keep draining the queue until empty.
    async fn process_from(&self, first: TriggerEvent) {
        let mut next = Some(first);
        while let Some(trigger) = next {
            let unit = self.producer.produce(PolicyKind::Concat, &trigger);
            trace!(
                sequence_id = trigger.sequence_id,
                duration_ms = unit.duration().as_millis() as u64,
                "concat: starting unit"
            );
            let outcome = unit.run().await;
            deliver(PolicyKind::Concat, &self.sink, outcome);
            next = self.finish_and_dequeue().await;
        }
        self.processing_complete.notify(usize::MAX);
    }

    /// Called when a unit finishes. Returns the next queued trigger, or
    /// marks the policy idle when the queue is empty.
    async fn finish_and_dequeue(&self) -> Option<TriggerEvent> {
        let mut state = self.state.lock().await;
        let next = state.queue.pop_front();
        if next.is_none() {
            state.is_processing = false;
        }
        next
    }
}

#[async_trait]
impl FlatteningPolicy for ConcatPolicy {
    fn kind(&self) -> PolicyKind {
        PolicyKind::Concat
    }

    async fn accept(&self, trigger: TriggerEvent) -> Admission {
        let mut state = self.inner.state.lock().await;
        if state.is_processing {
            state.queue.push_back(trigger);
            trace!(
                sequence_id = trigger.sequence_id,
                queued = state.queue.len(),
                "concat: unit active, trigger enqueued"
            );
            return Admission::Enqueued;
        }

        state.is_processing = true;
        drop(state);

        let inner = self.inner.clone();
        tokio::spawn(async move {
            inner.process_from(trigger).await;
        });

        Admission::Started
    }

    async fn until_idle(&self) {
        loop {
            if !self.inner.state.lock().await.is_processing {
                return;
            }
            let listener = self.inner.processing_complete.listen();
            if !self.inner.state.lock().await.is_processing {
                return;
            }
            listener.await;
        }
    }
}
