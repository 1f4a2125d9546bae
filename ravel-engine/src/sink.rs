// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Bounded newest-first log of completed results.

use std::collections::VecDeque;
use std::sync::Arc;

use parking_lot::Mutex;
use tracing::debug;

/// Ordered log of completed result strings, newest-first, bounded.
///
/// `ResultSink` is a cheap-to-clone handle; clones share the same log, so
/// one sink can serve every policy's completion callback. `record` is
/// atomic: the oldest entry is evicted silently once capacity is reached.
#[derive(Debug, Clone)]
pub struct ResultSink {
    inner: Arc<Inner>,
}

#[derive(Debug)]
struct Inner {
    capacity: usize,
    entries: Mutex<VecDeque<String>>,
}

impl ResultSink {
    /// Default number of retained entries.
    pub const DEFAULT_CAPACITY: usize = 10;

    /// Sink retaining at most `capacity` entries.
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        Self {
            inner: Arc::new(Inner {
                capacity,
                entries: Mutex::new(VecDeque::with_capacity(capacity)),
            }),
        }
    }

    /// Prepend `message`, evicting the oldest entry beyond capacity.
    pub fn record(&self, message: impl Into<String>) {
        let message = message.into();
        debug!(%message, "sink: recording result");

        let mut entries = self.inner.entries.lock();
        entries.push_front(message);
        entries.truncate(self.inner.capacity);
    }

    /// Current entries, newest-first.
    #[must_use]
    pub fn snapshot(&self) -> Vec<String> {
        self.inner.entries.lock().iter().cloned().collect()
    }

    /// Number of retained entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.inner.entries.lock().len()
    }

    /// True when nothing has been recorded yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.inner.entries.lock().is_empty()
    }

    /// Maximum number of retained entries.
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.inner.capacity
    }
}

impl Default for ResultSink {
    fn default() -> Self {
        Self::new(Self::DEFAULT_CAPACITY)
    }
}
