// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use core::ops::Range;
use core::time::Duration;

use serde::{Deserialize, Serialize};

/// Tunable constants for the engine.
///
/// Every recognized constant of the demo is adjustable here; `Default`
/// yields the demo values (burst of 3 triggers 100ms apart, simulated
/// durations in `[500, 2500)` ms, sink capacity 10).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Number of triggers emitted per burst.
    pub burst_size: usize,
    /// Spacing between consecutive trigger emissions within a burst.
    pub trigger_interval: Duration,
    /// Half-open millisecond range simulated unit durations are drawn from.
    pub duration_range_ms: Range<u64>,
    /// Number of result entries the sink retains.
    pub sink_capacity: usize,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            burst_size: 3,
            trigger_interval: Duration::from_millis(100),
            duration_range_ms: 500..2500,
            sink_capacity: 10,
        }
    }
}
