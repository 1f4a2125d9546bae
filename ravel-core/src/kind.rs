// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! The four selectable flattening strategies.

use core::fmt;
use core::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::EngineError;

/// Identifies one of the four flattening strategies.
///
/// A flattening strategy reconciles multiple trigger-initiated asynchronous
/// units into one ordered result stream:
///
/// - [`Switch`](Self::Switch): a new trigger supersedes the unit in flight
/// - [`Merge`](Self::Merge): every trigger runs concurrently
/// - [`Concat`](Self::Concat): triggers queue and run strictly one at a time
/// - [`Exhaust`](Self::Exhaust): triggers arriving while busy are dropped
///
/// The `Display` form is the lowercase name used in result labels, e.g.
/// `[switch] COMPLETED #3 (1000ms)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PolicyKind {
    /// Supersede the active unit when a new trigger arrives.
    Switch,
    /// Run every trigger's unit concurrently; results in completion order.
    Merge,
    /// Queue triggers and run their units strictly in arrival order.
    Concat,
    /// Drop triggers that arrive while a unit is active.
    Exhaust,
}

impl PolicyKind {
    /// All kinds, in the order the demo presents them.
    pub const ALL: [Self; 4] = [Self::Switch, Self::Merge, Self::Concat, Self::Exhaust];

    /// Lowercase name, as rendered in result labels.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Switch => "switch",
            Self::Merge => "merge",
            Self::Concat => "concat",
            Self::Exhaust => "exhaust",
        }
    }
}

impl fmt::Display for PolicyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PolicyKind {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "switch" => Ok(Self::Switch),
            "merge" => Ok(Self::Merge),
            "concat" => Ok(Self::Concat),
            "exhaust" => Ok(Self::Exhaust),
            other => Err(EngineError::unknown_policy(other)),
        }
    }
}
