//! Output contracts from the reveal engine.
//!
//! Outputs carry the presentation changes produced by one engine call and a
//! separate list of semantic events. Adapters (wasm, tests) apply the changes
//! to the host document.

use serde::{Deserialize, Serialize};

use crate::ids::{CounterId, RegionId};

/// One presentation change for the host to apply.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Change {
    /// Add `class` to the region's node. Emitted once per region.
    RegionClass {
        region: RegionId,
        key: String,
        class: String,
    },
    /// Replace the counter node's text.
    CounterText {
        counter: CounterId,
        key: String,
        value: u64,
        text: String,
    },
}

/// Discrete semantic signals emitted while revealing and animating.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
#[non_exhaustive]
pub enum CoreEvent {
    RegionRevealed {
        region: RegionId,
        key: String,
    },
    CounterStarted {
        counter: CounterId,
        key: String,
        target: u64,
    },
    CounterCompleted {
        counter: CounterId,
        key: String,
        value: u64,
    },
}

/// Outputs returned by the engine's notify/tick calls.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Outputs {
    #[serde(default)]
    pub changes: Vec<Change>,
    #[serde(default)]
    pub events: Vec<CoreEvent>,
}

impl Outputs {
    #[inline]
    pub fn clear(&mut self) {
        self.changes.clear();
        self.events.clear();
    }

    #[inline]
    pub fn push_change(&mut self, change: Change) {
        self.changes.push(change);
    }

    #[inline]
    pub fn push_event(&mut self, event: CoreEvent) {
        self.events.push(event);
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.changes.is_empty() && self.events.is_empty()
    }

    /// Last text written for `counter` in this batch, if any.
    pub fn counter_text(&self, counter: CounterId) -> Option<&str> {
        self.changes.iter().rev().find_map(|c| match c {
            Change::CounterText {
                counter: id, text, ..
            } if *id == counter => Some(text.as_str()),
            _ => None,
        })
    }
}
