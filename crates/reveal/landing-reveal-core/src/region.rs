//! Region entity: a block of page content tracked for viewport entry.

use crate::ids::{CounterId, RegionId};

#[derive(Clone, Debug)]
pub struct Region {
    pub id: RegionId,
    pub key: String,
    revealed: bool,
    observed: bool,
    counters: Vec<CounterId>,
}

impl Region {
    pub fn new(id: RegionId, key: impl Into<String>) -> Self {
        Self {
            id,
            key: key.into(),
            revealed: false,
            observed: false,
            counters: Vec::new(),
        }
    }

    pub fn is_revealed(&self) -> bool {
        self.revealed
    }

    pub fn is_observed(&self) -> bool {
        self.observed
    }

    pub fn counters(&self) -> &[CounterId] {
        &self.counters
    }

    pub fn has_counters(&self) -> bool {
        !self.counters.is_empty()
    }

    /// Mark revealed. Returns true only on the false -> true transition.
    pub fn reveal(&mut self) -> bool {
        if self.revealed {
            return false;
        }
        self.revealed = true;
        true
    }

    pub(crate) fn set_observed(&mut self) -> bool {
        !std::mem::replace(&mut self.observed, true)
    }

    pub(crate) fn push_counter(&mut self, counter: CounterId) {
        self.counters.push(counter);
    }
}
