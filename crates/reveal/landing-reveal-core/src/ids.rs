//! Identifiers and a simple allocator for regions and counters.

use serde::{Deserialize, Serialize};

#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
pub struct RegionId(pub u32);

#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
pub struct CounterId(pub u32);

/// Monotonic allocator for RegionId and CounterId.
/// Ids double as dense indices into the engine's storage.
#[derive(Default, Debug)]
pub struct IdAllocator {
    next_region: u32,
    next_counter: u32,
}

impl IdAllocator {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn alloc_region(&mut self) -> RegionId {
        let id = RegionId(self.next_region);
        self.next_region = self.next_region.wrapping_add(1);
        id
    }

    #[inline]
    pub fn alloc_counter(&mut self) -> CounterId {
        let id = CounterId(self.next_counter);
        self.next_counter = self.next_counter.wrapping_add(1);
        id
    }
}

impl RegionId {
    #[inline]
    pub(crate) fn index(self) -> usize {
        self.0 as usize
    }
}

impl CounterId {
    #[inline]
    pub(crate) fn index(self) -> usize {
        self.0 as usize
    }
}
