//! Visibility sources.
//!
//! The engine consumes a stream of [`VisibilityChange`]s per tracked region.
//! [`HostVisibility`] is fed by a host primitive (e.g. `IntersectionObserver`
//! entries); [`GeometryTracker`] derives the same stream from bounding boxes
//! when no such primitive exists. Both only report state flips, never a
//! repeat of the last known state.

use hashbrown::HashMap;
use serde::{Deserialize, Serialize};

use crate::config::ObserverConfig;
use crate::geometry::{intersection_ratio, Rect, RootMargin};
use crate::ids::RegionId;

/// One intersection-state transition for a tracked region.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct VisibilityChange {
    pub region: RegionId,
    pub is_intersecting: bool,
    /// Visible fraction when known; hosts that only report a boolean use 1.0/0.0.
    pub ratio: f32,
}

/// Subscription seam between a visibility primitive and the engine.
pub trait VisibilitySource {
    /// Move all pending changes into `out`, oldest first.
    fn drain_changes(&mut self, out: &mut Vec<VisibilityChange>);
}

/// Queue for changes reported by the host.
#[derive(Debug, Default)]
pub struct HostVisibility {
    pending: Vec<VisibilityChange>,
}

impl HostVisibility {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, region: RegionId, is_intersecting: bool) {
        self.pending.push(VisibilityChange {
            region,
            is_intersecting,
            ratio: if is_intersecting { 1.0 } else { 0.0 },
        });
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }
}

impl VisibilitySource for HostVisibility {
    fn drain_changes(&mut self, out: &mut Vec<VisibilityChange>) {
        out.append(&mut self.pending);
    }
}

/// Bounding-box visibility check against a margin-adjusted viewport.
///
/// The first measurement of a region always reports its state, mirroring the
/// initial notification a native observer delivers on `observe`.
#[derive(Debug)]
pub struct GeometryTracker {
    threshold: f32,
    margin: RootMargin,
    /// Last reported state per region; None until first measured.
    tracked: HashMap<RegionId, Option<bool>>,
    order: Vec<RegionId>,
    pending: Vec<VisibilityChange>,
}

impl GeometryTracker {
    pub fn new(cfg: &ObserverConfig) -> Self {
        Self {
            threshold: cfg.threshold,
            margin: cfg.root_margin,
            tracked: HashMap::new(),
            order: Vec::new(),
            pending: Vec::new(),
        }
    }

    pub fn observe(&mut self, region: RegionId) {
        if self.tracked.insert(region, None).is_none() {
            self.order.push(region);
        }
    }

    pub fn observe_all(&mut self, regions: impl IntoIterator<Item = RegionId>) {
        for r in regions {
            self.observe(r);
        }
    }

    /// A region is intersecting once a non-zero fraction at or above the
    /// threshold lies inside the adjusted viewport.
    fn is_intersecting(&self, ratio: f32) -> bool {
        ratio > 0.0 && ratio >= self.threshold
    }

    /// Measure tracked regions against `viewport` and queue state flips.
    ///
    /// `rect_of` returns the current box of a region; regions it cannot place
    /// (detached, not laid out) are skipped and keep their last state.
    pub fn measure<F>(&mut self, viewport: &Rect, mut rect_of: F) -> usize
    where
        F: FnMut(RegionId) -> Option<Rect>,
    {
        let before = self.pending.len();
        for region in &self.order {
            let Some(rect) = rect_of(*region) else {
                continue;
            };
            let ratio = intersection_ratio(&rect, viewport, &self.margin);
            let now = self.is_intersecting(ratio);
            let Some(last) = self.tracked.get_mut(region) else {
                continue;
            };
            if *last != Some(now) {
                *last = Some(now);
                self.pending.push(VisibilityChange {
                    region: *region,
                    is_intersecting: now,
                    ratio,
                });
            }
        }
        self.pending.len() - before
    }
}

impl VisibilitySource for GeometryTracker {
    fn drain_changes(&mut self, out: &mut Vec<VisibilityChange>) {
        out.append(&mut self.pending);
    }
}
