//! Engine: owns regions, counters and the frame queue; public API for hosts.
//!
//! Methods:
//! - new, from_page, add_region, add_counter, observe/observe_all
//! - notify_visibility (host primitive), pump (any VisibilitySource),
//!   update_geometry (bounding-box fallback)
//! - animate (start one counter), tick (one render frame)

use hashbrown::HashMap;

use crate::config::Config;
use crate::counter::Counter;
use crate::error::{Result, RevealError};
use crate::format::group_digits;
use crate::geometry::Rect;
use crate::ids::{CounterId, IdAllocator, RegionId};
use crate::observer::{GeometryTracker, VisibilityChange, VisibilitySource};
use crate::outputs::{Change, CoreEvent, Outputs};
use crate::page::PageSpec;
use crate::region::Region;
use crate::scheduler::FrameScheduler;

#[derive(Debug)]
pub struct Engine {
    cfg: Config,
    ids: IdAllocator,
    regions: Vec<Region>,
    counters: Vec<Counter>,
    region_keys: HashMap<String, RegionId>,
    counter_keys: HashMap<String, CounterId>,

    tracker: GeometryTracker,
    scheduler: FrameScheduler<CounterId>,
    changes_buf: Vec<VisibilityChange>,

    // Per-call outputs
    outputs: Outputs,
}

impl Engine {
    /// Create an empty engine. Fails when the configuration is out of range.
    pub fn new(cfg: Config) -> Result<Self> {
        cfg.validate()?;
        Ok(Self {
            tracker: GeometryTracker::new(&cfg.observer),
            cfg,
            ids: IdAllocator::new(),
            regions: Vec::new(),
            counters: Vec::new(),
            region_keys: HashMap::new(),
            counter_keys: HashMap::new(),
            scheduler: FrameScheduler::new(),
            changes_buf: Vec::new(),
            outputs: Outputs::default(),
        })
    }

    /// Build regions and counters from a page descriptor and observe them all.
    pub fn from_page(cfg: Config, page: &PageSpec) -> Result<Self> {
        page.validate()?;
        let mut engine = Self::new(cfg)?;
        for spec in &page.regions {
            let region = engine.add_region(&spec.key)?;
            for counter in &spec.counters {
                let target = counter.parse_target()?;
                engine.add_counter(region, &counter.key, target)?;
            }
        }
        engine.observe_all();
        log::debug!(
            "reveal engine built: {} regions, {} counters",
            engine.regions.len(),
            engine.counters.len()
        );
        Ok(engine)
    }

    pub fn add_region(&mut self, key: &str) -> Result<RegionId> {
        if self.region_keys.contains_key(key) {
            return Err(RevealError::DuplicateKey {
                kind: "region",
                key: key.to_string(),
            });
        }
        let id = self.ids.alloc_region();
        self.regions.push(Region::new(id, key));
        self.region_keys.insert(key.to_string(), id);
        Ok(id)
    }

    pub fn add_counter(&mut self, region: RegionId, key: &str, target: u64) -> Result<CounterId> {
        if self.counter_keys.contains_key(key) {
            return Err(RevealError::DuplicateKey {
                kind: "counter",
                key: key.to_string(),
            });
        }
        let owner = self
            .regions
            .get_mut(region.index())
            .ok_or_else(|| RevealError::UnknownRegion {
                key: format!("#{}", region.0),
            })?;
        let id = self.ids.alloc_counter();
        owner.push_counter(id);
        self.counters.push(Counter::new(id, key, region, target));
        self.counter_keys.insert(key.to_string(), id);
        Ok(id)
    }

    /// Register one region for visibility tracking.
    pub fn observe(&mut self, region: RegionId) {
        if let Some(r) = self.regions.get_mut(region.index()) {
            if r.set_observed() {
                self.tracker.observe(region);
            }
        }
    }

    /// Register every known region for visibility tracking.
    pub fn observe_all(&mut self) {
        for idx in 0..self.regions.len() {
            let id = self.regions[idx].id;
            self.observe(id);
        }
    }

    pub fn region(&self, id: RegionId) -> Option<&Region> {
        self.regions.get(id.index())
    }

    pub fn counter(&self, id: CounterId) -> Option<&Counter> {
        self.counters.get(id.index())
    }

    pub fn region_id(&self, key: &str) -> Option<RegionId> {
        self.region_keys.get(key).copied()
    }

    pub fn counter_id(&self, key: &str) -> Option<CounterId> {
        self.counter_keys.get(key).copied()
    }

    pub fn regions(&self) -> &[Region] {
        &self.regions
    }

    pub fn counters(&self) -> &[Counter] {
        &self.counters
    }

    /// True when no counter frame is pending.
    pub fn is_idle(&self) -> bool {
        self.scheduler.is_idle()
    }

    /// Number of render frames evaluated so far.
    pub fn frame_index(&self) -> u64 {
        self.scheduler.frame_index()
    }

    /// Host visibility callback. Non-intersecting notifications and unobserved
    /// or unknown regions produce no output.
    pub fn notify_visibility(&mut self, region: RegionId, is_intersecting: bool) -> &Outputs {
        self.outputs.clear();
        self.apply_visibility(region, is_intersecting);
        &self.outputs
    }

    /// Key-addressed variant of [`Engine::notify_visibility`] for hosts that track
    /// nodes by name.
    pub fn notify_visibility_by_key(&mut self, key: &str, is_intersecting: bool) -> Result<&Outputs> {
        let region = self.lookup_region(key)?;
        Ok(self.notify_visibility(region, is_intersecting))
    }

    /// Drain a visibility source and apply every change in order.
    pub fn pump(&mut self, source: &mut dyn VisibilitySource) -> &Outputs {
        self.outputs.clear();
        let mut buf = std::mem::take(&mut self.changes_buf);
        source.drain_changes(&mut buf);
        self.apply_changes(&mut buf);
        self.changes_buf = buf;
        &self.outputs
    }

    /// Bounding-box fallback: measure region boxes against the viewport and
    /// apply any resulting visibility flips.
    pub fn update_geometry(&mut self, viewport: Rect, rects: &[(RegionId, Rect)]) -> &Outputs {
        self.outputs.clear();
        self.tracker.measure(&viewport, |id| {
            rects.iter().find(|(r, _)| *r == id).map(|(_, rect)| *rect)
        });
        let mut buf = std::mem::take(&mut self.changes_buf);
        self.tracker.drain_changes(&mut buf);
        self.apply_changes(&mut buf);
        self.changes_buf = buf;
        &self.outputs
    }

    /// Reveal a region regardless of observation, as the page does for its
    /// hero block once loading finishes.
    pub fn reveal_immediately(&mut self, key: &str) -> Result<&Outputs> {
        let region = self.lookup_region(key)?;
        self.outputs.clear();
        self.reveal_region(region);
        Ok(&self.outputs)
    }

    /// Start one counter's animation. Returns false when it was already started
    /// or completed; nothing is re-armed or reset in that case.
    pub fn animate(&mut self, counter: CounterId) -> bool {
        let Some(c) = self.counters.get_mut(counter.index()) else {
            return false;
        };
        if !c.start() {
            log::trace!("counter '{}' already started; ignoring trigger", c.key);
            return false;
        }
        log::debug!("counter '{}' animating to {}", c.key, c.target());
        self.outputs.push_event(CoreEvent::CounterStarted {
            counter,
            key: c.key.clone(),
            target: c.target(),
        });
        self.scheduler.arm(counter);
        true
    }

    /// Evaluate one render frame at host time `now_ms` (e.g. the
    /// `requestAnimationFrame` timestamp). Counters that are not finished are
    /// re-armed for the next frame.
    pub fn tick(&mut self, now_ms: f64) -> &Outputs {
        self.outputs.clear();
        let duration = self.cfg.counter.duration_ms;
        for id in self.scheduler.take_frame() {
            let Some(c) = self.counters.get_mut(id.index()) else {
                continue;
            };
            let Some(frame) = c.step(now_ms, duration) else {
                continue;
            };
            self.outputs.push_change(Change::CounterText {
                counter: id,
                key: c.key.clone(),
                value: frame.value,
                text: group_digits(frame.value, &self.cfg.counter.group_separator),
            });
            if frame.done {
                log::debug!("counter '{}' completed at {}", c.key, frame.value);
                self.outputs.push_event(CoreEvent::CounterCompleted {
                    counter: id,
                    key: c.key.clone(),
                    value: frame.value,
                });
            } else {
                self.scheduler.arm(id);
            }
        }
        &self.outputs
    }

    fn lookup_region(&self, key: &str) -> Result<RegionId> {
        self.region_id(key).ok_or_else(|| RevealError::UnknownRegion {
            key: key.to_string(),
        })
    }

    fn apply_changes(&mut self, buf: &mut Vec<VisibilityChange>) {
        for change in buf.drain(..) {
            self.apply_visibility(change.region, change.is_intersecting);
        }
    }

    fn apply_visibility(&mut self, region: RegionId, is_intersecting: bool) {
        if !is_intersecting {
            return;
        }
        match self.regions.get(region.index()) {
            Some(r) if r.is_observed() => {}
            Some(r) => {
                log::trace!("region '{}' is not observed; ignoring visibility", r.key);
                return;
            }
            None => return,
        }
        self.reveal_region(region);
    }

    /// Mark revealed (class emitted once) and start each contained counter once.
    fn reveal_region(&mut self, region: RegionId) {
        let Some(r) = self.regions.get_mut(region.index()) else {
            return;
        };
        if r.reveal() {
            log::debug!("region '{}' revealed", r.key);
            self.outputs.push_change(Change::RegionClass {
                region,
                key: r.key.clone(),
                class: self.cfg.reveal_class.clone(),
            });
            self.outputs.push_event(CoreEvent::RegionRevealed {
                region,
                key: r.key.clone(),
            });
        }
        if !r.has_counters() {
            return;
        }
        let counters = r.counters().to_vec();
        for counter in counters {
            self.animate(counter);
        }
    }
}
