//! Counter entity and its per-frame animation step.

use crate::easing::{ease_out_expo, progress};
use crate::ids::{CounterId, RegionId};

/// Lifecycle of a counter animation. Transitions only move forward:
/// `Idle -> Running -> Completed`.
#[derive(Copy, Clone, Debug, PartialEq)]
pub(crate) enum CounterState {
    Idle,
    /// Armed; `started_at` is the timestamp of the first evaluated frame.
    Running { started_at: Option<f64> },
    Completed,
}

/// Result of evaluating one frame of a counter.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct CounterFrame {
    pub value: u64,
    pub progress: f64,
    /// True on the frame that completed the counter.
    pub done: bool,
}

/// Displayed value for a given progress: `floor(ease_out_expo(p) * target)`.
///
/// Never exceeds `target`; at `p >= 1` it is exactly `target`.
pub fn counter_value(target: u64, p: f64) -> u64 {
    if p >= 1.0 {
        return target;
    }
    let v = (ease_out_expo(p) * target as f64).floor();
    if v <= 0.0 {
        0
    } else {
        (v as u64).min(target)
    }
}

/// A numeric display element animating from 0 to a fixed target.
#[derive(Clone, Debug)]
pub struct Counter {
    pub id: CounterId,
    pub key: String,
    pub region: RegionId,
    target: u64,
    current: u64,
    progress: f64,
    state: CounterState,
}

impl Counter {
    pub fn new(id: CounterId, key: impl Into<String>, region: RegionId, target: u64) -> Self {
        Self {
            id,
            key: key.into(),
            region,
            target,
            current: 0,
            progress: 0.0,
            state: CounterState::Idle,
        }
    }

    pub fn target(&self) -> u64 {
        self.target
    }

    pub fn current(&self) -> u64 {
        self.current
    }

    pub fn is_started(&self) -> bool {
        !matches!(self.state, CounterState::Idle)
    }

    pub fn is_running(&self) -> bool {
        matches!(self.state, CounterState::Running { .. })
    }

    pub fn is_completed(&self) -> bool {
        matches!(self.state, CounterState::Completed)
    }

    /// Arm the animation. Returns false (and changes nothing) when the counter
    /// was already started or has completed.
    pub fn start(&mut self) -> bool {
        if self.is_started() {
            return false;
        }
        self.state = CounterState::Running { started_at: None };
        true
    }

    /// Evaluate one frame at host time `now_ms`.
    ///
    /// Returns None when the counter is not running. The first evaluated frame
    /// pins the start time. A zero target has nothing to animate and completes
    /// on its first frame. A non-finite `now_ms` leaves the counter untouched
    /// and reports its current value without progress, so it stays armed.
    pub fn step(&mut self, now_ms: f64, duration_ms: f64) -> Option<CounterFrame> {
        let pinned = match self.state {
            CounterState::Running { started_at } => started_at,
            CounterState::Idle | CounterState::Completed => return None,
        };

        let p = if self.target == 0 {
            1.0
        } else if !now_ms.is_finite() {
            return Some(CounterFrame {
                value: self.current,
                progress: self.progress,
                done: false,
            });
        } else {
            progress(now_ms - pinned.unwrap_or(now_ms), duration_ms)
        };
        let started_at = pinned.unwrap_or(now_ms);

        self.progress = p;
        let done = p >= 1.0;
        if done {
            self.current = self.target;
            self.state = CounterState::Completed;
        } else {
            self.current = counter_value(self.target, p).max(self.current);
            self.state = CounterState::Running {
                started_at: Some(started_at),
            };
        }

        Some(CounterFrame {
            value: self.current,
            progress: p,
            done,
        })
    }
}
