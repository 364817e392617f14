//! Render-frame task queue.
//!
//! Tasks are armed for the *next* frame. `take_frame` hands out everything armed
//! before the frame began, in arming order; a task that wants another frame
//! re-arms itself while being evaluated, which places it in the following
//! frame. There is no unconditional recursion: a task that does not re-arm
//! simply stops being scheduled.

use std::collections::VecDeque;

use crate::ids::CounterId;

/// A schedulable task with a dense slot index.
pub trait FrameTask: Copy {
    fn slot(self) -> usize;
}

impl FrameTask for CounterId {
    #[inline]
    fn slot(self) -> usize {
        self.index()
    }
}

#[derive(Debug)]
pub struct FrameScheduler<T> {
    queue: VecDeque<T>,
    // Pending flag per slot.
    armed: Vec<bool>,
    frame: u64,
}

impl<T> Default for FrameScheduler<T> {
    fn default() -> Self {
        Self {
            queue: VecDeque::new(),
            armed: Vec::new(),
            frame: 0,
        }
    }
}

impl<T: FrameTask> FrameScheduler<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Arm `task` for the next frame. A task already waiting is not queued twice.
    pub fn arm(&mut self, task: T) -> bool {
        let slot = task.slot();
        if slot >= self.armed.len() {
            self.armed.resize(slot + 1, false);
        }
        if self.armed[slot] {
            return false;
        }
        self.armed[slot] = true;
        self.queue.push_back(task);
        true
    }

    /// Begin a frame: take the tasks armed so far and advance the frame index.
    pub fn take_frame(&mut self) -> Vec<T> {
        self.frame = self.frame.wrapping_add(1);
        let tasks: Vec<T> = self.queue.drain(..).collect();
        for task in &tasks {
            self.armed[task.slot()] = false;
        }
        tasks
    }

    pub fn is_idle(&self) -> bool {
        self.queue.is_empty()
    }

    pub fn len(&self) -> usize {
        self.queue.len()
    }

    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }

    /// Number of frames handed out so far.
    pub fn frame_index(&self) -> u64 {
        self.frame
    }
}
