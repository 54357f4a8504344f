//! Repeating per-frame tasks bound to the display refresh signal.
//!
//! Every mounted canvas registers exactly one loop. Loops are cancelled
//! explicitly through their [`LoopId`]; the browser implementation lives in
//! `frame.rs`, while [`ManualScheduler`] steps loops synchronously.

use fnv::FnvHashMap;
use smallvec::SmallVec;
use std::cell::RefCell;
use std::rc::Rc;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct LoopId(pub u64);

/// Timing information handed to a loop on each frame.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct FrameTick {
    /// Frames this loop has received, starting at 0.
    pub index: u64,
    /// Seconds since the previous frame of this loop.
    pub dt_sec: f32,
}

pub type FrameTask = Box<dyn FnMut(FrameTick)>;

pub trait FrameScheduler {
    /// Register `task` to run once per frame until cancelled.
    fn schedule(&self, task: FrameTask) -> LoopId;
    /// Stop a loop. Returns `false` when it was not registered.
    fn cancel(&self, id: LoopId) -> bool;
    fn active_loops(&self) -> usize;
}

impl<S: FrameScheduler + ?Sized> FrameScheduler for Rc<S> {
    fn schedule(&self, task: FrameTask) -> LoopId {
        (**self).schedule(task)
    }
    fn cancel(&self, id: LoopId) -> bool {
        (**self).cancel(id)
    }
    fn active_loops(&self) -> usize {
        (**self).active_loops()
    }
}

struct ManualSlot {
    // `None` while the task is running
    task: Option<FrameTask>,
    frames: u64,
}

#[derive(Default)]
struct ManualInner {
    next_id: u64,
    slots: FnvHashMap<LoopId, ManualSlot>,
}

/// Scheduler whose frames advance only when [`ManualScheduler::step`] is
/// called.
#[derive(Clone, Default)]
pub struct ManualScheduler {
    inner: Rc<RefCell<ManualInner>>,
}

impl ManualScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Run every active loop once, in registration order. Returns how many
    /// loops ran. Loops may cancel themselves or others while running.
    pub fn step(&self, dt_sec: f32) -> usize {
        let mut ids: SmallVec<[LoopId; 8]> = self.inner.borrow().slots.keys().copied().collect();
        ids.sort_unstable();
        let mut ran = 0;
        for id in ids {
            let taken = {
                let mut inner = self.inner.borrow_mut();
                inner
                    .slots
                    .get_mut(&id)
                    .and_then(|slot| slot.task.take().map(|t| (t, slot.frames)))
            };
            let Some((mut task, index)) = taken else {
                continue;
            };
            task(FrameTick { index, dt_sec });
            ran += 1;
            let mut inner = self.inner.borrow_mut();
            if let Some(slot) = inner.slots.get_mut(&id) {
                slot.task = Some(task);
                slot.frames += 1;
            }
        }
        ran
    }

    pub fn run_frames(&self, frames: usize, dt_sec: f32) {
        for _ in 0..frames {
            self.step(dt_sec);
        }
    }
}

impl FrameScheduler for ManualScheduler {
    fn schedule(&self, task: FrameTask) -> LoopId {
        let mut inner = self.inner.borrow_mut();
        let id = LoopId(inner.next_id);
        inner.next_id += 1;
        inner.slots.insert(
            id,
            ManualSlot {
                task: Some(task),
                frames: 0,
            },
        );
        id
    }

    fn cancel(&self, id: LoopId) -> bool {
        self.inner.borrow_mut().slots.remove(&id).is_some()
    }

    fn active_loops(&self) -> usize {
        self.inner.borrow().slots.len()
    }
}
