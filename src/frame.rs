use crate::core::{FrameScheduler, FrameTask, FrameTick, LoopId};
use fnv::FnvHashMap;
use instant::Instant;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

type TickSlot = Rc<RefCell<Option<Closure<dyn FnMut()>>>>;

struct RafLoop {
    alive: Rc<Cell<bool>>,
    pending: Rc<Cell<Option<i32>>>,
    tick: TickSlot,
}

/// `requestAnimationFrame`-driven scheduler. Each loop re-requests its own
/// frame after running, so cancelling one never disturbs the others.
#[derive(Default)]
pub struct RafScheduler {
    next_id: Cell<u64>,
    loops: RefCell<FnvHashMap<LoopId, RafLoop>>,
}

impl RafScheduler {
    pub fn new() -> Self {
        Self::default()
    }
}

fn request_frame(tick: &TickSlot, pending: &Cell<Option<i32>>) {
    let Some(w) = web::window() else {
        return;
    };
    if let Some(cb) = tick.borrow().as_ref() {
        match w.request_animation_frame(cb.as_ref().unchecked_ref()) {
            Ok(handle) => pending.set(Some(handle)),
            Err(e) => log::error!("[frame] requestAnimationFrame failed: {:?}", e),
        }
    }
}

impl FrameScheduler for RafScheduler {
    fn schedule(&self, mut task: FrameTask) -> LoopId {
        let id = LoopId(self.next_id.get());
        self.next_id.set(id.0 + 1);

        let alive = Rc::new(Cell::new(true));
        let pending = Rc::new(Cell::new(None));
        let tick: TickSlot = Rc::new(RefCell::new(None));

        let alive_tick = alive.clone();
        let pending_tick = pending.clone();
        let tick_clone = tick.clone();
        let mut last = Instant::now();
        let mut index = 0u64;
        *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
            pending_tick.set(None);
            if !alive_tick.get() {
                return;
            }
            let now = Instant::now();
            let dt_sec = now.duration_since(last).as_secs_f32();
            last = now;
            task(FrameTick { index, dt_sec });
            index += 1;
            // The task may have unmounted its own canvas
            if alive_tick.get() {
                request_frame(&tick_clone, &pending_tick);
            }
        }) as Box<dyn FnMut()>));
        request_frame(&tick, &pending);

        self.loops.borrow_mut().insert(
            id,
            RafLoop {
                alive,
                pending,
                tick,
            },
        );
        log::debug!("[frame] loop {:?} started", id);
        id
    }

    fn cancel(&self, id: LoopId) -> bool {
        let Some(l) = self.loops.borrow_mut().remove(&id) else {
            return false;
        };
        l.alive.set(false);
        if let (Some(handle), Some(w)) = (l.pending.take(), web::window()) {
            _ = w.cancel_animation_frame(handle);
        }
        // Breaks the closure's reference to itself. Dropped on a later
        // microtask in case the loop is cancelling itself mid-frame.
        if let Some(cb) = l.tick.borrow_mut().take() {
            spawn_local(async move { drop(cb) });
        }
        log::debug!("[frame] loop {:?} cancelled", id);
        true
    }

    fn active_loops(&self) -> usize {
        self.loops.borrow().len()
    }
}
