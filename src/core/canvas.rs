//! Canvas lifecycle: mount, resize, per-frame redraw, unmount.
//!
//! A [`MountedCanvas`] owns one frame loop and the listener subscriptions it
//! needs. Dropping or unmounting it cancels the loop and drops every
//! subscription, so nothing keeps drawing after the page goes away.

use super::color::Rgba;
use super::config::BackgroundConfig;
use super::constants::TRAIL_ALPHA;
use super::layer::{Simulation, StepContext};
use super::orbs::OrbField;
use super::particles::ParticleField;
use super::scheduler::{FrameScheduler, FrameTick, LoopId};
use super::shapes::MenuShapeField;
use super::stars::Starfield;
use super::surface::{Surface, Viewport};
use crate::input::PointerTracker;
use rand::rngs::StdRng;
use rand::SeedableRng;
use smallvec::SmallVec;
use std::cell::RefCell;
use std::rc::Rc;

/// How the surface is prepared before layers draw.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Backdrop {
    /// Low-alpha fill that leaves fading trails.
    Trail(Rgba),
    Clear,
}

/// What a canvas shows.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Scene {
    /// Ambient drifting orbs (plus stars for starfield themes).
    Background(BackgroundConfig),
    /// Cursor-reactive particles with connecting lines.
    ParticleField(BackgroundConfig),
    /// Shapes behind the open overlay menu.
    MenuShapes,
}

impl Scene {
    pub fn layers(&self) -> Vec<Box<dyn Simulation>> {
        match *self {
            Scene::Background(cfg) => {
                let mut layers: Vec<Box<dyn Simulation>> = Vec::with_capacity(2);
                if cfg.variant.theme().starfield {
                    layers.push(Box::new(Starfield::new(cfg.intensity.settings().star_count)));
                }
                layers.push(Box::new(OrbField::new(cfg)));
                layers
            }
            Scene::ParticleField(cfg) => vec![Box::new(ParticleField::new(cfg))],
            Scene::MenuShapes => vec![Box::new(MenuShapeField::new())],
        }
    }

    pub fn backdrop(&self) -> Backdrop {
        match self {
            Scene::Background(cfg) | Scene::ParticleField(cfg) => {
                Backdrop::Trail(cfg.variant.theme().darkest().with_alpha(TRAIL_ALPHA))
            }
            Scene::MenuShapes => Backdrop::Clear,
        }
    }

    /// Whether the scene reacts to the pointer.
    pub fn tracks_pointer(&self) -> bool {
        matches!(self, Scene::ParticleField(_) | Scene::MenuShapes)
    }
}

/// Seed for the `mount_index`-th canvas of a session. Distinct mounts get
/// well-separated streams even from a small base seed.
#[inline]
pub fn mount_seed(base: u64, mount_index: u64) -> u64 {
    base ^ mount_index.wrapping_add(1).wrapping_mul(0x9E37_79B9_7F4A_7C15)
}

/// Everything one canvas's frame loop mutates.
pub struct CanvasState<D: Surface> {
    surface: D,
    viewport: Viewport,
    layers: Vec<Box<dyn Simulation>>,
    backdrop: Backdrop,
    pointer: Option<PointerTracker>,
    rng: StdRng,
    frames: u64,
}

impl<D: Surface> CanvasState<D> {
    fn new(surface: D, scene: Scene, pointer: Option<PointerTracker>, seed: u64) -> Self {
        Self {
            surface,
            viewport: Viewport::default(),
            layers: scene.layers(),
            backdrop: scene.backdrop(),
            pointer,
            rng: StdRng::seed_from_u64(seed),
            frames: 0,
        }
    }

    /// Size the surface to `viewport`. Layers are populated on the first
    /// non-empty size; until then frames only paint the backdrop.
    pub fn resize(&mut self, viewport: Viewport) {
        self.viewport = viewport;
        self.surface.resize(viewport);
        if viewport.is_empty() {
            return;
        }
        for layer in &mut self.layers {
            if !layer.is_populated() {
                layer.populate(viewport, &mut self.rng);
            }
        }
    }

    pub fn frame(&mut self, tick: FrameTick) {
        let vp = self.viewport;
        match self.backdrop {
            Backdrop::Trail(color) => self.surface.fill_rect(0.0, 0.0, vp.width, vp.height, color),
            Backdrop::Clear => self.surface.clear(),
        }
        let ctx = StepContext {
            viewport: vp,
            pointer: self.pointer.as_ref().map(|p| p.sample()).unwrap_or_default(),
            dt_sec: tick.dt_sec,
        };
        for layer in &mut self.layers {
            layer.step(&ctx, &mut self.rng);
            layer.draw(&mut self.surface);
        }
        self.frames += 1;
    }

    #[inline]
    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    #[inline]
    pub fn frames(&self) -> u64 {
        self.frames
    }

    pub fn body_count(&self) -> usize {
        self.layers.iter().map(|l| l.body_count()).sum()
    }

    pub fn surface(&self) -> &D {
        &self.surface
    }
}

/// Shared handle to a mounted canvas's state, used by resize listeners.
pub type CanvasHandle<D> = Rc<RefCell<CanvasState<D>>>;

/// Deregisters something (an event listener, usually) when dropped.
#[must_use = "dropping a Subscription deregisters it immediately"]
pub struct Subscription {
    cancel: Option<Box<dyn FnOnce()>>,
}

impl Subscription {
    pub fn new(cancel: impl FnOnce() + 'static) -> Self {
        Self {
            cancel: Some(Box::new(cancel)),
        }
    }

    /// A subscription with nothing to deregister.
    pub fn noop() -> Self {
        Self { cancel: None }
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(cancel) = self.cancel.take() {
            cancel();
        }
    }
}

pub struct MountedCanvas<S: FrameScheduler> {
    scheduler: S,
    loop_id: Option<LoopId>,
    subscriptions: SmallVec<[Subscription; 4]>,
}

impl<S: FrameScheduler> MountedCanvas<S> {
    /// Build the scene on `surface`, size it to `viewport` and start its
    /// frame loop on `scheduler`.
    pub fn mount<D: Surface + 'static>(
        scheduler: S,
        surface: D,
        scene: Scene,
        viewport: Viewport,
        pointer: Option<PointerTracker>,
        seed: u64,
    ) -> (Self, CanvasHandle<D>) {
        let state = Rc::new(RefCell::new(CanvasState::new(surface, scene, pointer, seed)));
        state.borrow_mut().resize(viewport);
        let state_tick = state.clone();
        let loop_id = scheduler.schedule(Box::new(move |tick| {
            state_tick.borrow_mut().frame(tick);
        }));
        log::info!("[canvas] mounted {:?} as loop {:?}", scene, loop_id);
        (
            Self {
                scheduler,
                loop_id: Some(loop_id),
                subscriptions: SmallVec::new(),
            },
            state,
        )
    }

    /// Keep `sub` alive for as long as the canvas is mounted.
    pub fn attach(&mut self, sub: Subscription) {
        self.subscriptions.push(sub);
    }

    #[inline]
    pub fn is_mounted(&self) -> bool {
        self.loop_id.is_some()
    }

    /// Cancel the frame loop and drop every subscription. Idempotent.
    pub fn unmount(&mut self) {
        if let Some(id) = self.loop_id.take() {
            self.scheduler.cancel(id);
            log::info!("[canvas] unmounted loop {:?}", id);
        }
        self.subscriptions.clear();
    }
}

impl<S: FrameScheduler> Drop for MountedCanvas<S> {
    fn drop(&mut self) {
        self.unmount();
    }
}
