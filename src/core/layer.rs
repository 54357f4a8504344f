use super::surface::{Surface, Viewport};
use crate::input::PointerSample;
use glam::Vec2;
use rand::rngs::StdRng;

/// Inputs shared by every body in one frame.
#[derive(Clone, Copy, Debug, Default)]
pub struct StepContext {
    pub viewport: Viewport,
    pub pointer: PointerSample,
    pub dt_sec: f32,
}

/// One population of simulated bodies drawn onto a canvas.
///
/// Bodies are created in one batch by `populate` and mutated by `step`; there
/// is no per-body removal.
pub trait Simulation {
    fn populate(&mut self, viewport: Viewport, rng: &mut StdRng);
    fn is_populated(&self) -> bool;
    fn step(&mut self, ctx: &StepContext, rng: &mut StdRng);
    fn draw(&self, surface: &mut dyn Surface);
    fn body_count(&self) -> usize;
}

/// Toroidal wrap: a body fully past one edge re-enters from the opposite one,
/// offset by its half-size. Keeps `pos` inside `[-half, dim + half]`.
#[inline]
pub fn wrap_toroidal(pos: &mut Vec2, half: f32, viewport: Viewport) {
    if pos.x < -half {
        pos.x = viewport.width + half;
    } else if pos.x > viewport.width + half {
        pos.x = -half;
    }
    if pos.y < -half {
        pos.y = viewport.height + half;
    } else if pos.y > viewport.height + half {
        pos.y = -half;
    }
}

/// Uniform sample in `[min, min + span)`.
#[inline]
pub(crate) fn span(rng: &mut StdRng, min: f32, span: f32) -> f32 {
    use rand::Rng;
    min + rng.gen::<f32>() * span
}

/// Uniform sample in `[-span/2, span/2)`.
#[inline]
pub(crate) fn centered(rng: &mut StdRng, span: f32) -> f32 {
    use rand::Rng;
    rng.gen::<f32>() * span - span / 2.0
}
