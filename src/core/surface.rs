use super::color::{Rgb, Rgba};
use glam::Vec2;

/// Pixel dimensions of a drawing surface.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Canvas size in CSS pixels: the element's laid-out box, or `fallback`
    /// (the window's inner size) while the element has no layout yet.
    /// Simulation distances and sizes are all expressed in this space.
    pub fn from_layout(layout: (f64, f64), fallback: (f64, f64)) -> Self {
        let (w, h) = if layout.0 > 0.0 && layout.1 > 0.0 {
            layout
        } else {
            fallback
        };
        Self::new(w.max(0.0).floor() as f32, h.max(0.0).floor() as f32)
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        !(self.width > 0.0 && self.height > 0.0)
    }
}

/// Minimal 2D drawing API the simulation layers render through.
///
/// The browser build implements this over `CanvasRenderingContext2d`; tests
/// record the calls instead.
pub trait Surface {
    /// Resize the backing store.
    fn resize(&mut self, viewport: Viewport);

    /// Hard clear to transparent.
    fn clear(&mut self);

    fn fill_rect(&mut self, x: f32, y: f32, width: f32, height: f32, color: Rgba);

    /// Disc of `radius` with `color` at `alpha` in the center fading to fully
    /// transparent at the rim.
    fn radial_glow(&mut self, center: Vec2, radius: f32, color: Rgb, alpha: f32);

    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Rgba);

    fn fill_polygon(&mut self, points: &[Vec2], color: Rgba);

    fn stroke_line(&mut self, from: Vec2, to: Vec2, width: f32, color: Rgba);
}
