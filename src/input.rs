use glam::Vec2;
use std::cell::Cell;
use std::rc::Rc;

/// Live pointer position in canvas pixels, written by event listeners.
#[derive(Default, Clone, Copy, Debug)]
pub struct PointerState {
    pub position: Option<Vec2>,
}

/// Pointer input as seen by one frame: read once, shared by every body.
#[derive(Default, Clone, Copy, Debug, PartialEq)]
pub struct PointerSample {
    pub position: Option<Vec2>,
    /// Distance travelled since the previous frame's sample, in px/frame.
    pub speed: f32,
}

/// Shared handle between pointer listeners (writers) and a canvas frame loop
/// (reader).
#[derive(Default, Clone, Debug)]
pub struct PointerTracker {
    state: Rc<Cell<PointerState>>,
    last_sampled: Rc<Cell<Option<Vec2>>>,
}

impl PointerTracker {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn move_to(&self, x: f32, y: f32) {
        let mut s = self.state.get();
        s.position = Some(Vec2::new(x, y));
        self.state.set(s);
    }

    /// Forget the position (pointer left the window).
    pub fn leave(&self) {
        self.state.set(PointerState::default());
        self.last_sampled.set(None);
    }

    #[inline]
    pub fn state(&self) -> PointerState {
        self.state.get()
    }

    /// Take this frame's sample. Speed is measured against the previous call.
    pub fn sample(&self) -> PointerSample {
        let position = self.state.get().position;
        let speed = match (position, self.last_sampled.get()) {
            (Some(now), Some(prev)) => now.distance(prev),
            _ => 0.0,
        };
        self.last_sampled.set(position);
        PointerSample { position, speed }
    }
}

// ---------------- Pointer helpers ----------------
#[cfg(target_arch = "wasm32")]
#[inline]
pub fn pointer_canvas_px(
    ev: &web_sys::MouseEvent,
    canvas: &web_sys::HtmlCanvasElement,
) -> Option<Vec2> {
    let rect = canvas.get_bounding_client_rect();
    let w = rect.width() as f32;
    let h = rect.height() as f32;
    if w <= 0.0 || h <= 0.0 {
        return None;
    }
    let x_css = ev.client_x() as f32 - rect.left() as f32;
    let y_css = ev.client_y() as f32 - rect.top() as f32;
    let sx = (x_css / w) * canvas.width() as f32;
    let sy = (y_css / h) * canvas.height() as f32;
    Some(Vec2::new(sx, sy))
}
