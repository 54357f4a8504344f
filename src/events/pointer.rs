use crate::core::Subscription;
use crate::dom;
use crate::input::{self, PointerTracker};
use smallvec::SmallVec;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Feed window pointer events into `tracker`, in `canvas` pixel space.
/// Listeners live as long as the returned subscriptions.
pub fn track(
    window: &web::Window,
    canvas: &web::HtmlCanvasElement,
    tracker: PointerTracker,
) -> SmallVec<[Subscription; 2]> {
    let mut subs = SmallVec::new();

    let canvas_move = canvas.clone();
    let tracker_move = tracker.clone();
    subs.push(dom::listen(window, "pointermove", move |ev| {
        let Some(ev) = ev.dyn_ref::<web::MouseEvent>() else {
            return;
        };
        if let Some(p) = input::pointer_canvas_px(ev, &canvas_move) {
            tracker_move.move_to(p.x, p.y);
        }
    }));

    // Pointer left the page entirely
    subs.push(dom::listen(window, "mouseout", move |ev| {
        let left_page = ev
            .dyn_ref::<web::MouseEvent>()
            .map(|m| m.related_target().is_none())
            .unwrap_or(false);
        if left_page {
            tracker.leave();
        }
    }));
    subs
}
