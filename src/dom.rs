use crate::core::{Subscription, Viewport};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
pub fn element_by_id<T: JsCast>(document: &web::Document, id: &str) -> Option<T> {
    document
        .get_element_by_id(id)
        .and_then(|el| el.dyn_into::<T>().ok())
}

/// Add a listener that lives as long as the returned [`Subscription`].
pub fn listen(
    target: &web::EventTarget,
    event: &'static str,
    handler: impl FnMut(web::Event) + 'static,
) -> Subscription {
    let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(web::Event)>);
    if let Err(e) = target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())
    {
        log::warn!("[dom] could not listen for {}: {:?}", event, e);
        return Subscription::noop();
    }
    let target = target.clone();
    Subscription::new(move || {
        _ = target.remove_event_listener_with_callback(event, closure.as_ref().unchecked_ref());
        drop(closure);
    })
}

/// Run `f` once after `ms` milliseconds.
pub fn set_timeout(ms: i32, f: impl FnOnce() + 'static) {
    let Some(window) = web::window() else {
        return;
    };
    let cb = Closure::once_into_js(f);
    if let Err(e) =
        window.set_timeout_with_callback_and_timeout_and_arguments_0(cb.unchecked_ref(), ms)
    {
        log::warn!("[dom] setTimeout failed: {:?}", e);
    }
}

/// Backing-store size for `canvas`, one canvas pixel per CSS pixel.
pub fn canvas_viewport(canvas: &web::HtmlCanvasElement) -> Viewport {
    let Some(w) = web::window() else {
        return Viewport::default();
    };
    let rect = canvas.get_bounding_client_rect();
    let inner = |v: Result<wasm_bindgen::JsValue, wasm_bindgen::JsValue>| {
        v.ok().and_then(|v| v.as_f64()).unwrap_or(0.0)
    };
    Viewport::from_layout(
        (rect.width(), rect.height()),
        (inner(w.inner_width()), inner(w.inner_height())),
    )
}

/// Closest ancestor-or-self of the event target matching `selector`.
pub fn event_closest(event: &web::Event, selector: &str) -> Option<web::Element> {
    event
        .target()
        .and_then(|t| t.dyn_into::<web::Element>().ok())
        .and_then(|el| el.closest(selector).ok().flatten())
}
