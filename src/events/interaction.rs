//! Session-wide listeners. These are installed once and never removed.

use crate::app::App;
use crate::constants::UNLOCK_EVENTS;
use crate::core::SoundEffect;
use crate::dom;
use crate::overlay;
use crate::site::markup::{AUDIO_PROMPT_BUTTON_ID, AUDIO_TOGGLE_ID, NAV_TOGGLE_ID};
use crate::site::Route;
use std::rc::{Rc, Weak};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

fn add_forever(target: &web::EventTarget, event: &str, handler: impl FnMut(web::Event) + 'static) {
    let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(web::Event)>);
    if let Err(e) = target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())
    {
        log::warn!("[events] could not listen for {}: {:?}", event, e);
    }
    closure.forget();
}

/// First qualifying gesture unlocks audio. Clicks and touches also dismiss
/// the start-up prompt.
pub fn wire_audio_unlock(window: &web::Window, app: &Rc<App>) {
    for event in UNLOCK_EVENTS {
        let app = Rc::downgrade(app);
        add_forever(window, event, move |_| {
            let Some(app) = app.upgrade() else {
                return;
            };
            app.audio.notify_interaction();
            if matches!(event, "click" | "touchstart") && !overlay::prompt_is_hidden(app.document()) {
                overlay::hide_prompt(app.document());
            }
        });
    }
}

fn on_click(app: &App, ev: &web::Event) {
    if dom::event_closest(ev, &format!("#{}", AUDIO_PROMPT_BUTTON_ID)).is_some() {
        app.audio.enable();
        overlay::hide_prompt(app.document());
        return;
    }
    if dom::event_closest(ev, &format!("#{}", NAV_TOGGLE_ID)).is_some() {
        app.toggle_menu();
        return;
    }
    if dom::event_closest(ev, &format!("#{}", AUDIO_TOGGLE_ID)).is_some() {
        app.toggle_mute();
        app.audio.play_sound(SoundEffect::Click);
        return;
    }
    let Some(el) = dom::event_closest(ev, "[data-route], [data-sound-click]") else {
        return;
    };
    let Some(path) = el.get_attribute("data-route") else {
        if let Some(name) = el.get_attribute("data-sound-click") {
            app.audio.play_sound_named(&name);
        }
        return;
    };
    // Let the browser handle "open in new tab"
    let modified = ev
        .dyn_ref::<web::MouseEvent>()
        .map(|m| m.ctrl_key() || m.meta_key() || m.shift_key() || m.button() != 0)
        .unwrap_or(false);
    if modified {
        return;
    }
    ev.prevent_default();
    if app.menu_is_open() && el.closest(".nav-main").ok().flatten().is_some() {
        app.follow_menu_link();
    } else if let Some(name) = el.get_attribute("data-sound-click") {
        app.audio.play_sound_named(&name);
    }
    log::info!("[router] link to {}", path);
    app.navigate(Route::parse(&path), true);
}

fn on_mouseover(app: &App, ev: &web::Event) {
    let Some(el) = dom::event_closest(ev, "[data-sound-hover]") else {
        return;
    };
    // Moving between children of the same element is not a new hover
    let from_inside = ev
        .dyn_ref::<web::MouseEvent>()
        .and_then(|m| m.related_target())
        .and_then(|t| t.dyn_into::<web::Node>().ok())
        .map(|n| el.contains(Some(&n)))
        .unwrap_or(false);
    if from_inside {
        return;
    }
    if let Some(name) = el.get_attribute("data-sound-hover") {
        app.audio.play_sound_named(&name);
    }
}

/// Delegated hover/click feedback, internal links and the fixed controls.
pub fn wire_delegated(document: &web::Document, app: &Rc<App>) {
    let click_app: Weak<App> = Rc::downgrade(app);
    add_forever(document, "click", move |ev| {
        if let Some(app) = click_app.upgrade() {
            on_click(&app, &ev);
        }
    });
    let hover_app: Weak<App> = Rc::downgrade(app);
    add_forever(document, "mouseover", move |ev| {
        if let Some(app) = hover_app.upgrade() {
            on_mouseover(&app, &ev);
        }
    });
}

/// Back/forward buttons re-render without pushing history.
pub fn wire_popstate(window: &web::Window, app: &Rc<App>) {
    let app = Rc::downgrade(app);
    add_forever(window, "popstate", move |_| {
        let Some(app) = app.upgrade() else {
            return;
        };
        let path = web::window()
            .and_then(|w| w.location().pathname().ok())
            .unwrap_or_else(|| "/".into());
        let route = Route::parse(&path);
        if app.current_route().as_ref() != Some(&route) {
            app.navigate(route, false);
        }
    });
}
