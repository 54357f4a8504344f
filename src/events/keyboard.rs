use crate::app::App;
use crate::site::KeyCommand;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Typing into a form field must not trigger shortcuts.
fn is_editable_target(ev: &web::KeyboardEvent) -> bool {
    ev.target()
        .and_then(|t| t.dyn_into::<web::Element>().ok())
        .map(|el| matches!(el.tag_name().as_str(), "INPUT" | "TEXTAREA" | "SELECT"))
        .unwrap_or(false)
}

pub fn wire_global_keydown(document: &web::Document, app: &Rc<App>) {
    let app = Rc::downgrade(app);
    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::KeyboardEvent| {
        if ev.repeat() || ev.ctrl_key() || ev.meta_key() || ev.alt_key() || is_editable_target(&ev)
        {
            return;
        }
        let Some(app) = app.upgrade() else {
            return;
        };
        match KeyCommand::from_key(&ev.key()) {
            Some(KeyCommand::ToggleMute) => {
                log::info!("[keys] toggle mute");
                app.toggle_mute();
            }
            Some(KeyCommand::CloseMenu) => {
                if app.menu_is_open() {
                    log::info!("[keys] close menu");
                    app.close_menu();
                }
            }
            None => {}
        }
    }) as Box<dyn FnMut(_)>);
    _ = document.add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
    closure.forget();
}
