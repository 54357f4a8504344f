use crate::site::markup::{self, AUDIO_PROMPT_ID, AUDIO_TOGGLE_ID, NAV_ROOT_ID};
use crate::site::NavMenu;
use web_sys as web;

#[inline]
pub fn show_prompt(document: &web::Document) {
    if let Some(el) = document.get_element_by_id(AUDIO_PROMPT_ID) {
        if el.child_element_count() == 0 {
            el.set_inner_html(&markup::render_audio_prompt());
        }
        _ = el.class_list().remove_1("hidden");
        // fallback for environments without CSS class
        _ = el.set_attribute("style", "");
    }
}

#[inline]
pub fn hide_prompt(document: &web::Document) {
    if let Some(el) = document.get_element_by_id(AUDIO_PROMPT_ID) {
        _ = el.class_list().add_1("hidden");
        _ = el.set_attribute("style", "display:none");
    }
}

pub fn prompt_is_hidden(document: &web::Document) -> bool {
    document
        .get_element_by_id(AUDIO_PROMPT_ID)
        .map(|el| el.class_list().contains("hidden"))
        .unwrap_or(true)
}

/// Redraw the menu toggle and, when open, the overlay navigation.
pub fn render_nav(document: &web::Document, menu: &NavMenu) {
    if let Some(el) = document.get_element_by_id(NAV_ROOT_ID) {
        el.set_inner_html(&markup::render_nav(menu));
    }
    if let Some(body) = document.body() {
        _ = body.class_list().toggle_with_force("menu-open", menu.is_open());
    }
}

/// Swap the mute icon, if the current page shows the toggle.
pub fn sync_audio_toggle(document: &web::Document, muted: bool) {
    if let Some(el) = document.get_element_by_id(AUDIO_TOGGLE_ID) {
        el.set_outer_html(&markup::render_audio_toggle(muted));
    }
}
