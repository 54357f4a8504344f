use super::content::PROJECTS;
use super::routes::Route;
use crate::core::{SoundEffect, SoundSink};

/// One entry of the overlay menu; `children` are shown as a submenu.
#[derive(Clone, Debug, PartialEq)]
pub struct MenuLink {
    pub label: &'static str,
    pub route: Route,
    pub children: Vec<MenuLink>,
}

pub fn menu_links() -> Vec<MenuLink> {
    let leaf = |label, route| MenuLink {
        label,
        route,
        children: Vec::new(),
    };
    vec![
        leaf("Home", Route::Home),
        leaf("About", Route::About),
        MenuLink {
            label: "Portfolio",
            route: Route::Portfolio,
            children: PROJECTS
                .iter()
                .map(|p| leaf(p.title, Route::Project(p.id.to_string())))
                .collect(),
        },
        leaf("Services", Route::Services),
        leaf("Contact", Route::Contact),
    ]
}

/// Open/closed state of the overlay navigation menu.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct NavMenu {
    open: bool,
}

impl NavMenu {
    #[inline]
    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Toggle the menu. Returns the new open state.
    pub fn toggle(&mut self, sounds: &impl SoundSink) -> bool {
        self.open = !self.open;
        sounds.play_sound(if self.open {
            SoundEffect::Activate
        } else {
            SoundEffect::Click
        });
        self.open
    }

    /// Close without feedback (route change, Escape).
    pub fn close(&mut self) -> bool {
        std::mem::replace(&mut self.open, false)
    }

    /// A menu link was followed: close and give navigation feedback.
    pub fn follow(&mut self, sounds: &impl SoundSink) {
        self.open = false;
        sounds.play_sound(SoundEffect::Navigate);
    }
}

/// Global keyboard shortcuts.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum KeyCommand {
    ToggleMute,
    CloseMenu,
}

impl KeyCommand {
    /// Map a `KeyboardEvent.key` value.
    pub fn from_key(key: &str) -> Option<KeyCommand> {
        match key {
            "m" | "M" => Some(KeyCommand::ToggleMute),
            "Escape" => Some(KeyCommand::CloseMenu),
            _ => None,
        }
    }
}
