//! Routes, page content and markup. Pure; rendered into the DOM by `app`.

pub mod contact;
pub mod content;
pub mod markup;
pub mod nav;
pub mod routes;

pub use contact::{ContactForm, FormField, FormPhase};
pub use content::{find_project, Project, PROJECTS};
pub use nav::{menu_links, KeyCommand, MenuLink, NavMenu};
pub use routes::Route;
