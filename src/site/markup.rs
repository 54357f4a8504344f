//! HTML for pages, the overlay menu and the audio controls.
//!
//! Interactive elements declare their feedback with `data-sound-hover` and
//! `data-sound-click` attributes and internal links carry `data-route`; the
//! browser layer dispatches both through delegated listeners.

use super::contact::{FormField, FormPhase};
use super::content::{
    find_project, Project, CONTACT_DETAILS, OWNER_BIO, OWNER_INTRO, OWNER_NAME, PROJECTS,
    SERVICES,
};
use super::nav::{menu_links, MenuLink, NavMenu};
use super::routes::Route;
use crate::core::BackgroundConfig;
use std::fmt::Write;

pub const APP_ROOT_ID: &str = "app-root";
pub const NAV_ROOT_ID: &str = "nav-root";
pub const AUDIO_PROMPT_ID: &str = "audio-prompt";
pub const AUDIO_PROMPT_BUTTON_ID: &str = "audio-prompt-enable";
pub const AUDIO_TOGGLE_ID: &str = "audio-toggle";
pub const NAV_TOGGLE_ID: &str = "nav-toggle";
pub const BG_CANVAS_ID: &str = "bg-canvas";
pub const PARTICLE_CANVAS_ID: &str = "particle-canvas";
pub const MENU_CANVAS_ID: &str = "menu-canvas";
pub const CONTACT_FORM_ID: &str = "contact-form";
pub const CONTACT_SUBMIT_ID: &str = "contact-submit";
pub const CONTACT_STATUS_ID: &str = "contact-status";

pub fn escape_html(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            c => out.push(c),
        }
    }
    out
}

/// Internal link with hover/click feedback.
fn route_link(route: &Route, class: &str, label: &str) -> String {
    format!(
        r#"<a class="{}" href="{}" data-route="{}" data-sound-hover="hover" data-sound-click="navigate">{}</a>"#,
        class,
        route.path(),
        route.path(),
        escape_html(label)
    )
}

/// Trail fills are the theme's darkest color; screen blending keeps them from
/// covering the gradient underneath.
pub const BACKDROP_CANVAS_STYLE: &str = "mix-blend-mode: screen";

fn backdrop(config: BackgroundConfig, particles: bool) -> String {
    let theme = config.variant.theme();
    let mut html = format!(
        r#"<div class="bg-gradient" style="background: {}"></div><canvas id="{}" class="bg-canvas" style="{}" data-variant="{}" data-intensity="{}"></canvas>"#,
        theme.css_gradient(),
        BG_CANVAS_ID,
        BACKDROP_CANVAS_STYLE,
        theme.name,
        config.intensity.name()
    );
    if particles {
        _ = write!(
            html,
            r#"<canvas id="{}" class="particle-canvas" style="{}"></canvas>"#,
            PARTICLE_CANVAS_ID, BACKDROP_CANVAS_STYLE
        );
    }
    html.push_str(r#"<div class="bg-noise"></div>"#);
    html
}

/// Full markup for `route`, including its background layers.
pub fn render_page(route: &Route) -> String {
    let body = match route {
        Route::Home => home(),
        Route::About => about(),
        Route::Services => services(),
        Route::Portfolio => portfolio(),
        Route::Project(id) => match find_project(id) {
            Some(project) => project_detail(project),
            None => project_not_found(),
        },
        Route::Contact => contact(),
        Route::NotFound => not_found(),
    };
    let toggle = if route.has_audio_toggle() {
        audio_toggle(false)
    } else {
        String::new()
    };
    format!(
        r#"{}{}<main class="page-content page-{}">{}</main>"#,
        backdrop(route.background(), route.has_particle_field()),
        toggle,
        route.title().to_ascii_lowercase().replace(' ', "-"),
        body
    )
}

fn home() -> String {
    format!(
        r#"<section class="hero"><p class="hero-kicker">Portfolio</p><h1 class="hero-name">{}</h1>{}</section>"#,
        escape_html(OWNER_NAME),
        route_link(&Route::About, "button explore", "Explore")
    )
}

fn about() -> String {
    let mut html = String::from(r#"<section class="about"><h1>About Me</h1>"#);
    _ = write!(html, r#"<p class="lead">{}</p>"#, escape_html(OWNER_INTRO));
    for para in OWNER_BIO {
        _ = write!(html, "<p>{}</p>", escape_html(para));
    }
    html.push_str(&route_link(&Route::Home, "button back", "Back Home"));
    html.push_str("</section>");
    html
}

fn services() -> String {
    let mut html = String::from(
        r#"<section class="services"><h1>Services</h1><p class="lead">Comprehensive digital solutions tailored to your specific needs. From concept to execution, I deliver high-quality results that drive success.</p><div class="service-grid">"#,
    );
    for service in SERVICES {
        _ = write!(
            html,
            r#"<article class="service-card" data-sound-hover="hover"><h3>{}</h3><p>{}</p><ul>"#,
            escape_html(service.title),
            escape_html(service.description)
        );
        for feature in service.features {
            _ = write!(html, "<li>{}</li>", escape_html(feature));
        }
        html.push_str("</ul></article>");
    }
    html.push_str(
        r#"</div><div class="cta"><h2>Ready to start your project?</h2><p>Let's discuss how I can help bring your ideas to life with tailored solutions that meet your specific needs.</p>"#,
    );
    html.push_str(&route_link(&Route::Contact, "button", "Get in Touch"));
    html.push_str("</div></section>");
    html
}

fn portfolio() -> String {
    let mut html = String::from(r#"<section class="portfolio"><h1>My Work</h1><div class="portfolio-grid">"#);
    for project in PROJECTS {
        let route = Route::Project(project.id.to_string());
        _ = write!(
            html,
            r#"<a class="portfolio-item" href="{path}" data-route="{path}" data-sound-hover="hover" data-sound-click="navigate"><div class="thumb"></div><div class="card-body"><span class="category">{}</span><h3>{}</h3><p>{}</p></div><span class="view">View Project</span></a>"#,
            escape_html(project.category),
            escape_html(project.title),
            escape_html(project.summary),
            path = route.path()
        );
    }
    html.push_str("</div></section>");
    html
}

fn project_detail(project: &Project) -> String {
    let mut html = String::from(r#"<section class="project-detail">"#);
    html.push_str(&route_link(&Route::Portfolio, "back-link", "← Back to Portfolio"));
    _ = write!(
        html,
        r#"<span class="subtitle">{}</span><h1>{}</h1><p class="lead">{}</p><h3>The Challenge</h3><p>{}</p><h3>The Solution</h3><p>{}</p><h3>Technologies Used</h3><div class="tech">"#,
        escape_html(project.subtitle),
        escape_html(project.title),
        escape_html(project.description),
        escape_html(project.challenge),
        escape_html(project.solution)
    );
    for tech in project.technologies {
        _ = write!(html, r#"<span class="chip">{}</span>"#, escape_html(tech));
    }
    html.push_str(
        r##"</div><div class="project-links"><a class="button" href="#" data-sound-hover="hover" data-sound-click="click">Live Demo</a><a class="button" href="#" data-sound-hover="hover" data-sound-click="click">Source Code</a></div><h2>Project Gallery</h2><div class="gallery">"##,
    );
    for i in 0..project.gallery_size {
        _ = write!(
            html,
            r#"<div class="gallery-item" data-sound-hover="hover" aria-label="{} gallery image {}"></div>"#,
            escape_html(project.title),
            i + 1
        );
    }
    html.push_str("</div></section>");
    html
}

fn project_not_found() -> String {
    format!(
        r#"<section class="not-found"><div>Project not found</div>{}</section>"#,
        route_link(&Route::Portfolio, "back-link", "← Back to Portfolio")
    )
}

fn not_found() -> String {
    format!(
        r#"<section class="not-found"><h1>Page not found</h1>{}</section>"#,
        route_link(&Route::Home, "button", "Back Home")
    )
}

fn contact() -> String {
    let mut html = String::from(
        r#"<section class="contact"><h1>Get in Touch</h1><div class="contact-grid"><div class="contact-info"><p>Have a project in mind or just want to say hello? Fill out the form and I'll get back to you as soon as possible.</p>"#,
    );
    for (label, value) in CONTACT_DETAILS {
        _ = write!(
            html,
            r#"<div class="contact-row"><h3>{}</h3><p>{}</p></div>"#,
            escape_html(label),
            escape_html(value)
        );
    }
    _ = write!(html, r#"</div><form id="{}" class="contact-form">"#, CONTACT_FORM_ID);
    for field in FormField::ALL {
        let name = field.name();
        let label = match field {
            FormField::Name => "Name",
            FormField::Email => "Email",
            FormField::Subject => "Subject",
            FormField::Message => "Message",
        };
        let input = match field {
            FormField::Message => format!(r#"<textarea id="{0}" name="{0}" rows="4" required></textarea>"#, name),
            FormField::Email => format!(r#"<input type="email" id="{0}" name="{0}" required>"#, name),
            _ => format!(r#"<input type="text" id="{0}" name="{0}" required>"#, name),
        };
        _ = write!(html, r#"<label for="{}">{}</label>{}"#, name, label, input);
    }
    _ = write!(
        html,
        r#"<button type="submit" id="{}" data-sound-hover="hover" data-sound-click="click">{}</button><p id="{}" class="contact-status"></p></form></div></section>"#,
        CONTACT_SUBMIT_ID,
        submit_label(FormPhase::Editing),
        CONTACT_STATUS_ID
    );
    html
}

pub fn submit_label(phase: FormPhase) -> &'static str {
    match phase {
        FormPhase::Submitting { .. } => "Sending...",
        FormPhase::Editing | FormPhase::Submitted { .. } => "Send Message",
    }
}

pub fn status_message(phase: FormPhase) -> &'static str {
    match phase {
        FormPhase::Submitted { .. } => "Message sent successfully!",
        FormPhase::Editing | FormPhase::Submitting { .. } => "",
    }
}

fn menu_items(html: &mut String, links: &[MenuLink], item_class: &str) {
    for link in links {
        _ = write!(html, r#"<li class="{}">"#, item_class);
        html.push_str(&route_link(&link.route, "menu__link", link.label));
        if !link.children.is_empty() {
            html.push_str(r#"<ul class="submenu">"#);
            menu_items(html, &link.children, "menu__item submenu__item");
            html.push_str("</ul>");
        }
        html.push_str("</li>");
    }
}

/// Menu toggle plus, when open, the overlay navigation.
pub fn render_nav(menu: &NavMenu) -> String {
    let mut html = format!(
        r#"<button id="{}" class="nav-toggle{}" aria-expanded="{}" title="Toggle main navigation" data-sound-hover="hover"><span></span></button>"#,
        NAV_TOGGLE_ID,
        if menu.is_open() { " open" } else { "" },
        menu.is_open()
    );
    if menu.is_open() {
        _ = write!(
            html,
            r#"<nav id="main-navigation" class="nav-main"><div class="rgb-bar"></div><canvas id="{}" class="menu-canvas"></canvas><ul class="menu">"#,
            MENU_CANVAS_ID
        );
        menu_items(&mut html, &menu_links(), "menu__item");
        html.push_str("</ul></nav>");
    }
    html
}

pub fn render_audio_toggle(muted: bool) -> String {
    audio_toggle(muted)
}

fn audio_toggle(muted: bool) -> String {
    let waves = if muted {
        r#"<path d="M23 9L17 15"/><path d="M17 9L23 15"/>"#
    } else {
        r#"<path d="M19.07 4.93a10 10 0 0 1 0 14.14M15.54 8.46a5 5 0 0 1 0 7.07"/>"#
    };
    format!(
        r#"<button id="{}" class="audio-toggle" aria-pressed="{}" data-sound-hover="hover"><svg width="24" height="24" viewBox="0 0 24 24" fill="none" stroke="white" stroke-width="2" stroke-linecap="round" stroke-linejoin="round"><path d="M11 5L6 9H2V15H6L11 19V5Z"/>{}</svg></button>"#,
        AUDIO_TOGGLE_ID, muted, waves
    )
}

/// Inner markup of the start-up "enable audio" panel.
pub fn render_audio_prompt() -> String {
    format!(
        r#"<div class="audio-prompt-icon"></div><h3>Enable Audio Experience</h3><p>Click anywhere or interact with the page to enable the immersive audio experience.</p><button id="{}">Enable Audio</button>"#,
        AUDIO_PROMPT_BUTTON_ID
    )
}
