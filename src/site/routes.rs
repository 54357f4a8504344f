use crate::core::{BackgroundConfig, Intensity, Variant};

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Route {
    Home,
    About,
    Services,
    Portfolio,
    /// `/portfolio/{id}`; the id may not name a known project.
    Project(String),
    Contact,
    NotFound,
}

impl Route {
    /// Resolve a location path. Query strings, fragments and trailing
    /// slashes are ignored.
    pub fn parse(path: &str) -> Route {
        let path = path.split(['?', '#']).next().unwrap_or("");
        let segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();
        match segments.as_slice() {
            [] => Route::Home,
            ["about"] => Route::About,
            ["services"] => Route::Services,
            ["portfolio"] => Route::Portfolio,
            ["portfolio", id] => Route::Project((*id).to_string()),
            ["contact"] => Route::Contact,
            _ => Route::NotFound,
        }
    }

    pub fn path(&self) -> String {
        match self {
            Route::Home => "/".into(),
            Route::About => "/about".into(),
            Route::Services => "/services".into(),
            Route::Portfolio => "/portfolio".into(),
            Route::Project(id) => format!("/portfolio/{}", id),
            Route::Contact => "/contact".into(),
            Route::NotFound => "/404".into(),
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Route::Home => "Portfolio",
            Route::About => "About",
            Route::Services => "Services",
            Route::Portfolio => "My Work",
            Route::Project(_) => "Project",
            Route::Contact => "Contact",
            Route::NotFound => "Not Found",
        }
    }

    /// Background shown behind the page.
    pub fn background(&self) -> BackgroundConfig {
        match self {
            Route::Home => BackgroundConfig::new(Variant::Purple, Intensity::Medium),
            Route::Contact => BackgroundConfig::new(Variant::Space, Intensity::Low),
            Route::About
            | Route::Services
            | Route::Portfolio
            | Route::Project(_)
            | Route::NotFound => BackgroundConfig::new(Variant::Dark, Intensity::Low),
        }
    }

    /// Whether the page adds the cursor-reactive particle canvas.
    pub fn has_particle_field(&self) -> bool {
        matches!(self, Route::Home)
    }

    /// Whether the floating mute toggle is shown.
    pub fn has_audio_toggle(&self) -> bool {
        matches!(self, Route::Portfolio | Route::Project(_))
    }
}
