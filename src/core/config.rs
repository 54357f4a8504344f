//! Background presets, color themes, audio assets and start-up options.
//!
//! Presets and themes are static tables indexed by enum, so adding a variant
//! is a new table row rather than new control flow.

use super::color::Rgb;
use std::str::FromStr;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseConfigError {
    #[error("unknown intensity preset `{0}`")]
    Intensity(String),
    #[error("unknown color variant `{0}`")]
    Variant(String),
    #[error("unknown sound effect `{0}`")]
    Sound(String),
}

/// Population parameters for one background preset.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct IntensitySettings {
    pub orb_count: usize,
    pub speed: f32,
    pub size: f32,
    pub max_opacity: f32,
    pub particle_count: usize,
    pub star_count: usize,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Intensity {
    Low,
    #[default]
    Medium,
    High,
}

const INTENSITY_TABLE: [IntensitySettings; 3] = [
    IntensitySettings {
        orb_count: 3,
        speed: 0.2,
        size: 0.7,
        max_opacity: 0.3,
        particle_count: 45,
        star_count: 90,
    },
    IntensitySettings {
        orb_count: 5,
        speed: 0.3,
        size: 1.0,
        max_opacity: 0.5,
        particle_count: 70,
        star_count: 140,
    },
    IntensitySettings {
        orb_count: 8,
        speed: 0.4,
        size: 1.3,
        max_opacity: 0.7,
        particle_count: 100,
        star_count: 200,
    },
];

impl Intensity {
    pub const ALL: [Intensity; 3] = [Intensity::Low, Intensity::Medium, Intensity::High];

    #[inline]
    pub fn settings(self) -> &'static IntensitySettings {
        &INTENSITY_TABLE[self as usize]
    }

    pub fn name(self) -> &'static str {
        match self {
            Intensity::Low => "low",
            Intensity::Medium => "medium",
            Intensity::High => "high",
        }
    }
}

impl FromStr for Intensity {
    type Err = ParseConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Intensity::ALL
            .into_iter()
            .find(|i| i.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ParseConfigError::Intensity(s.to_string()))
    }
}

/// Colors owned by one theme.
#[derive(Clone, Copy, Debug)]
pub struct VariantTheme {
    pub name: &'static str,
    /// Base colors bodies are drawn from.
    pub palette: &'static [Rgb],
    /// Background gradient stops `[light, mid, dark]`.
    pub gradient: [Rgb; 3],
    /// Whether the theme adds a twinkling star population.
    pub starfield: bool,
}

impl VariantTheme {
    /// Darkest gradient stop; used for the per-frame trail fill.
    #[inline]
    pub fn darkest(&self) -> Rgb {
        self.gradient[2]
    }

    /// CSS `linear-gradient` for the fixed layer behind the canvas.
    pub fn css_gradient(&self) -> String {
        let [a, b, c] = self.gradient;
        format!(
            "linear-gradient(to bottom right, rgb({}, {}, {}), rgb({}, {}, {}), rgb({}, {}, {}))",
            a.r, a.g, a.b, b.r, b.g, b.b, c.r, c.g, c.b
        )
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Variant {
    #[default]
    Purple,
    Dark,
    Space,
}

const THEME_TABLE: [VariantTheme; 3] = [
    VariantTheme {
        name: "purple",
        palette: &[
            Rgb::new(219, 166, 255),
            Rgb::new(255, 217, 209),
            Rgb::new(112, 66, 210),
        ],
        gradient: [
            Rgb::new(255, 217, 209),
            Rgb::new(112, 66, 210),
            Rgb::new(0, 0, 0),
        ],
        starfield: false,
    },
    VariantTheme {
        name: "dark",
        palette: &[
            Rgb::new(219, 166, 255),
            Rgb::new(112, 66, 210),
            Rgb::new(30, 30, 35),
        ],
        gradient: [
            Rgb::new(30, 30, 35),
            Rgb::new(20, 20, 25),
            Rgb::new(0, 0, 0),
        ],
        starfield: false,
    },
    VariantTheme {
        name: "space",
        palette: &[
            Rgb::new(120, 90, 220),
            Rgb::new(60, 120, 255),
            Rgb::new(219, 166, 255),
        ],
        gradient: [
            Rgb::new(22, 18, 48),
            Rgb::new(8, 8, 24),
            Rgb::new(0, 0, 0),
        ],
        starfield: true,
    },
];

impl Variant {
    pub const ALL: [Variant; 3] = [Variant::Purple, Variant::Dark, Variant::Space];

    #[inline]
    pub fn theme(self) -> &'static VariantTheme {
        &THEME_TABLE[self as usize]
    }
}

impl FromStr for Variant {
    type Err = ParseConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            // "default"/"alternate" are accepted as aliases of the first two themes
            "default" => Ok(Variant::Purple),
            "alternate" => Ok(Variant::Dark),
            name => Variant::ALL
                .into_iter()
                .find(|v| v.theme().name == name)
                .ok_or_else(|| ParseConfigError::Variant(s.to_string())),
        }
    }
}

/// Per-page background selection. Fixed for the lifetime of one mount.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct BackgroundConfig {
    pub variant: Variant,
    pub intensity: Intensity,
}

impl BackgroundConfig {
    pub const fn new(variant: Variant, intensity: Intensity) -> Self {
        Self { variant, intensity }
    }
}

/// Audio asset locations and mix levels.
#[derive(Clone, Debug, PartialEq)]
pub struct AudioConfig {
    pub track_src: &'static str,
    pub sounds_dir: &'static str,
    pub track_volume: f32,
    pub effect_volume: f32,
}

impl Default for AudioConfig {
    fn default() -> Self {
        Self {
            track_src: "/sounds/background-music.mp3",
            sounds_dir: "/sounds",
            track_volume: 0.1,
            effect_volume: 0.15,
        }
    }
}

/// Start-up options read once from the page query string.
///
/// - `seed=<u64>` makes body generation reproducible
/// - `intensity=<low|medium|high>` overrides every page's preset
/// - `muted=1` starts the session muted
#[derive(Clone, Debug, Default, PartialEq)]
pub struct AppConfig {
    pub seed: Option<u64>,
    pub intensity_override: Option<Intensity>,
    pub start_muted: bool,
}

impl AppConfig {
    /// Parse a `?a=b&c=d` query string. Unknown keys and bad values are
    /// logged and ignored.
    pub fn from_query(query: &str) -> Self {
        let mut cfg = AppConfig::default();
        for pair in query.trim_start_matches('?').split('&') {
            let (key, value) = match pair.split_once('=') {
                Some(kv) => kv,
                None => (pair, ""),
            };
            match key {
                "" => {}
                "seed" => match value.parse::<u64>() {
                    Ok(seed) => cfg.seed = Some(seed),
                    Err(_) => log::warn!("[config] ignoring bad seed `{}`", value),
                },
                "intensity" => match value.parse::<Intensity>() {
                    Ok(i) => cfg.intensity_override = Some(i),
                    Err(e) => log::warn!("[config] {}", e),
                },
                "muted" => cfg.start_muted = matches!(value, "" | "1" | "true"),
                other => log::debug!("[config] ignoring unknown option `{}`", other),
            }
        }
        cfg
    }

    /// Apply the global overrides to a page's background selection.
    pub fn background_for(&self, page: BackgroundConfig) -> BackgroundConfig {
        BackgroundConfig {
            intensity: self.intensity_override.unwrap_or(page.intensity),
            ..page
        }
    }
}
