use super::color::Rgb;
use super::config::{BackgroundConfig, IntensitySettings};
use super::constants::*;
use super::layer::{centered, span, wrap_toroidal, Simulation, StepContext};
use super::oscillator::OpacityWave;
use super::surface::{Surface, Viewport};
use glam::Vec2;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;

/// Large soft drifting disc of the ambient background.
#[derive(Clone, Debug)]
pub struct Orb {
    pub position: Vec2,
    pub velocity: Vec2,
    pub size: f32,
    pub color: Rgb,
    pub opacity: OpacityWave,
}

impl Orb {
    pub fn random(
        viewport: Viewport,
        settings: &IntensitySettings,
        palette: &[Rgb],
        rng: &mut StdRng,
    ) -> Self {
        let position = Vec2::new(
            span(rng, 0.0, viewport.width),
            span(rng, 0.0, viewport.height),
        );
        let size = span(rng, ORB_SIZE_MIN, ORB_SIZE_SPAN) * settings.size;
        let color = palette.choose(rng).copied().unwrap_or(Rgb::WHITE);
        let velocity = Vec2::new(
            centered(rng, ORB_SPEED_SPAN) * settings.speed,
            centered(rng, ORB_SPEED_SPAN) * settings.speed,
        );
        let opacity = OpacityWave::new(
            span(rng, ORB_OPACITY_MIN, ORB_OPACITY_SPAN) * settings.max_opacity,
            centered(rng, ORB_OPACITY_STEP_SPAN) * settings.speed,
            OPACITY_FLOOR,
            settings.max_opacity,
        );
        Self {
            position,
            velocity,
            size,
            color,
            opacity,
        }
    }

    #[inline]
    pub fn update(&mut self, viewport: Viewport) {
        self.position += self.velocity;
        wrap_toroidal(&mut self.position, self.size / 2.0, viewport);
        self.opacity.advance();
    }
}

pub struct OrbField {
    settings: IntensitySettings,
    palette: &'static [Rgb],
    orbs: Vec<Orb>,
    populated: bool,
}

impl OrbField {
    pub fn new(config: BackgroundConfig) -> Self {
        Self {
            settings: *config.intensity.settings(),
            palette: config.variant.theme().palette,
            orbs: Vec::new(),
            populated: false,
        }
    }

    pub fn orbs(&self) -> &[Orb] {
        &self.orbs
    }
}

impl Simulation for OrbField {
    fn populate(&mut self, viewport: Viewport, rng: &mut StdRng) {
        self.orbs = (0..self.settings.orb_count)
            .map(|_| Orb::random(viewport, &self.settings, self.palette, rng))
            .collect();
        self.populated = true;
        log::debug!("[canvas] {} orbs created", self.orbs.len());
    }

    fn is_populated(&self) -> bool {
        self.populated
    }

    fn step(&mut self, ctx: &StepContext, _rng: &mut StdRng) {
        for orb in &mut self.orbs {
            orb.update(ctx.viewport);
        }
    }

    fn draw(&self, surface: &mut dyn Surface) {
        for orb in &self.orbs {
            surface.radial_glow(orb.position, orb.size, orb.color, orb.opacity.value);
        }
    }

    fn body_count(&self) -> usize {
        self.orbs.len()
    }
}
