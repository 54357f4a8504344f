use super::color::Rgb;
use super::constants::*;
use super::layer::{span, Simulation, StepContext};
use super::oscillator::OpacityWave;
use super::surface::{Surface, Viewport};
use glam::Vec2;
use rand::rngs::StdRng;

/// Fixed point of light whose only state is its opacity.
#[derive(Clone, Debug)]
pub struct Star {
    pub position: Vec2,
    pub size: f32,
    pub opacity: OpacityWave,
}

pub struct Starfield {
    count: usize,
    stars: Vec<Star>,
    populated: bool,
}

impl Starfield {
    pub fn new(count: usize) -> Self {
        Self {
            count,
            stars: Vec::new(),
            populated: false,
        }
    }

    pub fn stars(&self) -> &[Star] {
        &self.stars
    }
}

impl Simulation for Starfield {
    fn populate(&mut self, viewport: Viewport, rng: &mut StdRng) {
        self.stars = (0..self.count)
            .map(|_| {
                let position = Vec2::new(
                    span(rng, 0.0, viewport.width),
                    span(rng, 0.0, viewport.height),
                );
                let opacity = OpacityWave::new(
                    span(rng, OPACITY_FLOOR, STAR_MAX_OPACITY - OPACITY_FLOOR),
                    span(rng, STAR_TWINKLE_STEP_MIN, STAR_TWINKLE_STEP_SPAN),
                    OPACITY_FLOOR,
                    STAR_MAX_OPACITY,
                );
                Star {
                    position,
                    size: span(rng, STAR_SIZE_MIN, STAR_SIZE_SPAN),
                    opacity,
                }
            })
            .collect();
        self.populated = true;
    }

    fn is_populated(&self) -> bool {
        self.populated
    }

    fn step(&mut self, _ctx: &StepContext, _rng: &mut StdRng) {
        for star in &mut self.stars {
            star.opacity.advance();
        }
    }

    fn draw(&self, surface: &mut dyn Surface) {
        for star in &self.stars {
            surface.fill_circle(
                star.position,
                star.size,
                Rgb::WHITE.with_alpha(star.opacity.value),
            );
        }
    }

    fn body_count(&self) -> usize {
        self.stars.len()
    }
}
