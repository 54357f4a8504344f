//! Cursor-reactive particle field.
//!
//! Per frame, in order: pointer attraction (and probabilistic recolor), color
//! easing, velocity damping, minimum-speed correction, integration with the
//! motion pattern, toroidal wrap, opacity oscillation. Pointer force is not
//! clamped, so a particle may briefly run faster than its baseline right
//! after the pointer leaves; damping brings it back down.

use super::color::Rgb;
use super::config::BackgroundConfig;
use super::constants::*;
use super::layer::{centered, span, wrap_toroidal, Simulation, StepContext};
use super::oscillator::OpacityWave;
use super::surface::{Surface, Viewport};
use glam::Vec2;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::Rng;
use std::f32::consts::TAU;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum MotionPattern {
    Linear,
    Circular {
        phase: f32,
        frequency: f32,
        radius: f32,
    },
    Sinusoidal {
        phase: f32,
        frequency: f32,
        radius: f32,
    },
}

impl MotionPattern {
    fn random(rng: &mut StdRng) -> Self {
        let roll = rng.gen::<f32>();
        if roll < PATTERN_LINEAR_WEIGHT {
            return MotionPattern::Linear;
        }
        let phase = rng.gen::<f32>() * TAU;
        let frequency = span(rng, PATTERN_FREQ_MIN, PATTERN_FREQ_SPAN);
        let radius = span(rng, PATTERN_RADIUS_MIN, PATTERN_RADIUS_SPAN);
        if roll < PATTERN_LINEAR_WEIGHT + PATTERN_CIRCULAR_WEIGHT {
            MotionPattern::Circular {
                phase,
                frequency,
                radius,
            }
        } else {
            MotionPattern::Sinusoidal {
                phase,
                frequency,
                radius,
            }
        }
    }

    /// Positional offset contributed this frame. Patterns move the body
    /// directly and never feed into its velocity.
    fn advance(&mut self, velocity: Vec2) -> Vec2 {
        match self {
            MotionPattern::Linear => Vec2::ZERO,
            MotionPattern::Circular {
                phase,
                frequency,
                radius,
            } => {
                *phase = (*phase + *frequency) % TAU;
                Vec2::new(-phase.sin(), phase.cos()) * *radius * *frequency
            }
            MotionPattern::Sinusoidal {
                phase,
                frequency,
                radius,
            } => {
                *phase = (*phase + *frequency) % TAU;
                let across = velocity.try_normalize().map(|d| d.perp()).unwrap_or(Vec2::Y);
                across * phase.cos() * *radius * *frequency
            }
        }
    }
}

#[derive(Clone, Debug)]
pub struct Particle {
    pub position: Vec2,
    pub velocity: Vec2,
    /// Speed the particle settles back to when left alone.
    pub base_speed: f32,
    pub size: f32,
    pub color: Rgb,
    pub original_color: Rgb,
    pub opacity: OpacityWave,
    pub pattern: MotionPattern,
}

impl Particle {
    pub fn random(viewport: Viewport, config: BackgroundConfig, rng: &mut StdRng) -> Self {
        let settings = config.intensity.settings();
        let palette = config.variant.theme().palette;
        let color = palette.choose(rng).copied().unwrap_or(Rgb::WHITE);
        let base_speed = span(rng, PARTICLE_SPEED_MIN, PARTICLE_SPEED_SPAN)
            * settings.speed
            * PARTICLE_SPEED_SCALE;
        let heading = rng.gen::<f32>() * TAU;
        let opacity = OpacityWave::new(
            span(rng, OPACITY_FLOOR, PARTICLE_MAX_OPACITY - OPACITY_FLOOR),
            centered(rng, PARTICLE_OPACITY_STEP_SPAN),
            OPACITY_FLOOR,
            PARTICLE_MAX_OPACITY,
        );
        Self {
            position: Vec2::new(
                span(rng, 0.0, viewport.width),
                span(rng, 0.0, viewport.height),
            ),
            velocity: Vec2::from_angle(heading) * base_speed,
            base_speed,
            size: span(rng, PARTICLE_SIZE_MIN, PARTICLE_SIZE_SPAN) * settings.size,
            color,
            original_color: color,
            opacity,
            pattern: MotionPattern::random(rng),
        }
    }

    /// Advance one frame. Returns whether the pointer acted on the particle.
    pub fn update(&mut self, ctx: &StepContext, palette: &[Rgb], rng: &mut StdRng) -> bool {
        let mut influenced = false;
        if let Some(pointer) = ctx.pointer.position {
            let to_pointer = pointer - self.position;
            let distance = to_pointer.length();
            if distance < INFLUENCE_RADIUS {
                influenced = true;
                if let Some(dir) = to_pointer.try_normalize() {
                    let falloff = (INFLUENCE_RADIUS - distance) / INFLUENCE_RADIUS;
                    self.velocity += dir * falloff * INFLUENCE_FORCE;
                }
                if ctx.pointer.speed > RECOLOR_POINTER_SPEED && rng.gen::<f32>() < RECOLOR_CHANCE {
                    if let Some(c) = palette.choose(rng) {
                        self.color = *c;
                    }
                }
            }
        }
        if !influenced {
            self.color = self.color.ease_towards(self.original_color, COLOR_EASE);
        }

        self.velocity *= VELOCITY_DAMPING;
        if !influenced {
            let speed = self.velocity.length();
            if speed < self.base_speed {
                self.velocity = match self.velocity.try_normalize() {
                    Some(dir) => dir * self.base_speed,
                    None => Vec2::from_angle(rng.gen::<f32>() * TAU) * self.base_speed,
                };
            }
        }

        let drift = self.pattern.advance(self.velocity);
        self.position += self.velocity + drift;
        wrap_toroidal(&mut self.position, self.size / 2.0, ctx.viewport);
        self.opacity.advance();
        influenced
    }
}

/// Opacity of the line joining two particles `distance` apart, or `None`
/// when they are too far apart to be connected.
#[inline]
pub fn connection_alpha(distance: f32) -> Option<f32> {
    (distance < CONNECTION_DISTANCE)
        .then(|| (1.0 - distance / CONNECTION_DISTANCE) * CONNECTION_MAX_ALPHA)
}

pub struct ParticleField {
    config: BackgroundConfig,
    particles: Vec<Particle>,
    populated: bool,
}

impl ParticleField {
    pub fn new(config: BackgroundConfig) -> Self {
        Self {
            config,
            particles: Vec::new(),
            populated: false,
        }
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn particles_mut(&mut self) -> &mut [Particle] {
        &mut self.particles
    }

    /// Every connected pair `(i, j, alpha)` with `i < j`.
    pub fn connections(&self) -> Vec<(usize, usize, f32)> {
        let mut out = Vec::new();
        for (i, a) in self.particles.iter().enumerate() {
            for (j, b) in self.particles.iter().enumerate().skip(i + 1) {
                if let Some(alpha) = connection_alpha(a.position.distance(b.position)) {
                    out.push((i, j, alpha));
                }
            }
        }
        out
    }
}

impl Simulation for ParticleField {
    fn populate(&mut self, viewport: Viewport, rng: &mut StdRng) {
        let count = self.config.intensity.settings().particle_count;
        self.particles = (0..count)
            .map(|_| Particle::random(viewport, self.config, rng))
            .collect();
        self.populated = true;
        log::debug!("[canvas] {} particles created", count);
    }

    fn is_populated(&self) -> bool {
        self.populated
    }

    fn step(&mut self, ctx: &StepContext, rng: &mut StdRng) {
        let palette = self.config.variant.theme().palette;
        for p in &mut self.particles {
            p.update(ctx, palette, rng);
        }
    }

    fn draw(&self, surface: &mut dyn Surface) {
        let line_color = self
            .config
            .variant
            .theme()
            .palette
            .first()
            .copied()
            .unwrap_or(Rgb::WHITE);
        for (i, j, alpha) in self.connections() {
            surface.stroke_line(
                self.particles[i].position,
                self.particles[j].position,
                CONNECTION_WIDTH,
                line_color.with_alpha(alpha),
            );
        }
        for p in &self.particles {
            surface.radial_glow(p.position, p.size, p.color, p.opacity.value);
        }
    }

    fn body_count(&self) -> usize {
        self.particles.len()
    }
}
