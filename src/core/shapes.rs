//! Floating geometric shapes behind the overlay menu.
//!
//! Shapes live in percent coordinates of their container and spring towards a
//! pointer-derived target (offset, rotation, scale) every frame.

use super::color::Rgb;
use super::constants::*;
use super::layer::{span, Simulation, StepContext};
use super::surface::{Surface, Viewport};
use glam::{Mat2, Vec2};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::Rng;

pub const MENU_COLORS: [Rgb; 5] = [
    Rgb::new(219, 166, 255),
    Rgb::new(183, 138, 255),
    Rgb::new(153, 102, 204),
    Rgb::new(112, 66, 210),
    Rgb::new(81, 48, 151),
];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ShapeKind {
    Circle,
    Square,
    Triangle,
}

impl ShapeKind {
    pub const ALL: [ShapeKind; 3] = [ShapeKind::Circle, ShapeKind::Square, ShapeKind::Triangle];
}

/// Animated property tracked by a damped spring.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Spring<T> {
    pub value: T,
    pub velocity: T,
}

impl<T> Spring<T>
where
    T: Copy
        + std::ops::Sub<Output = T>
        + std::ops::Add<Output = T>
        + std::ops::Mul<f32, Output = T>,
{
    #[inline]
    fn step(&mut self, target: T, dt_sec: f32) {
        let accel = (target - self.value) * MENU_SPRING_STIFFNESS - self.velocity * MENU_SPRING_DAMPING;
        self.velocity = self.velocity + accel * dt_sec;
        self.value = self.value + self.velocity * dt_sec;
    }
}

#[derive(Clone, Debug)]
pub struct MenuShape {
    /// Resting position in percent of the container.
    pub anchor: Vec2,
    pub size: f32,
    pub color: Rgb,
    pub rotation_deg: f32,
    pub kind: ShapeKind,
    pub offset: Spring<Vec2>,
    pub spin: Spring<f32>,
    pub scale: Spring<f32>,
}

/// Target pose for a shape given the pointer in percent coordinates.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ShapeTarget {
    pub offset: Vec2,
    pub rotation_deg: f32,
    pub scale: f32,
}

impl MenuShape {
    pub fn target(&self, pointer_pct: Vec2) -> ShapeTarget {
        let delta = pointer_pct - self.anchor;
        let distance = (delta / 100.0 * 50.0).length();
        ShapeTarget {
            offset: delta / MENU_OFFSET_DIVISOR,
            rotation_deg: self.rotation_deg + pointer_pct.x / 100.0 * MENU_ROTATION_SPAN_DEG,
            scale: (1.0 + (10.0 - distance) / 20.0).clamp(MENU_SCALE_MIN, MENU_SCALE_MAX),
        }
    }

    fn outline(&self, center: Vec2) -> Vec<Vec2> {
        let half = self.size * self.scale.value / 2.0;
        let rot = Mat2::from_angle(self.spin.value.to_radians());
        let corners: &[Vec2] = match self.kind {
            ShapeKind::Square => &[
                Vec2::new(-1.0, -1.0),
                Vec2::new(1.0, -1.0),
                Vec2::new(1.0, 1.0),
                Vec2::new(-1.0, 1.0),
            ],
            ShapeKind::Triangle => &[Vec2::new(0.0, -1.0), Vec2::new(1.0, 1.0), Vec2::new(-1.0, 1.0)],
            ShapeKind::Circle => &[],
        };
        corners.iter().map(|c| center + rot * (*c * half)).collect()
    }
}

pub struct MenuShapeField {
    shapes: Vec<MenuShape>,
    pointer_pct: Vec2,
    viewport: Viewport,
    populated: bool,
}

impl Default for MenuShapeField {
    fn default() -> Self {
        Self::new()
    }
}

impl MenuShapeField {
    pub fn new() -> Self {
        Self {
            shapes: Vec::new(),
            pointer_pct: Vec2::ZERO,
            viewport: Viewport::default(),
            populated: false,
        }
    }

    pub fn shapes(&self) -> &[MenuShape] {
        &self.shapes
    }
}

impl Simulation for MenuShapeField {
    fn populate(&mut self, viewport: Viewport, rng: &mut StdRng) {
        self.viewport = viewport;
        self.shapes = (0..MENU_SHAPE_COUNT)
            .map(|_| {
                let rotation_deg = rng.gen::<f32>() * 360.0;
                MenuShape {
                    anchor: Vec2::new(rng.gen::<f32>() * 100.0, rng.gen::<f32>() * 100.0),
                    size: span(rng, MENU_SHAPE_SIZE_MIN, MENU_SHAPE_SIZE_SPAN),
                    color: MENU_COLORS.choose(rng).copied().unwrap_or(Rgb::WHITE),
                    rotation_deg,
                    kind: ShapeKind::ALL.choose(rng).copied().unwrap_or(ShapeKind::Circle),
                    offset: Spring::default(),
                    spin: Spring {
                        value: rotation_deg,
                        velocity: 0.0,
                    },
                    scale: Spring {
                        value: 1.0,
                        velocity: 0.0,
                    },
                }
            })
            .collect();
        self.populated = true;
    }

    fn is_populated(&self) -> bool {
        self.populated
    }

    fn step(&mut self, ctx: &StepContext, _rng: &mut StdRng) {
        self.viewport = ctx.viewport;
        if let Some(p) = ctx.pointer.position {
            if !ctx.viewport.is_empty() {
                self.pointer_pct = Vec2::new(
                    p.x / ctx.viewport.width * 100.0,
                    p.y / ctx.viewport.height * 100.0,
                );
            }
        }
        let dt = ctx.dt_sec.clamp(0.0, MAX_FRAME_DT_SEC);
        for shape in &mut self.shapes {
            let target = shape.target(self.pointer_pct);
            shape.offset.step(target.offset, dt);
            shape.spin.step(target.rotation_deg, dt);
            shape.scale.step(target.scale, dt);
        }
    }

    fn draw(&self, surface: &mut dyn Surface) {
        let vp = self.viewport;
        for shape in &self.shapes {
            let center = Vec2::new(
                shape.anchor.x / 100.0 * vp.width,
                shape.anchor.y / 100.0 * vp.height,
            ) + shape.offset.value;
            let color = shape.color.with_alpha(MENU_SHAPE_OPACITY);
            match shape.kind {
                ShapeKind::Circle => {
                    surface.fill_circle(center, shape.size * shape.scale.value / 2.0, color)
                }
                ShapeKind::Square | ShapeKind::Triangle => {
                    surface.fill_polygon(&shape.outline(center), color)
                }
            }
        }
    }

    fn body_count(&self) -> usize {
        self.shapes.len()
    }
}
