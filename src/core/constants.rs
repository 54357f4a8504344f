// Shared simulation tuning constants used by the canvas layers.

// Orbs
pub const ORB_SIZE_MIN: f32 = 140.0; // px before the intensity size multiplier
pub const ORB_SIZE_SPAN: f32 = 210.0; // size drawn from [MIN, MIN + SPAN)
pub const ORB_SPEED_SPAN: f32 = 0.4; // velocity drawn from [-SPAN/2, SPAN/2) * speed multiplier
pub const ORB_OPACITY_MIN: f32 = 0.1; // initial opacity drawn from [MIN, MIN + SPAN) * max opacity
pub const ORB_OPACITY_SPAN: f32 = 0.3;
pub const ORB_OPACITY_STEP_SPAN: f32 = 0.01; // oscillation step in [-SPAN/2, SPAN/2) * speed multiplier

// Lower bound of every opacity triangle wave
pub const OPACITY_FLOOR: f32 = 0.05;

// Trail fade alpha painted over the whole surface every frame
pub const TRAIL_ALPHA: f32 = 0.05;

// Particles (cursor-reactive field)
pub const PARTICLE_SIZE_MIN: f32 = 1.5;
pub const PARTICLE_SIZE_SPAN: f32 = 3.0;
pub const PARTICLE_SPEED_MIN: f32 = 0.25; // baseline speed in px/frame before speed multiplier
pub const PARTICLE_SPEED_SPAN: f32 = 0.75;
pub const PARTICLE_MAX_OPACITY: f32 = 0.9;
pub const PARTICLE_OPACITY_STEP_SPAN: f32 = 0.02;
pub const PARTICLE_SPEED_SCALE: f32 = 3.0; // particles move faster than orbs for the same preset

pub const INFLUENCE_RADIUS: f32 = 150.0; // px
pub const INFLUENCE_FORCE: f32 = 0.6; // px/frame² at the pointer itself
pub const VELOCITY_DAMPING: f32 = 0.98; // per-frame multiplicative damping
pub const RECOLOR_POINTER_SPEED: f32 = 12.0; // px/frame pointer speed that triggers recoloring
pub const RECOLOR_CHANCE: f32 = 0.1; // per particle per frame while above the threshold
pub const COLOR_EASE: f32 = 0.05; // fraction of the way back to the original color per frame

pub const CONNECTION_DISTANCE: f32 = 110.0; // px
pub const CONNECTION_MAX_ALPHA: f32 = 0.35;
pub const CONNECTION_WIDTH: f32 = 0.6;

// Motion patterns
pub const PATTERN_LINEAR_WEIGHT: f32 = 0.6; // share of particles with no pattern
pub const PATTERN_CIRCULAR_WEIGHT: f32 = 0.2;
pub const PATTERN_FREQ_MIN: f32 = 0.01; // radians/frame
pub const PATTERN_FREQ_SPAN: f32 = 0.03;
pub const PATTERN_RADIUS_MIN: f32 = 10.0; // px
pub const PATTERN_RADIUS_SPAN: f32 = 30.0;

// Stars (space variant)
pub const STAR_SIZE_MIN: f32 = 0.3;
pub const STAR_SIZE_SPAN: f32 = 1.2;
pub const STAR_MAX_OPACITY: f32 = 1.0;
pub const STAR_TWINKLE_STEP_MIN: f32 = 0.002;
pub const STAR_TWINKLE_STEP_SPAN: f32 = 0.018;

// Menu shapes
pub const MENU_SHAPE_COUNT: usize = 15;
pub const MENU_SHAPE_SIZE_MIN: f32 = 10.0;
pub const MENU_SHAPE_SIZE_SPAN: f32 = 30.0;
pub const MENU_SHAPE_OPACITY: f32 = 0.3;
pub const MENU_SPRING_STIFFNESS: f32 = 50.0;
pub const MENU_SPRING_DAMPING: f32 = 20.0;
pub const MENU_SCALE_MIN: f32 = 0.5;
pub const MENU_SCALE_MAX: f32 = 1.5;
pub const MENU_OFFSET_DIVISOR: f32 = 10.0; // offset = (pointer - shape) / DIVISOR
pub const MENU_ROTATION_SPAN_DEG: f32 = 20.0; // extra rotation across the full container width

// Longest frame step fed to time-based integrators (seconds)
pub const MAX_FRAME_DT_SEC: f32 = 0.05;
