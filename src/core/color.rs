/// 8-bit sRGB color as used by the canvas fill styles.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const WHITE: Rgb = Rgb::new(255, 255, 255);
    pub const BLACK: Rgb = Rgb::new(0, 0, 0);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Move each channel a fraction `t` of the way towards `target`.
    ///
    /// Channels always advance by at least one step while they differ, so an
    /// eased color reaches its target in a bounded number of frames. A rate of
    /// zero or less leaves the color unchanged.
    pub fn ease_towards(self, target: Rgb, t: f32) -> Rgb {
        #[inline]
        fn channel(from: u8, to: u8, t: f32) -> u8 {
            if from == to || t <= 0.0 {
                return from;
            }
            let delta = (to as f32 - from as f32) * t.clamp(0.0, 1.0);
            let step = if delta.abs() < 1.0 { delta.signum() } else { delta.round() };
            (from as f32 + step).clamp(0.0, 255.0) as u8
        }
        Rgb::new(
            channel(self.r, target.r, t),
            channel(self.g, target.g, t),
            channel(self.b, target.b, t),
        )
    }

    #[inline]
    pub fn with_alpha(self, alpha: f32) -> Rgba {
        Rgba { rgb: self, alpha }
    }
}

/// Color plus straight alpha in `[0, 1]`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rgba {
    pub rgb: Rgb,
    pub alpha: f32,
}

impl Rgba {
    /// CSS `rgba(r, g, b, a)` string accepted by `fillStyle`/`strokeStyle`.
    pub fn css(&self) -> String {
        format!(
            "rgba({}, {}, {}, {:.3})",
            self.rgb.r,
            self.rgb.g,
            self.rgb.b,
            self.alpha.clamp(0.0, 1.0)
        )
    }
}
