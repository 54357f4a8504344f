/// Triangle-wave opacity shared by orbs, particles and stars.
///
/// The value moves by `step` each frame and reflects off `[floor, max]`; when
/// a step would cross a bound the value lands on the bound and the step sign
/// flips, so the value never leaves the range.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct OpacityWave {
    pub value: f32,
    pub step: f32,
    pub floor: f32,
    pub max: f32,
}

impl OpacityWave {
    pub fn new(value: f32, step: f32, floor: f32, max: f32) -> Self {
        // A preset whose max sits under the floor degenerates to a constant.
        let max = max.max(floor);
        Self {
            value: value.clamp(floor, max),
            step,
            floor,
            max,
        }
    }

    #[inline]
    pub fn advance(&mut self) -> f32 {
        self.value += self.step;
        if self.value >= self.max {
            self.value = self.max;
            self.step = -self.step.abs();
        } else if self.value <= self.floor {
            self.value = self.floor;
            self.step = self.step.abs();
        }
        self.value
    }
}
