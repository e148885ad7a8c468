/// Piecewise transfer function between linear light and encoded values: a
/// power law, with a linear segment near black.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GammaCorrection {
    gamma: f64,
    transition: f64,
    slope: f64,
    offset: f64,
}

impl GammaCorrection {
    #[must_use]
    pub const fn new(gamma: f64, transition: f64, slope: f64, offset: f64) -> Self {
        Self {
            gamma,
            transition,
            slope,
            offset,
        }
    }

    /// Linear light to encoded value
    #[must_use]
    pub fn encode(&self, value: f64) -> f64 {
        if value <= self.transition {
            self.slope * value
        } else {
            (1.0 + self.offset).mul_add(value.powf(self.gamma), -self.offset)
        }
    }

    /// IEC 61966-2-1 (sRGB)
    pub const SRGB: Self = Self::new(1.0 / 2.4, 0.003_130_8, 12.92, 0.055);
}
