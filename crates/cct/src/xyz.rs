use serde::{Deserialize, Serialize};

use crate::xy::XY;

/// CIE 1931 tristimulus values
#[derive(Copy, Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct XYZ {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl XYZ {
    pub const NAN: Self = Self::new(f64::NAN, f64::NAN, f64::NAN);

    #[must_use]
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// Tristimulus values with luminance `Y = 1` for the given chromaticity
    #[must_use]
    pub fn from_xy(xy: XY) -> Self {
        Self::new(xy.x / xy.y, 1.0, (1.0 - xy.x - xy.y) / xy.y)
    }

    #[must_use]
    pub fn xy(&self) -> XY {
        let sum = self.x + self.y + self.z;
        XY::new(self.x / sum, self.y / sum)
    }
}

impl From<XYZ> for [f64; 3] {
    fn from(value: XYZ) -> Self {
        [value.x, value.y, value.z]
    }
}
