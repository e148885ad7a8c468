//! RGB color spaces, used to preview chromaticities as display colors.

use crate::gamma::GammaCorrection;
use crate::rgb::Rgb8;
use crate::xy::XY;
use crate::xyz::XYZ;

#[derive(Clone, Debug, PartialEq)]
pub struct Matrix3(pub [f64; 3 * 3]);

impl Matrix3 {
    #[allow(clippy::suboptimal_flops)]
    #[must_use]
    pub fn mult(&self, d: [f64; 3]) -> [f64; 3] {
        let m = self.0;
        let cx = d[0] * m[0] + d[1] * m[1] + d[2] * m[2];
        let cy = d[0] * m[3] + d[1] * m[4] + d[2] * m[5];
        let cz = d[0] * m[6] + d[1] * m[7] + d[2] * m[8];
        [cx, cy, cz]
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct ColorSpace {
    rgb: Matrix3,
    gamma: GammaCorrection,
}

impl ColorSpace {
    /// Linear (not gamma encoded) RGB of `xyz`
    #[must_use]
    pub fn xyz_to_linear(&self, xyz: XYZ) -> [f64; 3] {
        self.rgb.mult(xyz.into())
    }

    /// Brightest encoded RGB with chromaticity `xy`: the linear color is
    /// scaled until its largest channel is exactly 1. Channels outside the
    /// gamut are left for the caller to clamp.
    #[must_use]
    pub fn xy_to_rgb(&self, xy: XY) -> [f64; 3] {
        let linear = self.xyz_to_linear(XYZ::from_xy(xy));
        let max = linear[0].max(linear[1]).max(linear[2]);
        if max.is_nan() || max <= 0.0 {
            return [f64::NAN; 3];
        }
        linear.map(|q| self.gamma.encode(q / max))
    }

    #[must_use]
    pub fn xy_to_rgb8(&self, xy: XY) -> Rgb8 {
        Rgb8::from_unit(self.xy_to_rgb(xy))
    }
}

/// sRGB color space
pub const SRGB: ColorSpace = ColorSpace {
    rgb: Matrix3([
        3.2401, -1.5370, -0.4983, //
        -0.9693, 1.8760, 0.0415, //
        0.0558, -0.2040, 1.0572, //
    ]),
    gamma: GammaCorrection::SRGB,
};

#[cfg(test)]
mod tests {
    use crate::colorspace::SRGB;
    use crate::rgb::Rgb8;
    use crate::xy::XY;
    use crate::xyz::XYZ;
    use crate::compare_float;

    #[test]
    fn white_point() {
        let rgb = SRGB.xy_to_rgb(XY::D65_WHITE_POINT);
        for channel in rgb {
            compare_float!(channel, 1.0, 2e-3);
        }
        assert_eq!(SRGB.xy_to_rgb8(XY::D65_WHITE_POINT), Rgb8::new(255, 255, 255));
    }

    #[test]
    fn primaries() {
        let primaries = [
            (XY::new(0.64, 0.33), [1.0, 0.0, 0.0]),
            (XY::new(0.30, 0.60), [0.0, 1.0, 0.0]),
            (XY::new(0.15, 0.06), [0.0, 0.0, 1.0]),
        ];
        for (xy, rgb) in primaries {
            for (a, b) in SRGB.xy_to_rgb(xy).into_iter().zip(rgb) {
                compare_float!(a, b, 3e-3);
            }
        }
    }

    #[test]
    fn linear_white_is_balanced() {
        let linear = SRGB.xyz_to_linear(XYZ::from_xy(XY::D65_WHITE_POINT));
        for channel in linear {
            compare_float!(channel, 1.0, 2e-3);
        }
    }

    #[test]
    fn invalid_chromaticity() {
        assert!(SRGB.xy_to_rgb(XY::NAN).iter().all(|q| q.is_nan()));
        assert_eq!(SRGB.xy_to_rgb8(XY::NAN), Rgb8::new(0, 0, 0));
    }
}
