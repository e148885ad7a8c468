use std::fmt::Display;
use std::ops::{Add, Mul, Sub};

use serde::{Deserialize, Serialize};

/// CIE 1931 (x, y) chromaticity
#[derive(Copy, Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct XY {
    pub x: f64,
    pub y: f64,
}

/// CIE 1960 UCS (u, v) chromaticity, the space Duv is measured in
#[derive(Copy, Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct UV {
    pub u: f64,
    pub v: f64,
}

/// CIE 1976 UCS (u', v') chromaticity
#[derive(Copy, Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct UVPrime {
    pub u: f64,
    pub v: f64,
}

impl XY {
    pub const NAN: Self = Self::new(f64::NAN, f64::NAN);

    pub const D50_WHITE_POINT: Self = Self {
        x: 0.34567,
        y: 0.35850,
    };

    pub const D65_WHITE_POINT: Self = Self {
        x: 0.31271,
        y: 0.32902,
    };

    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    #[must_use]
    pub const fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

impl UV {
    pub const NAN: Self = Self::new(f64::NAN, f64::NAN);

    #[must_use]
    pub const fn new(u: f64, v: f64) -> Self {
        Self { u, v }
    }

    #[must_use]
    pub const fn is_finite(&self) -> bool {
        self.u.is_finite() && self.v.is_finite()
    }

    #[must_use]
    pub fn dot(self, other: Self) -> f64 {
        self.u.mul_add(other.u, self.v * other.v)
    }

    #[must_use]
    pub fn length(self) -> f64 {
        self.u.hypot(self.v)
    }

    /// Scale to unit length. Zero and non-finite vectors become NaN.
    #[must_use]
    pub fn normalized(self) -> Self {
        let len = self.length();
        if len > 0.0 && len.is_finite() {
            self * (1.0 / len)
        } else {
            Self::NAN
        }
    }

    /// Rotate a quarter turn clockwise: `(u, v) -> (v, -u)`
    #[must_use]
    pub const fn perpendicular(self) -> Self {
        Self::new(self.v, -self.u)
    }

    #[must_use]
    pub fn lerp(self, other: Self, t: f64) -> Self {
        self + (other - self) * t
    }
}

impl UVPrime {
    #[must_use]
    pub const fn new(u: f64, v: f64) -> Self {
        Self { u, v }
    }
}

impl Add for UV {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self::new(self.u + rhs.u, self.v + rhs.v)
    }
}

impl Sub for UV {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self::new(self.u - rhs.u, self.v - rhs.v)
    }
}

impl Mul<f64> for UV {
    type Output = Self;

    fn mul(self, rhs: f64) -> Self {
        Self::new(self.u * rhs, self.v * rhs)
    }
}

impl From<XY> for UV {
    fn from(xy: XY) -> Self {
        let d = (-2.0f64).mul_add(xy.x, 12.0f64.mul_add(xy.y, 3.0));
        Self::new(4.0 * xy.x / d, 6.0 * xy.y / d)
    }
}

impl From<UV> for XY {
    fn from(uv: UV) -> Self {
        let d = 2.0f64.mul_add(uv.u, (-8.0f64).mul_add(uv.v, 4.0));
        Self::new(3.0 * uv.u / d, 2.0 * uv.v / d)
    }
}

impl From<UV> for UVPrime {
    fn from(uv: UV) -> Self {
        Self::new(uv.u, uv.v * 1.5)
    }
}

impl From<UVPrime> for UV {
    fn from(uvp: UVPrime) -> Self {
        Self::new(uvp.u, uvp.v / 1.5)
    }
}

impl From<XY> for UVPrime {
    fn from(xy: XY) -> Self {
        UV::from(xy).into()
    }
}

impl From<UVPrime> for XY {
    fn from(uvp: UVPrime) -> Self {
        UV::from(uvp).into()
    }
}

impl From<[f64; 2]> for XY {
    fn from(value: [f64; 2]) -> Self {
        Self::new(value[0], value[1])
    }
}

impl From<XY> for [f64; 2] {
    fn from(value: XY) -> Self {
        [value.x, value.y]
    }
}

impl Display for XY {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let prec = f.precision().unwrap_or(4);
        write!(f, "x={:.prec$} y={:.prec$}", self.x, self.y)
    }
}

impl Display for UV {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let prec = f.precision().unwrap_or(4);
        write!(f, "u={:.prec$} v={:.prec$}", self.u, self.v)
    }
}

impl Display for UVPrime {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let prec = f.precision().unwrap_or(4);
        write!(f, "u'={:.prec$} v'={:.prec$}", self.u, self.v)
    }
}

#[cfg(test)]
mod tests {
    use crate::xy::{UV, UVPrime, XY};
    use crate::{compare, compare_float, compare_uv, compare_xy};

    #[test]
    fn xy_from_f64() {
        let a = XY::from([0.1, 0.2]);
        let b = XY::new(0.1, 0.2);

        compare_xy!(a, b);
    }

    #[test]
    fn f64_from_xy() {
        let a = [0.1, 0.2];
        let b = <[f64; 2]>::from(XY::new(0.1, 0.2));

        compare!(a[0], b[0]);
        compare!(a[1], b[1]);
    }

    #[test]
    fn d65_to_uv() {
        // published 1960 UCS coordinates of D65
        let uv = UV::from(XY::D65_WHITE_POINT);
        compare_uv!(uv, UV::new(0.1978, 0.3122), 1e-4);

        let uvp = UVPrime::from(XY::D65_WHITE_POINT);
        compare_float!(uvp.u, 0.1978, 1e-4);
        compare_float!(uvp.v, 0.4683, 1e-4);
    }

    #[test]
    fn xy_uv_inverse() {
        for xy in [XY::new(0.2, 0.3), XY::new(0.45, 0.41), XY::D50_WHITE_POINT] {
            compare_xy!(XY::from(UV::from(xy)), xy);
            compare_xy!(XY::from(UVPrime::from(xy)), xy);
        }
    }

    #[test]
    fn normalize_zero() {
        assert!(!UV::new(0.0, 0.0).normalized().is_finite());
        compare!(UV::new(3.0, 4.0).normalized().length(), 1.0);
    }

    #[test]
    fn perpendicular_is_orthogonal() {
        let a = UV::new(-0.3, 0.1);
        compare!(a.dot(a.perpendicular()), 0.0);
    }

    #[test]
    fn display_precision() {
        assert_eq!(format!("{}", XY::new(0.5, 0.25)), "x=0.5000 y=0.2500");
        assert_eq!(format!("{:.2}", UV::new(0.5, 0.25)), "u=0.50 v=0.25");
    }
}
