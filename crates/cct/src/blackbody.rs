use std::sync::LazyLock;

use crate::cmf;
use crate::isotherm::Isotherm;
use crate::locus::Planckian;
use crate::spectrum::Spectrum;
use crate::xy::{UV, XY};
use crate::xyz::XYZ;

/// Absolute tristimulus values of an ideal radiator. All NaN outside
/// 100K - 100000K.
#[must_use]
pub fn tristimulus(kelvin: f64) -> XYZ {
    let xyz = Spectrum::planckian(kelvin).tristimulus();
    if xyz.y > 0.0 { xyz } else { XYZ::NAN }
}

/// Exact chromaticity of an ideal radiator
#[must_use]
pub fn locus_xy(kelvin: f64) -> XY {
    tristimulus(kelvin).xy()
}

/// Exact 1960 UCS chromaticity of an ideal radiator
#[must_use]
pub fn locus_uv(kelvin: f64) -> UV {
    locus_xy(kelvin).into()
}

/// Exact chromaticity at temperature `kelvin`, moved `duv` along the isotherm
#[must_use]
pub fn offset_xy(kelvin: f64, duv: f64) -> XY {
    if duv == 0.0 {
        return locus_xy(kelvin);
    }
    Isotherm::at(&Planckian, kelvin).offset(duv).into()
}

/// Chromaticity approached as the temperature goes to infinity. Planck's law
/// reduces to Rayleigh-Jeans there, so radiance is proportional to `λ⁻⁴`.
#[must_use]
pub fn limit_uv() -> UV {
    static LIMIT: LazyLock<UV> = LazyLock::new(|| {
        let mut xyz = [0.0; 3];
        for (wl, cmf) in cmf::samples() {
            let weight = wl.powi(-4);
            for (acc, c) in xyz.iter_mut().zip(cmf) {
                *acc = weight.mul_add(c, *acc);
            }
        }
        XYZ::new(xyz[0], xyz[1], xyz[2]).xy().into()
    });

    *LIMIT
}

#[cfg(test)]
mod tests {
    use crate::blackbody::{limit_uv, locus_uv, locus_xy, offset_xy, tristimulus};
    use crate::xy::{UV, XY};
    use crate::{compare, compare_float, compare_uv};

    // Reference points from Robertson's 1968 table (u, v at a given mired)
    const ROBERTSON: &[(f64, f64, f64)] = &[
        (100.0, 0.19032, 0.29326),
        (200.0, 0.21142, 0.32312),
        (300.0, 0.24010, 0.34308),
        (400.0, 0.27218, 0.35407),
        (500.0, 0.30505, 0.35907),
        (600.0, 0.33724, 0.36051),
    ];

    #[test]
    fn matches_robertson_table() {
        for &(mired, u, v) in ROBERTSON {
            compare_uv!(locus_uv(1e6 / mired), UV::new(u, v), 5e-4);
        }
    }

    #[test]
    fn illuminant_a() {
        // CIE illuminant A is a 2856K blackbody
        let xy = locus_xy(2856.0);
        compare_float!(xy.x, 0.44757, 1e-4);
        compare_float!(xy.y, 0.40745, 1e-4);
    }

    #[test]
    fn infinite_limit() {
        compare_uv!(limit_uv(), UV::new(0.18006, 0.26352), 5e-4);
        // the locus keeps approaching the limit
        let far = locus_uv(100_000.0);
        let near = locus_uv(50_000.0);
        assert!((far - limit_uv()).length() < (near - limit_uv()).length());
    }

    #[test]
    fn out_of_range() {
        assert!(tristimulus(50.0).x.is_nan());
        assert!(!locus_xy(200_000.0).is_finite());
        assert!(locus_xy(100.0).is_finite());
        assert!(locus_xy(100_000.0).is_finite());
    }

    #[test]
    fn zero_offset_is_locus() {
        let a = offset_xy(4000.0, 0.0);
        let b = locus_xy(4000.0);
        assert_eq!(a, b);
    }

    #[test]
    fn positive_offset_raises_v() {
        let base = locus_uv(3000.0);
        let up = UV::from(offset_xy(3000.0, 0.01));
        assert!(up.v > base.v);
        compare!((up - base).length(), 0.01);
    }

    #[test]
    fn xy_is_normalized() {
        let xy = locus_xy(6500.0);
        assert!(xy.x > 0.0 && xy.y > 0.0 && xy.x + xy.y < 1.0);
        let _: XY = xy;
    }
}
