use crate::isotherm::Isotherm;
use crate::locus::Kang;
use crate::xy::XY;
use crate::{POLYNOMIAL_MAX_KELVIN, POLYNOMIAL_MIN_KELVIN};

/// Temperatures where the polynomial switches coefficient sets. Each boundary
/// belongs to the piece below it.
pub const BREAKPOINTS: [f64; 2] = [2222.0, 4000.0];

// compute point on 3rd degree polynomial
fn power3_approx(input: f64, q: [f64; 4]) -> f64 {
    q[0].mul_add(input, q[1])
        .mul_add(input, q[2])
        .mul_add(input, q[3])
}

/// Evaluate the locus polynomial without checking its domain.
///
/// Algorithm by Kang et. al
///
///   `Kang2002a`: Kang, B., Moon, O., Hong, C., Lee, H., Cho, B., & Kim,
///    Y. (2002). Design of advanced color: Temperature control system for HDTV
///    applications. Journal of the Korean Physical Society, 41(6), 865-871.
///
#[rustfmt::skip]
#[must_use]
pub fn polynomial_xy(cct: f64) -> XY {
    const X_OVER_ZERO: [f64; 4] = [-0.266_123_90, -0.234_358_90, 0.877_695_60,  0.179_910_00];
    const X_OVER_4000: [f64; 4] = [-3.025_846_90,  2.107_037_90, 0.222_634_70,  0.240_390_00];
    const Y_OVER_ZERO: [f64; 4] = [-1.106_381_40, -1.348_110_20, 2.185_558_32, -0.202_196_83];
    const Y_OVER_2222: [f64; 4] = [-0.954_947_60, -1.374_185_93, 2.091_370_15, -0.167_488_67];
    const Y_OVER_4000: [f64; 4] = [ 3.081_758_00, -5.873_386_70, 3.751_129_97, -0.370_014_83];

    let mk = 1000.0 / cct;

    let x = if cct <= BREAKPOINTS[1] {
        power3_approx(mk, X_OVER_ZERO)
    } else {
        power3_approx(mk, X_OVER_4000)
    };

    let y = if cct <= BREAKPOINTS[0] {
        power3_approx(x, Y_OVER_ZERO)
    } else if cct <= BREAKPOINTS[1] {
        power3_approx(x, Y_OVER_2222)
    } else {
        power3_approx(x, Y_OVER_4000)
    };

    XY::new(x, y)
}

/// Chromaticity of the Planckian locus at `kelvin`, using the closed-form
/// approximation. NaN outside 1667K - 25000K.
#[must_use]
pub fn locus_xy(kelvin: f64) -> XY {
    if (POLYNOMIAL_MIN_KELVIN..=POLYNOMIAL_MAX_KELVIN).contains(&kelvin) {
        polynomial_xy(kelvin)
    } else {
        XY::NAN
    }
}

/// Chromaticity at `kelvin`, moved `duv` along the isotherm (positive towards
/// green, negative towards magenta).
#[must_use]
pub fn offset_xy(kelvin: f64, duv: f64) -> XY {
    if duv == 0.0 {
        return locus_xy(kelvin);
    }
    Isotherm::at(&Kang, kelvin).offset(duv).into()
}

#[cfg(test)]
mod tests {
    use crate::colortemp::{locus_xy, offset_xy, polynomial_xy};
    use crate::xy::{UV, XY};
    use crate::{compare, compare_float, compare_xy};

    // Regression tests, sanity checked against kelvin-to-blackbody raditation color
    // data found here:
    //
    //   <http://www.vendian.org/mncharity/dir3/blackbody/UnstableURLs/bbr_color.html>
    //
    // The values match to 2-3 decimals, which is about what can be expected
    // from the approximation used.

    #[test]
    fn test2000k() {
        compare_xy!(locus_xy(2000.0), XY::new(0.5269, 0.4132));
    }

    #[test]
    fn test3500k() {
        compare_xy!(locus_xy(3500.0), XY::new(0.4053, 0.3908));
    }

    #[test]
    fn test4200k() {
        compare_xy!(locus_xy(4200.0), XY::new(0.3720, 0.3713));
    }

    #[test]
    fn test6500k() {
        compare_xy!(locus_xy(6500.0), XY::new(0.3134, 0.3236));
    }

    #[test]
    fn domain() {
        assert!(!locus_xy(1666.0).is_finite());
        assert!(!locus_xy(25001.0).is_finite());
        assert!(!locus_xy(f64::NAN).is_finite());
        assert!(locus_xy(1667.0).is_finite());
        assert!(locus_xy(25000.0).is_finite());
        assert!(!offset_xy(1000.0, 0.01).is_finite());
        // the raw polynomial has no such limit
        assert!(polynomial_xy(1000.0).is_finite());
    }

    #[test]
    fn offset_distance() {
        for kelvin in [1667.0, 2222.0, 3000.0, 4000.0, 10000.0, 25000.0] {
            for duv in [-0.02, 0.005, 0.02] {
                let base = UV::from(locus_xy(kelvin));
                let moved = UV::from(offset_xy(kelvin, duv));
                compare_float!((moved - base).length(), duv.abs(), 1e-9);
                assert_eq!(moved.v > base.v, duv > 0.0);
            }
        }
    }

    #[test]
    fn zero_offset() {
        assert_eq!(offset_xy(5000.0, 0.0), locus_xy(5000.0));
    }
}
