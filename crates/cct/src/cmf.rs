//! CIE 1931 2° standard observer and Planck radiation constants.

/// First wavelength of the tabulated observer, in nanometers
pub const WAVELENGTH_START: f64 = 380.0;

/// Spacing between tabulated wavelengths, in nanometers
pub const WAVELENGTH_STEP: f64 = 5.0;

/// Number of tabulated wavelengths (380 nm to 780 nm inclusive)
pub const SAMPLES: usize = 81;

/// First radiation constant, 2πhc² (W·m²)
pub const C1: f64 = 3.741_771_852e-16;

/// Second radiation constant, hc/k (m·K)
pub const C2: f64 = 1.438_776_877e-2;

/// Wavelength of sample `index`, in nanometers
#[allow(clippy::cast_precision_loss)]
#[must_use]
pub const fn wavelength(index: usize) -> f64 {
    WAVELENGTH_START + WAVELENGTH_STEP * index as f64
}

/// Iterate over `(wavelength_nm, [x̄, ȳ, z̄])` for every tabulated sample
pub fn samples() -> impl Iterator<Item = (f64, [f64; 3])> {
    (0..SAMPLES).map(|i| (wavelength(i), [X_BAR[i], Y_BAR[i], Z_BAR[i]]))
}

#[rustfmt::skip]
pub const X_BAR: [f64; SAMPLES] = [
    0.001_368, 0.002_236, 0.004_243, 0.007_650, 0.014_310, 0.023_190, 0.043_510, 0.077_630, 0.134_380,
    0.214_770, 0.283_900, 0.328_500, 0.348_280, 0.348_060, 0.336_200, 0.318_700, 0.290_800, 0.251_100,
    0.195_360, 0.142_100, 0.095_640, 0.058_010, 0.032_010, 0.014_700, 0.004_900, 0.002_400, 0.009_300,
    0.029_100, 0.063_270, 0.109_600, 0.165_500, 0.225_750, 0.290_400, 0.359_700, 0.433_450, 0.512_050,
    0.594_500, 0.678_400, 0.762_100, 0.842_500, 0.916_300, 0.978_600, 1.026_300, 1.056_700, 1.062_200,
    1.045_600, 1.002_600, 0.938_400, 0.854_450, 0.751_400, 0.642_400, 0.541_900, 0.447_900, 0.360_800,
    0.283_500, 0.218_700, 0.164_900, 0.121_200, 0.087_400, 0.063_600, 0.046_770, 0.032_900, 0.022_700,
    0.015_840, 0.011_359, 0.008_111, 0.005_790, 0.004_109, 0.002_899, 0.002_049, 0.001_440, 0.001_000,
    0.000_690, 0.000_476, 0.000_332, 0.000_235, 0.000_166, 0.000_117, 0.000_083, 0.000_059, 0.000_042,
];

#[rustfmt::skip]
pub const Y_BAR: [f64; SAMPLES] = [
    0.000_039, 0.000_064, 0.000_120, 0.000_217, 0.000_396, 0.000_640, 0.001_210, 0.002_180, 0.004_000,
    0.007_300, 0.011_600, 0.016_840, 0.023_000, 0.029_800, 0.038_000, 0.048_000, 0.060_000, 0.073_900,
    0.090_980, 0.112_600, 0.139_020, 0.169_300, 0.208_020, 0.258_600, 0.323_000, 0.407_300, 0.503_000,
    0.608_200, 0.710_000, 0.793_200, 0.862_000, 0.914_850, 0.954_000, 0.980_300, 0.994_950, 1.000_000,
    0.995_000, 0.978_600, 0.952_000, 0.915_400, 0.870_000, 0.816_300, 0.757_000, 0.694_900, 0.631_000,
    0.566_800, 0.503_000, 0.441_200, 0.381_000, 0.321_000, 0.265_000, 0.217_000, 0.175_000, 0.138_200,
    0.107_000, 0.081_600, 0.061_000, 0.044_580, 0.032_000, 0.023_200, 0.017_000, 0.011_920, 0.008_210,
    0.005_723, 0.004_102, 0.002_929, 0.002_091, 0.001_484, 0.001_047, 0.000_740, 0.000_520, 0.000_361,
    0.000_249, 0.000_172, 0.000_120, 0.000_085, 0.000_060, 0.000_042, 0.000_030, 0.000_021, 0.000_015,
];

#[rustfmt::skip]
pub const Z_BAR: [f64; SAMPLES] = [
    0.006_450, 0.010_550, 0.020_050, 0.036_210, 0.067_850, 0.110_200, 0.207_400, 0.371_300, 0.645_600,
    1.039_050, 1.385_600, 1.622_960, 1.747_060, 1.782_600, 1.772_110, 1.744_100, 1.669_200, 1.528_100,
    1.287_640, 1.041_900, 0.812_950, 0.616_200, 0.465_180, 0.353_300, 0.272_000, 0.212_300, 0.158_200,
    0.111_700, 0.078_250, 0.057_250, 0.042_160, 0.029_840, 0.020_300, 0.013_400, 0.008_750, 0.005_750,
    0.003_900, 0.002_750, 0.002_100, 0.001_800, 0.001_650, 0.001_400, 0.001_100, 0.001_000, 0.000_800,
    0.000_600, 0.000_340, 0.000_240, 0.000_190, 0.000_100, 0.000_050, 0.000_030, 0.000_020, 0.000_010,
    0.000_000, 0.000_000, 0.000_000, 0.000_000, 0.000_000, 0.000_000, 0.000_000, 0.000_000, 0.000_000,
    0.000_000, 0.000_000, 0.000_000, 0.000_000, 0.000_000, 0.000_000, 0.000_000, 0.000_000, 0.000_000,
    0.000_000, 0.000_000, 0.000_000, 0.000_000, 0.000_000, 0.000_000, 0.000_000, 0.000_000, 0.000_000,
];
