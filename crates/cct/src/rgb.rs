use std::fmt::Display;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CctError;

/// 8-bit sRGB color, written as `#rrggbb`
#[derive(Debug, Serialize, Deserialize, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[serde(into = "String", try_from = "String")]
pub struct Rgb8 {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn unit_to_u8_clamped(value: f64) -> u8 {
    (value * 255.0).round().clamp(0.0, 255.0) as u8
}

impl Rgb8 {
    #[must_use]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Quantize unit range channels. Out of range values are clamped, NaN
    /// becomes 0.
    #[must_use]
    pub fn from_unit(rgb: [f64; 3]) -> Self {
        rgb.map(unit_to_u8_clamped).into()
    }

    /// Lowercase hex digits, without the leading `#`
    #[must_use]
    pub fn to_hex(&self) -> String {
        hex::encode([self.r, self.g, self.b])
    }
}

impl From<[u8; 3]> for Rgb8 {
    fn from([r, g, b]: [u8; 3]) -> Self {
        Self::new(r, g, b)
    }
}

impl From<Rgb8> for String {
    fn from(value: Rgb8) -> Self {
        value.to_string()
    }
}

impl Display for Rgb8 {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.to_hex())
    }
}

impl FromStr for Rgb8 {
    type Err = CctError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let digits = value.strip_prefix('#').unwrap_or(value);
        if digits.len() != 6 {
            return Err(CctError::InvalidHexColor);
        }
        let mut rgb = [0u8; 3];
        hex::decode_to_slice(digits, &mut rgb)?;
        Ok(rgb.into())
    }
}

impl TryFrom<String> for Rgb8 {
    type Error = CctError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}
