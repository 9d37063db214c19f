//! Tone mapping from unbounded radiance to display bytes.

use serde::{Deserialize, Serialize};
use sol_math::{Color, Interval, LinearColor};

/// Operator used to squeeze shaded radiance into `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ToneMapper {
    /// Narkowicz's fit of the ACES filmic curve.
    #[default]
    AcesFilmic,
    /// `x / (1 + x)`
    Reinhard,
    /// Plain saturate, no curve.
    Clamp,
}

impl ToneMapper {
    /// Map a single channel into `[0, 1]`.
    #[inline]
    pub fn map(self, x: f32) -> f32 {
        match self {
            ToneMapper::AcesFilmic => aces_filmic(x),
            ToneMapper::Reinhard => reinhard(x),
            ToneMapper::Clamp => saturate(x),
        }
    }

    /// Tone map RGB and quantize to bytes. Alpha is only scaled.
    #[inline]
    pub fn apply(self, color: LinearColor) -> Color {
        color.to_color_with(|x| self.map(x))
    }
}

#[inline]
pub fn saturate(x: f32) -> f32 {
    Interval::UNIT.clamp(x)
}

/// ACES filmic curve, `saturate(x(2.51x + 0.03) / (x(2.43x + 0.59) + 0.14))`.
///
/// The fit rises back towards 1 for large negative input, so negative
/// radiance is treated as black first.
#[inline]
pub fn aces_filmic(x: f32) -> f32 {
    let x = x.max(0.0);
    const A: f32 = 2.51;
    const B: f32 = 0.03;
    const C: f32 = 2.43;
    const D: f32 = 0.59;
    const E: f32 = 0.14;
    saturate((x * (A * x + B)) / (x * (C * x + D) + E))
}

/// Reinhard operator. Negative input maps to 0.
#[inline]
pub fn reinhard(x: f32) -> f32 {
    let x = x.max(0.0);
    saturate(x / (1.0 + x))
}
