//! Point lights.

use sol_math::{LinearColor, Vec3};
use serde::{Deserialize, Serialize};

/// An omnidirectional point light.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Light {
    pub position: Vec3,
    pub color: LinearColor,
    /// Base-10 exponent of the brightness. See [`Light::brightness`].
    pub intensity: f32,
}

impl Light {
    pub fn new(position: Vec3, color: LinearColor, intensity: f32) -> Self {
        Self {
            position,
            color,
            intensity,
        }
    }

    /// Effective brightness, `10^intensity`.
    ///
    /// A small change of `intensity` covers a large dynamic range.
    #[inline]
    pub fn brightness(&self) -> f32 {
        10f32.powf(self.intensity)
    }
}
