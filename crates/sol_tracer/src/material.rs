//! Surface material for Blinn-Phong shading.

use sol_math::LinearColor;
use serde::{Deserialize, Serialize};

/// Blinn-Phong surface description.
///
/// Materials are immutable once built. A primitive owns its material by value
/// and every ray that hits the primitive reads it through a shared borrow.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Material {
    base_color: LinearColor,
    #[serde(default)]
    ambient_color: LinearColor,
    specular: f32,
    diffuse: f32,
    shininess: f32,
}

impl Material {
    /// Create a new material.
    ///
    /// - `specular`: weight of the specular highlight
    /// - `diffuse`: weight of the Lambert term
    /// - `shininess`: Phong exponent, larger values give tighter highlights
    pub fn new(
        base_color: LinearColor,
        ambient_color: LinearColor,
        specular: f32,
        diffuse: f32,
        shininess: f32,
    ) -> Self {
        Self {
            base_color,
            ambient_color,
            specular,
            diffuse,
            shininess,
        }
    }

    /// Material with no ambient tint.
    pub fn matte(base_color: LinearColor, specular: f32, diffuse: f32, shininess: f32) -> Self {
        Self::new(base_color, LinearColor::BLACK, specular, diffuse, shininess)
    }

    #[inline]
    pub fn base_color(&self) -> LinearColor {
        self.base_color
    }

    /// Stored for scene descriptions; shading derives ambient from
    /// `base_color` and the scene's ambient light instead.
    #[inline]
    pub fn ambient_color(&self) -> LinearColor {
        self.ambient_color
    }

    #[inline]
    pub fn specular(&self) -> f32 {
        self.specular
    }

    #[inline]
    pub fn diffuse(&self) -> f32 {
        self.diffuse
    }

    #[inline]
    pub fn shininess(&self) -> f32 {
        self.shininess
    }
}

impl Default for Material {
    fn default() -> Self {
        Self::new(LinearColor::BLACK, LinearColor::BLACK, 0.0, 0.0, 0.0)
    }
}
