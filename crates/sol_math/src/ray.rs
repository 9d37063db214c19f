use crate::Vec3;

/// A ray in 3D space with an origin and a direction.
///
/// The direction is expected to be normalized by whoever builds the ray.
/// Intersection code relies on this and does not check it.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Ray {
    pub origin: Vec3,
    pub direction: Vec3,
}

impl Ray {
    /// Create a new ray.
    #[inline]
    pub fn new(origin: Vec3, direction: Vec3) -> Self {
        Self { origin, direction }
    }

    /// Create a ray cast from the world origin (the camera eye).
    #[inline]
    pub fn from_eye(direction: Vec3) -> Self {
        Self::new(Vec3::ZERO, direction)
    }

    /// Get the point along the ray at parameter t.
    ///
    /// Returns: origin + t * direction
    #[inline]
    pub fn at(&self, t: f32) -> Vec3 {
        self.origin + self.direction * t
    }
}

impl Default for Ray {
    fn default() -> Self {
        Self::from_eye(Vec3::Z)
    }
}
