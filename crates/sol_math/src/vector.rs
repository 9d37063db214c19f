//! Vector3 helpers layered on top of `glam::Vec3`.
//!
//! glam already provides the component-wise operators and the dot product.
//! This module adds the guarded normalization used throughout the tracer:
//! a vector whose norm is at or below `f32::EPSILON` collapses to zero
//! instead of producing NaN or infinity.

use crate::Vec3;

/// Extra operations on [`Vec3`] used by the tracer.
pub trait Vector3Ext {
    /// Euclidean distance between two points.
    fn distance_to(self, other: Vec3) -> f32;

    /// Normalize in place. Degenerate vectors become [`Vec3::ZERO`].
    fn normalize_in_place(&mut self);

    /// Return a normalized copy. Degenerate vectors become [`Vec3::ZERO`].
    fn normalized_or_zero(self) -> Vec3;
}

impl Vector3Ext for Vec3 {
    #[inline]
    fn distance_to(self, other: Vec3) -> f32 {
        (self - other).length()
    }

    #[inline]
    fn normalize_in_place(&mut self) {
        *self = self.normalized_or_zero();
    }

    #[inline]
    fn normalized_or_zero(self) -> Vec3 {
        let length = self.length();
        if length <= f32::EPSILON {
            return Vec3::ZERO;
        }
        self / length
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    #[test]
    fn test_normalize_unit_length() {
        let mut rng = StdRng::seed_from_u64(42);

        for _ in 0..1000 {
            let v = Vec3::new(
                rng.gen_range(-100.0..100.0),
                rng.gen_range(-100.0..100.0),
                rng.gen_range(-100.0..100.0),
            );
            if v.length() <= f32::EPSILON {
                continue;
            }
            let n = v.normalized_or_zero();
            assert!((n.length() - 1.0).abs() < 1e-5, "|{n}| = {}", n.length());
        }
    }

    #[test]
    fn test_normalize_zero_vector() {
        let mut v = Vec3::ZERO;
        v.normalize_in_place();
        assert_eq!(v, Vec3::ZERO);
        assert!(!v.x.is_nan());
    }

    #[test]
    fn test_normalize_below_epsilon() {
        let v = Vec3::new(f32::EPSILON * 0.25, 0.0, 0.0);
        assert_eq!(v.normalized_or_zero(), Vec3::ZERO);
    }

    #[test]
    fn test_normalize_in_place_keeps_direction() {
        let mut v = Vec3::new(0.0, 3.0, 4.0);
        v.normalize_in_place();
        assert!((v - Vec3::new(0.0, 0.6, 0.8)).length() < 1e-6);
    }

    #[test]
    fn test_distance_to() {
        let a = Vec3::new(1.0, 2.0, 3.0);
        let b = Vec3::new(4.0, 6.0, 3.0);
        assert!((a.distance_to(b) - 5.0).abs() < 1e-6);
        assert_eq!(a.distance_to(a), 0.0);
    }
}
