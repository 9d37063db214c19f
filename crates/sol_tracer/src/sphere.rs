//! Sphere primitive for ray tracing.

use crate::{
    hittable::{HitRecord, Hittable},
    Material,
};
use serde::{Deserialize, Serialize};
use sol_math::{Interval, Ray, Vec3, Vector3Ext};

/// A sphere primitive.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Sphere {
    center: Vec3,
    radius: f32,
    material: Material,
}

impl Sphere {
    /// Create a new sphere. Negative radii are clamped to zero.
    pub fn new(center: Vec3, radius: f32, material: Material) -> Self {
        Self {
            center,
            radius: radius.max(0.0),
            material,
        }
    }

    #[inline]
    pub fn center(&self) -> Vec3 {
        self.center
    }

    #[inline]
    pub fn radius(&self) -> f32 {
        self.radius
    }

    #[inline]
    pub fn material(&self) -> &Material {
        &self.material
    }
}

impl Hittable for Sphere {
    fn hit(&self, ray: &Ray, range: Interval) -> Option<HitRecord> {
        // For rays cast from the eye this is just -center
        let oc = ray.origin - self.center;

        // The quadratic's `a` is 1 for a normalized direction, and `b` is halved
        let b = ray.direction.dot(oc);
        let c = oc.length_squared() - self.radius * self.radius;

        let discriminant = b * b - c;
        // Grazing rays count as misses
        if discriminant < f32::EPSILON {
            return None;
        }

        let sqrtd = discriminant.sqrt();

        // Prefer the near root; fall back to the far one when the origin is inside
        let mut root = -b - sqrtd;
        if root < range.min {
            root = -b + sqrtd;
        }
        if !range.admits(root) {
            return None;
        }

        let point = ray.at(root);
        Some(HitRecord {
            distance: root,
            point,
            normal: (point - self.center).normalized_or_zero(),
        })
    }
}
