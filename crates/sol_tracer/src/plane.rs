//! Plane primitive.

use crate::{
    hittable::{HitRecord, Hittable},
    Material,
};
use serde::{Deserialize, Serialize};
use sol_math::{Interval, Ray, Vec3};

/// A plane through `center` with a fixed `normal`.
///
/// `half_width` and `half_depth` describe a finite extent around `center`,
/// but intersection does not enforce them yet: the plane behaves as infinite.
/// The normal is used exactly as given, so supply a unit vector.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Plane {
    center: Vec3,
    normal: Vec3,
    material: Material,
    #[serde(default)]
    half_width: f32,
    #[serde(default)]
    half_depth: f32,
}

impl Plane {
    /// Create a new plane with no recorded extent.
    pub fn new(center: Vec3, normal: Vec3, material: Material) -> Self {
        Self {
            center,
            normal,
            material,
            half_width: 0.0,
            half_depth: 0.0,
        }
    }

    /// Record the plane's half extents.
    pub fn with_extent(mut self, half_width: f32, half_depth: f32) -> Self {
        self.half_width = half_width;
        self.half_depth = half_depth;
        self
    }

    #[inline]
    pub fn center(&self) -> Vec3 {
        self.center
    }

    #[inline]
    pub fn normal(&self) -> Vec3 {
        self.normal
    }

    #[inline]
    pub fn material(&self) -> &Material {
        &self.material
    }

    pub fn half_width(&self) -> f32 {
        self.half_width
    }

    pub fn half_depth(&self) -> f32 {
        self.half_depth
    }
}

impl Hittable for Plane {
    fn hit(&self, ray: &Ray, range: Interval) -> Option<HitRecord> {
        let denominator = self.normal.dot(ray.direction);

        // Parallel to the surface, never meets it
        if denominator.abs() < f32::EPSILON {
            return None;
        }

        let distance = (self.center - ray.origin).dot(self.normal) / denominator;
        if !range.admits(distance) {
            return None;
        }

        // TODO: reject hits outside half_width/half_depth once finite planes are supported
        Some(HitRecord {
            distance,
            point: ray.at(distance),
            normal: self.normal,
        })
    }
}
