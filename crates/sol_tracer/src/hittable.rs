//! Intersection contract shared by all primitives.

use crate::{Material, Plane, Sphere};
use serde::{Deserialize, Serialize};
use sol_math::{Interval, Ray, Vec3};

/// Minimum admissible hit distance.
///
/// Rejects self-intersections and hits behind the ray origin.
pub const EPSILON: f32 = 1e-4;

/// Record of a ray-object intersection.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HitRecord {
    /// Distance along the ray to the intersection
    pub distance: f32,
    /// Point of intersection
    pub point: Vec3,
    /// Surface normal at the intersection
    pub normal: Vec3,
}

impl Default for HitRecord {
    fn default() -> Self {
        Self {
            distance: f32::INFINITY,
            point: Vec3::ZERO,
            normal: Vec3::ZERO,
        }
    }
}

/// Anything a ray can be tested against.
///
/// Directions are assumed to be normalized; implementations do not check.
pub trait Hittable {
    /// Nearest intersection whose distance lies in `range`, if any.
    fn hit(&self, ray: &Ray, range: Interval) -> Option<HitRecord>;
}

/// The closed set of scene primitives.
///
/// Dispatch is a single `match` per ray rather than a trait object, so a
/// scene is a flat `&[Primitive]` that every render worker can share.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Primitive {
    Sphere(Sphere),
    Plane(Plane),
}

impl Primitive {
    /// Test the ray against this primitive using the default range `[EPSILON, inf)`.
    #[inline]
    pub fn intersects(&self, ray: &Ray) -> Option<HitRecord> {
        self.intersects_within(ray, Interval::from_min(EPSILON))
    }

    /// Test the ray against this primitive within a custom range.
    #[inline]
    pub fn intersects_within(&self, ray: &Ray, range: Interval) -> Option<HitRecord> {
        match self {
            Primitive::Sphere(sphere) => sphere.hit(ray, range),
            Primitive::Plane(plane) => plane.hit(ray, range),
        }
    }

    #[inline]
    pub fn material(&self) -> &Material {
        match self {
            Primitive::Sphere(sphere) => sphere.material(),
            Primitive::Plane(plane) => plane.material(),
        }
    }

    #[inline]
    pub fn center(&self) -> Vec3 {
        match self {
            Primitive::Sphere(sphere) => sphere.center(),
            Primitive::Plane(plane) => plane.center(),
        }
    }
}

impl From<Sphere> for Primitive {
    fn from(sphere: Sphere) -> Self {
        Primitive::Sphere(sphere)
    }
}

impl From<Plane> for Primitive {
    fn from(plane: Plane) -> Self {
        Primitive::Plane(plane)
    }
}
