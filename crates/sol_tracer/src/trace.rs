//! Nearest-hit search over the flat primitive list.
//!
//! Every ray is tested against every primitive; there is no acceleration
//! structure.

use crate::{hittable::EPSILON, HitRecord, Primitive};
use sol_math::{Interval, Ray};

/// The closest intersection along a ray, and the primitive that produced it.
#[derive(Debug, Clone, Copy)]
pub struct TraceHit<'a> {
    pub record: HitRecord,
    pub primitive: &'a Primitive,
}

/// Find the closest primitive hit by `ray`.
///
/// A later primitive only replaces the current winner when it is strictly
/// closer, so equal distances resolve to the first primitive in slice order.
pub fn trace_nearest<'a>(ray: &Ray, primitives: &'a [Primitive]) -> Option<TraceHit<'a>> {
    let mut closest = None;
    let mut range = Interval::from_min(EPSILON);

    for primitive in primitives {
        if let Some(record) = primitive.intersects_within(ray, range) {
            range = range.with_max(record.distance);
            closest = Some(TraceHit { record, primitive });
        }
    }

    closest
}

/// Whether any primitive blocks `ray` before `max_distance`.
pub fn is_occluded(ray: &Ray, max_distance: f32, primitives: &[Primitive]) -> bool {
    let range = Interval::new(EPSILON, max_distance);
    primitives
        .iter()
        .any(|primitive| primitive.intersects_within(ray, range).is_some())
}
