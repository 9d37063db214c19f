//! Blinn-Phong shading with hard shadows.

use crate::{trace::is_occluded, Light, Scene, TraceHit, TracerOptions};
use sol_math::{LinearColor, Ray, Vector3Ext};

/// Offset applied along the shadow ray before tracing it, so the ray does
/// not immediately re-hit the surface it starts on.
pub const SHADOW_BIAS: f32 = 1e-3;

/// Radiance leaving `hit` towards the eye along `ray`.
///
/// The result is the ambient term plus one diffuse and specular term per
/// unoccluded light. It is not clamped.
pub fn shade(
    ray: &Ray,
    hit: &TraceHit<'_>,
    scene: Scene<'_>,
    options: &TracerOptions,
) -> LinearColor {
    let material = hit.primitive.material();

    let mut color = material.base_color() * options.ambient_light;
    for light in scene.lights {
        color += light_contribution(ray, hit, light, scene);
    }
    color
}

/// Diffuse plus specular contribution of a single light.
///
/// Returns black when anything in the scene sits between the surface and
/// the light; occlusion is all or nothing. A light sitting on the surface
/// point has no direction and contributes nothing either.
fn light_contribution(
    ray: &Ray,
    hit: &TraceHit<'_>,
    light: &Light,
    scene: Scene<'_>,
) -> LinearColor {
    let material = hit.primitive.material();
    let point = hit.record.point;
    let normal = hit.record.normal;

    let distance = point.distance_to(light.position);
    if distance <= f32::EPSILON {
        return LinearColor::BLACK;
    }

    let to_light = (light.position - point).normalized_or_zero();
    let shadow_origin = point + to_light * SHADOW_BIAS;
    let shadow_ray = Ray::new(shadow_origin, to_light);

    if is_occluded(&shadow_ray, shadow_origin.distance_to(light.position), scene.primitives) {
        return LinearColor::BLACK;
    }

    let attenuation = light.brightness() / (distance * distance);

    let lambert = to_light.dot(normal).max(0.0);
    let diffuse = light.color
        * (lambert * attenuation * material.diffuse())
        * material.base_color();

    let halfway = (to_light + ray.direction).normalized_or_zero();
    let highlight = to_light.dot(halfway).max(0.0).powf(material.shininess());
    let specular = light.color * (highlight * attenuation * material.specular());

    diffuse + specular
}
