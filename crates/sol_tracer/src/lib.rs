//! Sol tracer - CPU Blinn-Phong ray tracing
//!
//! Renders spheres and planes lit by point lights with hard shadows.
//! Every primary ray is tested against every primitive; shading is
//! ambient plus per-light Blinn-Phong, tone mapped to 8-bit RGBA.

mod bucket;
mod hittable;
mod light;
mod material;
mod options;
mod plane;
mod renderer;
mod scene;
mod shading;
mod sphere;
mod tonemap;
mod trace;
mod viewport;

pub use bucket::{
    generate_buckets, render_bucket, render_parallel, Bucket, BucketResult, DEFAULT_BUCKET_SIZE,
};
pub use hittable::{HitRecord, Hittable, Primitive, EPSILON};
pub use light::Light;
pub use material::Material;
pub use options::{OptionsError, TracerOptions, MAX_FIELD_OF_VIEW};
pub use plane::Plane;
pub use renderer::{render, render_pixel, render_rgba, trace_radiance, ImageBuffer};
pub use scene::Scene;
pub use shading::{shade, SHADOW_BIAS};
pub use sphere::Sphere;
pub use tonemap::{aces_filmic, reinhard, ToneMapper};
pub use trace::{is_occluded, trace_nearest, TraceHit};
pub use viewport::Viewport;

/// Re-export the math types used in the public API
pub use sol_math::{Color, Interval, LinearColor, Ray, Vec3, Vector3Ext};
