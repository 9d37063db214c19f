//! Bucket-based tile rendering.
//!
//! Divides the image into tiles (buckets) that can be rendered
//! independently and in parallel using rayon. Every bucket reads the
//! same borrowed scene, so no locking is involved.

use crate::renderer::{render_pixel, ImageBuffer};
use crate::{Scene, TracerOptions, Viewport};
use rayon::prelude::*;
use sol_math::Color;

/// A rectangular region of the image to render.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bucket {
    /// X coordinate of bucket's top-left corner
    pub x: u32,
    /// Y coordinate of bucket's top-left corner
    pub y: u32,
    /// Width of the bucket in pixels
    pub width: u32,
    /// Height of the bucket in pixels
    pub height: u32,
    /// Index of this bucket in the render order
    pub index: usize,
}

impl Bucket {
    /// Create a new bucket.
    pub fn new(x: u32, y: u32, width: u32, height: u32, index: usize) -> Self {
        Self {
            x,
            y,
            width,
            height,
            index,
        }
    }

    /// Get the total number of pixels in this bucket.
    pub fn pixel_count(&self) -> u32 {
        self.width * self.height
    }

    /// Squared distance from this bucket's middle to the image point (`cx`, `cy`).
    fn distance_squared_to(&self, cx: f32, cy: f32) -> f32 {
        let dx = self.x as f32 + self.width as f32 / 2.0 - cx;
        let dy = self.y as f32 + self.height as f32 / 2.0 - cy;
        dx * dx + dy * dy
    }
}

/// Default bucket size in pixels.
pub const DEFAULT_BUCKET_SIZE: u32 = 64;

/// Tile a `width` x `height` image into buckets, center first.
///
/// Edge buckets shrink to fit the image. A `bucket_size` of zero is
/// treated as one. `index` follows the returned order.
pub fn generate_buckets(width: u32, height: u32, bucket_size: u32) -> Vec<Bucket> {
    let size = bucket_size.max(1);

    let mut buckets: Vec<Bucket> = (0..height)
        .step_by(size as usize)
        .flat_map(|y| {
            (0..width).step_by(size as usize).map(move |x| {
                Bucket::new(x, y, size.min(width - x), size.min(height - y), 0)
            })
        })
        .collect();

    let (cx, cy) = (width as f32 / 2.0, height as f32 / 2.0);
    buckets.sort_by(|a, b| {
        a.distance_squared_to(cx, cy)
            .total_cmp(&b.distance_squared_to(cx, cy))
    });

    for (index, bucket) in buckets.iter_mut().enumerate() {
        bucket.index = index;
    }
    buckets
}

/// Result of rendering a bucket.
#[derive(Debug, Clone)]
pub struct BucketResult {
    /// The bucket that was rendered
    pub bucket: Bucket,
    /// Pixel colors in row-major order
    pub pixels: Vec<Color>,
}

impl BucketResult {
    /// Copy this bucket's pixels into their place in `image`.
    pub fn write_into(&self, image: &mut ImageBuffer) {
        let rows = self.pixels.chunks_exact(self.bucket.width as usize);
        for (local_y, row) in rows.enumerate() {
            let y = self.bucket.y + local_y as u32;
            for (local_x, &color) in row.iter().enumerate() {
                image.set(self.bucket.x + local_x as u32, y, color);
            }
        }
    }
}

/// Render a single bucket.
///
/// Returns pixels in row-major order within the bucket.
pub fn render_bucket(
    bucket: &Bucket,
    options: &TracerOptions,
    viewport: &Viewport,
    scene: Scene<'_>,
) -> BucketResult {
    let mut pixels = Vec::with_capacity(bucket.pixel_count() as usize);

    for local_y in 0..bucket.height {
        for local_x in 0..bucket.width {
            let x = bucket.x + local_x;
            let y = bucket.y + local_y;
            pixels.push(render_pixel(options, viewport, scene, x, y));
        }
    }

    BucketResult {
        bucket: *bucket,
        pixels,
    }
}

/// Render the entire scene on the rayon thread pool.
///
/// Produces the same image as [`crate::render`], bucket by bucket.
pub fn render_parallel(options: &TracerOptions, scene: Scene<'_>, bucket_size: u32) -> ImageBuffer {
    let viewport = Viewport::new(options);
    let buckets = generate_buckets(options.image_width, options.image_height, bucket_size);

    log::debug!(
        "Rendering {} buckets of up to {}px on {} threads",
        buckets.len(),
        bucket_size,
        rayon::current_num_threads()
    );

    let results: Vec<BucketResult> = buckets
        .par_iter()
        .map(|bucket| render_bucket(bucket, options, &viewport, scene))
        .collect();

    let mut image = ImageBuffer::new(options.image_width, options.image_height);
    for result in &results {
        result.write_into(&mut image);
    }

    log::info!(
        "Rendered {}x{} in {} buckets ({} primitives, {} lights)",
        options.image_width,
        options.image_height,
        results.len(),
        scene.primitives.len(),
        scene.lights.len()
    );

    image
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{render, Light, Material, Plane, Primitive, Sphere};
    use sol_math::{LinearColor, Vec3};

    #[test]
    fn test_generate_buckets_exact_fit() {
        let buckets = generate_buckets(128, 128, 64);
        assert_eq!(buckets.len(), 4); // 2x2 grid

        // Total pixels should equal image size
        let total_pixels: u32 = buckets.iter().map(|b| b.pixel_count()).sum();
        assert_eq!(total_pixels, 128 * 128);
    }

    #[test]
    fn test_generate_buckets_partial_fit() {
        let buckets = generate_buckets(100, 70, 64);
        assert_eq!(buckets.len(), 4); // 2x2 grid with partial buckets

        let total_pixels: u32 = buckets.iter().map(|b| b.pixel_count()).sum();
        assert_eq!(total_pixels, 100 * 70);
    }

    #[test]
    fn test_spiral_order() {
        let buckets = generate_buckets(192, 192, 64);
        assert_eq!(buckets.len(), 9); // 3x3 grid

        // First bucket should be the center one
        let first = &buckets[0];
        assert_eq!(first.x, 64);
        assert_eq!(first.y, 64);
        assert!(buckets.iter().enumerate().all(|(i, b)| b.index == i));
    }

    #[test]
    fn test_buckets_move_outwards() {
        let buckets = generate_buckets(300, 130, 32);
        let distances: Vec<f32> = buckets
            .iter()
            .map(|b| b.distance_squared_to(150.0, 65.0))
            .collect();
        assert!(distances.windows(2).all(|pair| pair[0] <= pair[1]));
    }

    #[test]
    fn test_zero_bucket_size() {
        let buckets = generate_buckets(3, 2, 0);
        assert_eq!(buckets.len(), 6);
    }

    #[test]
    fn test_parallel_matches_sequential() {
        let primitives: Vec<Primitive> = vec![
            Sphere::new(
                Vec3::new(-20.0, 10.0, 100.0),
                5.0,
                Material::matte(LinearColor::rgb(0.08, 0.9, 0.04), 1.0, 0.5, 4.0),
            )
            .into(),
            Sphere::new(
                Vec3::new(0.0, 0.0, 220.0),
                45.0,
                Material::matte(LinearColor::rgb(0.86, 0.59, 0.08), 1.0, 0.5, 4.0),
            )
            .into(),
            Plane::new(
                Vec3::new(0.0, -30.0, 0.0),
                Vec3::Y,
                Material::matte(LinearColor::rgb(0.86, 0.78, 0.86), 1.0, 0.5, 4.0),
            )
            .into(),
        ];
        let lights = vec![Light::new(Vec3::new(40.0, 80.0, 120.0), LinearColor::WHITE, 4.0)];
        let options = TracerOptions::new().with_resolution(37, 23);
        let scene = Scene::new(&primitives, &lights);

        let sequential = render(&options, scene);
        let parallel = render_parallel(&options, scene, 8);

        assert_eq!(sequential, parallel);
    }
}
