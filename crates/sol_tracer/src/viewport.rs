//! Viewport derivation and primary ray generation.

use crate::TracerOptions;
use sol_math::{Ray, Vec3, Vector3Ext};

/// The virtual image plane, derived once per render from [`TracerOptions`].
///
/// The plane sits at `z = camera_distance`, centered on the Z axis. Pixel
/// rows are numbered top to bottom like the output image, while viewport Y
/// grows upwards from `bottom_left`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    /// Width in world units
    pub width: f32,
    /// Height in world units
    pub height: f32,
    pub pixel_width: f32,
    pub pixel_height: f32,
    /// World-space position of the bottom-left corner
    pub bottom_left: Vec3,
    camera_distance: f32,
    image_height: u32,
}

impl Viewport {
    /// Derive the viewport for a set of options.
    pub fn new(options: &TracerOptions) -> Self {
        let fov = options.clamped_field_of_view();
        if fov != options.field_of_view {
            log::warn!(
                "Field of view {}° outside [0°, {}°], clamped to {}°",
                options.field_of_view,
                crate::options::MAX_FIELD_OF_VIEW,
                fov
            );
        }

        let distance = options.camera_distance;
        let half_width = distance * (fov.to_radians() / 2.0).tan();
        let aspect_ratio = options.image_height as f32 / options.image_width as f32;

        let width = half_width * 2.0;
        let height = width * aspect_ratio;

        let viewport = Self {
            width,
            height,
            pixel_width: width / options.image_width as f32,
            pixel_height: height / options.image_height as f32,
            bottom_left: Vec3::new(-half_width, -height / 2.0, distance),
            camera_distance: distance,
            image_height: options.image_height,
        };

        log::debug!(
            "Viewport {}x{} world units, pixel {}x{}, bottom-left {}",
            viewport.width,
            viewport.height,
            viewport.pixel_width,
            viewport.pixel_height,
            viewport.bottom_left
        );

        viewport
    }

    /// World-space center of pixel (`column`, `row`), row 0 being the top row.
    ///
    /// `row` must be below the image height; debug builds panic otherwise.
    pub fn pixel_center(&self, column: u32, row: u32) -> Vec3 {
        debug_assert!(
            row < self.image_height,
            "row {row} outside image of height {}",
            self.image_height
        );
        let flipped_row = self.image_height - 1 - row;

        let x = self.bottom_left.x + self.pixel_width * column as f32 + self.pixel_width / 2.0;
        let y = self.bottom_left.y + self.pixel_height * flipped_row as f32 + self.pixel_height / 2.0;

        Vec3::new(x, y, self.camera_distance)
    }

    /// Primary ray from the eye through the center of pixel (`column`, `row`).
    ///
    /// The eye is the origin, so the pixel center doubles as the direction.
    pub fn primary_ray(&self, column: u32, row: u32) -> Ray {
        Ray::from_eye(self.pixel_center(column, row).normalized_or_zero())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn options(width: u32, height: u32) -> TracerOptions {
        TracerOptions::new()
            .with_resolution(width, height)
            .with_lens(90.0, 50.0)
    }

    #[test]
    fn test_viewport_dimensions() {
        let viewport = Viewport::new(&options(200, 100));

        // tan(45°) = 1, so the half width equals the camera distance
        assert!((viewport.width - 100.0).abs() < 1e-3);
        assert!((viewport.height - 50.0).abs() < 1e-3);
        assert!((viewport.pixel_width - 0.5).abs() < 1e-5);
        assert!((viewport.pixel_height - 0.5).abs() < 1e-5);
        assert!((viewport.bottom_left - Vec3::new(-50.0, -25.0, 50.0)).length() < 1e-3);
    }

    #[test]
    fn test_fov_is_clamped() {
        let wide = Viewport::new(&options(10, 10).with_lens(179.0, 1.0));
        let max = Viewport::new(&options(10, 10).with_lens(120.0, 1.0));
        assert_eq!(wide, max);
    }

    #[test]
    fn test_pixel_center_flips_rows() {
        let viewport = Viewport::new(&options(2, 2));

        // Row 0 is the top of the image, so its centers have positive Y
        let top_left = viewport.pixel_center(0, 0);
        assert!((top_left - Vec3::new(-25.0, 25.0, 50.0)).length() < 1e-3);

        let bottom_right = viewport.pixel_center(1, 1);
        assert!((bottom_right - Vec3::new(25.0, -25.0, 50.0)).length() < 1e-3);
    }

    #[test]
    fn test_primary_ray_is_normalized() {
        let viewport = Viewport::new(&options(64, 48));
        for (column, row) in [(0, 0), (63, 0), (0, 47), (31, 23), (63, 47)] {
            let ray = viewport.primary_ray(column, row);
            assert_eq!(ray.origin, Vec3::ZERO);
            assert!((ray.direction.length() - 1.0).abs() < 1e-5);
        }
    }

    #[test]
    fn test_center_pixel_looks_down_z() {
        let viewport = Viewport::new(&options(3, 3));
        let ray = viewport.primary_ray(1, 1);
        assert!((ray.direction - Vec3::Z).length() < 1e-5);
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "outside image")]
    fn test_row_past_image_panics_in_debug() {
        let viewport = Viewport::new(&options(4, 4));
        viewport.pixel_center(0, 4);
    }
}
