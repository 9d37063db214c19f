//! Core ray tracing renderer.
//!
//! Implements the per-pixel pipeline:
//! - Primary ray through the pixel center
//! - Nearest-hit search over every primitive
//! - Blinn-Phong shading with hard shadows, or the background on a miss
//! - Tone mapping to 8-bit RGBA

use crate::{shading::shade, trace::trace_nearest, Scene, TracerOptions, Viewport};
use sol_math::{Color, LinearColor, Ray};

/// Unclamped radiance seen along `ray`, or `None` if it hits nothing.
pub fn trace_radiance(ray: &Ray, scene: Scene<'_>, options: &TracerOptions) -> Option<LinearColor> {
    trace_nearest(ray, scene.primitives).map(|hit| shade(ray, &hit, scene, options))
}

/// Render a single pixel.
///
/// Misses return `options.background_color` untouched; hits are tone mapped.
pub fn render_pixel(
    options: &TracerOptions,
    viewport: &Viewport,
    scene: Scene<'_>,
    column: u32,
    row: u32,
) -> Color {
    let ray = viewport.primary_ray(column, row);
    match trace_radiance(&ray, scene, options) {
        Some(radiance) => options.tone_mapper.apply(radiance),
        None => options.background_color,
    }
}

/// Rendered image, row-major with the top row first.
#[derive(Debug, Clone, PartialEq)]
pub struct ImageBuffer {
    pub width: u32,
    pub height: u32,
    pub pixels: Vec<Color>,
}

impl ImageBuffer {
    /// Create a new image buffer filled with transparent black.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            pixels: vec![Color::default(); width as usize * height as usize],
        }
    }

    #[inline]
    fn index(&self, x: u32, y: u32) -> usize {
        y as usize * self.width as usize + x as usize
    }

    /// Get the pixel at (x, y).
    pub fn get(&self, x: u32, y: u32) -> Color {
        self.pixels[self.index(x, y)]
    }

    /// Set the pixel at (x, y).
    pub fn set(&mut self, x: u32, y: u32, color: Color) {
        let index = self.index(x, y);
        self.pixels[index] = color;
    }

    /// Interleaved RGBA bytes, `width * height * 4` long.
    pub fn as_rgba(&self) -> &[u8] {
        Color::as_bytes(&self.pixels)
    }

    /// Owned copy of the RGBA bytes, for encoders that take a `Vec<u8>`.
    pub fn to_rgba(&self) -> Vec<u8> {
        self.as_rgba().to_vec()
    }

    pub fn into_pixels(self) -> Vec<Color> {
        self.pixels
    }
}

/// Render the entire scene on the calling thread, row by row.
pub fn render(options: &TracerOptions, scene: Scene<'_>) -> ImageBuffer {
    let viewport = Viewport::new(options);
    let mut image = ImageBuffer::new(options.image_width, options.image_height);

    for y in 0..options.image_height {
        for x in 0..options.image_width {
            image.set(x, y, render_pixel(options, &viewport, scene, x, y));
        }
    }

    log::info!(
        "Rendered {}x{} ({} primitives, {} lights)",
        options.image_width,
        options.image_height,
        scene.primitives.len(),
        scene.lights.len()
    );

    image
}

/// Render straight to interleaved RGBA bytes.
pub fn render_rgba(options: &TracerOptions, scene: Scene<'_>) -> Vec<u8> {
    render(options, scene).to_rgba()
}
