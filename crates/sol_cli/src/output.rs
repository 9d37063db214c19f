//! PNG export of rendered images.

use anyhow::{anyhow, Context, Result};
use image::RgbaImage;
use sol_tracer::ImageBuffer;
use std::path::Path;

/// Encode the image as PNG at `path`.
pub fn save_png(image: &ImageBuffer, path: &Path) -> Result<()> {
    let rgba = RgbaImage::from_raw(image.width, image.height, image.to_rgba())
        .ok_or_else(|| anyhow!("Pixel buffer does not match {}x{}", image.width, image.height))?;

    rgba.save(path)
        .with_context(|| format!("Failed to write {}", path.display()))?;

    log::info!("Saved {}", path.display());
    Ok(())
}
