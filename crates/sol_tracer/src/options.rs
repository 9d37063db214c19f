//! Render options.

use crate::ToneMapper;
use serde::{Deserialize, Serialize};
use sol_math::{Color, LinearColor};
use thiserror::Error;

/// Widest field of view accepted, in degrees. Larger values are clamped.
pub const MAX_FIELD_OF_VIEW: f32 = 120.0;

/// Errors reported by [`TracerOptions::validate`].
#[derive(Error, Debug, Clone, PartialEq)]
pub enum OptionsError {
    #[error("Image resolution must be positive, got {width}x{height}")]
    EmptyImage { width: u32, height: u32 },

    #[error("Camera distance must be positive and finite, got {0}")]
    InvalidCameraDistance(f32),

    #[error("Field of view must be finite, got {0}")]
    InvalidFieldOfView(f32),
}

/// Options for a single render.
///
/// The eye sits at the origin looking down +Z with +Y up. The image plane
/// (viewport) lies at `z = camera_distance`, its width set by the field of
/// view and its height by the image aspect ratio.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TracerOptions {
    /// Distance from the eye to the viewport, in world units
    pub camera_distance: f32,
    /// Horizontal field of view in degrees, clamped to [0, 120] when used
    pub field_of_view: f32,
    pub image_width: u32,
    pub image_height: u32,
    /// Written verbatim for rays that hit nothing
    pub background_color: Color,
    /// Multiplied with a surface's base color to give its ambient term
    pub ambient_light: LinearColor,
    pub tone_mapper: ToneMapper,
}

impl Default for TracerOptions {
    fn default() -> Self {
        Self {
            camera_distance: 50.0,
            field_of_view: 90.0,
            image_width: 1280,
            image_height: 720,
            background_color: Color::rgb(10, 10, 10),
            ambient_light: LinearColor::rgb(0.2, 0.2, 0.2),
            tone_mapper: ToneMapper::default(),
        }
    }
}

impl TracerOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set image resolution.
    pub fn with_resolution(mut self, width: u32, height: u32) -> Self {
        self.image_width = width;
        self.image_height = height;
        self
    }

    /// Set field of view (degrees) and camera distance.
    pub fn with_lens(mut self, field_of_view: f32, camera_distance: f32) -> Self {
        self.field_of_view = field_of_view;
        self.camera_distance = camera_distance;
        self
    }

    /// Set background color.
    pub fn with_background(mut self, color: Color) -> Self {
        self.background_color = color;
        self
    }

    /// Set ambient light color.
    pub fn with_ambient_light(mut self, color: LinearColor) -> Self {
        self.ambient_light = color;
        self
    }

    pub fn with_tone_mapper(mut self, tone_mapper: ToneMapper) -> Self {
        self.tone_mapper = tone_mapper;
        self
    }

    /// Field of view clamped to `[0, MAX_FIELD_OF_VIEW]` degrees.
    pub fn clamped_field_of_view(&self) -> f32 {
        self.field_of_view.clamp(0.0, MAX_FIELD_OF_VIEW)
    }

    /// Number of pixels in the output image.
    pub fn pixel_count(&self) -> usize {
        self.image_width as usize * self.image_height as usize
    }

    /// Check the options describe a renderable image.
    ///
    /// Out-of-range fields of view are not errors; they are clamped.
    pub fn validate(&self) -> Result<(), OptionsError> {
        if self.image_width == 0 || self.image_height == 0 {
            return Err(OptionsError::EmptyImage {
                width: self.image_width,
                height: self.image_height,
            });
        }
        if !self.camera_distance.is_finite() || self.camera_distance <= 0.0 {
            return Err(OptionsError::InvalidCameraDistance(self.camera_distance));
        }
        if !self.field_of_view.is_finite() {
            return Err(OptionsError::InvalidFieldOfView(self.field_of_view));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fov_clamp() {
        let options = TracerOptions::new().with_lens(170.0, 50.0);
        assert_eq!(options.clamped_field_of_view(), MAX_FIELD_OF_VIEW);

        let options = TracerOptions::new().with_lens(-10.0, 50.0);
        assert_eq!(options.clamped_field_of_view(), 0.0);

        let options = TracerOptions::new().with_lens(60.0, 50.0);
        assert_eq!(options.clamped_field_of_view(), 60.0);
    }

    #[test]
    fn test_validate() {
        assert!(TracerOptions::default().validate().is_ok());
        assert!(TracerOptions::new().with_lens(500.0, 1.0).validate().is_ok());

        assert_eq!(
            TracerOptions::new().with_resolution(0, 10).validate(),
            Err(OptionsError::EmptyImage { width: 0, height: 10 })
        );
        assert_eq!(
            TracerOptions::new().with_lens(90.0, 0.0).validate(),
            Err(OptionsError::InvalidCameraDistance(0.0))
        );
        assert!(matches!(
            TracerOptions::new().with_lens(f32::NAN, 10.0).validate(),
            Err(OptionsError::InvalidFieldOfView(_))
        ));
    }

    #[test]
    fn test_error_message() {
        let err = TracerOptions::new().with_resolution(0, 0).validate().unwrap_err();
        assert_eq!(err.to_string(), "Image resolution must be positive, got 0x0");
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let options: TracerOptions =
            serde_json::from_str(r#"{ "image_width": 64, "tone_mapper": "reinhard" }"#).unwrap();

        assert_eq!(options.image_width, 64);
        assert_eq!(options.image_height, 720);
        assert_eq!(options.tone_mapper, ToneMapper::Reinhard);
        assert_eq!(options.background_color, Color::rgb(10, 10, 10));
    }
}
