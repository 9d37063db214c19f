//! Color models.
//!
//! Two representations are used by the tracer:
//!
//! - [`Color`]: 8-bit RGBA, every operation clamps to `[0, 255]`. This is the
//!   display format handed to image encoders.
//! - [`LinearColor`]: unclamped `f32` RGBA used for all lighting math. Channels
//!   may exceed 1.0 or go negative while shading accumulates; tone mapping
//!   resolves that when converting back to [`Color`].
//!
//! In both forms the arithmetic operators act on RGB only. Alpha is carried
//! through from the left operand, but equality compares all four channels.

use bytemuck::{Pod, Zeroable};
use serde::{Deserialize, Serialize};
use std::ops::{Add, AddAssign, Mul, MulAssign, Sub, SubAssign};

/// Byte-clamped RGBA color.
///
/// `#[repr(C)]` so a `&[Color]` can be viewed as interleaved RGBA bytes.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Pod, Zeroable, Serialize, Deserialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    #[serde(default = "opaque")]
    pub a: u8,
}

fn opaque() -> u8 {
    u8::MAX
}

impl Color {
    pub const BLACK: Color = Color::rgb(0, 0, 0);
    pub const WHITE: Color = Color::rgb(255, 255, 255);

    /// Create a color from all four channels.
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Create an opaque color.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::new(r, g, b, u8::MAX)
    }

    /// The channels as `[r, g, b, a]`.
    pub const fn to_array(self) -> [u8; 4] {
        [self.r, self.g, self.b, self.a]
    }

    /// View a pixel slice as interleaved RGBA bytes without copying.
    pub fn as_bytes(pixels: &[Color]) -> &[u8] {
        bytemuck::cast_slice(pixels)
    }
}

/// Round `value * factor` to the nearest integer and clamp to a byte.
#[inline]
fn scale_channel(value: u8, factor: f32) -> u8 {
    // NaN saturates to 0 through the float-to-int cast
    (f32::from(value) * factor).round().clamp(0.0, 255.0) as u8
}

impl Add for Color {
    type Output = Color;

    fn add(mut self, rhs: Color) -> Color {
        self += rhs;
        self
    }
}

impl AddAssign for Color {
    fn add_assign(&mut self, rhs: Color) {
        self.r = self.r.saturating_add(rhs.r);
        self.g = self.g.saturating_add(rhs.g);
        self.b = self.b.saturating_add(rhs.b);
    }
}

impl Sub for Color {
    type Output = Color;

    fn sub(mut self, rhs: Color) -> Color {
        self -= rhs;
        self
    }
}

impl SubAssign for Color {
    fn sub_assign(&mut self, rhs: Color) {
        self.r = self.r.saturating_sub(rhs.r);
        self.g = self.g.saturating_sub(rhs.g);
        self.b = self.b.saturating_sub(rhs.b);
    }
}

impl Mul<f32> for Color {
    type Output = Color;

    fn mul(mut self, factor: f32) -> Color {
        self *= factor;
        self
    }
}

impl MulAssign<f32> for Color {
    fn mul_assign(&mut self, factor: f32) {
        self.r = scale_channel(self.r, factor);
        self.g = scale_channel(self.g, factor);
        self.b = scale_channel(self.b, factor);
    }
}

/// Channel-wise modulation, `round(a * b / 255)`.
impl Mul for Color {
    type Output = Color;

    fn mul(self, rhs: Color) -> Color {
        let modulate = |a: u8, b: u8| ((u16::from(a) * u16::from(b) + 127) / 255) as u8;
        Color::new(
            modulate(self.r, rhs.r),
            modulate(self.g, rhs.g),
            modulate(self.b, rhs.b),
            self.a,
        )
    }
}

/// Unclamped floating-point RGBA color.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LinearColor {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    #[serde(default = "unit_alpha")]
    pub a: f32,
}

fn unit_alpha() -> f32 {
    1.0
}

impl LinearColor {
    pub const BLACK: LinearColor = LinearColor::rgb(0.0, 0.0, 0.0);
    pub const WHITE: LinearColor = LinearColor::rgb(1.0, 1.0, 1.0);

    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Create an opaque color.
    pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self::new(r, g, b, 1.0)
    }

    /// Convert to bytes, running `map` over R, G and B first.
    ///
    /// `map` is expected to land in `[0, 1]`; the result is scaled by 255,
    /// rounded and clamped. Alpha skips `map` and is only scaled and clamped.
    pub fn to_color_with(self, map: impl Fn(f32) -> f32) -> Color {
        let to_byte = |x: f32| (x * 255.0).round().clamp(0.0, 255.0) as u8;
        Color::new(
            to_byte(map(self.r)),
            to_byte(map(self.g)),
            to_byte(map(self.b)),
            to_byte(self.a),
        )
    }
}

impl Default for LinearColor {
    fn default() -> Self {
        Self::BLACK
    }
}

impl From<Color> for LinearColor {
    fn from(c: Color) -> Self {
        let f = |x: u8| f32::from(x) / 255.0;
        LinearColor::new(f(c.r), f(c.g), f(c.b), f(c.a))
    }
}

impl Add for LinearColor {
    type Output = LinearColor;

    #[inline]
    fn add(self, rhs: LinearColor) -> LinearColor {
        LinearColor::new(self.r + rhs.r, self.g + rhs.g, self.b + rhs.b, self.a)
    }
}

impl AddAssign for LinearColor {
    #[inline]
    fn add_assign(&mut self, rhs: LinearColor) {
        *self = *self + rhs;
    }
}

impl Sub for LinearColor {
    type Output = LinearColor;

    #[inline]
    fn sub(self, rhs: LinearColor) -> LinearColor {
        LinearColor::new(self.r - rhs.r, self.g - rhs.g, self.b - rhs.b, self.a)
    }
}

impl SubAssign for LinearColor {
    #[inline]
    fn sub_assign(&mut self, rhs: LinearColor) {
        *self = *self - rhs;
    }
}

impl Mul for LinearColor {
    type Output = LinearColor;

    #[inline]
    fn mul(self, rhs: LinearColor) -> LinearColor {
        LinearColor::new(self.r * rhs.r, self.g * rhs.g, self.b * rhs.b, self.a)
    }
}

impl Mul<f32> for LinearColor {
    type Output = LinearColor;

    #[inline]
    fn mul(self, s: f32) -> LinearColor {
        LinearColor::new(self.r * s, self.g * s, self.b * s, self.a)
    }
}

impl MulAssign<f32> for LinearColor {
    #[inline]
    fn mul_assign(&mut self, s: f32) {
        *self = *self * s;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_clamps_to_255() {
        let c = Color::new(250, 250, 250, 255) + Color::new(10, 10, 10, 0);
        assert_eq!(c, Color::new(255, 255, 255, 255));
    }

    #[test]
    fn test_sub_clamps_to_0() {
        let c = Color::new(5, 5, 5, 255) - Color::new(10, 10, 10, 0);
        assert_eq!(c, Color::new(0, 0, 0, 255));
    }

    #[test]
    fn test_alpha_carried_through() {
        let mut c = Color::new(100, 100, 100, 42);
        c += Color::new(1, 2, 3, 200);
        c -= Color::new(1, 1, 1, 200);
        c *= 2.0;
        assert_eq!(c, Color::new(200, 202, 204, 42));
    }

    #[test]
    fn test_scalar_mul_rounds_and_clamps() {
        assert_eq!(Color::rgb(10, 11, 200) * 1.5, Color::rgb(15, 17, 255));
        assert_eq!(Color::rgb(10, 10, 10) * -1.0, Color::rgb(0, 0, 0));
        assert_eq!(Color::rgb(3, 3, 3) * 0.5, Color::rgb(2, 2, 2));
    }

    #[test]
    fn test_equality_includes_alpha() {
        assert_ne!(Color::new(1, 2, 3, 4), Color::new(1, 2, 3, 5));
        assert_eq!(Color::new(1, 2, 3, 4), Color::new(1, 2, 3, 4));
    }

    #[test]
    fn test_color_modulate() {
        let c = Color::new(255, 128, 0, 9) * Color::rgb(255, 255, 255);
        assert_eq!(c, Color::new(255, 128, 0, 9));
        assert_eq!(Color::WHITE * Color::BLACK, Color::BLACK);
    }

    #[test]
    fn test_as_bytes_interleaved() {
        let pixels = [Color::new(1, 2, 3, 4), Color::new(5, 6, 7, 8)];
        assert_eq!(Color::as_bytes(&pixels), &[1, 2, 3, 4, 5, 6, 7, 8]);
    }

    #[test]
    fn test_linear_is_unclamped() {
        let c = LinearColor::rgb(0.8, 0.1, 0.5) + LinearColor::rgb(0.8, -0.5, 0.0);
        assert!((c.r - 1.6).abs() < 1e-6);
        assert!((c.g + 0.4).abs() < 1e-6);

        let d = c - LinearColor::rgb(2.0, 0.0, 0.0);
        assert!((d.r + 0.4).abs() < 1e-6);
    }

    #[test]
    fn test_linear_modulate() {
        let c = LinearColor::new(0.5, 1.0, 2.0, 0.25) * LinearColor::rgb(0.5, 0.5, 0.5);
        assert_eq!(c, LinearColor::new(0.25, 0.5, 1.0, 0.25));
        assert_eq!(c * 4.0, LinearColor::new(1.0, 2.0, 4.0, 0.25));
    }

    #[test]
    fn test_from_color() {
        let c = LinearColor::from(Color::new(255, 0, 51, 255));
        assert_eq!(c, LinearColor::new(1.0, 0.0, 0.2, 1.0));
    }

    #[test]
    fn test_to_color_with_identity() {
        let c = LinearColor::new(1.0, 0.5, -3.0, 2.0).to_color_with(|x| x);
        assert_eq!(c, Color::new(255, 128, 0, 255));
    }
}
