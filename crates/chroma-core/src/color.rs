//! Color value types: [`Hsb`] and [`Rgb`].
//!
//! # Normalization policy
//!
//! UI-driven inputs are normalized once, at construction: hue wraps
//! modulo 1 (the wheel seam is silent, not an error) and saturation,
//! brightness, and alpha clamp to [0, 1]. RGB components are *not*
//! clamped - wide-gamut buffers legitimately carry values outside the
//! unit range, and the gamut classifier depends on seeing them.

use crate::Gamut;

/// A color in cylindrical hue/saturation/brightness form, as composed by
/// the wheel-and-slider picker.
///
/// Hue is a fraction of the full circle in [0, 1) with 0 = red.
///
/// # Example
///
/// ```
/// use chroma_core::Hsb;
///
/// // Hue wraps, saturation clamps
/// let c = Hsb::new(1.25, 1.7, 1.0, 1.0);
/// assert!((c.h - 0.25).abs() < 1e-6);
/// assert_eq!(c.s, 1.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Hsb {
    /// Hue as a fraction of the full circle, in [0, 1). 0 = red.
    pub h: f32,
    /// Saturation in [0, 1].
    pub s: f32,
    /// Brightness in [0, 1].
    pub b: f32,
    /// Alpha in [0, 1].
    pub a: f32,
}

impl Hsb {
    /// Creates a new HSB color, wrapping hue and clamping the rest.
    #[inline]
    pub fn new(h: f32, s: f32, b: f32, a: f32) -> Self {
        Self {
            h: h.rem_euclid(1.0),
            s: s.clamp(0.0, 1.0),
            b: b.clamp(0.0, 1.0),
            a: a.clamp(0.0, 1.0),
        }
    }

    /// Creates an HSB color from the picker's wheel angle.
    ///
    /// The wheel reports degrees counter-clockwise from 3 o'clock, so
    /// 12 o'clock is 90 degrees and maps to hue 0.25. Angles outside
    /// [0, 360) wrap.
    ///
    /// # Example
    ///
    /// ```
    /// use chroma_core::Hsb;
    ///
    /// let c = Hsb::from_wheel_angle(90.0, 1.0, 1.0);
    /// assert!((c.h - 0.25).abs() < 1e-6);
    /// ```
    #[inline]
    pub fn from_wheel_angle(degrees: f32, saturation: f32, brightness: f32) -> Self {
        Self::new(degrees.rem_euclid(360.0) / 360.0, saturation, brightness, 1.0)
    }

    /// Hue in degrees, in [0, 360).
    #[inline]
    pub fn hue_degrees(self) -> f32 {
        self.h * 360.0
    }

    /// Compares two colors for picker purposes, within a tolerance.
    ///
    /// Only hue and saturation participate: the chromaticity plot is
    /// brightness-invariant, and alpha never affects position. Hue
    /// distance is measured around the wheel, so 0.999 and 0.001 are
    /// close.
    pub fn approx_eq(self, other: Self, tolerance: f32) -> bool {
        let dh = (self.h - other.h).abs();
        let hue_dist = dh.min(1.0 - dh);
        hue_dist <= tolerance && (self.s - other.s).abs() <= tolerance
    }
}

/// A linear RGB color tagged with the gamut it was produced in.
///
/// Components are nominally in [0, 1], but values from a wide-gamut
/// working buffer may fall outside that range; they are deliberately
/// left unclamped so the gamut classifier can see them.
///
/// # Example
///
/// ```
/// use chroma_core::{Gamut, Rgb};
///
/// let red = Rgb::new(1.0, 0.0, 0.0, 1.0, Gamut::Srgb);
/// assert_eq!(red.to_hex(), 0xFF0000);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rgb {
    /// Red component.
    pub r: f32,
    /// Green component.
    pub g: f32,
    /// Blue component.
    pub b: f32,
    /// Alpha in [0, 1].
    pub a: f32,
    /// The gamut whose primaries this color is expressed in.
    pub gamut: Gamut,
}

impl Rgb {
    /// Creates a new RGB color. Components are not clamped.
    #[inline]
    pub const fn new(r: f32, g: f32, b: f32, a: f32, gamut: Gamut) -> Self {
        Self { r, g, b, a, gamut }
    }

    /// Creates a color from a `0xRRGGBB` hex value, with alpha 1.
    ///
    /// # Example
    ///
    /// ```
    /// use chroma_core::{Gamut, Rgb};
    ///
    /// let c = Rgb::from_hex(0xFF8040, Gamut::Srgb);
    /// assert_eq!(c.components_u8(), [255, 128, 64]);
    /// ```
    #[inline]
    pub fn from_hex(hex: u32, gamut: Gamut) -> Self {
        let r = ((hex >> 16) & 0xFF) as f32 / 255.0;
        let g = ((hex >> 8) & 0xFF) as f32 / 255.0;
        let b = (hex & 0xFF) as f32 / 255.0;
        Self::new(r, g, b, 1.0, gamut)
    }

    /// Packs the color into a `0xRRGGBB` hex value.
    ///
    /// Components are clamped to [0, 1] for presentation; alpha is not
    /// encoded.
    #[inline]
    pub fn to_hex(self) -> u32 {
        let [r, g, b] = self.components_u8();
        (r as u32) << 16 | (g as u32) << 8 | b as u32
    }

    /// RGB components in the 0-255 presentation range, clamped.
    #[inline]
    pub fn components_u8(self) -> [u8; 3] {
        [
            (self.r.clamp(0.0, 1.0) * 255.0).round() as u8,
            (self.g.clamp(0.0, 1.0) * 255.0).round() as u8,
            (self.b.clamp(0.0, 1.0) * 255.0).round() as u8,
        ]
    }

    /// Components as an RGBA array, dropping the gamut tag.
    #[inline]
    pub const fn to_array(self) -> [f32; 4] {
        [self.r, self.g, self.b, self.a]
    }

    /// Builds a color from an RGBA array and a gamut tag.
    #[inline]
    pub const fn from_array(rgba: [f32; 4], gamut: Gamut) -> Self {
        Self::new(rgba[0], rgba[1], rgba[2], rgba[3], gamut)
    }

    /// Whether every color channel lies within [0, 1].
    ///
    /// NaN components count as out of range.
    #[inline]
    pub fn in_unit_range(self) -> bool {
        (0.0..=1.0).contains(&self.r)
            && (0.0..=1.0).contains(&self.g)
            && (0.0..=1.0).contains(&self.b)
    }
}
