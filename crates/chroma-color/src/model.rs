//! HSB/RGB/xyY conversion functions.
//!
//! All conversions are pure and reentrant. HSB-to-RGB uses the standard
//! six-sector formula and is independent of the gamut; the output merely
//! reinterprets the components in the requested gamut's primaries, which
//! is how the picker composes wide-gamut colors.

use chroma_core::{Gamut, Hsb, Rgb};
use chroma_math::Vec3;

use crate::gamut_matrix;

// ============================================================================
// Luminance
// ============================================================================

/// Perceptual luminance weight for the red channel.
///
/// These are the desaturation weights of the camera filter, chosen for
/// perceived-brightness-preserving gray: `L = 0.3*R + 0.69*G + 0.11*B`.
pub const LUMA_R: f32 = 0.3;

/// Perceptual luminance weight for the green channel.
pub const LUMA_G: f32 = 0.69;

/// Perceptual luminance weight for the blue channel.
pub const LUMA_B: f32 = 0.11;

/// Luminance weights as an array `[R, G, B]`.
pub const LUMA: [f32; 3] = [LUMA_R, LUMA_G, LUMA_B];

/// Sum of the raw luminance weights.
///
/// The raw weights add up to 1.1; [`luminance`] divides by this so that
/// white keeps unit luminance and gray pixels are fixed points of the
/// desaturation filter.
pub const LUMA_SUM: f32 = LUMA_R + LUMA_G + LUMA_B;

/// Perceptual luminance of an RGB triple.
///
/// Weighted sum with the weights normalized to one: white maps to
/// luminance 1 and any gray (v, v, v) maps to v, which is what makes
/// re-filtering an already desaturated frame a no-op.
///
/// # Example
///
/// ```
/// use chroma_color::luminance;
///
/// assert!((luminance([1.0, 1.0, 1.0]) - 1.0).abs() < 1e-6);
/// assert_eq!(luminance([0.0, 0.0, 0.0]), 0.0);
/// ```
#[inline]
pub fn luminance(rgb: [f32; 3]) -> f32 {
    (rgb[0] * LUMA_R + rgb[1] * LUMA_G + rgb[2] * LUMA_B) / LUMA_SUM
}

// ============================================================================
// Chromaticity
// ============================================================================

/// Threshold below which X+Y+Z is treated as zero (pure black).
const BLACK_DENOM_EPSILON: f32 = 1e-7;

/// A CIE 1931 chromaticity coordinate.
///
/// Only x and y are stored; z is derived as `1 - x - y`, so the
/// invariant x + y + z = 1 holds by construction. Luminance (Y) is
/// intentionally omitted - the plot assumes full luminosity.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Chromaticity {
    /// CIE x coordinate.
    pub x: f32,
    /// CIE y coordinate.
    pub y: f32,
}

impl Chromaticity {
    /// Creates a chromaticity coordinate.
    #[inline]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Derived z coordinate, `1 - x - y`.
    #[inline]
    pub fn z(self) -> f32 {
        1.0 - self.x - self.y
    }

    /// The white-point chromaticity of a gamut.
    #[inline]
    pub fn white_of(gamut: Gamut) -> Self {
        let (x, y) = gamut.white_point();
        Self::new(x, y)
    }
}

/// Converts a gamut-tagged RGB color to CIE xy chromaticity.
///
/// Multiplies `[R, G, B]` by the gamut's fixed matrix to get tristimulus
/// `[X, Y, Z]`, then normalizes: `x = X/(X+Y+Z)`, `y = Y/(X+Y+Z)`.
///
/// # Pure black
///
/// When X+Y+Z is zero the normalization is undefined (0/0). The defined
/// fallback is the gamut's white-point chromaticity, which keeps the
/// plot handle on-diagram and never produces NaN or infinity.
///
/// # Example
///
/// ```
/// use chroma_core::{Gamut, Rgb};
/// use chroma_color::to_chromaticity;
///
/// let red = Rgb::new(1.0, 0.0, 0.0, 1.0, Gamut::Srgb);
/// let xy = to_chromaticity(red);
/// assert!((xy.x - 0.64).abs() < 0.01);
/// ```
pub fn to_chromaticity(color: Rgb) -> Chromaticity {
    let xyz = gamut_matrix(color.gamut) * Vec3::new(color.r, color.g, color.b);
    let denom = xyz.sum();
    if denom.abs() <= BLACK_DENOM_EPSILON {
        return Chromaticity::white_of(color.gamut);
    }
    Chromaticity::new(xyz.x / denom, xyz.y / denom)
}

// ============================================================================
// HSB <-> RGB
// ============================================================================

/// Converts an HSB color to RGB in the given gamut.
///
/// Standard six-sector hue circle: each 60-degree sector blends between
/// two primaries. The [`Hsb`] constructor already wrapped hue and
/// clamped saturation/brightness, so no further normalization happens
/// here. The conversion itself does not depend on the gamut; the tag
/// records which primaries the components are meant in.
pub fn hsb_to_rgb(hsb: Hsb, gamut: Gamut) -> Rgb {
    let c = hsb.b * hsb.s;
    let h_prime = hsb.h * 6.0;
    let x = c * (1.0 - ((h_prime % 2.0) - 1.0).abs());

    let (r1, g1, b1) = if h_prime < 1.0 {
        (c, x, 0.0)
    } else if h_prime < 2.0 {
        (x, c, 0.0)
    } else if h_prime < 3.0 {
        (0.0, c, x)
    } else if h_prime < 4.0 {
        (0.0, x, c)
    } else if h_prime < 5.0 {
        (x, 0.0, c)
    } else {
        (c, 0.0, x)
    };

    let m = hsb.b - c;
    Rgb::new(r1 + m, g1 + m, b1 + m, hsb.a, gamut)
}

/// Converts an RGB color back to HSB.
///
/// Achromatic colors (R = G = B, including black) report hue 0 and
/// saturation 0 by convention - never NaN.
pub fn rgb_to_hsb(color: Rgb) -> Hsb {
    let max = color.r.max(color.g).max(color.b);
    let min = color.r.min(color.g).min(color.b);
    let delta = max - min;

    let brightness = max;

    if delta <= f32::EPSILON || max <= 0.0 {
        // Achromatic: hue and saturation are zero by convention
        return Hsb::new(0.0, 0.0, brightness, color.a);
    }

    let saturation = delta / max;

    let h_prime = if max == color.r {
        ((color.g - color.b) / delta).rem_euclid(6.0)
    } else if max == color.g {
        (color.b - color.r) / delta + 2.0
    } else {
        (color.r - color.g) / delta + 4.0
    };

    Hsb::new(h_prime / 6.0, saturation, brightness, color.a)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::{assert_abs_diff_eq, assert_relative_eq};

    #[test]
    fn test_hsb_to_rgb_primaries() {
        // Hue 0 = red
        let red = hsb_to_rgb(Hsb::new(0.0, 1.0, 1.0, 1.0), Gamut::Srgb);
        assert_abs_diff_eq!(red.r, 1.0, epsilon = 1e-6);
        assert_abs_diff_eq!(red.g, 0.0, epsilon = 1e-6);
        assert_abs_diff_eq!(red.b, 0.0, epsilon = 1e-6);
        assert_eq!(red.a, 1.0);
        assert_eq!(red.gamut, Gamut::Srgb);

        // Hue 1/3 = green, hue 2/3 = blue
        let green = hsb_to_rgb(Hsb::new(1.0 / 3.0, 1.0, 1.0, 1.0), Gamut::Srgb);
        assert_abs_diff_eq!(green.g, 1.0, epsilon = 1e-5);
        assert_abs_diff_eq!(green.r, 0.0, epsilon = 1e-5);

        let blue = hsb_to_rgb(Hsb::new(2.0 / 3.0, 1.0, 1.0, 1.0), Gamut::Srgb);
        assert_abs_diff_eq!(blue.b, 1.0, epsilon = 1e-5);
    }

    #[test]
    fn test_hsb_to_rgb_desaturated() {
        // Zero saturation gives gray at the brightness level
        let gray = hsb_to_rgb(Hsb::new(0.7, 0.0, 0.4, 1.0), Gamut::DisplayP3);
        assert_abs_diff_eq!(gray.r, 0.4, epsilon = 1e-6);
        assert_abs_diff_eq!(gray.g, 0.4, epsilon = 1e-6);
        assert_abs_diff_eq!(gray.b, 0.4, epsilon = 1e-6);
    }

    #[test]
    fn test_rgb_to_hsb_achromatic_is_not_nan() {
        for v in [0.0, 0.25, 0.5, 1.0] {
            let hsb = rgb_to_hsb(Rgb::new(v, v, v, 1.0, Gamut::Srgb));
            assert_eq!(hsb.h, 0.0);
            assert_eq!(hsb.s, 0.0);
            assert_abs_diff_eq!(hsb.b, v, epsilon = 1e-6);
        }
    }

    #[test]
    fn test_hue_roundtrip() {
        // Full saturation and brightness: hue survives the round trip
        for i in 0..36 {
            let h = i as f32 / 36.0;
            let rgb = hsb_to_rgb(Hsb::new(h, 1.0, 1.0, 1.0), Gamut::Srgb);
            let back = rgb_to_hsb(rgb);
            let dh = (back.h - h).abs();
            let wheel_dist = dh.min(1.0 - dh);
            assert!(wheel_dist < 1e-4, "hue {h} came back as {}", back.h);
            assert_abs_diff_eq!(back.s, 1.0, epsilon = 1e-5);
            assert_abs_diff_eq!(back.b, 1.0, epsilon = 1e-5);
        }
    }

    #[test]
    fn test_chromaticity_sums_to_one() {
        let samples = [
            Rgb::new(1.0, 0.0, 0.0, 1.0, Gamut::Srgb),
            Rgb::new(0.2, 0.7, 0.4, 1.0, Gamut::Srgb),
            Rgb::new(0.9, 0.1, 0.8, 1.0, Gamut::DisplayP3),
            Rgb::new(1.0, 1.0, 1.0, 1.0, Gamut::DisplayP3),
        ];
        for rgb in samples {
            let c = to_chromaticity(rgb);
            assert_relative_eq!(c.x + c.y + c.z(), 1.0, epsilon = 1e-6);
        }
    }

    #[test]
    fn test_chromaticity_of_srgb_red_primary() {
        let c = to_chromaticity(Rgb::new(1.0, 0.0, 0.0, 1.0, Gamut::Srgb));
        assert_abs_diff_eq!(c.x, 0.64, epsilon = 0.005);
        assert_abs_diff_eq!(c.y, 0.33, epsilon = 0.005);
    }

    #[test]
    fn test_chromaticity_of_p3_red_is_wider() {
        let srgb = to_chromaticity(Rgb::new(1.0, 0.0, 0.0, 1.0, Gamut::Srgb));
        let p3 = to_chromaticity(Rgb::new(1.0, 0.0, 0.0, 1.0, Gamut::DisplayP3));
        assert!(p3.x > srgb.x, "P3 red sits further out: {} vs {}", p3.x, srgb.x);
        assert_abs_diff_eq!(p3.x, 0.68, epsilon = 0.005);
        assert_abs_diff_eq!(p3.y, 0.32, epsilon = 0.005);
    }

    #[test]
    fn test_chromaticity_black_falls_back_to_white_point() {
        for gamut in [Gamut::Srgb, Gamut::DisplayP3] {
            let c = to_chromaticity(Rgb::new(0.0, 0.0, 0.0, 1.0, gamut));
            assert!(c.x.is_finite() && c.y.is_finite());
            assert_eq!(c, Chromaticity::white_of(gamut));
        }
    }

    #[test]
    fn test_white_lands_on_white_point() {
        let c = to_chromaticity(Rgb::new(1.0, 1.0, 1.0, 1.0, Gamut::Srgb));
        assert_abs_diff_eq!(c.x, 0.3127, epsilon = 1e-3);
        assert_abs_diff_eq!(c.y, 0.3290, epsilon = 1e-3);
    }

    #[test]
    fn test_luminance_extremes() {
        assert_abs_diff_eq!(luminance([1.0, 1.0, 1.0]), 1.0, epsilon = 1e-6);
        assert_eq!(luminance([0.0, 0.0, 0.0]), 0.0);
        // Mid gray scales linearly
        assert_abs_diff_eq!(luminance([0.5, 0.5, 0.5]), 0.5, epsilon = 1e-6);
    }
}
