//! Per-color gamut classification.
//!
//! The test is deliberately cheap: a color sampled in the wide working
//! gamut falls outside the sRGB gamut exactly when one of its channels
//! leaves the unit range, so a per-channel range check stands in for a
//! true gamut-boundary computation in chromaticity space.
//!
//! # Precondition
//!
//! The proxy only holds when the pixel values come from a buffer whose
//! working color space is the wide (extended-range) gamut. Values that
//! were already clipped to [0, 1] upstream will always classify as
//! [`PixelClassification::InGamut`].

use chroma_core::Rgb;

/// Alpha below this is treated as fully transparent when
/// un-premultiplying.
const ALPHA_EPSILON: f32 = 1e-8;

/// Per-pixel verdict of the gamut test.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PixelClassification {
    /// Every channel lies within [0, 1]; representable in sRGB.
    InGamut,
    /// Some channel left the unit range; the color needs the wide gamut.
    OutOfGamut,
}

/// Premultiplies alpha for an RGBA pixel.
///
/// Converts straight alpha to premultiplied: `RGB *= A`
#[inline]
pub fn premultiply(rgba: [f32; 4]) -> [f32; 4] {
    let a = rgba[3];
    [rgba[0] * a, rgba[1] * a, rgba[2] * a, a]
}

/// Un-premultiplies alpha for an RGBA pixel.
///
/// Converts premultiplied to straight alpha: `RGB /= A`. Fully
/// transparent pixels become transparent black rather than dividing by
/// zero.
#[inline]
pub fn unpremultiply(rgba: [f32; 4]) -> [f32; 4] {
    let a = rgba[3];
    if a < ALPHA_EPSILON {
        [0.0, 0.0, 0.0, 0.0]
    } else {
        let inv_a = 1.0 / a;
        [rgba[0] * inv_a, rgba[1] * inv_a, rgba[2] * inv_a, a]
    }
}

/// Classifies a straight-alpha RGBA pixel.
///
/// [`PixelClassification::OutOfGamut`] iff any of R, G, B lies outside
/// [0, 1]; NaN channels count as out of range. Alpha never participates.
/// Un-premultiply first (see [`unpremultiply`]) if the pixel came from a
/// premultiplied buffer.
#[inline]
pub fn classify(rgba: [f32; 4]) -> PixelClassification {
    let in_range = |v: f32| (0.0..=1.0).contains(&v);
    if in_range(rgba[0]) && in_range(rgba[1]) && in_range(rgba[2]) {
        PixelClassification::InGamut
    } else {
        PixelClassification::OutOfGamut
    }
}

/// Classifies a gamut-tagged color value.
///
/// Un-premultiplies by the color's alpha, then applies [`classify`].
/// Colors composed by the picker are always in the gamut of their tag;
/// this is meaningful for values sampled out of a wide-gamut buffer.
#[inline]
pub fn classify_color(color: Rgb) -> PixelClassification {
    classify(unpremultiply(color.to_array()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chroma_core::Gamut;

    #[test]
    fn test_classify_in_gamut() {
        assert_eq!(classify([0.5, 0.5, 0.5, 1.0]), PixelClassification::InGamut);
        assert_eq!(classify([0.0, 0.0, 0.0, 1.0]), PixelClassification::InGamut);
        assert_eq!(classify([1.0, 1.0, 1.0, 0.5]), PixelClassification::InGamut);
    }

    #[test]
    fn test_classify_out_of_gamut() {
        assert_eq!(classify([1.2, 0.5, 0.5, 1.0]), PixelClassification::OutOfGamut);
        assert_eq!(classify([0.5, -0.01, 0.5, 1.0]), PixelClassification::OutOfGamut);
        assert_eq!(classify([0.5, 0.5, 1.0001, 1.0]), PixelClassification::OutOfGamut);
    }

    #[test]
    fn test_classify_nan_is_out_of_gamut() {
        assert_eq!(
            classify([f32::NAN, 0.5, 0.5, 1.0]),
            PixelClassification::OutOfGamut
        );
    }

    #[test]
    fn test_unpremultiply_roundtrip() {
        let straight = [0.8, 0.4, 0.2, 0.5];
        let premult = premultiply(straight);
        assert_eq!(premult, [0.4, 0.2, 0.1, 0.5]);
        let back = unpremultiply(premult);
        for (a, b) in back.iter().zip(straight.iter()) {
            assert!((a - b).abs() < 1e-6);
        }
    }

    #[test]
    fn test_unpremultiply_zero_alpha() {
        // Transparent black, not NaN
        assert_eq!(unpremultiply([0.3, 0.2, 0.1, 0.0]), [0.0; 4]);
        assert_eq!(
            classify(unpremultiply([0.3, 0.2, 0.1, 0.0])),
            PixelClassification::InGamut
        );
    }

    #[test]
    fn test_classify_color_unpremultiplies() {
        // 0.6/0.5 = 1.2 after un-premultiplication
        let c = Rgb::new(0.6, 0.2, 0.2, 0.5, Gamut::DisplayP3);
        assert_eq!(classify_color(c), PixelClassification::OutOfGamut);

        let c = Rgb::new(0.4, 0.2, 0.2, 0.5, Gamut::DisplayP3);
        assert_eq!(classify_color(c), PixelClassification::InGamut);
    }
}
