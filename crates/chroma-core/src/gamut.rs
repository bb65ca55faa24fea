//! RGB gamut definitions.
//!
//! The engine supports exactly two gamuts: sRGB (the narrow reference)
//! and Display P3 (the wide working gamut of the camera path). Each
//! carries the CIE xy chromaticities of its primaries and white point,
//! from which `chroma-color` derives the fixed RGB-to-XYZ matrix.
//!
//! The single runtime configuration bit of the engine - "use wide gamut" -
//! is the choice of this tag; see [`Gamut::from_wide`].

use std::fmt;

/// The RGB gamut a color was produced in.
///
/// Every [`Rgb`](crate::Rgb) value carries its gamut so that chromaticity
/// conversion always picks the matching matrix; the two must never be
/// mixed.
///
/// # Example
///
/// ```
/// use chroma_core::Gamut;
///
/// let g = Gamut::from_wide(true);
/// assert_eq!(g, Gamut::DisplayP3);
/// assert!(g.is_wide());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Gamut {
    /// sRGB / Rec.709 primaries, D65 white point. The narrow reference
    /// gamut that the classifier tests against.
    #[default]
    Srgb,
    /// Display P3: DCI-P3 primaries with a D65 white point. The wide
    /// working gamut of the camera capture path.
    DisplayP3,
}

/// D65 white point chromaticity (daylight, ~6500K).
///
/// Shared by both supported gamuts.
pub const D65_XY: (f32, f32) = (0.31270, 0.32900);

impl Gamut {
    /// Selects the gamut from the "use wide gamut" toggle.
    #[inline]
    pub const fn from_wide(wide: bool) -> Self {
        if wide { Self::DisplayP3 } else { Self::Srgb }
    }

    /// Whether this is the wide (Display P3) gamut.
    #[inline]
    pub const fn is_wide(self) -> bool {
        matches!(self, Self::DisplayP3)
    }

    /// CIE xy chromaticities of the RGB primaries, in `[R, G, B]` order.
    pub const fn primaries(self) -> [(f32, f32); 3] {
        match self {
            Self::Srgb => [(0.6400, 0.3300), (0.3000, 0.6000), (0.1500, 0.0600)],
            Self::DisplayP3 => [(0.6800, 0.3200), (0.2650, 0.6900), (0.1500, 0.0600)],
        }
    }

    /// CIE xy chromaticity of the white point.
    ///
    /// Both gamuts use D65.
    pub const fn white_point(self) -> (f32, f32) {
        D65_XY
    }

    /// Human-readable name.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Srgb => "sRGB",
            Self::DisplayP3 => "Display P3",
        }
    }
}

impl fmt::Display for Gamut {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
