//! Color primaries and RGB-to-XYZ matrix generation.
//!
//! A gamut is defined by the CIE xy chromaticities of its three primaries
//! and white point; from those the fixed 3x3 RGB-to-XYZ matrix is derived
//! by scaling the primaries so that RGB white lands on the white point.
//!
//! Only the forward RGB-to-XYZ direction is used at runtime; the matrix
//! inverse appears solely inside the derivation.

use chroma_core::Gamut;
use chroma_math::{Mat3, Vec3};

/// RGB gamut primaries definition.
///
/// Defines a gamut by its three primary colors (R, G, B) and white point,
/// all specified as CIE xy chromaticity coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Primaries {
    /// Red primary (x, y) chromaticity
    pub r: (f32, f32),
    /// Green primary (x, y) chromaticity
    pub g: (f32, f32),
    /// Blue primary (x, y) chromaticity
    pub b: (f32, f32),
    /// White point (x, y) chromaticity
    pub w: (f32, f32),
    /// Gamut name
    pub name: &'static str,
}

impl Primaries {
    /// Creates Primaries from a [`Gamut`] tag.
    ///
    /// # Example
    ///
    /// ```rust
    /// use chroma_core::Gamut;
    /// use chroma_color::Primaries;
    ///
    /// let p = Primaries::from_gamut(Gamut::DisplayP3);
    /// assert_eq!(p.name, "Display P3");
    /// ```
    pub const fn from_gamut(gamut: Gamut) -> Self {
        let prims = gamut.primaries();
        Self {
            r: prims[0],
            g: prims[1],
            b: prims[2],
            w: gamut.white_point(),
            name: gamut.name(),
        }
    }

    /// White point as XYZ (Y=1).
    #[inline]
    pub fn white_xyz(&self) -> Vec3 {
        xy_to_xyz(self.w.0, self.w.1)
    }
}

impl From<Gamut> for Primaries {
    fn from(gamut: Gamut) -> Self {
        Self::from_gamut(gamut)
    }
}

/// sRGB / Rec.709 primaries (D65 white point).
pub const SRGB: Primaries = Primaries::from_gamut(Gamut::Srgb);

/// Display P3 primaries: DCI-P3 primaries with a D65 white point.
pub const DISPLAY_P3: Primaries = Primaries::from_gamut(Gamut::DisplayP3);

/// Converts xy chromaticity to XYZ (with Y=1).
fn xy_to_xyz(x: f32, y: f32) -> Vec3 {
    if y.abs() < 1e-10 {
        Vec3::ZERO
    } else {
        Vec3::new(x / y, 1.0, (1.0 - x - y) / y)
    }
}

/// Computes the RGB to XYZ matrix for a set of primaries.
///
/// # Algorithm
///
/// 1. Convert xy chromaticities to XYZ (with Y=1)
/// 2. Solve for per-primary scale factors so RGB white maps to the
///    white point
/// 3. Scale the primary columns by those factors
///
/// # Example
///
/// ```rust
/// use chroma_color::{SRGB, rgb_to_xyz_matrix};
/// use chroma_math::Vec3;
///
/// let m = rgb_to_xyz_matrix(&SRGB);
/// let white = m * Vec3::ONE;
/// assert!((white.y - 1.0).abs() < 0.001);
/// ```
pub fn rgb_to_xyz_matrix(primaries: &Primaries) -> Mat3 {
    let r_xyz = xy_to_xyz(primaries.r.0, primaries.r.1);
    let g_xyz = xy_to_xyz(primaries.g.0, primaries.g.1);
    let b_xyz = xy_to_xyz(primaries.b.0, primaries.b.1);
    let w_xyz = xy_to_xyz(primaries.w.0, primaries.w.1);

    // Primaries as columns; solve M * s = W for the scale factors
    let m = Mat3::from_col_vecs(r_xyz, g_xyz, b_xyz);
    let m_inv = m.inverse().unwrap_or(Mat3::IDENTITY);
    let s = m_inv * w_xyz;

    Mat3::from_col_vecs(r_xyz * s.x, g_xyz * s.y, b_xyz * s.z)
}

// ============================================================================
// Pre-computed Gamut Matrices
// ============================================================================

/// sRGB (linear) to XYZ (D65) matrix.
pub const SRGB_TO_XYZ: Mat3 = Mat3::from_rows([
    [0.4124564, 0.3575761, 0.1804375],
    [0.2126729, 0.7151522, 0.0721750],
    [0.0193339, 0.1191920, 0.9503041],
]);

/// Display P3 (linear) to XYZ (D65) matrix.
pub const DISPLAY_P3_TO_XYZ: Mat3 = Mat3::from_rows([
    [0.4865709, 0.2656677, 0.1982173],
    [0.2289746, 0.6917385, 0.0792869],
    [0.0000000, 0.0451134, 1.0439444],
]);

/// The fixed RGB-to-XYZ matrix for a gamut.
///
/// Returns the pre-computed constant; [`rgb_to_xyz_matrix`] re-derives
/// the same values from the primaries and the tests keep them in
/// agreement.
#[inline]
pub const fn gamut_matrix(gamut: Gamut) -> Mat3 {
    match gamut {
        Gamut::Srgb => SRGB_TO_XYZ,
        Gamut::DisplayP3 => DISPLAY_P3_TO_XYZ,
    }
}
