//! CIE diagram placement.
//!
//! Maps a chromaticity coordinate onto the background plot image of the
//! CIE 1931 diagram. The mapping is a static calibration against that
//! specific image - the plotted extents (x up to 0.8, y up to 0.9) and
//! the fractional position of the coordinate origin inside the image -
//! and must match it exactly for the handle to land on the right color.

use crate::Chromaticity;

/// Maximum x extent plotted by the diagram image.
pub const DIAGRAM_MAX_X: f32 = 0.8;

/// Maximum y extent plotted by the diagram image.
pub const DIAGRAM_MAX_Y: f32 = 0.9;

/// X position of the diagram's coordinate origin, as a fraction of the
/// view width, measured from the lower-left corner.
pub const ORIGIN_X_FRACTION: f32 = 0.049_374_1;

/// Y position of the diagram's coordinate origin, as a fraction of the
/// view height, measured from the lower-left corner.
pub const ORIGIN_Y_FRACTION: f32 = 0.046_153_8;

/// Static calibration mapping chromaticity to diagram view coordinates.
///
/// # Example
///
/// ```
/// use chroma_color::{Chromaticity, DiagramMapping};
///
/// let mapping = DiagramMapping::new(810.0, 810.0);
/// let (px, py) = mapping.position(Chromaticity::new(0.3127, 0.3290));
/// assert!(px > 0.0 && py > 0.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DiagramMapping {
    /// View width in pixels.
    pub width: f32,
    /// View height in pixels.
    pub height: f32,
}

impl DiagramMapping {
    /// Creates a mapping for a view of the given size.
    #[inline]
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Width of the plot area right of the coordinate origin.
    #[inline]
    pub fn plot_width(self) -> f32 {
        self.width - self.width * ORIGIN_X_FRACTION
    }

    /// Height of the plot area above the coordinate origin.
    ///
    /// Derived from the view width, matching the diagram image's aspect:
    /// the calibration was measured that way and the plot area is
    /// square-ish regardless of the view height.
    #[inline]
    pub fn plot_height(self) -> f32 {
        self.width - self.width * ORIGIN_Y_FRACTION
    }

    /// Maps a chromaticity to view coordinates.
    ///
    /// Returns (px, py) with the usual screen convention: px grows
    /// rightward from the view's left edge, py grows downward from the
    /// plot area's top. The chromaticity axes are scaled by the
    /// diagram's plotted extents (x by 0.8, y by 0.9) and y is flipped,
    /// since the diagram's origin sits at the bottom-left.
    pub fn position(self, c: Chromaticity) -> (f32, f32) {
        let origin_dx = self.width * ORIGIN_X_FRACTION;
        let px = origin_dx + c.x / DIAGRAM_MAX_X * self.plot_width();
        let py = self.plot_height() - c.y / DIAGRAM_MAX_Y * self.plot_height();
        (px, py)
    }
}
