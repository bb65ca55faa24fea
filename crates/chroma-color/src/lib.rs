//! # chroma-color
//!
//! The color model: stateless conversions between HSB, gamut-tagged RGB,
//! and CIE xy chromaticity.
//!
//! This crate owns all of the numerically precise contracts of the
//! engine:
//!
//! - [`hsb_to_rgb`] / [`rgb_to_hsb`] - cylindrical HSB to RGB and back
//! - [`to_chromaticity`] - RGB through the gamut's fixed matrix into
//!   normalized CIE xy, with a defined fallback at pure black
//! - [`luminance`] - the perceptual gray weight used to desaturate
//!   in-gamut pixels
//! - [`Primaries`] / [`gamut_matrix`] - chromaticity coordinates of the
//!   two supported gamuts and their derived RGB-to-XYZ matrices
//! - [`DiagramMapping`] - the static calibration that places an (x, y)
//!   pair on the CIE diagram image
//!
//! Everything here is a pure function over immutable values; conversions
//! are reentrant and callable from any thread.
//!
//! # Example
//!
//! ```rust
//! use chroma_core::{Gamut, Hsb};
//! use chroma_color::{hsb_to_rgb, to_chromaticity};
//!
//! // Fully saturated red off the wheel
//! let rgb = hsb_to_rgb(Hsb::new(0.0, 1.0, 1.0, 1.0), Gamut::Srgb);
//! let xy = to_chromaticity(rgb);
//! // Lands on the sRGB red primary
//! assert!((xy.x - 0.64).abs() < 0.01);
//! assert!((xy.y - 0.33).abs() < 0.01);
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

mod diagram;
mod model;
mod primaries;

pub use diagram::*;
pub use model::*;
pub use primaries::*;
