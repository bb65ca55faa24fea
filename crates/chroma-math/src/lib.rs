//! # chroma-math
//!
//! Math primitives for chromaticity conversions.
//!
//! This crate provides the two types the color engine is built on:
//!
//! - [`Mat3`] - 3x3 matrices for RGB to XYZ transforms
//! - [`Vec3`] - 3D vectors for RGB/XYZ triplets
//!
//! # Convention
//!
//! All matrix operations assume **row-major** storage and **column vectors**:
//!
//! ```text
//! result = matrix * vector
//! ```
//!
//! # Usage
//!
//! ```rust
//! use chroma_math::{Mat3, Vec3};
//!
//! // sRGB to XYZ (D65)
//! let rgb_to_xyz = Mat3::from_rows([
//!     [0.4124564, 0.3575761, 0.1804375],
//!     [0.2126729, 0.7151522, 0.0721750],
//!     [0.0193339, 0.1191920, 0.9503041],
//! ]);
//!
//! let red = Vec3::new(1.0, 0.0, 0.0);
//! let xyz = rgb_to_xyz * red;
//! ```
//!
//! # Used By
//!
//! - `chroma-color` - RGB/XYZ matrix generation and chromaticity math

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

mod mat3;
mod vec3;

pub use mat3::*;
pub use vec3::*;
