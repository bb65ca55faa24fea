//! # chroma-core
//!
//! Core types for the chroma color engine.
//!
//! This crate provides the foundational value types used throughout the
//! workspace:
//!
//! - [`Hsb`] - hue/saturation/brightness color as composed by the picker
//! - [`Rgb`] - linear RGB color tagged with the [`Gamut`] it was produced in
//! - [`Gamut`] - the two supported RGB gamuts (sRGB, Display P3)
//! - [`Frame`] - RGBA f32 image buffer for the per-pixel filter
//! - [`Error`] - unified error type
//!
//! ## Design
//!
//! All color values are immutable stack-lived data; there is no shared
//! mutable state anywhere in this crate. The gamut tag travels with every
//! RGB value so that the two conversion matrices can never be mixed.
//!
//! ## Crate Structure
//!
//! This crate is the foundation of the workspace and has no internal
//! dependencies:
//!
//! ```text
//! chroma-core (this crate)
//!    ^
//!    |
//!    +-- chroma-color (HSB/RGB/xyY conversions)
//!    +-- chroma-ops   (gamut classifier, frame filter)
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod color;
pub mod error;
pub mod frame;
pub mod gamut;

pub use color::*;
pub use error::*;
pub use frame::*;
pub use gamut::*;
