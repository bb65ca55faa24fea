//! # chroma-ops
//!
//! Gamut classification and the per-pixel camera frame filter.
//!
//! This crate decides, per color or per pixel, whether a value sampled in
//! the wide working gamut is representable in sRGB, and applies that
//! decision across whole frames:
//!
//! - [`classify`] - the per-channel unit-range gamut test
//! - [`FrameFilterPipeline`] - maps a frame, keeping out-of-gamut pixels
//!   in full color and desaturating everything else to gray
//! - [`FrameSlot`] - latest-wins hand-off of finished frames to the
//!   display boundary
//!
//! # Parallelism
//!
//! The filter is a pure per-pixel map with no inter-pixel dependency.
//! With the default `parallel` feature it processes rows concurrently
//! via rayon; disabling the feature gives an identical serial path.
//!
//! # Example
//!
//! ```rust
//! use chroma_core::Frame;
//! use chroma_ops::FrameFilterPipeline;
//!
//! let frame = Frame::filled(8, 8, [2.0, 0.1, 0.1, 1.0]).unwrap();
//! let pipeline = FrameFilterPipeline::new();
//! let out = pipeline.process(&frame).unwrap();
//! // Out-of-gamut red passes through in full color
//! assert_eq!(out.pixel(0, 0), [2.0, 0.1, 0.1, 1.0]);
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

mod classify;
mod error;
mod filter;
mod slot;

pub use classify::*;
pub use error::*;
pub use filter::*;
pub use slot::*;
