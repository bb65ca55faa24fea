//! RGBA frame buffer for the per-pixel filter path.
//!
//! [`Frame`] is the unit of work the camera boundary hands to the filter
//! pipeline: an owned, row-major, interleaved RGBA f32 buffer. Values are
//! linear in the frame's working gamut and may exceed [0, 1] when that
//! gamut is wide.
//!
//! # Memory Layout
//!
//! ```text
//! Memory: [R G B A R G B A ...]  <- Row 0
//!         [R G B A R G B A ...]  <- Row 1
//!         ...
//! ```
//!
//! # Usage
//!
//! ```rust
//! use chroma_core::Frame;
//!
//! let mut frame = Frame::new(64, 48).unwrap();
//! frame.set_pixel(10, 10, [1.0, 0.5, 0.25, 1.0]);
//! assert_eq!(frame.pixel(10, 10), [1.0, 0.5, 0.25, 1.0]);
//! ```

use crate::{Error, Result};

/// Number of f32 values per pixel (RGBA).
pub const CHANNELS: usize = 4;

/// An owned RGBA f32 frame buffer.
///
/// Construction validates dimensions and buffer length; a frame that
/// exists is always well-formed, so per-pixel processing can run without
/// re-checking.
#[derive(Debug, Clone, PartialEq)]
pub struct Frame {
    data: Vec<f32>,
    width: u32,
    height: u32,
    premultiplied: bool,
}

impl Frame {
    /// Creates a zero-filled frame with straight (non-premultiplied) alpha.
    ///
    /// Returns [`Error::InvalidDimensions`] if either dimension is zero.
    pub fn new(width: u32, height: u32) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(Error::InvalidDimensions { width, height });
        }
        let len = width as usize * height as usize * CHANNELS;
        Ok(Self {
            data: vec![0.0; len],
            width,
            height,
            premultiplied: false,
        })
    }

    /// Creates a frame with every pixel set to `rgba`.
    pub fn filled(width: u32, height: u32, rgba: [f32; 4]) -> Result<Self> {
        let mut frame = Self::new(width, height)?;
        frame.fill(rgba);
        Ok(frame)
    }

    /// Wraps an existing pixel buffer.
    ///
    /// `premultiplied` declares whether RGB is stored multiplied by alpha,
    /// as camera buffers typically are. Returns
    /// [`Error::BufferSizeMismatch`] if the buffer length does not equal
    /// `width * height * 4`.
    pub fn from_data(width: u32, height: u32, data: Vec<f32>, premultiplied: bool) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(Error::InvalidDimensions { width, height });
        }
        let expected = width as usize * height as usize * CHANNELS;
        if data.len() != expected {
            return Err(Error::BufferSizeMismatch {
                expected,
                actual: data.len(),
            });
        }
        Ok(Self {
            data,
            width,
            height,
            premultiplied,
        })
    }

    /// Frame width in pixels.
    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Frame height in pixels.
    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Total number of pixels.
    #[inline]
    pub fn pixel_count(&self) -> usize {
        self.width as usize * self.height as usize
    }

    /// Whether RGB is stored premultiplied by alpha.
    #[inline]
    pub fn is_premultiplied(&self) -> bool {
        self.premultiplied
    }

    /// Returns the pixel at (x, y) as `[R, G, B, A]`.
    ///
    /// # Panics
    ///
    /// Panics if (x, y) is out of bounds; use [`try_pixel`](Self::try_pixel)
    /// for a checked variant.
    #[inline]
    pub fn pixel(&self, x: u32, y: u32) -> [f32; 4] {
        let i = self.offset(x, y);
        [self.data[i], self.data[i + 1], self.data[i + 2], self.data[i + 3]]
    }

    /// Checked pixel access.
    pub fn try_pixel(&self, x: u32, y: u32) -> Result<[f32; 4]> {
        if x >= self.width || y >= self.height {
            return Err(Error::OutOfBounds {
                x,
                y,
                width: self.width,
                height: self.height,
            });
        }
        Ok(self.pixel(x, y))
    }

    /// Writes the pixel at (x, y).
    ///
    /// # Panics
    ///
    /// Panics if (x, y) is out of bounds.
    #[inline]
    pub fn set_pixel(&mut self, x: u32, y: u32, rgba: [f32; 4]) {
        let i = self.offset(x, y);
        self.data[i..i + 4].copy_from_slice(&rgba);
    }

    /// Sets every pixel to `rgba`.
    pub fn fill(&mut self, rgba: [f32; 4]) {
        for px in self.data.chunks_exact_mut(CHANNELS) {
            px.copy_from_slice(&rgba);
        }
    }

    /// Iterator over pixel rows as flat `[R G B A ...]` slices.
    #[inline]
    pub fn rows(&self) -> impl Iterator<Item = &[f32]> {
        self.data.chunks_exact(self.width as usize * CHANNELS)
    }

    /// Raw pixel data, row-major interleaved RGBA.
    #[inline]
    pub fn data(&self) -> &[f32] {
        &self.data
    }

    /// Consumes the frame, returning the raw buffer.
    #[inline]
    pub fn into_data(self) -> Vec<f32> {
        self.data
    }

    #[inline]
    fn offset(&self, x: u32, y: u32) -> usize {
        debug_assert!(x < self.width && y < self.height);
        (y as usize * self.width as usize + x as usize) * CHANNELS
    }
}
