//! The per-pixel frame filter.
//!
//! For each pixel of an incoming frame, independently: un-premultiply,
//! classify, and either pass the color through untouched (out of gamut)
//! or replace it with its gray luminance value (in gamut). The result is
//! a highlight overlay where only wide-gamut-exclusive colors remain
//! colored.
//!
//! The map is order-independent with no inter-pixel dependency, so rows
//! are processed in parallel: the input is read-only and each worker
//! writes a disjoint row of the output.

use chroma_core::{CHANNELS, Frame};
use chroma_color::luminance;
use tracing::debug;

use crate::{OpsResult, PixelClassification, classify, unpremultiply};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// The gamut-highlight frame filter.
///
/// Stateless; construct one and share it freely - `process` is pure and
/// callable from any number of threads. Exists as a value (rather than a
/// registry entry) so the render side receives it explicitly.
///
/// # Failure model
///
/// A malformed input is reported as an error and produces no output
/// frame; the caller drops that frame and continues with the next one.
/// There is no retry and no partial result - a frame either completes or
/// is skipped whole.
#[derive(Debug, Clone, Copy, Default)]
pub struct FrameFilterPipeline;

impl FrameFilterPipeline {
    /// Creates the pipeline.
    pub fn new() -> Self {
        Self
    }

    /// Filters a frame.
    ///
    /// Output has identical dimensions and alpha to the input and always
    /// carries straight (un-premultiplied) alpha, which makes the filter
    /// idempotent: gray pixels stay in gamut and map to themselves.
    pub fn process(&self, frame: &Frame) -> OpsResult<Frame> {
        let width = frame.width();
        let height = frame.height();
        let row_len = width as usize * CHANNELS;
        let premultiplied = frame.is_premultiplied();
        let src = frame.data();

        debug!(width, height, premultiplied, "filtering frame");

        let mut dst = vec![0.0f32; src.len()];

        #[cfg(feature = "parallel")]
        dst.par_chunks_mut(row_len)
            .enumerate()
            .for_each(|(y, out_row)| {
                filter_row(&src[y * row_len..(y + 1) * row_len], out_row, premultiplied);
            });

        #[cfg(not(feature = "parallel"))]
        for (y, out_row) in dst.chunks_mut(row_len).enumerate() {
            filter_row(&src[y * row_len..(y + 1) * row_len], out_row, premultiplied);
        }

        Ok(Frame::from_data(width, height, dst, false)?)
    }

    /// Filters a raw pixel buffer as delivered by the capture boundary.
    ///
    /// Validates the buffer against the stated dimensions first; a
    /// mismatched or zero-sized buffer is the skip-this-frame signal.
    pub fn process_raw(
        &self,
        data: Vec<f32>,
        width: u32,
        height: u32,
        premultiplied: bool,
    ) -> OpsResult<Frame> {
        let frame = Frame::from_data(width, height, data, premultiplied)?;
        self.process(&frame)
    }
}

/// Filters one row of pixels into `out`.
fn filter_row(src: &[f32], out: &mut [f32], premultiplied: bool) {
    for (px, out_px) in src
        .chunks_exact(CHANNELS)
        .zip(out.chunks_exact_mut(CHANNELS))
    {
        let straight = if premultiplied {
            unpremultiply([px[0], px[1], px[2], px[3]])
        } else {
            [px[0], px[1], px[2], px[3]]
        };

        let result = match classify(straight) {
            PixelClassification::OutOfGamut => straight,
            PixelClassification::InGamut => {
                let l = luminance([straight[0], straight[1], straight[2]]);
                [l, l, l, straight[3]]
            }
        };
        out_px.copy_from_slice(&result);
    }
}

/// Counts how many pixels of a frame fall outside the sRGB gamut.
///
/// Read-only companion to [`FrameFilterPipeline::process`], used for
/// reporting.
pub fn count_out_of_gamut(frame: &Frame) -> usize {
    let premultiplied = frame.is_premultiplied();
    let per_pixel = |px: &[f32]| {
        let straight = if premultiplied {
            unpremultiply([px[0], px[1], px[2], px[3]])
        } else {
            [px[0], px[1], px[2], px[3]]
        };
        classify(straight) == PixelClassification::OutOfGamut
    };

    #[cfg(feature = "parallel")]
    {
        frame
            .data()
            .par_chunks_exact(CHANNELS)
            .filter(|px| per_pixel(px))
            .count()
    }

    #[cfg(not(feature = "parallel"))]
    {
        frame
            .data()
            .chunks_exact(CHANNELS)
            .filter(|px| per_pixel(px))
            .count()
    }
}
