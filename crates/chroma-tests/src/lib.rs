//! Integration tests for the chroma workspace.
//!
//! End-to-end coverage of the two user-facing paths: picker color to
//! CIE plot position, and camera frame through the gamut-highlight
//! filter with latest-wins display hand-off.

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;
    use chroma_color::{
        DiagramMapping, hsb_to_rgb, luminance, rgb_to_hsb, to_chromaticity,
    };
    use chroma_core::{Frame, Gamut, Hsb, Rgb};
    use chroma_ops::{
        FrameFilterPipeline, FrameSlot, PixelClassification, classify_color,
        count_out_of_gamut,
    };

    /// Wheel at 3 o'clock, both sliders full: the sRGB red primary, which
    /// must land on its textbook CIE coordinates.
    #[test]
    fn test_picker_to_plot_red_primary() {
        let hsb = Hsb::from_wheel_angle(0.0, 1.0, 1.0);
        let rgb = hsb_to_rgb(hsb, Gamut::Srgb);
        assert_abs_diff_eq!(rgb.r, 1.0, epsilon = 1e-6);
        assert_abs_diff_eq!(rgb.g, 0.0, epsilon = 1e-6);
        assert_abs_diff_eq!(rgb.b, 0.0, epsilon = 1e-6);

        let xy = to_chromaticity(rgb);
        assert_abs_diff_eq!(xy.x, 0.64, epsilon = 0.005);
        assert_abs_diff_eq!(xy.y, 0.33, epsilon = 0.005);

        // And it stays inside the diagram's plotted extents
        let (px, py) = DiagramMapping::new(810.0, 810.0).position(xy);
        assert!(px > 0.0 && px < 810.0);
        assert!(py > 0.0 && py < 810.0);
    }

    /// Flipping the wide-gamut toggle moves the same picker color to the
    /// P3 primary's chromaticity.
    #[test]
    fn test_wide_gamut_toggle_moves_primaries() {
        let hsb = Hsb::from_wheel_angle(0.0, 1.0, 1.0);
        let narrow = to_chromaticity(hsb_to_rgb(hsb, Gamut::Srgb));
        let wide = to_chromaticity(hsb_to_rgb(hsb, Gamut::DisplayP3));
        assert!(wide.x > narrow.x);
        assert_abs_diff_eq!(wide.x, 0.68, epsilon = 0.005);
        assert_abs_diff_eq!(wide.y, 0.32, epsilon = 0.005);
    }

    /// Around the whole wheel, in both gamuts: hue round-trips and the
    /// chromaticity invariant x + y + z = 1 holds.
    #[test]
    fn test_wheel_sweep_invariants() {
        for gamut in [Gamut::Srgb, Gamut::DisplayP3] {
            for i in 0..48 {
                let h = i as f32 / 48.0;
                let rgb = hsb_to_rgb(Hsb::new(h, 1.0, 1.0, 1.0), gamut);

                let back = rgb_to_hsb(rgb);
                let dh = (back.h - h).abs();
                assert!(dh.min(1.0 - dh) < 1e-4, "hue {h} in {gamut}");

                let xy = to_chromaticity(rgb);
                assert_abs_diff_eq!(xy.x + xy.y + xy.z(), 1.0, epsilon = 1e-6);
                assert!(xy.x.is_finite() && xy.y.is_finite());
            }
        }
    }

    /// Colors composed by the picker are by construction inside the gamut
    /// they were composed in.
    #[test]
    fn test_picker_colors_always_classify_in_gamut() {
        for i in 0..24 {
            let h = i as f32 / 24.0;
            for (s, b) in [(1.0, 1.0), (0.5, 0.8), (0.0, 0.3)] {
                let rgb = hsb_to_rgb(Hsb::new(h, s, b, 1.0), Gamut::DisplayP3);
                assert_eq!(classify_color(rgb), PixelClassification::InGamut);
            }
        }
    }

    /// Full camera path: a premultiplied wide-gamut frame goes through the
    /// filter; P3-only pixels keep their color, everything else goes gray,
    /// and the result is stable under re-filtering.
    #[test]
    fn test_camera_frame_end_to_end() {
        let width = 32u32;
        let height = 16u32;
        let mut data = Vec::with_capacity((width * height * 4) as usize);
        for y in 0..height {
            for x in 0..width {
                if (x + y) % 4 == 0 {
                    // Wide-gamut-only red, premultiplied at alpha 0.5
                    data.extend_from_slice(&[0.75, 0.05, 0.05, 0.5]);
                } else {
                    data.extend_from_slice(&[0.25, 0.5, 0.125, 1.0]);
                }
            }
        }
        let frame = Frame::from_data(width, height, data, true).unwrap();

        let expected_out = (0..height)
            .flat_map(|y| (0..width).map(move |x| (x + y) % 4 == 0))
            .filter(|&v| v)
            .count();
        assert_eq!(count_out_of_gamut(&frame), expected_out);

        let pipeline = FrameFilterPipeline::new();
        let out = pipeline.process(&frame).unwrap();
        assert_eq!(out.width(), width);
        assert_eq!(out.height(), height);
        assert!(!out.is_premultiplied());

        for y in 0..height {
            for x in 0..width {
                let [r, g, b, a] = out.pixel(x, y);
                if (x + y) % 4 == 0 {
                    // Un-premultiplied: 0.75 / 0.5 = 1.5
                    assert_abs_diff_eq!(r, 1.5, epsilon = 1e-5);
                    assert_abs_diff_eq!(g, 0.1, epsilon = 1e-5);
                    assert_eq!(a, 0.5);
                } else {
                    let l = luminance([0.25, 0.5, 0.125]);
                    assert_abs_diff_eq!(r, l, epsilon = 1e-5);
                    assert_eq!(r, g);
                    assert_eq!(g, b);
                    assert_eq!(a, 1.0);
                }
            }
        }

        // Idempotent: filtering the filtered frame changes nothing
        let again = pipeline.process(&out).unwrap();
        for (a, b) in out.data().iter().zip(again.data().iter()) {
            assert_abs_diff_eq!(a, b, epsilon = 1e-6);
        }
    }

    /// A gray frame desaturates to itself pixel-for-pixel.
    #[test]
    fn test_gray_frame_is_fixed_point() {
        let frame = Frame::filled(8, 8, [0.5, 0.5, 0.5, 1.0]).unwrap();
        let out = FrameFilterPipeline::new().process(&frame).unwrap();
        for (a, b) in frame.data().iter().zip(out.data().iter()) {
            assert_abs_diff_eq!(a, b, epsilon = 1e-6);
        }
    }

    /// The display boundary only ever sees the newest completed frame,
    /// even when an older frame finishes late.
    #[test]
    fn test_latest_wins_display_handoff() {
        let pipeline = FrameFilterPipeline::new();
        let slot = FrameSlot::new();

        let old_seq = slot.begin();
        let new_seq = slot.begin();

        let old_in = Frame::filled(4, 4, [0.2, 0.2, 0.2, 1.0]).unwrap();
        let new_in = Frame::filled(4, 4, [0.8, 0.8, 0.8, 1.0]).unwrap();

        // The newer capture completes first
        assert!(slot.publish(new_seq, pipeline.process(&new_in).unwrap()));
        // The stale result is dropped, not queued
        assert!(!slot.publish(old_seq, pipeline.process(&old_in).unwrap()));

        let shown = slot.take_latest().unwrap();
        assert_abs_diff_eq!(shown.pixel(0, 0)[0], 0.8, epsilon = 1e-6);
        assert!(slot.take_latest().is_none());
    }

    /// A malformed capture is skipped without affecting later frames.
    #[test]
    fn test_bad_frame_skipped_stream_continues() {
        let pipeline = FrameFilterPipeline::new();

        assert!(pipeline.process_raw(vec![0.0; 3], 2, 2, false).is_err());

        // The next frame is unaffected
        let ok = pipeline
            .process_raw(vec![0.5; 2 * 2 * 4], 2, 2, false)
            .unwrap();
        assert_eq!(ok.width(), 2);
    }

    /// Hex presentation survives the picker pipeline.
    #[test]
    fn test_hex_roundtrip_through_picker() {
        let rgb = Rgb::from_hex(0x3FA0C8, Gamut::Srgb);
        let hsb = rgb_to_hsb(rgb);
        let back = hsb_to_rgb(hsb, Gamut::Srgb);
        assert_eq!(back.to_hex(), 0x3FA0C8);
    }
}
