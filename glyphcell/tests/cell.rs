//! Cell rendering tests.
//!
//! These exercise `CellRenderer` against the canned faces in
//! `cell-test-fonts`. They live here rather than in a `#[cfg(test)]`
//! module inside the crate because `cell-test-fonts` depends on
//! `glyphcell`: a unit-test build would link a second copy of the crate
//! and the canned faces' `FontProvider` types would not match the
//! crate-under-test's trait. As an integration test there is a single
//! `glyphcell` in the graph, so the types line up.

use cell_test_fonts::{
    broken_face, curve_face, degenerate_face, showcase_metrics, square_face, StubFont,
};
use glyphcell::color::{BASE_INK, HIGHLIGHT_INK};
use glyphcell::{
    fallback, CellLayout, CellRenderer, CodePoint, Color, FallbackReason, RenderOutcome,
    ReplayError, Rgba8, Surface,
};
use pretty_assertions::assert_eq;

    fn cell_surface() -> Surface {
        Surface::new(48.0, 48.0, 1.0)
    }

    fn cp(ch: char) -> CodePoint {
        CodePoint::from(ch)
    }

    /// Distinct opaque inks present in the surface.
    fn inks(surface: &Surface) -> Vec<(u8, u8, u8)> {
        let pixmap = surface.pixmap();
        let mut found = Vec::new();
        for y in 0..pixmap.height() {
            for x in 0..pixmap.width() {
                let pixel = pixmap.pixel(x, y);
                if pixel.a == 0xFF {
                    let ink = (pixel.r, pixel.g, pixel.b);
                    if !found.contains(&ink) {
                        found.push(ink);
                    }
                }
            }
        }
        found
    }

    fn expected_fallback(ch: char, foreground: Color) -> Surface {
        let mut surface = cell_surface();
        surface.prepare();
        fallback::draw_char(
            surface.pixmap_mut(),
            ch,
            24.0,
            24.0,
            0.6 * 48.0,
            1.0,
            foreground,
        );
        surface
    }

    #[test]
    fn missing_font_draws_the_fallback_face() {
        let mut renderer = CellRenderer::default();
        let mut surface = cell_surface();
        let outcome = renderer.render(&mut surface, cp('A'), None::<&StubFont>, false, false);
        assert_eq!(outcome, RenderOutcome::Fallback(FallbackReason::MissingFont));
        assert!(!surface.pixmap().is_blank());
        assert_eq!(surface.pixmap(), expected_fallback('A', BASE_INK).pixmap());
    }

    #[test]
    fn lookup_miss_draws_the_fallback_face() {
        let font = square_face();
        let mut renderer = CellRenderer::default();
        let mut surface = cell_surface();
        let outcome = renderer.render(&mut surface, cp('z'), Some(&font), false, false);
        assert_eq!(
            outcome,
            RenderOutcome::Fallback(FallbackReason::NoOutline(cp('z')))
        );
        assert_eq!(surface.pixmap(), expected_fallback('z', BASE_INK).pixmap());
    }

    #[test]
    fn degenerate_metrics_draw_the_fallback_face() {
        let font = degenerate_face();
        let mut renderer = CellRenderer::default();
        let mut surface = cell_surface();
        let outcome = renderer.render(&mut surface, cp('A'), Some(&font), false, false);
        assert_eq!(
            outcome,
            RenderOutcome::Fallback(FallbackReason::DegenerateMetrics)
        );
        assert_eq!(surface.pixmap(), expected_fallback('A', BASE_INK).pixmap());
    }

    #[test]
    fn malformed_outline_draws_the_fallback_face() {
        let font = broken_face();
        let mut renderer = CellRenderer::default();
        let mut surface = cell_surface();
        let outcome = renderer.render(&mut surface, cp('X'), Some(&font), false, false);
        assert_eq!(
            outcome,
            RenderOutcome::Fallback(FallbackReason::Replay(ReplayError::MissingMoveTo(0)))
        );
        assert!(!surface.pixmap().is_blank());
    }

    #[test]
    fn foreground_follows_the_highlight_flags() {
        let cases = [
            (false, false, BASE_INK),
            (true, false, HIGHLIGHT_INK),
            (false, true, HIGHLIGHT_INK),
            (true, true, HIGHLIGHT_INK),
        ];
        for (hovered, selected, ink) in cases {
            let mut renderer = CellRenderer::default();
            let mut surface = cell_surface();
            renderer.render(&mut surface, cp('A'), None::<&StubFont>, hovered, selected);
            assert_eq!(inks(&surface), vec![(ink.r, ink.g, ink.b)]);
        }
    }

    #[test]
    fn zero_size_defers_and_retries_once() {
        let font = square_face();
        let mut renderer = CellRenderer::default();
        let mut surface = Surface::new(0.0, 48.0, 1.0);
        let outcome = renderer.render(&mut surface, cp('A'), Some(&font), false, false);
        assert!(matches!(outcome, RenderOutcome::Deferred(_)));
        assert_eq!(surface.pixmap().width(), 0);
        // Exactly one retry is due, and only once.
        assert!(renderer.redraw().take_due().is_some());
        assert!(renderer.redraw().take_due().is_none());
        // The retried draw at a real size proceeds normally.
        surface.set_size(48.0, 48.0);
        let outcome = renderer.render(&mut surface, cp('A'), Some(&font), false, false);
        assert_eq!(outcome, RenderOutcome::Glyph);
        assert!(!surface.pixmap().is_blank());
    }

    #[test]
    fn superseded_retry_never_fires() {
        let font = square_face();
        let mut renderer = CellRenderer::default();
        let mut zero = Surface::new(0.0, 48.0, 1.0);
        renderer.render(&mut zero, cp('A'), Some(&font), false, false);
        assert!(renderer.redraw().has_pending());
        // A fresh draw for different inputs lands before the retry is
        // polled; the stale ticket must not come due.
        let mut real = cell_surface();
        renderer.render(&mut real, cp('B'), Some(&font), false, false);
        assert!(renderer.redraw().take_due().is_none());
    }

    #[test]
    fn space_renders_blank_not_fallback() {
        let font = square_face();
        let mut renderer = CellRenderer::default();
        let mut surface = cell_surface();
        let outcome = renderer.render(&mut surface, cp(' '), Some(&font), false, false);
        assert_eq!(outcome, RenderOutcome::Blank);
        assert!(surface.pixmap().is_blank());
    }

    #[test]
    fn layout_matches_the_showcase_formulas() {
        // units_per_em 1000, bounds {0, -200, 1000, 800}, 48x48 cell.
        let layout = CellLayout::compute(&showcase_metrics(), 1000.0, 48.0, 48.0).unwrap();
        let w = 48.0 - 2.0 * 2.0;
        let h = 48.0 - 4.0 - 8.0;
        let scale = f32::min(w / 1000.0, h / 1000.0);
        assert!((layout.scale - scale).abs() < 1e-6);
        assert!((layout.font_size - scale * 1000.0).abs() < 1e-6);
        assert!((layout.baseline - (4.0 + h * 800.0 / 1000.0)).abs() < 1e-6);
        assert!((layout.glyph_width - 1000.0 * scale).abs() < 1e-6);
        assert!((layout.origin_x - (48.0 - layout.glyph_width) / 2.0).abs() < 1e-6);
    }

    #[test]
    fn degenerate_layout_is_rejected() {
        let mut metrics = showcase_metrics();
        metrics.bounds.y_min = metrics.bounds.y_max;
        assert_eq!(CellLayout::compute(&metrics, 1000.0, 48.0, 48.0), None);
        let mut metrics = showcase_metrics();
        metrics.bounds.x_max = metrics.bounds.x_min;
        assert_eq!(CellLayout::compute(&metrics, 1000.0, 48.0, 48.0), None);
    }

    #[test]
    fn identical_inputs_render_identical_pixels() {
        let font = curve_face();
        let mut renderer = CellRenderer::default();
        let mut first = cell_surface();
        let mut second = cell_surface();
        renderer.render(&mut first, cp('C'), Some(&font), false, false);
        renderer.render(&mut second, cp('C'), Some(&font), false, false);
        assert_eq!(first.pixmap().data(), second.pixmap().data());
    }

    #[test]
    fn square_glyph_covers_the_cell_center() {
        let font = square_face();
        let mut renderer = CellRenderer::default();
        let mut surface = cell_surface();
        let outcome = renderer.render(&mut surface, cp('A'), Some(&font), false, false);
        assert_eq!(outcome, RenderOutcome::Glyph);
        assert_eq!(
            surface.pixmap().pixel(24, 24),
            Rgba8::from_color(BASE_INK)
        );
        assert_eq!(inks(&surface), vec![(BASE_INK.r, BASE_INK.g, BASE_INK.b)]);
    }

    #[test]
    fn highlighted_glyph_uses_the_highlight_ink() {
        let font = square_face();
        let mut renderer = CellRenderer::default();
        let mut surface = cell_surface();
        renderer.render(&mut surface, cp('A'), Some(&font), false, true);
        assert_eq!(
            inks(&surface),
            vec![(HIGHLIGHT_INK.r, HIGHLIGHT_INK.g, HIGHLIGHT_INK.b)]
        );
    }

    #[test]
    fn device_pixel_ratio_scales_the_buffer_not_the_layout() {
        let font = square_face();
        let mut renderer = CellRenderer::default();
        let mut surface = Surface::new(48.0, 48.0, 2.0);
        let outcome = renderer.render(&mut surface, cp('A'), Some(&font), false, false);
        assert_eq!(outcome, RenderOutcome::Glyph);
        assert_eq!(surface.pixmap().width(), 96);
        assert_eq!(surface.pixmap().pixel(48, 48), Rgba8::from_color(BASE_INK));
    }
