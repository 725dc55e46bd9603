//! Swatch cell rendering.
//!
//! One call draws one character into one fixed-size cell: outline replay
//! and fill when the font can supply an outline, the built-in fallback
//! face otherwise. The renderer is stateless between calls apart from the
//! deferred-redraw bookkeeping; identical inputs produce identical pixels.

use crate::charset::CodePoint;
use crate::color::{CellStyle, Color};
use crate::error::FallbackReason;
use crate::fallback;
use crate::outline::OutlinePen;
use crate::provider::{FontMetrics, FontProvider};
use crate::raster::{self, BezPathPen};
use crate::redraw::{InputStamp, RedrawQueue, RetryTicket};
use crate::surface::Surface;

/// Cell margins in logical units.
const MARGIN_TOP: f32 = 4.0;
const MARGIN_BOTTOM: f32 = 8.0;
const MARGIN_SIDE: f32 = 2.0;

/// Fallback text size as a fraction of the smaller cell extent.
const FALLBACK_SIZE_FACTOR: f32 = 0.6;

/// Placement of a glyph within a cell, derived from font metrics.
#[derive(Copy, Clone, PartialEq, Debug)]
pub struct CellLayout {
    /// Font units to logical units.
    pub scale: f32,
    /// Em size at which the outline is drawn: `scale * units_per_em`.
    pub font_size: f32,
    /// Baseline y in logical units from the cell top.
    pub baseline: f32,
    /// Left edge of the centered advance box.
    pub origin_x: f32,
    /// Advance width in logical units.
    pub glyph_width: f32,
}

impl CellLayout {
    /// Computes the placement of a glyph with `advance_width` (font units)
    /// in a `width` x `height` cell.
    ///
    /// Returns `None` when the metrics or the cell leave no drawable box
    /// (`y_max <= y_min`, `x_max <= x_min`, or a cell smaller than its
    /// margins); callers treat that as degenerate and fall back.
    pub fn compute(
        metrics: &FontMetrics,
        advance_width: f32,
        width: f32,
        height: f32,
    ) -> Option<Self> {
        let bounds = metrics.bounds;
        let w = width - 2.0 * MARGIN_SIDE;
        let h = height - MARGIN_TOP - MARGIN_BOTTOM;
        let max_width = bounds.x_max - bounds.x_min;
        let max_height = bounds.y_max - bounds.y_min;
        if max_width <= 0.0 || max_height <= 0.0 || w <= 0.0 || h <= 0.0 {
            return None;
        }
        let scale = (w / max_width).min(h / max_height);
        let font_size = scale * metrics.units_per_em as f32;
        let baseline = MARGIN_TOP + h * bounds.y_max / max_height;
        let glyph_width = advance_width * scale;
        let origin_x = (width - glyph_width) / 2.0;
        Some(Self {
            scale,
            font_size,
            baseline,
            origin_x,
            glyph_width,
        })
    }
}

/// Pen applying the cell transform ahead of an inner pen: font units, y
/// up, become logical units from the cell's top-left corner.
struct TransformPen<'a, P> {
    inner: &'a mut P,
    scale: f32,
    origin_x: f32,
    baseline: f32,
}

impl<'a, P: OutlinePen> TransformPen<'a, P> {
    fn new(inner: &'a mut P, layout: &CellLayout) -> Self {
        Self {
            inner,
            scale: layout.scale,
            origin_x: layout.origin_x,
            baseline: layout.baseline,
        }
    }

    fn map(&self, x: f32, y: f32) -> (f32, f32) {
        (self.origin_x + x * self.scale, self.baseline - y * self.scale)
    }
}

impl<P: OutlinePen> OutlinePen for TransformPen<'_, P> {
    fn move_to(&mut self, x: f32, y: f32) {
        let (x, y) = self.map(x, y);
        self.inner.move_to(x, y);
    }

    fn line_to(&mut self, x: f32, y: f32) {
        let (x, y) = self.map(x, y);
        self.inner.line_to(x, y);
    }

    fn quad_to(&mut self, cx0: f32, cy0: f32, x: f32, y: f32) {
        let (cx0, cy0) = self.map(cx0, cy0);
        let (x, y) = self.map(x, y);
        self.inner.quad_to(cx0, cy0, x, y);
    }

    fn curve_to(&mut self, cx0: f32, cy0: f32, cx1: f32, cy1: f32, x: f32, y: f32) {
        let (cx0, cy0) = self.map(cx0, cy0);
        let (cx1, cy1) = self.map(cx1, cy1);
        let (x, y) = self.map(x, y);
        self.inner.curve_to(cx0, cy0, cx1, cy1, x, y);
    }

    fn close(&mut self) {
        self.inner.close();
    }
}

/// Observable result of one render call. Never an error: every input
/// terminates in pixels or a recorded retry.
#[derive(Copy, Clone, PartialEq, Debug)]
pub enum RenderOutcome {
    /// The glyph outline was replayed and filled.
    Glyph,
    /// The outline had nothing to draw; the surface stays cleared.
    Blank,
    /// The built-in fallback face was drawn instead of the outline.
    Fallback(FallbackReason),
    /// The surface had no extent; a one-shot retry was recorded.
    Deferred(RetryTicket),
}

/// Renders one glyph swatch per call.
#[derive(Clone, Default, Debug)]
pub struct CellRenderer {
    style: CellStyle,
    redraw: RedrawQueue,
}

impl CellRenderer {
    pub fn new(style: CellStyle) -> Self {
        Self {
            style,
            redraw: RedrawQueue::new(),
        }
    }

    pub fn style(&self) -> &CellStyle {
        &self.style
    }

    /// Deferred-redraw queue, polled by the embedding event loop.
    pub fn redraw(&mut self) -> &mut RedrawQueue {
        &mut self.redraw
    }

    /// Draws `code_point` into `surface`.
    ///
    /// `font` is `None` while the font is still loading; that and every
    /// other failure to draw from outline data resolves to the fallback
    /// face rather than an error. A zero-sized surface records a retry and
    /// touches no pixels.
    pub fn render<F: FontProvider>(
        &mut self,
        surface: &mut Surface,
        code_point: CodePoint,
        font: Option<&F>,
        hovered: bool,
        selected: bool,
    ) -> RenderOutcome {
        let stamp = InputStamp {
            code_point,
            hovered,
            selected,
        };
        let version = self.redraw.observe(stamp);
        if surface.is_zero_sized() {
            return RenderOutcome::Deferred(self.redraw.defer(version));
        }
        surface.prepare();
        let foreground = self.style.foreground(hovered, selected);
        match draw_outline(surface, code_point, font, foreground) {
            Ok(outcome) => outcome,
            Err(reason) => {
                log::debug!("swatch U+{code_point}: fallback ({reason})");
                draw_fallback(surface, code_point, foreground);
                RenderOutcome::Fallback(reason)
            }
        }
    }
}

fn draw_outline<F: FontProvider>(
    surface: &mut Surface,
    code_point: CodePoint,
    font: Option<&F>,
    foreground: Color,
) -> Result<RenderOutcome, FallbackReason> {
    let font = font.ok_or(FallbackReason::MissingFont)?;
    let outline = font
        .outline(code_point)
        .ok_or(FallbackReason::NoOutline(code_point))?;
    let layout = CellLayout::compute(
        &font.metrics(),
        outline.advance_width(),
        surface.width(),
        surface.height(),
    )
    .ok_or(FallbackReason::DegenerateMetrics)?;
    if outline.is_empty() {
        return Ok(RenderOutcome::Blank);
    }
    let mut pen = BezPathPen::new();
    outline.replay(&mut TransformPen::new(&mut pen, &layout))?;
    let path = pen.into_path();
    if !raster::has_segments(&path) {
        return Ok(RenderOutcome::Blank);
    }
    let dpr = surface.dpr();
    raster::fill_path(surface.pixmap_mut(), &path, dpr, foreground);
    Ok(RenderOutcome::Glyph)
}

fn draw_fallback(surface: &mut Surface, code_point: CodePoint, foreground: Color) {
    let size = FALLBACK_SIZE_FACTOR * surface.width().min(surface.height());
    let ch = code_point.to_char().unwrap_or(char::REPLACEMENT_CHARACTER);
    let cx = surface.width() / 2.0;
    let cy = surface.height() / 2.0;
    let dpr = surface.dpr();
    fallback::draw_char(surface.pixmap_mut(), ch, cx, cy, size, dpr, foreground);
}
