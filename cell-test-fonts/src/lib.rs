//! Canned font providers shared by the glyphcell tests.
//!
//! Everything here is deterministic and hand-assembled so tests can
//! reason about exact geometry: a 1000 units-per-em design space with
//! bounds `{0, -200, 1000, 800}` unless a face says otherwise.

use glyphcell::{
    BoundingBox, CodePoint, FontMetrics, FontProvider, GlyphOutline, PathCommand,
};

/// Design units per em shared by the canned faces.
pub const UNITS_PER_EM: u16 = 1000;

/// Font bounds shared by the canned faces.
pub const BOUNDS: BoundingBox = BoundingBox {
    x_min: 0.0,
    y_min: -200.0,
    x_max: 1000.0,
    y_max: 800.0,
};

/// Metrics of the shared design space.
pub fn showcase_metrics() -> FontMetrics {
    FontMetrics {
        units_per_em: UNITS_PER_EM,
        bounds: BOUNDS,
    }
}

/// Font provider with fixed metrics and hand-assembled outlines.
#[derive(Clone, Default, Debug)]
pub struct StubFont {
    metrics: FontMetrics,
    glyphs: Vec<(u32, GlyphOutline)>,
}

impl StubFont {
    pub fn new(metrics: FontMetrics) -> Self {
        Self {
            metrics,
            glyphs: Vec::new(),
        }
    }

    /// Adds an outline for `ch`, replacing any earlier one.
    pub fn with_glyph(mut self, ch: char, outline: GlyphOutline) -> Self {
        self.glyphs.retain(|(cp, _)| *cp != ch as u32);
        self.glyphs.push((ch as u32, outline));
        self
    }
}

impl FontProvider for StubFont {
    fn outline(&self, code_point: CodePoint) -> Option<GlyphOutline> {
        self.glyphs
            .iter()
            .find(|(cp, _)| *cp == code_point.value())
            .map(|(_, outline)| outline.clone())
    }

    fn metrics(&self) -> FontMetrics {
        self.metrics
    }
}

fn square_outline() -> GlyphOutline {
    GlyphOutline::new(
        vec![
            PathCommand::MoveTo { x: 100.0, y: 0.0 },
            PathCommand::LineTo { x: 900.0, y: 0.0 },
            PathCommand::LineTo { x: 900.0, y: 700.0 },
            PathCommand::LineTo { x: 100.0, y: 700.0 },
            PathCommand::Close,
        ],
        1000.0,
    )
}

/// Two nested squares wound the same way; non-zero winding fills the
/// inner region solid.
fn nested_squares_outline() -> GlyphOutline {
    GlyphOutline::new(
        vec![
            PathCommand::MoveTo { x: 100.0, y: 0.0 },
            PathCommand::LineTo { x: 900.0, y: 0.0 },
            PathCommand::LineTo { x: 900.0, y: 700.0 },
            PathCommand::LineTo { x: 100.0, y: 700.0 },
            PathCommand::Close,
            PathCommand::MoveTo { x: 300.0, y: 200.0 },
            PathCommand::LineTo { x: 700.0, y: 200.0 },
            PathCommand::LineTo { x: 700.0, y: 500.0 },
            PathCommand::LineTo { x: 300.0, y: 500.0 },
            PathCommand::Close,
        ],
        1000.0,
    )
}

/// Lens shape built from one quadratic and one cubic segment.
fn curve_outline() -> GlyphOutline {
    GlyphOutline::new(
        vec![
            PathCommand::MoveTo { x: 100.0, y: 100.0 },
            PathCommand::QuadTo {
                cx0: 500.0,
                cy0: 700.0,
                x: 900.0,
                y: 100.0,
            },
            PathCommand::CurveTo {
                cx0: 700.0,
                cy0: -100.0,
                cx1: 300.0,
                cy1: -100.0,
                x: 100.0,
                y: 100.0,
            },
            PathCommand::Close,
        ],
        1000.0,
    )
}

/// Face with a filled square `A`, nested squares `O`, and an empty but
/// valid space glyph.
pub fn square_face() -> StubFont {
    StubFont::new(showcase_metrics())
        .with_glyph('A', square_outline())
        .with_glyph('O', nested_squares_outline())
        .with_glyph(' ', GlyphOutline::empty(500.0))
}

/// Face whose only glyph mixes quadratic and cubic segments.
pub fn curve_face() -> StubFont {
    StubFont::new(showcase_metrics()).with_glyph('C', curve_outline())
}

/// Face reporting a collapsed vertical extent; layout must reject it.
pub fn degenerate_face() -> StubFont {
    let metrics = FontMetrics {
        units_per_em: UNITS_PER_EM,
        bounds: BoundingBox {
            x_min: 0.0,
            y_min: 800.0,
            x_max: 1000.0,
            y_max: 800.0,
        },
    };
    StubFont::new(metrics).with_glyph('A', square_outline())
}

/// Face whose `X` outline illegally opens with a drawing command.
pub fn broken_face() -> StubFont {
    StubFont::new(showcase_metrics()).with_glyph(
        'X',
        GlyphOutline::new(
            vec![
                PathCommand::LineTo { x: 900.0, y: 700.0 },
                PathCommand::Close,
            ],
            1000.0,
        ),
    )
}
