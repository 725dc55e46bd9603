//! Interface for types that can provide glyph outlines and font metrics.

use crate::charset::CodePoint;
use crate::outline::GlyphOutline;

/// Bounding box in font units covering every glyph extent in the font.
#[derive(Copy, Clone, PartialEq, Default, Debug)]
pub struct BoundingBox {
    pub x_min: f32,
    pub y_min: f32,
    pub x_max: f32,
    pub y_max: f32,
}

impl BoundingBox {
    pub const fn new(x_min: f32, y_min: f32, x_max: f32, y_max: f32) -> Self {
        Self {
            x_min,
            y_min,
            x_max,
            y_max,
        }
    }
}

/// Global metrics required to place a glyph in a swatch cell.
#[derive(Copy, Clone, PartialEq, Default, Debug)]
pub struct FontMetrics {
    /// Number of font design units per em unit.
    pub units_per_em: u16,
    /// Union of all glyph extents in the font.
    pub bounds: BoundingBox,
}

/// Capability interface for fonts that can supply glyph outlines.
///
/// "Not yet loaded" is expressed at the call site rather than probed for:
/// the renderer takes `Option<&F>` and `None` selects the fallback path.
/// Implementations never see an absent font.
pub trait FontProvider {
    /// Returns the outline for `code_point`, or `None` when the font maps
    /// no glyph to it.
    fn outline(&self, code_point: CodePoint) -> Option<GlyphOutline>;

    /// Returns the global metrics of the font.
    fn metrics(&self) -> FontMetrics;
}
