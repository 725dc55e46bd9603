//! OpenType-backed font provider.
//!
//! Bridges the skrifa scaler into the [`FontProvider`] contract: charmap
//! lookup from code point to glyph id, unhinted unscaled outline drawing
//! into the recording pen, and global metrics from the font header. No
//! shaping, no hinting.

use skrifa::instance::{LocationRef, Size};
use skrifa::outline::DrawSettings;
use skrifa::{FontRef, MetadataProvider};

use crate::charset::CodePoint;
use crate::outline::{GlyphOutline, PathCommand};
use crate::provider::{BoundingBox, FontMetrics, FontProvider};

pub use skrifa::raw::ReadError;

/// Font provider for a parsed OpenType font.
#[derive(Clone)]
pub struct OpenTypeFont<'a> {
    font: FontRef<'a>,
}

impl<'a> OpenTypeFont<'a> {
    /// Creates a provider for the font in `data`. For a collection this
    /// selects the first font; see [`Self::from_index`].
    pub fn new(data: &'a [u8]) -> Result<Self, ReadError> {
        Ok(Self {
            font: FontRef::new(data)?,
        })
    }

    /// Creates a provider for the font at `index` in a collection.
    pub fn from_index(data: &'a [u8], index: u32) -> Result<Self, ReadError> {
        Ok(Self {
            font: FontRef::from_index(data, index)?,
        })
    }

    /// The underlying font reference.
    pub fn font(&self) -> &FontRef<'a> {
        &self.font
    }
}

/// Adapter feeding skrifa's pen calls into the recorded command stream.
#[derive(Default)]
struct RecordingPen(Vec<PathCommand>);

impl skrifa::outline::OutlinePen for RecordingPen {
    fn move_to(&mut self, x: f32, y: f32) {
        self.0.push(PathCommand::MoveTo { x, y });
    }

    fn line_to(&mut self, x: f32, y: f32) {
        self.0.push(PathCommand::LineTo { x, y });
    }

    fn quad_to(&mut self, cx0: f32, cy0: f32, x: f32, y: f32) {
        self.0.push(PathCommand::QuadTo { cx0, cy0, x, y });
    }

    fn curve_to(&mut self, cx0: f32, cy0: f32, cx1: f32, cy1: f32, x: f32, y: f32) {
        self.0.push(PathCommand::CurveTo {
            cx0,
            cy0,
            cx1,
            cy1,
            x,
            y,
        });
    }

    fn close(&mut self) {
        self.0.push(PathCommand::Close);
    }
}

impl FontProvider for OpenTypeFont<'_> {
    fn outline(&self, code_point: CodePoint) -> Option<GlyphOutline> {
        let glyph_id = self.font.charmap().map(code_point.value())?;
        let glyph = self.font.outline_glyphs().get(glyph_id)?;
        let mut pen = RecordingPen::default();
        let settings: DrawSettings = (Size::unscaled(), LocationRef::default()).into();
        if let Err(e) = glyph.draw(settings, &mut pen) {
            log::debug!("outline draw failed for U+{code_point}: {e}");
            return None;
        }
        let advance = self
            .font
            .glyph_metrics(Size::unscaled(), LocationRef::default())
            .advance_width(glyph_id)
            .unwrap_or_default();
        Some(GlyphOutline::new(pen.0, advance))
    }

    fn metrics(&self) -> FontMetrics {
        let metrics = self.font.metrics(Size::unscaled(), LocationRef::default());
        // A font without a bounding box reports degenerate bounds and the
        // renderer falls back.
        let bounds = metrics
            .bounds
            .map(|b| BoundingBox::new(b.x_min, b.y_min, b.x_max, b.y_max))
            .unwrap_or_default();
        FontMetrics {
            units_per_em: metrics.units_per_em,
            bounds,
        }
    }
}
