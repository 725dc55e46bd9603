//! Sheet geometry and composition.
//!
//! A sheet is a paper-colored page of swatch cells in a fixed-column
//! grid, each cell captioned with its code point in hex. Hovered and
//! selected cells get an ink card behind the glyph, matching the
//! showcase grid's inverted presentation.

use glyphcell::color::{BASE_INK, PAPER};
use glyphcell::fallback;
use glyphcell::{CellRenderer, CodePoint, FontProvider, GridIndex, Pixmap, Surface};

/// Spacing around cells, logical units.
const GAP: f32 = 8.0;
/// Caption strip height under each cell, logical units.
const CAPTION: f32 = 12.0;
/// Caption character box size, logical units.
const CAPTION_TEXT: f32 = 6.0;

/// Grid parameters for one sheet.
#[derive(Copy, Clone, Debug)]
pub struct SheetSpec {
    /// Swatch cell size (cells are square), logical units.
    pub cell: f32,
    /// Device pixel ratio applied to the whole sheet.
    pub dpr: f32,
    /// Number of grid columns.
    pub columns: u32,
}

impl SheetSpec {
    fn pitch_x(&self) -> f32 {
        self.cell + GAP
    }

    fn pitch_y(&self) -> f32 {
        self.cell + CAPTION + GAP
    }

    /// Number of grid rows needed for `count` swatches.
    pub fn rows(&self, count: usize) -> u32 {
        let columns = self.columns.max(1) as usize;
        count.div_ceil(columns) as u32
    }

    /// Logical sheet size for `count` swatches.
    pub fn logical_size(&self, count: usize) -> (f32, f32) {
        let rows = self.rows(count);
        (
            GAP + self.columns.max(1) as f32 * self.pitch_x(),
            GAP + rows as f32 * self.pitch_y(),
        )
    }

    /// Top-left corner of the cell in grid slot `slot`, logical units.
    pub fn cell_origin(&self, slot: usize) -> (f32, f32) {
        let columns = self.columns.max(1) as usize;
        let column = (slot % columns) as f32;
        let row = (slot / columns) as f32;
        (GAP + column * self.pitch_x(), GAP + row * self.pitch_y())
    }
}

fn device(value: f32, dpr: f32) -> u32 {
    (value * dpr).round().max(0.0) as u32
}

/// Renders every swatch of `index` onto one sheet.
pub fn compose<F: FontProvider>(
    spec: &SheetSpec,
    index: &GridIndex,
    font: &F,
    selected: Option<char>,
    hovered: Option<char>,
) -> Pixmap {
    let dpr = spec.dpr.max(1.0);
    let count = index.len();
    let (width, height) = spec.logical_size(count);
    let mut sheet = Pixmap::new(device(width, dpr), device(height, dpr));
    sheet.fill(PAPER);

    let mut renderer = CellRenderer::default();
    for (slot, code_point) in index.code_points().enumerate() {
        let (x, y) = spec.cell_origin(slot);
        let is_selected = selected.map(CodePoint::from) == Some(code_point);
        let is_hovered = hovered.map(CodePoint::from) == Some(code_point);

        if is_selected || is_hovered {
            let mut card = Pixmap::new(device(spec.cell, dpr), device(spec.cell, dpr));
            card.fill(BASE_INK);
            sheet.composite(&card, device(x, dpr), device(y, dpr));
        }

        let mut surface = Surface::new(spec.cell, spec.cell, dpr);
        renderer.render(&mut surface, code_point, Some(font), is_hovered, is_selected);
        sheet.composite(surface.pixmap(), device(x, dpr), device(y, dpr));

        let caption = code_point.to_string();
        fallback::draw_text(
            &mut sheet,
            &caption,
            x + spec.cell / 2.0,
            y + spec.cell + CAPTION / 2.0,
            CAPTION_TEXT,
            dpr,
            BASE_INK,
        );
    }
    sheet
}

#[cfg(test)]
mod tests {
    use super::*;
    use cell_test_fonts::square_face;
    use glyphcell::surface::Rgba8;
    use glyphcell::{CharacterSet, CodePointRange};

    fn spec() -> SheetSpec {
        SheetSpec {
            cell: 48.0,
            dpr: 1.0,
            columns: 4,
        }
    }

    #[test]
    fn rows_round_up() {
        assert_eq!(spec().rows(1), 1);
        assert_eq!(spec().rows(4), 1);
        assert_eq!(spec().rows(5), 2);
        assert_eq!(spec().rows(0), 0);
    }

    #[test]
    fn origins_advance_by_pitch() {
        let spec = spec();
        assert_eq!(spec.cell_origin(0), (8.0, 8.0));
        assert_eq!(spec.cell_origin(1), (8.0 + 56.0, 8.0));
        assert_eq!(spec.cell_origin(4), (8.0, 8.0 + 68.0));
    }

    #[test]
    fn composed_sheet_has_paper_and_ink() {
        let index = GridIndex::new(vec![CharacterSet::new(
            "Squares",
            vec![CodePointRange::new('A' as u32, 'A' as u32)],
        )]);
        let font = square_face();
        let sheet = compose(&spec(), &index, &font, None, None);
        let (width, height) = spec().logical_size(1);
        assert_eq!(sheet.width(), width as u32);
        assert_eq!(sheet.height(), height as u32);
        // Paper shows at the margin, ink at the glyph center.
        assert_eq!(sheet.pixel(0, 0), Rgba8::from_color(PAPER));
        assert_eq!(sheet.pixel(8 + 24, 8 + 24), Rgba8::from_color(BASE_INK));
    }

    #[test]
    fn selected_cell_is_inverted() {
        let index = GridIndex::new(vec![CharacterSet::new(
            "Squares",
            vec![CodePointRange::new('A' as u32, 'A' as u32)],
        )]);
        let font = square_face();
        let sheet = compose(&spec(), &index, &font, Some('A'), None);
        // Card background is ink; the glyph itself is highlight.
        assert_eq!(sheet.pixel(8 + 1, 8 + 1), Rgba8::from_color(BASE_INK));
        let center = sheet.pixel(8 + 24, 8 + 24);
        assert_eq!((center.r, center.g, center.b), (0xF9, 0xF9, 0xF9));
    }
}
