//! Built-in fallback face.
//!
//! A 5x7 dot-matrix face used when a glyph cannot be drawn from outline
//! data, and for swatch captions. Lowercase folds to uppercase; anything
//! uncovered renders as the notdef box, so a cell is never left empty by
//! a missing pattern.

use crate::color::Color;
use crate::surface::Pixmap;

/// Dot-matrix rows, top to bottom; bit 4 is the leftmost column.
type Rows = [u8; 7];

const NOTDEF: Rows = [0x1F, 0x11, 0x11, 0x11, 0x11, 0x11, 0x1F];

#[rustfmt::skip]
const FACE: &[(char, Rows)] = &[
    (' ', [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00]),
    ('0', [0x0E, 0x11, 0x13, 0x15, 0x19, 0x11, 0x0E]),
    ('1', [0x04, 0x0C, 0x04, 0x04, 0x04, 0x04, 0x0E]),
    ('2', [0x0E, 0x11, 0x01, 0x02, 0x04, 0x08, 0x1F]),
    ('3', [0x1F, 0x02, 0x04, 0x02, 0x01, 0x11, 0x0E]),
    ('4', [0x02, 0x06, 0x0A, 0x12, 0x1F, 0x02, 0x02]),
    ('5', [0x1F, 0x10, 0x1E, 0x01, 0x01, 0x11, 0x0E]),
    ('6', [0x06, 0x08, 0x10, 0x1E, 0x11, 0x11, 0x0E]),
    ('7', [0x1F, 0x01, 0x02, 0x04, 0x08, 0x08, 0x08]),
    ('8', [0x0E, 0x11, 0x11, 0x0E, 0x11, 0x11, 0x0E]),
    ('9', [0x0E, 0x11, 0x11, 0x0F, 0x01, 0x02, 0x0C]),
    ('A', [0x0E, 0x11, 0x11, 0x1F, 0x11, 0x11, 0x11]),
    ('B', [0x1E, 0x11, 0x11, 0x1E, 0x11, 0x11, 0x1E]),
    ('C', [0x0E, 0x11, 0x10, 0x10, 0x10, 0x11, 0x0E]),
    ('D', [0x1C, 0x12, 0x11, 0x11, 0x11, 0x12, 0x1C]),
    ('E', [0x1F, 0x10, 0x10, 0x1E, 0x10, 0x10, 0x1F]),
    ('F', [0x1F, 0x10, 0x10, 0x1E, 0x10, 0x10, 0x10]),
    ('G', [0x0E, 0x11, 0x10, 0x17, 0x11, 0x11, 0x0F]),
    ('H', [0x11, 0x11, 0x11, 0x1F, 0x11, 0x11, 0x11]),
    ('I', [0x0E, 0x04, 0x04, 0x04, 0x04, 0x04, 0x0E]),
    ('J', [0x07, 0x02, 0x02, 0x02, 0x02, 0x12, 0x0C]),
    ('K', [0x11, 0x12, 0x14, 0x18, 0x14, 0x12, 0x11]),
    ('L', [0x10, 0x10, 0x10, 0x10, 0x10, 0x10, 0x1F]),
    ('M', [0x11, 0x1B, 0x15, 0x15, 0x11, 0x11, 0x11]),
    ('N', [0x11, 0x11, 0x19, 0x15, 0x13, 0x11, 0x11]),
    ('O', [0x0E, 0x11, 0x11, 0x11, 0x11, 0x11, 0x0E]),
    ('P', [0x1E, 0x11, 0x11, 0x1E, 0x10, 0x10, 0x10]),
    ('Q', [0x0E, 0x11, 0x11, 0x11, 0x15, 0x12, 0x0D]),
    ('R', [0x1E, 0x11, 0x11, 0x1E, 0x14, 0x12, 0x11]),
    ('S', [0x0F, 0x10, 0x10, 0x0E, 0x01, 0x01, 0x1E]),
    ('T', [0x1F, 0x04, 0x04, 0x04, 0x04, 0x04, 0x04]),
    ('U', [0x11, 0x11, 0x11, 0x11, 0x11, 0x11, 0x0E]),
    ('V', [0x11, 0x11, 0x11, 0x11, 0x11, 0x0A, 0x04]),
    ('W', [0x11, 0x11, 0x11, 0x15, 0x15, 0x15, 0x0A]),
    ('X', [0x11, 0x11, 0x0A, 0x04, 0x0A, 0x11, 0x11]),
    ('Y', [0x11, 0x11, 0x11, 0x0A, 0x04, 0x04, 0x04]),
    ('Z', [0x1F, 0x01, 0x02, 0x04, 0x08, 0x10, 0x1F]),
    ('.', [0x00, 0x00, 0x00, 0x00, 0x00, 0x0C, 0x0C]),
    (',', [0x00, 0x00, 0x00, 0x00, 0x0C, 0x04, 0x08]),
    (':', [0x00, 0x0C, 0x0C, 0x00, 0x0C, 0x0C, 0x00]),
    ('-', [0x00, 0x00, 0x00, 0x1F, 0x00, 0x00, 0x00]),
    ('!', [0x04, 0x04, 0x04, 0x04, 0x04, 0x00, 0x04]),
    ('?', [0x0E, 0x11, 0x01, 0x02, 0x04, 0x00, 0x04]),
    ('+', [0x00, 0x04, 0x04, 0x1F, 0x04, 0x04, 0x00]),
];

fn rows(ch: char) -> &'static Rows {
    let folded = ch.to_ascii_uppercase();
    FACE.iter()
        .find(|(covered, _)| *covered == folded)
        .map(|(_, rows)| rows)
        .unwrap_or(&NOTDEF)
}

/// Draws `ch` centered at (`cx`, `cy`) in logical units, in a square box
/// `size` logical units tall, scaled to the buffer by `dpr`.
///
/// The dot matrix is sampled nearest-neighbor over a 7x9 grid (one blank
/// column each side, one blank row above and below) so adjacent characters
/// keep their spacing at any size.
pub fn draw_char(pixmap: &mut Pixmap, ch: char, cx: f32, cy: f32, size: f32, dpr: f32, color: Color) {
    let box_size = size * dpr;
    if box_size <= 0.0 {
        return;
    }
    let rows = rows(ch);
    let left = cx * dpr - box_size / 2.0;
    let top = cy * dpr - box_size / 2.0;
    let first_row = top.floor().max(0.0) as u32;
    let last_row = ((top + box_size).ceil().max(0.0) as u32).min(pixmap.height());
    let first_col = left.floor().max(0.0) as u32;
    let last_col = ((left + box_size).ceil().max(0.0) as u32).min(pixmap.width());
    for py in first_row..last_row {
        let v = (py as f32 + 0.5 - top) / box_size;
        if !(0.0..1.0).contains(&v) {
            continue;
        }
        let gy = (v * 9.0) as usize;
        for px in first_col..last_col {
            let u = (px as f32 + 0.5 - left) / box_size;
            if !(0.0..1.0).contains(&u) {
                continue;
            }
            let gx = (u * 7.0) as usize;
            let bit = if (1..=5).contains(&gx) && (1..=7).contains(&gy) {
                (rows[gy - 1] >> (5 - gx)) & 1
            } else {
                0
            };
            if bit != 0 {
                pixmap.blend(px, py, color, 1.0);
            }
        }
    }
}

/// Draws `text` centered at (`cx`, `cy`), one `size`-tall box per
/// character.
pub fn draw_text(pixmap: &mut Pixmap, text: &str, cx: f32, cy: f32, size: f32, dpr: f32, color: Color) {
    let count = text.chars().count();
    if count == 0 {
        return;
    }
    let total = size * count as f32;
    let mut x = cx - total / 2.0 + size / 2.0;
    for ch in text.chars() {
        draw_char(pixmap, ch, x, cy, size, dpr, color);
        x += size;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::BASE_INK;
    use crate::surface::Rgba8;

    #[test]
    fn draws_inside_the_centered_box() {
        let mut pixmap = Pixmap::new(32, 32);
        draw_char(&mut pixmap, 'A', 16.0, 16.0, 20.0, 1.0, BASE_INK);
        assert!(!pixmap.is_blank());
        for y in 0..32 {
            for x in 0..32 {
                if pixmap.pixel(x, y) != Rgba8::default() {
                    assert!((6..26).contains(&x), "ink at column {x}");
                    assert!((6..26).contains(&y), "ink at row {y}");
                }
            }
        }
    }

    #[test]
    fn uncovered_characters_render_the_notdef_box() {
        let mut pixmap = Pixmap::new(32, 32);
        draw_char(&mut pixmap, '\u{2603}', 16.0, 16.0, 20.0, 1.0, BASE_INK);
        assert!(!pixmap.is_blank());
    }

    #[test]
    fn lowercase_folds_to_uppercase() {
        let mut upper = Pixmap::new(32, 32);
        let mut lower = Pixmap::new(32, 32);
        draw_char(&mut upper, 'G', 16.0, 16.0, 20.0, 1.0, BASE_INK);
        draw_char(&mut lower, 'g', 16.0, 16.0, 20.0, 1.0, BASE_INK);
        assert_eq!(upper, lower);
    }

    #[test]
    fn space_draws_nothing() {
        let mut pixmap = Pixmap::new(32, 32);
        draw_char(&mut pixmap, ' ', 16.0, 16.0, 20.0, 1.0, BASE_INK);
        assert!(pixmap.is_blank());
    }

    #[test]
    fn text_spans_one_box_per_character() {
        let mut pixmap = Pixmap::new(64, 16);
        draw_text(&mut pixmap, "0041", 32.0, 8.0, 10.0, 1.0, BASE_INK);
        assert!(!pixmap.is_blank());
        // Four 10px boxes centered at x=32: ink stays within 12..52.
        for y in 0..16 {
            for x in 0..64 {
                if pixmap.pixel(x, y) != Rgba8::default() {
                    assert!((12..52).contains(&x), "ink at column {x}");
                }
            }
        }
    }
}
