//! Colors and the swatch cell style.

/// 8-bit RGBA color with straight (non-premultiplied) alpha.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Fully opaque color.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::rgba(r, g, b, 0xFF)
    }
}

/// Ink for glyphs in their resting state.
pub const BASE_INK: Color = Color::rgb(16, 12, 8);

/// Ink for hovered or selected glyphs.
pub const HIGHLIGHT_INK: Color = Color::rgb(0xF9, 0xF9, 0xF9);

/// Sheet background used when compositing cells onto a page.
pub const PAPER: Color = Color::rgb(0xF3, 0xF3, 0xF3);

/// Visual configuration for a swatch cell.
///
/// Two fixed inks; the renderer picks between them from the highlight
/// flags and computes nothing else.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub struct CellStyle {
    pub base: Color,
    pub highlight: Color,
}

impl CellStyle {
    /// Foreground ink for the given highlight flags. Either flag selects
    /// the highlight ink.
    pub fn foreground(&self, hovered: bool, selected: bool) -> Color {
        if hovered || selected {
            self.highlight
        } else {
            self.base
        }
    }
}

impl Default for CellStyle {
    fn default() -> Self {
        Self {
            base: BASE_INK,
            highlight: HIGHLIGHT_INK,
        }
    }
}
