//! Glyph swatch rasterization for typeface showcases.
//!
//! Glyphcell draws one character per fixed-size cell from a font's
//! outline data: outline commands are replayed against a scanline filler
//! with the glyph's advance box centered in the cell, and anything that
//! cannot be drawn from outlines (font still loading, no glyph for the
//! character, degenerate metrics, malformed command stream) resolves to a
//! built-in fallback face instead of an error. A cell render never throws
//! and never leaves the surface in an undefined state.
//!
//! The crate sits below whatever drives it: a grid widget, an export
//! tool, a test harness. Callers own the surfaces, supply a
//! [`FontProvider`] (or `None` while loading) and the two highlight
//! flags, and poll the deferred-redraw queue when a draw against a
//! zero-sized surface had to be postponed.

pub mod cell;
pub mod charset;
pub mod color;
pub mod error;
pub mod fallback;
pub mod outline;
pub mod provider;
pub mod redraw;
pub mod surface;

mod raster;

#[cfg(feature = "opentype")]
pub mod opentype;

pub use cell::{CellLayout, CellRenderer, RenderOutcome};
pub use charset::{CharacterSet, CodePoint, CodePointRange, GridIndex, GridPosition};
pub use color::{CellStyle, Color};
pub use error::{FallbackReason, ReplayError};
pub use outline::{GlyphOutline, OutlinePen, PathCommand};
pub use provider::{BoundingBox, FontMetrics, FontProvider};
pub use redraw::{InputStamp, RedrawQueue, RetryTicket};
pub use surface::{Pixmap, Rgba8, Surface};
