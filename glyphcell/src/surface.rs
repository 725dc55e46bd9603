//! Fixed-size pixel surfaces.

use bytemuck::{Pod, Zeroable};

use crate::color::Color;

/// Premultiplied 8-bit RGBA pixel.
#[repr(C)]
#[derive(Copy, Clone, PartialEq, Eq, Default, Debug, Pod, Zeroable)]
pub struct Rgba8 {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba8 {
    /// Premultiplies a straight-alpha color.
    pub fn from_color(color: Color) -> Self {
        let alpha = color.a as f32 / 255.0;
        let premul = |channel: u8| (channel as f32 * alpha).round() as u8;
        Self {
            r: premul(color.r),
            g: premul(color.g),
            b: premul(color.b),
            a: color.a,
        }
    }
}

/// Physical pixel buffer, row major, origin top left.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Pixmap {
    width: u32,
    height: u32,
    pixels: Vec<Rgba8>,
}

impl Pixmap {
    /// Creates a transparent pixmap. Zero dimensions are allowed and give
    /// an empty buffer.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            pixels: vec![Rgba8::default(); (width * height) as usize],
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Resets every pixel to transparent.
    pub fn clear(&mut self) {
        self.pixels.fill(Rgba8::default());
    }

    /// Sets every pixel to `color`.
    pub fn fill(&mut self, color: Color) {
        self.pixels.fill(Rgba8::from_color(color));
    }

    /// True if every pixel is fully transparent.
    pub fn is_blank(&self) -> bool {
        self.pixels.iter().all(|pixel| *pixel == Rgba8::default())
    }

    pub fn pixels(&self) -> &[Rgba8] {
        &self.pixels
    }

    /// Pixel at (x, y); transparent outside the buffer.
    pub fn pixel(&self, x: u32, y: u32) -> Rgba8 {
        if x < self.width && y < self.height {
            self.pixels[(y * self.width + x) as usize]
        } else {
            Rgba8::default()
        }
    }

    /// Raw premultiplied RGBA bytes.
    pub fn data(&self) -> &[u8] {
        bytemuck::cast_slice(&self.pixels)
    }

    /// Straight-alpha RGBA bytes for image export.
    pub fn to_rgba8(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(self.pixels.len() * 4);
        for pixel in &self.pixels {
            if pixel.a == 0 {
                out.extend_from_slice(&[0, 0, 0, 0]);
            } else {
                let alpha = pixel.a as f32 / 255.0;
                let unpremul = |channel: u8| ((channel as f32 / alpha).round() as u32).min(255) as u8;
                out.extend_from_slice(&[
                    unpremul(pixel.r),
                    unpremul(pixel.g),
                    unpremul(pixel.b),
                    pixel.a,
                ]);
            }
        }
        out
    }

    /// Blends `color` over the pixel at (x, y) with the given coverage in
    /// [0, 1]. Out-of-bounds writes are dropped.
    pub fn blend(&mut self, x: u32, y: u32, color: Color, coverage: f32) {
        if x >= self.width || y >= self.height {
            return;
        }
        let alpha = (color.a as f32 / 255.0) * coverage.clamp(0.0, 1.0);
        if alpha <= 0.0 {
            return;
        }
        let index = (y * self.width + x) as usize;
        let dst = self.pixels[index];
        let blend_channel = |src: u8, dst: u8| {
            (src as f32 * alpha + dst as f32 * (1.0 - alpha)).round() as u8
        };
        self.pixels[index] = Rgba8 {
            r: blend_channel(color.r, dst.r),
            g: blend_channel(color.g, dst.g),
            b: blend_channel(color.b, dst.b),
            a: blend_channel(0xFF, dst.a),
        };
    }

    /// Composites `src` over this pixmap with its top-left corner at
    /// (x, y). Source pixels are premultiplied; standard source-over.
    pub fn composite(&mut self, src: &Pixmap, x: u32, y: u32) {
        for sy in 0..src.height {
            let dy = y + sy;
            if dy >= self.height {
                break;
            }
            for sx in 0..src.width {
                let dx = x + sx;
                if dx >= self.width {
                    break;
                }
                let s = src.pixels[(sy * src.width + sx) as usize];
                if s.a == 0 {
                    continue;
                }
                let index = (dy * self.width + dx) as usize;
                let d = self.pixels[index];
                let inverse = 1.0 - s.a as f32 / 255.0;
                let over = |s: u8, d: u8| {
                    ((s as f32 + d as f32 * inverse).round() as u32).min(255) as u8
                };
                self.pixels[index] = Rgba8 {
                    r: over(s.r, d.r),
                    g: over(s.g, d.g),
                    b: over(s.b, d.b),
                    a: over(s.a, d.a),
                };
            }
        }
    }
}

/// Drawing target for one swatch cell.
///
/// Sizing is the caller's responsibility: the surface carries a logical
/// width and height plus a device pixel ratio, and the renderer
/// (re)establishes the physical buffer from them at draw time. All drawing
/// coordinates are logical; the ratio is applied during rasterization.
#[derive(Clone, PartialEq, Debug)]
pub struct Surface {
    width: f32,
    height: f32,
    dpr: f32,
    pixmap: Pixmap,
}

impl Surface {
    /// Creates a surface with the given logical size. The device pixel
    /// ratio is clamped to at least 1. The physical buffer stays empty
    /// until the first draw.
    pub fn new(width: f32, height: f32, dpr: f32) -> Self {
        Self {
            width,
            height,
            dpr: dpr.max(1.0),
            pixmap: Pixmap::new(0, 0),
        }
    }

    pub fn width(&self) -> f32 {
        self.width
    }

    pub fn height(&self) -> f32 {
        self.height
    }

    pub fn dpr(&self) -> f32 {
        self.dpr
    }

    /// True when either logical extent is zero; drawing must be deferred
    /// until layout settles.
    pub fn is_zero_sized(&self) -> bool {
        self.width <= 0.0 || self.height <= 0.0
    }

    /// Updates the logical size, e.g. after a layout pass.
    pub fn set_size(&mut self, width: f32, height: f32) {
        self.width = width;
        self.height = height;
    }

    pub fn pixmap(&self) -> &Pixmap {
        &self.pixmap
    }

    #[doc(hidden)]
    pub fn pixmap_mut(&mut self) -> &mut Pixmap {
        &mut self.pixmap
    }

    /// (Re)establishes the physical buffer at the current logical size
    /// times the device pixel ratio, cleared to transparent.
    #[doc(hidden)]
    pub fn prepare(&mut self) {
        let width = (self.width * self.dpr).round() as u32;
        let height = (self.height * self.dpr).round() as u32;
        if self.pixmap.width() != width || self.pixmap.height() != height {
            self.pixmap = Pixmap::new(width, height);
        } else {
            self.pixmap.clear();
        }
    }
}
