//! Scanline path filling.

use core::cmp::Ordering;

use kurbo::{Affine, BezPath, PathEl, Point};

use crate::color::Color;
use crate::outline::OutlinePen;
use crate::surface::Pixmap;

/// Flattening tolerance in physical pixels.
const TOLERANCE: f64 = 0.25;

/// Pen that accumulates commands into a bezier path in logical units.
#[derive(Default)]
pub(crate) struct BezPathPen(BezPath);

impl BezPathPen {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn into_path(self) -> BezPath {
        self.0
    }
}

impl OutlinePen for BezPathPen {
    fn move_to(&mut self, x: f32, y: f32) {
        self.0.move_to(Point::new(x as f64, y as f64));
    }

    fn line_to(&mut self, x: f32, y: f32) {
        self.0.line_to(Point::new(x as f64, y as f64));
    }

    fn quad_to(&mut self, cx0: f32, cy0: f32, x: f32, y: f32) {
        self.0.quad_to(
            Point::new(cx0 as f64, cy0 as f64),
            Point::new(x as f64, y as f64),
        );
    }

    fn curve_to(&mut self, cx0: f32, cy0: f32, cx1: f32, cy1: f32, x: f32, y: f32) {
        self.0.curve_to(
            Point::new(cx0 as f64, cy0 as f64),
            Point::new(cx1 as f64, cy1 as f64),
            Point::new(x as f64, y as f64),
        );
    }

    fn close(&mut self) {
        self.0.close_path();
    }
}

/// True if the path contains at least one drawable segment.
pub(crate) fn has_segments(path: &BezPath) -> bool {
    path.segments().next().is_some()
}

/// A non-horizontal line segment with its winding direction.
#[derive(Copy, Clone, Debug)]
struct Edge {
    x0: f32,
    y0: f32,
    x1: f32,
    y1: f32,
    /// +1 for downward edges, -1 for upward.
    dir: i32,
}

impl Edge {
    fn top(&self) -> f32 {
        self.y0.min(self.y1)
    }

    fn bottom(&self) -> f32 {
        self.y0.max(self.y1)
    }

    /// X coordinate where the edge crosses the horizontal line at `y`.
    fn x_at(&self, y: f32) -> f32 {
        let t = (y - self.y0) / (self.y1 - self.y0);
        self.x0 + t * (self.x1 - self.x0)
    }
}

fn push_edge(edges: &mut Vec<Edge>, from: Point, to: Point) {
    let (y0, y1) = (from.y as f32, to.y as f32);
    // Horizontal edges never cross a scanline sample.
    if (y1 - y0).abs() <= f32::EPSILON {
        return;
    }
    edges.push(Edge {
        x0: from.x as f32,
        y0,
        x1: to.x as f32,
        y1,
        dir: if y1 > y0 { 1 } else { -1 },
    });
}

/// Flattens `path` into edges, closing open subpaths the way a canvas
/// fill does.
fn collect_edges(path: &BezPath, dpr: f32) -> Vec<Edge> {
    let scaled = Affine::scale(dpr as f64) * path.clone();
    let mut edges = Vec::new();
    let mut start = Point::ZERO;
    let mut last = Point::ZERO;
    kurbo::flatten(scaled.elements().iter().copied(), TOLERANCE, |el| match el {
        PathEl::MoveTo(p) => {
            push_edge(&mut edges, last, start);
            start = p;
            last = p;
        }
        PathEl::LineTo(p) => {
            push_edge(&mut edges, last, p);
            last = p;
        }
        PathEl::ClosePath => {
            push_edge(&mut edges, last, start);
            last = start;
        }
        // Flattening yields only moves, lines and closes.
        _ => {}
    });
    push_edge(&mut edges, last, start);
    edges
}

/// Fills `path` (logical units) into `pixmap` using non-zero winding,
/// scaling coordinates by `dpr`. One coverage sample per pixel row, with
/// fractional horizontal coverage at span edges.
pub(crate) fn fill_path(pixmap: &mut Pixmap, path: &BezPath, dpr: f32, color: Color) {
    let edges = collect_edges(path, dpr);
    if edges.is_empty() {
        return;
    }
    let mut crossings: Vec<(f32, i32)> = Vec::new();
    for row in 0..pixmap.height() {
        let y = row as f32 + 0.5;
        crossings.clear();
        for edge in &edges {
            if y >= edge.top() && y < edge.bottom() {
                crossings.push((edge.x_at(y), edge.dir));
            }
        }
        crossings.sort_by(|a, b| a.0.partial_cmp(&b.0).unwrap_or(Ordering::Equal));
        let mut winding = 0;
        let mut span_start = 0.0f32;
        for &(x, dir) in crossings.iter() {
            let was_inside = winding != 0;
            winding += dir;
            if !was_inside && winding != 0 {
                span_start = x;
            } else if was_inside && winding == 0 {
                fill_span(pixmap, row, span_start, x, color);
            }
        }
    }
}

fn fill_span(pixmap: &mut Pixmap, row: u32, from: f32, to: f32, color: Color) {
    let width = pixmap.width() as f32;
    let from = from.max(0.0);
    let to = to.min(width);
    if to <= from {
        return;
    }
    let first = from.floor() as u32;
    let last = (to.ceil() as u32).min(pixmap.width());
    for column in first..last {
        let left = from.max(column as f32);
        let right = to.min(column as f32 + 1.0);
        let coverage = (right - left).max(0.0);
        pixmap.blend(column, row, color, coverage);
    }
}
