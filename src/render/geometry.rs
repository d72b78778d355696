//! Aliased rasterization of tile primitives under quarter-turn rotation
//!
//! Primitives are described in tile-local coordinates `[0, size]²` with `y`
//! pointing down. A pixel is covered when its centre, mapped back into the
//! unrotated tile, lies inside the primitive (edges inclusive). Each pixel
//! centre belongs to exactly one tile of a grid, so the inclusive edges never
//! fill a pixel twice within a layer.

use crate::render::buffer::OffscreenBuffer;

/// A point in tile-local or buffer coordinates
pub type Point = [f64; 2];

/// Filled shape in unrotated tile-local coordinates
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Primitive {
    /// Triangle given by its three vertices
    Triangle([Point; 3]),
    /// Full disc
    Disc {
        /// Disc centre
        center: Point,
        /// Disc radius
        radius: f64,
    },
    /// Half disc sweeping clockwise from straight up to straight down (the `x >= center` half)
    HalfDisc {
        /// Centre of the full circle
        center: Point,
        /// Circle radius
        radius: f64,
    },
}

impl Primitive {
    /// Whether a tile-local point lies inside the primitive
    pub fn contains(&self, point: Point) -> bool {
        match *self {
            Self::Triangle(vertices) => triangle_contains(vertices, point),
            Self::Disc { center, radius } => distance_squared(center, point) <= radius * radius,
            Self::HalfDisc { center, radius } => {
                point[0] >= center[0] && distance_squared(center, point) <= radius * radius
            }
        }
    }
}

/// Placement of a tile inside the buffer
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TileFrame {
    /// Left edge in buffer pixels
    pub x: f64,
    /// Top edge in buffer pixels
    pub y: f64,
    /// Tile side in buffer pixels
    pub size: f64,
    /// Clockwise quarter turns about the tile centre
    pub quarter_turns: u8,
}

impl TileFrame {
    /// Map a buffer point into the unrotated tile-local frame
    pub fn to_local(&self, point: Point) -> Point {
        let half = self.size / 2.0;
        let mut dx = point[0] - (self.x + half);
        let mut dy = point[1] - (self.y + half);

        for _ in 0..self.quarter_turns % 4 {
            (dx, dy) = (dy, -dx);
        }

        [dx + half, dy + half]
    }

    /// Map a tile-local point into buffer coordinates
    pub fn to_buffer(&self, point: Point) -> Point {
        let half = self.size / 2.0;
        let mut dx = point[0] - half;
        let mut dy = point[1] - half;

        for _ in 0..self.quarter_turns % 4 {
            (dx, dy) = (-dy, dx);
        }

        [dx + self.x + half, dy + self.y + half]
    }
}

/// Add `amount` to every buffer pixel whose centre falls inside the placed primitive
///
/// Returns the number of pixels touched.
pub fn fill_primitive(
    buffer: &mut OffscreenBuffer,
    frame: &TileFrame,
    primitive: &Primitive,
    amount: u8,
) -> usize {
    let side = buffer.side();
    let (cols, rows) = (
        pixel_span(frame.x, frame.size, side),
        pixel_span(frame.y, frame.size, side),
    );
    let mut covered = 0;

    for row in rows {
        for col in cols.clone() {
            let centre = [col as f64 + 0.5, row as f64 + 0.5];
            if primitive.contains(frame.to_local(centre)) {
                buffer.add_intensity(col, row, amount);
                covered += 1;
            }
        }
    }

    covered
}

// Pixel indices whose centres lie in [start, start + size), clamped to the buffer
//
// Adjacent tiles share no pixel even when a boundary hits a centre exactly.
fn pixel_span(start: f64, size: f64, side: usize) -> std::ops::Range<usize> {
    let first = (start - 0.5).ceil().max(0.0) as usize;
    let last = (start + size - 0.5).ceil().max(0.0) as usize;
    first.min(side)..last.min(side)
}

fn distance_squared(a: Point, b: Point) -> f64 {
    let dx = a[0] - b[0];
    let dy = a[1] - b[1];
    dx.mul_add(dx, dy * dy)
}

fn edge(a: Point, b: Point, p: Point) -> f64 {
    (b[0] - a[0]).mul_add(p[1] - a[1], -((b[1] - a[1]) * (p[0] - a[0])))
}

fn triangle_contains([a, b, c]: [Point; 3], point: Point) -> bool {
    let e0 = edge(a, b, point);
    let e1 = edge(b, c, point);
    let e2 = edge(c, a, point);

    (e0 >= 0.0 && e1 >= 0.0 && e2 >= 0.0) || (e0 <= 0.0 && e1 <= 0.0 && e2 <= 0.0)
}
