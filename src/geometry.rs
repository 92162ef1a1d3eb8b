//! Small 2-D helpers shared by collision and beam hit-testing.
//!
//! All coordinates are world units (see `config::GameConfig::cell_width`
//! for how the terminal host maps them to cells).

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub const fn new(x: f32, y: f32) -> Self {
        Point { x, y }
    }

    pub fn distance(self, other: Point) -> f32 {
        (self.x - other.x).hypot(self.y - other.y)
    }
}

/// Shortest distance from `p` to the segment `a..b`.
///
/// A degenerate segment (`a == b`) yields the plain point distance.
pub fn distance_to_segment(p: Point, a: Point, b: Point) -> f32 {
    let (cx, cy) = (b.x - a.x, b.y - a.y);
    let len_sq = cx * cx + cy * cy;
    if len_sq == 0.0 {
        return p.distance(a);
    }
    let t = (((p.x - a.x) * cx + (p.y - a.y) * cy) / len_sq).clamp(0.0, 1.0);
    p.distance(Point::new(a.x + t * cx, a.y + t * cy))
}

/// Strict circle overlap: touching edges do not count.
pub fn circles_overlap(a: Point, ra: f32, b: Point, rb: f32) -> bool {
    a.distance(b) < ra + rb
}

/// Unit direction from `from` towards `to`; `(0, 0)` when the points coincide.
pub fn unit_vector(from: Point, to: Point) -> (f32, f32) {
    let (dx, dy) = (to.x - from.x, to.y - from.y);
    let len = dx.hypot(dy);
    let len = if len == 0.0 { 1.0 } else { len };
    (dx / len, dy / len)
}
