use super::Point2;

/// Which side of a directed edge a point lies on.
///
/// A positive determinant means the point lies to the left of the directed
/// edge, i.e. the triple `(edge_start, edge_end, point)` turns counter-clockwise.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    /// Counter-clockwise of the edge (positive determinant).
    Left,
    /// Clockwise of the edge (negative determinant).
    Right,
    /// Exactly on the edge's supporting line.
    Collinear,
}

/// Raw orientation determinant of `point` against the edge `edge_start -> edge_end`.
///
/// Equals twice the signed area of the triangle `(edge_start, edge_end, point)`.
#[must_use]
#[inline]
pub fn orient_2d(edge_start: &Point2, edge_end: &Point2, point: &Point2) -> f64 {
    (edge_start.x - point.x) * (edge_end.y - point.y)
        - (edge_end.x - point.x) * (edge_start.y - point.y)
}

/// Classifies `point` against the directed edge `edge_start -> edge_end`.
///
/// Only an exact zero determinant counts as collinear.
#[must_use]
pub fn classify_side(edge_start: &Point2, edge_end: &Point2, point: &Point2) -> Side {
    let det = orient_2d(edge_start, edge_end, point);
    if det > 0.0 {
        Side::Left
    } else if det < 0.0 {
        Side::Right
    } else {
        Side::Collinear
    }
}

/// Signed area of the triangle `(a, b, c)`, positive when counter-clockwise.
#[must_use]
#[inline]
pub fn triangle_area_2d(a: &Point2, b: &Point2, c: &Point2) -> f64 {
    0.5 * (a.x * (b.y - c.y) - b.x * (a.y - c.y) + c.x * (a.y - b.y))
}
