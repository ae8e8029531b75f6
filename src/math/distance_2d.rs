use super::{Point2, Vector2};

/// Left-pointing perpendicular of the edge `start -> end` (not normalized).
#[must_use]
#[inline]
pub fn left_normal(start: &Point2, end: &Point2) -> Vector2 {
    let d = end - start;
    Vector2::new(-d.y, d.x)
}

/// Offset of `point` along the edge's left normal, scaled by the edge length.
///
/// Has the same sign as [`super::orientation::orient_2d`]; useful for ranking
/// points by distance from a fixed edge without a square root.
#[must_use]
#[inline]
pub fn perpendicular_offset(start: &Point2, end: &Point2, point: &Point2) -> f64 {
    left_normal(start, end).dot(&(point - start))
}

/// Signed distance from `point` to the infinite line through `start` and `end`.
///
/// Positive on the left of the directed line. For a zero-length edge this is the
/// (unsigned) distance to `start`.
#[must_use]
pub fn signed_distance_to_line(start: &Point2, end: &Point2, point: &Point2) -> f64 {
    let len = (end - start).norm();
    if len < 1e-20 {
        return (point - start).norm();
    }
    perpendicular_offset(start, end, point) / len
}

/// Returns the minimum distance from `point` to the segment `a -> b`.
#[must_use]
pub fn point_to_segment_dist(point: &Point2, a: &Point2, b: &Point2) -> f64 {
    let d = b - a;
    let len_sq = d.norm_squared();

    if len_sq < 1e-20 {
        // Degenerate segment (zero length).
        return (point - a).norm();
    }

    // Project point onto the infinite line, clamp to [0, 1].
    let t = ((point - a).dot(&d) / len_sq).clamp(0.0, 1.0);
    (point - (a + d * t)).norm()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    const TOL: f64 = 1e-10;

    fn p(x: f64, y: f64) -> Point2 {
        Point2::new(x, y)
    }

    #[test]
    fn signed_distance_left_and_right() {
        let (a, b) = (p(0.0, 0.0), p(2.0, 0.0));
        assert_relative_eq!(signed_distance_to_line(&a, &b, &p(1.0, 3.0)), 3.0, epsilon = TOL);
        assert_relative_eq!(signed_distance_to_line(&a, &b, &p(7.0, -2.0)), -2.0, epsilon = TOL);
    }

    #[test]
    fn signed_distance_degenerate_line() {
        let a = p(1.0, 1.0);
        assert_relative_eq!(signed_distance_to_line(&a, &a, &p(4.0, 5.0)), 5.0, epsilon = TOL);
    }

    #[test]
    fn perpendicular_offset_scales_with_edge_length() {
        let (a, b) = (p(0.0, 0.0), p(4.0, 0.0));
        assert_relative_eq!(perpendicular_offset(&a, &b, &p(1.0, 2.0)), 8.0);
    }

    #[test]
    fn segment_dist_perpendicular_projection() {
        let d = point_to_segment_dist(&p(1.0, 1.0), &p(0.0, 0.0), &p(2.0, 0.0));
        assert!((d - 1.0).abs() < TOL, "d={d}");
    }

    #[test]
    fn segment_dist_endpoint_closest() {
        let d = point_to_segment_dist(&p(-1.0, 0.0), &p(0.0, 0.0), &p(2.0, 0.0));
        assert!((d - 1.0).abs() < TOL, "d={d}");
    }

    #[test]
    fn segment_dist_degenerate() {
        let d = point_to_segment_dist(&p(3.0, 4.0), &p(0.0, 0.0), &p(0.0, 0.0));
        assert!((d - 5.0).abs() < TOL, "d={d}");
    }
}
