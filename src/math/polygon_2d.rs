use std::cmp::Ordering;

use super::distance_2d::{point_to_segment_dist, signed_distance_to_line};
use super::Point2;

/// Computes the signed area of a polygon (shoelace formula).
///
/// Positive for counter-clockwise, negative for clockwise.
#[must_use]
pub fn signed_area_2d(points: &[Point2]) -> f64 {
    let n = points.len();
    if n < 3 {
        return 0.0;
    }
    let mut sum = 0.0;
    for i in 0..n {
        let j = (i + 1) % n;
        sum += points[i].x * points[j].y - points[j].x * points[i].y;
    }
    sum * 0.5
}

/// Orders points by x, breaking ties by y. Total, so NaN coordinates still sort deterministically.
#[must_use]
pub fn lexicographic_cmp(a: &Point2, b: &Point2) -> Ordering {
    a.x.total_cmp(&b.x).then_with(|| a.y.total_cmp(&b.y))
}

/// Indices of the lexicographically smallest and largest points.
///
/// Exact duplicates resolve to their first occurrence. Returns `None` for an
/// empty slice.
#[must_use]
pub fn lexicographic_extremes(points: &[Point2]) -> Option<(usize, usize)> {
    let first = points.first()?;
    let (mut min, mut max) = (0, 0);
    let (mut lo, mut hi) = (first, first);
    for (i, pt) in points.iter().enumerate().skip(1) {
        if lexicographic_cmp(pt, lo) == Ordering::Less {
            min = i;
            lo = pt;
        }
        if lexicographic_cmp(pt, hi) == Ordering::Greater {
            max = i;
            hi = pt;
        }
    }
    Some((min, max))
}

/// Point-in-polygon test for a convex polygon given in either winding.
///
/// Boundary points (within `tolerance`) count as inside. One- and two-vertex
/// polygons are treated as a point and a segment respectively.
#[must_use]
pub fn point_in_convex_polygon(point: &Point2, polygon: &[Point2], tolerance: f64) -> bool {
    match polygon {
        [] => false,
        [only] => (point - only).norm() <= tolerance,
        [a, b] => point_to_segment_dist(point, a, b) <= tolerance,
        _ => {
            let ccw = signed_area_2d(polygon) > 0.0;
            let n = polygon.len();
            (0..n).all(|i| {
                let d = signed_distance_to_line(&polygon[i], &polygon[(i + 1) % n], point);
                if ccw {
                    d >= -tolerance
                } else {
                    d <= tolerance
                }
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::TOLERANCE;

    fn p(x: f64, y: f64) -> Point2 {
        Point2::new(x, y)
    }

    fn unit_square_ccw() -> Vec<Point2> {
        vec![p(0.0, 0.0), p(1.0, 0.0), p(1.0, 1.0), p(0.0, 1.0)]
    }

    #[test]
    fn signed_area_ccw_square() {
        let area = signed_area_2d(&unit_square_ccw());
        assert!((area - 1.0).abs() < TOLERANCE);
    }

    #[test]
    fn signed_area_cw_square() {
        let mut pts = unit_square_ccw();
        pts.reverse();
        let area = signed_area_2d(&pts);
        assert!((area + 1.0).abs() < TOLERANCE);
    }

    #[test]
    fn signed_area_degenerate() {
        assert!((signed_area_2d(&[p(0.0, 0.0)])).abs() < TOLERANCE);
        assert!((signed_area_2d(&[])).abs() < TOLERANCE);
    }

    #[test]
    fn lexicographic_breaks_x_ties_by_y() {
        assert_eq!(lexicographic_cmp(&p(1.0, 0.0), &p(1.0, 2.0)), Ordering::Less);
        assert_eq!(lexicographic_cmp(&p(2.0, 0.0), &p(1.0, 9.0)), Ordering::Greater);
        assert_eq!(lexicographic_cmp(&p(1.0, 1.0), &p(1.0, 1.0)), Ordering::Equal);
    }

    #[test]
    fn extremes_prefer_first_duplicate() {
        let pts = vec![
            p(1.0, 2.0),
            p(0.0, 5.0),
            p(0.0, 1.0),
            p(0.0, 1.0),
            p(3.0, 0.0),
            p(3.0, 4.0),
            p(3.0, 4.0),
        ];
        assert_eq!(lexicographic_extremes(&pts), Some((2, 5)));
        assert_eq!(lexicographic_extremes(&[]), None);
    }

    #[test]
    fn convex_polygon_contains_both_windings() {
        let ccw = unit_square_ccw();
        let mut cw = ccw.clone();
        cw.reverse();
        for poly in [&ccw, &cw] {
            assert!(point_in_convex_polygon(&p(0.5, 0.5), poly, TOLERANCE));
            assert!(point_in_convex_polygon(&p(1.0, 0.5), poly, TOLERANCE));
            assert!(point_in_convex_polygon(&p(0.0, 0.0), poly, TOLERANCE));
            assert!(!point_in_convex_polygon(&p(1.5, 0.5), poly, TOLERANCE));
        }
    }

    #[test]
    fn degenerate_polygons() {
        assert!(!point_in_convex_polygon(&p(0.0, 0.0), &[], TOLERANCE));
        assert!(point_in_convex_polygon(&p(2.0, 2.0), &[p(2.0, 2.0)], TOLERANCE));
        let seg = [p(0.0, 0.0), p(2.0, 2.0)];
        assert!(point_in_convex_polygon(&p(1.0, 1.0), &seg, TOLERANCE));
        assert!(!point_in_convex_polygon(&p(1.0, 0.0), &seg, TOLERANCE));
    }
}
