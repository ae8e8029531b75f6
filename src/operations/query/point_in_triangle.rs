use crate::error::Result;
use crate::geometry::{Barycentric, BarycentricCalculator, Triangle};
use crate::math::{GeometryParams, Point3};

/// Classifies points as inside or outside one triangle.
///
/// Boundary points count as inside. Query points are assumed to be coplanar
/// with the triangle.
#[derive(Debug, Clone)]
pub struct PointInTriangle {
    calculator: BarycentricCalculator,
}

impl PointInTriangle {
    /// Creates a classifier bound to `triangle`.
    ///
    /// # Errors
    ///
    /// Returns `GeometryError::Degenerate` if the triangle is degenerate.
    pub fn new(triangle: Triangle) -> Result<Self> {
        Ok(Self {
            calculator: BarycentricCalculator::new(triangle)?,
        })
    }

    /// Creates a classifier with explicit degeneracy tolerances.
    ///
    /// # Errors
    ///
    /// Returns `GeometryError::Degenerate` if the triangle is degenerate under `params`.
    pub fn with_params(triangle: Triangle, params: GeometryParams) -> Result<Self> {
        Ok(Self {
            calculator: BarycentricCalculator::with_params(triangle, params)?,
        })
    }

    /// Rebinds the classifier to another triangle.
    ///
    /// # Errors
    ///
    /// Returns `GeometryError::Degenerate` if the triangle is degenerate; the
    /// previous triangle stays bound.
    pub fn set_triangle(&mut self, triangle: Triangle) -> Result<()> {
        self.calculator.set_triangle(triangle)
    }

    #[must_use]
    pub fn triangle(&self) -> &Triangle {
        self.calculator.triangle()
    }

    /// Barycentric coordinates of `point` against the bound triangle.
    #[must_use]
    pub fn coordinates(&self, point: &Point3) -> Barycentric {
        self.calculator.evaluate(point)
    }

    /// Returns `true` if `point` lies inside or on the boundary of the triangle.
    #[must_use]
    pub fn contains(&self, point: &Point3) -> bool {
        self.calculator.evaluate(point).is_inside()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::math::Vector3;

    fn p(x: f64, y: f64, z: f64) -> Point3 {
        Point3::new(x, y, z)
    }

    fn right_triangle() -> Triangle {
        Triangle::new(p(0.0, 0.0, 0.0), p(4.0, 0.0, 0.0), p(0.0, 4.0, 0.0))
    }

    #[test]
    fn vertices_and_centroid_are_inside() {
        let tri = right_triangle();
        let query = PointInTriangle::new(tri).unwrap();
        for pt in [tri.a, tri.b, tri.c, tri.centroid()] {
            assert!(query.contains(&pt), "{pt} should be inside");
        }
    }

    #[test]
    fn edge_midpoints_are_inside() {
        let query = PointInTriangle::new(right_triangle()).unwrap();
        assert!(query.contains(&p(2.0, 0.0, 0.0)));
        assert!(query.contains(&p(2.0, 2.0, 0.0)));
        assert!(query.contains(&p(0.0, 2.0, 0.0)));
    }

    #[test]
    fn points_beyond_each_edge_are_outside() {
        let tri = Triangle::new(p(1.0, 0.0, 2.0), p(4.0, 1.0, -1.0), p(0.0, 3.0, 1.0));
        let query = PointInTriangle::new(tri).unwrap();
        let normal = tri.normal().unwrap();
        for (start, end, opposite) in [(tri.a, tri.b, tri.c), (tri.b, tri.c, tri.a), (tri.c, tri.a, tri.b)] {
            let edge: Vector3 = end - start;
            // In-plane direction perpendicular to the edge, pointing away from the opposite vertex.
            let mut outward = edge.cross(&normal).normalize();
            if outward.dot(&(opposite - start)) > 0.0 {
                outward = -outward;
            }
            let midpoint = Point3::from((start.coords + end.coords) * 0.5);
            assert!(!query.contains(&(midpoint + outward * 100.0)));
        }
    }

    #[test]
    fn rebinding_changes_the_answer() {
        let mut query = PointInTriangle::new(right_triangle()).unwrap();
        let probe = p(10.0, 10.0, 0.0);
        assert!(!query.contains(&probe));
        query
            .set_triangle(Triangle::new(p(0.0, 0.0, 0.0), p(20.0, 0.0, 0.0), p(0.0, 20.0, 0.0)))
            .unwrap();
        assert!(query.contains(&probe));
    }

    #[test]
    fn degenerate_triangle_is_reported() {
        let flat = Triangle::new(p(0.0, 0.0, 0.0), p(1.0, 1.0, 0.0), p(2.0, 2.0, 0.0));
        assert!(PointInTriangle::new(flat).unwrap_err().is_degenerate());

        let mut query = PointInTriangle::new(right_triangle()).unwrap();
        assert!(query.set_triangle(flat).unwrap_err().is_degenerate());
        assert_eq!(query.triangle(), &right_triangle());
    }
}
