use crate::error::{GeometryError, Result};
use crate::math::{GeometryParams, Point3, Vector3, TOLERANCE};

use super::Triangle;

/// An infinite plane in 3D space in Hessian normal form.
///
/// Every point `p` on the plane satisfies `normal · p == distance`, where
/// `normal` has unit length and `distance` is the signed distance of the plane
/// from the origin along `normal`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Plane {
    normal: Vector3,
    distance: f64,
}

impl Plane {
    /// Creates the plane through three points, oriented by the right-hand rule
    /// over `a -> b -> c`.
    ///
    /// # Errors
    ///
    /// Returns `GeometryError::Degenerate` if the points are collinear or coincident.
    pub fn from_points(a: &Point3, b: &Point3, c: &Point3) -> Result<Self> {
        Self::from_points_with(a, b, c, &GeometryParams::default())
    }

    /// Same as [`Plane::from_points`] with explicit tolerances.
    ///
    /// # Errors
    ///
    /// Returns `GeometryError::Degenerate` if `|(b - a) × (c - a)|` is below
    /// `params.degenerate_length`.
    pub fn from_points_with(
        a: &Point3,
        b: &Point3,
        c: &Point3,
        params: &GeometryParams,
    ) -> Result<Self> {
        let normal = Triangle::new(*a, *b, *c).normal_with(params)?;
        Ok(Self {
            normal,
            distance: normal.dot(&a.coords),
        })
    }

    /// Creates a plane through `point` with the given normal direction.
    ///
    /// # Errors
    ///
    /// Returns `GeometryError::Degenerate` if the normal vector is zero-length.
    pub fn from_normal(point: &Point3, normal: Vector3) -> Result<Self> {
        let len = normal.norm();
        if len < TOLERANCE {
            return Err(GeometryError::Degenerate("plane normal has zero length".into()).into());
        }
        let normal = normal / len;
        Ok(Self {
            normal,
            distance: normal.dot(&point.coords),
        })
    }

    /// Returns the unit normal of the plane.
    #[must_use]
    pub fn normal(&self) -> &Vector3 {
        &self.normal
    }

    /// Returns the signed distance of the plane from the origin.
    #[must_use]
    pub fn distance(&self) -> f64 {
        self.distance
    }

    /// Signed distance of `point` from the plane, positive on the normal side.
    #[must_use]
    pub fn signed_distance(&self, point: &Point3) -> f64 {
        self.normal.dot(&point.coords) - self.distance
    }

    /// Returns `true` if `point` lies on the plane within `tolerance`.
    #[must_use]
    pub fn contains_point(&self, point: &Point3, tolerance: f64) -> bool {
        self.signed_distance(point).abs() <= tolerance
    }

    /// Orthogonal projection of `point` onto the plane.
    #[must_use]
    pub fn project_point(&self, point: &Point3) -> Point3 {
        point - self.normal * self.signed_distance(point)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn p(x: f64, y: f64, z: f64) -> Point3 {
        Point3::new(x, y, z)
    }

    #[test]
    fn plane_through_offset_triangle() {
        let (a, b, c) = (p(0.0, 0.0, 5.0), p(1.0, 0.0, 5.0), p(0.0, 1.0, 5.0));
        let plane = Plane::from_points(&a, &b, &c).unwrap();
        assert_relative_eq!(*plane.normal(), Vector3::new(0.0, 0.0, 1.0));
        assert_relative_eq!(plane.distance(), 5.0);
    }

    #[test]
    fn construction_points_lie_on_plane() {
        let (a, b, c) = (p(1.0, 2.0, 3.0), p(-4.0, 0.5, 2.0), p(0.0, -3.0, 7.0));
        let plane = Plane::from_points(&a, &b, &c).unwrap();
        assert_relative_eq!(plane.normal().norm(), 1.0, epsilon = 1e-12);
        for pt in [a, b, c] {
            assert_relative_eq!(plane.normal().dot(&pt.coords), plane.distance(), epsilon = 1e-9);
            assert!(plane.contains_point(&pt, 1e-9));
        }
    }

    #[test]
    fn collinear_points_are_degenerate() {
        let err = Plane::from_points(&p(0.0, 0.0, 0.0), &p(1.0, 1.0, 0.0), &p(2.0, 2.0, 0.0))
            .unwrap_err();
        assert!(err.is_degenerate());
    }

    #[test]
    fn coincident_points_are_degenerate() {
        let a = p(1.0, 1.0, 1.0);
        assert!(Plane::from_points(&a, &a, &a).unwrap_err().is_degenerate());
    }

    #[test]
    fn signed_distance_and_projection() {
        let plane = Plane::from_normal(&p(0.0, 0.0, 2.0), Vector3::new(0.0, 0.0, 3.0)).unwrap();
        let q = p(4.0, -1.0, 7.0);
        assert_relative_eq!(plane.signed_distance(&q), 5.0);
        assert_relative_eq!(plane.project_point(&q), p(4.0, -1.0, 2.0));
        assert_relative_eq!(plane.signed_distance(&p(0.0, 0.0, 0.0)), -2.0);
    }

    #[test]
    fn zero_normal_is_rejected() {
        assert!(Plane::from_normal(&p(0.0, 0.0, 0.0), Vector3::zeros()).is_err());
    }
}
