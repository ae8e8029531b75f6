use crate::error::{GeometryError, Result};
use crate::math::{GeometryParams, Point3, Vector3};

/// A triangle in 3D space defined by three points.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Triangle {
    /// The first vertex of the triangle.
    pub a: Point3,
    /// The second vertex of the triangle.
    pub b: Point3,
    /// The third vertex of the triangle.
    pub c: Point3,
}

impl Triangle {
    /// Creates a triangle from three points. No validation is performed.
    #[must_use]
    pub fn new(a: Point3, b: Point3, c: Point3) -> Self {
        Self { a, b, c }
    }

    /// Unnormalized normal `(b - a) × (c - a)`; its length is twice the area.
    #[must_use]
    pub fn raw_normal(&self) -> Vector3 {
        (self.b - self.a).cross(&(self.c - self.a))
    }

    /// Returns `true` if the vertices are collinear or coincident.
    #[must_use]
    pub fn is_degenerate(&self, params: &GeometryParams) -> bool {
        self.raw_normal().norm() < params.degenerate_length
    }

    /// Unit normal following the right-hand rule over `a -> b -> c`.
    ///
    /// # Errors
    ///
    /// Returns `GeometryError::Degenerate` if the triangle is degenerate.
    pub fn normal(&self) -> Result<Vector3> {
        self.normal_with(&GeometryParams::default())
    }

    /// Same as [`Triangle::normal`] with explicit tolerances.
    ///
    /// # Errors
    ///
    /// Returns `GeometryError::Degenerate` if the cross product is shorter than
    /// `params.degenerate_length`.
    pub fn normal_with(&self, params: &GeometryParams) -> Result<Vector3> {
        let raw = self.raw_normal();
        let len = raw.norm();
        if len < params.degenerate_length {
            return Err(GeometryError::Degenerate(format!(
                "triangle ({}, {}, {}) has no normal: vertices are collinear or coincident",
                self.a, self.b, self.c
            ))
            .into());
        }
        Ok(raw / len)
    }

    /// Area of the triangle.
    #[must_use]
    pub fn area(&self) -> f64 {
        0.5 * self.raw_normal().norm()
    }

    /// Centroid (average of the three vertices).
    #[must_use]
    pub fn centroid(&self) -> Point3 {
        Point3::from((self.a.coords + self.b.coords + self.c.coords) / 3.0)
    }
}
