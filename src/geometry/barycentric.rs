use crate::error::{GeometryError, Result};
use crate::math::orientation::triangle_area_2d;
use crate::math::{GeometryParams, Point2, Point3, Vector3};

use super::Triangle;

/// Coordinate plane a triangle is projected onto. Named after the kept axes.
///
/// Barycentric coordinates survive affine projection, so area ratios can be
/// taken in 2D. The chosen plane drops the largest-magnitude component of the
/// triangle normal, which maximizes the projected area.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Projection {
    /// Drop X, keep `(y, z)`.
    Yz,
    /// Drop Y, keep `(x, z)`.
    Xz,
    /// Drop Z, keep `(x, y)`.
    Xy,
}

impl Projection {
    /// Picks the projection that drops the dominant axis of `normal`.
    ///
    /// Ties prefer dropping X, then Y, then Z.
    #[must_use]
    pub fn for_normal(normal: &Vector3) -> Self {
        let (x, y, z) = (normal.x.abs(), normal.y.abs(), normal.z.abs());
        if x >= y && x >= z {
            Self::Yz
        } else if y >= z {
            Self::Xz
        } else {
            Self::Xy
        }
    }

    /// Projects a 3D point onto this plane.
    #[must_use]
    pub fn project(self, p: &Point3) -> Point2 {
        match self {
            Self::Yz => Point2::new(p.y, p.z),
            Self::Xz => Point2::new(p.x, p.z),
            Self::Xy => Point2::new(p.x, p.y),
        }
    }

    /// Signed area of the projected triangle `(a, b, c)`.
    #[must_use]
    pub fn area(self, a: &Point3, b: &Point3, c: &Point3) -> f64 {
        triangle_area_2d(&self.project(a), &self.project(b), &self.project(c))
    }
}

/// Barycentric weights `(u, v, w)` of a point with respect to a triangle `(a, b, c)`.
///
/// `w` is derived as `1 - u - v`, so the weights always sum to one.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Barycentric {
    pub u: f64,
    pub v: f64,
    pub w: f64,
}

impl Barycentric {
    #[must_use]
    pub fn new(u: f64, v: f64) -> Self {
        Self { u, v, w: 1.0 - u - v }
    }

    /// Returns `true` if all three weights lie in `[0, 1]`.
    #[must_use]
    pub fn is_inside(&self) -> bool {
        let unit = 0.0..=1.0;
        unit.contains(&self.u) && unit.contains(&self.v) && unit.contains(&self.w)
    }

    /// Point `u·a + v·b + w·c`.
    #[must_use]
    pub fn interpolate(&self, triangle: &Triangle) -> Point3 {
        Point3::from(
            triangle.a.coords * self.u + triangle.b.coords * self.v + triangle.c.coords * self.w,
        )
    }
}

/// Computes barycentric coordinates against one bound triangle.
///
/// A calculator only exists bound to a non-degenerate triangle, so
/// [`BarycentricCalculator::evaluate`] never divides by a vanishing area.
#[derive(Debug, Clone)]
pub struct BarycentricCalculator {
    triangle: Triangle,
    projection: Projection,
    total_area: f64,
    params: GeometryParams,
}

impl BarycentricCalculator {
    /// Binds a calculator to `triangle` with default tolerances.
    ///
    /// # Errors
    ///
    /// Returns `GeometryError::Degenerate` if the triangle is collinear,
    /// coincident or of (numerically) zero area.
    pub fn new(triangle: Triangle) -> Result<Self> {
        Self::with_params(triangle, GeometryParams::default())
    }

    /// Binds a calculator to `triangle` with explicit tolerances.
    ///
    /// # Errors
    ///
    /// Returns `GeometryError::Degenerate` if the triangle is degenerate under `params`.
    pub fn with_params(triangle: Triangle, params: GeometryParams) -> Result<Self> {
        let (projection, total_area) = bind(&triangle, &params)?;
        Ok(Self {
            triangle,
            projection,
            total_area,
            params,
        })
    }

    /// Rebinds to a new triangle. On error the previous binding is kept.
    ///
    /// # Errors
    ///
    /// Returns `GeometryError::Degenerate` if the new triangle is degenerate.
    pub fn set_triangle(&mut self, triangle: Triangle) -> Result<()> {
        let (projection, total_area) = bind(&triangle, &self.params)?;
        self.triangle = triangle;
        self.projection = projection;
        self.total_area = total_area;
        Ok(())
    }

    #[must_use]
    pub fn triangle(&self) -> &Triangle {
        &self.triangle
    }

    #[must_use]
    pub fn projection(&self) -> Projection {
        self.projection
    }

    /// Barycentric coordinates of `point`, which may lie outside the triangle.
    ///
    /// The point is projected along the dropped axis, so it is assumed to be
    /// coplanar with the triangle.
    #[must_use]
    pub fn evaluate(&self, point: &Point3) -> Barycentric {
        let Triangle { a, b, c } = &self.triangle;
        let area_u = self.projection.area(point, b, c);
        let area_v = self.projection.area(point, c, a);
        Barycentric::new(area_u / self.total_area, area_v / self.total_area)
    }
}

fn bind(triangle: &Triangle, params: &GeometryParams) -> Result<(Projection, f64)> {
    let normal = triangle.normal_with(params)?;
    let projection = Projection::for_normal(&normal);
    let total_area = projection.area(&triangle.a, &triangle.b, &triangle.c);
    if total_area.abs() <= params.degenerate_area {
        return Err(GeometryError::Degenerate(format!(
            "projected triangle area {total_area} is too small for barycentric coordinates"
        ))
        .into());
    }
    Ok((projection, total_area))
}
