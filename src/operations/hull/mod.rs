mod monotone_chain;
mod quickhull;

pub use monotone_chain::MonotoneChain;
pub use quickhull::QuickHull;

use crate::math::polygon_2d::{point_in_convex_polygon, signed_area_2d};
use crate::math::{Point2, Point3};

/// A point that can take part in a 2D hull.
pub trait HullPoint {
    /// The point's position in the hull plane.
    fn planar(&self) -> Point2;
}

impl HullPoint for Point2 {
    #[inline]
    fn planar(&self) -> Point2 {
        *self
    }
}

/// 3D points are hulled by their projection onto the XY plane.
impl HullPoint for Point3 {
    #[inline]
    fn planar(&self) -> Point2 {
        self.xy()
    }
}

/// A convex hull referencing the points it was built from.
///
/// Vertices are stored as indices into the caller's slice, in clockwise order
/// starting from the lexicographically smallest point (smallest x, then
/// smallest y). Collinear boundary points are never part of a hull.
#[derive(Debug)]
pub struct ConvexHull<'a, P> {
    points: &'a [P],
    indices: Vec<usize>,
}

// Derived `Clone` would needlessly require `P: Clone`.
impl<P> Clone for ConvexHull<'_, P> {
    fn clone(&self) -> Self {
        Self {
            points: self.points,
            indices: self.indices.clone(),
        }
    }
}

impl<'a, P: HullPoint> ConvexHull<'a, P> {
    pub(crate) fn from_indices(points: &'a [P], indices: Vec<usize>) -> Self {
        Self { points, indices }
    }

    /// Indices of the hull vertices in the input slice, in hull order.
    #[must_use]
    pub fn indices(&self) -> &[usize] {
        &self.indices
    }

    /// Number of hull vertices.
    #[must_use]
    pub fn len(&self) -> usize {
        self.indices.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    /// Iterates over the hull vertices as references into the input.
    pub fn iter(&self) -> impl Iterator<Item = &'a P> + '_ {
        let points = self.points;
        self.indices.iter().map(move |&i| &points[i])
    }

    /// Hull vertices as plane positions.
    #[must_use]
    pub fn polygon(&self) -> Vec<Point2> {
        self.iter().map(HullPoint::planar).collect()
    }

    /// Signed area of the hull polygon (negative, since hulls are clockwise).
    #[must_use]
    pub fn signed_area(&self) -> f64 {
        signed_area_2d(&self.polygon())
    }

    /// Returns `true` if `point` lies inside or on the hull within `tolerance`.
    #[must_use]
    pub fn contains(&self, point: &Point2, tolerance: f64) -> bool {
        point_in_convex_polygon(point, &self.polygon(), tolerance)
    }
}
