use tracing::debug;

use crate::error::{OperationError, Result};
use crate::math::orientation::{classify_side, Side};
use crate::math::polygon_2d::lexicographic_cmp;
use crate::math::Point2;

use super::{ConvexHull, HullPoint};

/// Andrew's monotone-chain convex hull, `O(n log n)`.
///
/// Sorting happens on an owned index array; the caller's slice is never
/// reordered. Collinear input yields a two-point hull and input made of one
/// repeated point yields a one-point hull.
pub struct MonotoneChain<'a, P> {
    points: &'a [P],
}

impl<'a, P: HullPoint> MonotoneChain<'a, P> {
    /// Creates a new `MonotoneChain` operation over `points`.
    #[must_use]
    pub fn new(points: &'a [P]) -> Self {
        Self { points }
    }

    /// Executes the operation, returning the clockwise hull.
    ///
    /// # Errors
    ///
    /// Returns `OperationError::InsufficientInput` if fewer than two points were given.
    pub fn execute(&self) -> Result<ConvexHull<'a, P>> {
        let n = self.points.len();
        if n < 2 {
            return Err(OperationError::InsufficientInput {
                operation: "monotone chain hull",
                required: 2,
                found: n,
            }
            .into());
        }

        let planar: Vec<Point2> = self.points.iter().map(HullPoint::planar).collect();
        let mut order: Vec<usize> = (0..n).collect();
        // Stable, so exact duplicates stay in input order and dedup keeps the first.
        order.sort_by(|&i, &j| lexicographic_cmp(&planar[i], &planar[j]));
        order.dedup_by(|later, earlier| planar[*later] == planar[*earlier]);

        if order.len() == 1 {
            debug!(input = n, hull = 1, "monotone chain: all points coincide");
            return Ok(ConvexHull::from_indices(self.points, order));
        }

        let upper = chain(&planar, &order, Side::Right);
        let lower = chain(&planar, &order, Side::Left);

        // Upper runs left to right, lower is walked back right to left without
        // the endpoints it shares with upper.
        let mut indices = upper;
        let inner = lower.len().saturating_sub(2);
        indices.extend(lower.iter().rev().skip(1).take(inner));

        debug!(input = n, hull = indices.len(), "monotone chain hull built");
        Ok(ConvexHull::from_indices(self.points, indices))
    }
}

/// Builds one chain over the sorted indices, keeping only turns towards `keep`.
fn chain(planar: &[Point2], order: &[usize], keep: Side) -> Vec<usize> {
    let mut stack: Vec<usize> = Vec::with_capacity(order.len());
    for &i in order {
        while let [.., prev, last] = stack.as_slice() {
            if classify_side(&planar[*prev], &planar[*last], &planar[i]) == keep {
                break;
            }
            stack.pop();
        }
        stack.push(i);
    }
    stack
}
