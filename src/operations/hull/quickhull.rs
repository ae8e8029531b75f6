use tracing::{debug, trace};

use crate::error::{OperationError, Result};
use crate::geometry::Triangle;
use crate::math::distance_2d::perpendicular_offset;
use crate::math::orientation::{classify_side, Side};
use crate::math::polygon_2d::lexicographic_extremes;
use crate::math::{GeometryParams, Point2, Point3};
use crate::operations::query::PointInTriangle;

use super::{ConvexHull, HullPoint};

const OPERATION: &str = "quickhull";

/// Lazily computed hull result.
#[derive(Debug)]
enum HullCache<'a, P> {
    /// No vertex set has been given.
    Empty,
    /// Vertices are set but the hull has not been computed for them.
    Dirty,
    Cached(ConvexHull<'a, P>),
}

/// Divide-and-conquer convex hull with a cached result.
///
/// The hull is computed on the first call to [`QuickHull::hull_points`] and
/// reused until [`QuickHull::set_vertices`] or [`QuickHull::clear`] is called.
/// The vertex set stays borrowed for the lifetime of the instance, so the
/// cached hull can never go stale behind its back.
///
/// Average cost is `O(n log n)`, worst case `O(n²)`.
#[derive(Debug)]
pub struct QuickHull<'a, P> {
    vertices: &'a [P],
    cache: HullCache<'a, P>,
    params: GeometryParams,
}

impl<P> Default for QuickHull<'_, P> {
    fn default() -> Self {
        Self {
            vertices: &[],
            cache: HullCache::Empty,
            params: GeometryParams::default(),
        }
    }
}

impl<'a, P: HullPoint> QuickHull<'a, P> {
    /// Creates a new `QuickHull` over `vertices`. Nothing is computed yet.
    #[must_use]
    pub fn new(vertices: &'a [P]) -> Self {
        Self {
            vertices,
            cache: HullCache::Dirty,
            params: GeometryParams::default(),
        }
    }

    /// Sets the tolerances used for the interior-point pruning triangles.
    #[must_use]
    pub fn with_params(mut self, params: GeometryParams) -> Self {
        self.params = params;
        if matches!(self.cache, HullCache::Cached(_)) {
            self.cache = HullCache::Dirty;
        }
        self
    }

    /// Replaces the vertex set and drops any cached hull.
    pub fn set_vertices(&mut self, vertices: &'a [P]) {
        debug!(count = vertices.len(), "quickhull: vertices replaced");
        self.vertices = vertices;
        self.cache = HullCache::Dirty;
    }

    /// Forgets the vertex set and any cached hull.
    pub fn clear(&mut self) {
        debug!("quickhull: cleared");
        self.vertices = &[];
        self.cache = HullCache::Empty;
    }

    #[must_use]
    pub fn vertices(&self) -> &'a [P] {
        self.vertices
    }

    /// Returns `true` if a hull is cached for the current vertex set.
    #[must_use]
    pub fn is_cached(&self) -> bool {
        matches!(self.cache, HullCache::Cached(_))
    }

    /// Returns the clockwise hull, computing it on first use.
    ///
    /// # Errors
    ///
    /// Returns `OperationError::InsufficientInput` if no vertices are set, fewer
    /// than three were given, or all of them are collinear. Failures are not
    /// cached.
    pub fn hull_points(&mut self) -> Result<&ConvexHull<'a, P>> {
        if matches!(self.cache, HullCache::Dirty) {
            let hull = build(self.vertices, &self.params)?;
            self.cache = HullCache::Cached(hull);
        } else if self.is_cached() {
            debug!("quickhull: cache hit");
        }
        match &self.cache {
            HullCache::Cached(hull) => Ok(hull),
            HullCache::Empty | HullCache::Dirty => Err(OperationError::InsufficientInput {
                operation: OPERATION,
                required: 3,
                found: 0,
            }
            .into()),
        }
    }
}

/// Pending work on the explicit stack that replaces recursion.
enum Task {
    /// Find hull points strictly left of `start -> end` among `candidates`.
    Edge {
        start: usize,
        end: usize,
        candidates: Vec<usize>,
    },
    /// Append a hull vertex.
    Emit(usize),
}

fn build<'a, P: HullPoint>(points: &'a [P], params: &GeometryParams) -> Result<ConvexHull<'a, P>> {
    let n = points.len();
    if n < 3 {
        return Err(OperationError::InsufficientInput {
            operation: OPERATION,
            required: 3,
            found: n,
        }
        .into());
    }

    let planar: Vec<Point2> = points.iter().map(HullPoint::planar).collect();
    let Some((min, max)) = lexicographic_extremes(&planar) else {
        return Err(OperationError::InsufficientInput {
            operation: OPERATION,
            required: 3,
            found: 0,
        }
        .into());
    };

    let (lo, hi) = (planar[min], planar[max]);
    if planar
        .iter()
        .all(|p| classify_side(&lo, &hi, p) == Side::Collinear)
    {
        let found = if lo == hi { 1 } else { 2 };
        debug!(input = n, "quickhull: all points collinear");
        return Err(OperationError::InsufficientInput {
            operation: OPERATION,
            required: 3,
            found,
        }
        .into());
    }

    let all: Vec<usize> = (0..n).collect();
    let mut indices = vec![min];
    // Popped in reverse: upper side first, then `max`, then the lower side.
    let mut work = vec![
        Task::Edge {
            start: max,
            end: min,
            candidates: all.clone(),
        },
        Task::Emit(max),
        Task::Edge {
            start: min,
            end: max,
            candidates: all,
        },
    ];

    while let Some(task) = work.pop() {
        let (start, end, candidates) = match task {
            Task::Emit(i) => {
                indices.push(i);
                continue;
            }
            Task::Edge {
                start,
                end,
                candidates,
            } => (start, end, candidates),
        };

        let (s, e) = (planar[start], planar[end]);
        let left: Vec<usize> = candidates
            .into_iter()
            .filter(|&i| classify_side(&s, &e, &planar[i]) == Side::Left)
            .collect();
        let Some(far) = farthest(&planar, &s, &e, &left) else {
            continue;
        };
        let remaining = prune_interior(&planar, [start, end, far], left, params);
        trace!(start, end, far, remaining = remaining.len(), "quickhull: edge split");

        work.push(Task::Edge {
            start: far,
            end,
            candidates: remaining.clone(),
        });
        work.push(Task::Emit(far));
        work.push(Task::Edge {
            start,
            end: far,
            candidates: remaining,
        });
    }

    debug!(input = n, hull = indices.len(), "quickhull hull built");
    Ok(ConvexHull::from_indices(points, indices))
}

/// Candidate farthest from the line through `s` and `e`.
///
/// Equal distances prefer the candidate nearest `s` along the edge, then the
/// first one in `candidates`, so a point in the middle of a boundary run is
/// never picked.
#[allow(clippy::float_cmp)]
fn farthest(planar: &[Point2], s: &Point2, e: &Point2, candidates: &[usize]) -> Option<usize> {
    let dir = e - s;
    let mut best: Option<(usize, f64, f64)> = None;
    for &i in candidates {
        let offset = perpendicular_offset(s, e, &planar[i]);
        let along = dir.dot(&(planar[i] - s));
        let better = match best {
            None => true,
            Some((_, best_offset, best_along)) => {
                offset > best_offset || (offset == best_offset && along < best_along)
            }
        };
        if better {
            best = Some((i, offset, along));
        }
    }
    best.map(|(i, _, _)| i)
}

/// Drops candidates inside or on the triangle `corners`; they cannot be on the hull.
///
/// The triangle is lifted relative to `start` so its area terms are computed
/// from the same differences as [`classify_side`]. A candidate left of either
/// new edge is always kept, whatever the barycentric test says.
///
/// A sliver triangle that cannot be classified only removes the apex (and its
/// duplicates); the strict left-of filters downstream still exclude the rest.
fn prune_interior(
    planar: &[Point2],
    corners: [usize; 3],
    candidates: Vec<usize>,
    params: &GeometryParams,
) -> Vec<usize> {
    let [start, end, far] = corners;
    let (s, e, f) = (planar[start], planar[end], planar[far]);
    let lift = |i: usize| {
        let d = planar[i] - s;
        Point3::new(d.x, d.y, 0.0)
    };
    let outside = |i: usize| {
        classify_side(&s, &f, &planar[i]) == Side::Left
            || classify_side(&f, &e, &planar[i]) == Side::Left
    };
    let triangle = Triangle::new(lift(start), lift(end), lift(far));
    match PointInTriangle::with_params(triangle, *params) {
        Ok(query) => candidates
            .into_iter()
            .filter(|&i| outside(i) || !query.contains(&lift(i)))
            .collect(),
        Err(err) => {
            debug!(%err, "quickhull: sliver triangle, pruning apex only");
            candidates.into_iter().filter(|&i| planar[i] != f).collect()
        }
    }
}
