pub mod distance_2d;
pub mod orientation;
pub mod polygon_2d;
pub mod quad;

/// 2D point type.
pub type Point2 = nalgebra::Point2<f64>;

/// 3D point type.
pub type Point3 = nalgebra::Point3<f64>;

/// 2D vector type.
pub type Vector2 = nalgebra::Vector2<f64>;

/// 3D vector type.
pub type Vector3 = nalgebra::Vector3<f64>;

/// Global geometric tolerance for floating-point comparisons.
pub const TOLERANCE: f64 = 1e-10;

/// Thresholds below which triangles and planes are treated as degenerate.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeometryParams {
    /// Minimum magnitude of `cross(b - a, c - a)` for a usable normal.
    pub degenerate_length: f64,
    /// Minimum absolute projected area for a barycentric binding.
    pub degenerate_area: f64,
}

impl Default for GeometryParams {
    fn default() -> Self {
        Self {
            degenerate_length: TOLERANCE,
            degenerate_area: 1e-12,
        }
    }
}
