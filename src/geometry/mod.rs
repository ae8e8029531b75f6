pub mod barycentric;
pub mod plane;
pub mod triangle;

pub use barycentric::{Barycentric, BarycentricCalculator, Projection};
pub use plane::Plane;
pub use triangle::Triangle;
