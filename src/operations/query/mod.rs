mod point_in_triangle;

pub use point_in_triangle::PointInTriangle;
