pub mod error;
pub mod geometry;
pub mod label;
pub mod math;
pub mod operations;

pub use error::{Result, RtcdError};
