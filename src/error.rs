use thiserror::Error;

/// Top-level error type for the collision-geometry primitives.
#[derive(Debug, Error)]
pub enum RtcdError {
    #[error(transparent)]
    Geometry(#[from] GeometryError),

    #[error(transparent)]
    Operation(#[from] OperationError),
}

impl RtcdError {
    /// Returns `true` if the input geometry was collinear, coincident or of zero area.
    #[must_use]
    pub fn is_degenerate(&self) -> bool {
        matches!(self, Self::Geometry(GeometryError::Degenerate(_)))
    }

    /// Returns `true` if an operation was given fewer points than it needs.
    #[must_use]
    pub fn is_insufficient_input(&self) -> bool {
        matches!(self, Self::Operation(OperationError::InsufficientInput { .. }))
    }
}

/// Errors related to geometric computations.
#[derive(Debug, Error)]
pub enum GeometryError {
    #[error("degenerate geometry: {0}")]
    Degenerate(String),
}

/// Errors related to operations over point sets and collaborators.
#[derive(Debug, Error)]
pub enum OperationError {
    #[error("{operation} needs at least {required} usable points, got {found}")]
    InsufficientInput {
        operation: &'static str,
        required: usize,
        found: usize,
    },

    #[error("invalid input: {0}")]
    InvalidInput(String),
}

/// Convenience type alias for results using [`RtcdError`].
pub type Result<T> = std::result::Result<T, RtcdError>;
