use thiserror::Error;

/// Top-level error type for the Geodome crate.
#[derive(Debug, Error)]
pub enum GeodomeError {
    #[error(transparent)]
    Build(#[from] BuildError),

    #[error(transparent)]
    Topology(#[from] TopologyError),
}

/// Errors raised while validating a build plan, before any lattice walk starts.
#[derive(Debug, Error)]
pub enum BuildError {
    #[error("unknown base shape: {0}")]
    UnknownBaseShape(String),

    #[error("unknown subdivision class: {0}")]
    UnknownSubdivisionClass(String),

    #[error("invalid frequency ({m}, {n}): {reason}")]
    InvalidFrequency {
        m: i64,
        n: i64,
        reason: &'static str,
    },

    #[error("invalid build options: {0}")]
    InvalidOptions(String),

    #[error("previous layer has no faces to subdivide")]
    EmptyLayer,

    #[error("blueprint has no layer {0}")]
    NoSuchLayer(usize),
}

/// Errors related to the node/edge/face maps of a layer.
#[derive(Debug, Error)]
pub enum TopologyError {
    #[error("entity not found: {0}")]
    EntityNotFound(String),

    #[error("seam mismatch: {0}")]
    SeamMismatch(String),

    #[error("degenerate face: {0}")]
    DegenerateFace(String),
}

/// Convenience type alias for results using [`GeodomeError`].
pub type Result<T> = std::result::Result<T, GeodomeError>;
