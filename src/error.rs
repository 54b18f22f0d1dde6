//! Error types shared across the crate

use crate::scene::PrimPath;
use thiserror::Error;

/// Errors from scene access and explode operations.
///
/// The first two are expected user-facing conditions; the rest indicate a
/// malformed or stale scene and abort the single operation that hit them.
#[derive(Debug, Error)]
pub enum ExplodeError {
    #[error("nothing is selected")]
    EmptySelection,

    #[error("selection contains no mesh")]
    NoMeshFound,

    #[error("prim not found: {0}")]
    MissingPrim(PrimPath),

    #[error("prim is not an xform: {0}")]
    NotAnXform(PrimPath),

    #[error("a prim already exists at {0}")]
    PathCollision(PrimPath),

    #[error("failed to read stage file: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse stage file: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Result type for explode operations
pub type Result<T> = std::result::Result<T, ExplodeError>;
