//! Xplode core library
//!
//! Interactive exploded-view tool for hierarchical 3D scenes: pick a
//! subtree, drag one slider per axis, watch the parts fly apart.

pub mod error;
pub mod explode;
pub mod scene;
pub mod ui;

// Re-export commonly used types
pub use error::{ExplodeError, Result};
pub use explode::{Axis, ExplodeSession};
pub use scene::{PrimPath, SceneGraph, Stage};
