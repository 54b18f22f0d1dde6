//! Scene graph access layer
//!
//! The explode engine never touches a concrete scene implementation; it
//! talks to the `SceneGraph` capability trait. `Stage` is the in-memory
//! implementation backing the demo application and the tests.

pub mod path;
pub mod stage;

pub use path::PrimPath;
pub use stage::{Prim, PrimKind, Stage};

use crate::error::Result;
use glam::Vec3;

/// The surface the explode tool needs from a scene host.
pub trait SceneGraph {
    /// Paths currently selected in the host, in pick order.
    fn selection(&self) -> Vec<PrimPath>;

    /// Whether a prim exists at the given path.
    fn exists(&self, path: &PrimPath) -> bool;

    /// Direct children of a prim, in stable order.
    fn children(&self, path: &PrimPath) -> Vec<PrimPath>;

    /// Parent prim, or `None` for the pseudo-root.
    fn parent(&self, path: &PrimPath) -> Option<PrimPath>;

    /// True when the prim carries renderable mesh geometry.
    fn is_mesh(&self, path: &PrimPath) -> bool;

    /// True when the prim is a transformable group.
    fn is_xform(&self, path: &PrimPath) -> bool;

    /// Vertex positions of a mesh prim. `None` when the attribute was
    /// never authored.
    fn points(&self, path: &PrimPath) -> Option<Vec<Vec3>>;

    /// The prim's translate op. `None` when never authored; callers treat
    /// that as the origin.
    fn translate(&self, path: &PrimPath) -> Option<Vec3>;

    /// Author the prim's translate op.
    fn set_translate(&mut self, path: &PrimPath, value: Vec3) -> Result<()>;

    /// Create an xform prim at the path. Idempotent when an xform already
    /// exists there.
    fn define_xform(&mut self, path: &PrimPath) -> Result<()>;

    /// Relocate a prim and its subtree to a new path. Does not preserve
    /// world transform.
    fn move_prim(&mut self, from: &PrimPath, to: &PrimPath) -> Result<()>;
}
