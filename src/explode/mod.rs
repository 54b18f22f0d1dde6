//! Exploded-view engine
//!
//! Three pieces: the hierarchy normalizer, the axis offset computation,
//! and the session object tying them to a live scene.

pub mod normalize;
pub mod offsets;
pub mod session;

pub use normalize::normalize;
pub use offsets::{apply_axis, compute_offsets, OffsetMap};
pub use session::ExplodeSession;

/// One of the three explode axes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    X,
    Y,
    Z,
}

impl Axis {
    /// All axes, in UI order.
    pub const ALL: [Axis; 3] = [Axis::X, Axis::Y, Axis::Z];

    /// Component index into a `Vec3`.
    pub fn index(self) -> usize {
        match self {
            Axis::X => 0,
            Axis::Y => 1,
            Axis::Z => 2,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Axis::X => "X",
            Axis::Y => "Y",
            Axis::Z => "Z",
        }
    }
}
