//! egui front-end: the explode control panel and the scenegraph tree.

pub mod panel;
pub mod tree;

pub use panel::ExplodePanel;
pub use tree::ScenegraphTree;
