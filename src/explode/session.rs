//! Selection session lifecycle
//!
//! All explode state is scoped to one selection: created by `select`,
//! replaced wholesale by the next `select`, torn down by `reset`.

use super::offsets::{apply_axis, compute_offsets, OffsetMap};
use super::{normalize, Axis};
use crate::error::{ExplodeError, Result};
use crate::scene::{PrimPath, SceneGraph};
use glam::Vec3;
use log::{info, warn};

/// Live explode state for the most recent selection.
#[derive(Debug, Default)]
pub struct ExplodeSession {
    root: Option<PrimPath>,
    meshes: Vec<PrimPath>,
    offsets: OffsetMap,
    values: Vec3,
}

impl ExplodeSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Selection root of the live session, if any.
    pub fn root(&self) -> Option<&PrimPath> {
        self.root.as_ref()
    }

    /// Meshes collected by the last `select`, post-normalization.
    pub fn meshes(&self) -> &[PrimPath] {
        &self.meshes
    }

    /// Current control value for one axis.
    pub fn axis_value(&self, axis: Axis) -> f32 {
        self.values[axis.index()]
    }

    pub fn is_active(&self) -> bool {
        self.root.is_some()
    }

    /// Rebuild the session from the host's current selection.
    ///
    /// Tears down the previous session first (controls zeroed, translations
    /// restored), then normalizes the picked subtree and precomputes the
    /// offset map. When the selection is empty or mesh-free the scene is
    /// left as the teardown left it and an error describes why.
    pub fn select(&mut self, scene: &mut dyn SceneGraph) -> Result<()> {
        self.reset(scene)?;

        let Some(root) = scene.selection().into_iter().next() else {
            return Err(ExplodeError::EmptySelection);
        };
        if !scene.exists(&root) {
            return Err(ExplodeError::MissingPrim(root));
        }

        let meshes = normalize(scene, &root)?;
        if meshes.is_empty() {
            return Err(ExplodeError::NoMeshFound);
        }

        let offsets = compute_offsets(scene, &meshes);
        info!(
            "selected {}: {} meshes, {} with point data",
            root,
            meshes.len(),
            offsets.len()
        );
        self.root = Some(root);
        self.meshes = meshes;
        self.offsets = offsets;
        Ok(())
    }

    /// Drive one axis control. A no-op without a live session.
    pub fn set_axis_value(
        &mut self,
        scene: &mut dyn SceneGraph,
        axis: Axis,
        value: f32,
    ) -> Result<()> {
        self.values[axis.index()] = value;
        if self.offsets.is_empty() {
            return Ok(());
        }
        apply_axis(scene, axis, value, &self.offsets)
    }

    /// Zero all controls, restore every touched xform to the origin and
    /// discard the session. Safe to call when nothing was ever selected.
    pub fn reset(&mut self, scene: &mut dyn SceneGraph) -> Result<()> {
        self.values = Vec3::ZERO;
        for mesh in self.offsets.keys() {
            let Some(group) = scene.parent(mesh) else {
                warn!("reset: {} no longer has a parent", mesh);
                continue;
            };
            scene.set_translate(&group, Vec3::ZERO)?;
        }
        self.root = None;
        self.meshes.clear();
        self.offsets.clear();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scene::{PrimKind, Stage};

    fn assembly() -> Stage {
        let mut stage = Stage::new();
        stage.add_prim("/model", PrimKind::Xform);
        stage.add_mesh("/model/a", vec![Vec3::new(0.0, 0.0, 0.0)]);
        stage.add_mesh("/model/b", vec![Vec3::new(10.0, 4.0, 0.0)]);
        stage.add_mesh("/model/c", vec![Vec3::new(4.0, 8.0, 2.0)]);
        stage.set_selection(vec![PrimPath::new("/model")]);
        stage
    }

    #[test]
    fn test_select_builds_session() {
        let mut stage = assembly();
        let mut session = ExplodeSession::new();

        session.select(&mut stage).unwrap();

        assert!(session.is_active());
        assert_eq!(session.root(), Some(&PrimPath::new("/model")));
        assert_eq!(session.meshes().len(), 3);
    }

    #[test]
    fn test_select_with_empty_selection() {
        let mut stage = Stage::new();
        stage.add_prim("/model", PrimKind::Xform);
        let mut session = ExplodeSession::new();

        let result = session.select(&mut stage);
        assert!(matches!(result, Err(ExplodeError::EmptySelection)));
        assert!(!session.is_active());
    }

    #[test]
    fn test_select_with_no_mesh() {
        let mut stage = Stage::new();
        stage.add_prim("/model", PrimKind::Xform);
        stage.add_prim("/model/empty", PrimKind::Xform);
        stage.set_selection(vec![PrimPath::new("/model")]);
        let mut session = ExplodeSession::new();

        let result = session.select(&mut stage);
        assert!(matches!(result, Err(ExplodeError::NoMeshFound)));
        assert!(!session.is_active());
    }

    #[test]
    fn test_set_axis_value_translates_groups() {
        let mut stage = assembly();
        let mut session = ExplodeSession::new();
        session.select(&mut stage).unwrap();

        session.set_axis_value(&mut stage, Axis::X, 100.0).unwrap();

        // sorted X = [0, 4, 10], median -> 4, length 10
        assert_eq!(
            stage.translate(&PrimPath::new("/model/a_xform")),
            Some(Vec3::new(-40.0, 0.0, 0.0))
        );
        assert_eq!(
            stage.translate(&PrimPath::new("/model/b_xform")),
            Some(Vec3::new(60.0, 0.0, 0.0))
        );
        assert_eq!(
            stage.translate(&PrimPath::new("/model/c_xform")),
            Some(Vec3::new(0.0, 0.0, 0.0))
        );
        assert_eq!(session.axis_value(Axis::X), 100.0);
    }

    #[test]
    fn test_set_axis_value_without_session_is_noop() {
        let mut stage = assembly();
        let mut session = ExplodeSession::new();

        session.set_axis_value(&mut stage, Axis::Y, 500.0).unwrap();
        assert_eq!(stage.translate(&PrimPath::new("/model")), None);
    }

    #[test]
    fn test_reset_restores_origin_and_clears_state() {
        let mut stage = assembly();
        let mut session = ExplodeSession::new();
        session.select(&mut stage).unwrap();
        session.set_axis_value(&mut stage, Axis::X, 300.0).unwrap();
        session.set_axis_value(&mut stage, Axis::Z, 120.0).unwrap();

        session.reset(&mut stage).unwrap();

        for name in ["a", "b", "c"] {
            let group = PrimPath::new(format!("/model/{}_xform", name));
            assert_eq!(stage.translate(&group), Some(Vec3::ZERO));
        }
        assert!(!session.is_active());
        for axis in Axis::ALL {
            assert_eq!(session.axis_value(axis), 0.0);
        }
    }

    #[test]
    fn test_reset_without_selection_is_noop() {
        let mut stage = Stage::new();
        let mut session = ExplodeSession::new();
        assert!(session.reset(&mut stage).is_ok());
    }

    #[test]
    fn test_reselect_replaces_session() {
        let mut stage = assembly();
        let mut session = ExplodeSession::new();
        session.select(&mut stage).unwrap();
        session.set_axis_value(&mut stage, Axis::X, 500.0).unwrap();

        // Selecting again restores the groups before recomputing, and the
        // hierarchy is already normalized so no new wrappers appear.
        session.select(&mut stage).unwrap();

        for name in ["a", "b", "c"] {
            let group = PrimPath::new(format!("/model/{}_xform", name));
            assert_eq!(stage.translate(&group), Some(Vec3::ZERO));
            assert!(!stage.exists(&group.child(&format!("{}_xform", name))));
        }
        assert_eq!(session.meshes().len(), 3);
        assert_eq!(session.axis_value(Axis::X), 0.0);
    }
}
