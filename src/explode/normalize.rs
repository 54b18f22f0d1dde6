//! Hierarchy normalizer
//!
//! Restructures a selected subtree so that every mesh leaf sits under its
//! own dedicated xform, splitting off a `<name>_xform` wrapper when a mesh
//! is a direct child of the selection root. The structural edits are real,
//! persistent stage edits, not a view-side illusion.

use crate::error::Result;
use crate::scene::{PrimPath, SceneGraph};
use log::debug;

/// Walk the subtree under `root` depth-first and return every usable mesh
/// leaf, wrapping direct-child meshes in a fresh sibling xform first.
///
/// Returned paths are post-relocation paths; every one has an xform parent
/// other than `root`. An empty result means the subtree holds no mesh;
/// the caller decides whether that is an error.
pub fn normalize(scene: &mut dyn SceneGraph, root: &PrimPath) -> Result<Vec<PrimPath>> {
    let mut meshes = Vec::new();
    visit(scene, root, root, &mut meshes)?;
    Ok(meshes)
}

fn visit(
    scene: &mut dyn SceneGraph,
    root: &PrimPath,
    node: &PrimPath,
    meshes: &mut Vec<PrimPath>,
) -> Result<()> {
    // Snapshot before mutating: wrappers created below must not be revisited.
    let children = scene.children(node);
    for child in children {
        if !scene.is_mesh(&child) {
            // Intermediate grouping prim, or a leaf with no geometry;
            // recursion bottoms out either way.
            visit(scene, root, &child, meshes)?;
            continue;
        }
        if node == root {
            // Mesh sits directly under the pick: split off a wrapper and
            // relocate the mesh into it. The wrapper starts at identity so
            // the offset math stays in the group's local frame.
            let wrapper = root.child(&format!("{}_xform", child.name()));
            scene.define_xform(&wrapper)?;
            let new_path = wrapper.child(child.name());
            scene.move_prim(&child, &new_path)?;
            debug!("wrapped {} under {}", new_path, wrapper);
            meshes.push(new_path);
        } else if scene.is_xform(node) {
            // Already correctly wrapped.
            meshes.push(child);
        } else {
            // Mesh under a non-transformable container: nowhere to hang an
            // offset, leave it alone.
            debug!("skipping {}: parent {} is not an xform", child, node);
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scene::{PrimKind, Stage};
    use glam::Vec3;

    #[test]
    fn test_wraps_meshes_directly_under_root() {
        let mut stage = Stage::new();
        stage.add_prim("/root", PrimKind::Xform);
        stage.add_mesh("/root/a", vec![Vec3::ZERO]);
        stage.add_mesh("/root/b", vec![Vec3::new(10.0, 0.0, 0.0)]);

        let meshes = normalize(&mut stage, &PrimPath::new("/root")).unwrap();

        assert_eq!(
            meshes,
            vec![
                PrimPath::new("/root/a_xform/a"),
                PrimPath::new("/root/b_xform/b"),
            ]
        );
        assert!(stage.is_xform(&PrimPath::new("/root/a_xform")));
        assert!(!stage.exists(&PrimPath::new("/root/a")));
    }

    #[test]
    fn test_no_mesh_is_direct_child_of_root_afterwards() {
        let mut stage = Stage::new();
        stage.add_prim("/root", PrimKind::Xform);
        stage.add_mesh("/root/solo", vec![Vec3::ZERO]);
        stage.add_prim("/root/grp", PrimKind::Xform);
        stage.add_mesh("/root/grp/inner", vec![Vec3::ONE]);

        let root = PrimPath::new("/root");
        let meshes = normalize(&mut stage, &root).unwrap();

        assert_eq!(meshes.len(), 2);
        for mesh in &meshes {
            let parent = mesh.parent().unwrap();
            assert_ne!(parent, root);
            assert!(stage.is_xform(&parent));
        }
    }

    #[test]
    fn test_accepts_already_wrapped_mesh_unchanged() {
        let mut stage = Stage::new();
        stage.add_prim("/root", PrimKind::Xform);
        stage.add_prim("/root/wheel", PrimKind::Xform);
        stage.add_mesh("/root/wheel/geo", vec![Vec3::ZERO]);

        let meshes = normalize(&mut stage, &PrimPath::new("/root")).unwrap();

        assert_eq!(meshes, vec![PrimPath::new("/root/wheel/geo")]);
        assert!(!stage.exists(&PrimPath::new("/root/wheel/geo_xform")));
    }

    #[test]
    fn test_recurses_through_nested_groups() {
        let mut stage = Stage::new();
        stage.add_prim("/root", PrimKind::Xform);
        stage.add_prim("/root/sub", PrimKind::Xform);
        stage.add_prim("/root/sub/leafgrp", PrimKind::Xform);
        stage.add_mesh("/root/sub/leafgrp/geo", vec![Vec3::ZERO]);

        let meshes = normalize(&mut stage, &PrimPath::new("/root")).unwrap();
        assert_eq!(meshes, vec![PrimPath::new("/root/sub/leafgrp/geo")]);
    }

    #[test]
    fn test_mesh_under_scope_is_skipped() {
        let mut stage = Stage::new();
        stage.add_prim("/root", PrimKind::Xform);
        stage.add_prim("/root/scope", PrimKind::Scope);
        stage.add_mesh("/root/scope/geo", vec![Vec3::ZERO]);

        let meshes = normalize(&mut stage, &PrimPath::new("/root")).unwrap();
        assert!(meshes.is_empty());
        // Untouched: the skip is not a structural edit
        assert!(stage.exists(&PrimPath::new("/root/scope/geo")));
    }

    #[test]
    fn test_empty_subtree_yields_no_meshes() {
        let mut stage = Stage::new();
        stage.add_prim("/root", PrimKind::Xform);
        stage.add_prim("/root/empty", PrimKind::Xform);

        let meshes = normalize(&mut stage, &PrimPath::new("/root")).unwrap();
        assert!(meshes.is_empty());
    }
}
