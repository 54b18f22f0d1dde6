//! Axis-relative offset computation
//!
//! Converts each mesh's representative position into a signed fraction of
//! the selection's spread per axis, then scales those fractions by the
//! per-axis control value to author translations on the owning xforms.

use super::Axis;
use crate::error::{ExplodeError, Result};
use crate::scene::{PrimPath, SceneGraph};
use glam::Vec3;
use log::debug;
use std::collections::HashMap;

/// Per-mesh displacement percentages. Component `a` of the value is the
/// percentage map for axis `a`; all three share one key set.
pub type OffsetMap = HashMap<PrimPath, Vec3>;

/// Build the offset map for a normalized mesh list.
///
/// The representative position of a mesh is its first vertex. Meshes with
/// no retrievable point data are dropped from the map, on all axes at once.
/// The per-axis median is the order statistic at `len / 2` of the sorted
/// positions, which for even counts is the upper-middle element, never an
/// average.
/// An axis with zero spread resolves to all-zero percentages.
pub fn compute_offsets(scene: &dyn SceneGraph, meshes: &[PrimPath]) -> OffsetMap {
    let mut reps: Vec<(PrimPath, Vec3)> = Vec::new();
    for mesh in meshes {
        match scene.points(mesh) {
            Some(points) if !points.is_empty() => reps.push((mesh.clone(), points[0])),
            _ => debug!("excluding {} from offsets: no point data", mesh),
        }
    }

    let mut median = Vec3::ZERO;
    let mut length = Vec3::ZERO;
    for axis in Axis::ALL {
        let i = axis.index();
        let mut sorted: Vec<f32> = reps.iter().map(|(_, pos)| pos[i]).collect();
        sorted.sort_by(f32::total_cmp);
        if let (Some(&lo), Some(&hi)) = (sorted.first(), sorted.last()) {
            length[i] = hi - lo;
            median[i] = sorted[sorted.len() / 2];
        }
    }

    reps.into_iter()
        .map(|(path, pos)| {
            let mut percent = Vec3::ZERO;
            for axis in Axis::ALL {
                let i = axis.index();
                if length[i] != 0.0 {
                    percent[i] = (pos[i] - median[i]) / length[i];
                }
            }
            (path, percent)
        })
        .collect()
}

/// Drive one axis: each owning xform's component on `axis` becomes
/// `percent * value`, while the other two components are left exactly as
/// authored. Absent translations read as the origin.
pub fn apply_axis(
    scene: &mut dyn SceneGraph,
    axis: Axis,
    value: f32,
    offsets: &OffsetMap,
) -> Result<()> {
    for (mesh, percent) in offsets {
        let group = scene
            .parent(mesh)
            .ok_or_else(|| ExplodeError::MissingPrim(mesh.clone()))?;
        let mut translate = scene.translate(&group).unwrap_or(Vec3::ZERO);
        translate[axis.index()] = percent[axis.index()] * value;
        scene.set_translate(&group, translate)?;
    }
    Ok(())
}
