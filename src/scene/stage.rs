//! In-memory stage
//!
//! A minimal USD-flavored scene container: prims keyed by path, a kind per
//! prim, optional point and translate attributes. Stands in for the host
//! application's live stage in the demo app and in tests. Stages round-trip
//! through JSON so demo scenes can live on disk.

use super::path::PrimPath;
use super::SceneGraph;
use crate::error::{ExplodeError, Result};
use glam::Vec3;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;

/// What a prim is, as far as this tool cares.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PrimKind {
    /// Transformable group node
    Xform,
    /// Leaf carrying renderable geometry
    Mesh,
    /// Plain container without transform capability
    Scope,
}

/// A single prim record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Prim {
    pub kind: PrimKind,
    /// Vertex positions, meshes only. `None` means the attribute was never
    /// authored.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub points: Option<Vec<Vec3>>,
    /// Authored translate op, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub translate: Option<Vec3>,
}

/// In-memory scene graph keyed by prim path.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Stage {
    prims: BTreeMap<PrimPath, Prim>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    selection: Vec<PrimPath>,
}

impl Stage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Author a prim of the given kind. Builder-style, for demo scenes and
    /// tests; no attributes are set.
    pub fn add_prim(&mut self, path: &str, kind: PrimKind) -> PrimPath {
        let path = PrimPath::new(path);
        self.prims.insert(
            path.clone(),
            Prim {
                kind,
                points: None,
                translate: None,
            },
        );
        path
    }

    /// Author a mesh prim with the given points.
    pub fn add_mesh(&mut self, path: &str, points: Vec<Vec3>) -> PrimPath {
        let path = PrimPath::new(path);
        self.prims.insert(
            path.clone(),
            Prim {
                kind: PrimKind::Mesh,
                points: Some(points),
                translate: None,
            },
        );
        path
    }

    /// Look up a prim record.
    pub fn prim(&self, path: &PrimPath) -> Option<&Prim> {
        self.prims.get(path)
    }

    /// Replace the host-side selection.
    pub fn set_selection(&mut self, selection: Vec<PrimPath>) {
        self.selection = selection;
    }

    /// Load a stage from a JSON file.
    pub fn load(path: &Path) -> Result<Stage> {
        let content = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&content)?)
    }

    /// Save the stage to a JSON file.
    pub fn save(&self, path: &Path) -> Result<()> {
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json)?;
        Ok(())
    }
}

impl SceneGraph for Stage {
    fn selection(&self) -> Vec<PrimPath> {
        self.selection.clone()
    }

    fn exists(&self, path: &PrimPath) -> bool {
        self.prims.contains_key(path)
    }

    fn children(&self, path: &PrimPath) -> Vec<PrimPath> {
        self.prims
            .keys()
            .filter(|p| p.parent().as_ref() == Some(path))
            .cloned()
            .collect()
    }

    fn parent(&self, path: &PrimPath) -> Option<PrimPath> {
        path.parent()
    }

    fn is_mesh(&self, path: &PrimPath) -> bool {
        matches!(self.prims.get(path), Some(prim) if prim.kind == PrimKind::Mesh)
    }

    fn is_xform(&self, path: &PrimPath) -> bool {
        matches!(self.prims.get(path), Some(prim) if prim.kind == PrimKind::Xform)
    }

    fn points(&self, path: &PrimPath) -> Option<Vec<Vec3>> {
        match self.prims.get(path) {
            Some(prim) if prim.kind == PrimKind::Mesh => prim.points.clone(),
            _ => None,
        }
    }

    fn translate(&self, path: &PrimPath) -> Option<Vec3> {
        self.prims.get(path).and_then(|prim| prim.translate)
    }

    fn set_translate(&mut self, path: &PrimPath, value: Vec3) -> Result<()> {
        let prim = self
            .prims
            .get_mut(path)
            .ok_or_else(|| ExplodeError::MissingPrim(path.clone()))?;
        if prim.kind != PrimKind::Xform {
            return Err(ExplodeError::NotAnXform(path.clone()));
        }
        prim.translate = Some(value);
        Ok(())
    }

    fn define_xform(&mut self, path: &PrimPath) -> Result<()> {
        if let Some(prim) = self.prims.get(path) {
            return match prim.kind {
                PrimKind::Xform => Ok(()),
                _ => Err(ExplodeError::NotAnXform(path.clone())),
            };
        }
        let parent = path.parent().ok_or_else(|| ExplodeError::NotAnXform(path.clone()))?;
        if parent != PrimPath::root() && !self.prims.contains_key(&parent) {
            return Err(ExplodeError::MissingPrim(parent));
        }
        self.prims.insert(
            path.clone(),
            Prim {
                kind: PrimKind::Xform,
                points: None,
                translate: None,
            },
        );
        Ok(())
    }

    fn move_prim(&mut self, from: &PrimPath, to: &PrimPath) -> Result<()> {
        if !self.prims.contains_key(from) {
            return Err(ExplodeError::MissingPrim(from.clone()));
        }
        if self.prims.contains_key(to) {
            return Err(ExplodeError::PathCollision(to.clone()));
        }
        if let Some(parent) = to.parent() {
            if parent != PrimPath::root() && !self.prims.contains_key(&parent) {
                return Err(ExplodeError::MissingPrim(parent));
            }
        }

        // Re-key the whole subtree; attribute values ride along untouched,
        // so the move does not preserve world transform.
        let subtree: Vec<PrimPath> = self
            .prims
            .keys()
            .filter(|p| p.has_prefix(from))
            .cloned()
            .collect();
        for old_path in subtree {
            if let Some(prim) = self.prims.remove(&old_path) {
                let suffix = old_path.as_str().strip_prefix(from.as_str()).unwrap_or("");
                let new_path = PrimPath::new(format!("{}{}", to.as_str(), suffix));
                self.prims.insert(new_path, prim);
            }
        }
        Ok(())
    }
}
