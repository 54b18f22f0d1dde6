//! Scenegraph tree panel
//!
//! Minimal prim-hierarchy browser for the demo stage: expand/collapse
//! groups, click a prim to make it the host selection.

use crate::scene::{PrimPath, SceneGraph, Stage};
use egui::CollapsingHeader;

/// Tree panel state: which prim the user last clicked.
pub struct ScenegraphTree {
    selected: Option<PrimPath>,
}

impl ScenegraphTree {
    pub fn new() -> Self {
        Self { selected: None }
    }

    /// Render the tree and push any click into the stage selection.
    pub fn show(&mut self, ui: &mut egui::Ui, stage: &mut Stage) {
        ui.heading("Scenegraph");
        ui.separator();

        let mut clicked = None;
        for root in stage.children(&PrimPath::root()) {
            self.show_prim(ui, stage, &root, &mut clicked);
        }

        if let Some(path) = clicked {
            self.selected = Some(path.clone());
            stage.set_selection(vec![path]);
        }
    }

    fn show_prim(
        &self,
        ui: &mut egui::Ui,
        stage: &Stage,
        path: &PrimPath,
        clicked: &mut Option<PrimPath>,
    ) {
        let children = stage.children(path);
        let is_selected = self.selected.as_ref() == Some(path);

        if children.is_empty() {
            if ui.selectable_label(is_selected, path.name()).clicked() {
                *clicked = Some(path.clone());
            }
            return;
        }

        let header = CollapsingHeader::new(path.name())
            .id_salt(path.as_str())
            .default_open(true)
            .show(ui, |ui| {
                for child in &children {
                    self.show_prim(ui, stage, child, clicked);
                }
            });
        if header.header_response.clicked() {
            *clicked = Some(path.clone());
        }
    }
}

impl Default for ScenegraphTree {
    fn default() -> Self {
        Self::new()
    }
}
