//! Explode control panel
//!
//! Select / Reset buttons plus one integer field-and-slider pair per axis.
//! Every expected failure surfaces as a status line, never a panic out of
//! the event handler.

use crate::explode::{Axis, ExplodeSession};
use crate::scene::SceneGraph;
use log::warn;

/// Upper bound of the axis controls, in stage distance units.
const MAX_LENGTH: i32 = 1000;

/// Panel state: the live session plus the UI-side control values and the
/// last user-facing status line.
pub struct ExplodePanel {
    session: ExplodeSession,
    values: [i32; 3],
    status: String,
}

impl ExplodePanel {
    pub fn new() -> Self {
        Self {
            session: ExplodeSession::new(),
            values: [0; 3],
            status: String::new(),
        }
    }

    pub fn session(&self) -> &ExplodeSession {
        &self.session
    }

    /// Render the panel and apply any triggered edits to `scene`.
    pub fn show(&mut self, ui: &mut egui::Ui, scene: &mut dyn SceneGraph) {
        ui.heading("Exploded View");
        ui.separator();

        ui.horizontal(|ui| {
            if ui
                .button("Select Prims")
                .on_hover_text("Explode the prims currently selected in the scenegraph")
                .clicked()
            {
                self.values = [0; 3];
                match self.session.select(scene) {
                    Ok(()) => {
                        self.status = format!("{} meshes ready", self.session.meshes().len());
                    }
                    Err(err) => {
                        warn!("select failed: {}", err);
                        self.status = err.to_string();
                    }
                }
            }
            if ui
                .button("Reset")
                .on_hover_text("Zero the controls and restore all translations")
                .clicked()
            {
                self.values = [0; 3];
                match self.session.reset(scene) {
                    Ok(()) => self.status.clear(),
                    Err(err) => {
                        warn!("reset failed: {}", err);
                        self.status = err.to_string();
                    }
                }
            }
        });

        ui.separator();

        for axis in Axis::ALL {
            let idx = axis.index();
            ui.horizontal(|ui| {
                ui.label(axis.label()).on_hover_text(format!(
                    "Max distance the prims travel along {}",
                    axis.label()
                ));
                let mut value = self.values[idx];
                let field = ui.add(egui::DragValue::new(&mut value).range(0..=MAX_LENGTH));
                let slider =
                    ui.add(egui::Slider::new(&mut value, 0..=MAX_LENGTH).show_value(false));
                if field.changed() || slider.changed() {
                    self.values[idx] = value;
                    if let Err(err) = self.session.set_axis_value(scene, axis, value as f32) {
                        warn!("translate failed: {}", err);
                        self.status = err.to_string();
                    }
                }
            });
        }

        if !self.status.is_empty() {
            ui.separator();
            ui.label(&self.status);
        }
    }
}

impl Default for ExplodePanel {
    fn default() -> Self {
        Self::new()
    }
}
