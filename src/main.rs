//! Xplode - interactive exploded-view application
//!
//! Hosts the explode panel next to a scenegraph tree over an in-memory
//! stage. Pass a stage JSON path on the command line to load your own
//! scene instead of the built-in demo model.

use eframe::egui;
use glam::Vec3;
use log::info;
use std::path::Path;
use xplode::scene::{PrimKind, Stage};
use xplode::ui::{ExplodePanel, ScenegraphTree};

struct XplodeApp {
    stage: Stage,
    tree: ScenegraphTree,
    panel: ExplodePanel,
}

impl XplodeApp {
    fn new(stage: Stage) -> Self {
        Self {
            stage,
            tree: ScenegraphTree::new(),
            panel: ExplodePanel::new(),
        }
    }
}

impl eframe::App for XplodeApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::SidePanel::left("scenegraph")
            .default_width(240.0)
            .show(ctx, |ui| self.tree.show(ui, &mut self.stage));
        egui::CentralPanel::default().show(ctx, |ui| self.panel.show(ui, &mut self.stage));
    }

    fn on_exit(&mut self, _gl: Option<&eframe::glow::Context>) {
        info!("exploded view shutdown");
    }
}

/// Demo model: a small four-part assembly. One part is already wrapped in
/// its own xform, one carries no point data, the rest sit directly under
/// the root the way freshly imported geometry tends to.
fn demo_stage() -> Stage {
    let mut stage = Stage::new();
    stage.add_prim("/model", PrimKind::Xform);
    stage.add_mesh(
        "/model/hull",
        vec![
            Vec3::new(0.0, 0.0, 0.0),
            Vec3::new(4.0, 0.0, 0.0),
            Vec3::new(0.0, 2.0, 0.0),
        ],
    );
    stage.add_mesh(
        "/model/hatch",
        vec![Vec3::new(1.0, 2.5, 0.0), Vec3::new(2.0, 2.5, 0.0)],
    );
    stage.add_prim("/model/tail", PrimKind::Xform);
    stage.add_mesh(
        "/model/tail/fin",
        vec![Vec3::new(-3.0, 1.0, 0.5), Vec3::new(-3.0, 2.0, 0.5)],
    );
    stage.add_prim("/model/proxy", PrimKind::Mesh);
    stage.set_selection(vec!["/model".into()]);
    stage
}

fn main() -> Result<(), eframe::Error> {
    env_logger::init();
    info!("exploded view startup");

    let stage = match std::env::args().nth(1) {
        Some(path) => match Stage::load(Path::new(&path)) {
            Ok(stage) => {
                info!("loaded stage from {}", path);
                stage
            }
            Err(err) => {
                eprintln!("failed to load {}: {}", path, err);
                std::process::exit(1);
            }
        },
        None => demo_stage(),
    };

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default().with_inner_size([760.0, 420.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Exploded-View",
        options,
        Box::new(|_cc| Ok(Box::new(XplodeApp::new(stage)))),
    )
}
