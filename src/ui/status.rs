//! Status-Bar am unteren Bildschirmrand.

use crate::app::{AppState, InteractionMode};
use crate::core::EntityKind;

/// Rendert die Status-Bar
pub fn render_status_bar(ctx: &egui::Context, state: &AppState) {
    egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
        ui.horizontal(|ui| {
            ui.label(format!(
                "Punkte: {} | Connections: {} | Forcefields: {} | Gruppen: {}",
                state.count(EntityKind::Point),
                state.count(EntityKind::Connection),
                state.count(EntityKind::Forcefield),
                state.scene.group_count()
            ));

            ui.separator();

            ui.label(format!(
                "Selektiert: {} / {} / {}",
                state.selection.count(EntityKind::Point),
                state.selection.count(EntityKind::Connection),
                state.selection.count(EntityKind::Forcefield)
            ));

            ui.separator();

            let camera = &state.view.camera;
            let position = camera.position();
            ui.label(format!(
                "Kamera: ({:.0}, {:.0}, {:.0}) | Abstand: {:.0}",
                position.x, position.y, position.z, camera.distance
            ));

            ui.separator();

            let mode = match state.editor.mode {
                InteractionMode::Standard => "Standard",
                InteractionMode::ForcefieldEdit => "Forcefield-Bearbeitung",
            };
            ui.label(format!("Modus: {}", mode));

            // FPS-Anzeige (rechts)
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                ui.label(format!("FPS: {:.0}", ctx.input(|i| 1.0 / i.stable_dt)));
            });
        });
    });
}
