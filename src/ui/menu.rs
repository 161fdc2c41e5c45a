//! Top-Menü (File, Edit, View, Help).

use crate::app::{AppIntent, AppState, Layer};

/// Rendert die Menü-Leiste
pub fn render_menu(ctx: &egui::Context, state: &AppState) -> Vec<AppIntent> {
    let mut events = Vec::new();

    egui::TopBottomPanel::top("menu_bar").show(ctx, |ui| {
        egui::MenuBar::new().ui(ui, |ui| {
            ui.menu_button("File", |ui| {
                if ui.button("Mesh erzeugen").clicked() {
                    events.push(AppIntent::CreateMeshRequested);
                    ui.close();
                }

                ui.separator();

                if ui.button("Exit").clicked() {
                    events.push(AppIntent::ExitRequested);
                    ui.close();
                }
            });

            // Edit menu: Undo / Redo / Optionen
            ui.menu_button("Edit", |ui| {
                if ui
                    .add_enabled(state.can_undo(), egui::Button::new("Undo (Ctrl+Z)"))
                    .clicked()
                {
                    events.push(AppIntent::UndoRequested);
                    ui.close();
                }

                if ui
                    .add_enabled(state.can_redo(), egui::Button::new("Redo (Ctrl+Y / Shift+Cmd+Z)"))
                    .clicked()
                {
                    events.push(AppIntent::RedoRequested);
                    ui.close();
                }

                ui.separator();

                if ui.button("Alles abwählen (D)").clicked() {
                    events.push(AppIntent::DeselectAllRequested);
                    ui.close();
                }

                if ui.button("Selektion löschen (X)").clicked() {
                    events.push(AppIntent::DeleteSelectedRequested);
                    ui.close();
                }

                ui.separator();

                if ui.button("Optionen...").clicked() {
                    events.push(AppIntent::OpenOptionsDialogRequested);
                    ui.close();
                }
            });

            ui.menu_button("View", |ui| {
                if ui.button("Reset Camera").clicked() {
                    events.push(AppIntent::ResetCameraRequested);
                    ui.close();
                }

                ui.separator();

                for (layer, label) in [
                    (Layer::Points, "Punkte"),
                    (Layer::Forcefields, "Forcefields"),
                    (Layer::Mesh, "Mesh-Vorschau"),
                ] {
                    if ui
                        .selectable_label(state.view.is_visible(layer), label)
                        .clicked()
                    {
                        events.push(AppIntent::LayerVisibilityToggled { layer });
                        ui.close();
                    }
                }
            });

            ui.menu_button("Help", |ui| {
                if ui.button("About").clicked() {
                    log::info!("StringingTool-Editor v{}", env!("CARGO_PKG_VERSION"));
                    ui.close();
                }
            });
        });
    });

    events
}
