//! Positions-Panel: X/Y/Z-Felder des zuletzt selektierten Punkts oder Forcefields.

use crate::app::{AppIntent, AppState};
use crate::core::Axis;

/// Zeigt die Live-Position des Panel-Ziels als editierbare Felder.
pub(super) fn render_position_panel(
    ui: &mut egui::Ui,
    state: &AppState,
    events: &mut Vec<AppIntent>,
) {
    let Some(target) = state.editor.position_panel else {
        ui.label("Keine Position ausgewählt");
        return;
    };
    let Some(position) = state.scene.position(target.kind, target.id) else {
        return;
    };

    ui.label(format!("{} #{}", target.kind, target.id));
    egui::Grid::new("position_panel").num_columns(2).show(ui, |ui| {
        for axis in Axis::ALL {
            ui.label(axis.label());
            let mut value = axis.get(position);
            let response = ui.add(egui::DragValue::new(&mut value).speed(1.0));
            if response.drag_started() || response.gained_focus() {
                events.push(AppIntent::PropertyEditStarted);
            }
            if response.changed() {
                events.push(AppIntent::PositionFieldEdited { axis, value });
            }
            ui.end_row();
        }
    });
}
