//! Gruppen-Ordner: Gruppen anlegen, auflösen, Rigidity einstellen.

use crate::app::{AppIntent, AppState};
use crate::core::ConnectionGroup;

pub(super) fn render_groups_section(
    ui: &mut egui::Ui,
    state: &AppState,
    events: &mut Vec<AppIntent>,
) {
    ui.collapsing("Gruppen", |ui| {
        ui.horizontal(|ui| {
            if ui
                .add_enabled(
                    !state.selection.connections.is_empty(),
                    egui::Button::new("Gruppe bilden"),
                )
                .clicked()
            {
                events.push(AppIntent::CreateGroupRequested);
            }
            if ui
                .add_enabled(state.scene.group_count() > 0, egui::Button::new("Auflösen"))
                .clicked()
            {
                events.push(AppIntent::ClearGroupsRequested);
            }
        });

        for group in state.scene.groups() {
            let mut rigidity = group.rigidity();
            let response = ui.add(
                egui::Slider::new(
                    &mut rigidity,
                    ConnectionGroup::RIGIDITY_MIN..=ConnectionGroup::RIGIDITY_MAX,
                )
                .text(format!("{} ({})", group.name, group.connection_ids.len())),
            );
            if response.changed() {
                events.push(AppIntent::GroupRigidityEdited {
                    group_id: group.id,
                    rigidity,
                });
            }
        }
    });
}
