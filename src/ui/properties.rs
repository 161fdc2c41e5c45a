//! Properties-Panel (rechte Seitenleiste) mit Ordnern für Punkte, Connections,
//! Forcefields, Gruppen, Mesh und Ebenen.

mod groups;
mod position;

use crate::app::{AppIntent, AppState, InteractionMode, Layer};
use crate::core::{Axis, EntityKind};
use crate::shared::options::{MESH_THICKNESS_MAX, MESH_THICKNESS_MIN};

/// Rendert das Properties-Panel und gibt erzeugte Events zurück.
pub fn render_properties_panel(ctx: &egui::Context, state: &AppState) -> Vec<AppIntent> {
    let mut events = Vec::new();

    egui::SidePanel::right("properties_panel")
        .default_width(240.0)
        .min_width(200.0)
        .resizable(true)
        .show(ctx, |ui| {
            ui.heading("Eigenschaften");
            ui.separator();

            egui::ScrollArea::vertical().show(ui, |ui| {
                position::render_position_panel(ui, state, &mut events);
                ui.separator();

                render_points_section(ui, state, &mut events);
                render_connections_section(ui, state, &mut events);
                render_forcefields_section(ui, state, &mut events);
                groups::render_groups_section(ui, state, &mut events);
                render_mesh_section(ui, state, &mut events);
                render_layers_section(ui, state, &mut events);
            });
        });

    events
}

fn selection_label(state: &AppState, kind: EntityKind) -> String {
    format!(
        "{} selektiert / {} gesamt",
        state.selection.count(kind),
        state.count(kind)
    )
}

fn render_points_section(ui: &mut egui::Ui, state: &AppState, events: &mut Vec<AppIntent>) {
    ui.collapsing("Punkte", |ui| {
        ui.label(selection_label(state, EntityKind::Point));

        ui.horizontal(|ui| {
            if ui.button("Hinzufügen").clicked() {
                events.push(AppIntent::AddPointRequested);
            }
            let has_selection = !state.selection.points.is_empty();
            if ui
                .add_enabled(has_selection, egui::Button::new("Entfernen"))
                .clicked()
            {
                events.push(AppIntent::RemovePointsRequested);
            }
        });

        let can_connect = state.selection.points.len() >= 2;
        ui.horizontal(|ui| {
            if ui
                .add_enabled(can_connect, egui::Button::new("Verbinden"))
                .clicked()
            {
                events.push(AppIntent::ConnectPointsRequested);
            }
            if ui.button("Abwählen").clicked() {
                events.push(AppIntent::DeselectKindRequested {
                    kind: EntityKind::Point,
                });
            }
        });

        ui.horizontal(|ui| {
            ui.label("Angleichen:");
            for axis in Axis::ALL {
                if ui
                    .add_enabled(can_connect, egui::Button::new(axis.label()))
                    .clicked()
                {
                    events.push(AppIntent::LevelPointsRequested { axis });
                }
            }
        });
    });
}

fn render_connections_section(ui: &mut egui::Ui, state: &AppState, events: &mut Vec<AppIntent>) {
    ui.collapsing("Connections", |ui| {
        ui.label(selection_label(state, EntityKind::Connection));
        ui.label(format!(
            "Gerade: {} | Kurven: {}",
            state.scene.straight_connections().count(),
            state.scene.curved_connections().count()
        ));

        let has_selection = !state.selection.connections.is_empty();
        ui.horizontal(|ui| {
            if ui
                .add_enabled(
                    has_selection && !state.selection.forcefields.is_empty(),
                    egui::Button::new("Kraft anwenden (S)"),
                )
                .clicked()
            {
                events.push(AppIntent::ApplyForceRequested);
            }
            if ui
                .add_enabled(has_selection, egui::Button::new("Entfernen"))
                .clicked()
            {
                events.push(AppIntent::RemoveConnectionsRequested);
            }
        });
        if ui.button("Abwählen").clicked() {
            events.push(AppIntent::DeselectKindRequested {
                kind: EntityKind::Connection,
            });
        }
    });
}

fn render_forcefields_section(ui: &mut egui::Ui, state: &AppState, events: &mut Vec<AppIntent>) {
    ui.collapsing("Forcefields", |ui| {
        ui.label(selection_label(state, EntityKind::Forcefield));

        let mut edit_mode = state.editor.mode == InteractionMode::ForcefieldEdit;
        if ui.checkbox(&mut edit_mode, "Bearbeitungsmodus (E)").changed() {
            events.push(AppIntent::ToggleForcefieldEditRequested);
        }

        ui.horizontal(|ui| {
            if ui.button("Hinzufügen").clicked() {
                events.push(AppIntent::AddForcefieldRequested);
            }
            let has_selection = !state.selection.forcefields.is_empty();
            if ui
                .add_enabled(has_selection, egui::Button::new("Entfernen"))
                .clicked()
            {
                events.push(AppIntent::RemoveForcefieldsRequested);
            }
            if ui.button("Abwählen").clicked() {
                events.push(AppIntent::DeselectKindRequested {
                    kind: EntityKind::Forcefield,
                });
            }
        });

        let range = state.options.forcefield_diameter_min..=state.options.forcefield_diameter_max;
        for &id in &state.selection.forcefields {
            let Some(forcefield) = state.scene.forcefield(id) else {
                continue;
            };
            let mut diameter = forcefield.diameter();
            let response = ui.add(
                egui::Slider::new(&mut diameter, range.clone())
                    .text(format!("Durchmesser #{}", id)),
            );
            if response.drag_started() || response.gained_focus() {
                events.push(AppIntent::PropertyEditStarted);
            }
            if response.changed() {
                events.push(AppIntent::ForcefieldDiameterEdited { id, diameter });
            }
        }
    });
}

fn render_mesh_section(ui: &mut egui::Ui, state: &AppState, events: &mut Vec<AppIntent>) {
    ui.collapsing("Mesh", |ui| {
        if ui.button("Mesh erzeugen").clicked() {
            events.push(AppIntent::CreateMeshRequested);
        }
        ui.label(format!("Vertices: {}", state.view.mesh.vertices.len()));

        let mut thickness = state.view.mesh.thickness;
        if ui
            .add(egui::Slider::new(&mut thickness, MESH_THICKNESS_MIN..=MESH_THICKNESS_MAX).text("Dicke"))
            .changed()
        {
            events.push(AppIntent::MeshThicknessEdited { thickness });
        }
    });
}

fn render_layers_section(ui: &mut egui::Ui, state: &AppState, events: &mut Vec<AppIntent>) {
    ui.collapsing("Ebenen", |ui| {
        for (layer, label) in [
            (Layer::Points, "Punkte"),
            (Layer::Forcefields, "Forcefields"),
            (Layer::Mesh, "Mesh-Vorschau"),
        ] {
            let mut visible = state.view.is_visible(layer);
            if ui.checkbox(&mut visible, label).changed() {
                events.push(AppIntent::LayerVisibilityToggled { layer });
            }
        }
    });
}
