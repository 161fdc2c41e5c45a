//! Optionen-Dialog für Farben, Größen, Picking und Kamera.

use crate::app::{AppIntent, AppState};

/// Zeigt den Options-Dialog und gibt erzeugte Events zurück.
pub fn show_options_dialog(ctx: &egui::Context, state: &AppState) -> Vec<AppIntent> {
    let mut events = Vec::new();

    if !state.show_options_dialog {
        return events;
    }

    // Arbeitskopie der Optionen für Live-Bearbeitung
    let mut opts = state.options.clone();
    let mut changed = false;

    egui::Window::new("Optionen")
        .collapsible(true)
        .resizable(true)
        .default_width(360.0)
        .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
        .show(ctx, |ui| {
            egui::ScrollArea::vertical()
                .max_height(500.0)
                .show(ui, |ui| {
                    // ── Punkte & Forcefields ────────────────────────
                    ui.collapsing("Punkte & Forcefields", |ui| {
                        changed |= drag_value(ui, "Punkt-Radius:", &mut opts.point_radius, 1.0..=100.0, 0.5);
                        changed |= drag_value(
                            ui,
                            "Forcefield-Durchmesser:",
                            &mut opts.forcefield_default_diameter,
                            opts.forcefield_diameter_min..=opts.forcefield_diameter_max,
                            1.0,
                        );
                        changed |= drag_value(
                            ui,
                            "Platzierungsbereich (±):",
                            &mut opts.placement_half_extent,
                            10.0..=5000.0,
                            10.0,
                        );
                        changed |= color_edit(ui, "Punkt:", &mut opts.point_color_default);
                        changed |= color_edit(ui, "Punkt selektiert:", &mut opts.point_color_selected);
                        changed |= color_edit(ui, "Forcefield:", &mut opts.forcefield_color_default);
                        changed |= color_edit(
                            ui,
                            "Forcefield selektiert:",
                            &mut opts.forcefield_color_selected,
                        );
                    });

                    // ── Connections ─────────────────────────────────
                    ui.collapsing("Connections", |ui| {
                        changed |= drag_value(
                            ui,
                            "Breite:",
                            &mut opts.connection_width_default,
                            0.5..=10.0,
                            0.1,
                        );
                        changed |= drag_value(
                            ui,
                            "Breite selektiert:",
                            &mut opts.connection_width_selected,
                            0.5..=10.0,
                            0.1,
                        );
                        changed |= color_edit(ui, "Standard:", &mut opts.connection_color_default);
                        changed |= color_edit(ui, "Selektiert:", &mut opts.connection_color_selected);
                        changed |= color_edit(ui, "Gruppe:", &mut opts.group_color);
                    });

                    // ── Selektion ───────────────────────────────────
                    ui.collapsing("Selektion", |ui| {
                        changed |= drag_value(
                            ui,
                            "Linien-Pick-Radius (px):",
                            &mut opts.line_pick_radius_px,
                            1.0..=30.0,
                            0.5,
                        );
                        changed |= drag_value(
                            ui,
                            "Manipulator-Radius (px):",
                            &mut opts.manipulator_pick_radius_px,
                            4.0..=50.0,
                            0.5,
                        );
                    });

                    // ── Kamera ──────────────────────────────────────
                    ui.collapsing("Kamera", |ui| {
                        changed |= drag_value(
                            ui,
                            "Zoom-Schritt (Scroll):",
                            &mut opts.camera_scroll_zoom_step,
                            1.01..=2.0,
                            0.01,
                        );
                        changed |= drag_value(
                            ui,
                            "Orbit-Geschwindigkeit:",
                            &mut opts.camera_orbit_speed,
                            0.001..=0.05,
                            0.001,
                        );
                    });
                });

            ui.separator();

            ui.horizontal(|ui| {
                if ui.button("Standardwerte").clicked() {
                    events.push(AppIntent::ResetOptionsRequested);
                }
                if ui.button("Schließen").clicked() {
                    events.push(AppIntent::CloseOptionsDialogRequested);
                }
            });
        });

    // Änderungen sofort anwenden (Live-Preview)
    if changed {
        events.push(AppIntent::OptionsChanged { options: opts });
    }

    events
}

/// Hilfsfunktion: beschriftetes DragValue mit Bereich.
fn drag_value(
    ui: &mut egui::Ui,
    label: &str,
    value: &mut f32,
    range: std::ops::RangeInclusive<f32>,
    speed: f64,
) -> bool {
    ui.horizontal(|ui| {
        ui.label(label);
        ui.add(egui::DragValue::new(value).range(range).speed(speed))
            .changed()
    })
    .inner
}

/// Hilfsfunktion: Farb-Editor für [f32; 4] mit Alpha.
fn color_edit(ui: &mut egui::Ui, label: &str, color: &mut [f32; 4]) -> bool {
    let mut changed = false;
    ui.horizontal(|ui| {
        ui.label(label);
        let mut c = egui::Color32::from_rgba_unmultiplied(
            (color[0] * 255.0) as u8,
            (color[1] * 255.0) as u8,
            (color[2] * 255.0) as u8,
            (color[3] * 255.0) as u8,
        );
        if ui.color_edit_button_srgba(&mut c).changed() {
            color[0] = c.r() as f32 / 255.0;
            color[1] = c.g() as f32 / 255.0;
            color[2] = c.b() as f32 / 255.0;
            color[3] = c.a() as f32 / 255.0;
            changed = true;
        }
    });
    changed
}
